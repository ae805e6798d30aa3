//! Storage ports
//!
//! Contracts that persistence adapters must implement.

mod ports;

pub use ports::CustomerRepository;
