//! PostgreSQL storage adapter for the customer service
//!
//! Implements the domain's `CustomerRepository` port over a pooled sqlx
//! connection. All storage-level failures are translated into domain error
//! kinds here; nothing above this crate sees a sqlx type.

pub mod infrastructure;

pub use infrastructure::{new_pool, PgCustomerRepository};
