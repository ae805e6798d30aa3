//! DTOs for the HTTP API
//!
//! Request payloads are decoded leniently (missing fields become `None`) so
//! that required-field failures surface as validation errors, not decode
//! errors. Responses re-render every date as `YYYY-MM-DD`.

pub mod customer;
pub mod error;
pub mod nationality;
