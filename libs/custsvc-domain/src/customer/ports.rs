//! Port trait for the customer usecase layer
//!
//! This module defines the trait that abstracts the business operations the
//! transport layer depends on. The concrete `CustomerService` in `service.rs`
//! provides the implementation; handlers stay generic over the port so tests
//! can substitute hand-written doubles.

use std::future::Future;

use crate::customer::{Customer, CustomerError, Nationality};

/// Port trait for customer business operations
///
/// The transport layer calls through this contract only; it never sees the
/// repository. The one piece of business logic behind it is pagination
/// normalization in `list` - everything else forwards to storage unchanged.
pub trait CustomerUsecase: Send + Sync {
    /// List customers for a 1-based page
    ///
    /// Non-positive `page` and `size` are normalized (`page -> 1`,
    /// `size -> 10`) rather than rejected. Returns the page rows and the
    /// total match count across all pages.
    fn list(
        &self,
        search: &str,
        page: i64,
        size: i64,
    ) -> impl Future<Output = Result<(Vec<Customer>, i64), CustomerError>> + Send;

    /// Fetch one customer by id, `Ok(None)` when absent
    fn get(
        &self,
        id: i32,
    ) -> impl Future<Output = Result<Option<Customer>, CustomerError>> + Send;

    /// Create a customer with its full family list, returning the assigned id
    ///
    /// # Errors
    ///
    /// - `CustomerError::Conflict` when the email is already taken
    /// - `CustomerError::StorageFailure` for any other storage failure
    fn create(
        &self,
        customer: &Customer,
    ) -> impl Future<Output = Result<i32, CustomerError>> + Send;

    /// Replace a customer's scalar fields and entire family list
    ///
    /// # Errors
    ///
    /// - `CustomerError::NotFound` when the id does not exist
    /// - `CustomerError::Conflict` when the new email is already taken
    fn update(
        &self,
        id: i32,
        customer: &Customer,
    ) -> impl Future<Output = Result<(), CustomerError>> + Send;

    /// Delete a customer by id
    ///
    /// # Errors
    ///
    /// Returns `CustomerError::NotFound` when no such customer exists.
    fn delete(&self, id: i32) -> impl Future<Output = Result<(), CustomerError>> + Send;

    /// List all nationalities ordered by name
    fn list_nationalities(
        &self,
    ) -> impl Future<Output = Result<Vec<Nationality>, CustomerError>> + Send;
}
