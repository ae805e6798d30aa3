//! Port (trait definition) for the persistence layer
//!
//! This module defines the contract that storage adapters must implement.
//! Following hexagonal architecture, the domain defines what it needs, and
//! the infrastructure provides implementations.
//!
//! ## Static Dispatch
//!
//! We use native Rust async traits with `impl Future` return types instead of
//! `async_trait` to ensure zero-cost abstractions and static dispatch.

use std::future::Future;

use crate::customer::{Customer, CustomerError, Nationality};

/// Port for customer persistence operations
///
/// This trait abstracts away the storage backend. Implementations must
/// handle:
/// - Parameterized reads and transactional writes
/// - Converting infrastructure errors to `CustomerError` kinds, keeping only
///   conflict and not-found distinguishable from opaque storage failures
/// - Atomicity: a write that fails after its first statement leaves no
///   partial rows visible
pub trait CustomerRepository: Send + Sync {
    /// List customers matching `search` against name or email,
    /// case-insensitively (empty search matches all)
    ///
    /// Returns the requested page ordered by id descending together with the
    /// total number of matches across all pages. Page contents and total must
    /// be produced by the same filter predicate.
    fn list_customers(
        &self,
        search: &str,
        limit: i64,
        offset: i64,
    ) -> impl Future<Output = Result<(Vec<Customer>, i64), CustomerError>> + Send;

    /// Fetch one customer by id with its family list ordered by
    /// family-member id ascending
    ///
    /// Returns `Ok(None)` when the id does not exist. Absence is an explicit
    /// signal, not an error; `Err` is reserved for storage-access failures.
    fn get_customer(
        &self,
        id: i32,
    ) -> impl Future<Output = Result<Option<Customer>, CustomerError>> + Send;

    /// Insert a customer row and its family rows in one transaction
    ///
    /// Storage assigns the customer id, returned on success. Family rows are
    /// inserted in the given order referencing that id.
    ///
    /// # Errors
    ///
    /// - `CustomerError::Conflict` on a duplicate-email constraint violation
    /// - `CustomerError::StorageFailure` for any other failure; in both cases
    ///   the transaction is rolled back with no partial writes
    fn create_customer(
        &self,
        customer: &Customer,
    ) -> impl Future<Output = Result<i32, CustomerError>> + Send;

    /// Update a customer's scalar fields and replace its entire family list
    /// in one transaction
    ///
    /// # Errors
    ///
    /// - `CustomerError::NotFound` when no customer row was affected
    /// - `CustomerError::Conflict` on a duplicate-email constraint violation
    /// - `CustomerError::StorageFailure` otherwise
    fn update_customer(
        &self,
        id: i32,
        customer: &Customer,
    ) -> impl Future<Output = Result<(), CustomerError>> + Send;

    /// Delete a customer row
    ///
    /// Family rows are removed by the referential cascade owned by the
    /// storage schema, not by explicit statements here.
    ///
    /// # Errors
    ///
    /// Returns `CustomerError::NotFound` when no row was affected, distinct
    /// from a storage failure.
    fn delete_customer(&self, id: i32) -> impl Future<Output = Result<(), CustomerError>> + Send;

    /// List all nationalities ordered by name ascending
    fn list_nationalities(
        &self,
    ) -> impl Future<Output = Result<Vec<Nationality>, CustomerError>> + Send;
}
