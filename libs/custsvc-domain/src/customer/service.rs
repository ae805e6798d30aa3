//! Customer service - Business logic orchestration
//!
//! The service exists to keep the transport layer transport-pure and the
//! persistence layer storage-pure: it owns exactly one rule, pagination
//! normalization, and forwards everything else to the repository port
//! unchanged.

use std::future::Future;

use super::{Customer, CustomerError, CustomerUsecase, Nationality};
use crate::storage::CustomerRepository;

/// Page size applied when the caller supplies a non-positive size
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Business-operations layer over any `CustomerRepository`
///
/// ## Static Dispatch
///
/// The service is generic over any `CustomerRepository` implementation.
/// The compiler generates specialized versions for each concrete type,
/// resulting in zero-cost abstractions.
pub struct CustomerService<R> {
    repository: R,
}

impl<R> CustomerService<R>
where
    R: CustomerRepository,
{
    /// Create a new service over the given repository
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl<R> CustomerUsecase for CustomerService<R>
where
    R: CustomerRepository,
{
    /// List a page of customers
    ///
    /// Normalizes pagination before touching storage: effective size is
    /// `DEFAULT_PAGE_SIZE` when `size <= 0`, effective page is 1 when
    /// `page <= 0`, and the offset is `(page - 1) * size`. Out-of-range
    /// values are never an error here.
    fn list(
        &self,
        search: &str,
        page: i64,
        size: i64,
    ) -> impl Future<Output = Result<(Vec<Customer>, i64), CustomerError>> + Send {
        let size = if size <= 0 { DEFAULT_PAGE_SIZE } else { size };
        let page = if page <= 0 { 1 } else { page };
        let offset = (page - 1) * size;

        self.repository.list_customers(search, size, offset)
    }

    fn get(
        &self,
        id: i32,
    ) -> impl Future<Output = Result<Option<Customer>, CustomerError>> + Send {
        self.repository.get_customer(id)
    }

    fn create(
        &self,
        customer: &Customer,
    ) -> impl Future<Output = Result<i32, CustomerError>> + Send {
        self.repository.create_customer(customer)
    }

    fn update(
        &self,
        id: i32,
        customer: &Customer,
    ) -> impl Future<Output = Result<(), CustomerError>> + Send {
        self.repository.update_customer(id, customer)
    }

    fn delete(&self, id: i32) -> impl Future<Output = Result<(), CustomerError>> + Send {
        self.repository.delete_customer(id)
    }

    fn list_nationalities(
        &self,
    ) -> impl Future<Output = Result<Vec<Nationality>, CustomerError>> + Send {
        self.repository.list_nationalities()
    }
}
