//! Infrastructure implementations of the domain storage port

mod pg_repository;
mod pool;

pub use pg_repository::PgCustomerRepository;
pub use pool::new_pool;
