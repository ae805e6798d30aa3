//! Connection pool construction
//!
//! The pool is created once at startup and passed explicitly into the
//! repository constructor; it is never reached through a global.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};

/// Maximum number of pooled connections
const MAX_CONNECTIONS: u32 = 10;
/// Connections kept warm even when idle
const MIN_CONNECTIONS: u32 = 2;
/// Connections are recycled after this lifetime
const MAX_LIFETIME: Duration = Duration::from_secs(3600);
/// How long establishment may block before giving up
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Build the bounded connection pool for the given DSN
///
/// Checkout blocks the requesting task until a connection is available or
/// the acquire timeout elapses.
pub async fn new_pool(dsn: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .min_connections(MIN_CONNECTIONS)
        .max_lifetime(MAX_LIFETIME)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(dsn)
        .await
}
