//! PostgreSQL repository implementation
//!
//! This module implements the `CustomerRepository` trait against PostgreSQL.
//! It owns the SQL statements, transaction scoping, and the translation of
//! storage-level constraint failures into domain error kinds.

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::{error, info, instrument, warn};

use custsvc_domain::customer::{Customer, CustomerError, FamilyMember, Nationality};
use custsvc_domain::storage::CustomerRepository;

/// PostgreSQL-backed implementation of the `CustomerRepository` port
///
/// ## Transactions
///
/// Create and update each run inside a single transaction scoped to the
/// calling request. A transaction dropped before commit rolls back, so no
/// failure path leaves partial rows visible.
///
/// ## Error Handling
///
/// Unique-constraint violations become `CustomerError::Conflict`; affected-row
/// checks produce `CustomerError::NotFound`; every other sqlx error collapses
/// into `CustomerError::StorageFailure` with the detail kept in the logs.
#[derive(Clone)]
pub struct PgCustomerRepository {
    pool: PgPool,
}

impl PgCustomerRepository {
    /// Create a new repository over an established pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Translate a sqlx error into the domain vocabulary, logging the detail
/// that is never echoed to callers.
fn translate(operation: &'static str, err: sqlx::Error) -> CustomerError {
    if let sqlx::Error::Database(ref db) = err {
        if db.is_unique_violation() {
            warn!(operation, "unique constraint violated");
            return CustomerError::Conflict;
        }
    }
    error!(operation, error = %err, "storage operation failed");
    CustomerError::storage_failure(err.to_string())
}

fn customer_from_row(row: &PgRow) -> Result<Customer, sqlx::Error> {
    Ok(Customer {
        id: row.try_get("cst_id")?,
        nationality_id: row.try_get("nationality_id")?,
        name: row.try_get("cst_name")?,
        dob: row.try_get("cst_dob")?,
        phone_num: row.try_get("cst_phonenum")?,
        email: row.try_get("cst_email")?,
        family: Vec::new(),
    })
}

fn family_member_from_row(row: &PgRow) -> Result<FamilyMember, sqlx::Error> {
    Ok(FamilyMember {
        id: row.try_get("fl_id")?,
        customer_id: row.try_get("cst_id")?,
        relation: row.try_get("fl_relation")?,
        name: row.try_get("fl_name")?,
        dob: row.try_get("fl_dob")?,
    })
}

fn nationality_from_row(row: &PgRow) -> Result<Nationality, sqlx::Error> {
    Ok(Nationality {
        id: row.try_get("nationality_id")?,
        name: row.try_get("nationality_name")?,
        code: row.try_get("nationality_code")?,
    })
}

impl CustomerRepository for PgCustomerRepository {
    #[instrument(skip(self))]
    fn list_customers(
        &self,
        search: &str,
        limit: i64,
        offset: i64,
    ) -> impl std::future::Future<Output = Result<(Vec<Customer>, i64), CustomerError>> + Send
    {
        let pool = self.pool.clone();
        let search = search.trim().to_string();

        async move {
            let rows = sqlx::query(
                "SELECT cst_id, nationality_id, cst_name, cst_dob, cst_phonenum, cst_email \
                 FROM customer \
                 WHERE ($1 = '' OR cst_name ILIKE '%'||$1||'%' OR cst_email ILIKE '%'||$1||'%') \
                 ORDER BY cst_id DESC LIMIT $2 OFFSET $3",
            )
            .bind(&search)
            .bind(limit)
            .bind(offset)
            .fetch_all(&pool)
            .await
            .map_err(|err| translate("list_customers", err))?;

            let mut customers = Vec::with_capacity(rows.len());
            for row in &rows {
                customers.push(
                    customer_from_row(row).map_err(|err| translate("list_customers", err))?,
                );
            }

            // Same predicate as the page query so the total stays consistent
            // with the page contents.
            let total: i64 = sqlx::query_scalar(
                "SELECT COUNT(*) FROM customer \
                 WHERE ($1 = '' OR cst_name ILIKE '%'||$1||'%' OR cst_email ILIKE '%'||$1||'%')",
            )
            .bind(&search)
            .fetch_one(&pool)
            .await
            .map_err(|err| translate("list_customers", err))?;

            Ok((customers, total))
        }
    }

    #[instrument(skip(self))]
    fn get_customer(
        &self,
        id: i32,
    ) -> impl std::future::Future<Output = Result<Option<Customer>, CustomerError>> + Send {
        let pool = self.pool.clone();

        async move {
            let row = sqlx::query(
                "SELECT cst_id, nationality_id, cst_name, cst_dob, cst_phonenum, cst_email \
                 FROM customer WHERE cst_id = $1",
            )
            .bind(id)
            .fetch_optional(&pool)
            .await
            .map_err(|err| translate("get_customer", err))?;

            let Some(row) = row else {
                return Ok(None);
            };
            let mut customer =
                customer_from_row(&row).map_err(|err| translate("get_customer", err))?;

            let family_rows = sqlx::query(
                "SELECT fl_id, cst_id, fl_relation, fl_name, fl_dob \
                 FROM family_list WHERE cst_id = $1 ORDER BY fl_id",
            )
            .bind(id)
            .fetch_all(&pool)
            .await
            .map_err(|err| translate("get_customer", err))?;

            customer.family.reserve(family_rows.len());
            for row in &family_rows {
                customer.family.push(
                    family_member_from_row(row).map_err(|err| translate("get_customer", err))?,
                );
            }

            Ok(Some(customer))
        }
    }

    #[instrument(skip(self, customer), fields(email = %customer.email, family = customer.family.len()))]
    fn create_customer(
        &self,
        customer: &Customer,
    ) -> impl std::future::Future<Output = Result<i32, CustomerError>> + Send {
        let pool = self.pool.clone();
        let customer = customer.clone();

        async move {
            let mut tx = pool
                .begin()
                .await
                .map_err(|err| translate("create_customer", err))?;

            let id: i32 = sqlx::query_scalar(
                "INSERT INTO customer (nationality_id, cst_name, cst_dob, cst_phonenum, cst_email) \
                 VALUES ($1, $2, $3, $4, $5) RETURNING cst_id",
            )
            .bind(customer.nationality_id)
            .bind(&customer.name)
            .bind(customer.dob)
            .bind(&customer.phone_num)
            .bind(&customer.email)
            .fetch_one(&mut *tx)
            .await
            .map_err(|err| translate("create_customer", err))?;

            for member in &customer.family {
                sqlx::query(
                    "INSERT INTO family_list (cst_id, fl_relation, fl_name, fl_dob) \
                     VALUES ($1, $2, $3, $4)",
                )
                .bind(id)
                .bind(&member.relation)
                .bind(&member.name)
                .bind(member.dob)
                .execute(&mut *tx)
                .await
                .map_err(|err| translate("create_customer", err))?;
            }

            tx.commit()
                .await
                .map_err(|err| translate("create_customer", err))?;

            info!(customer_id = id, "customer created");
            Ok(id)
        }
    }

    #[instrument(skip(self, customer), fields(email = %customer.email, family = customer.family.len()))]
    fn update_customer(
        &self,
        id: i32,
        customer: &Customer,
    ) -> impl std::future::Future<Output = Result<(), CustomerError>> + Send {
        let pool = self.pool.clone();
        let customer = customer.clone();

        async move {
            let mut tx = pool
                .begin()
                .await
                .map_err(|err| translate("update_customer", err))?;

            let updated = sqlx::query(
                "UPDATE customer \
                 SET nationality_id = $1, cst_name = $2, cst_dob = $3, cst_phonenum = $4, cst_email = $5 \
                 WHERE cst_id = $6",
            )
            .bind(customer.nationality_id)
            .bind(&customer.name)
            .bind(customer.dob)
            .bind(&customer.phone_num)
            .bind(&customer.email)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|err| translate("update_customer", err))?;

            // No row matched: report not-found instead of silently succeeding.
            // The dropped transaction rolls back.
            if updated.rows_affected() == 0 {
                return Err(CustomerError::NotFound);
            }

            sqlx::query("DELETE FROM family_list WHERE cst_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(|err| translate("update_customer", err))?;

            for member in &customer.family {
                sqlx::query(
                    "INSERT INTO family_list (cst_id, fl_relation, fl_name, fl_dob) \
                     VALUES ($1, $2, $3, $4)",
                )
                .bind(id)
                .bind(&member.relation)
                .bind(&member.name)
                .bind(member.dob)
                .execute(&mut *tx)
                .await
                .map_err(|err| translate("update_customer", err))?;
            }

            tx.commit()
                .await
                .map_err(|err| translate("update_customer", err))?;

            info!(customer_id = id, "customer updated");
            Ok(())
        }
    }

    #[instrument(skip(self))]
    fn delete_customer(
        &self,
        id: i32,
    ) -> impl std::future::Future<Output = Result<(), CustomerError>> + Send {
        let pool = self.pool.clone();

        async move {
            let deleted = sqlx::query("DELETE FROM customer WHERE cst_id = $1")
                .bind(id)
                .execute(&pool)
                .await
                .map_err(|err| translate("delete_customer", err))?;

            if deleted.rows_affected() == 0 {
                return Err(CustomerError::NotFound);
            }

            info!(customer_id = id, "customer deleted");
            Ok(())
        }
    }

    #[instrument(skip(self))]
    fn list_nationalities(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Nationality>, CustomerError>> + Send {
        let pool = self.pool.clone();

        async move {
            let rows = sqlx::query(
                "SELECT nationality_id, nationality_name, nationality_code \
                 FROM nationality ORDER BY nationality_name",
            )
            .fetch_all(&pool)
            .await
            .map_err(|err| translate("list_nationalities", err))?;

            let mut nationalities = Vec::with_capacity(rows.len());
            for row in &rows {
                nationalities.push(
                    nationality_from_row(row)
                        .map_err(|err| translate("list_nationalities", err))?,
                );
            }

            Ok(nationalities)
        }
    }
}
