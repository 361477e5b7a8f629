//! Database connection pool management
//!
//! Uses sqlx PgPool. The pool owns connection lifecycle, acquisition and
//! backpressure; the gateway only borrows it to run statements.

use async_trait::async_trait;
use sqlx::postgres::{PgArguments, PgPoolOptions};
use sqlx::query::QueryAs;
use sqlx::{PgPool, Postgres};
use tracing::{debug, info};

use super::executor::{QueryExecutor, Record};
use super::statement::{SqlValue, Statement};
use crate::config::DbConfig;
use crate::error::{DataAccessError, Result};

/// Create a PostgreSQL connection pool from configuration.
///
/// # Errors
///
/// Returns an error if the connection options are invalid or the first
/// connection cannot be established.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DbConfig::from_env()?).await?;
/// let gateway = QueryGateway::new(pool);
/// ```
pub async fn create_pool(config: &DbConfig) -> Result<PgPool> {
    info!(
        "Connecting to database (max_connections={})",
        config.max_connections
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect_with(config.connect_options()?)
        .await?;

    Ok(pool)
}

fn bind_params<'q, O>(
    mut query: QueryAs<'q, Postgres, O, PgArguments>,
    params: &'q [SqlValue],
) -> QueryAs<'q, Postgres, O, PgArguments> {
    for param in params {
        query = match param {
            SqlValue::Int(v) => query.bind(*v),
            SqlValue::BigInt(v) => query.bind(*v),
            SqlValue::Float(v) => query.bind(*v),
            SqlValue::Text(v) => query.bind(v.as_str()),
        };
    }
    query
}

fn log_failure(statement: &Statement, err: sqlx::Error) -> DataAccessError {
    let err = DataAccessError::from(err);
    debug!(sql = statement.sql(), error = %err, "statement failed");
    err
}

#[async_trait]
impl QueryExecutor for PgPool {
    async fn fetch_all<T: Record>(&self, statement: &Statement) -> Result<Vec<T>> {
        debug!(params = statement.params().len(), "fetch_all");
        bind_params(sqlx::query_as::<_, T>(statement.sql()), statement.params())
            .fetch_all(self)
            .await
            .map_err(|err| log_failure(statement, err))
    }

    async fn fetch_optional<T: Record>(&self, statement: &Statement) -> Result<Option<T>> {
        debug!(params = statement.params().len(), "fetch_optional");
        bind_params(sqlx::query_as::<_, T>(statement.sql()), statement.params())
            .fetch_optional(self)
            .await
            .map_err(|err| log_failure(statement, err))
    }

    async fn fetch_one<T: Record>(&self, statement: &Statement) -> Result<T> {
        debug!(params = statement.params().len(), "fetch_one");
        bind_params(sqlx::query_as::<_, T>(statement.sql()), statement.params())
            .fetch_one(self)
            .await
            .map_err(|err| log_failure(statement, err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p lightbnb-db -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let config = DbConfig::from_env().expect("config");
        let pool = create_pool(&config).await.expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn binds_every_value_kind() {
        let config = DbConfig::from_env().expect("config");
        let pool = create_pool(&config).await.expect("pool creation failed");

        let stmt = Statement::new("SELECT $1::int4 AS a, $2::int8 AS b, $3::float8 AS c, $4::text AS d")
            .bind(1_i32)
            .bind(2_i64)
            .bind(3.5_f64)
            .bind("four");

        #[derive(sqlx::FromRow, serde::Deserialize)]
        struct Row {
            a: i32,
            b: i64,
            c: f64,
            d: String,
        }

        let row: Row = pool.fetch_one(&stmt).await.expect("query failed");
        assert_eq!((row.a, row.b, row.c, row.d.as_str()), (1, 2, 3.5, "four"));
    }

    #[tokio::test]
    async fn unreachable_database_is_reported() {
        let config = DbConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            acquire_timeout_secs: 1,
            ..DbConfig::default()
        };

        let err = create_pool(&config).await.unwrap_err();
        assert!(!err.is_constraint_violation());
    }
}
