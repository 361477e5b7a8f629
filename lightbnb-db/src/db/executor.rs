//! Execution seam between the gateway and the connection pool
//!
//! The gateway only needs "run this statement, give me rows". Production
//! wiring implements [`QueryExecutor`] for `sqlx::PgPool` (see `pool.rs`);
//! tests swap in a fake that records statements.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::FromRow;

use super::statement::Statement;
use crate::error::Result;

/// A row type the gateway can return: anything decodable from a Postgres row.
pub trait Record: for<'r> FromRow<'r, PgRow> + FixtureDecode + Send + Unpin + 'static {}

impl<T> Record for T where T: for<'r> FromRow<'r, PgRow> + FixtureDecode + Send + Unpin + 'static
{}

/// Extra decoding the in-crate fake executor needs to replay JSON rows.
/// Empty outside unit tests, so callers only ever implement `FromRow`.
#[doc(hidden)]
#[cfg(test)]
pub trait FixtureDecode: serde::de::DeserializeOwned {}

#[cfg(test)]
impl<T: serde::de::DeserializeOwned> FixtureDecode for T {}

#[doc(hidden)]
#[cfg(not(test))]
pub trait FixtureDecode {}

#[cfg(not(test))]
impl<T> FixtureDecode for T {}

/// One round trip to the store per call.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// All rows produced by the statement.
    async fn fetch_all<T: Record>(&self, statement: &Statement) -> Result<Vec<T>>;

    /// First row, or `None` when the statement produced none.
    async fn fetch_optional<T: Record>(&self, statement: &Statement) -> Result<Option<T>>;

    /// Exactly one row (`INSERT … RETURNING`). Zero rows is an error.
    async fn fetch_one<T: Record>(&self, statement: &Statement) -> Result<T>;
}
