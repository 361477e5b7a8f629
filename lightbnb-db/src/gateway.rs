//! Query gateway: the application's single entry point to the store
//!
//! Stateless apart from the injected executor. Every operation is one round
//! trip; operations live in `db::repos`, one file per table family.

use crate::db::QueryExecutor;

/// Row cap applied when the caller does not pass a limit
pub const DEFAULT_LIMIT: u32 = 10;

/// Façade over a [`QueryExecutor`], usually a `sqlx::PgPool`
#[derive(Debug, Clone)]
pub struct QueryGateway<E> {
    executor: E,
}

impl<E: QueryExecutor> QueryGateway<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }
}

pub(crate) fn limit_or_default(limit: Option<u32>) -> i64 {
    i64::from(limit.unwrap_or(DEFAULT_LIMIT))
}
