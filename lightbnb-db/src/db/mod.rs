//! Database layer - statements, execution seam, pool and repositories
//!
//! # Design Principles
//!
//! - One round trip per operation, no transactions, no retries
//! - Placeholders are numbered by the builder, never by hand
//! - Rely on DB constraints, surface violations - no check-then-insert

pub mod executor;
pub mod pool;
pub mod repos;
pub mod statement;

pub use executor::{QueryExecutor, Record};
pub use pool::create_pool;
pub use statement::{SqlValue, Statement, StatementBuilder};
