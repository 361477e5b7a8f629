//! lightbnb-db: data-access layer for the LightBnB rental application
//!
//! Translates application requests (look up a user, list a guest's
//! reservations, search properties, register users and properties) into
//! parameterized PostgreSQL statements and shapes rows into typed records.
//!
//! ```ignore
//! let pool = lightbnb_db::create_pool(&DbConfig::from_env()?).await?;
//! let gateway = QueryGateway::new(pool);
//! let cheapest = gateway.get_all_properties(&PropertySearch::default(), None).await?;
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod gateway;
pub mod models;

#[cfg(test)]
mod testing;

pub use config::DbConfig;
pub use db::{create_pool, QueryExecutor, Record, SqlValue, Statement, StatementBuilder};
pub use db::repos::properties::search_statement;
pub use error::{ConfigError, DataAccessError, Result};
pub use gateway::{QueryGateway, DEFAULT_LIMIT};
pub use models::{
    NewProperty, NewUser, Property, PropertyListing, PropertySearch, ReservationListing, User,
};
