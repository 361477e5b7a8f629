//! `QueryGateway` operations, grouped by table
//!
//! Each file adds an `impl` block to the gateway plus the statement
//! constructors it uses, so the generated SQL can be inspected without a
//! database.

pub mod properties;
pub mod reservations;
pub mod users;
