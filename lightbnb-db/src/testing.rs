//! Recording executor for unit tests
//!
//! Captures every statement it is asked to run and replays queued
//! responses: JSON rows decoded into the requested record type, or an error.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::db::{QueryExecutor, Record, Statement};
use crate::error::{DataAccessError, Result};

type Response = std::result::Result<Vec<Value>, DataAccessError>;

#[derive(Default)]
pub struct FakeExecutor {
    responses: Mutex<VecDeque<Response>>,
    statements: Mutex<Vec<Statement>>,
}

impl FakeExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue rows for the next call.
    pub fn with_rows(self, rows: Vec<Value>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(rows));
        self
    }

    /// Queue a failure for the next call.
    pub fn with_error(self, err: DataAccessError) -> Self {
        self.responses.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn statements(&self) -> Vec<Statement> {
        self.statements.lock().unwrap().clone()
    }

    pub fn last_statement(&self) -> Statement {
        self.statements
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no statement executed")
    }

    fn respond<T: Record>(&self, statement: &Statement) -> Result<Vec<T>> {
        self.statements.lock().unwrap().push(statement.clone());
        let rows = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))?;

        Ok(rows
            .into_iter()
            .map(|row| serde_json::from_value(row).expect("fixture row does not match record"))
            .collect())
    }
}

#[async_trait]
impl QueryExecutor for FakeExecutor {
    async fn fetch_all<T: Record>(&self, statement: &Statement) -> Result<Vec<T>> {
        self.respond(statement)
    }

    async fn fetch_optional<T: Record>(&self, statement: &Statement) -> Result<Option<T>> {
        Ok(self.respond(statement)?.into_iter().next())
    }

    async fn fetch_one<T: Record>(&self, statement: &Statement) -> Result<T> {
        self.respond(statement)?
            .into_iter()
            .next()
            .ok_or(DataAccessError::Database(sqlx::Error::RowNotFound))
    }
}

/// A complete `properties` row as JSON, for fixtures.
pub fn property_row(id: i32, city: &str, cost_per_night: i32) -> Value {
    serde_json::json!({
        "id": id,
        "owner_id": 1,
        "title": format!("Property {id}"),
        "description": "description",
        "thumbnail_photo_url": "https://images.pexels.com/photos/2086676/pexels-photo-2086676.jpeg?auto=compress&cs=tinysrgb&h=350",
        "cover_photo_url": "https://images.pexels.com/photos/2086676/pexels-photo-2086676.jpeg",
        "cost_per_night": cost_per_night,
        "parking_spaces": 2,
        "number_of_bathrooms": 1,
        "number_of_bedrooms": 3,
        "country": "Canada",
        "street": "651 Nami Road",
        "city": city,
        "province": "British Columbia",
        "post_code": "96059",
        "active": true
    })
}
