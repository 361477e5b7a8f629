use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted `users` row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Credential hash, stored verbatim. Never serialized outward.
    #[serde(skip_serializing)]
    pub password: String,
}

/// Payload for creating a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}
