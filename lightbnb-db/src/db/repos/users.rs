//! User lookups and registration
//!
//! - lookups: exact match, zero rows is `Ok(None)`
//! - create: INSERT … RETURNING, duplicate email surfaces as a constraint violation

use tracing::debug;

use crate::db::{QueryExecutor, Statement};
use crate::error::Result;
use crate::gateway::QueryGateway;
use crate::models::{NewUser, User};

const USER_COLUMNS: &str = "id, name, email, password";

pub fn user_by_email_statement(email: &str) -> Statement {
    Statement::new(format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1")).bind(email)
}

pub fn user_by_id_statement(id: i32) -> Statement {
    Statement::new(format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1")).bind(id)
}

pub fn insert_user_statement(user: &NewUser) -> Statement {
    Statement::new(format!(
        "INSERT INTO users (name, email, password) VALUES ($1, $2, $3) RETURNING {USER_COLUMNS}"
    ))
    .bind(user.name.as_str())
    .bind(user.email.as_str())
    .bind(user.password.as_str())
}

impl<E: QueryExecutor> QueryGateway<E> {
    /// Get a single user by email. `None` when no user has that email.
    pub async fn get_user_with_email(&self, email: &str) -> Result<Option<User>> {
        debug!("get_user_with_email");
        self.executor()
            .fetch_optional(&user_by_email_statement(email))
            .await
    }

    /// Get a single user by id. `None` when the id does not exist.
    pub async fn get_user_with_id(&self, id: i32) -> Result<Option<User>> {
        debug!(id, "get_user_with_id");
        self.executor().fetch_optional(&user_by_id_statement(id)).await
    }

    /// Insert a user and return the stored row, including its generated id.
    ///
    /// No local validation: a duplicate email comes back from the store as
    /// [`DataAccessError::ConstraintViolation`](crate::DataAccessError::ConstraintViolation).
    pub async fn add_user(&self, user: &NewUser) -> Result<User> {
        debug!("add_user");
        self.executor().fetch_one(&insert_user_statement(user)).await
    }
}
