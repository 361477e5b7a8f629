//! Reservation listing for a guest
//!
//! Joins reservations → properties → property_reviews in a single query,
//! grouped by (property, reservation) so the review join cannot duplicate rows.

use tracing::debug;

use crate::db::{QueryExecutor, Statement};
use crate::error::Result;
use crate::gateway::{limit_or_default, QueryGateway};
use crate::models::{ReservationListing, PROPERTY_COLUMNS};

pub fn guest_reservations_statement(guest_id: i32, limit: Option<u32>) -> Statement {
    Statement::new(format!(
        r#"
        SELECT
            reservations.id AS reservation_id,
            reservations.guest_id,
            reservations.start_date,
            reservations.end_date,
            {PROPERTY_COLUMNS},
            AVG(property_reviews.rating)::float8 AS average_rating
        FROM reservations
        JOIN properties ON reservations.property_id = properties.id
        JOIN property_reviews ON properties.id = property_reviews.property_id
        WHERE reservations.guest_id = $1
        GROUP BY properties.id, reservations.id
        ORDER BY reservations.start_date ASC
        LIMIT $2
        "#
    ))
    .bind(guest_id)
    .bind(limit_or_default(limit))
}

impl<E: QueryExecutor> QueryGateway<E> {
    /// Reservations made by `guest_id`, earliest stay first, at most `limit`
    /// rows (default 10). A guest with no reservations gets an empty list.
    pub async fn get_all_reservations(
        &self,
        guest_id: i32,
        limit: Option<u32>,
    ) -> Result<Vec<ReservationListing>> {
        debug!(guest_id, ?limit, "get_all_reservations");
        self.executor()
            .fetch_all(&guest_reservations_statement(guest_id, limit))
            .await
    }
}
