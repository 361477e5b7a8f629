//! Property search and creation
//!
//! The search statement is assembled from whichever filters are present.
//! Clause order, and therefore parameter order, is fixed:
//! city, minimum cost, maximum cost, owner (WHERE), minimum rating (HAVING),
//! limit. Absent filters leave no gap in the placeholder sequence.

use tracing::debug;

use crate::db::{QueryExecutor, SqlValue, Statement, StatementBuilder};
use crate::error::Result;
use crate::gateway::{limit_or_default, QueryGateway};
use crate::models::{NewProperty, Property, PropertyListing, PropertySearch, PROPERTY_COLUMNS};

/// Wrap a value for a literal substring `LIKE` match.
fn like_contains(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// WHERE predicates for the filters present, in binding order.
fn search_predicates(search: &PropertySearch) -> Vec<(&'static str, SqlValue)> {
    let mut predicates = Vec::new();

    if let Some(city) = search.city() {
        predicates.push(("properties.city LIKE ", SqlValue::Text(like_contains(city))));
    }
    if let Some(cents) = search.minimum_cost_cents() {
        predicates.push(("properties.cost_per_night > ", SqlValue::BigInt(cents)));
    }
    if let Some(cents) = search.maximum_cost_cents() {
        predicates.push(("properties.cost_per_night < ", SqlValue::BigInt(cents)));
    }
    if let Some(owner_id) = search.owner_id {
        predicates.push(("properties.owner_id = ", SqlValue::Int(owner_id)));
    }

    predicates
}

/// Build the property search statement.
pub fn search_statement(search: &PropertySearch, limit: Option<u32>) -> Statement {
    let mut builder = StatementBuilder::new(format!(
        "SELECT {PROPERTY_COLUMNS}, AVG(property_reviews.rating)::float8 AS average_rating \
         FROM properties \
         JOIN property_reviews ON property_reviews.property_id = properties.id"
    ));

    builder.push_predicates(" WHERE ", search_predicates(search));
    builder.push(" GROUP BY properties.id");

    // Filters on the aggregate, so it cannot live in WHERE
    if let Some(rating) = search.minimum_rating {
        builder
            .push(" HAVING AVG(property_reviews.rating) >= ")
            .push_bind(rating);
    }

    builder
        .push(" ORDER BY properties.cost_per_night ASC LIMIT ")
        .push_bind(limit_or_default(limit));

    builder.build()
}

pub fn insert_property_statement(property: &NewProperty) -> Statement {
    Statement::new(format!(
        r#"
        INSERT INTO properties (
            owner_id, title, description, thumbnail_photo_url, cover_photo_url,
            cost_per_night, street, city, province, post_code, country,
            parking_spaces, number_of_bathrooms, number_of_bedrooms
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
        RETURNING {}
        "#,
        PROPERTY_COLUMNS.replace("properties.", "")
    ))
    .bind(property.owner_id)
    .bind(property.title.as_str())
    .bind(property.description.as_str())
    .bind(property.thumbnail_photo_url.as_str())
    .bind(property.cover_photo_url.as_str())
    .bind(property.cost_per_night)
    .bind(property.street.as_str())
    .bind(property.city.as_str())
    .bind(property.province.as_str())
    .bind(property.post_code.as_str())
    .bind(property.country.as_str())
    .bind(property.parking_spaces)
    .bind(property.number_of_bathrooms)
    .bind(property.number_of_bedrooms)
}

impl<E: QueryExecutor> QueryGateway<E> {
    /// Search properties, cheapest first, at most `limit` rows (default 10).
    pub async fn get_all_properties(
        &self,
        search: &PropertySearch,
        limit: Option<u32>,
    ) -> Result<Vec<PropertyListing>> {
        let statement = search_statement(search, limit);
        debug!(params = statement.params().len(), "get_all_properties");
        self.executor().fetch_all(&statement).await
    }

    /// Insert a property and return the stored row, including its generated id.
    ///
    /// A missing owner or any other rule the store enforces comes back as
    /// [`DataAccessError::ConstraintViolation`](crate::DataAccessError::ConstraintViolation).
    pub async fn add_property(&self, property: &NewProperty) -> Result<Property> {
        debug!(owner_id = property.owner_id, "add_property");
        self.executor()
            .fetch_one(&insert_property_statement(property))
            .await
    }
}
