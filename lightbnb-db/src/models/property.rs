use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Qualified column list for selecting a full `properties` row.
pub(crate) const PROPERTY_COLUMNS: &str = "properties.id, properties.owner_id, properties.title, \
    properties.description, properties.thumbnail_photo_url, properties.cover_photo_url, \
    properties.cost_per_night, properties.parking_spaces, properties.number_of_bathrooms, \
    properties.number_of_bedrooms, properties.country, properties.street, properties.city, \
    properties.province, properties.post_code, properties.active";

/// A persisted `properties` row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Property {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    /// Minor currency units (cents)
    pub cost_per_night: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub active: bool,
}

/// Payload for creating a property. Every column is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProperty {
    pub owner_id: i32,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    /// Minor currency units (cents)
    pub cost_per_night: i32,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub country: String,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
}

/// A property search result: the property plus its average review rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PropertyListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: Property,
    pub average_rating: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn new_property_json() -> serde_json::Value {
        json!({
            "owner_id": 1,
            "title": "Speed lamp",
            "description": "description",
            "thumbnail_photo_url": "https://images.pexels.com/photos/2086676/pexels-photo-2086676.jpeg",
            "cover_photo_url": "https://images.pexels.com/photos/2086676/pexels-photo-2086676.jpeg",
            "cost_per_night": 93061,
            "street": "536 Namsub Highway",
            "city": "Sotboske",
            "province": "Quebec",
            "post_code": "28142",
            "country": "Canada",
            "parking_spaces": 6,
            "number_of_bathrooms": 4,
            "number_of_bedrooms": 8
        })
    }

    #[test]
    fn new_property_parses_complete_payload() {
        let property: NewProperty = serde_json::from_value(new_property_json()).unwrap();
        assert_eq!(property.cost_per_night, 93061);
        assert_eq!(property.city, "Sotboske");
    }

    #[test]
    fn new_property_rejects_missing_field() {
        for field in ["owner_id", "title", "cost_per_night", "post_code", "number_of_bedrooms"] {
            let mut payload = new_property_json();
            payload.as_object_mut().unwrap().remove(field);

            let err = serde_json::from_value::<NewProperty>(payload).unwrap_err();
            assert!(err.to_string().contains(field), "{field}: {err}");
        }
    }

    #[test]
    fn listing_flattens_property() {
        let mut row = new_property_json();
        let obj = row.as_object_mut().unwrap();
        obj.insert("id".into(), json!(7));
        obj.insert("active".into(), json!(true));
        obj.insert("average_rating".into(), json!(4.25));

        let listing: PropertyListing = serde_json::from_value(row).unwrap();
        assert_eq!(listing.property.id, 7);
        assert_eq!(listing.average_rating, 4.25);

        let out = serde_json::to_value(&listing).unwrap();
        assert_eq!(out["title"], "Speed lamp");
        assert_eq!(out["average_rating"], 4.25);
    }
}
