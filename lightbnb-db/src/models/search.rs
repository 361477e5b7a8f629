use serde::{Deserialize, Serialize};

/// Optional filters for the property search.
///
/// Prices are in major currency units (dollars); they are converted to
/// cents before binding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertySearch {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub owner_id: Option<i32>,
    #[serde(default)]
    pub minimum_price_per_night: Option<i64>,
    #[serde(default)]
    pub maximum_price_per_night: Option<i64>,
    #[serde(default)]
    pub minimum_rating: Option<f64>,
}

impl PropertySearch {
    /// City filter, treating a blank form field as absent.
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref().filter(|city| !city.is_empty())
    }

    pub fn minimum_cost_cents(&self) -> Option<i64> {
        self.minimum_price_per_night.map(to_cents)
    }

    pub fn maximum_cost_cents(&self) -> Option<i64> {
        self.maximum_price_per_night.map(to_cents)
    }
}

fn to_cents(major: i64) -> i64 {
    major.saturating_mul(100)
}
