//! Row types for the LightBnB schema and request payloads
//!
//! Persistence models only; they carry no behaviour beyond shaping.

mod property;
mod reservation;
mod search;
mod user;

pub use property::{NewProperty, Property, PropertyListing};
pub(crate) use property::PROPERTY_COLUMNS;
pub use reservation::ReservationListing;
pub use search::PropertySearch;
pub use user::{NewUser, User};
