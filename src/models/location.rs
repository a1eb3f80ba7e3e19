// Location model representing a campsite on the globe

use geo::Point;
use serde::{Deserialize, Serialize};

use crate::models::Cost;

/// A campsite with geographic coordinates, category, rating and nightly price.
///
/// Field names follow the dataset columns when (de)serialized, so a route
/// written with [`crate::utils::export`] can be read back as a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Unique name of the campsite
    #[serde(rename = "name")]
    pub id: String,

    /// Kind of site (camping, glamping, bungalow park...)
    #[serde(rename = "type")]
    pub category: String,

    /// Visitor rating from 0.0 to 5.0
    pub rating: f64,

    /// Price of one night, never negative
    #[serde(rename = "price per night")]
    pub price_per_night: Cost,

    /// Latitude in decimal degrees
    pub latitude: f64,

    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Location {
    /// Creates a new location
    pub fn new<S: Into<String>, C: Into<String>>(
        id: S,
        latitude: f64,
        longitude: f64,
        category: C,
        rating: f64,
        price_per_night: Cost,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            rating,
            price_per_night,
            latitude,
            longitude,
        }
    }

    /// Coordinates as a `geo` point (x = longitude, y = latitude)
    pub fn point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}
