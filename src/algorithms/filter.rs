// Price and rating filtering of the campsite dataset

use serde::{Deserialize, Serialize};

use crate::models::{Cost, Location};

/// Keeps campsites under a nightly price cap and above a minimum rating
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationFilter {
    /// Highest accepted price per night, inclusive
    pub max_price: Option<Cost>,

    /// Lowest accepted rating, inclusive
    pub min_rating: Option<f64>,
}

impl LocationFilter {
    pub fn new(max_price: Option<Cost>, min_rating: Option<f64>) -> Self {
        Self {
            max_price,
            min_rating,
        }
    }

    /// Checks a single campsite against both bounds
    pub fn accepts(&self, location: &Location) -> bool {
        let price_ok = self
            .max_price
            .map_or(true, |max| location.price_per_night <= max);
        let rating_ok = self
            .min_rating
            .map_or(true, |min| location.rating >= min);
        price_ok && rating_ok
    }

    /// Returns the accepted campsites in dataset order.
    ///
    /// The start campsite is always part of the result: when it fails the
    /// filter it is placed in front of the accepted ones.
    pub fn apply(&self, dataset: &[Location], start_id: &str) -> Vec<Location> {
        let mut kept: Vec<Location> = dataset
            .iter()
            .filter(|location| self.accepts(location))
            .cloned()
            .collect();

        if !kept.iter().any(|location| location.id == start_id) {
            if let Some(start) = dataset.iter().find(|location| location.id == start_id) {
                kept.insert(0, start.clone());
            }
        }

        kept
    }
}
