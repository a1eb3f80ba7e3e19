//! Planner configuration.
//!
//! A `PlannerConfig` describes one route request. It can be read from a JSON
//! file; missing keys fall back to the defaults below, and command line flags
//! are applied on top by the binary.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::algorithms::filter::LocationFilter;
use crate::error::{Error, Result};
use crate::models::{Cost, LocationId};
use crate::utils::distance::DistanceMethod;

pub const DEFAULT_STOPS: usize = 4;
pub const DEFAULT_MIN_RATING: f64 = 2.0;
pub const MAX_RATING: f64 = 5.0;

/// Parameters of a single route request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Starting campsite; the first dataset row when unset
    pub start: Option<LocationId>,

    /// Requested number of stops including the start
    pub stops: usize,

    /// Highest accepted price per night
    pub max_price: Option<Cost>,

    /// Lowest accepted rating
    pub min_rating: Option<f64>,

    pub distance: DistanceMethod,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            start: None,
            stops: DEFAULT_STOPS,
            max_price: None,
            min_rating: Some(DEFAULT_MIN_RATING),
            distance: DistanceMethod::default(),
        }
    }
}

impl PlannerConfig {
    /// Reads a configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading planner configuration");
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Rejects filter bounds no campsite could ever satisfy or that are not numbers
    pub fn validate(&self) -> Result<()> {
        if let Some(rating) = self.min_rating {
            if !(0.0..=MAX_RATING).contains(&rating) {
                return Err(Error::invalid_config(format!(
                    "minimum rating {rating} is outside 0-{MAX_RATING}"
                )));
            }
        }
        if let Some(price) = self.max_price {
            if !price.is_finite() || price < 0.0 {
                return Err(Error::invalid_config(format!(
                    "maximum price {price} must be a non-negative number"
                )));
            }
        }
        Ok(())
    }

    pub fn filter(&self) -> LocationFilter {
        LocationFilter::new(self.max_price, self.min_rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::default();
        assert_eq!(config.start, None);
        assert_eq!(config.stops, 4);
        assert_eq!(config.min_rating, Some(2.0));
        assert_eq!(config.max_price, None);
        assert_eq!(config.distance, DistanceMethod::Geodesic);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            PlannerConfig::from_json_str(r#"{"start": "Camping Oyambre", "max_price": 40.0}"#)
                .unwrap();
        assert_eq!(config.start.as_deref(), Some("Camping Oyambre"));
        assert_eq!(config.max_price, Some(40.0));
        assert_eq!(config.stops, DEFAULT_STOPS);
        assert_eq!(config.min_rating, Some(DEFAULT_MIN_RATING));
    }

    #[test]
    fn test_distance_method_in_json() {
        let config = PlannerConfig::from_json_str(r#"{"distance": "haversine", "stops": 6}"#)
            .unwrap();
        assert_eq!(config.distance, DistanceMethod::Haversine);
        assert_eq!(config.stops, 6);
    }

    #[test]
    fn test_invalid_json() {
        assert!(PlannerConfig::from_json_str("{\"stops\": \"many\"}").is_err());
    }

    #[test]
    fn test_validate_accepts_bounds() {
        assert!(PlannerConfig::default().validate().is_ok());

        let config = PlannerConfig {
            min_rating: Some(5.0),
            max_price: Some(0.0),
            ..PlannerConfig::default()
        };
        assert!(config.validate().is_ok());

        let config = PlannerConfig {
            min_rating: None,
            max_price: None,
            ..PlannerConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let rejected = [
            (Some(7.0), None),
            (Some(-0.5), None),
            (Some(f64::NAN), None),
            (None, Some(-5.0)),
            (None, Some(f64::NAN)),
            (None, Some(f64::INFINITY)),
        ];
        for (min_rating, max_price) in rejected {
            let config = PlannerConfig {
                min_rating,
                max_price,
                ..PlannerConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(Error::InvalidConfig { .. })),
                "accepted {min_rating:?} / {max_price:?}"
            );
        }
    }

    #[test]
    fn test_filter_from_config() {
        let config = PlannerConfig {
            max_price: Some(30.0),
            min_rating: None,
            ..PlannerConfig::default()
        };
        assert_eq!(config.filter(), LocationFilter::new(Some(30.0), None));
    }
}
