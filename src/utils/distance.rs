// Distance calculation utilities

use std::fmt;
use std::str::FromStr;

use geo::{GeodesicDistance, HaversineDistance};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::models::{Kilometers, Location};

const METERS_PER_KILOMETER: f64 = 1000.0;

/// Geodesic distance on the WGS84 ellipsoid in kilometers
pub fn geodesic_km(p1: &Location, p2: &Location) -> Kilometers {
    p1.point().geodesic_distance(&p2.point()) / METERS_PER_KILOMETER
}

/// Great-circle distance on a sphere of mean earth radius in kilometers.
/// Deviates from [`geodesic_km`] by up to about 0.5%.
pub fn haversine_km(p1: &Location, p2: &Location) -> Kilometers {
    p1.point().haversine_distance(&p2.point()) / METERS_PER_KILOMETER
}

/// Earth model used to measure legs between campsites
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMethod {
    #[default]
    Geodesic,
    Haversine,
}

impl DistanceMethod {
    pub fn distance_km(self, p1: &Location, p2: &Location) -> Kilometers {
        match self {
            DistanceMethod::Geodesic => geodesic_km(p1, p2),
            DistanceMethod::Haversine => haversine_km(p1, p2),
        }
    }
}

impl FromStr for DistanceMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "geodesic" => Ok(DistanceMethod::Geodesic),
            "haversine" => Ok(DistanceMethod::Haversine),
            _ => Err(Error::UnknownDistanceMethod(s.to_string())),
        }
    }
}

impl fmt::Display for DistanceMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceMethod::Geodesic => write!(f, "geodesic"),
            DistanceMethod::Haversine => write!(f, "haversine"),
        }
    }
}
