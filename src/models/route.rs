// Route models for representing planned campsite trips

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{Cost, Kilometers, Location};

/// An ordered visiting sequence of campsites without repeated identifiers
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Route {
    stops: Vec<Location>,
}

impl Route {
    /// Creates a route from stops already in visiting order
    pub fn new(stops: Vec<Location>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(stops.len());
        for stop in &stops {
            if !seen.insert(stop.id.as_str()) {
                return Err(Error::DuplicateLocation {
                    id: stop.id.clone(),
                });
            }
        }
        Ok(Self { stops })
    }

    /// Builders guarantee uniqueness themselves
    pub(crate) fn from_unique_stops(stops: Vec<Location>) -> Self {
        Self { stops }
    }

    pub fn stops(&self) -> &[Location] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn start(&self) -> Option<&Location> {
        self.stops.first()
    }

    /// Identifiers of the stops in visiting order
    pub fn ids(&self) -> Vec<&str> {
        self.stops.iter().map(|stop| stop.id.as_str()).collect()
    }

    /// Role of the stop at `index`; the first stop always counts as the start
    pub fn role_of(&self, index: usize) -> Option<StopRole> {
        if index >= self.stops.len() {
            return None;
        }
        Some(if index == 0 {
            StopRole::Start
        } else if index == self.stops.len() - 1 {
            StopRole::End
        } else {
            StopRole::Intermediate
        })
    }
}

/// Position of a stop within its route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopRole {
    Start,
    Intermediate,
    End,
}

/// Distance and cost totals derived from a route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    /// Sum of the leg distances in kilometers
    pub total_distance_km: Kilometers,

    /// Sum of the nightly prices over all stops
    pub total_cost: Cost,

    /// Distance of each leg, `leg_distances_km[i]` runs from stop `i` to stop `i + 1`
    pub leg_distances_km: Vec<Kilometers>,
}

impl RouteSummary {
    /// Distance travelled to reach the stop at `index` from the previous one
    pub fn distance_to_stop(&self, index: usize) -> Option<Kilometers> {
        index
            .checked_sub(1)
            .and_then(|leg| self.leg_distances_km.get(leg).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(id: &str) -> Location {
        Location::new(id, 43.0, -4.0, "camping", 4.0, 20.0)
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let err = Route::new(vec![stop("A"), stop("B"), stop("A")]).unwrap_err();
        assert!(matches!(err, Error::DuplicateLocation { id } if id == "A"));
    }

    #[test]
    fn test_roles() {
        let route = Route::new(vec![stop("A"), stop("B"), stop("C")]).unwrap();
        assert_eq!(route.role_of(0), Some(StopRole::Start));
        assert_eq!(route.role_of(1), Some(StopRole::Intermediate));
        assert_eq!(route.role_of(2), Some(StopRole::End));
        assert_eq!(route.role_of(3), None);

        let single = Route::new(vec![stop("A")]).unwrap();
        assert_eq!(single.role_of(0), Some(StopRole::Start));
    }

    #[test]
    fn test_distance_to_stop() {
        let summary = RouteSummary {
            total_distance_km: 30.0,
            total_cost: 60.0,
            leg_distances_km: vec![10.0, 20.0],
        };
        assert_eq!(summary.distance_to_stop(0), None);
        assert_eq!(summary.distance_to_stop(1), Some(10.0));
        assert_eq!(summary.distance_to_stop(2), Some(20.0));
        assert_eq!(summary.distance_to_stop(3), None);
    }
}
