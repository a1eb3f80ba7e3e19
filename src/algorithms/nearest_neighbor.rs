//! Greedy nearest-neighbor route construction.
//!
//! Starting from the chosen campsite, repeatedly travel to the closest
//! campsite not visited yet until the route holds the requested number of
//! stops. There is no backtracking, so the result is deterministic but not a
//! shortest tour.
//!
//! # Complexity
//!
//! O(stop_count × n) distance evaluations where n is the number of
//! candidate locations. No spatial index is used.

use std::collections::HashSet;

use tracing::debug;

use crate::algorithms::RoutePlanner;
use crate::error::{Error, Result};
use crate::models::{Location, Route};
use crate::utils::distance::DistanceMethod;

/// Nearest-neighbor route builder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NearestNeighbor {
    distance: DistanceMethod,
}

impl NearestNeighbor {
    /// Creates a builder measuring legs with geodesic distance
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_distance_method(distance: DistanceMethod) -> Self {
        Self { distance }
    }

    /// Index of the single location named `start_id`
    fn start_index(locations: &[Location], start_id: &str) -> Result<usize> {
        let mut matches = locations
            .iter()
            .enumerate()
            .filter(|(_, location)| location.id == start_id)
            .map(|(index, _)| index);

        match (matches.next(), matches.next()) {
            (Some(index), None) => Ok(index),
            _ => Err(Error::InvalidStart {
                start_id: start_id.to_string(),
            }),
        }
    }

    fn ensure_unique(locations: &[Location]) -> Result<()> {
        let mut seen = HashSet::with_capacity(locations.len());
        for location in locations {
            if !seen.insert(location.id.as_str()) {
                return Err(Error::DuplicateLocation {
                    id: location.id.clone(),
                });
            }
        }
        Ok(())
    }
}

impl RoutePlanner for NearestNeighbor {
    fn distance_method(&self) -> DistanceMethod {
        self.distance
    }

    /// Builds a route of exactly `stop_count` stops beginning at `start_id`.
    ///
    /// Equal distances are resolved in favour of the candidate that comes
    /// first in `locations`.
    ///
    /// # Examples
    ///
    /// ```
    /// use camping_route::algorithms::RoutePlanner;
    /// use camping_route::algorithms::nearest_neighbor::NearestNeighbor;
    /// use camping_route::models::Location;
    ///
    /// let locations = vec![
    ///     Location::new("A", 0.0, 0.0, "camping", 4.0, 10.0),
    ///     Location::new("C", 0.0, 5.0, "camping", 4.0, 15.0),
    ///     Location::new("B", 0.0, 1.0, "camping", 4.0, 20.0),
    /// ];
    ///
    /// let route = NearestNeighbor::new().build(&locations, "A", 3).unwrap();
    /// assert_eq!(route.ids(), vec!["A", "B", "C"]);
    /// ```
    fn build(&self, locations: &[Location], start_id: &str, stop_count: usize) -> Result<Route> {
        let start = Self::start_index(locations, start_id)?;
        Self::ensure_unique(locations)?;

        if stop_count == 0 || stop_count > locations.len() {
            return Err(Error::InvalidStopCount {
                requested: stop_count,
                available: locations.len(),
            });
        }

        let mut visited = vec![false; locations.len()];
        visited[start] = true;

        let mut stops = Vec::with_capacity(stop_count);
        stops.push(locations[start].clone());
        let mut current = start;

        while stops.len() < stop_count {
            let origin = &locations[current];

            // Strict comparison keeps the earliest candidate on ties
            let mut nearest: Option<(usize, f64)> = None;
            for (i, candidate) in locations.iter().enumerate() {
                if visited[i] {
                    continue;
                }
                let d = self.distance.distance_km(origin, candidate);
                if nearest.map_or(true, |(_, best)| d < best) {
                    nearest = Some((i, d));
                }
            }

            let (next, leg_km) = nearest.ok_or(Error::InvalidStopCount {
                requested: stop_count,
                available: locations.len(),
            })?;

            debug!(
                from = %origin.id,
                to = %locations[next].id,
                leg_km,
                "nearest unvisited campsite"
            );

            visited[next] = true;
            stops.push(locations[next].clone());
            current = next;
        }

        Ok(Route::from_unique_stops(stops))
    }
}
