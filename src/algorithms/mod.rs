pub mod filter;
pub mod nearest_neighbor;
pub mod planner;
pub mod summary;

// Common algorithm traits
use crate::error::Result;
use crate::models::{Location, Route};
use crate::utils::distance::DistanceMethod;

/// Trait for route construction heuristics
pub trait RoutePlanner {
    /// Earth model the heuristic measures hops with
    fn distance_method(&self) -> DistanceMethod;

    /// Build a route of exactly `stop_count` stops starting at `start_id`
    fn build(&self, locations: &[Location], start_id: &str, stop_count: usize) -> Result<Route>;
}
