// Public modules
pub mod algorithms;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use algorithms::nearest_neighbor::NearestNeighbor;
pub use algorithms::planner::{plan_trip, TripPlan, TripPlanner};
pub use algorithms::summary::RouteSummarizer;
pub use algorithms::RoutePlanner;
pub use config::PlannerConfig;
pub use error::{Error, Result};
pub use models::{Location, Route, RouteSummary};
