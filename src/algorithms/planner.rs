// Trip planning: filter the dataset, build a route and summarize it

use serde::Serialize;
use tracing::{info, warn};

use crate::algorithms::nearest_neighbor::NearestNeighbor;
use crate::algorithms::summary::RouteSummarizer;
use crate::algorithms::RoutePlanner;
use crate::config::PlannerConfig;
use crate::error::{Error, Result};
use crate::models::{Location, Route, RouteSummary};
use crate::utils::distance::DistanceMethod;

/// Outcome of a planning request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripPlan {
    /// Number of campsites left after filtering, start included
    pub candidates: usize,
    pub route: Route,
    pub summary: RouteSummary,
}

/// Runs filter, stop clamping, route construction and summarization
#[derive(Debug, Clone)]
pub struct TripPlanner<P = NearestNeighbor> {
    builder: P,
    summarizer: RouteSummarizer,
}

impl TripPlanner<NearestNeighbor> {
    /// Nearest-neighbor planner measuring every leg with `distance`
    pub fn new(distance: DistanceMethod) -> Self {
        Self::with_builder(NearestNeighbor::with_distance_method(distance))
    }
}

impl<P: RoutePlanner> TripPlanner<P> {
    /// Summaries measure legs with the same distance method as `builder`
    pub fn with_builder(builder: P) -> Self {
        let summarizer = RouteSummarizer::with_distance_method(builder.distance_method());
        Self {
            builder,
            summarizer,
        }
    }

    pub fn plan(&self, dataset: &[Location], config: &PlannerConfig) -> Result<TripPlan> {
        config.validate()?;

        let first = dataset.first().ok_or(Error::EmptyDataset)?;
        let start_id = config.start.as_deref().unwrap_or(&first.id);

        if !dataset.iter().any(|location| location.id == start_id) {
            return Err(Error::InvalidStart {
                start_id: start_id.to_string(),
            });
        }

        let candidates = config.filter().apply(dataset, start_id);
        let stop_count = clamp_stop_count(config.stops, candidates.len());
        if stop_count != config.stops {
            warn!(
                requested = config.stops,
                available = candidates.len(),
                stop_count,
                "stop count adjusted to the filtered campsites"
            );
        }

        let route = self.builder.build(&candidates, start_id, stop_count)?;
        let summary = self.summarizer.summarize(&route)?;

        info!(
            start = start_id,
            stops = route.len(),
            candidates = candidates.len(),
            total_distance_km = summary.total_distance_km,
            total_cost = summary.total_cost,
            "route planned"
        );

        Ok(TripPlan {
            candidates: candidates.len(),
            route,
            summary,
        })
    }
}

/// Plans a trip with the nearest-neighbor builder and the configured distance method
pub fn plan_trip(dataset: &[Location], config: &PlannerConfig) -> Result<TripPlan> {
    TripPlanner::new(config.distance).plan(dataset, config)
}

/// Brings a requested stop count into `[1, available]`
pub fn clamp_stop_count(requested: usize, available: usize) -> usize {
    requested.clamp(1, available.max(1))
}
