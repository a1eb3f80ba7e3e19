// Distance and cost aggregation over a built route

use crate::error::{Error, Result};
use crate::models::{Route, RouteSummary};
use crate::utils::distance::DistanceMethod;

/// Computes distance and cost totals for a route
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteSummarizer {
    distance: DistanceMethod,
}

impl RouteSummarizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_distance_method(distance: DistanceMethod) -> Self {
        Self { distance }
    }

    /// Sums consecutive leg distances and nightly prices.
    /// A single-stop route has zero distance; an empty route is an error.
    pub fn summarize(&self, route: &Route) -> Result<RouteSummary> {
        if route.is_empty() {
            return Err(Error::EmptyRoute);
        }

        let leg_distances_km: Vec<f64> = route
            .stops()
            .windows(2)
            .map(|leg| self.distance.distance_km(&leg[0], &leg[1]))
            .collect();

        Ok(RouteSummary {
            total_distance_km: leg_distances_km.iter().sum(),
            total_cost: route.stops().iter().map(|stop| stop.price_per_night).sum(),
            leg_distances_km,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;
    use crate::utils::distance::geodesic_km;

    fn site(id: &str, lat: f64, lon: f64, price: f64) -> Location {
        Location::new(id, lat, lon, "camping", 4.0, price)
    }

    #[test]
    fn test_summary_totals() {
        let a = site("A", 0.0, 0.0, 10.0);
        let b = site("B", 0.0, 1.0, 20.0);
        let c = site("C", 0.0, 5.0, 15.0);
        let expected = geodesic_km(&a, &b) + geodesic_km(&b, &c);

        let route = Route::new(vec![a, b, c]).unwrap();
        let summary = RouteSummarizer::new().summarize(&route).unwrap();

        assert!((summary.total_distance_km - expected).abs() < 1e-9);
        assert!((summary.total_distance_km - 556.597).abs() < 0.01);
        assert_eq!(summary.total_cost, 45.0);
        assert_eq!(summary.leg_distances_km.len(), 2);
    }

    #[test]
    fn test_summary_single_stop() {
        let route = Route::new(vec![site("A", 43.0, -4.0, 25.5)]).unwrap();
        let summary = RouteSummarizer::new().summarize(&route).unwrap();

        assert_eq!(summary.total_distance_km, 0.0);
        assert_eq!(summary.total_cost, 25.5);
        assert!(summary.leg_distances_km.is_empty());
    }

    #[test]
    fn test_summary_empty_route() {
        let route = Route::new(Vec::new()).unwrap();
        let err = RouteSummarizer::new().summarize(&route).unwrap_err();
        assert!(matches!(err, Error::EmptyRoute));
    }
}
