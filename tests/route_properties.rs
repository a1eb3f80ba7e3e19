// Property-based tests for route construction and summarization
use camping_route::utils::distance::geodesic_km;
use camping_route::{Location, NearestNeighbor, RoutePlanner, RouteSummarizer};
use proptest::prelude::*;
use std::collections::HashSet;

fn campsites() -> impl Strategy<Value = Vec<Location>> {
    prop::collection::vec((35.0f64..45.0, -10.0f64..5.0, 0u32..120), 1..30).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (lat, lon, price))| {
                Location::new(format!("site-{i}"), lat, lon, "camping", 4.0, price as f64)
            })
            .collect()
    })
}

proptest! {
    /// Property: the route opens at the requested campsite and has the requested length.
    #[test]
    fn prop_route_starts_at_start(sites in campsites(), start_seed in any::<usize>(), count_seed in any::<usize>()) {
        let start = &sites[start_seed % sites.len()].id;
        let stop_count = 1 + count_seed % sites.len();

        let route = NearestNeighbor::new().build(&sites, start, stop_count).unwrap();
        prop_assert_eq!(&route.stops()[0].id, start);
        prop_assert_eq!(route.len(), stop_count);

        let unique: HashSet<&str> = route.ids().into_iter().collect();
        prop_assert_eq!(unique.len(), stop_count, "route repeats a campsite");
    }

    /// Property: building twice with the same input yields the same route.
    #[test]
    fn prop_build_is_deterministic(sites in campsites(), start_seed in any::<usize>()) {
        let start = &sites[start_seed % sites.len()].id;
        let builder = NearestNeighbor::new();

        let first = builder.build(&sites, start, sites.len()).unwrap();
        let second = builder.build(&sites, start, sites.len()).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: each hop goes to the closest campsite still unvisited.
    #[test]
    fn prop_each_hop_is_nearest(sites in campsites(), start_seed in any::<usize>()) {
        let start = &sites[start_seed % sites.len()].id;
        let route = NearestNeighbor::new().build(&sites, start, sites.len()).unwrap();

        let stops = route.stops();
        for (i, pair) in stops.windows(2).enumerate() {
            let chosen = geodesic_km(&pair[0], &pair[1]);
            for later in &stops[i + 1..] {
                prop_assert!(chosen <= geodesic_km(&pair[0], later));
            }
        }
    }

    /// Property: total cost is the sum of nightly prices and distance the sum of legs.
    #[test]
    fn prop_summary_totals(sites in campsites(), start_seed in any::<usize>(), count_seed in any::<usize>()) {
        let start = &sites[start_seed % sites.len()].id;
        let stop_count = 1 + count_seed % sites.len();
        let route = NearestNeighbor::new().build(&sites, start, stop_count).unwrap();
        let summary = RouteSummarizer::new().summarize(&route).unwrap();

        let cost: f64 = route.stops().iter().map(|s| s.price_per_night).sum();
        prop_assert_eq!(summary.total_cost, cost);

        let legs: f64 = summary.leg_distances_km.iter().sum();
        prop_assert_eq!(summary.leg_distances_km.len(), stop_count - 1);
        prop_assert!((summary.total_distance_km - legs).abs() < 1e-9);
        prop_assert!(summary.total_distance_km >= 0.0);
        if stop_count == 1 {
            prop_assert_eq!(summary.total_distance_km, 0.0);
        }
    }
}
