use std::path::PathBuf;

use camping_route::config::PlannerConfig;
use camping_route::utils::dataset::load_locations;
use camping_route::utils::distance::DistanceMethod;
use camping_route::utils::export::{save_plan_json, save_route_csv, DEFAULT_CSV_FILE};
use camping_route::utils::map::{render_route_map, MapOptions};
use camping_route::{plan_trip, TripPlan};
use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[clap(author, version, about = "Plan a nearest-neighbor route between campsites", long_about = None)]
struct Cli {
    /// Campsite CSV (name, type, rating, price per night, latitude, longitude)
    #[arg(long, default_value = "data/campings.csv")]
    dataset: PathBuf,

    /// JSON planner configuration; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Starting campsite name (defaults to the first row)
    #[arg(short, long)]
    start: Option<String>,

    /// Number of campsites to visit, start included
    #[arg(short = 'n', long)]
    stops: Option<usize>,

    /// Maximum price per night
    #[arg(long)]
    max_price: Option<f64>,

    /// Minimum rating (0-5)
    #[arg(long)]
    min_rating: Option<f64>,

    /// Distance model: geodesic or haversine
    #[arg(long)]
    distance: Option<DistanceMethod>,

    /// Write the route as CSV (optimized_route.csv when no path is given)
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_CSV_FILE)]
    export_csv: Option<PathBuf>,

    /// Write route and summary as JSON
    #[arg(long)]
    export_json: Option<PathBuf>,

    /// Render the route map (.svg or .png)
    #[arg(long)]
    map: Option<PathBuf>,

    #[arg(short, long)]
    debug: bool,
}

impl Cli {
    fn planner_config(&self) -> anyhow::Result<PlannerConfig> {
        let mut config = match &self.config {
            Some(path) => PlannerConfig::from_json_file(path)?,
            None => PlannerConfig::default(),
        };

        if let Some(start) = &self.start {
            config.start = Some(start.clone());
        }
        if let Some(stops) = self.stops {
            config.stops = stops;
        }
        if let Some(max_price) = self.max_price {
            config.max_price = Some(max_price);
        }
        if let Some(min_rating) = self.min_rating {
            config.min_rating = Some(min_rating);
        }
        if let Some(distance) = self.distance {
            config.distance = distance;
        }

        config.validate()?;
        Ok(config)
    }
}

fn print_plan(plan: &TripPlan) {
    println!("Route ({} of {} campsites):", plan.route.len(), plan.candidates);
    println!(
        "{:>4}  {:<32} {:<12} {:>6} {:>9} {:>10}",
        "#", "Name", "Type", "Rating", "Price", "Leg (km)"
    );
    for (index, stop) in plan.route.stops().iter().enumerate() {
        let leg = plan
            .summary
            .distance_to_stop(index)
            .map(|km| format!("{km:.1}"))
            .unwrap_or_else(|| "Start".to_string());
        println!(
            "{:>4}  {:<32} {:<12} {:>6.1} {:>8.2}€ {:>10}",
            index + 1,
            stop.id,
            stop.category,
            stop.rating,
            stop.price_per_night,
            leg
        );
    }

    println!();
    println!("Route summary:");
    println!("  Total distance: {:.1} km", plan.summary.total_distance_km);
    println!("  Total cost: €{:.2}", plan.summary.total_cost);
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let config = cli.planner_config()?;
    info!(distance = %config.distance, "planning route");

    let dataset = load_locations(&cli.dataset)?;
    let plan = plan_trip(&dataset, &config)?;
    print_plan(&plan);

    if let Some(path) = &cli.export_csv {
        save_route_csv(&plan.route, path)?;
    }
    if let Some(path) = &cli.export_json {
        save_plan_json(&plan, path)?;
    }
    if let Some(path) = &cli.map {
        render_route_map(path, &plan.route, &plan.summary, &MapOptions::default())?;
    }

    Ok(())
}
