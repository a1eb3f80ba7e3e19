// CSV and JSON export of planned routes

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::algorithms::planner::TripPlan;
use crate::error::Result;
use crate::models::Route;

pub const DEFAULT_CSV_FILE: &str = "optimized_route.csv";

/// Writes the stops in visiting order using the dataset column layout
pub fn write_route_csv<W: Write>(route: &Route, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for stop in route.stops() {
        csv_writer.serialize(stop)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn save_route_csv<P: AsRef<Path>>(route: &Route, path: P) -> Result<()> {
    let path = path.as_ref();
    write_route_csv(route, File::create(path)?)?;
    info!(path = %path.display(), stops = route.len(), "route exported as CSV");
    Ok(())
}

/// Writes the whole plan (route, summary, candidate count) as pretty JSON
pub fn write_plan_json<W: Write>(plan: &TripPlan, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, plan)?;
    Ok(())
}

pub fn save_plan_json<P: AsRef<Path>>(plan: &TripPlan, path: P) -> Result<()> {
    let path = path.as_ref();
    write_plan_json(plan, File::create(path)?)?;
    info!(path = %path.display(), "plan exported as JSON");
    Ok(())
}
