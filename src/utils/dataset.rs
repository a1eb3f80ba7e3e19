use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::models::Location;

/// One raw row of the campsite CSV
#[derive(Debug, Deserialize)]
struct CampsiteRecord {
    name: String,
    #[serde(rename = "type")]
    category: String,
    rating: f64,
    #[serde(rename = "price per night")]
    price_per_night: f64,
    latitude: String,
    longitude: String,
}

// Coordinates may be exported with thousands separators; drop them
fn parse_coordinate(raw: &str, row: usize, column: &str) -> Result<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();
    cleaned
        .trim()
        .parse::<f64>()
        .map_err(|_| Error::invalid_record(row, format!("{column} {raw:?} is not a number")))
}

impl CampsiteRecord {
    fn into_location(self, row: usize) -> Result<Location> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(Error::invalid_record(row, "name is empty"));
        }

        let latitude = parse_coordinate(&self.latitude, row, "latitude")?;
        let longitude = parse_coordinate(&self.longitude, row, "longitude")?;

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::invalid_record(
                row,
                format!("latitude {latitude} is outside -90..90"),
            ));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::invalid_record(
                row,
                format!("longitude {longitude} is outside -180..180"),
            ));
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(Error::invalid_record(
                row,
                format!("rating {} is outside 0-5", self.rating),
            ));
        }
        if !self.price_per_night.is_finite() || self.price_per_night < 0.0 {
            return Err(Error::invalid_record(
                row,
                format!("price per night {} must be non-negative", self.price_per_night),
            ));
        }

        Ok(Location::new(
            name,
            latitude,
            longitude,
            self.category.trim(),
            self.rating,
            self.price_per_night,
        ))
    }
}

/// Reads campsites from CSV data with a header row.
///
/// Expected columns: `name`, `type`, `rating`, `price per night`,
/// `latitude`, `longitude`, in any order. Names must be unique.
pub fn read_locations<R: Read>(reader: R) -> Result<Vec<Location>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut locations = Vec::new();
    let mut seen = HashSet::new();

    for (index, record) in csv_reader.deserialize::<CampsiteRecord>().enumerate() {
        let row = index + 1;
        let location = record?.into_location(row)?;
        if !seen.insert(location.id.clone()) {
            return Err(Error::DuplicateLocation { id: location.id });
        }
        debug!(row, name = %location.id, "loaded campsite");
        locations.push(location);
    }

    Ok(locations)
}

/// Loads campsites from a CSV file
pub fn load_locations<P: AsRef<Path>>(path: P) -> Result<Vec<Location>> {
    let path = path.as_ref();
    let locations = read_locations(File::open(path)?)?;
    info!(path = %path.display(), count = locations.len(), "loaded campsite dataset");
    Ok(locations)
}
