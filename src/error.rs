// Error types shared by the route planner

use thiserror::Error;

/// Errors produced while loading campsites, planning a route, or writing it out
#[derive(Error, Debug)]
pub enum Error {
    /// The start identifier is missing from the input set, or appears more than once
    #[error("invalid start location: {start_id:?} must appear exactly once in the input set")]
    InvalidStart { start_id: String },

    /// The requested stop count is outside `[1, available]`
    #[error("invalid stop count {requested}: must be between 1 and {available}")]
    InvalidStopCount { requested: usize, available: usize },

    /// Summarizing or drawing a route without any stops
    #[error("route has no stops")]
    EmptyRoute,

    /// Two records share the same identifier
    #[error("duplicate location identifier {id:?}")]
    DuplicateLocation { id: String },

    /// No campsites to plan over
    #[error("dataset contains no locations")]
    EmptyDataset,

    /// A dataset row failed validation (rows are 1-based, header excluded)
    #[error("invalid record at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// A planner setting is out of range
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("unknown distance method {0:?} (expected \"geodesic\" or \"haversine\")")]
    UnknownDistanceMethod(String),

    #[error("failed to render route map: {0}")]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_record<S: Into<String>>(row: usize, message: S) -> Self {
        Self::InvalidRecord {
            row,
            message: message.into(),
        }
    }
}

impl Error {
    pub(crate) fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::InvalidStopCount {
            requested: 7,
            available: 3,
        };
        assert_eq!(err.to_string(), "invalid stop count 7: must be between 1 and 3");

        let err = Error::invalid_record(4, "rating 6 is outside 0-5");
        assert_eq!(
            err.to_string(),
            "invalid record at row 4: rating 6 is outside 0-5"
        );
    }
}
