// Models module - exports all model types

mod location;
mod route;

// Re-export model types
pub use self::location::Location;
pub use self::route::{Route, RouteSummary, StopRole};

// Common type aliases for improved code readability
pub type LocationId = String;
pub type Cost = f64;
pub type Kilometers = f64;
