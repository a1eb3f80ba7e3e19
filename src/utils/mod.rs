pub mod dataset;
pub mod distance;
pub mod export;
pub mod map;
