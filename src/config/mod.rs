mod catalog;

pub use catalog::{
    AircraftEntry, AirportEntry, Catalog, ModelEntry, ModelRef, RouteEntry, RunwayEntry,
};

use thiserror::Error;

use crate::error::ValidationError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read catalog file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),
    #[error("Invalid catalog entry: {0}")]
    Validation(#[from] ValidationError),
    #[error("Unknown aircraft model: {0}")]
    UnknownAircraftModel(String),
    #[error("Duplicate airport: {0}")]
    DuplicateAirport(String),
    #[error("Route {origin} -> {destination} (alternate {alternate:?}) references an unknown airport")]
    UnknownAirport {
        origin: String,
        destination: String,
        alternate: Option<String>,
    },
}
