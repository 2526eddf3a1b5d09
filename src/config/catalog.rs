use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::info;

use crate::config::ConfigError;
use crate::models::{AircraftSpecs, Location};

/// Declarative description of a registry, loaded from YAML or JSON.
///
/// Entries reference each other by name: aircraft name their model, routes
/// name airport codes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub aircraft_models: Vec<ModelEntry>,
    pub airports: Vec<AirportEntry>,
    pub aircraft: Vec<AircraftEntry>,
    pub routes: Vec<RouteEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelEntry {
    pub name: String,
    #[serde(flatten)]
    pub specs: AircraftSpecs,
    /// Deleted from the model manager but still flown by some aircraft.
    #[serde(default, skip_serializing_if = "is_false")]
    pub retired: bool,
}

/// How an aircraft entry names its model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModelRef {
    /// First entry in `aircraft_models` with this name.
    Name(String),
    /// Position in `aircraft_models`, for names that are not unique.
    Index { index: usize },
}

impl From<&str> for ModelRef {
    fn from(name: &str) -> Self {
        ModelRef::Name(name.to_string())
    }
}

impl fmt::Display for ModelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelRef::Name(name) => f.write_str(name),
            ModelRef::Index { index } => write!(f, "#{}", index),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportEntry {
    pub code: String,
    pub location: Location,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub runways: Vec<RunwayEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunwayEntry {
    pub length: f64,  // [m]
    pub width: f64,   // [m]
    pub heading: f64, // [degrees]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftEntry {
    pub tail_code: String,
    pub model: ModelRef,
    pub year: i32,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub origin: String,
    pub destination: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate: Option<String>,
}

fn default_visible() -> bool {
    true
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Catalog {
    /// Reads a catalog, picking the format from the file extension
    /// (`.yaml`/`.yml` or `.json`).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let parse: fn(&str) -> Result<Self, ConfigError> = match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::from_yaml_str,
            Some("json") => Self::from_json_str,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        let file_contents = std::fs::read_to_string(path)?;
        let catalog = parse(&file_contents)?;

        info!(
            "Loaded catalog {}: {} model(s), {} airport(s), {} aircraft, {} route(s)",
            path.display(),
            catalog.aircraft_models.len(),
            catalog.airports.len(),
            catalog.aircraft.len(),
            catalog.routes.len()
        );
        Ok(catalog)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
