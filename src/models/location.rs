use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

/// A point on the map in lat-lon degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawLocation")]
pub struct Location {
    lat: f64,
    lon: f64,
}

#[derive(Deserialize)]
struct RawLocation {
    lat: f64,
    lon: f64,
}

impl TryFrom<RawLocation> for Location {
    type Error = ValidationError;

    fn try_from(raw: RawLocation) -> Result<Self> {
        Location::new(raw.lat, raw.lon)
    }
}

pub fn validate_lat(lat: f64) -> Result<f64> {
    if !(-90.0..=90.0).contains(&lat) {
        return Err(ValidationError::out_of_range(
            "lat",
            "latitude has to be between -90 and 90 degrees",
        ));
    }
    Ok(lat)
}

pub fn validate_lon(lon: f64) -> Result<f64> {
    if !(-180.0..=180.0).contains(&lon) {
        return Err(ValidationError::out_of_range(
            "lon",
            "longitude has to be between -180 and 180 degrees",
        ));
    }
    Ok(lon)
}

impl Location {
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        Ok(Self {
            lat: validate_lat(lat)?,
            lon: validate_lon(lon)?,
        })
    }

    #[inline]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    #[inline]
    pub fn lon(&self) -> f64 {
        self.lon
    }

    pub fn set_lat(&mut self, lat: f64) -> Result<()> {
        self.lat = validate_lat(lat)?;
        Ok(())
    }

    pub fn set_lon(&mut self, lon: f64) -> Result<()> {
        self.lon = validate_lon(lon)?;
        Ok(())
    }
}
