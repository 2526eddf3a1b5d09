use serde::Serialize;

use crate::error::{Result, ValidationError};
use crate::models::RunwayId;

/// A runway belonging to an airport. The airport is referenced by code only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Runway {
    id: RunwayId,
    airport_code: String,
    number: u8,
    length: f64,  // [m]
    width: f64,   // [m]
    heading: f64, // [degrees]
}

pub fn validate_length(length: f64) -> Result<f64> {
    if !(length > 0.0) {
        return Err(ValidationError::out_of_range(
            "length",
            "runway length has to be bigger than 0m",
        ));
    }
    Ok(length)
}

pub fn validate_width(width: f64) -> Result<f64> {
    if !(width > 0.0) {
        return Err(ValidationError::out_of_range(
            "width",
            "runway width has to be bigger than 0m",
        ));
    }
    Ok(width)
}

pub fn validate_heading(heading: f64) -> Result<f64> {
    if !(0.0..=360.0).contains(&heading) {
        return Err(ValidationError::out_of_range(
            "heading",
            "heading has to be between 0 and 360 degrees",
        ));
    }
    Ok(heading)
}

/// Two digit designator for a heading. A designator of 0 is published as 36.
pub fn runway_number(heading: f64) -> u8 {
    match (heading / 10.0).round() as u8 {
        0 => 36,
        n => n,
    }
}

impl Runway {
    pub fn new(
        id: RunwayId,
        airport_code: impl Into<String>,
        length: f64,
        width: f64,
        heading: f64,
    ) -> Result<Self> {
        let airport_code = airport_code.into();
        if airport_code.is_empty() {
            return Err(ValidationError::empty("airport_code"));
        }
        let length = validate_length(length)?;
        let width = validate_width(width)?;
        let heading = validate_heading(heading)?;

        Ok(Self {
            id,
            airport_code,
            number: runway_number(heading),
            length,
            width,
            heading,
        })
    }

    pub fn id(&self) -> RunwayId {
        self.id
    }

    pub fn airport_code(&self) -> &str {
        &self.airport_code
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Heading as it was given; a heading of 0 is not normalized to 360.
    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn set_length(&mut self, length: f64) -> Result<()> {
        self.length = validate_length(length)?;
        Ok(())
    }

    pub fn set_width(&mut self, width: f64) -> Result<()> {
        self.width = validate_width(width)?;
        Ok(())
    }

    pub fn set_heading(&mut self, heading: f64) -> Result<()> {
        self.heading = validate_heading(heading)?;
        self.number = runway_number(self.heading);
        Ok(())
    }
}
