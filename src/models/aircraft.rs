use serde::Serialize;

use crate::error::{Result, ValidationError};
use crate::models::{AircraftId, Location, SharedModel};

/// First year of powered flight; nothing older can be registered.
pub const MIN_YEAR: i32 = 1903;

/// A physical aircraft of a given model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aircraft {
    id: AircraftId,
    tail_code: String,
    #[serde(serialize_with = "serialize_model_name")]
    model: SharedModel,
    year: i32,
    pub visible: bool,
    pub location: Location,
}

fn serialize_model_name<S>(model: &SharedModel, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(model.read().name())
}

fn validate_tail_code(tail_code: &str) -> Result<()> {
    if tail_code.is_empty() {
        return Err(ValidationError::empty("tail_code"));
    }
    Ok(())
}

fn validate_year(year: i32) -> Result<()> {
    if year < MIN_YEAR {
        return Err(ValidationError::out_of_range(
            "year",
            format!("year cannot be before {}", MIN_YEAR),
        ));
    }
    Ok(())
}

impl Aircraft {
    pub fn new(
        id: AircraftId,
        tail_code: impl Into<String>,
        model: SharedModel,
        year: i32,
        visible: bool,
        location: Location,
    ) -> Result<Self> {
        let tail_code = tail_code.into();
        validate_tail_code(&tail_code)?;
        validate_year(year)?;

        Ok(Self {
            id,
            tail_code,
            model,
            year,
            visible,
            location,
        })
    }

    pub fn id(&self) -> AircraftId {
        self.id
    }

    pub fn tail_code(&self) -> &str {
        &self.tail_code
    }

    /// The model this aircraft flies. Updates to the model show up here.
    pub fn model(&self) -> &SharedModel {
        &self.model
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn set_tail_code(&mut self, tail_code: impl Into<String>) -> Result<()> {
        let tail_code = tail_code.into();
        validate_tail_code(&tail_code)?;
        self.tail_code = tail_code;
        Ok(())
    }

    pub fn set_year(&mut self, year: i32) -> Result<()> {
        validate_year(year)?;
        self.year = year;
        Ok(())
    }
}
