mod shared;
mod types;

pub use shared::SharedModel;
pub use types::{
    AircraftCategory, AircraftMission, AircraftPropSubType, AircraftPropType, AircraftSize,
};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};
use crate::models::AircraftModelId;

/// Technical specification of an aircraft type.
///
/// This is a plain data carrier; the invariants are only guaranteed once the
/// specs are wrapped in an [`AircraftModel`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftSpecs {
    /// Passenger capacity.
    pub capacity: u32,
    pub manufacturer: String,
    pub size: AircraftSize,
    /// Categories the type belongs to, at least one.
    pub category: Vec<AircraftCategory>,
    pub prop_type: AircraftPropType,
    pub prop_sub_type: AircraftPropSubType,
    /// Missions the type can fly, each allowed by at least one of `category`.
    pub available_missions: Vec<AircraftMission>,
    /// [kg]
    pub gross_weight: f64,
    /// [l]
    pub fuel_capacity: f64,
    /// Fraction in (0, 1].
    pub efficiency: f64,
    /// [km/h]
    pub max_speed: f64,
    /// [ft]
    pub max_height: f64,
    /// [kg], strictly above `gross_weight`.
    pub max_weight: f64,
}

/// A validated aircraft type. Aircraft share a model through a [`SharedModel`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AircraftModel {
    id: AircraftModelId,
    name: String,
    #[serde(flatten)]
    specs: AircraftSpecs,
}

/// Whether `prop_sub_type` can be fitted to `prop_type`.
pub fn validate_prop_sub_type(prop_type: AircraftPropType, prop_sub_type: AircraftPropSubType) -> bool {
    prop_type.allowed_sub_types().contains(&prop_sub_type)
}

/// Whether every mission is allowed by at least one of the categories.
pub fn validate_missions(categories: &[AircraftCategory], missions: &[AircraftMission]) -> bool {
    missions.iter().all(|mission| {
        categories
            .iter()
            .any(|category| category.allowed_missions().contains(mission))
    })
}

fn require_non_empty(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ValidationError::empty(field));
    }
    Ok(())
}

fn require_positive(field: &'static str, value: f64, message: &str) -> Result<()> {
    if !(value > 0.0) {
        return Err(ValidationError::out_of_range(field, message));
    }
    Ok(())
}

fn check_capacity(capacity: u32) -> Result<()> {
    if capacity == 0 {
        return Err(ValidationError::out_of_range(
            "capacity",
            "capacity must be greater than 0",
        ));
    }
    Ok(())
}

fn check_efficiency(efficiency: f64) -> Result<()> {
    if !(efficiency > 0.0 && efficiency <= 1.0) {
        return Err(ValidationError::out_of_range(
            "efficiency",
            "efficiency must be greater than 0 and less than or equal to 1",
        ));
    }
    Ok(())
}

fn check_weights(gross_weight: f64, max_weight: f64) -> Result<()> {
    if !(max_weight > gross_weight) {
        return Err(ValidationError::incompatible(
            "max_weight",
            "max weight must be greater than gross weight",
        ));
    }
    Ok(())
}

fn check_propulsion(prop_type: AircraftPropType, prop_sub_type: AircraftPropSubType) -> Result<()> {
    if !validate_prop_sub_type(prop_type, prop_sub_type) {
        return Err(ValidationError::incompatible(
            "prop_sub_type",
            format!("{} is not allowed for {} aircraft", prop_sub_type, prop_type),
        ));
    }
    Ok(())
}

fn check_missions(categories: &[AircraftCategory], missions: &[AircraftMission]) -> Result<()> {
    if categories.is_empty() {
        return Err(ValidationError::empty("category"));
    }
    if missions.is_empty() {
        return Err(ValidationError::empty("available_missions"));
    }
    if !validate_missions(categories, missions) {
        return Err(ValidationError::incompatible(
            "available_missions",
            "mission is not allowed for this category of aircraft",
        ));
    }
    Ok(())
}

/// Runs every model rule in order and reports the first violation.
pub fn validate_specs(name: &str, specs: &AircraftSpecs) -> Result<()> {
    require_non_empty("name", name)?;
    check_capacity(specs.capacity)?;
    require_non_empty("manufacturer", &specs.manufacturer)?;
    require_positive(
        "gross_weight",
        specs.gross_weight,
        "gross weight must be greater than 0",
    )?;
    require_positive(
        "fuel_capacity",
        specs.fuel_capacity,
        "fuel capacity must be greater than 0",
    )?;
    check_efficiency(specs.efficiency)?;
    require_positive("max_speed", specs.max_speed, "max speed must be greater than 0")?;
    require_positive(
        "max_height",
        specs.max_height,
        "max height must be greater than 0",
    )?;
    require_positive(
        "max_weight",
        specs.max_weight,
        "max weight must be greater than 0",
    )?;
    check_weights(specs.gross_weight, specs.max_weight)?;
    if specs.category.is_empty() {
        return Err(ValidationError::empty("category"));
    }
    if specs.available_missions.is_empty() {
        return Err(ValidationError::empty("available_missions"));
    }
    check_propulsion(specs.prop_type, specs.prop_sub_type)?;
    check_missions(&specs.category, &specs.available_missions)
}

impl AircraftModel {
    pub fn new(id: AircraftModelId, name: impl Into<String>, specs: AircraftSpecs) -> Result<Self> {
        let name = name.into();
        validate_specs(&name, &specs)?;
        Ok(Self { id, name, specs })
    }

    pub fn id(&self) -> AircraftModelId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn specs(&self) -> &AircraftSpecs {
        &self.specs
    }

    pub fn capacity(&self) -> u32 {
        self.specs.capacity
    }

    pub fn manufacturer(&self) -> &str {
        &self.specs.manufacturer
    }

    pub fn size(&self) -> AircraftSize {
        self.specs.size
    }

    pub fn category(&self) -> &[AircraftCategory] {
        &self.specs.category
    }

    pub fn prop_type(&self) -> AircraftPropType {
        self.specs.prop_type
    }

    pub fn prop_sub_type(&self) -> AircraftPropSubType {
        self.specs.prop_sub_type
    }

    pub fn available_missions(&self) -> &[AircraftMission] {
        &self.specs.available_missions
    }

    pub fn gross_weight(&self) -> f64 {
        self.specs.gross_weight
    }

    pub fn fuel_capacity(&self) -> f64 {
        self.specs.fuel_capacity
    }

    pub fn efficiency(&self) -> f64 {
        self.specs.efficiency
    }

    pub fn max_speed(&self) -> f64 {
        self.specs.max_speed
    }

    pub fn max_height(&self) -> f64 {
        self.specs.max_height
    }

    pub fn max_weight(&self) -> f64 {
        self.specs.max_weight
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        require_non_empty("name", &name)?;
        self.name = name;
        Ok(())
    }

    pub fn set_capacity(&mut self, capacity: u32) -> Result<()> {
        check_capacity(capacity)?;
        self.specs.capacity = capacity;
        Ok(())
    }

    pub fn set_manufacturer(&mut self, manufacturer: impl Into<String>) -> Result<()> {
        let manufacturer = manufacturer.into();
        require_non_empty("manufacturer", &manufacturer)?;
        self.specs.manufacturer = manufacturer;
        Ok(())
    }

    pub fn set_size(&mut self, size: AircraftSize) {
        self.specs.size = size;
    }

    /// Replaces the categories; the current missions must remain allowed.
    pub fn set_category(&mut self, category: Vec<AircraftCategory>) -> Result<()> {
        check_missions(&category, &self.specs.available_missions)?;
        self.specs.category = category;
        Ok(())
    }

    /// Replaces the propulsion type; the current sub type must remain allowed.
    pub fn set_prop_type(&mut self, prop_type: AircraftPropType) -> Result<()> {
        check_propulsion(prop_type, self.specs.prop_sub_type)?;
        self.specs.prop_type = prop_type;
        Ok(())
    }

    pub fn set_prop_sub_type(&mut self, prop_sub_type: AircraftPropSubType) -> Result<()> {
        check_propulsion(self.specs.prop_type, prop_sub_type)?;
        self.specs.prop_sub_type = prop_sub_type;
        Ok(())
    }

    pub fn set_available_missions(&mut self, missions: Vec<AircraftMission>) -> Result<()> {
        check_missions(&self.specs.category, &missions)?;
        self.specs.available_missions = missions;
        Ok(())
    }

    pub fn set_gross_weight(&mut self, gross_weight: f64) -> Result<()> {
        require_positive(
            "gross_weight",
            gross_weight,
            "gross weight must be greater than 0",
        )?;
        check_weights(gross_weight, self.specs.max_weight)?;
        self.specs.gross_weight = gross_weight;
        Ok(())
    }

    pub fn set_fuel_capacity(&mut self, fuel_capacity: f64) -> Result<()> {
        require_positive(
            "fuel_capacity",
            fuel_capacity,
            "fuel capacity must be greater than 0",
        )?;
        self.specs.fuel_capacity = fuel_capacity;
        Ok(())
    }

    pub fn set_efficiency(&mut self, efficiency: f64) -> Result<()> {
        check_efficiency(efficiency)?;
        self.specs.efficiency = efficiency;
        Ok(())
    }

    pub fn set_max_speed(&mut self, max_speed: f64) -> Result<()> {
        require_positive("max_speed", max_speed, "max speed must be greater than 0")?;
        self.specs.max_speed = max_speed;
        Ok(())
    }

    pub fn set_max_height(&mut self, max_height: f64) -> Result<()> {
        require_positive("max_height", max_height, "max height must be greater than 0")?;
        self.specs.max_height = max_height;
        Ok(())
    }

    pub fn set_max_weight(&mut self, max_weight: f64) -> Result<()> {
        require_positive("max_weight", max_weight, "max weight must be greater than 0")?;
        check_weights(self.specs.gross_weight, max_weight)?;
        self.specs.max_weight = max_weight;
        Ok(())
    }

    /// Swaps in a whole new set of specs. Co-validated fields can change
    /// together here without tripping the per-field setters.
    pub fn update_specs(&mut self, specs: AircraftSpecs) -> Result<()> {
        validate_specs(&self.name, &specs)?;
        self.specs = specs;
        Ok(())
    }
}
