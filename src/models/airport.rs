use serde::Serialize;

use crate::error::{Result, ValidationError};
use crate::models::{Location, RunwayId};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Airport {
    code: String,
    pub location: Location,
    pub(crate) runways: Vec<RunwayId>,
}

impl Airport {
    pub fn new(code: impl Into<String>, location: Location) -> Result<Self> {
        let code = code.into();
        if code.is_empty() {
            return Err(ValidationError::empty("code"));
        }
        Ok(Self {
            code,
            location,
            runways: Vec::new(),
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Runway ids in the order they were added.
    pub fn runways(&self) -> &[RunwayId] {
        &self.runways
    }

    pub fn has_runway(&self, id: RunwayId) -> bool {
        self.runways.contains(&id)
    }
}
