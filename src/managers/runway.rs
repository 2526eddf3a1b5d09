use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::error::Result;
use crate::models::{IdAllocator, Runway, RunwayId};

/// Partial runway update; `None` fields are left untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunwayUpdate {
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub heading: Option<f64>,
}

impl RunwayUpdate {
    pub fn length(mut self, length: f64) -> Self {
        self.length = Some(length);
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn heading(mut self, heading: f64) -> Self {
        self.heading = Some(heading);
        self
    }
}

#[derive(Debug, Default)]
pub struct RunwayManager {
    runways: BTreeMap<RunwayId, Runway>,
    ids: IdAllocator,
}

impl RunwayManager {
    pub fn new() -> Self {
        Self {
            runways: BTreeMap::new(),
            ids: IdAllocator::new(),
        }
    }

    pub fn create_runway(
        &mut self,
        airport_code: impl Into<String>,
        length: f64,
        width: f64,
        heading: f64,
    ) -> Result<&Runway> {
        let runway = self
            .ids
            .allocate_with(|id| Runway::new(id, airport_code, length, width, heading))?;
        let id = runway.id();
        debug!(
            "Created runway {} ({:02}) at {}",
            id,
            runway.number(),
            runway.airport_code()
        );

        Ok(&*self.runways.entry(id).or_insert(runway))
    }

    /// Applies the fields present in `update`. Returns `Ok(false)` for an
    /// unknown id; a validation error leaves the runway unchanged.
    pub fn update_runway(&mut self, id: RunwayId, update: RunwayUpdate) -> Result<bool> {
        let Some(runway) = self.runways.get_mut(&id) else {
            return Ok(false);
        };

        let mut updated = runway.clone();
        if let Some(length) = update.length {
            updated.set_length(length)?;
        }
        if let Some(width) = update.width {
            updated.set_width(width)?;
        }
        if let Some(heading) = update.heading {
            updated.set_heading(heading)?;
        }
        *runway = updated;
        debug!("Updated runway {}", id);
        Ok(true)
    }

    pub fn delete_runway(&mut self, runway: &Runway) -> bool {
        self.delete_runway_by_id(runway.id())
    }

    pub fn delete_runway_by_id(&mut self, id: RunwayId) -> bool {
        match self.runways.remove(&id) {
            Some(runway) => {
                debug!("Deleted runway {} at {}", id, runway.airport_code());
                true
            }
            None => false,
        }
    }

    pub fn get_runway(&self, id: RunwayId) -> Option<&Runway> {
        self.runways.get(&id)
    }

    pub fn runways(&self) -> impl Iterator<Item = &Runway> + '_ {
        self.runways.values()
    }

    /// Runways whose back-reference points at `airport_code`.
    pub fn runways_for_airport<'a>(
        &'a self,
        airport_code: &'a str,
    ) -> impl Iterator<Item = &'a Runway> + 'a {
        self.runways
            .values()
            .filter(move |runway| runway.airport_code() == airport_code)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.runways.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.runways.is_empty()
    }
}
