use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::error::Result;
use crate::managers::{RunwayManager, RunwayUpdate};
use crate::models::{Airport, Location, RunwayId};

/// Owns the airports and, through its [`RunwayManager`], their runways.
///
/// Runways are only created and deleted through the airport they belong to,
/// so every listed runway id resolves and every runway is listed once.
#[derive(Debug, Default)]
pub struct AirportManager {
    airports: BTreeMap<String, Airport>,
    runways: RunwayManager,
}

impl AirportManager {
    pub fn new() -> Self {
        Self {
            airports: BTreeMap::new(),
            runways: RunwayManager::new(),
        }
    }

    /// Returns `Ok(false)` when the code is already taken; the registered
    /// airport is left as it is.
    pub fn create_airport(&mut self, code: impl Into<String>, location: Location) -> Result<bool> {
        let code = code.into();
        if self.airports.contains_key(&code) {
            warn!("Airport {} already exists", code);
            return Ok(false);
        }

        let airport = Airport::new(code, location)?;
        debug!("Created airport {}", airport.code());
        self.airports.insert(airport.code().to_string(), airport);
        Ok(true)
    }

    pub fn delete_airport(&mut self, airport: &Airport) -> bool {
        self.delete_airport_by_code(airport.code())
    }

    /// Removes the airport and every runway it lists. Runways that are
    /// already gone from the `RunwayManager` are skipped.
    pub fn delete_airport_by_code(&mut self, code: &str) -> bool {
        let Some(airport) = self.airports.remove(code) else {
            return false;
        };

        for &runway_id in airport.runways() {
            if !self.runways.delete_runway_by_id(runway_id) {
                warn!(
                    "Runway {} listed by airport {} was already deleted",
                    runway_id, code
                );
            }
        }
        debug!(
            "Deleted airport {} with {} runway(s)",
            code,
            airport.runways().len()
        );
        true
    }

    pub fn get_airport(&self, code: &str) -> Option<&Airport> {
        self.airports.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.airports.contains_key(code)
    }

    /// Airports sorted by code.
    pub fn airports(&self) -> impl Iterator<Item = &Airport> + '_ {
        self.airports.values()
    }

    pub fn update_airport_location(&mut self, code: &str, location: Location) -> bool {
        match self.airports.get_mut(code) {
            Some(airport) => {
                airport.location = location;
                true
            }
            None => false,
        }
    }

    /// Creates a runway and attaches it to the airport. `None` when the
    /// airport is unknown or the runway data is invalid.
    pub fn add_runway_to_airport(
        &mut self,
        code: &str,
        length: f64,
        width: f64,
        heading: f64,
    ) -> Option<RunwayId> {
        match self.try_add_runway_to_airport(code, length, width, heading) {
            Ok(id) => id,
            Err(err) => {
                warn!("Rejected runway for airport {}: {}", code, err);
                None
            }
        }
    }

    /// Like [`add_runway_to_airport`](Self::add_runway_to_airport) but keeps
    /// the validation error. `Ok(None)` means the airport is unknown.
    pub fn try_add_runway_to_airport(
        &mut self,
        code: &str,
        length: f64,
        width: f64,
        heading: f64,
    ) -> Result<Option<RunwayId>> {
        let Some(airport) = self.airports.get_mut(code) else {
            return Ok(None);
        };

        let id = self.runways.create_runway(code, length, width, heading)?.id();
        airport.runways.push(id);
        Ok(Some(id))
    }

    /// Detaches and deletes a runway. Fails when the airport does not list
    /// `runway_id` or the runway can no longer be deleted.
    pub fn remove_runway_from_airport(&mut self, code: &str, runway_id: RunwayId) -> bool {
        let Some(airport) = self.airports.get_mut(code) else {
            return false;
        };
        if !airport.has_runway(runway_id) {
            return false;
        }
        if !self.runways.delete_runway_by_id(runway_id) {
            return false;
        }

        airport.runways.retain(|&id| id != runway_id);
        true
    }

    /// Read access to the runways of every airport.
    pub fn runways(&self) -> &RunwayManager {
        &self.runways
    }

    /// See [`RunwayManager::update_runway`].
    pub fn update_runway(&mut self, id: RunwayId, update: RunwayUpdate) -> Result<bool> {
        self.runways.update_runway(id, update)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.airports.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }
}
