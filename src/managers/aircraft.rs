use std::collections::BTreeMap;
use tracing::debug;

use crate::error::Result;
use crate::models::{Aircraft, AircraftId, AircraftModelId, IdAllocator, Location, SharedModel};

/// Owns every aircraft instance in the registry.
#[derive(Debug, Default)]
pub struct AircraftManager {
    aircraft: BTreeMap<AircraftId, Aircraft>,
    ids: IdAllocator,
}

impl AircraftManager {
    pub fn new() -> Self {
        Self {
            aircraft: BTreeMap::new(),
            ids: IdAllocator::new(),
        }
    }

    /// Registers a new, visible aircraft. Invalid data consumes no id.
    pub fn create_aircraft(
        &mut self,
        tail_code: impl Into<String>,
        model: SharedModel,
        year: i32,
        location: Location,
    ) -> Result<&Aircraft> {
        let aircraft = self
            .ids
            .allocate_with(|id| Aircraft::new(id, tail_code, model, year, true, location))?;
        let id = aircraft.id();
        debug!("Created aircraft {} ({})", id, aircraft.tail_code());

        Ok(&*self.aircraft.entry(id).or_insert(aircraft))
    }

    pub fn delete_aircraft(&mut self, aircraft: &Aircraft) -> bool {
        self.delete_aircraft_by_id(aircraft.id())
    }

    /// Returns true iff the aircraft existed before the call.
    pub fn delete_aircraft_by_id(&mut self, id: AircraftId) -> bool {
        match self.aircraft.remove(&id) {
            Some(aircraft) => {
                debug!("Deleted aircraft {} ({})", id, aircraft.tail_code());
                true
            }
            None => false,
        }
    }

    pub fn get_aircraft(&self, id: AircraftId) -> Option<&Aircraft> {
        self.aircraft.get(&id)
    }

    pub fn get_aircraft_mut(&mut self, id: AircraftId) -> Option<&mut Aircraft> {
        self.aircraft.get_mut(&id)
    }

    /// Live aircraft in creation order.
    pub fn aircraft(&self) -> impl Iterator<Item = &Aircraft> + '_ {
        self.aircraft.values()
    }

    /// Aircraft flying the given model.
    pub fn aircraft_of_model(&self, model: AircraftModelId) -> impl Iterator<Item = &Aircraft> + '_ {
        self.aircraft
            .values()
            .filter(move |aircraft| aircraft.model().id() == model)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.aircraft.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.aircraft.is_empty()
    }
}
