use std::collections::BTreeMap;
use tracing::debug;

use crate::error::Result;
use crate::models::{AircraftModel, AircraftModelId, AircraftSpecs, IdAllocator, SharedModel};

/// Owns the aircraft model catalog. Models are handed out as
/// [`SharedModel`] handles so that aircraft fly the current version.
#[derive(Debug, Default)]
pub struct AircraftModelManager {
    models: BTreeMap<AircraftModelId, SharedModel>,
    ids: IdAllocator,
}

impl AircraftModelManager {
    pub fn new() -> Self {
        Self {
            models: BTreeMap::new(),
            ids: IdAllocator::new(),
        }
    }

    pub fn create_aircraft_model(
        &mut self,
        name: impl Into<String>,
        specs: AircraftSpecs,
    ) -> Result<SharedModel> {
        let model = self
            .ids
            .allocate_with(|id| AircraftModel::new(id, name, specs))?;
        debug!("Created aircraft model {} ({})", model.id(), model.name());

        let model = SharedModel::new(model);
        self.models.insert(model.id(), model.clone());
        Ok(model)
    }

    pub fn delete_aircraft_model(&mut self, model: &SharedModel) -> bool {
        self.delete_aircraft_model_by_id(model.id())
    }

    /// Aircraft already holding the model keep their handle.
    pub fn delete_aircraft_model_by_id(&mut self, id: AircraftModelId) -> bool {
        match self.models.remove(&id) {
            Some(model) => {
                debug!("Deleted aircraft model {} ({})", id, model.read().name());
                true
            }
            None => false,
        }
    }

    pub fn get_aircraft_model(&self, id: AircraftModelId) -> Option<SharedModel> {
        self.models.get(&id).cloned()
    }

    pub fn contains(&self, id: AircraftModelId) -> bool {
        self.models.contains_key(&id)
    }

    /// Live models in insertion order.
    pub fn get_aircraft_models(&self) -> Vec<SharedModel> {
        self.models.values().cloned().collect()
    }

    /// First model registered under `name`.
    pub fn find_by_name(&self, name: &str) -> Option<SharedModel> {
        self.models
            .values()
            .find(|model| model.read().name() == name)
            .cloned()
    }

    /// Applies `edit` to the model, all or nothing. Returns `Ok(false)` for
    /// an unknown id. Every aircraft of the model sees the new version.
    pub fn update_aircraft_model<F>(&mut self, id: AircraftModelId, edit: F) -> Result<bool>
    where
        F: FnOnce(&mut AircraftModel) -> Result<()>,
    {
        let Some(model) = self.models.get(&id) else {
            return Ok(false);
        };

        model.update(edit)?;
        debug!("Updated aircraft model {}", id);
        Ok(true)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
