use tracing::info;

use crate::config::{
    AircraftEntry, AirportEntry, Catalog, ConfigError, ModelEntry, ModelRef, RouteEntry,
    RunwayEntry,
};
use crate::managers::{AircraftManager, AircraftModelManager, AirportManager, RouteManager};
use crate::models::{Route, SharedModel};

/// Top-level container holding one instance of every manager.
#[derive(Debug, Default)]
pub struct Registry {
    aircraft_models: AircraftModelManager,
    aircraft: AircraftManager,
    airports: AirportManager,
    routes: RouteManager,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a catalog. Models come first, then airports
    /// with their runways, then aircraft and finally routes, so every entry
    /// can resolve the names it refers to. Models marked `retired` are
    /// removed from the model manager once their aircraft hold them.
    pub fn from_catalog(catalog: &Catalog) -> Result<Self, ConfigError> {
        let mut registry = Self::new();

        let mut models = Vec::with_capacity(catalog.aircraft_models.len());
        for entry in &catalog.aircraft_models {
            let model = registry
                .aircraft_models
                .create_aircraft_model(entry.name.as_str(), entry.specs.clone())?;
            models.push(model);
        }

        for entry in &catalog.airports {
            if !registry
                .airports
                .create_airport(entry.code.as_str(), entry.location)?
            {
                return Err(ConfigError::DuplicateAirport(entry.code.clone()));
            }
            for runway in &entry.runways {
                registry.airports.try_add_runway_to_airport(
                    &entry.code,
                    runway.length,
                    runway.width,
                    runway.heading,
                )?;
            }
        }

        for entry in &catalog.aircraft {
            let model = resolve_model(&catalog.aircraft_models, &models, &entry.model)
                .ok_or_else(|| ConfigError::UnknownAircraftModel(entry.model.to_string()))?;
            let id = registry
                .aircraft
                .create_aircraft(entry.tail_code.as_str(), model, entry.year, entry.location)?
                .id();
            if let Some(aircraft) = registry.aircraft.get_aircraft_mut(id) {
                aircraft.visible = entry.visible;
            }
        }

        for (entry, model) in catalog.aircraft_models.iter().zip(&models) {
            if entry.retired {
                registry.aircraft_models.delete_aircraft_model_by_id(model.id());
            }
        }

        for entry in &catalog.routes {
            if registry
                .create_route(&entry.origin, &entry.destination, entry.alternate.as_deref())
                .is_none()
            {
                return Err(ConfigError::UnknownAirport {
                    origin: entry.origin.clone(),
                    destination: entry.destination.clone(),
                    alternate: entry.alternate.clone(),
                });
            }
        }

        info!(
            "Registry built with {} model(s), {} airport(s), {} runway(s), {} aircraft, {} route(s)",
            registry.aircraft_models.len(),
            registry.airports.len(),
            registry.airports.runways().len(),
            registry.aircraft.len(),
            registry.routes.len()
        );
        Ok(registry)
    }

    /// Exports the live state. Models deleted from the manager but still
    /// held by aircraft follow the live ones, marked `retired`. Aircraft
    /// refer to their model by name when the name is unique in the export
    /// and by position otherwise.
    pub fn to_catalog(&self) -> Catalog {
        let mut exported = self.aircraft_models.get_aircraft_models();
        let live_count = exported.len();

        let positions: Vec<usize> = self
            .aircraft
            .aircraft()
            .map(|aircraft| {
                match exported
                    .iter()
                    .position(|model| SharedModel::ptr_eq(model, aircraft.model()))
                {
                    Some(position) => position,
                    None => {
                        exported.push(aircraft.model().clone());
                        exported.len() - 1
                    }
                }
            })
            .collect();

        let aircraft_models: Vec<ModelEntry> = exported
            .iter()
            .enumerate()
            .map(|(position, model)| {
                let model = model.read();
                ModelEntry {
                    name: model.name().to_string(),
                    specs: model.specs().clone(),
                    retired: position >= live_count,
                }
            })
            .collect();

        let runways = self.airports.runways();
        let airports = self
            .airports
            .airports()
            .map(|airport| AirportEntry {
                code: airport.code().to_string(),
                location: airport.location,
                runways: airport
                    .runways()
                    .iter()
                    .filter_map(|&id| runways.get_runway(id))
                    .map(|runway| RunwayEntry {
                        length: runway.length(),
                        width: runway.width(),
                        heading: runway.heading(),
                    })
                    .collect(),
            })
            .collect();

        let aircraft = self
            .aircraft
            .aircraft()
            .zip(positions)
            .map(|(aircraft, position)| AircraftEntry {
                tail_code: aircraft.tail_code().to_string(),
                model: model_ref(&aircraft_models, position),
                year: aircraft.year(),
                visible: aircraft.visible,
                location: aircraft.location,
            })
            .collect();

        let routes = self
            .routes
            .routes()
            .map(|route| RouteEntry {
                origin: route.origin().to_string(),
                destination: route.destination().to_string(),
                alternate: route.alternate().map(str::to_string),
            })
            .collect();

        Catalog {
            aircraft_models,
            airports,
            aircraft,
            routes,
        }
    }

    /// Creates a route between airports registered in this registry.
    pub fn create_route(
        &mut self,
        origin: &str,
        destination: &str,
        alternate: Option<&str>,
    ) -> Option<&Route> {
        self.routes
            .create_route(&self.airports, origin, destination, alternate)
    }

    pub fn aircraft_models(&self) -> &AircraftModelManager {
        &self.aircraft_models
    }

    pub fn aircraft_models_mut(&mut self) -> &mut AircraftModelManager {
        &mut self.aircraft_models
    }

    pub fn aircraft(&self) -> &AircraftManager {
        &self.aircraft
    }

    pub fn aircraft_mut(&mut self) -> &mut AircraftManager {
        &mut self.aircraft
    }

    pub fn airports(&self) -> &AirportManager {
        &self.airports
    }

    pub fn airports_mut(&mut self) -> &mut AirportManager {
        &mut self.airports
    }

    pub fn routes(&self) -> &RouteManager {
        &self.routes
    }

    pub fn routes_mut(&mut self) -> &mut RouteManager {
        &mut self.routes
    }
}

/// Model created for the catalog entry `model` points at.
fn resolve_model(
    entries: &[ModelEntry],
    models: &[SharedModel],
    model: &ModelRef,
) -> Option<SharedModel> {
    let position = match model {
        ModelRef::Name(name) => entries.iter().position(|entry| &entry.name == name)?,
        ModelRef::Index { index } => *index,
    };
    models.get(position).cloned()
}

fn model_ref(entries: &[ModelEntry], position: usize) -> ModelRef {
    let name = &entries[position].name;
    if entries.iter().filter(|entry| &entry.name == name).count() == 1 {
        ModelRef::Name(name.clone())
    } else {
        ModelRef::Index { index: position }
    }
}
