pub mod config;
pub mod error;
pub mod managers;
pub mod models;
mod registry;

pub use config::{Catalog, ConfigError, ModelRef};
pub use error::{Result, ValidationError};
pub use managers::{
    AircraftManager, AircraftModelManager, AirportManager, RouteManager, RunwayManager,
    RunwayUpdate,
};
pub use models::{
    Aircraft, AircraftCategory, AircraftId, AircraftMission, AircraftModel, AircraftModelId,
    AircraftPropSubType, AircraftPropType, AircraftSize, AircraftSpecs, Airport, Location, Route,
    RouteId, Runway, RunwayId, SharedModel,
};
pub use registry::Registry;
