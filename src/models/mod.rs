mod aircraft;
mod aircraft_model;
mod airport;
mod id;
mod location;
mod route;
mod runway;

pub use aircraft::{Aircraft, MIN_YEAR};
pub use aircraft_model::{
    validate_missions, validate_prop_sub_type, validate_specs, AircraftCategory, AircraftMission,
    AircraftModel, AircraftPropSubType, AircraftPropType, AircraftSize, AircraftSpecs,
    SharedModel,
};
pub use airport::Airport;
pub use id::{AircraftId, AircraftModelId, IdAllocator, RouteId, RunwayId};
pub use location::Location;
pub use route::Route;
pub use runway::{runway_number, Runway};
