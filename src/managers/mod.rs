mod aircraft;
mod aircraft_model;
mod airport;
mod route;
mod runway;

pub use aircraft::AircraftManager;
pub use aircraft_model::AircraftModelManager;
pub use airport::AirportManager;
pub use route::RouteManager;
pub use runway::{RunwayManager, RunwayUpdate};
