use fleet_registry::{
    AircraftCategory, AircraftMission, AircraftPropSubType, AircraftPropType, AircraftSize,
    AircraftSpecs, Location, Registry,
};

/// Create a wide-body airliner specification
pub fn jumbo_specs() -> AircraftSpecs {
    AircraftSpecs {
        capacity: 500,
        manufacturer: "Boeing".to_string(),
        size: AircraftSize::VeryLarge,
        category: vec![AircraftCategory::Civilian],
        prop_type: AircraftPropType::MultiEngine,
        prop_sub_type: AircraftPropSubType::TurboFan,
        available_missions: vec![AircraftMission::Transport, AircraftMission::Cargo],
        gross_weight: 180_000.0,
        fuel_capacity: 240_000.0,
        efficiency: 0.6,
        max_speed: 988.0,
        max_height: 43_100.0,
        max_weight: 447_700.0,
    }
}

/// Create a military utility helicopter specification
pub fn helicopter_specs() -> AircraftSpecs {
    AircraftSpecs {
        capacity: 11,
        manufacturer: "Sikorsky".to_string(),
        size: AircraftSize::Medium,
        category: vec![AircraftCategory::Military],
        prop_type: AircraftPropType::Helicopter,
        prop_sub_type: AircraftPropSubType::TurboShaft,
        available_missions: vec![AircraftMission::Rescue, AircraftMission::Cargo],
        gross_weight: 4_800.0,
        fuel_capacity: 1_360.0,
        efficiency: 0.4,
        max_speed: 295.0,
        max_height: 19_000.0,
        max_weight: 10_660.0,
    }
}

pub fn loc(lat: f64, lon: f64) -> Location {
    Location::new(lat, lon).unwrap()
}

/// Create a registry with three airports and no runways
pub fn registry_with_airports() -> Registry {
    let mut registry = Registry::new();
    let airports = registry.airports_mut();
    assert!(airports.create_airport("KLAX", loc(33.94, -118.41)).unwrap());
    assert!(airports.create_airport("SBCF", loc(-19.63, -43.96)).unwrap());
    assert!(airports.create_airport("SBGR", loc(-23.43, -46.47)).unwrap());
    registry
}

pub const CATALOG_YAML: &str = r#"
aircraft_models:
  - name: 747-8
    capacity: 467
    manufacturer: Boeing
    size: Very large
    category: [Civilian]
    prop_type: Multi engine
    prop_sub_type: Turbo fan
    available_missions: [Transport, Cargo]
    gross_weight: 220128
    fuel_capacity: 238610
    efficiency: 0.6
    max_speed: 988
    max_height: 43100
    max_weight: 447700
  - name: UH-60
    capacity: 11
    manufacturer: Sikorsky
    size: Medium
    category: [Military]
    prop_type: Helicopter
    prop_sub_type: Turbo shaft
    available_missions: [Rescue]
    gross_weight: 4800
    fuel_capacity: 1360
    efficiency: 0.4
    max_speed: 295
    max_height: 19000
    max_weight: 10660
airports:
  - code: KLAX
    location: { lat: 33.94, lon: -118.41 }
    runways:
      - { length: 3685, width: 45, heading: 83 }
      - { length: 3382, width: 61, heading: 263 }
  - code: SBGR
    location: { lat: -23.43, lon: -46.47 }
    runways:
      - { length: 3700, width: 45, heading: 95 }
  - code: SBCF
    location: { lat: -19.63, lon: -43.96 }
aircraft:
  - tail_code: N747BA
    model: 747-8
    year: 2011
  - tail_code: SAR-26301
    model: UH-60
    year: 2001
    visible: false
    location: { lat: 34.05, lon: -118.24 }
routes:
  - origin: KLAX
    destination: SBGR
    alternate: SBCF
  - origin: SBGR
    destination: KLAX
"#;
