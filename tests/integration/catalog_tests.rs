use std::io::Write;

use fleet_registry::{Catalog, ConfigError, Location, ModelRef, Registry};
use pretty_assertions::assert_eq;

use crate::common::{
    assert_location_eq, assert_runway_shape, helicopter_specs, init_test_logging, CATALOG_YAML,
};

fn write_catalog(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn test_load_registry_from_yaml_file() {
    init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(&dir, "fleet.yml", CATALOG_YAML);

    let catalog = Catalog::from_file(&path).unwrap();
    let registry = Registry::from_catalog(&catalog).unwrap();

    assert_eq!(registry.aircraft_models().len(), 2);
    assert_eq!(registry.airports().len(), 3);
    assert_eq!(registry.airports().runways().len(), 3);
    assert_eq!(registry.aircraft().len(), 2);
    assert_eq!(registry.routes().len(), 2);

    let lax = registry.airports().get_airport("KLAX").unwrap();
    assert_location_eq(lax.location, 33.94, -118.41);
    let runways = registry.airports().runways();
    let first = runways.get_runway(lax.runways()[0]).unwrap();
    assert_runway_shape(first, 3685.0, 45.0, 83.0, 8);

    let helicopter = registry
        .aircraft()
        .aircraft()
        .find(|aircraft| aircraft.tail_code() == "SAR-26301")
        .unwrap();
    assert_eq!(helicopter.model().read().name(), "UH-60");
    assert!(!helicopter.visible);
    assert_location_eq(helicopter.location, 34.05, -118.24);

    let jumbo = registry
        .aircraft()
        .aircraft()
        .find(|aircraft| aircraft.tail_code() == "N747BA")
        .unwrap();
    assert!(jumbo.visible);
    assert_location_eq(jumbo.location, 0.0, 0.0);
}

#[test]
fn test_export_reloads_to_the_same_catalog() {
    let catalog = Catalog::from_yaml_str(CATALOG_YAML).unwrap();
    let registry = Registry::from_catalog(&catalog).unwrap();

    let exported = registry.to_catalog();
    let codes: Vec<&str> = exported.airports.iter().map(|a| a.code.as_str()).collect();
    assert_eq!(codes, vec!["KLAX", "SBCF", "SBGR"]);

    let yaml = exported.to_yaml_string().unwrap();
    let reloaded = Registry::from_catalog(&Catalog::from_yaml_str(&yaml).unwrap()).unwrap();
    assert_eq!(reloaded.to_catalog(), exported);

    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(&dir, "fleet.json", &exported.to_json_string().unwrap());
    assert_eq!(Catalog::from_file(&path).unwrap(), exported);
}

#[test]
fn test_deleted_model_survives_export_and_reload() {
    init_test_logging();
    let catalog = Catalog::from_yaml_str(CATALOG_YAML).unwrap();
    let mut registry = Registry::from_catalog(&catalog).unwrap();
    let model = registry.aircraft_models().find_by_name("UH-60").unwrap();
    assert!(registry.aircraft_models_mut().delete_aircraft_model(&model));

    let exported = registry.to_catalog();
    let retired: Vec<&str> = exported
        .aircraft_models
        .iter()
        .filter(|entry| entry.retired)
        .map(|entry| entry.name.as_str())
        .collect();
    assert_eq!(retired, vec!["UH-60"]);

    let yaml = exported.to_yaml_string().unwrap();
    let reloaded = Registry::from_catalog(&Catalog::from_yaml_str(&yaml).unwrap()).unwrap();
    assert!(reloaded.aircraft_models().find_by_name("UH-60").is_none());
    assert_eq!(reloaded.aircraft_models().len(), 1);

    let helicopter = reloaded
        .aircraft()
        .aircraft()
        .find(|aircraft| aircraft.tail_code() == "SAR-26301")
        .unwrap();
    assert_eq!(helicopter.model().read().name(), "UH-60");
    assert_eq!(helicopter.model().read().specs(), model.read().specs());
    assert_eq!(reloaded.to_catalog(), exported);
}

#[test]
fn test_models_sharing_a_name_reload_to_the_right_aircraft() {
    let mut registry = Registry::new();
    let models = registry.aircraft_models_mut();
    models.create_aircraft_model("UH-60", helicopter_specs()).unwrap();
    let mut stretched = helicopter_specs();
    stretched.capacity = 99;
    let second = models.create_aircraft_model("UH-60", stretched).unwrap();
    registry
        .aircraft_mut()
        .create_aircraft("SAR-26302", second, 2005, Location::default())
        .unwrap();

    let exported = registry.to_catalog();
    assert_eq!(exported.aircraft[0].model, ModelRef::Index { index: 1 });

    let json = exported.to_json_string().unwrap();
    let reloaded = Registry::from_catalog(&Catalog::from_json_str(&json).unwrap()).unwrap();
    let aircraft = reloaded.aircraft().aircraft().next().unwrap();
    assert_eq!(aircraft.model().read().capacity(), 99);
    assert_eq!(reloaded.aircraft_models().len(), 2);
    assert_eq!(reloaded.to_catalog(), exported);
}

#[test]
fn test_invalid_model_in_catalog() {
    init_test_logging();
    let yaml = CATALOG_YAML.replace("prop_sub_type: Turbo shaft", "prop_sub_type: Turbo fan");
    let catalog = Catalog::from_yaml_str(&yaml).unwrap();

    match Registry::from_catalog(&catalog) {
        Err(ConfigError::Validation(err)) => assert_eq!(err.field(), "prop_sub_type"),
        other => panic!("expected a validation error, got {:?}", other),
    }
}

#[test]
fn test_unknown_display_name_fails_to_parse() {
    let yaml = CATALOG_YAML.replace("size: Medium", "size: Medium-ish");
    assert!(matches!(
        Catalog::from_yaml_str(&yaml),
        Err(ConfigError::YamlError(_))
    ));
}

#[test]
fn test_invalid_json_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(&dir, "fleet.json", "{ \"airports\": [ }");
    assert!(matches!(
        Catalog::from_file(&path),
        Err(ConfigError::JsonError(_))
    ));
}
