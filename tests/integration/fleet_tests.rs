use fleet_registry::{
    AircraftId, AircraftMission, AircraftModelId, AircraftPropSubType, AircraftPropType, Location,
    Registry,
};
use pretty_assertions::assert_eq;

use crate::common::{
    assert_invalid_field, assert_location_eq, assert_same_model, helicopter_specs, jumbo_specs,
    loc,
};

#[test]
fn test_aircraft_share_their_model() {
    let mut registry = Registry::new();
    let model = registry
        .aircraft_models_mut()
        .create_aircraft_model("747-8", jumbo_specs())
        .unwrap();

    let fleet = registry.aircraft_mut();
    let a = fleet
        .create_aircraft("N747BA", model.clone(), 2011, Location::default())
        .unwrap()
        .id();
    let b = fleet
        .create_aircraft("N748BA", model.clone(), 2012, loc(47.9, -122.28))
        .unwrap()
        .id();

    let a = registry.aircraft().get_aircraft(a).unwrap();
    let b = registry.aircraft().get_aircraft(b).unwrap();
    assert_same_model(a.model(), b.model());
    assert!(a.visible && b.visible);
    assert_location_eq(b.location, 47.9, -122.28);
    assert_eq!(registry.aircraft().aircraft_of_model(model.id()).count(), 2);
}

#[test]
fn test_failed_creations_consume_no_ids() {
    let mut registry = Registry::new();
    let models = registry.aircraft_models_mut();

    let mut bad = jumbo_specs();
    bad.max_weight = bad.gross_weight;
    assert_invalid_field(models.create_aircraft_model("747-8", bad), "max_weight");
    assert_invalid_field(models.create_aircraft_model("", jumbo_specs()), "name");

    let model = models.create_aircraft_model("747-8", jumbo_specs()).unwrap();
    assert_eq!(model.id(), AircraftModelId::new(0));

    let fleet = registry.aircraft_mut();
    assert_invalid_field(
        fleet.create_aircraft("", model.clone(), 2011, Location::default()),
        "tail_code",
    );
    assert_invalid_field(
        fleet.create_aircraft("N747BA", model.clone(), 1902, Location::default()),
        "year",
    );
    let aircraft = fleet
        .create_aircraft("N747BA", model, 1903, Location::default())
        .unwrap();
    assert_eq!(aircraft.id(), AircraftId::new(0));
}

#[test]
fn test_ids_are_never_reused() {
    let mut registry = Registry::new();
    let models = registry.aircraft_models_mut();
    let first = models.create_aircraft_model("747-8", jumbo_specs()).unwrap();
    assert!(models.delete_aircraft_model(&first));
    assert!(!models.delete_aircraft_model(&first));

    let second = models.create_aircraft_model("UH-60", helicopter_specs()).unwrap();
    assert_eq!(second.id(), AircraftModelId::new(1));

    let fleet = registry.aircraft_mut();
    let id = fleet
        .create_aircraft("26301", second.clone(), 2001, Location::default())
        .unwrap()
        .id();
    assert!(fleet.delete_aircraft_by_id(id));
    let next = fleet
        .create_aircraft("26302", second, 2001, Location::default())
        .unwrap();
    assert_eq!(next.id(), AircraftId::new(1));
}

#[test]
fn test_model_update_reaches_every_aircraft() {
    let mut registry = Registry::new();
    let model = registry
        .aircraft_models_mut()
        .create_aircraft_model("UH-60", helicopter_specs())
        .unwrap();
    let fleet = registry.aircraft_mut();
    let first = fleet
        .create_aircraft("26301", model.clone(), 2001, Location::default())
        .unwrap()
        .id();
    let second = fleet
        .create_aircraft("26302", model.clone(), 2003, Location::default())
        .unwrap()
        .id();

    let updated = registry
        .aircraft_models_mut()
        .update_aircraft_model(model.id(), |model| {
            model.set_capacity(14)?;
            model.set_available_missions(vec![AircraftMission::Rescue, AircraftMission::Patrol])
        })
        .unwrap();
    assert!(updated);

    let current = registry.aircraft_models().get_aircraft_model(model.id()).unwrap();
    assert_eq!(current.read().capacity(), 14);

    for id in [first, second] {
        let aircraft = registry.aircraft().get_aircraft(id).unwrap();
        assert_same_model(aircraft.model(), &current);
        let model = aircraft.model().read();
        assert_eq!(model.capacity(), 14);
        assert_eq!(
            model.available_missions(),
            [AircraftMission::Rescue, AircraftMission::Patrol]
        );
    }
}

#[test]
fn test_failed_model_update_changes_nothing() {
    let mut registry = Registry::new();
    let models = registry.aircraft_models_mut();
    let model = models.create_aircraft_model("UH-60", helicopter_specs()).unwrap();

    let result = models.update_aircraft_model(model.id(), |model| {
        model.set_capacity(20)?;
        model.set_prop_type(AircraftPropType::SingleEngine)
    });
    assert_invalid_field(result, "prop_sub_type");

    let current = models.get_aircraft_model(model.id()).unwrap();
    assert_same_model(&current, &model);
    assert_eq!(current.read().capacity(), 11);
    assert_eq!(current.read().prop_sub_type(), AircraftPropSubType::TurboShaft);

    assert_eq!(
        models.update_aircraft_model(AircraftModelId::new(9), |_| Ok(())),
        Ok(false)
    );
}

#[test]
fn test_deleted_model_stays_with_existing_aircraft() {
    let mut registry = Registry::new();
    let model = registry
        .aircraft_models_mut()
        .create_aircraft_model("747-8", jumbo_specs())
        .unwrap();
    let id = registry
        .aircraft_mut()
        .create_aircraft("N747BA", model.clone(), 2011, Location::default())
        .unwrap()
        .id();

    assert!(registry
        .aircraft_models_mut()
        .delete_aircraft_model_by_id(model.id()));
    assert!(registry.aircraft_models().find_by_name("747-8").is_none());

    let aircraft = registry.aircraft().get_aircraft(id).unwrap();
    assert_same_model(aircraft.model(), &model);
    assert_eq!(aircraft.model().read().name(), "747-8");
}

#[test]
fn test_aircraft_setters() {
    let mut registry = Registry::new();
    let model = registry
        .aircraft_models_mut()
        .create_aircraft_model("747-8", jumbo_specs())
        .unwrap();
    let id = registry
        .aircraft_mut()
        .create_aircraft("N747BA", model, 2011, Location::default())
        .unwrap()
        .id();

    let aircraft = registry.aircraft_mut().get_aircraft_mut(id).unwrap();
    assert_invalid_field(aircraft.set_year(1800), "year");
    assert_invalid_field(aircraft.set_tail_code(""), "tail_code");
    assert_eq!(aircraft.year(), 2011);
    assert_eq!(aircraft.tail_code(), "N747BA");

    aircraft.set_year(2015).unwrap();
    aircraft.visible = false;
    aircraft.location.set_lat(-90.0).unwrap();
    assert_invalid_field(aircraft.location.set_lon(180.5), "lon");

    let aircraft = registry.aircraft().get_aircraft(id).unwrap();
    assert_eq!(aircraft.year(), 2015);
    assert!(!aircraft.visible);
    assert_location_eq(aircraft.location, -90.0, 0.0);
}
