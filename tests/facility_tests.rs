use carpark::{Client, ClientKind, Facility, OccupancySnapshot, ParkingError, VehicleClass};

fn sample_client(id: u32, name: &str) -> Client {
    Client {
        id,
        name: name.to_string(),
        address: "Main Street 1".to_string(),
        phone: "555-0100".to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        kind: ClientKind::Individual,
        vehicles: vec![],
    }
}

#[test]
fn test_configure_builds_contiguous_slot_ids() {
    let mut facility = Facility::new();
    facility.configure(3, 4).unwrap();

    assert_eq!(facility.slots().len(), 12);
    let ids: Vec<u32> = facility.slots().iter().map(|s| s.id).collect();
    assert_eq!(ids, (1..=12).collect::<Vec<u32>>());
    assert!(facility.slots().iter().all(|s| s.is_free()));
    assert!(facility
        .slots()
        .iter()
        .all(|s| s.class == VehicleClass::Car));
}

#[test]
fn test_configure_over_limits_leaves_prior_state_untouched() {
    let mut facility = Facility::new();
    facility.configure(2, 10).unwrap();

    let err = facility.configure(6, 10).unwrap_err();
    assert!(matches!(err, ParkingError::LimitExceeded { .. }));

    let err = facility.configure(2, 201).unwrap_err();
    assert!(matches!(err, ParkingError::LimitExceeded { .. }));

    assert_eq!(facility.floors(), 2);
    assert_eq!(facility.slots_per_floor(), 10);
    assert_eq!(facility.slots().len(), 20);
}

#[test]
fn test_duplicate_client_id_is_refused() {
    let mut facility = Facility::new();
    facility.configure(1, 5).unwrap();

    facility.register_client(sample_client(1, "Alice")).unwrap();
    let err = facility
        .register_client(sample_client(1, "Bob"))
        .unwrap_err();

    assert!(matches!(err, ParkingError::DuplicateClient { id: 1 }));
    assert_eq!(facility.clients().len(), 1);
    assert_eq!(facility.clients()[0].name, "Alice");
}

#[test]
fn test_no_slot_available_leaves_registry_unchanged() {
    let mut facility = Facility::new();
    facility.configure(1, 2).unwrap();

    // All slots default to CAR: a motorcycle never fits
    let err = facility
        .park_vehicle("M-01", VehicleClass::Motorcycle, None)
        .unwrap_err();
    assert!(matches!(
        err,
        ParkingError::NoSlotAvailable {
            class: VehicleClass::Motorcycle
        }
    ));
    assert_eq!(facility.occupancy().occupied, 0);

    // Fill both car slots, then a third car is refused
    facility.park_vehicle("C-01", VehicleClass::Car, None).unwrap();
    facility.park_vehicle("C-02", VehicleClass::Car, None).unwrap();
    let err = facility
        .park_vehicle("C-03", VehicleClass::Car, None)
        .unwrap_err();
    assert!(matches!(err, ParkingError::NoSlotAvailable { .. }));
    assert_eq!(facility.occupancy().occupied, 2);
}

#[test]
fn test_allocation_picks_first_free_slot_in_id_order() {
    let mut facility = Facility::new();
    facility.configure(2, 2).unwrap();

    assert_eq!(
        facility.park_vehicle("C-01", VehicleClass::Car, None).unwrap(),
        1
    );
    assert_eq!(
        facility.park_vehicle("C-02", VehicleClass::Car, None).unwrap(),
        2
    );

    // Freeing slot 1 makes it the first match again
    facility.remove_vehicle("C-01").unwrap();
    assert_eq!(
        facility.park_vehicle("C-03", VehicleClass::Car, None).unwrap(),
        1
    );
}

#[test]
fn test_remove_frees_slot_and_decrements_occupancy() {
    let mut facility = Facility::new();
    facility.configure(1, 3).unwrap();

    let slot_id = facility
        .park_vehicle("AA-11-BB", VehicleClass::Car, None)
        .unwrap();
    assert_eq!(facility.occupancy(), OccupancySnapshot { occupied: 1, total: 3 });

    let fee = facility.remove_vehicle("AA-11-BB").unwrap();
    assert!(fee >= 0.0);

    let slot = facility.slots().iter().find(|s| s.id == slot_id).unwrap();
    assert!(slot.is_free());
    assert!(slot.occupancy.is_none());
    assert_eq!(facility.occupancy(), OccupancySnapshot { occupied: 0, total: 3 });
}

#[test]
fn test_remove_unknown_plate_changes_nothing() {
    let mut facility = Facility::new();
    facility.configure(1, 2).unwrap();
    facility
        .park_vehicle("AA-11-BB", VehicleClass::Car, None)
        .unwrap();

    let err = facility.remove_vehicle("ZZ-99-ZZ").unwrap_err();
    assert!(matches!(err, ParkingError::VehicleNotFound { .. }));
    assert_eq!(facility.occupancy().occupied, 1);
}

#[test]
fn test_list_clients_in_registration_order() {
    let mut facility = Facility::new();
    facility.configure(1, 2).unwrap();

    facility.register_client(sample_client(2, "Bob")).unwrap();
    facility.register_client(sample_client(1, "Alice")).unwrap();

    let names: Vec<&str> = facility.clients().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Bob", "Alice"]);
}

#[test]
fn test_operations_on_unconfigured_facility() {
    let mut facility = Facility::new();
    assert!(!facility.is_configured());
    assert_eq!(facility.occupancy(), OccupancySnapshot { occupied: 0, total: 0 });

    let err = facility
        .park_vehicle("AA-11-BB", VehicleClass::Car, None)
        .unwrap_err();
    assert!(matches!(err, ParkingError::NoSlotAvailable { .. }));

    // The directory works independently of slot state
    facility.register_client(sample_client(1, "Alice")).unwrap();
    assert_eq!(facility.clients().len(), 1);
}
