use flyer_core::components::{AircraftConfig, ControlInputs, Crash, FreezeFlags};
use flyer_core::resources::StandardAtmosphere;

use crate::common::{
    assert_angle_wrapped, assert_state_close, assert_state_valid, assert_unit_quaternion,
    create_aircraft_with, create_level_aircraft, create_test_aircraft, place_level,
    ForcedHitTerrain,
};

fn rolling_controls() -> ControlInputs {
    ControlInputs {
        aileron: 0.3,
        elevator: -0.1,
        throttle: 0.6,
        ..Default::default()
    }
}

#[test]
fn test_quaternion_stays_unit_through_a_manoeuvre() {
    let mut aircraft = create_level_aircraft();
    aircraft.set_controls(rolling_controls());

    for _ in 0..300 {
        aircraft.update(0.01, true).unwrap();
        assert_unit_quaternion(aircraft.state_vector());
    }
    assert_state_valid(aircraft.state_vector());
}

#[test]
fn test_heading_and_track_stay_wrapped_across_north() {
    let mut aircraft = create_test_aircraft();
    place_level(&mut aircraft, 1000.0, 359.9, 60.0);
    aircraft.set_controls(rolling_controls());

    for _ in 0..300 {
        aircraft.update(0.01, true).unwrap();
        let data = aircraft.flight_data();
        assert_angle_wrapped("heading", data.heading);
        assert_angle_wrapped("track", data.track);
    }
}

#[test]
fn test_identical_aircraft_stay_identical() {
    let mut first = create_level_aircraft();
    let mut second = create_level_aircraft();
    first.set_controls(rolling_controls());
    second.set_controls(rolling_controls());

    for _ in 0..200 {
        first.update(0.01, true).unwrap();
        second.update(0.01, true).unwrap();
    }

    assert_eq!(first.state_vector(), second.state_vector());
    assert_eq!(first.flight_data(), second.flight_data());
}

#[test]
fn test_full_freeze_holds_state_and_air_data() {
    let mut aircraft = create_level_aircraft();
    aircraft.set_controls(rolling_controls());
    aircraft.set_freeze(FreezeFlags::all());
    let initial = *aircraft.state_vector();
    let initial_alpha = aircraft.flight_data().alpha;

    for _ in 0..100 {
        aircraft.update(0.01, true).unwrap();
    }

    assert_state_close(aircraft.state_vector(), &initial, 1e-12);
    assert!((aircraft.flight_data().alpha - initial_alpha).abs() < 1e-12);
    assert!((aircraft.time() - 1.0).abs() < 1e-9);
}

#[test]
fn test_overspeed_latches_until_placed_again() {
    let mut aircraft = create_test_aircraft();
    place_level(&mut aircraft, 1000.0, 0.0, 150.0);

    aircraft.update(0.01, true).unwrap();
    assert_eq!(aircraft.crash(), Crash::Overspeed);
    assert_eq!(aircraft.flight_data().crash, Crash::Overspeed);

    for _ in 0..10 {
        aircraft.update(0.01, true).unwrap();
        assert_eq!(aircraft.crash(), Crash::Overspeed);
    }

    place_level(&mut aircraft, 1000.0, 0.0, 60.0);
    assert_eq!(aircraft.crash(), Crash::NoCrash);
    for _ in 0..10 {
        aircraft.update(0.01, true).unwrap();
    }
    assert_eq!(aircraft.crash(), Crash::NoCrash);
}

#[test]
fn test_collision_outranks_overspeed() {
    let terrain = ForcedHitTerrain::hitting();
    let mut aircraft = create_aircraft_with(
        AircraftConfig::twin_otter(),
        Box::new(StandardAtmosphere::default()),
        Box::new(terrain),
    );
    place_level(&mut aircraft, 1000.0, 0.0, 150.0);

    aircraft.update(0.01, true).unwrap();
    assert_eq!(aircraft.crash(), Crash::Collision);
}

#[test]
fn test_cleared_latch_rearms_on_next_tick() {
    let mut aircraft = create_test_aircraft();
    place_level(&mut aircraft, 1000.0, 0.0, 150.0);
    aircraft.update(0.01, true).unwrap();

    aircraft.reset_crash();
    assert_eq!(aircraft.flight_data().crash, Crash::NoCrash);

    aircraft.update(0.01, true).unwrap();
    assert_eq!(aircraft.crash(), Crash::Overspeed);
    assert!(aircraft.crash().is_crashed());
}
