use flyer_core::components::{AircraftConfig, ArmState, LateralMode, VerticalMode};
use flyer_core::resources::NavReceiver;
use flyer_core::systems::FlightDirector;
use pretty_assertions::assert_eq;

use crate::common::{ils_signal, level_flight_data, nav_signal};

fn director() -> FlightDirector {
    FlightDirector::new(AircraftConfig::twin_otter().autopilot).unwrap()
}

#[test]
fn test_second_press_restores_previous_mode() {
    let mut fd = director();
    let data = level_flight_data(1000.0);
    fd.update(&data, &NavReceiver::default(), 0.1);

    let buttons: [(fn(&mut FlightDirector), VerticalMode); 3] = [
        (FlightDirector::on_pressed_alt, VerticalMode::Altitude),
        (FlightDirector::on_pressed_ias, VerticalMode::Airspeed),
        (FlightDirector::on_pressed_vs, VerticalMode::VerticalSpeed),
    ];
    for (press, mode) in buttons {
        press(&mut fd);
        assert_eq!(fd.vertical_mode(), mode);
        fd.update(&data, &NavReceiver::default(), 0.1);
        press(&mut fd);
        assert_eq!(fd.vertical_mode(), VerticalMode::FlightDirectorOnly);
    }

    fd.on_pressed_hdg();
    assert_eq!(fd.lateral_mode(), LateralMode::Heading);
    fd.on_pressed_hdg();
    assert_eq!(fd.lateral_mode(), LateralMode::FlightDirectorOnly);
}

#[test]
fn test_nav_arm_capture_and_signal_loss() {
    let mut fd = director();
    let data = level_flight_data(1000.0);
    fd.on_pressed_hdg();
    fd.on_pressed_nav();
    assert_eq!(fd.lateral_mode(), LateralMode::Heading);
    assert_eq!(fd.arm_state(), ArmState::NavArm);

    // No signal yet: stays armed on heading
    fd.update(&data, &nav_signal(false, 0.0), 0.1);
    assert_eq!(fd.lateral_mode(), LateralMode::Heading);
    assert_eq!(fd.arm_state(), ArmState::NavArm);

    fd.update(&data, &nav_signal(true, 0.001), 0.1);
    assert_eq!(fd.lateral_mode(), LateralMode::Nav);
    assert_eq!(fd.arm_state(), ArmState::None);
    assert!(fd.annunciators().nav);
    assert!(!fd.annunciators().nav_armed);

    // Still tracking: no re-capture
    fd.update(&data, &nav_signal(true, 0.002), 0.1);
    assert_eq!(fd.lateral_mode(), LateralMode::Nav);
    assert_eq!(fd.arm_state(), ArmState::None);

    fd.update(&data, &nav_signal(false, 0.0), 0.1);
    assert_eq!(fd.lateral_mode(), LateralMode::Heading);
    assert_eq!(fd.arm_state(), ArmState::NavArm);
}

#[test]
fn test_glideslope_captures_once_on_crossing() {
    let mut fd = director();
    let data = level_flight_data(600.0);
    fd.on_pressed_alt();
    fd.on_pressed_apr();

    let mut captures = 0;
    let mut previous = fd.vertical_mode();
    for deviation in [0.02, 0.01, -0.005, 0.004, -0.003, -0.01] {
        fd.update(&data, &ils_signal(deviation), 0.1);
        let mode = fd.vertical_mode();
        if mode == VerticalMode::Glideslope && previous != VerticalMode::Glideslope {
            captures += 1;
        }
        previous = mode;
    }

    assert_eq!(fd.lateral_mode(), LateralMode::Approach);
    assert_eq!(fd.vertical_mode(), VerticalMode::Glideslope);
    assert_eq!(captures, 1);
    assert!(fd.annunciators().glideslope);
    assert!(!fd.annunciators().altitude);
}

#[test]
fn test_glideslope_below_beam_does_not_capture() {
    let mut fd = director();
    let data = level_flight_data(600.0);
    fd.on_pressed_alt();
    fd.on_pressed_apr();

    for deviation in [0.03, 0.02, 0.01, 0.005] {
        fd.update(&data, &ils_signal(deviation), 0.1);
    }

    assert_eq!(fd.lateral_mode(), LateralMode::Approach);
    assert_eq!(fd.vertical_mode(), VerticalMode::Altitude);
}

#[test]
fn test_disengage_then_engage_starts_from_measured_attitude() {
    let mut fd = director();
    fd.set_target_heading(1.0);
    fd.on_pressed_hdg();
    for _ in 0..20 {
        fd.update(&level_flight_data(1000.0), &NavReceiver::default(), 0.1);
    }
    fd.disengage();

    let mut banked = level_flight_data(1000.0);
    banked.roll = 0.15;
    banked.pitch = 0.04;
    fd.update(&banked, &NavReceiver::default(), 0.1);
    fd.engage();

    assert_eq!(fd.output().commanded_roll, 0.15);
    assert_eq!(fd.output().commanded_pitch, 0.04);
    assert_eq!(fd.lateral_mode(), LateralMode::FlightDirectorOnly);
}
