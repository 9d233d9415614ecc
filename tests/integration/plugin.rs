use flyer_core::components::AircraftConfig;
use flyer_core::plugins::AircraftComponent;
use flyer_core::resources::{AutopilotSetpoints, FlatTerrain, SimulationConfig};

use crate::common::{
    assert_state_valid, create_aircraft_with, place_level, FaultyAtmosphere, TestAppBuilder,
};

#[test]
fn test_one_event_per_fixed_step() {
    let mut app = TestAppBuilder::new().build();
    app.run_steps(100);

    assert_eq!(app.recorded().len(), 100);
    let last = app.recorded().last().unwrap().flight_data;
    assert!(
        (last.time - 1.0).abs() <= app.timestep,
        "simulated {:.3} s in 100 steps",
        last.time
    );

    let times: Vec<f64> = app.recorded().iter().map(|e| e.flight_data.time).collect();
    assert!(times.windows(2).all(|pair| pair[1] > pair[0]));
}

#[test]
fn test_hold_keeps_the_state() {
    let mut app = TestAppBuilder::new().build();
    app.set_integrate(false);
    let before = app.flight_data()[0];

    app.run_steps(20);
    let after = app.flight_data()[0];

    assert_eq!(after.position, before.position);
    assert_eq!(after.attitude, before.attitude);
    assert_eq!(app.recorded().len(), 20);
}

#[test]
fn test_autopilot_follows_setpoints_in_app() {
    let simulation = SimulationConfig {
        autopilot: Some(AutopilotSetpoints {
            heading_deg: Some(0.0),
            altitude: Some(1000.0),
            ..Default::default()
        }),
        ..Default::default()
    };
    let mut app = TestAppBuilder::new().with_simulation(simulation).build();
    app.run_steps(50);

    let autopilot = app.autopilot().unwrap();
    assert!(autopilot.director.is_engaged());
    assert!(autopilot.output.commanded_pitch.is_finite());
    assert!(autopilot.output.commanded_roll.abs() <= autopilot.director.config().max_roll);
}

#[test]
fn test_faulted_aircraft_is_isolated() {
    let atmosphere = FaultyAtmosphere::default();
    let mut faulty = create_aircraft_with(
        AircraftConfig::twin_otter(),
        Box::new(atmosphere.clone()),
        Box::new(FlatTerrain::default()),
    );
    place_level(&mut faulty, 800.0, 90.0, 55.0);
    atmosphere.break_now();

    let mut app = TestAppBuilder::new()
        .with_aircraft(AircraftComponent(faulty))
        .build();
    app.run_steps(10);

    assert_eq!(app.faulted_count(), 1);
    // Only the healthy aircraft keeps publishing
    assert_eq!(app.recorded().len(), 10);
    let healthy = app
        .flight_data()
        .into_iter()
        .find(|data| data.time > 0.05)
        .unwrap();
    assert!((healthy.time - 0.1).abs() < 1e-9);
}

#[test]
fn test_healthy_aircraft_state_stays_valid_in_app() {
    let mut app = TestAppBuilder::new().build();
    app.run_steps(200);

    let world = app.app.world_mut();
    let mut query = world.query::<&AircraftComponent>();
    for aircraft in query.iter(world) {
        assert_state_valid(aircraft.0.state_vector());
    }
}
