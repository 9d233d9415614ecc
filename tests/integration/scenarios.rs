use approx::assert_relative_eq;
use flyer_core::components::{AircraftConfig, Crash, FlightData};
use flyer_core::resources::{Environment, NavReceiver, StandardAtmosphere};
use flyer_core::systems::FlightDirector;
use flyer_core::utils::constants::GRAVITY;
use flyer_core::utils::math::rad_to_deg;

use crate::common::{
    assert_state_valid, create_aircraft_with, create_level_aircraft, level_flight_data,
    place_level, ForcedHitTerrain,
};

#[test]
fn test_untrimmed_level_flight_stays_bounded() {
    let mut aircraft = create_level_aircraft();
    let initial = *aircraft.flight_data();

    // Downward acceleration at release: weight less the zero-incidence lift
    let config = aircraft.config();
    let density = StandardAtmosphere::default().sample(initial.altitude).density;
    let lift = 0.5 * density * initial.true_airspeed.powi(2)
        * config.geometry.wing_area
        * config.aero_coef.lift.c_l_0;
    let deficit = GRAVITY - lift / initial.mass;
    assert!(deficit > 0.0);

    for _ in 0..100 {
        aircraft.update(0.01, true).unwrap();
        assert_state_valid(aircraft.state_vector());
    }

    let data = aircraft.flight_data();
    assert_relative_eq!(data.time, 1.0, epsilon = 1e-9);
    assert!(
        rad_to_deg(data.pitch - initial.pitch).abs() < 2.0,
        "pitch ran away: {:.2} deg",
        rad_to_deg(data.pitch)
    );
    assert!(rad_to_deg(data.roll).abs() < 1.0, "roll ran away");

    // Building incidence only reduces the deficit, so the sink stays inside the
    // constant-deficit envelope
    let sink = initial.altitude - data.altitude;
    assert!(
        sink > 0.25 * deficit && sink < 0.5 * deficit,
        "sank {sink:.2} m, deficit {deficit:.2} m/s²"
    );
    assert!(data.climb_rate < 0.0 && -data.climb_rate < deficit);
    assert_eq!(data.crash, Crash::NoCrash);
}

/// Pitch follows the command exactly and the climb rate follows the pitch.
fn fly_kinematic(director: &mut FlightDirector, data: &mut FlightData, dt: f64) {
    let output = director.update(data, &NavReceiver::default(), dt);
    data.pitch = output.commanded_pitch;
    data.climb_rate = data.true_airspeed * data.pitch.sin();
    data.altitude += data.climb_rate * dt;
    data.time += dt;
}

#[test]
fn test_altitude_hold_converges_on_new_target() {
    let dt = 0.01;
    let mut director = FlightDirector::new(AircraftConfig::twin_otter().autopilot).unwrap();
    let mut data = level_flight_data(1000.0);
    director.update(&data, &NavReceiver::default(), dt);

    let target = data.altitude + 50.0;
    director.set_target_altitude(target);
    director.on_pressed_alt();

    let mut lowest_error = f64::INFINITY;
    for step in 0..15_000 {
        fly_kinematic(&mut director, &mut data, dt);
        let error = target - data.altitude;
        lowest_error = lowest_error.min(error);

        if step == 500 {
            assert!(data.pitch > 0.0, "expected nose up after 5 s");
            assert!(data.climb_rate > 0.0, "expected a climb after 5 s");
        }
    }

    let error = target - data.altitude;
    assert!(error.abs() < 2.0, "altitude error {error:.2} m after 150 s");
    assert!(lowest_error > -2.0, "overshot by {:.2} m", -lowest_error);
    assert!(data.pitch.abs() < 0.01);
}

#[test]
fn test_forced_terrain_hit_latches_collision_on_first_tick() {
    let terrain = ForcedHitTerrain::hitting();
    let mut aircraft = create_aircraft_with(
        AircraftConfig::twin_otter(),
        Box::new(StandardAtmosphere::default()),
        Box::new(terrain.clone()),
    );
    place_level(&mut aircraft, 1000.0, 0.0, 60.0);
    assert_eq!(aircraft.crash(), Crash::NoCrash);

    aircraft.update(0.01, true).unwrap();
    assert_eq!(aircraft.crash(), Crash::Collision);
    assert_eq!(aircraft.flight_data().crash, Crash::Collision);
    assert_eq!(terrain.queries(), 1);

    terrain.set_hit(false);
    for _ in 0..50 {
        aircraft.update(0.01, true).unwrap();
        assert_eq!(aircraft.crash(), Crash::Collision);
    }
}
