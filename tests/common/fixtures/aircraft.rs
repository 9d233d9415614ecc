use flyer_core::components::{AircraftConfig, FlightData};
use flyer_core::resources::{Environment, FlatTerrain, StandardAtmosphere, Terrain};
use flyer_core::utils::math::deg_to_rad;
use flyer_core::vehicles::Aircraft;

pub const TEST_LATITUDE_DEG: f64 = 51.47;
pub const TEST_LONGITUDE_DEG: f64 = -0.46;

/// A Twin Otter in still standard air over flat ground at sea level.
pub fn create_test_aircraft() -> Aircraft {
    create_aircraft_with(
        AircraftConfig::twin_otter(),
        Box::new(StandardAtmosphere::default()),
        Box::new(FlatTerrain::new(0.0)),
    )
}

pub fn create_aircraft_with(
    config: AircraftConfig,
    environment: Box<dyn Environment + Send + Sync>,
    terrain: Box<dyn Terrain + Send + Sync>,
) -> Aircraft {
    Aircraft::new(config, environment, terrain).expect("test aircraft config is valid")
}

/// Places `aircraft` wings level and initialises it with the engines running.
pub fn place_level(aircraft: &mut Aircraft, altitude: f64, heading_deg: f64, airspeed: f64) {
    aircraft
        .place(
            deg_to_rad(TEST_LATITUDE_DEG),
            deg_to_rad(TEST_LONGITUDE_DEG),
            altitude,
            deg_to_rad(heading_deg),
            airspeed,
        )
        .expect("placement state is finite");
    aircraft.initialize(true).expect("initial state is valid");
}

/// Level Twin Otter at 1000 m and 60 m/s heading north.
pub fn create_level_aircraft() -> Aircraft {
    let mut aircraft = create_test_aircraft();
    place_level(&mut aircraft, 1000.0, 0.0, 60.0);
    aircraft
}

/// Synthetic flight data for autopilot tests.
pub fn level_flight_data(altitude: f64) -> FlightData {
    FlightData {
        altitude,
        true_airspeed: 60.0,
        indicated_airspeed: 57.0,
        ..Default::default()
    }
}
