pub mod config;
pub mod controls;
pub mod flight_data;
pub mod state;

pub use config::{
    AeroCoefficients, AircraftConfig, AircraftGeometry, AircraftSource, AircraftType,
    ConfigError, ControlSurfaceConfig, ControlSurfaceModel, LandingGearConfig, LimitsConfig,
    MassModel, PowerplantConfig, PropulsionConfig, StrutConfig,
};
pub use controls::{ControlInputs, FreezeFlags};
pub use flight_data::{Crash, FlightData};
pub use state::{
    raw_quaternion, RawState, StateVector, ANGULAR_VELOCITY, ATTITUDE, POSITION, STATE_LEN,
    VELOCITY,
};
