mod flight;

pub use flight::{
    aircraft_dynamics_system, autopilot_system, build_from_config, AircraftComponent,
    AircraftFault, AutopilotComponent, FlightCorePlugin, FlightDataEvent, FlightSet,
    FlightSettings, NavReceiverResource,
};
