pub mod aerodynamics;
pub mod autopilot;
pub mod gear;
pub mod mass;
pub mod propulsion;

pub use aerodynamics::{
    calculate_aerodynamic_forces_moments, calculate_air_data, AerodynamicsModel, AirDataValues,
    ControlSurfaceActuator, SurfaceDeflections,
};
pub use autopilot::{CourseLaw, CourseLawBranch, FlightDirector, FlightDirectorOutput, Pid};
pub use gear::{GearPosition, LandingGearModel};
pub use mass::InertiaModel;
pub use propulsion::{PowerplantState, PropulsionModel};
