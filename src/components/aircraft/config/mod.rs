mod aero_coef;
mod aircraft;
mod control_surfaces;
mod gear;
mod geometry;
pub(crate) mod loader;
mod mass;
mod propulsion;

pub use aero_coef::{
    AeroCoefficients, DragCoefficients, FlapCoefficients, LiftCoefficients, PitchCoefficients,
    RollCoefficients, SideForceCoefficients, YawCoefficients,
};
pub use aircraft::{AircraftConfig, AircraftSource, AircraftType, LimitsConfig};
pub use control_surfaces::{ControlSurfaceConfig, ControlSurfaceModel};
pub use gear::{LandingGearConfig, StrutConfig};
pub use geometry::AircraftGeometry;
pub use loader::ConfigError;
pub use mass::MassModel;
pub use propulsion::{PowerplantConfig, PropulsionConfig};
