mod air_data;
mod control_surfaces;
mod force_calculator;

pub use air_data::{calculate_air_data, AirDataValues};
pub use control_surfaces::{ControlSurfaceActuator, SurfaceDeflections};
pub use force_calculator::{calculate_aerodynamic_forces_moments, AerodynamicsModel};
