pub mod aircraft;
pub mod autopilot;

pub use aircraft::*;
pub use autopilot::*;
