pub mod simulation;

pub use simulation::{AutopilotSetpoints, SimulationConfig, StartConfig};
