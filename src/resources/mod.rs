pub mod config;
mod environment;
mod nav;
mod terrain;

pub use config::{AutopilotSetpoints, SimulationConfig, StartConfig};
pub use environment::{Atmosphere, Environment, StandardAtmosphere, WindModelConfig};
pub use nav::{Deviation, NavReceiver};
pub use terrain::{FlatTerrain, GroundContact, Terrain};
