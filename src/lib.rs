pub mod components;
pub mod physics;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;
pub mod vehicles;
