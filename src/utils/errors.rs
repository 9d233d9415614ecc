use std::error::Error;
use std::io;
use thiserror::Error;

use crate::components::ConfigError;
use crate::physics::PhysicsError;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Physics error: {0}")]
    Physics(#[from] PhysicsError),

    #[error("Failed to load aircraft '{name}'")]
    AircraftLoad {
        name: String,
        #[source]
        source: ConfigError,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Renders an error and every error in its `source()` chain as `outer: inner: root`.
pub fn error_chain(error: &dyn Error) -> String {
    let mut rendered = error.to_string();
    let mut current = error.source();
    while let Some(cause) = current {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        current = cause.source();
    }
    rendered
}
