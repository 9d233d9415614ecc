use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Configuration for one engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerplantConfig {
    pub name: String,
    /// Maximum thrust at sea level static conditions (N)
    pub max_thrust: f64,
    /// Idle thrust at sea level (N)
    pub min_thrust: f64,
    /// Thrust application point relative to the body reference point (m)
    pub position: Vector3<f64>,
    /// Thrust line roll/pitch/yaw offsets from the body x axis (rad)
    #[serde(default = "Vector3::zeros")]
    pub orientation: Vector3<f64>,
    /// Thrust specific fuel consumption (kg/N/s)
    pub tsfc: f64,
    /// Spool-up time constant (s)
    pub spool_up_time: f64,
    /// Spool-down time constant (s)
    pub spool_down_time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropulsionConfig {
    pub engines: Vec<PowerplantConfig>,
}

impl Default for PowerplantConfig {
    fn default() -> Self {
        Self {
            name: "Generic Engine".to_string(),
            max_thrust: 20000.0,
            min_thrust: 1000.0,
            position: Vector3::zeros(),
            orientation: Vector3::zeros(),
            tsfc: 0.4 / 3600.0,
            spool_up_time: 3.0,
            spool_down_time: 2.0,
        }
    }
}

impl PropulsionConfig {
    pub fn single_engine(engine: PowerplantConfig) -> Self {
        Self {
            engines: vec![engine],
        }
    }

    /// Two copies of `engine` mirrored about the body x-z plane.
    pub fn twin_engine(
        engine: PowerplantConfig,
        y_offset: f64,
        x_offset: f64,
        z_offset: f64,
    ) -> Self {
        let left_engine = PowerplantConfig {
            position: Vector3::new(x_offset, -y_offset, z_offset),
            name: format!("{} (left)", engine.name),
            ..engine.clone()
        };
        let right_engine = PowerplantConfig {
            position: Vector3::new(x_offset, y_offset, z_offset),
            name: format!("{} (right)", engine.name),
            ..engine
        };
        Self {
            engines: vec![left_engine, right_engine],
        }
    }

    pub fn twin_otter() -> Self {
        let base_engine = PowerplantConfig {
            name: "PT6A-27".to_string(),
            max_thrust: 12000.0,
            min_thrust: 600.0,
            tsfc: 0.35 / 3600.0,
            spool_up_time: 2.5,
            spool_down_time: 1.8,
            ..Default::default()
        };
        Self::twin_engine(base_engine, 2.5, 1.5, 0.0)
    }

    pub fn f4_phantom() -> Self {
        let base_engine = PowerplantConfig {
            name: "J79-GE-17".to_string(),
            max_thrust: 79800.0,
            min_thrust: 4000.0,
            tsfc: 0.8 / 3600.0,
            spool_up_time: 4.0,
            spool_down_time: 3.0,
            ..Default::default()
        };
        Self::twin_engine(base_engine, 1.0, -1.0, 0.0)
    }
}
