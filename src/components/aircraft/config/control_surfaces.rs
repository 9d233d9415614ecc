use serde::{Deserialize, Serialize};

use crate::utils::math::deg_to_rad;

/// How pilot inputs reach the control-surface deflections.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ControlSurfaceModel {
    /// Deflection follows the input instantly (mechanical linkage).
    Direct,
    /// Input passes a first-order lag and then an actuator rate limit.
    FilterChain {
        /// Lag time constant (s)
        time_constant: f64,
        /// Actuator rate limit (rad/s)
        max_rate: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlSurfaceConfig {
    /// Deflection at full input (rad)
    pub max_elevator: f64,
    pub max_aileron: f64,
    pub max_rudder: f64,
    /// Flap deflection at full extension (rad)
    pub max_flap: f64,
    pub model: ControlSurfaceModel,
}

impl ControlSurfaceConfig {
    pub fn twin_otter() -> Self {
        Self {
            max_elevator: deg_to_rad(25.0),
            max_aileron: deg_to_rad(20.0),
            max_rudder: deg_to_rad(25.0),
            max_flap: deg_to_rad(40.0),
            model: ControlSurfaceModel::Direct,
        }
    }

    pub fn f4_phantom() -> Self {
        Self {
            max_elevator: deg_to_rad(20.0),
            max_aileron: deg_to_rad(30.0),
            max_rudder: deg_to_rad(30.0),
            max_flap: deg_to_rad(45.0),
            model: ControlSurfaceModel::FilterChain {
                time_constant: 0.05,
                max_rate: deg_to_rad(60.0),
            },
        }
    }
}
