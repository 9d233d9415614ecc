use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// One spring-damper strut with a wheel at its lower end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrutConfig {
    pub name: String,
    /// Wheel contact point with the strut fully extended, body axes (m)
    pub position: Vector3<f64>,
    /// Spring stiffness (N/m)
    pub stiffness: f64,
    /// Damping coefficient (N·s/m)
    pub damping: f64,
    /// Rolling friction coefficient
    pub rolling_friction: f64,
    /// Additional friction coefficient at full brake
    pub brake_friction: f64,
    /// Cornering friction coefficient
    pub side_friction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandingGearConfig {
    pub struts: Vec<StrutConfig>,
    /// Fixed gear is always down and ignores the gear lever
    pub retractable: bool,
    /// Time for a full extension or retraction cycle (s)
    pub extension_time: f64,
    /// Speed below which friction forces are faded out (m/s)
    #[serde(default = "default_friction_fade_speed")]
    pub friction_fade_speed: f64,
}

fn default_friction_fade_speed() -> f64 {
    0.5
}

impl LandingGearConfig {
    pub fn tricycle(
        nose: Vector3<f64>,
        main: Vector3<f64>,
        stiffness: f64,
        damping: f64,
        retractable: bool,
        extension_time: f64,
    ) -> Self {
        let strut = |name: &str, position: Vector3<f64>, share: f64| StrutConfig {
            name: name.to_string(),
            position,
            stiffness: stiffness * share,
            damping: damping * share,
            rolling_friction: 0.02,
            brake_friction: 0.6,
            side_friction: 0.8,
        };

        Self {
            struts: vec![
                strut("nose", nose, 0.5),
                strut("left main", Vector3::new(main.x, -main.y.abs(), main.z), 1.0),
                strut("right main", Vector3::new(main.x, main.y.abs(), main.z), 1.0),
            ],
            retractable,
            extension_time,
            friction_fade_speed: default_friction_fade_speed(),
        }
    }

    pub fn twin_otter() -> Self {
        Self::tricycle(
            Vector3::new(4.5, 0.0, 1.9),
            Vector3::new(-0.5, 1.9, 1.9),
            2.0e5,
            2.0e4,
            false,
            0.0,
        )
    }

    pub fn f4_phantom() -> Self {
        Self::tricycle(
            Vector3::new(5.5, 0.0, 2.0),
            Vector3::new(-0.8, 2.7, 2.0),
            6.0e5,
            6.0e4,
            true,
            6.0,
        )
    }
}
