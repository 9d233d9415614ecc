use nalgebra::Vector3;

use crate::physics::Kinematics;
use crate::resources::Atmosphere;
use crate::utils::constants::{ISA_SEA_LEVEL_DENSITY, MIN_AIRSPEED_THRESHOLD};

/// Air-relative quantities of one candidate state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AirDataValues {
    pub true_airspeed: f64,
    pub alpha: f64,
    pub beta: f64,
    pub density: f64,
    pub dynamic_pressure: f64,
    pub speed_of_sound: f64,
    pub mach: f64,
    /// Velocity relative to the air mass, body axes (m/s)
    pub relative_velocity_body: Vector3<f64>,
}

impl AirDataValues {
    /// Equivalent airspeed, the speed an airspeed indicator shows.
    pub fn indicated_airspeed(&self) -> f64 {
        self.true_airspeed * (self.density.max(0.0) / ISA_SEA_LEVEL_DENSITY).sqrt()
    }
}

/// Computes air data from body kinematics, the local atmosphere and the NED wind.
pub fn calculate_air_data(
    kinematics: &Kinematics,
    atmosphere: &Atmosphere,
    wind_ned: &Vector3<f64>,
) -> AirDataValues {
    let wind_body = kinematics.ned_attitude.inverse() * wind_ned;
    let relative_velocity = kinematics.velocity - wind_body;
    let airspeed = relative_velocity.norm();

    let (alpha, beta) = if airspeed > MIN_AIRSPEED_THRESHOLD {
        (
            relative_velocity.z.atan2(relative_velocity.x),
            (relative_velocity.y / airspeed).clamp(-1.0, 1.0).asin(),
        )
    } else {
        (0.0, 0.0)
    };

    let mach = if atmosphere.speed_of_sound > 0.0 {
        airspeed / atmosphere.speed_of_sound
    } else {
        0.0
    };

    AirDataValues {
        true_airspeed: airspeed,
        alpha,
        beta,
        density: atmosphere.density,
        dynamic_pressure: 0.5 * atmosphere.density * airspeed * airspeed,
        speed_of_sound: atmosphere.speed_of_sound,
        mach,
        relative_velocity_body: relative_velocity,
    }
}
