use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::constants::{
    AIR_GAS_CONSTANT, AIR_HEAT_CAPACITY_RATIO, GRAVITY, ISA_LAPSE_RATE, ISA_SEA_LEVEL_PRESSURE,
    ISA_SEA_LEVEL_TEMP, ISA_TROPOPAUSE_ALTITUDE,
};

/// Air properties at a single altitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Atmosphere {
    /// Air density (kg/m³)
    pub density: f64,
    /// Static pressure (Pa)
    pub pressure: f64,
    /// Static temperature (K)
    pub temperature: f64,
    /// Speed of sound (m/s)
    pub speed_of_sound: f64,
}

/// Atmosphere and wind service consumed by the aircraft integrator.
pub trait Environment {
    fn sample(&self, altitude: f64) -> Atmosphere;

    /// Wind velocity (air mass motion) in the local North-East-Down frame.
    fn wind_ned(&self, altitude: f64) -> Vector3<f64>;
}

/// Wind model configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WindModelConfig {
    Constant { velocity: Vector3<f64> },
}

impl Default for WindModelConfig {
    fn default() -> Self {
        WindModelConfig::Constant {
            velocity: Vector3::zeros(),
        }
    }
}

/// International Standard Atmosphere: linear troposphere with an isothermal layer above.
#[derive(Debug, Clone, Default)]
pub struct StandardAtmosphere {
    pub wind: WindModelConfig,
}

impl StandardAtmosphere {
    pub fn new(wind: WindModelConfig) -> Self {
        Self { wind }
    }

    pub fn with_constant_wind(velocity: Vector3<f64>) -> Self {
        Self::new(WindModelConfig::Constant { velocity })
    }
}

impl Environment for StandardAtmosphere {
    fn sample(&self, altitude: f64) -> Atmosphere {
        let exponent = -GRAVITY / (ISA_LAPSE_RATE * AIR_GAS_CONSTANT);

        let (temperature, pressure) = if altitude <= ISA_TROPOPAUSE_ALTITUDE {
            let temperature = ISA_SEA_LEVEL_TEMP + ISA_LAPSE_RATE * altitude;
            let pressure = ISA_SEA_LEVEL_PRESSURE * (temperature / ISA_SEA_LEVEL_TEMP).powf(exponent);
            (temperature, pressure)
        } else {
            let tropopause_temp = ISA_SEA_LEVEL_TEMP + ISA_LAPSE_RATE * ISA_TROPOPAUSE_ALTITUDE;
            let tropopause_pressure = ISA_SEA_LEVEL_PRESSURE
                * (tropopause_temp / ISA_SEA_LEVEL_TEMP).powf(exponent);
            let pressure = tropopause_pressure
                * (-GRAVITY * (altitude - ISA_TROPOPAUSE_ALTITUDE)
                    / (AIR_GAS_CONSTANT * tropopause_temp))
                    .exp();
            (tropopause_temp, pressure)
        };

        let speed_of_sound = if temperature > 0.0 {
            (AIR_HEAT_CAPACITY_RATIO * AIR_GAS_CONSTANT * temperature).sqrt()
        } else {
            0.0
        };

        Atmosphere {
            density: pressure / (AIR_GAS_CONSTANT * temperature),
            pressure,
            temperature,
            speed_of_sound,
        }
    }

    fn wind_ned(&self, _altitude: f64) -> Vector3<f64> {
        match &self.wind {
            WindModelConfig::Constant { velocity } => *velocity,
        }
    }
}
