use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::components::AircraftType;
use crate::utils::errors::SimError;

/// Where the simulated aircraft starts, in geodetic degrees and SI units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartConfig {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    /// Altitude above the ellipsoid (m)
    pub altitude: f64,
    /// True airspeed along the body x axis (m/s)
    pub airspeed: f64,
    pub heading_deg: f64,
}

impl Default for StartConfig {
    fn default() -> Self {
        Self {
            latitude_deg: 51.47,
            longitude_deg: -0.46,
            altitude: 1000.0,
            airspeed: 60.0,
            heading_deg: 0.0,
        }
    }
}

/// Autopilot setpoints applied once at start-up. `None` leaves a mode unselected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AutopilotSetpoints {
    pub altitude: Option<f64>,
    pub airspeed: Option<f64>,
    pub heading_deg: Option<f64>,
    pub vertical_speed: Option<f64>,
}

/// Run settings shared by the headless binary and the bevy plugin.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Fixed integration step (s)
    pub timestep: f64,
    /// Simulated time to run for (s)
    pub duration: f64,
    /// Programmed aircraft used when no `aircraft_file` is given
    pub aircraft: AircraftType,
    /// YAML aircraft definition, overrides `aircraft`
    #[serde(default)]
    pub aircraft_file: Option<PathBuf>,
    #[serde(default)]
    pub start: StartConfig,
    #[serde(default = "default_engine_running")]
    pub engine_running: bool,
    #[serde(default)]
    pub throttle: f64,
    #[serde(default)]
    pub autopilot: Option<AutopilotSetpoints>,
}

fn default_engine_running() -> bool {
    true
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            timestep: 0.01,
            duration: 60.0,
            aircraft: AircraftType::TwinOtter,
            aircraft_file: None,
            start: StartConfig::default(),
            engine_running: true,
            throttle: 0.5,
            autopilot: None,
        }
    }
}

impl SimulationConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        let file = std::fs::File::open(path)?;
        let config = serde_yaml::from_reader(file).map_err(crate::components::ConfigError::from)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SimError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self).map_err(crate::components::ConfigError::from)?;
        Ok(())
    }

    /// Number of fixed steps needed to cover `duration`.
    pub fn steps(&self) -> usize {
        if self.timestep <= 0.0 {
            return 0;
        }
        (self.duration / self.timestep).round() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.timestep, 0.01);
        assert_eq!(config.steps(), 6000);
        assert!(config.aircraft_file.is_none());
    }

    #[test]
    fn test_config_save_load() -> Result<(), SimError> {
        let mut config = SimulationConfig::default();
        config.autopilot = Some(AutopilotSetpoints {
            altitude: Some(1200.0),
            ..Default::default()
        });

        let temp_file = NamedTempFile::new()?;
        config.save(temp_file.path())?;

        let loaded = SimulationConfig::load(temp_file.path())?;
        assert_eq!(loaded.timestep, config.timestep);
        assert_eq!(loaded.aircraft, AircraftType::TwinOtter);
        assert_eq!(
            loaded.autopilot.and_then(|setpoints| setpoints.altitude),
            Some(1200.0)
        );
        Ok(())
    }

    #[test]
    fn test_minimal_yaml_uses_defaults() {
        let yaml = "timestep: 0.02\nduration: 10.0\naircraft: F4Phantom\n";
        let config: SimulationConfig = serde_yaml::from_str(yaml).expect("valid yaml");

        assert_eq!(config.aircraft, AircraftType::F4Phantom);
        assert!(config.engine_running);
        assert_eq!(config.start.altitude, 1000.0);
        assert_eq!(config.steps(), 500);
    }
}
