use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::components::aircraft::config::loader::{require_non_negative, require_positive};
use crate::components::aircraft::config::{
    AeroCoefficients, AircraftGeometry, ConfigError, ControlSurfaceConfig, ControlSurfaceModel,
    LandingGearConfig, MassModel, PropulsionConfig,
};
use crate::components::AutopilotConfig;

/// Structural and speed limits checked by crash detection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Indicated airspeed limit (m/s)
    pub max_airspeed: f64,
    pub min_load_factor: f64,
    pub max_load_factor: f64,
    pub max_gear_load_factor: f64,
}

impl LimitsConfig {
    pub fn twin_otter() -> Self {
        Self {
            max_airspeed: 92.6,
            min_load_factor: -1.5,
            max_load_factor: 3.8,
            max_gear_load_factor: 4.0,
        }
    }

    pub fn f4_phantom() -> Self {
        Self {
            max_airspeed: 386.0,
            min_load_factor: -3.0,
            max_load_factor: 8.5,
            max_gear_load_factor: 5.0,
        }
    }
}

/// The complete aircraft definition: physical models, limits and autopilot tuning.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftConfig {
    /// Name of the aircraft, defaults to type name.
    pub name: String,
    pub ac_type: AircraftType,
    pub mass: MassModel,
    pub geometry: AircraftGeometry,
    pub aero_coef: AeroCoefficients,
    pub control_surfaces: ControlSurfaceConfig,
    pub propulsion: PropulsionConfig,
    pub landing_gear: LandingGearConfig,
    pub limits: LimitsConfig,
    /// Airframe extremities tested against the terrain, body axes (m)
    pub collision_points: Vec<Vector3<f64>>,
    /// Pilot eye point for the cockpit load factor, body axes (m)
    pub pilot_eye: Vector3<f64>,
    #[serde(default)]
    pub autopilot: AutopilotConfig,
}

impl Default for AircraftConfig {
    /// The `TwinOtter` configuration is chosen as the default for convenience.
    fn default() -> Self {
        Self::twin_otter()
    }
}

impl AircraftConfig {
    pub fn new(source: AircraftSource) -> Result<Self, ConfigError> {
        match source {
            AircraftSource::Programmed(aircraft_type) => Ok(Self::from_programmed(aircraft_type)),
            AircraftSource::File(path) => Self::from_file(path),
        }
    }

    fn from_programmed(aircraft_type: AircraftType) -> Self {
        match aircraft_type {
            AircraftType::TwinOtter => Self::twin_otter(),
            AircraftType::F4Phantom => Self::f4_phantom(),
            AircraftType::Custom(name) => Self {
                name: name.clone(),
                ac_type: AircraftType::Custom(name),
                ..Self::twin_otter()
            },
        }
    }

    pub fn twin_otter() -> Self {
        Self {
            name: "TwinOtter".to_string(),
            ac_type: AircraftType::TwinOtter,
            mass: MassModel::twin_otter(),
            geometry: AircraftGeometry::twin_otter(),
            aero_coef: AeroCoefficients::twin_otter(),
            control_surfaces: ControlSurfaceConfig::twin_otter(),
            propulsion: PropulsionConfig::twin_otter(),
            landing_gear: LandingGearConfig::twin_otter(),
            limits: LimitsConfig::twin_otter(),
            collision_points: vec![
                Vector3::new(7.0, 0.0, 0.5),
                Vector3::new(-8.5, 0.0, -1.5),
                Vector3::new(0.0, -9.9, -1.2),
                Vector3::new(0.0, 9.9, -1.2),
                Vector3::new(0.0, 0.0, 1.2),
            ],
            pilot_eye: Vector3::new(5.5, -0.5, -1.0),
            autopilot: AutopilotConfig::twin_otter(),
        }
    }

    pub fn f4_phantom() -> Self {
        Self {
            name: "F4Phantom".to_string(),
            ac_type: AircraftType::F4Phantom,
            mass: MassModel::f4_phantom(),
            geometry: AircraftGeometry::f4_phantom(),
            aero_coef: AeroCoefficients::f4_phantom(),
            control_surfaces: ControlSurfaceConfig::f4_phantom(),
            propulsion: PropulsionConfig::f4_phantom(),
            landing_gear: LandingGearConfig::f4_phantom(),
            limits: LimitsConfig::f4_phantom(),
            collision_points: vec![
                Vector3::new(9.5, 0.0, 0.3),
                Vector3::new(-8.0, 0.0, -3.0),
                Vector3::new(-1.5, -5.9, 0.0),
                Vector3::new(-1.5, 5.9, 0.0),
                Vector3::new(0.0, 0.0, 1.3),
            ],
            pilot_eye: Vector3::new(5.0, 0.0, -1.0),
            autopilot: AutopilotConfig::f4_phantom(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("mass.empty_mass", self.mass.empty_mass)?;
        require_non_negative("mass.fuel_capacity", self.mass.fuel_capacity)?;
        require_non_negative("mass.initial_fuel", self.mass.initial_fuel)?;
        if self.mass.initial_fuel > self.mass.fuel_capacity {
            return Err(ConfigError::ValidationError(format!(
                "mass.initial_fuel {} exceeds fuel_capacity {}",
                self.mass.initial_fuel, self.mass.fuel_capacity
            )));
        }
        for (field, value) in [
            ("mass.ixx", self.mass.ixx),
            ("mass.iyy", self.mass.iyy),
            ("mass.izz", self.mass.izz),
        ] {
            require_positive(field, value)?;
        }
        if self.mass.cg_offset.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::ValidationError(
                "mass.cg_offset must be finite".to_string(),
            ));
        }

        require_positive("geometry.wing_area", self.geometry.wing_area)?;
        require_positive("geometry.wing_span", self.geometry.wing_span)?;
        require_positive("geometry.mac", self.geometry.mac)?;
        require_positive("aero_coef.alpha_stall", self.aero_coef.alpha_stall)?;

        if let ControlSurfaceModel::FilterChain {
            time_constant,
            max_rate,
        } = self.control_surfaces.model
        {
            require_non_negative("control_surfaces.time_constant", time_constant)?;
            require_positive("control_surfaces.max_rate", max_rate)?;
        }

        for engine in &self.propulsion.engines {
            require_non_negative(&format!("{}.max_thrust", engine.name), engine.max_thrust)?;
            require_non_negative(&format!("{}.min_thrust", engine.name), engine.min_thrust)?;
            require_non_negative(&format!("{}.tsfc", engine.name), engine.tsfc)?;
        }

        for strut in &self.landing_gear.struts {
            require_positive(&format!("{}.stiffness", strut.name), strut.stiffness)?;
            require_non_negative(&format!("{}.damping", strut.name), strut.damping)?;
        }
        if self.landing_gear.retractable {
            require_positive(
                "landing_gear.extension_time",
                self.landing_gear.extension_time,
            )?;
        }

        require_positive("limits.max_airspeed", self.limits.max_airspeed)?;
        require_positive("limits.max_gear_load_factor", self.limits.max_gear_load_factor)?;
        if !(self.limits.min_load_factor < self.limits.max_load_factor) {
            return Err(ConfigError::ValidationError(format!(
                "limits.min_load_factor {} must be below max_load_factor {}",
                self.limits.min_load_factor, self.limits.max_load_factor
            )));
        }

        self.autopilot.validate()
    }
}

/// Source for aircraft configuration.
#[derive(Debug, Clone)]
pub enum AircraftSource {
    Programmed(AircraftType),
    File(PathBuf),
}

#[derive(Component, Debug, Clone, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub enum AircraftType {
    TwinOtter,
    F4Phantom,
    Custom(String),
}
