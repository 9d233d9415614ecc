use serde::{Deserialize, Serialize};

use crate::components::aircraft::config::loader::{require_non_negative, require_positive};
use crate::components::ConfigError;
use crate::utils::math::deg_to_rad;

/// Strategy that keeps the integral term from winding up while the output saturates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AntiWindup {
    /// Integrate unconditionally; the output is still clamped.
    None,
    /// Stop integrating while saturated unless the error drives the output back inside.
    #[default]
    Clamp,
    /// Bleed the integral by `gain` times the saturation excess.
    BackCalculation { gain: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PidConfig {
    pub kp: f64,
    pub ki: f64,
    pub kd: f64,
    pub min_output: f64,
    pub max_output: f64,
    #[serde(default)]
    pub anti_windup: AntiWindup,
}

impl PidConfig {
    pub fn new(kp: f64, ki: f64, kd: f64, min_output: f64, max_output: f64) -> Self {
        Self {
            kp,
            ki,
            kd,
            min_output,
            max_output,
            anti_windup: AntiWindup::Clamp,
        }
    }

    /// Output limited to `±limit`.
    pub fn symmetric(kp: f64, ki: f64, kd: f64, limit: f64) -> Self {
        Self::new(kp, ki, kd, -limit.abs(), limit.abs())
    }

    pub fn with_anti_windup(mut self, anti_windup: AntiWindup) -> Self {
        self.anti_windup = anti_windup;
        self
    }

    pub fn validate(&self, loop_name: &str) -> Result<(), ConfigError> {
        let gains = [self.kp, self.ki, self.kd];
        if gains.iter().any(|gain| !gain.is_finite()) {
            return Err(ConfigError::ValidationError(format!(
                "{loop_name}: gains must be finite"
            )));
        }
        if !(self.min_output < self.max_output) {
            return Err(ConfigError::ValidationError(format!(
                "{loop_name}: min_output {} must be below max_output {}",
                self.min_output, self.max_output
            )));
        }
        if let AntiWindup::BackCalculation { gain } = self.anti_windup {
            require_non_negative(&format!("{loop_name}.anti_windup.gain"), gain)?;
        }
        Ok(())
    }
}

/// Beam-tracking gains for one receiver channel.
///
/// `angular` acts on the raw angular deviation and is used whenever no DME range is
/// available; `linear` acts on the cross-track distance derived from DME.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CourseLawConfig {
    pub angular: PidConfig,
    pub linear: PidConfig,
    /// Deviation below which an armed mode captures (rad)
    pub capture_threshold: f64,
}

impl CourseLawConfig {
    pub fn validate(&self, name: &str) -> Result<(), ConfigError> {
        // The integration band is max_intercept / kp, so kp may not vanish.
        for (suffix, pid) in [("angular", &self.angular), ("linear", &self.linear)] {
            let loop_name = format!("{name}.{suffix}");
            if pid.kp == 0.0 {
                return Err(ConfigError::InvalidGain { loop_name });
            }
            pid.validate(&loop_name)?;
        }
        require_positive(&format!("{name}.capture_threshold"), self.capture_threshold)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutopilotConfig {
    /// Heading error (rad) to commanded turn rate (rad/s)
    pub heading: PidConfig,
    /// Residual turn-rate error (rad/s) to roll trim (rad)
    pub turn_rate: PidConfig,
    pub nav: CourseLawConfig,
    pub approach: CourseLawConfig,
    /// Altitude error (m) to pitch (rad)
    pub altitude: PidConfig,
    /// Airspeed error (m/s) to pitch (rad), applied with inverted sign
    pub airspeed: PidConfig,
    /// Climb-rate error (m/s) to pitch (rad)
    pub vertical_speed: PidConfig,
    /// Glideslope deviation (rad) to pitch (rad)
    pub glideslope: PidConfig,
    /// Remaining altitude at which the altitude arm captures (m)
    pub altitude_capture_band: f64,
    pub max_roll: f64,
    pub max_pitch: f64,
    /// Rate limits on the commanded attitude (rad/s)
    pub max_roll_rate: f64,
    pub max_pitch_rate: f64,
    pub max_turn_rate: f64,
    /// Lag applied to the vertical-speed target (s)
    pub vertical_speed_time_constant: f64,
    /// Largest angle flown toward a beam (rad)
    pub max_intercept_angle: f64,
    /// Climb rate used by the altitude arm until a vertical speed is selected (m/s)
    pub default_vertical_speed: f64,
}

impl AutopilotConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.nav.validate("nav")?;
        self.approach.validate("approach")?;

        for (name, pid) in [
            ("heading", &self.heading),
            ("turn_rate", &self.turn_rate),
            ("altitude", &self.altitude),
            ("airspeed", &self.airspeed),
            ("vertical_speed", &self.vertical_speed),
            ("glideslope", &self.glideslope),
        ] {
            pid.validate(name)?;
        }

        require_positive("altitude_capture_band", self.altitude_capture_band)?;
        require_positive("max_roll", self.max_roll)?;
        require_positive("max_pitch", self.max_pitch)?;
        require_positive("max_roll_rate", self.max_roll_rate)?;
        require_positive("max_pitch_rate", self.max_pitch_rate)?;
        require_positive("max_turn_rate", self.max_turn_rate)?;
        require_positive("max_intercept_angle", self.max_intercept_angle)?;
        require_non_negative(
            "vertical_speed_time_constant",
            self.vertical_speed_time_constant,
        )?;
        require_non_negative("default_vertical_speed", self.default_vertical_speed)
    }

    pub fn twin_otter() -> Self {
        let max_pitch = deg_to_rad(15.0);
        let max_turn_rate = deg_to_rad(3.0);
        let max_intercept_angle = deg_to_rad(30.0);

        Self {
            heading: PidConfig::symmetric(0.5, 0.0, 0.0, max_turn_rate),
            turn_rate: PidConfig::symmetric(0.5, 0.1, 0.0, deg_to_rad(5.0)),
            nav: CourseLawConfig {
                angular: PidConfig::symmetric(4.0, 0.05, 0.0, max_intercept_angle),
                linear: PidConfig::symmetric(0.002, 0.0001, 0.0, max_intercept_angle),
                capture_threshold: deg_to_rad(10.0),
            },
            approach: CourseLawConfig {
                angular: PidConfig::symmetric(6.0, 0.1, 0.0, max_intercept_angle),
                linear: PidConfig::symmetric(0.004, 0.0002, 0.0, max_intercept_angle),
                capture_threshold: deg_to_rad(2.5),
            },
            altitude: PidConfig::symmetric(0.01, 0.0005, 0.02, max_pitch),
            airspeed: PidConfig::symmetric(0.02, 0.002, 0.0, max_pitch),
            vertical_speed: PidConfig::symmetric(0.02, 0.005, 0.0, max_pitch),
            glideslope: PidConfig::symmetric(2.0, 0.1, 0.0, max_pitch),
            altitude_capture_band: 50.0,
            max_roll: deg_to_rad(25.0),
            max_pitch,
            max_roll_rate: deg_to_rad(5.0),
            max_pitch_rate: deg_to_rad(3.0),
            max_turn_rate,
            vertical_speed_time_constant: 2.0,
            max_intercept_angle,
            default_vertical_speed: 2.5,
        }
    }

    pub fn f4_phantom() -> Self {
        let max_pitch = deg_to_rad(20.0);
        let max_turn_rate = deg_to_rad(3.0);
        let max_intercept_angle = deg_to_rad(45.0);

        Self {
            heading: PidConfig::symmetric(0.4, 0.0, 0.0, max_turn_rate),
            turn_rate: PidConfig::symmetric(0.3, 0.05, 0.0, deg_to_rad(5.0)),
            nav: CourseLawConfig {
                angular: PidConfig::symmetric(3.0, 0.05, 0.0, max_intercept_angle),
                linear: PidConfig::symmetric(0.001, 0.00005, 0.0, max_intercept_angle),
                capture_threshold: deg_to_rad(10.0),
            },
            approach: CourseLawConfig {
                angular: PidConfig::symmetric(5.0, 0.1, 0.0, max_intercept_angle),
                linear: PidConfig::symmetric(0.002, 0.0001, 0.0, max_intercept_angle),
                capture_threshold: deg_to_rad(2.5),
            },
            altitude: PidConfig::symmetric(0.004, 0.0002, 0.01, max_pitch),
            airspeed: PidConfig::symmetric(0.01, 0.001, 0.0, max_pitch)
                .with_anti_windup(AntiWindup::BackCalculation { gain: 1.0 }),
            vertical_speed: PidConfig::symmetric(0.008, 0.002, 0.0, max_pitch),
            glideslope: PidConfig::symmetric(1.5, 0.1, 0.0, max_pitch),
            altitude_capture_band: 150.0,
            max_roll: deg_to_rad(30.0),
            max_pitch,
            max_roll_rate: deg_to_rad(10.0),
            max_pitch_rate: deg_to_rad(5.0),
            max_turn_rate,
            vertical_speed_time_constant: 3.0,
            max_intercept_angle,
            default_vertical_speed: 10.0,
        }
    }
}

impl Default for AutopilotConfig {
    fn default() -> Self {
        Self::twin_otter()
    }
}
