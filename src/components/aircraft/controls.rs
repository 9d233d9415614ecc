use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Normalised pilot or actuator inputs consumed by the force models.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlInputs {
    /// Stick and pedal inputs in [-1, 1]
    pub aileron: f64,
    pub elevator: f64,
    pub rudder: f64,
    /// Trim inputs in [-1, 1], added to the primary inputs
    pub aileron_trim: f64,
    pub elevator_trim: f64,
    pub rudder_trim: f64,
    /// Power lever in [0, 1]
    pub throttle: f64,
    /// Flap lever in [0, 1]
    pub flaps: f64,
    /// Wheel brake in [0, 1]
    pub brake: f64,
    pub gear_down: bool,
}

impl Default for ControlInputs {
    fn default() -> Self {
        Self {
            aileron: 0.0,
            elevator: 0.0,
            rudder: 0.0,
            aileron_trim: 0.0,
            elevator_trim: 0.0,
            rudder_trim: 0.0,
            throttle: 0.0,
            flaps: 0.0,
            brake: 0.0,
            gear_down: true,
        }
    }
}

impl ControlInputs {
    /// Saturates every input to its range; non-finite inputs read as neutral.
    pub fn clamped(&self) -> Self {
        let unit = |v: f64| if v.is_finite() { v.clamp(-1.0, 1.0) } else { 0.0 };
        let lever = |v: f64| if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 };

        Self {
            aileron: unit(self.aileron),
            elevator: unit(self.elevator),
            rudder: unit(self.rudder),
            aileron_trim: unit(self.aileron_trim),
            elevator_trim: unit(self.elevator_trim),
            rudder_trim: unit(self.rudder_trim),
            throttle: lever(self.throttle),
            flaps: lever(self.flaps),
            brake: lever(self.brake),
            gear_down: self.gear_down,
        }
    }

    /// Effective aileron, elevator and rudder inputs with trim applied, in [-1, 1].
    pub fn trimmed(&self) -> (f64, f64, f64) {
        (
            (self.aileron + self.aileron_trim).clamp(-1.0, 1.0),
            (self.elevator + self.elevator_trim).clamp(-1.0, 1.0),
            (self.rudder + self.rudder_trim).clamp(-1.0, 1.0),
        )
    }
}

/// Parts of the integration held fixed while the force models keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FreezeFlags {
    pub position: bool,
    pub attitude: bool,
    pub velocity: bool,
}

impl FreezeFlags {
    pub fn all() -> Self {
        Self {
            position: true,
            attitude: true,
            velocity: true,
        }
    }

    pub fn none() -> Self {
        Self::default()
    }
}
