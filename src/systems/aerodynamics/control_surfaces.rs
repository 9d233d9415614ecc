use serde::{Deserialize, Serialize};

use crate::components::{ControlInputs, ControlSurfaceConfig, ControlSurfaceModel};
use crate::utils::math::{first_order_lag, rate_limit};

/// Control-surface deflections in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfaceDeflections {
    pub elevator: f64,
    pub aileron: f64,
    pub rudder: f64,
    pub flap: f64,
}

impl SurfaceDeflections {
    /// Deflections commanded by `controls`, trims included.
    pub fn commanded(config: &ControlSurfaceConfig, controls: &ControlInputs) -> Self {
        let controls = controls.clamped();
        let (aileron, elevator, rudder) = controls.trimmed();

        Self {
            elevator: elevator * config.max_elevator,
            aileron: aileron * config.max_aileron,
            rudder: rudder * config.max_rudder,
            flap: controls.flaps * config.max_flap,
        }
    }
}

/// Surface actuation between the pilot inputs and the aerodynamic model.
#[derive(Debug, Clone)]
pub struct ControlSurfaceActuator {
    config: ControlSurfaceConfig,
    deflections: SurfaceDeflections,
}

impl ControlSurfaceActuator {
    pub fn new(config: ControlSurfaceConfig) -> Self {
        Self {
            config,
            deflections: SurfaceDeflections::default(),
        }
    }

    /// Snaps the surfaces onto the current command.
    pub fn reset(&mut self, controls: &ControlInputs) {
        self.deflections = SurfaceDeflections::commanded(&self.config, controls);
    }

    /// Moves the filtered surfaces toward the command over `dt`.
    pub fn advance(&mut self, controls: &ControlInputs, dt: f64) {
        let target = SurfaceDeflections::commanded(&self.config, controls);

        match self.config.model {
            ControlSurfaceModel::Direct => self.deflections = target,
            ControlSurfaceModel::FilterChain {
                time_constant,
                max_rate,
            } => {
                let max_step = max_rate * dt;
                let filter = |current: f64, commanded: f64| {
                    let lagged = first_order_lag(current, commanded, dt, time_constant);
                    rate_limit(current, lagged, max_step)
                };

                self.deflections = SurfaceDeflections {
                    elevator: filter(self.deflections.elevator, target.elevator),
                    aileron: filter(self.deflections.aileron, target.aileron),
                    rudder: filter(self.deflections.rudder, target.rudder),
                    flap: filter(self.deflections.flap, target.flap),
                };
            }
        }
    }

    /// Deflections seen by the aerodynamic model for `controls`.
    ///
    /// A direct linkage follows the inputs immediately; a filter chain reports its state.
    pub fn deflections(&self, controls: &ControlInputs) -> SurfaceDeflections {
        match self.config.model {
            ControlSurfaceModel::Direct => SurfaceDeflections::commanded(&self.config, controls),
            ControlSurfaceModel::FilterChain { .. } => self.deflections,
        }
    }
}
