use crate::components::{AntiWindup, PidConfig};

/// Positional PID loop with output limits and a configurable anti-windup strategy.
///
/// The integral is held in output units so the loop can be re-seeded onto any
/// output with [`set_value`](Pid::set_value).
#[derive(Debug, Clone)]
pub struct Pid {
    config: PidConfig,
    integral: f64,
    previous_error: Option<f64>,
    output: f64,
    pending_value: Option<f64>,
}

impl Pid {
    pub fn new(config: PidConfig) -> Self {
        Self {
            config,
            integral: 0.0,
            previous_error: None,
            output: 0.0,
            pending_value: None,
        }
    }

    pub fn config(&self) -> &PidConfig {
        &self.config
    }

    pub fn output(&self) -> f64 {
        self.output
    }

    pub fn reset(&mut self) {
        self.integral = 0.0;
        self.previous_error = None;
        self.output = 0.0;
        self.pending_value = None;
    }

    /// Forces the output to `value`; the next update continues from it without a step.
    pub fn set_value(&mut self, value: f64) {
        self.output = self.clamp(value);
        self.pending_value = Some(value);
    }

    pub fn update(&mut self, error: f64, dt: f64) -> f64 {
        self.update_with_integration(error, dt, true)
    }

    /// Update that leaves the integral untouched when `integrate` is false.
    pub fn update_with_integration(&mut self, error: f64, dt: f64, integrate: bool) -> f64 {
        if !error.is_finite() || dt <= 0.0 {
            return self.output;
        }

        let kp = self.config.kp;
        let ki = self.config.ki;

        if let Some(value) = self.pending_value.take() {
            self.integral = value - kp * error;
            self.previous_error = Some(error);
            self.output = self.clamp(value);
            return self.output;
        }

        let derivative = self
            .previous_error
            .map_or(0.0, |previous| (error - previous) / dt);
        self.previous_error = Some(error);

        let proportional = kp * error;
        let damping = self.config.kd * derivative;
        let increment = if integrate { ki * error * dt } else { 0.0 };

        let raw = match self.config.anti_windup {
            AntiWindup::None => {
                self.integral += increment;
                proportional + self.integral + damping
            }
            AntiWindup::Clamp => {
                let candidate = proportional + self.integral + increment + damping;
                let unwinding = (candidate > self.config.max_output && increment < 0.0)
                    || (candidate < self.config.min_output && increment > 0.0);
                if self.within_limits(candidate) || unwinding {
                    self.integral += increment;
                }
                proportional + self.integral + damping
            }
            AntiWindup::BackCalculation { gain } => {
                let raw = proportional + self.integral + damping;
                let excess = self.clamp(raw) - raw;
                if integrate {
                    self.integral += (ki * error + gain * excess) * dt;
                } else {
                    self.integral += gain * excess * dt;
                }
                raw
            }
        };

        self.output = self.clamp(raw);
        self.output
    }

    fn within_limits(&self, value: f64) -> bool {
        value >= self.config.min_output && value <= self.config.max_output
    }

    fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.config.min_output, self.config.max_output)
    }
}
