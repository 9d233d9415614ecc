use bevy::prelude::*;

use crate::components::CourseLawConfig;
use crate::systems::autopilot::pid::Pid;

/// Which deviation the course law is flying on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseLawBranch {
    /// Raw angular deviation, used without a DME range
    Angular,
    /// Cross-track distance from DME range and angular deviation
    Linear,
}

/// Turns a beam deviation into an intercept angle relative to the selected course.
#[derive(Debug, Clone)]
pub struct CourseLaw {
    name: &'static str,
    angular: Pid,
    linear: Pid,
    branch: Option<CourseLawBranch>,
    capture_threshold: f64,
}

impl CourseLaw {
    pub fn new(name: &'static str, config: &CourseLawConfig) -> Self {
        Self {
            name,
            angular: Pid::new(config.angular),
            linear: Pid::new(config.linear),
            branch: None,
            capture_threshold: config.capture_threshold,
        }
    }

    pub fn capture_threshold(&self) -> f64 {
        self.capture_threshold
    }

    pub fn branch(&self) -> Option<CourseLawBranch> {
        self.branch
    }

    pub fn reset(&mut self) {
        self.angular.reset();
        self.linear.reset();
        self.branch = None;
    }

    /// Intercept angle (rad) for a signed `deviation`, positive right of the beam.
    ///
    /// The branch is chosen afresh every call from the DME range. Integration only
    /// runs once the error is small enough that the proportional term alone would
    /// stay inside the intercept limit.
    pub fn update(
        &mut self,
        deviation: f64,
        dme_distance: Option<f64>,
        max_intercept_angle: f64,
        dt: f64,
    ) -> f64 {
        let (branch, error) = match dme_distance {
            Some(distance) => (CourseLawBranch::Linear, -distance * deviation.sin()),
            None => (CourseLawBranch::Angular, -deviation),
        };

        if let Some(previous) = self.branch.filter(|previous| *previous != branch) {
            let carried = self.pid(previous).output();
            match branch {
                CourseLawBranch::Angular => {
                    warn!("{}: DME range lost, flying angular deviation", self.name)
                }
                CourseLawBranch::Linear => {
                    debug!("{}: DME range available, flying cross-track", self.name)
                }
            }
            self.pid_mut(branch).set_value(carried);
        }
        self.branch = Some(branch);

        let pid = self.pid_mut(branch);
        let band = max_intercept_angle / pid.config().kp.abs();
        let intercept = pid.update_with_integration(error, dt, error.abs() < band);

        intercept.clamp(-max_intercept_angle, max_intercept_angle)
    }

    fn pid(&self, branch: CourseLawBranch) -> &Pid {
        match branch {
            CourseLawBranch::Angular => &self.angular,
            CourseLawBranch::Linear => &self.linear,
        }
    }

    fn pid_mut(&mut self, branch: CourseLawBranch) -> &mut Pid {
        match branch {
            CourseLawBranch::Angular => &mut self.angular,
            CourseLawBranch::Linear => &mut self.linear,
        }
    }
}
