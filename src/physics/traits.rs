use crate::physics::components::{ForceContext, ForceMoment};
use crate::physics::error::PhysicsError;

/// A physical subsystem that contributes a force and a moment to the airframe.
///
/// `compute_force_and_moment` is evaluated once per Runge-Kutta stage with a different
/// candidate state each time, so it takes `&self` and must not depend on call order.
/// Internal dynamics that are not part of the rigid-body state advance in `update`,
/// once per tick.
pub trait ForceMomentModel: Send + Sync {
    fn name(&self) -> &str;

    /// Puts the sub-state in its initial condition.
    fn initialize(&mut self, engine_running: bool, context: &ForceContext);

    /// Advances internal dynamics over `dt` using the last known kinematic state.
    fn update(&mut self, context: &ForceContext, dt: f64);

    /// Force and moment in body axes about the body reference point.
    fn compute_force_and_moment(&self, context: &ForceContext) -> ForceMoment;

    /// Checked form of [`compute_force_and_moment`](Self::compute_force_and_moment).
    fn evaluate(&self, context: &ForceContext) -> Result<ForceMoment, PhysicsError> {
        let load = self.compute_force_and_moment(context);
        if load.is_finite() {
            Ok(load)
        } else {
            Err(PhysicsError::NonFiniteOutput {
                model: self.name().to_string(),
            })
        }
    }
}
