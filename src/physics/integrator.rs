use nalgebra::SVector;

/// Advances `state` by one classical fourth-order Runge-Kutta step.
///
/// The derivative is supplied as a closure so the caller decides what it closes over;
/// the four evaluations run strictly in order and the first error aborts the step.
pub fn rk4_step<const N: usize, E, F>(
    state: &SVector<f64, N>,
    dt: f64,
    mut derivative: F,
) -> Result<SVector<f64, N>, E>
where
    F: FnMut(&SVector<f64, N>) -> Result<SVector<f64, N>, E>,
{
    let half_dt = dt / 2.0;

    let k1 = derivative(state)?;
    let k2 = derivative(&(state + k1 * half_dt))?;
    let k3 = derivative(&(state + k2 * half_dt))?;
    let k4 = derivative(&(state + k3 * dt))?;

    Ok(state + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0))
}
