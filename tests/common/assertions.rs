use approx::assert_relative_eq;
use flyer_core::components::StateVector;
use std::f64::consts::TAU;

/// Assert that every element of a state is finite
#[track_caller]
pub fn assert_state_valid(state: &StateVector) {
    assert!(
        state.position.iter().all(|v| v.is_finite()),
        "Position is not finite: {:?}",
        state.position
    );
    assert!(
        state.velocity.iter().all(|v| v.is_finite()),
        "Velocity is not finite: {:?}",
        state.velocity
    );
    assert!(
        state.angular_velocity.iter().all(|v| v.is_finite()),
        "Angular velocity is not finite: {:?}",
        state.angular_velocity
    );
    assert_unit_quaternion(state);
}

#[track_caller]
pub fn assert_unit_quaternion(state: &StateVector) {
    let norm = state.attitude.quaternion().norm();
    assert!(
        (norm - 1.0).abs() <= 1e-9,
        "Attitude quaternion norm {norm} is not unit"
    );
}

/// Assert that an angle lies in [0, 2π)
#[track_caller]
pub fn assert_angle_wrapped(name: &str, angle: f64) {
    assert!(
        (0.0..TAU).contains(&angle),
        "{name} = {angle} is outside [0, 2π)"
    );
}

#[track_caller]
pub fn assert_state_close(actual: &StateVector, expected: &StateVector, epsilon: f64) {
    assert_relative_eq!(actual.position, expected.position, epsilon = epsilon);
    assert_relative_eq!(actual.velocity, expected.velocity, epsilon = epsilon);
    assert_relative_eq!(
        actual.angular_velocity,
        expected.angular_velocity,
        epsilon = epsilon
    );
    assert_relative_eq!(
        actual.attitude.quaternion().coords,
        expected.attitude.quaternion().coords,
        epsilon = epsilon
    );
}
