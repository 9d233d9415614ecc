use nalgebra::{Quaternion, SVector, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::utils::math::{geodetic_to_ecef, ned_frame};

/// Length of the integrated state: position, attitude quaternion, velocity, body rates.
pub const STATE_LEN: usize = 13;

pub const POSITION: usize = 0;
pub const ATTITUDE: usize = 3;
pub const VELOCITY: usize = 7;
pub const ANGULAR_VELOCITY: usize = 10;

/// The state as a flat vector, the form the Runge-Kutta integrator works on.
///
/// Layout: `[x, y, z, qw, qx, qy, qz, u, v, w, p, q, r]`.
pub type RawState = SVector<f64, STATE_LEN>;

/// Rigid-body state of the aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateVector {
    /// Earth-centred, Earth-fixed position of the body reference point (m)
    pub position: Vector3<f64>,
    /// Orientation of the body axes in the Earth-centred frame
    pub attitude: UnitQuaternion<f64>,
    /// Earth-relative velocity in body axes (m/s)
    pub velocity: Vector3<f64>,
    /// Body rates p, q, r (rad/s)
    pub angular_velocity: Vector3<f64>,
}

impl Default for StateVector {
    fn default() -> Self {
        Self::from_geodetic(0.0, 0.0, 0.0, 0.0, 0.0)
    }
}

impl StateVector {
    pub fn new(
        position: Vector3<f64>,
        attitude: UnitQuaternion<f64>,
        velocity: Vector3<f64>,
        angular_velocity: Vector3<f64>,
    ) -> Self {
        Self {
            position,
            attitude,
            velocity,
            angular_velocity,
        }
    }

    /// Wings-level, zero-pitch state flying along `heading` at `airspeed`.
    ///
    /// Angles in radians, altitude above the ellipsoid in metres.
    pub fn from_geodetic(
        latitude: f64,
        longitude: f64,
        altitude: f64,
        heading: f64,
        airspeed: f64,
    ) -> Self {
        let attitude =
            ned_frame(latitude, longitude) * UnitQuaternion::from_euler_angles(0.0, 0.0, heading);

        Self::new(
            geodetic_to_ecef(latitude, longitude, altitude),
            attitude,
            Vector3::new(airspeed, 0.0, 0.0),
            Vector3::zeros(),
        )
    }

    pub fn to_raw(&self) -> RawState {
        let q = self.attitude.quaternion();
        let mut raw = RawState::zeros();
        raw.fixed_rows_mut::<3>(POSITION).copy_from(&self.position);
        raw[ATTITUDE] = q.w;
        raw[ATTITUDE + 1] = q.i;
        raw[ATTITUDE + 2] = q.j;
        raw[ATTITUDE + 3] = q.k;
        raw.fixed_rows_mut::<3>(VELOCITY).copy_from(&self.velocity);
        raw.fixed_rows_mut::<3>(ANGULAR_VELOCITY)
            .copy_from(&self.angular_velocity);
        raw
    }

    /// Rebuilds a state from its flat form, renormalising the quaternion.
    ///
    /// A degenerate (zero-length) quaternion falls back to the identity.
    pub fn from_raw(raw: &RawState) -> Self {
        let norm = raw_quaternion(raw).norm();
        let attitude = if norm > 1e-12 {
            UnitQuaternion::new_unchecked(raw_quaternion(raw) / norm)
        } else {
            UnitQuaternion::identity()
        };

        Self::new(
            raw.fixed_rows::<3>(POSITION).into_owned(),
            attitude,
            raw.fixed_rows::<3>(VELOCITY).into_owned(),
            raw.fixed_rows::<3>(ANGULAR_VELOCITY).into_owned(),
        )
    }

    pub fn is_finite(&self) -> bool {
        self.to_raw().iter().all(|v| v.is_finite())
    }
}

/// The attitude part of a flat state, not normalised.
pub fn raw_quaternion(raw: &RawState) -> Quaternion<f64> {
    Quaternion::new(
        raw[ATTITUDE],
        raw[ATTITUDE + 1],
        raw[ATTITUDE + 2],
        raw[ATTITUDE + 3],
    )
}
