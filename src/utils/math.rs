use nalgebra::{UnitQuaternion, Vector3};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::utils::constants::{WGS84_A, WGS84_F};

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Wraps an angle into [0, 2π).
#[inline]
pub fn wrap_two_pi(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Wraps an angle into (-π, π], the shortest-path form of an angular error.
#[inline]
pub fn wrap_pi(angle: f64) -> f64 {
    let wrapped = wrap_two_pi(angle);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

/// Moves `current` toward `target` by at most `max_step`.
#[inline]
pub fn rate_limit(current: f64, target: f64, max_step: f64) -> f64 {
    let max_step = max_step.abs();
    current + (target - current).clamp(-max_step, max_step)
}

/// Exact discretisation of a first-order lag with time constant `tau`.
pub fn first_order_lag(current: f64, target: f64, dt: f64, tau: f64) -> f64 {
    if tau <= 1e-9 {
        return target;
    }
    current + (target - current) * (1.0 - (-dt / tau).exp())
}

/// Calculate the flight path angle from a NED velocity vector
pub fn flight_path_angle(velocity: &Vector3<f64>) -> f64 {
    -velocity
        .z
        .atan2((velocity.x.powi(2) + velocity.y.powi(2)).sqrt())
}

/// Calculate the track angle (direction of horizontal motion) from a NED velocity vector,
/// wrapped into [0, 2π).
pub fn track_from_velocity(velocity: &Vector3<f64>) -> f64 {
    wrap_two_pi(velocity.y.atan2(velocity.x))
}

/// Convert a quaternion to Euler angles (roll, pitch, yaw)
pub fn quaternion_to_euler(quat: &UnitQuaternion<f64>) -> Vector3<f64> {
    let (roll, pitch, yaw) = quat.euler_angles();
    Vector3::new(roll, pitch, yaw)
}

/// Skew-symmetric cross-product matrix of `v`.
pub fn skew(v: &Vector3<f64>) -> nalgebra::Matrix3<f64> {
    nalgebra::Matrix3::new(0.0, -v.z, v.y, v.z, 0.0, -v.x, -v.y, v.x, 0.0)
}

/// Orientation of the local North-East-Down frame in the Earth-centred frame.
///
/// Rotating a NED vector by the result expresses it in Earth-centred axes.
pub fn ned_frame(latitude: f64, longitude: f64) -> UnitQuaternion<f64> {
    UnitQuaternion::from_axis_angle(&Vector3::z_axis(), longitude)
        * UnitQuaternion::from_axis_angle(&Vector3::y_axis(), -latitude - FRAC_PI_2)
}

/// Convert WGS84 geodetic coordinates (radians, metres) to an Earth-centred position.
pub fn geodetic_to_ecef(latitude: f64, longitude: f64, altitude: f64) -> Vector3<f64> {
    let e2 = WGS84_F * (2.0 - WGS84_F);
    let sin_lat = latitude.sin();
    let n = WGS84_A / (1.0 - e2 * sin_lat * sin_lat).sqrt();

    Vector3::new(
        (n + altitude) * latitude.cos() * longitude.cos(),
        (n + altitude) * latitude.cos() * longitude.sin(),
        (n * (1.0 - e2) + altitude) * sin_lat,
    )
}

/// Convert an Earth-centred position to WGS84 geodetic coordinates.
///
/// Returns `(latitude, longitude, altitude)` in radians and metres. Altitudes below the
/// ellipsoid are returned as negative values.
pub fn ecef_to_geodetic(position: &Vector3<f64>) -> (f64, f64, f64) {
    let (x, y, z) = (position.x, position.y, position.z);
    let a = WGS84_A;
    let b = a * (1.0 - WGS84_F);
    let e2 = WGS84_F * (2.0 - WGS84_F);

    let longitude = y.atan2(x);
    let p = (x * x + y * y).sqrt();

    if p < 1e-6 {
        let latitude = if z < 0.0 { -FRAC_PI_2 } else { FRAC_PI_2 };
        return (latitude, 0.0, z.abs() - b);
    }

    let mut latitude = z.atan2(p * (1.0 - e2));
    let mut altitude = 0.0;
    for _ in 0..8 {
        let sin_lat = latitude.sin();
        let n = a / (1.0 - e2 * sin_lat * sin_lat).sqrt();
        altitude = p / latitude.cos() - n;

        let previous = latitude;
        latitude = z.atan2(p * (1.0 - e2 * n / (n + altitude)));

        if (latitude - previous).abs() < 1e-13 {
            break;
        }
    }

    let sin_lat = latitude.sin();
    let n = a / (1.0 - e2 * sin_lat * sin_lat).sqrt();
    if latitude.cos().abs() > 1e-9 {
        altitude = p / latitude.cos() - n;
    }

    (latitude, longitude, altitude)
}
