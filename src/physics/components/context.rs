use nalgebra::{UnitQuaternion, Vector3};

use crate::components::ControlInputs;
use crate::resources::GroundContact;
use crate::systems::AirDataValues;
use crate::utils::constants::{EARTH_ROTATION_RATE, GRAVITY};
use crate::utils::math::{ecef_to_geodetic, ned_frame};

/// Rigid-body kinematics of one candidate state, with the frames derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    /// Earth-centred position (m)
    pub position: Vector3<f64>,
    /// Orientation of the body axes in the Earth-centred frame
    pub attitude: UnitQuaternion<f64>,
    /// Velocity relative to the Earth, body axes (m/s)
    pub velocity: Vector3<f64>,
    /// Body rates p, q, r (rad/s)
    pub angular_velocity: Vector3<f64>,
    pub latitude: f64,
    pub longitude: f64,
    /// Height above the ellipsoid (m)
    pub altitude: f64,
    /// Orientation of the local NED frame in the Earth-centred frame
    pub ned_frame: UnitQuaternion<f64>,
    /// Orientation of the body axes in the local NED frame
    pub ned_attitude: UnitQuaternion<f64>,
    /// Gravitational acceleration in body axes (m/s²)
    pub gravity_body: Vector3<f64>,
    /// Planetary rotation rate in body axes (rad/s)
    pub earth_rate_body: Vector3<f64>,
}

impl Kinematics {
    pub fn new(
        position: Vector3<f64>,
        attitude: UnitQuaternion<f64>,
        velocity: Vector3<f64>,
        angular_velocity: Vector3<f64>,
    ) -> Self {
        let (latitude, longitude, altitude) = ecef_to_geodetic(&position);
        let ned_frame = ned_frame(latitude, longitude);
        let ned_attitude = ned_frame.inverse() * attitude;

        let gravity_body = ned_attitude.inverse() * Vector3::new(0.0, 0.0, GRAVITY);
        let earth_rate_body = attitude.inverse() * Vector3::new(0.0, 0.0, EARTH_ROTATION_RATE);

        Self {
            position,
            attitude,
            velocity,
            angular_velocity,
            latitude,
            longitude,
            altitude,
            ned_frame,
            ned_attitude,
            gravity_body,
            earth_rate_body,
        }
    }

    /// Earth-relative velocity in the local NED frame.
    pub fn velocity_ned(&self) -> Vector3<f64> {
        self.ned_attitude * self.velocity
    }

    /// Velocity of a body-fixed point, in body axes.
    pub fn point_velocity(&self, point: &Vector3<f64>) -> Vector3<f64> {
        self.velocity + self.angular_velocity.cross(point)
    }

    /// Earth-centred position of a body-fixed point.
    pub fn point_position(&self, point: &Vector3<f64>) -> Vector3<f64> {
        self.position + self.attitude * point
    }
}

/// Everything a force model may read while computing its loads.
///
/// Built by value for every derivative evaluation, so a model sees one consistent
/// candidate state and can never hold on to the integrator's data.
#[derive(Debug, Clone, Copy)]
pub struct ForceContext {
    pub kinematics: Kinematics,
    pub air_data: AirDataValues,
    pub controls: ControlInputs,
    /// Ground plane sampled once at the start of the tick
    pub ground: Option<GroundContact>,
    /// Total aircraft mass (kg)
    pub mass: f64,
}

/// Level flight north at 1000 m and 60 m/s in still ISA air, for model tests.
#[cfg(test)]
pub(crate) fn test_context() -> ForceContext {
    use crate::resources::{Environment, StandardAtmosphere};
    use crate::systems::calculate_air_data;
    use crate::utils::math::geodetic_to_ecef;

    let kinematics = Kinematics::new(
        geodetic_to_ecef(0.9, 0.0, 1000.0),
        ned_frame(0.9, 0.0),
        Vector3::new(60.0, 0.0, 0.0),
        Vector3::zeros(),
    );
    let atmosphere = StandardAtmosphere::default().sample(kinematics.altitude);

    ForceContext {
        kinematics,
        air_data: calculate_air_data(&kinematics, &atmosphere, &Vector3::zeros()),
        controls: ControlInputs::default(),
        ground: None,
        mass: 5000.0,
    }
}
