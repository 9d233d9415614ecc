use nalgebra::Vector3;

use crate::components::{Crash, FlightData};
use crate::physics::{ForceContext, ForceMomentModel};
use crate::utils::constants::GRAVITY;
use crate::utils::math::{flight_path_angle, quaternion_to_euler, track_from_velocity, wrap_two_pi};
use crate::vehicles::aircraft::dynamics::ForceModels;

/// Everything needed to rebuild the flight-data snapshot after a tick.
pub(crate) struct FlightDataInputs<'a> {
    pub time: f64,
    pub context: &'a ForceContext,
    pub models: &'a ForceModels,
    /// Body angular acceleration at the final state (rad/s²)
    pub angular_acceleration: Vector3<f64>,
    pub pilot_eye: Vector3<f64>,
    pub turn_rate: f64,
    pub crash: Crash,
}

/// Builds the full snapshot from the final state of a tick.
pub(crate) fn derive_flight_data(inputs: &FlightDataInputs) -> FlightData {
    let context = inputs.context;
    let models = inputs.models;
    let kinematics = &context.kinematics;
    let air_data = &context.air_data;

    let euler = quaternion_to_euler(&kinematics.ned_attitude);
    let velocity_ned = kinematics.velocity_ned();

    let weight = context.mass * GRAVITY;
    let aero = models.aerodynamics.compute_force_and_moment(context).force;
    let thrust = models.propulsion.compute_force_and_moment(context).force;
    let gear = models.landing_gear.compute_force_and_moment(context).force;
    let gear_load = models.landing_gear.gear_load(context);

    let specific_force = (aero + thrust + gear) / context.mass;
    let g_force_cg = -specific_force / GRAVITY;

    let omega = kinematics.angular_velocity;
    let pilot_arm = inputs.pilot_eye - models.inertia.cg();
    let pilot_relative =
        inputs.angular_acceleration.cross(&pilot_arm) + omega.cross(&omega.cross(&pilot_arm));
    let g_force_pilot = g_force_cg - pilot_relative / GRAVITY;

    let (altitude_agl, ground_normal, ground_point) = match context.ground {
        Some(ground) => (
            ground.height_above(&kinematics.position),
            Some(ground.normal),
            Some(ground.point),
        ),
        None => (kinematics.altitude, None, None),
    };

    FlightData {
        time: inputs.time,
        position: kinematics.position,
        attitude: kinematics.ned_attitude,
        latitude: kinematics.latitude,
        longitude: kinematics.longitude,
        altitude: kinematics.altitude,
        altitude_agl,
        roll: euler.x,
        pitch: euler.y,
        heading: wrap_two_pi(euler.z),
        track: track_from_velocity(&velocity_ned),
        climb_angle: flight_path_angle(&velocity_ned),
        alpha: air_data.alpha,
        beta: air_data.beta,
        indicated_airspeed: air_data.indicated_airspeed(),
        true_airspeed: air_data.true_airspeed,
        ground_speed: velocity_ned.x.hypot(velocity_ned.y),
        mach: air_data.mach,
        climb_rate: -velocity_ned.z,
        turn_rate: inputs.turn_rate,
        angular_velocity: omega,
        g_force_cg,
        g_force_pilot,
        aero_load_factor: -aero.z / weight,
        gear_load_factor: gear_load / weight,
        ground_normal,
        ground_point,
        mass: models.inertia.mass(),
        fuel_mass: models.inertia.fuel(),
        stalled: models.aerodynamics.is_stalled(air_data),
        on_ground: models.landing_gear.on_ground(context),
        crash: inputs.crash,
    }
}
