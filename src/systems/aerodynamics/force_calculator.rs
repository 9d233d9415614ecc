use nalgebra::Vector3;
use std::f64::consts::PI;

use crate::components::{AeroCoefficients, AircraftGeometry, ControlSurfaceConfig};
use crate::physics::{ForceContext, ForceMoment, ForceMomentModel};
use crate::systems::aerodynamics::control_surfaces::{ControlSurfaceActuator, SurfaceDeflections};
use crate::systems::AirDataValues;

/// Calculates aerodynamic forces and moments in body axes.
///
/// Angles and rates are clamped to the range the coefficient build-up was fitted on.
/// Below a tenth of a metre per second the airframe carries no aerodynamic load.
pub fn calculate_aerodynamic_forces_moments(
    geometry: &AircraftGeometry,
    coeffs: &AeroCoefficients,
    air_data: &AirDataValues,
    angular_velocity_body: &Vector3<f64>,
    deflections: &SurfaceDeflections,
) -> ForceMoment {
    if air_data.dynamic_pressure <= 1e-6 || air_data.true_airspeed <= 0.1 {
        return ForceMoment::zero();
    }

    let alpha = air_data.alpha.clamp(-10.0 * PI / 180.0, 40.0 * PI / 180.0);
    let beta = air_data.beta.clamp(-20.0 * PI / 180.0, 20.0 * PI / 180.0);
    let p = angular_velocity_body
        .x
        .clamp(-100.0 * PI / 180.0, 100.0 * PI / 180.0);
    let q = angular_velocity_body
        .y
        .clamp(-50.0 * PI / 180.0, 50.0 * PI / 180.0);
    let r = angular_velocity_body
        .z
        .clamp(-50.0 * PI / 180.0, 50.0 * PI / 180.0);

    // Non-dimensional rates
    let v_denom = 2.0 * air_data.true_airspeed;
    let p_hat = geometry.wing_span / v_denom * p;
    let q_hat = geometry.mac / v_denom * q;
    let r_hat = geometry.wing_span / v_denom * r;

    let elevator = deflections.elevator;
    let aileron = deflections.aileron;
    let rudder = deflections.rudder;
    let flap = deflections.flap;

    let drag = &coeffs.drag;
    let c_d = drag.c_d_0
        + drag.c_d_alpha * alpha
        + drag.c_d_alpha_q * alpha * q_hat
        + drag.c_d_alpha_deltae * alpha * elevator
        + drag.c_d_alpha2 * alpha.powi(2)
        + drag.c_d_alpha2_q * q_hat * alpha.powi(2)
        + drag.c_d_alpha2_deltae * elevator * alpha.powi(2)
        + drag.c_d_alpha3 * alpha.powi(3)
        + drag.c_d_alpha3_q * q_hat * alpha.powi(3)
        + drag.c_d_alpha4 * alpha.powi(4)
        + coeffs.flaps.c_d_flap * flap;

    let side = &coeffs.side_force;
    let c_y = side.c_y_beta * beta
        + side.c_y_p * p_hat
        + side.c_y_r * r_hat
        + side.c_y_deltaa * aileron
        + side.c_y_deltar * rudder;

    let lift = &coeffs.lift;
    let c_l = lift.c_l_0
        + lift.c_l_alpha * alpha
        + lift.c_l_q * q_hat
        + lift.c_l_deltae * elevator
        + lift.c_l_alpha_q * alpha * q_hat
        + lift.c_l_alpha2 * alpha.powi(2)
        + lift.c_l_alpha3 * alpha.powi(3)
        + lift.c_l_alpha4 * alpha.powi(4)
        + coeffs.flaps.c_l_flap * flap;

    let roll = &coeffs.roll;
    let c_l_roll = roll.c_l_beta * beta
        + roll.c_l_p * p_hat
        + roll.c_l_r * r_hat
        + roll.c_l_deltaa * aileron
        + roll.c_l_deltar * rudder;

    let pitch = &coeffs.pitch;
    let c_m = pitch.c_m_0
        + pitch.c_m_alpha * alpha
        + pitch.c_m_q * q_hat
        + pitch.c_m_deltae * elevator
        + pitch.c_m_alpha_q * alpha * q_hat
        + pitch.c_m_alpha2_q * q_hat * alpha.powi(2)
        + pitch.c_m_alpha2_deltae * elevator * alpha.powi(2)
        + pitch.c_m_alpha3_q * q_hat * alpha.powi(3)
        + pitch.c_m_alpha3_deltae * elevator * alpha.powi(3)
        + pitch.c_m_alpha4 * alpha.powi(4)
        + coeffs.flaps.c_m_flap * flap;

    let yaw = &coeffs.yaw;
    let c_n = yaw.c_n_beta * beta
        + yaw.c_n_p * p_hat
        + yaw.c_n_r * r_hat
        + yaw.c_n_deltaa * aileron
        + yaw.c_n_deltar * rudder
        + yaw.c_n_beta2 * beta.powi(2)
        + yaw.c_n_beta3 * beta.powi(3);

    let q_s = air_data.dynamic_pressure * geometry.wing_area;

    // Drag and lift act against body x and z
    let force = Vector3::new(-q_s * c_d, q_s * c_y, -q_s * c_l);
    let moment = Vector3::new(
        q_s * geometry.wing_span * c_l_roll,
        q_s * geometry.mac * c_m,
        q_s * geometry.wing_span * c_n,
    );

    ForceMoment::new(force, moment)
}

/// Polynomial aerodynamic model with its control-surface actuation.
#[derive(Debug, Clone)]
pub struct AerodynamicsModel {
    geometry: AircraftGeometry,
    coeffs: AeroCoefficients,
    surfaces: ControlSurfaceActuator,
}

impl AerodynamicsModel {
    pub fn new(
        geometry: AircraftGeometry,
        coeffs: AeroCoefficients,
        control_surfaces: ControlSurfaceConfig,
    ) -> Self {
        Self {
            geometry,
            coeffs,
            surfaces: ControlSurfaceActuator::new(control_surfaces),
        }
    }

    pub fn is_stalled(&self, air_data: &AirDataValues) -> bool {
        air_data.true_airspeed > 0.1 && air_data.alpha > self.coeffs.alpha_stall
    }

    pub fn deflections(&self, context: &ForceContext) -> SurfaceDeflections {
        self.surfaces.deflections(&context.controls)
    }
}

impl ForceMomentModel for AerodynamicsModel {
    fn name(&self) -> &str {
        "aerodynamics"
    }

    fn initialize(&mut self, _engine_running: bool, context: &ForceContext) {
        self.surfaces.reset(&context.controls);
    }

    fn update(&mut self, context: &ForceContext, dt: f64) {
        self.surfaces.advance(&context.controls, dt);
    }

    fn compute_force_and_moment(&self, context: &ForceContext) -> ForceMoment {
        calculate_aerodynamic_forces_moments(
            &self.geometry,
            &self.coeffs,
            &context.air_data,
            &context.kinematics.angular_velocity,
            &self.deflections(context),
        )
    }
}
