use nalgebra::{Quaternion, Vector3};

use crate::components::{
    raw_quaternion, ControlInputs, FreezeFlags, RawState, StateVector, ANGULAR_VELOCITY, ATTITUDE,
    POSITION, VELOCITY,
};
use crate::physics::{ForceContext, ForceMoment, ForceMomentModel, Kinematics, PhysicsError};
use crate::resources::{Environment, GroundContact};
use crate::systems::{
    calculate_air_data, AerodynamicsModel, InertiaModel, LandingGearModel, PropulsionModel,
};

/// The force models of one aircraft, fixed when the aircraft is loaded.
#[derive(Debug, Clone)]
pub struct ForceModels {
    pub aerodynamics: AerodynamicsModel,
    pub propulsion: PropulsionModel,
    pub landing_gear: LandingGearModel,
    pub inertia: InertiaModel,
}

impl ForceModels {
    pub fn all(&self) -> [&dyn ForceMomentModel; 4] {
        [
            &self.aerodynamics,
            &self.propulsion,
            &self.landing_gear,
            &self.inertia,
        ]
    }

    pub fn all_mut(&mut self) -> [&mut dyn ForceMomentModel; 4] {
        [
            &mut self.aerodynamics,
            &mut self.propulsion,
            &mut self.landing_gear,
            &mut self.inertia,
        ]
    }

    /// Summed checked loads of every model.
    pub fn total_load(&self, context: &ForceContext) -> Result<ForceMoment, PhysicsError> {
        self.all()
            .into_iter()
            .map(|model| model.evaluate(context))
            .sum()
    }
}

/// Inputs held constant across the Runge-Kutta stages of one tick.
pub(crate) struct TickInputs<'a> {
    pub environment: &'a dyn Environment,
    pub ground: Option<GroundContact>,
    pub controls: ControlInputs,
    pub freeze: FreezeFlags,
}

impl TickInputs<'_> {
    /// Context for a candidate state.
    pub fn context(&self, state: &StateVector, mass: f64) -> ForceContext {
        let kinematics = Kinematics::new(
            state.position,
            state.attitude,
            state.velocity,
            state.angular_velocity,
        );
        let atmosphere = self.environment.sample(kinematics.altitude);
        let wind = self.environment.wind_ned(kinematics.altitude);

        ForceContext {
            kinematics,
            air_data: calculate_air_data(&kinematics, &atmosphere, &wind),
            controls: self.controls,
            ground: self.ground,
            mass,
        }
    }
}

/// Right-hand side of the equations of motion for a candidate flat state.
///
/// Loads are summed about the body reference point and the generalised 6x6 mass matrix
/// is solved for the body accelerations. Velocity is Earth-relative, so the Coriolis
/// term of the rotating Earth is added. The quaternion rate uses the candidate
/// quaternion as given, without renormalising it.
pub(crate) fn state_derivative(
    raw: &RawState,
    models: &ForceModels,
    inputs: &TickInputs,
) -> Result<RawState, PhysicsError> {
    let state = StateVector::from_raw(raw);
    let context = inputs.context(&state, models.inertia.mass());
    let loads = models.total_load(&context)?;

    let inertia = &models.inertia;
    let rhs = loads.to_vector6() - inertia.bias_terms(&state.velocity, &state.angular_velocity);
    let acceleration = inertia
        .mass_matrix()
        .lu()
        .solve(&rhs)
        .ok_or(PhysicsError::SingularMassMatrix)?;

    let coriolis = context.kinematics.earth_rate_body.cross(&state.velocity) * 2.0;
    let linear_acceleration = acceleration.fixed_rows::<3>(0).into_owned() - coriolis;
    let angular_acceleration = acceleration.fixed_rows::<3>(3).into_owned();

    let omega = Quaternion::from_parts(0.0, state.angular_velocity);
    let attitude_rate = raw_quaternion(raw) * omega * 0.5;
    let position_rate = state.attitude * state.velocity;

    let freeze = inputs.freeze;
    let mut derivative = RawState::zeros();
    if !freeze.position {
        derivative
            .fixed_rows_mut::<3>(POSITION)
            .copy_from(&position_rate);
    }
    if !freeze.attitude {
        derivative[ATTITUDE] = attitude_rate.w;
        derivative[ATTITUDE + 1] = attitude_rate.i;
        derivative[ATTITUDE + 2] = attitude_rate.j;
        derivative[ATTITUDE + 3] = attitude_rate.k;
        derivative
            .fixed_rows_mut::<3>(ANGULAR_VELOCITY)
            .copy_from(&angular_acceleration);
    }
    if !freeze.velocity {
        derivative
            .fixed_rows_mut::<3>(VELOCITY)
            .copy_from(&linear_acceleration);
    }

    Ok(derivative)
}

/// Body-axis accelerations at a state, for the discrete load-factor terms.
pub(crate) fn body_accelerations(
    derivative: &RawState,
) -> (Vector3<f64>, Vector3<f64>) {
    (
        derivative.fixed_rows::<3>(VELOCITY).into_owned(),
        derivative.fixed_rows::<3>(ANGULAR_VELOCITY).into_owned(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::AircraftConfig;
    use crate::resources::StandardAtmosphere;
    use crate::utils::constants::GRAVITY;
    use approx::assert_relative_eq;

    fn models(config: &AircraftConfig) -> ForceModels {
        ForceModels {
            aerodynamics: AerodynamicsModel::new(
                config.geometry,
                config.aero_coef,
                config.control_surfaces,
            ),
            propulsion: PropulsionModel::new(config.propulsion.clone()),
            landing_gear: LandingGearModel::new(config.landing_gear.clone()),
            inertia: InertiaModel::new(config.mass),
        }
    }

    fn inputs(environment: &StandardAtmosphere, freeze: FreezeFlags) -> TickInputs<'_> {
        TickInputs {
            environment,
            ground: None,
            controls: ControlInputs::default(),
            freeze,
        }
    }

    #[test]
    fn test_hovering_without_air_falls_at_one_g() {
        let config = AircraftConfig::twin_otter();
        let models = models(&config);
        let environment = StandardAtmosphere::default();
        let state = StateVector::from_geodetic(0.0, 0.0, 1000.0, 0.0, 0.0);

        let derivative =
            state_derivative(&state.to_raw(), &models, &inputs(&environment, FreezeFlags::none()))
                .unwrap();
        let (linear, angular) = body_accelerations(&derivative);

        assert_relative_eq!(linear, Vector3::new(0.0, 0.0, GRAVITY), epsilon = 1e-9);
        assert_relative_eq!(angular, Vector3::zeros(), epsilon = 1e-9);
    }

    #[test]
    fn test_attitude_rate_follows_body_rates() {
        let config = AircraftConfig::twin_otter();
        let models = models(&config);
        let environment = StandardAtmosphere::default();
        let mut state = StateVector::from_geodetic(0.0, 0.0, 1000.0, 0.0, 0.0);
        state.angular_velocity = Vector3::new(0.2, 0.0, 0.0);

        let derivative =
            state_derivative(&state.to_raw(), &models, &inputs(&environment, FreezeFlags::none()))
                .unwrap();
        let expected =
            state.attitude.quaternion() * Quaternion::from_parts(0.0, state.angular_velocity) * 0.5;

        assert_relative_eq!(derivative[ATTITUDE], expected.w, epsilon = 1e-12);
        assert_relative_eq!(derivative[ATTITUDE + 1], expected.i, epsilon = 1e-12);
    }

    #[test]
    fn test_frozen_state_has_zero_derivative() {
        let config = AircraftConfig::twin_otter();
        let models = models(&config);
        let environment = StandardAtmosphere::default();
        let state = StateVector::from_geodetic(0.5, 0.5, 1000.0, 1.0, 60.0);

        let derivative =
            state_derivative(&state.to_raw(), &models, &inputs(&environment, FreezeFlags::all()))
                .unwrap();

        assert_eq!(derivative, RawState::zeros());
    }

    #[test]
    fn test_singular_mass_matrix_is_reported() {
        let mut config = AircraftConfig::twin_otter();
        config.mass.empty_mass = 0.0;
        config.mass.initial_fuel = 0.0;
        config.mass.ixx = 0.0;
        let models = models(&config);
        let environment = StandardAtmosphere::default();
        let state = StateVector::from_geodetic(0.0, 0.0, 1000.0, 0.0, 60.0);

        let result =
            state_derivative(&state.to_raw(), &models, &inputs(&environment, FreezeFlags::none()));
        assert_eq!(result, Err(PhysicsError::SingularMassMatrix));
    }
}
