use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};

use crate::components::{PowerplantConfig, PropulsionConfig};
use crate::physics::{ForceContext, ForceMoment, ForceMomentModel};
use crate::utils::constants::ISA_SEA_LEVEL_DENSITY;

/// Spool state of one engine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PowerplantState {
    pub running: bool,
    /// Fraction of the available thrust range currently produced, in [0, 1]
    pub thrust_fraction: f64,
    pub power_lever: f64,
}

/// Moves the thrust fraction toward the power lever with the spool time constants.
pub fn update_powerplant_state(state: &mut PowerplantState, config: &PowerplantConfig, dt: f64) {
    let target = if state.running { state.power_lever } else { 0.0 };

    let time_constant = if target > state.thrust_fraction {
        config.spool_up_time
    } else {
        config.spool_down_time
    };

    state.thrust_fraction = if time_constant > 1e-6 {
        let decay = (-dt / time_constant).exp();
        target + (state.thrust_fraction - target) * decay
    } else {
        target
    };
    state.thrust_fraction = state.thrust_fraction.clamp(0.0, 1.0);
}

/// Thrust (N) and fuel flow (kg/s) of one engine at the given density and Mach number.
pub fn calculate_thrust_and_fuel_flow(
    config: &PowerplantConfig,
    state: &PowerplantState,
    density: f64,
    mach: f64,
) -> (f64, f64) {
    let rho_factor = (density / ISA_SEA_LEVEL_DENSITY).max(0.01).sqrt();
    let ram_factor = (1.0 - 0.1 * mach.max(0.0)).max(0.0);

    let min_thrust = (config.min_thrust * rho_factor).max(0.0);
    let max_thrust = (config.max_thrust * rho_factor * ram_factor)
        .max(0.0)
        .max(min_thrust);

    if !state.running {
        return (0.0, 0.0);
    }

    let thrust = min_thrust + (max_thrust - min_thrust) * state.thrust_fraction;
    let fuel_flow = thrust * config.tsfc * (1.0 + 0.2 * state.thrust_fraction);

    (thrust.max(0.0), fuel_flow.max(0.0))
}

/// Thrust line of an engine in body axes.
fn thrust_direction(config: &PowerplantConfig) -> Vector3<f64> {
    UnitQuaternion::from_euler_angles(
        config.orientation.x,
        config.orientation.y,
        config.orientation.z,
    ) * Vector3::x()
}

/// All engines of the aircraft, sharing one power lever.
#[derive(Debug, Clone)]
pub struct PropulsionModel {
    config: PropulsionConfig,
    states: Vec<PowerplantState>,
    fuel_available: bool,
}

impl PropulsionModel {
    pub fn new(config: PropulsionConfig) -> Self {
        let states = vec![PowerplantState::default(); config.engines.len()];
        Self {
            config,
            states,
            fuel_available: true,
        }
    }

    pub fn states(&self) -> &[PowerplantState] {
        &self.states
    }

    /// Starves every engine once the tanks run dry.
    pub fn set_fuel_available(&mut self, available: bool) {
        if self.fuel_available && !available {
            warn!("Fuel exhausted, engines shutting down");
        }
        self.fuel_available = available;
        if !available {
            for state in &mut self.states {
                state.running = false;
            }
        }
    }

    /// Total fuel flow (kg/s) at the conditions in `context`.
    pub fn fuel_flow(&self, context: &ForceContext) -> f64 {
        self.config
            .engines
            .iter()
            .zip(&self.states)
            .map(|(engine, state)| {
                calculate_thrust_and_fuel_flow(
                    engine,
                    state,
                    context.air_data.density,
                    context.air_data.mach,
                )
                .1
            })
            .sum()
    }
}

impl ForceMomentModel for PropulsionModel {
    fn name(&self) -> &str {
        "propulsion"
    }

    fn initialize(&mut self, engine_running: bool, context: &ForceContext) {
        let lever = context.controls.clamped().throttle;
        let running = engine_running && self.fuel_available;

        for state in &mut self.states {
            *state = PowerplantState {
                running,
                thrust_fraction: if running { lever } else { 0.0 },
                power_lever: lever,
            };
        }
        debug!(
            "Propulsion initialised: {} engine(s), running={}",
            self.states.len(),
            running
        );
    }

    fn update(&mut self, context: &ForceContext, dt: f64) {
        let lever = context.controls.clamped().throttle;
        for (engine, state) in self.config.engines.iter().zip(self.states.iter_mut()) {
            state.power_lever = lever;
            update_powerplant_state(state, engine, dt);
        }
    }

    fn compute_force_and_moment(&self, context: &ForceContext) -> ForceMoment {
        self.config
            .engines
            .iter()
            .zip(&self.states)
            .map(|(engine, state)| {
                let (thrust, _) = calculate_thrust_and_fuel_flow(
                    engine,
                    state,
                    context.air_data.density,
                    context.air_data.mach,
                );
                ForceMoment::at_point(thrust_direction(engine) * thrust, &engine.position)
            })
            .sum()
    }
}
