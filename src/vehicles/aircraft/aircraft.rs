use bevy::prelude::*;
use std::path::Path;

use crate::components::{
    AircraftConfig, ConfigError, ControlInputs, Crash, FlightData, FreezeFlags, StateVector,
};
use crate::physics::{rk4_step, PhysicsError};
use crate::resources::{Environment, GroundContact, Terrain};
use crate::systems::{AerodynamicsModel, InertiaModel, LandingGearModel, PropulsionModel};
use crate::utils::constants::GROUND_PROBE_DISTANCE;
use crate::utils::errors::SimError;
use crate::utils::math::wrap_pi;

use super::crash::CrashDetector;
use super::derived::{derive_flight_data, FlightDataInputs};
use super::dynamics::{body_accelerations, state_derivative, ForceModels, TickInputs};

/// A six-degree-of-freedom aircraft: the authoritative state, its force models and the
/// flight data derived from them.
pub struct Aircraft {
    config: AircraftConfig,
    environment: Box<dyn Environment + Send + Sync>,
    terrain: Box<dyn Terrain + Send + Sync>,
    models: ForceModels,
    state: StateVector,
    previous_state: StateVector,
    previous_heading: Option<f64>,
    controls: ControlInputs,
    freeze: FreezeFlags,
    flight_data: FlightData,
    crash_detector: CrashDetector,
    time: f64,
    fault: Option<PhysicsError>,
}

impl Aircraft {
    pub fn new(
        config: AircraftConfig,
        environment: Box<dyn Environment + Send + Sync>,
        terrain: Box<dyn Terrain + Send + Sync>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let models = ForceModels {
            aerodynamics: AerodynamicsModel::new(
                config.geometry,
                config.aero_coef,
                config.control_surfaces,
            ),
            propulsion: PropulsionModel::new(config.propulsion.clone()),
            landing_gear: LandingGearModel::new(config.landing_gear.clone()),
            inertia: InertiaModel::new(config.mass),
        };
        let state = StateVector::default();

        Ok(Self {
            config,
            environment,
            terrain,
            models,
            state,
            previous_state: state,
            previous_heading: None,
            controls: ControlInputs::default(),
            freeze: FreezeFlags::none(),
            flight_data: FlightData::default(),
            crash_detector: CrashDetector::default(),
            time: 0.0,
            fault: None,
        })
    }

    /// Loads a YAML aircraft definition and builds the aircraft from it.
    pub fn from_config_file<P: AsRef<Path>>(
        path: P,
        environment: Box<dyn Environment + Send + Sync>,
        terrain: Box<dyn Terrain + Send + Sync>,
    ) -> Result<Self, SimError> {
        let path = path.as_ref();
        let load_error = |source| SimError::AircraftLoad {
            name: path.display().to_string(),
            source,
        };

        let config = AircraftConfig::from_file(path).map_err(load_error)?;
        Self::new(config, environment, terrain).map_err(load_error)
    }

    pub fn config(&self) -> &AircraftConfig {
        &self.config
    }

    pub fn state_vector(&self) -> &StateVector {
        &self.state
    }

    pub fn flight_data(&self) -> &FlightData {
        &self.flight_data
    }

    pub fn crash(&self) -> Crash {
        self.crash_detector.crash()
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn set_controls(&mut self, controls: ControlInputs) {
        self.controls = controls;
    }

    pub fn set_freeze(&mut self, freeze: FreezeFlags) {
        self.freeze = freeze;
    }

    /// Clears the crash latch without moving the aircraft.
    pub fn reset_crash(&mut self) {
        self.crash_detector.reset();
        self.flight_data.crash = Crash::NoCrash;
    }

    /// Puts every force model in its initial condition and derives flight data from the
    /// current state without integrating.
    pub fn initialize(&mut self, engine_running: bool) -> Result<(), PhysicsError> {
        self.fault = None;
        self.crash_detector.reset();

        let ground = self.sample_ground();
        let context = self.tick_inputs(ground, FreezeFlags::none()).context(
            &self.state,
            self.models.inertia.mass(),
        );

        self.models
            .propulsion
            .set_fuel_available(self.config.mass.initial_fuel > 0.0);
        for model in self.models.all_mut() {
            model.initialize(engine_running, &context);
        }

        self.previous_state = self.state;
        self.previous_heading = None;
        self.refresh_flight_data(ground, None)?;

        info!(
            "{} initialised at {:.1} m, {:.1} m/s, engines {}",
            self.config.name,
            self.flight_data.altitude,
            self.flight_data.true_airspeed,
            if engine_running { "running" } else { "off" }
        );
        Ok(())
    }

    /// Advances the aircraft by `dt`.
    ///
    /// With `integrate` false the state is held while the force models and the flight
    /// data are still brought up to date. A fatal error leaves the aircraft unusable:
    /// every later call returns it again until [`initialize`](Self::initialize) or
    /// [`set_state_vector`](Self::set_state_vector).
    pub fn update(&mut self, dt: f64, integrate: bool) -> Result<(), PhysicsError> {
        if let Some(fault) = &self.fault {
            return Err(fault.clone());
        }

        match self.step(dt, integrate) {
            Ok(()) => Ok(()),
            Err(error) => {
                self.fault = Some(error.clone());
                Err(error)
            }
        }
    }

    /// Moves the aircraft to `state` and rebuilds the flight data from it.
    ///
    /// The previous state used for rates is reset to `state` and the crash latch
    /// is cleared.
    pub fn set_state_vector(&mut self, state: StateVector) -> Result<(), PhysicsError> {
        if !state.is_finite() {
            return Err(PhysicsError::NumericalDivergence {
                time: self.time,
                state: state.to_raw().iter().copied().collect(),
            });
        }

        self.fault = None;
        self.state = state;
        self.previous_state = state;
        self.previous_heading = None;
        self.crash_detector.reset();

        let ground = self.sample_ground();
        self.refresh_flight_data(ground, None)
    }

    /// Places the aircraft wings level along `heading` (radians) at `airspeed`.
    pub fn place(
        &mut self,
        latitude: f64,
        longitude: f64,
        altitude: f64,
        heading: f64,
        airspeed: f64,
    ) -> Result<(), PhysicsError> {
        self.set_state_vector(StateVector::from_geodetic(
            latitude, longitude, altitude, heading, airspeed,
        ))
    }

    fn step(&mut self, dt: f64, integrate: bool) -> Result<(), PhysicsError> {
        let ground = self.sample_ground();
        let inputs = TickInputs {
            environment: self.environment.as_ref(),
            ground,
            controls: self.controls,
            freeze: self.freeze,
        };
        let context = inputs.context(&self.state, self.models.inertia.mass());

        for model in self.models.all_mut() {
            model.update(&context, dt);
        }

        let raw = self.state.to_raw();
        let next = if integrate {
            let models = &self.models;
            rk4_step(&raw, dt, |candidate| {
                state_derivative(candidate, models, &inputs)
            })?
        } else {
            raw
        };

        if next.iter().any(|value| !value.is_finite()) {
            return Err(PhysicsError::NumericalDivergence {
                time: self.time + dt,
                state: next.iter().copied().collect(),
            });
        }

        self.time += dt;
        self.previous_state = self.state;
        self.state = StateVector::from_raw(&next);

        let fuel_used = self.models.propulsion.fuel_flow(&context) * dt;
        if !self.models.inertia.burn_fuel(fuel_used) {
            self.models.propulsion.set_fuel_available(false);
        }

        self.refresh_flight_data(ground, Some(dt))?;

        let crash = self.crash_detector.detect(
            &self.config.limits,
            &self.config.collision_points,
            &self.previous_state,
            &self.state,
            self.terrain.as_ref(),
            &self.flight_data,
        );
        self.flight_data.crash = crash;

        Ok(())
    }

    fn sample_ground(&self) -> Option<GroundContact> {
        self.terrain
            .ground_below(&self.state.position, GROUND_PROBE_DISTANCE)
    }

    fn tick_inputs(&self, ground: Option<GroundContact>, freeze: FreezeFlags) -> TickInputs<'_> {
        TickInputs {
            environment: self.environment.as_ref(),
            ground,
            controls: self.controls,
            freeze,
        }
    }

    /// Rebuilds the snapshot from the current state. `dt` is `None` right after a
    /// placement, when there is no previous heading to differentiate.
    fn refresh_flight_data(
        &mut self,
        ground: Option<GroundContact>,
        dt: Option<f64>,
    ) -> Result<(), PhysicsError> {
        let inputs = self.tick_inputs(ground, FreezeFlags::none());
        let derivative = state_derivative(&self.state.to_raw(), &self.models, &inputs)?;
        let (_, angular_acceleration) = body_accelerations(&derivative);
        let context = inputs.context(&self.state, self.models.inertia.mass());

        let mut flight_data = derive_flight_data(&FlightDataInputs {
            time: self.time,
            context: &context,
            models: &self.models,
            angular_acceleration,
            pilot_eye: self.config.pilot_eye,
            turn_rate: 0.0,
            crash: self.crash_detector.crash(),
        });

        flight_data.turn_rate = match (dt, self.previous_heading) {
            (Some(dt), Some(previous)) if dt > 0.0 => {
                wrap_pi(flight_data.heading - previous) / dt
            }
            _ => 0.0,
        };
        self.previous_heading = Some(flight_data.heading);
        self.flight_data = flight_data;

        Ok(())
    }
}
