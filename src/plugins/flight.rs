use bevy::prelude::*;

use crate::components::{AircraftConfig, AircraftSource, ControlInputs, FlightData};
use crate::resources::{FlatTerrain, NavReceiver, SimulationConfig, StandardAtmosphere};
use crate::systems::{FlightDirector, FlightDirectorOutput};
use crate::utils::errors::{error_chain, SimError};
use crate::utils::math::deg_to_rad;
use crate::vehicles::Aircraft;

/// Flight core stages, run in order every fixed tick.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightSet {
    Dynamics,
    Autopilot,
}

#[derive(Component)]
pub struct AircraftComponent(pub Aircraft);

#[derive(Component, Debug, Clone)]
pub struct AutopilotComponent {
    pub director: FlightDirector,
    /// Latest commands, for the actuator layer
    pub output: FlightDirectorOutput,
}

impl AutopilotComponent {
    pub fn new(director: FlightDirector) -> Self {
        Self {
            director,
            output: FlightDirectorOutput::default(),
        }
    }
}

/// Radio navigation data shared by every autopilot.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct NavReceiverResource(pub NavReceiver);

/// Marks an aircraft whose integrator failed. It is skipped from then on.
#[derive(Component, Debug, Clone, Copy)]
pub struct AircraftFault;

/// Snapshot published after every dynamics tick.
#[derive(Event, Debug, Clone)]
pub struct FlightDataEvent {
    pub entity: Entity,
    pub flight_data: FlightData,
}

#[derive(Resource, Debug, Clone, Copy)]
pub struct FlightSettings {
    /// Fixed integration step (s)
    pub timestep: f64,
    /// When false the state is held and only the models and flight data update
    pub integrate: bool,
}

pub struct FlightCorePlugin {
    pub timestep: f64,
}

impl Default for FlightCorePlugin {
    fn default() -> Self {
        Self { timestep: 0.01 }
    }
}

impl Plugin for FlightCorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(FlightSettings {
            timestep: self.timestep,
            integrate: true,
        })
        .insert_resource(Time::<Fixed>::from_seconds(self.timestep))
        .init_resource::<NavReceiverResource>()
        .add_event::<FlightDataEvent>();

        app.configure_sets(
            FixedUpdate,
            (FlightSet::Dynamics, FlightSet::Autopilot).chain(),
        );

        app.add_systems(
            FixedUpdate,
            (
                aircraft_dynamics_system.in_set(FlightSet::Dynamics),
                autopilot_system.in_set(FlightSet::Autopilot),
            ),
        );
    }
}

/// Advances every healthy aircraft by one fixed step.
pub fn aircraft_dynamics_system(
    mut commands: Commands,
    settings: Res<FlightSettings>,
    mut aircraft_query: Query<(Entity, &mut AircraftComponent), Without<AircraftFault>>,
    mut flight_data_events: EventWriter<FlightDataEvent>,
) {
    for (entity, mut aircraft) in aircraft_query.iter_mut() {
        if let Err(error) = aircraft.0.update(settings.timestep, settings.integrate) {
            error!(
                "Aircraft {:?} ({}) stopped: {}",
                entity,
                aircraft.0.config().name,
                error_chain(&error)
            );
            commands.entity(entity).insert(AircraftFault);
            continue;
        }

        flight_data_events.send(FlightDataEvent {
            entity,
            flight_data: *aircraft.0.flight_data(),
        });
    }
}

/// Runs each flight director on the flight data its aircraft just produced.
pub fn autopilot_system(
    settings: Res<FlightSettings>,
    nav: Res<NavReceiverResource>,
    mut query: Query<(&AircraftComponent, &mut AutopilotComponent), Without<AircraftFault>>,
) {
    for (aircraft, mut autopilot) in query.iter_mut() {
        let output = autopilot
            .director
            .update(aircraft.0.flight_data(), &nav.0, settings.timestep);
        autopilot.output = output;
    }
}

/// Builds, places and initialises the aircraft and autopilot a [`SimulationConfig`]
/// describes.
pub fn build_from_config(
    config: &SimulationConfig,
) -> Result<(AircraftComponent, AutopilotComponent), SimError> {
    let environment = Box::new(StandardAtmosphere::default());
    let terrain = Box::new(FlatTerrain::default());

    let mut aircraft = match &config.aircraft_file {
        Some(path) => Aircraft::from_config_file(path, environment, terrain)?,
        None => {
            let name = format!("{:?}", config.aircraft);
            AircraftConfig::new(AircraftSource::Programmed(config.aircraft.clone()))
                .and_then(|aircraft_config| Aircraft::new(aircraft_config, environment, terrain))
                .map_err(|source| SimError::AircraftLoad { name, source })?
        }
    };

    let start = &config.start;
    aircraft.place(
        deg_to_rad(start.latitude_deg),
        deg_to_rad(start.longitude_deg),
        start.altitude,
        deg_to_rad(start.heading_deg),
        start.airspeed,
    )?;
    aircraft.set_controls(ControlInputs {
        throttle: config.throttle,
        ..Default::default()
    });
    aircraft.initialize(config.engine_running)?;

    let mut director = FlightDirector::new(aircraft.config().autopilot.clone())?;
    director.update(aircraft.flight_data(), &NavReceiver::default(), 0.0);

    if let Some(setpoints) = &config.autopilot {
        if let Some(heading) = setpoints.heading_deg {
            director.set_target_heading(deg_to_rad(heading));
            director.on_pressed_hdg();
        }
        if let Some(airspeed) = setpoints.airspeed {
            director.set_target_airspeed(airspeed);
        }
        if let Some(vertical_speed) = setpoints.vertical_speed {
            director.set_target_vertical_speed(vertical_speed);
        }
        if let Some(altitude) = setpoints.altitude {
            director.set_target_altitude(altitude);
        }

        // One vertical mode at a time: altitude hold wins, then vertical speed
        if setpoints.altitude.is_some() {
            director.on_pressed_alt();
        } else if setpoints.vertical_speed.is_some() {
            director.on_pressed_vs();
        } else if setpoints.airspeed.is_some() {
            director.on_pressed_ias();
        }
    }

    Ok((AircraftComponent(aircraft), AutopilotComponent::new(director)))
}
