use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use flyer_core::components::FlightData;
use flyer_core::plugins::{
    build_from_config, AircraftComponent, AircraftFault, AutopilotComponent, FlightCorePlugin,
    FlightDataEvent, FlightSet, FlightSettings,
};
use flyer_core::resources::SimulationConfig;
use std::time::Duration;

/// Flight data events collected after every fixed tick.
#[derive(Resource, Default)]
pub struct RecordedFlightData(pub Vec<FlightDataEvent>);

fn record_flight_data(
    mut events: EventReader<FlightDataEvent>,
    mut recorded: ResMut<RecordedFlightData>,
) {
    recorded.0.extend(events.read().cloned());
}

// Builder for a headless flight-core app with one or more aircraft
pub struct TestAppBuilder {
    simulation: SimulationConfig,
    extra_aircraft: Vec<AircraftComponent>,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            extra_aircraft: Vec::new(),
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_simulation(mut self, simulation: SimulationConfig) -> Self {
        self.simulation = simulation;
        self
    }

    /// Adds an aircraft without an autopilot.
    pub fn with_aircraft(mut self, aircraft: AircraftComponent) -> Self {
        self.extra_aircraft.push(aircraft);
        self
    }

    pub fn build(self) -> TestApp {
        let timestep = self.simulation.timestep;
        let mut app = App::new();

        app.add_plugins(MinimalPlugins)
            .add_plugins(FlightCorePlugin { timestep })
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
                timestep,
            )))
            .init_resource::<RecordedFlightData>()
            .add_systems(
                FixedUpdate,
                record_flight_data.after(FlightSet::Autopilot),
            );

        let (aircraft, autopilot) =
            build_from_config(&self.simulation).expect("simulation config builds");
        app.world_mut().spawn((aircraft, autopilot));
        for aircraft in self.extra_aircraft {
            app.world_mut().spawn(aircraft);
        }

        app.finish();
        app.cleanup();

        // Prime the clock so every later update advances exactly one step
        app.update();

        TestApp { app, timestep }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
    pub timestep: f64,
}

impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.update();
        }
    }

    pub fn set_integrate(&mut self, integrate: bool) {
        self.app
            .world_mut()
            .resource_mut::<FlightSettings>()
            .integrate = integrate;
    }

    pub fn recorded(&self) -> &[FlightDataEvent] {
        &self.app.world().resource::<RecordedFlightData>().0
    }

    /// Flight data of every aircraft.
    pub fn flight_data(&mut self) -> Vec<FlightData> {
        let world = self.app.world_mut();
        let mut query = world.query::<&AircraftComponent>();
        query
            .iter(world)
            .map(|aircraft| *aircraft.0.flight_data())
            .collect()
    }

    pub fn autopilot(&mut self) -> Option<AutopilotComponent> {
        let world = self.app.world_mut();
        let mut query = world.query::<&AutopilotComponent>();
        query.iter(world).next().cloned()
    }

    pub fn faulted_count(&mut self) -> usize {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<(), With<AircraftFault>>();
        query.iter(world).count()
    }
}
