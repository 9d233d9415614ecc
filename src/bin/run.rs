use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use std::env;
use std::process::ExitCode;
use std::time::Duration;

use flyer_core::plugins::{
    build_from_config, AircraftComponent, AircraftFault, FlightCorePlugin, FlightDataEvent,
    FlightSet,
};
use flyer_core::resources::SimulationConfig;
use flyer_core::utils::errors::{error_chain, SimError};
use flyer_core::utils::math::rad_to_deg;

fn main() -> ExitCode {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()));

    match run(&mut app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{}", error_chain(&error));
            ExitCode::FAILURE
        }
    }
}

fn run(app: &mut App) -> Result<(), SimError> {
    let config = match env::args().nth(1) {
        Some(path) => {
            info!("Loading simulation config from {}", path);
            SimulationConfig::load(path)?
        }
        None => SimulationConfig::default(),
    };

    let (aircraft, autopilot) = build_from_config(&config)?;
    let name = aircraft.0.config().name.clone();

    app.add_plugins(FlightCorePlugin {
        timestep: config.timestep,
    })
    .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
        config.timestep,
    )))
    .add_systems(FixedUpdate, log_summary.after(FlightSet::Autopilot));

    app.world_mut()
        .spawn((aircraft, autopilot, Name::new(name.clone())));

    app.finish();
    app.cleanup();

    // The first update only starts the clock
    app.update();

    let steps = config.steps();
    info!(
        "Running {} for {:.1} s ({} steps of {} s)",
        name, config.duration, steps, config.timestep
    );
    for _ in 0..steps {
        app.update();

        let world = app.world_mut();
        if world
            .query_filtered::<(), With<AircraftFault>>()
            .iter(world)
            .next()
            .is_some()
        {
            break;
        }
    }

    let world = app.world_mut();
    let mut aircraft = world.query::<(&AircraftComponent, Option<&AircraftFault>)>();
    for (aircraft, fault) in aircraft.iter(world) {
        println!("{}", serde_json::to_string_pretty(aircraft.0.flight_data())?);
        if fault.is_some() {
            warn!("{} stopped early at t = {:.2} s", name, aircraft.0.time());
        }
    }

    Ok(())
}

/// One line of flight data per simulated second.
fn log_summary(mut events: EventReader<FlightDataEvent>, mut next_report: Local<f64>) {
    for event in events.read() {
        let data = &event.flight_data;
        if data.time + 1e-9 < *next_report {
            continue;
        }
        *next_report = data.time.floor() + 1.0;

        info!(
            "t={:6.1} alt={:7.1} m ias={:5.1} m/s hdg={:5.1} pitch={:5.1} roll={:5.1} vs={:5.1} m/s {:?}",
            data.time,
            data.altitude,
            data.indicated_airspeed,
            rad_to_deg(data.heading),
            rad_to_deg(data.pitch),
            rad_to_deg(data.roll),
            data.climb_rate,
            data.crash
        );
    }
}
