use flyer_core::components::{AircraftConfig, AircraftType, ConfigError};
use flyer_core::resources::{FlatTerrain, SimulationConfig, StandardAtmosphere};
use flyer_core::utils::errors::{error_chain, SimError};
use flyer_core::vehicles::Aircraft;
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn load(file: &NamedTempFile) -> Result<Aircraft, SimError> {
    Aircraft::from_config_file(
        file.path(),
        Box::new(StandardAtmosphere::default()),
        Box::new(FlatTerrain::default()),
    )
}

#[test]
fn test_aircraft_yaml_file_loads() {
    let config = AircraftConfig::twin_otter();
    let file = write_temp(&config.to_yaml_string().unwrap());

    let aircraft = load(&file).unwrap();
    assert_eq!(aircraft.config(), &config);
}

#[test]
fn test_malformed_yaml_names_the_file() {
    let file = write_temp("name: [unterminated\n");

    let error = load(&file).err().unwrap();
    assert!(matches!(
        &error,
        SimError::AircraftLoad {
            source: ConfigError::YamlError(_),
            ..
        }
    ));
    let rendered = error_chain(&error);
    assert!(rendered.starts_with("Failed to load aircraft"));
    assert!(rendered.contains(&file.path().display().to_string()));
}

#[test]
fn test_zero_gain_in_file_is_rejected() {
    let mut config = AircraftConfig::twin_otter();
    config.autopilot.approach.linear.kp = 0.0;
    let file = write_temp(&config.to_yaml_string().unwrap());

    let error = load(&file).err().unwrap();
    match &error {
        SimError::AircraftLoad {
            source: ConfigError::InvalidGain { loop_name },
            ..
        } => assert_eq!(loop_name, "approach.linear"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(error_chain(&error).ends_with("Loop 'approach.linear' has zero proportional gain"));
}

#[test]
fn test_custom_aircraft_keeps_its_name() {
    let config = AircraftConfig::new(flyer_core::components::AircraftSource::Programmed(
        AircraftType::Custom("Trainer".to_string()),
    ))
    .unwrap();

    assert_eq!(config.name, "Trainer");
    assert_eq!(config.mass, AircraftConfig::twin_otter().mass);
}

#[test]
fn test_simulation_file_pointing_at_aircraft_file() {
    let aircraft_file = write_temp(&AircraftConfig::f4_phantom().to_yaml_string().unwrap());
    let simulation = SimulationConfig {
        aircraft_file: Some(aircraft_file.path().to_path_buf()),
        ..Default::default()
    };
    let simulation_file = NamedTempFile::new().unwrap();
    simulation.save(simulation_file.path()).unwrap();

    let loaded = SimulationConfig::load(simulation_file.path()).unwrap();
    assert_eq!(loaded.aircraft_file.as_deref(), Some(aircraft_file.path()));

    let (aircraft, _) = flyer_core::plugins::build_from_config(&loaded).unwrap();
    assert_eq!(aircraft.0.config().ac_type, AircraftType::F4Phantom);
}
