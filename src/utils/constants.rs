pub const GRAVITY: f64 = 9.80665; // m/s^2
pub const AIR_GAS_CONSTANT: f64 = 287.05287; // J/(kg·K)
pub const AIR_HEAT_CAPACITY_RATIO: f64 = 1.4;
pub const ISA_SEA_LEVEL_TEMP: f64 = 288.15; // K
pub const ISA_SEA_LEVEL_PRESSURE: f64 = 101325.0; // Pa
pub const ISA_SEA_LEVEL_DENSITY: f64 = 1.225; // kg/m^3
pub const ISA_LAPSE_RATE: f64 = -0.0065; // K/m
pub const ISA_TROPOPAUSE_ALTITUDE: f64 = 11000.0; // m

// WGS84 ellipsoid
pub const WGS84_A: f64 = 6378137.0; // m
pub const WGS84_F: f64 = 1.0 / 298.257223563;
pub const EARTH_ROTATION_RATE: f64 = 7.292115e-5; // rad/s

/// Below this airspeed the air-relative angles are undefined and reported as zero.
pub const MIN_AIRSPEED_THRESHOLD: f64 = 1e-6;

/// DME ranges at or below this are treated as unavailable.
pub const DME_VALID_THRESHOLD: f64 = 1e-9;

/// How far below the aircraft the terrain is searched for the tick's ground plane (m).
pub const GROUND_PROBE_DISTANCE: f64 = 10000.0;
