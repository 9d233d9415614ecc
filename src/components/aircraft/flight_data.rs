use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Latched flight-envelope violation. Ordered by detection priority, first cause wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Crash {
    #[default]
    NoCrash,
    Collision,
    Overspeed,
    Overstress,
}

impl Crash {
    pub fn is_crashed(self) -> bool {
        self != Crash::NoCrash
    }
}

/// Snapshot of every secondary flight quantity, rebuilt wholesale once per tick.
///
/// Angles are radians. Heading and track lie in [0, 2π); roll, pitch and climb angle
/// are left unwrapped. Load-factor vectors are in body axes and read `(0, 0, 1)` in
/// steady level flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightData {
    /// Simulation time (s)
    pub time: f64,
    pub position: Vector3<f64>,
    /// Orientation of the body axes in the local NED frame
    pub attitude: UnitQuaternion<f64>,
    pub latitude: f64,
    pub longitude: f64,
    /// Height above the ellipsoid (m)
    pub altitude: f64,
    /// Height above the ground below (m)
    pub altitude_agl: f64,
    pub roll: f64,
    pub pitch: f64,
    pub heading: f64,
    pub track: f64,
    /// Flight path angle above the horizon
    pub climb_angle: f64,
    pub alpha: f64,
    pub beta: f64,
    /// Equivalent airspeed (m/s)
    pub indicated_airspeed: f64,
    pub true_airspeed: f64,
    /// Horizontal speed over the ground (m/s)
    pub ground_speed: f64,
    pub mach: f64,
    /// Vertical speed, positive up (m/s)
    pub climb_rate: f64,
    /// Rate of change of heading (rad/s)
    pub turn_rate: f64,
    pub angular_velocity: Vector3<f64>,
    pub g_force_cg: Vector3<f64>,
    pub g_force_pilot: Vector3<f64>,
    /// Aerodynamic normal force over weight
    pub aero_load_factor: f64,
    /// Landing-gear reaction over weight
    pub gear_load_factor: f64,
    pub ground_normal: Option<Vector3<f64>>,
    pub ground_point: Option<Vector3<f64>>,
    pub mass: f64,
    pub fuel_mass: f64,
    pub stalled: bool,
    pub on_ground: bool,
    pub crash: Crash,
}

impl Default for FlightData {
    fn default() -> Self {
        Self {
            time: 0.0,
            position: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
            latitude: 0.0,
            longitude: 0.0,
            altitude: 0.0,
            altitude_agl: 0.0,
            roll: 0.0,
            pitch: 0.0,
            heading: 0.0,
            track: 0.0,
            climb_angle: 0.0,
            alpha: 0.0,
            beta: 0.0,
            indicated_airspeed: 0.0,
            true_airspeed: 0.0,
            ground_speed: 0.0,
            mach: 0.0,
            climb_rate: 0.0,
            turn_rate: 0.0,
            angular_velocity: Vector3::zeros(),
            g_force_cg: Vector3::new(0.0, 0.0, 1.0),
            g_force_pilot: Vector3::new(0.0, 0.0, 1.0),
            aero_load_factor: 0.0,
            gear_load_factor: 0.0,
            ground_normal: None,
            ground_point: None,
            mass: 0.0,
            fuel_mass: 0.0,
            stalled: false,
            on_ground: false,
            crash: Crash::NoCrash,
        }
    }
}
