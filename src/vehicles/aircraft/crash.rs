use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{Crash, FlightData, LimitsConfig, StateVector};
use crate::resources::Terrain;

/// Latching envelope monitor.
///
/// Collision points are swept one per tick in turn, from where the point was at the
/// previous state to where it is now. The first cause found is kept until [`reset`].
///
/// [`reset`]: CrashDetector::reset
#[derive(Debug, Clone, Default)]
pub struct CrashDetector {
    crash: Crash,
    next_point: usize,
}

impl CrashDetector {
    pub fn crash(&self) -> Crash {
        self.crash
    }

    pub fn reset(&mut self) {
        self.crash = Crash::NoCrash;
        self.next_point = 0;
    }

    /// Runs one detection pass and returns the (possibly latched) result.
    pub fn detect(
        &mut self,
        limits: &LimitsConfig,
        collision_points: &[Vector3<f64>],
        previous: &StateVector,
        current: &StateVector,
        terrain: &dyn Terrain,
        flight_data: &FlightData,
    ) -> Crash {
        if self.crash.is_crashed() {
            return self.crash;
        }

        let crash = self
            .sweep_collision_point(collision_points, previous, current, terrain)
            .or_else(|| Self::check_airspeed(limits, flight_data))
            .or_else(|| Self::check_loads(limits, flight_data));

        if let Some(crash) = crash {
            info!(
                "Crash latched: {:?} at t = {:.2} s, altitude {:.1} m, IAS {:.1} m/s",
                crash, flight_data.time, flight_data.altitude, flight_data.indicated_airspeed
            );
            self.crash = crash;
        }
        self.crash
    }

    fn sweep_collision_point(
        &mut self,
        collision_points: &[Vector3<f64>],
        previous: &StateVector,
        current: &StateVector,
        terrain: &dyn Terrain,
    ) -> Option<Crash> {
        if collision_points.is_empty() {
            return None;
        }

        let index = self.next_point % collision_points.len();
        self.next_point = (index + 1) % collision_points.len();

        let point = &collision_points[index];
        let from = previous.position + previous.attitude * point;
        let to = current.position + current.attitude * point;

        terrain.intersects(&from, &to).then_some(Crash::Collision)
    }

    fn check_airspeed(limits: &LimitsConfig, flight_data: &FlightData) -> Option<Crash> {
        (flight_data.indicated_airspeed > limits.max_airspeed).then_some(Crash::Overspeed)
    }

    fn check_loads(limits: &LimitsConfig, flight_data: &FlightData) -> Option<Crash> {
        let aero = flight_data.aero_load_factor;
        let overstressed = aero < limits.min_load_factor
            || aero > limits.max_load_factor
            || flight_data.gear_load_factor > limits.max_gear_load_factor;

        overstressed.then_some(Crash::Overstress)
    }
}
