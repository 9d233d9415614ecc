use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::math::{ecef_to_geodetic, geodetic_to_ecef, ned_frame};

/// Ground point and outward surface normal beneath a position, both Earth-centred.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundContact {
    pub point: Vector3<f64>,
    pub normal: Vector3<f64>,
}

impl GroundContact {
    /// Signed height of `position` above the local ground plane.
    pub fn height_above(&self, position: &Vector3<f64>) -> f64 {
        (position - self.point).dot(&self.normal)
    }
}

/// Terrain intersection service consumed by the aircraft integrator.
pub trait Terrain {
    /// Whether the segment from `a` to `b` touches or passes beneath the terrain.
    fn intersects(&self, a: &Vector3<f64>, b: &Vector3<f64>) -> bool;

    /// Ground directly below `position`, or `None` when the ground lies further than
    /// `probe_below` metres down.
    fn ground_below(&self, position: &Vector3<f64>, probe_below: f64) -> Option<GroundContact>;
}

/// Terrain that follows the WGS84 ellipsoid raised by a constant elevation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FlatTerrain {
    /// Ground elevation above the ellipsoid (m)
    pub elevation: f64,
}

impl FlatTerrain {
    pub fn new(elevation: f64) -> Self {
        Self { elevation }
    }

    fn height_of(&self, position: &Vector3<f64>) -> f64 {
        let (_, _, altitude) = ecef_to_geodetic(position);
        altitude - self.elevation
    }
}

impl Terrain for FlatTerrain {
    fn intersects(&self, a: &Vector3<f64>, b: &Vector3<f64>) -> bool {
        self.height_of(a).min(self.height_of(b)) <= 0.0
    }

    fn ground_below(&self, position: &Vector3<f64>, probe_below: f64) -> Option<GroundContact> {
        let (latitude, longitude, altitude) = ecef_to_geodetic(position);
        if altitude - self.elevation > probe_below {
            return None;
        }

        Some(GroundContact {
            point: geodetic_to_ecef(latitude, longitude, self.elevation),
            normal: -(ned_frame(latitude, longitude) * Vector3::z()),
        })
    }
}
