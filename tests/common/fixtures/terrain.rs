use flyer_core::resources::{GroundContact, Terrain};
use nalgebra::Vector3;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Terrain that reports a hit on every segment while `hit` is set and has no ground
/// plane, so only the crash detector sees it.
#[derive(Clone, Default)]
pub struct ForcedHitTerrain {
    pub hit: Arc<AtomicBool>,
    pub queries: Arc<AtomicUsize>,
}

impl ForcedHitTerrain {
    pub fn hitting() -> Self {
        let terrain = Self::default();
        terrain.hit.store(true, Ordering::Relaxed);
        terrain
    }

    pub fn set_hit(&self, hit: bool) {
        self.hit.store(hit, Ordering::Relaxed);
    }

    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::Relaxed)
    }
}

impl Terrain for ForcedHitTerrain {
    fn intersects(&self, _a: &Vector3<f64>, _b: &Vector3<f64>) -> bool {
        self.queries.fetch_add(1, Ordering::Relaxed);
        self.hit.load(Ordering::Relaxed)
    }

    fn ground_below(&self, _position: &Vector3<f64>, _probe_below: f64) -> Option<GroundContact> {
        None
    }
}
