use flyer_core::resources::{Atmosphere, Environment, StandardAtmosphere};
use nalgebra::Vector3;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Standard air whose density turns NaN while `broken` is set.
#[derive(Clone, Default)]
pub struct FaultyAtmosphere {
    pub broken: Arc<AtomicBool>,
}

impl FaultyAtmosphere {
    pub fn break_now(&self) {
        self.broken.store(true, Ordering::Relaxed);
    }
}

impl Environment for FaultyAtmosphere {
    fn sample(&self, altitude: f64) -> Atmosphere {
        let mut atmosphere = StandardAtmosphere::default().sample(altitude);
        if self.broken.load(Ordering::Relaxed) {
            atmosphere.density = f64::NAN;
        }
        atmosphere
    }

    fn wind_ned(&self, _altitude: f64) -> Vector3<f64> {
        Vector3::zeros()
    }
}
