use serde::{Deserialize, Serialize};

/// Reference dimensions used to dimensionalise the aerodynamic coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftGeometry {
    /// Wing reference area (m²)
    pub wing_area: f64,
    /// Wing span (m)
    pub wing_span: f64,
    /// Mean aerodynamic chord (m)
    pub mac: f64,
}

impl AircraftGeometry {
    pub fn new(wing_area: f64, wing_span: f64, mac: f64) -> Self {
        AircraftGeometry {
            wing_area,
            wing_span,
            mac,
        }
    }

    pub fn twin_otter() -> Self {
        Self::new(39.0, 19.8, 1.98)
    }

    pub fn f4_phantom() -> Self {
        Self::new(49.239, 11.787, 4.889)
    }
}
