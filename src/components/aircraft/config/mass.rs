use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

/// Mass and inertia properties, inertia taken about the centre of gravity in body axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassModel {
    /// Mass with empty tanks (kg)
    pub empty_mass: f64,
    /// Usable fuel capacity (kg)
    pub fuel_capacity: f64,
    /// Fuel on board at initialisation (kg)
    pub initial_fuel: f64,
    pub ixx: f64,
    pub iyy: f64,
    pub izz: f64,
    pub ixz: f64,
    /// Centre of gravity relative to the body reference point (m)
    #[serde(default = "Vector3::zeros")]
    pub cg_offset: Vector3<f64>,
}

impl MassModel {
    /// # Arguments
    /// * `empty_mass` - Mass without fuel (kg).
    /// * `fuel` - Fuel capacity, also loaded at start (kg).
    /// * `ixx`, `iyy`, `izz`, `ixz` - Moments and product of inertia (kg·m²).
    pub fn new(empty_mass: f64, fuel: f64, ixx: f64, iyy: f64, izz: f64, ixz: f64) -> Self {
        Self {
            empty_mass,
            fuel_capacity: fuel,
            initial_fuel: fuel,
            ixx,
            iyy,
            izz,
            ixz,
            cg_offset: Vector3::zeros(),
        }
    }

    pub fn initial_mass(&self) -> f64 {
        self.empty_mass + self.initial_fuel
    }

    /// Inertia tensor about the centre of gravity.
    pub fn inertia(&self) -> Matrix3<f64> {
        Matrix3::from_columns(&[
            Vector3::new(self.ixx, 0.0, -self.ixz),
            Vector3::new(0.0, self.iyy, 0.0),
            Vector3::new(-self.ixz, 0.0, self.izz),
        ])
    }

    pub fn twin_otter() -> Self {
        Self::new(4300.0, 574.8, 28366.4, 32852.8, 52097.3, 1384.3)
    }

    pub fn f4_phantom() -> Self {
        Self::new(13000.0, 4642.0, 33898.0, 165669.0, 189496.0, 2952.0)
    }
}
