use nalgebra::{Vector3, Vector6};
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A force and a moment in body axes, the moment taken about the body reference point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceMoment {
    /// Force in Newtons
    pub force: Vector3<f64>,
    /// Moment in Newton-meters
    pub moment: Vector3<f64>,
}

impl Default for ForceMoment {
    fn default() -> Self {
        Self::zero()
    }
}

impl ForceMoment {
    pub fn new(force: Vector3<f64>, moment: Vector3<f64>) -> Self {
        Self { force, moment }
    }

    pub fn zero() -> Self {
        Self::new(Vector3::zeros(), Vector3::zeros())
    }

    /// A pure force acting at `point` (body axes, relative to the reference point).
    pub fn at_point(force: Vector3<f64>, point: &Vector3<f64>) -> Self {
        Self::new(force, point.cross(&force))
    }

    pub fn is_finite(&self) -> bool {
        self.force.iter().chain(self.moment.iter()).all(|v| v.is_finite())
    }

    /// Stacks force over moment, the layout used by the 6x6 mass matrix solve.
    pub fn to_vector6(&self) -> Vector6<f64> {
        Vector6::new(
            self.force.x,
            self.force.y,
            self.force.z,
            self.moment.x,
            self.moment.y,
            self.moment.z,
        )
    }
}

impl Add for ForceMoment {
    type Output = ForceMoment;

    fn add(self, rhs: ForceMoment) -> ForceMoment {
        ForceMoment::new(self.force + rhs.force, self.moment + rhs.moment)
    }
}

impl AddAssign for ForceMoment {
    fn add_assign(&mut self, rhs: ForceMoment) {
        self.force += rhs.force;
        self.moment += rhs.moment;
    }
}

impl Sum for ForceMoment {
    fn sum<I: Iterator<Item = ForceMoment>>(iter: I) -> Self {
        iter.fold(ForceMoment::zero(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_offset_force_produces_moment() {
        // Upward force ahead of the reference point pitches the nose up
        let load = ForceMoment::at_point(Vector3::new(0.0, 0.0, -100.0), &Vector3::new(2.0, 0.0, 0.0));

        assert_relative_eq!(load.moment, Vector3::new(0.0, 200.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_sum_of_loads() {
        let loads = vec![
            ForceMoment::new(Vector3::x(), Vector3::zeros()),
            ForceMoment::new(Vector3::y(), Vector3::z()),
        ];
        let total: ForceMoment = loads.into_iter().sum();

        assert_eq!(total.force, Vector3::new(1.0, 1.0, 0.0));
        assert_eq!(total.to_vector6(), Vector6::new(1.0, 1.0, 0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_non_finite_detection() {
        let load = ForceMoment::new(Vector3::new(f64::NAN, 0.0, 0.0), Vector3::zeros());
        assert!(!load.is_finite());
        assert!(ForceMoment::zero().is_finite());
    }
}
