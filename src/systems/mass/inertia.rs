use nalgebra::{Matrix3, Matrix6, Vector3, Vector6};

use crate::components::MassModel;
use crate::physics::{ForceContext, ForceMoment, ForceMomentModel};
use crate::utils::math::skew;

/// Mass, centre of gravity and inertia of the airframe plus the fuel on board.
///
/// Contributes the weight as its force and supplies the generalised mass matrix for
/// the acceleration solve.
#[derive(Debug, Clone)]
pub struct InertiaModel {
    config: MassModel,
    fuel: f64,
}

impl InertiaModel {
    pub fn new(config: MassModel) -> Self {
        let fuel = config.initial_fuel.clamp(0.0, config.fuel_capacity);
        Self { config, fuel }
    }

    pub fn mass(&self) -> f64 {
        self.config.empty_mass + self.fuel
    }

    pub fn fuel(&self) -> f64 {
        self.fuel
    }

    pub fn cg(&self) -> Vector3<f64> {
        self.config.cg_offset
    }

    /// Draws `amount` kilograms from the tanks; returns whether any fuel remains.
    pub fn burn_fuel(&mut self, amount: f64) -> bool {
        self.fuel = (self.fuel - amount.max(0.0)).max(0.0);
        self.fuel > 0.0
    }

    /// Inertia tensor about the body reference point, the CG tensor shifted by the
    /// parallel-axis theorem. Fuel scales the airframe tensor with the mass ratio.
    pub fn inertia_about_reference(&self) -> Matrix3<f64> {
        let scale = self.mass() / self.config.initial_mass().max(f64::EPSILON);
        let c = self.cg();
        let shift = (Matrix3::identity() * c.dot(&c) - c * c.transpose()) * self.mass();
        self.config.inertia() * scale + shift
    }

    /// The 6x6 matrix relating body accelerations `[v̇, ω̇]` to force and moment.
    pub fn mass_matrix(&self) -> Matrix6<f64> {
        let m = self.mass();
        let m_skew_c = skew(&self.cg()) * m;

        let mut matrix = Matrix6::zeros();
        matrix
            .fixed_slice_mut::<3, 3>(0, 0)
            .copy_from(&(Matrix3::identity() * m));
        matrix.fixed_slice_mut::<3, 3>(0, 3).copy_from(&(-m_skew_c));
        matrix.fixed_slice_mut::<3, 3>(3, 0).copy_from(&m_skew_c);
        matrix
            .fixed_slice_mut::<3, 3>(3, 3)
            .copy_from(&self.inertia_about_reference());
        matrix
    }

    /// Velocity-dependent terms moved to the right-hand side of the equations of motion.
    pub fn bias_terms(&self, velocity: &Vector3<f64>, angular_velocity: &Vector3<f64>) -> Vector6<f64> {
        let m = self.mass();
        let c = self.cg();
        let w = angular_velocity;
        let inertia = self.inertia_about_reference();

        let linear = w.cross(velocity) * m + w.cross(&w.cross(&c)) * m;
        let angular = w.cross(&(inertia * w)) + c.cross(&w.cross(velocity)) * m;

        Vector6::new(linear.x, linear.y, linear.z, angular.x, angular.y, angular.z)
    }
}

impl ForceMomentModel for InertiaModel {
    fn name(&self) -> &str {
        "mass"
    }

    fn initialize(&mut self, _engine_running: bool, _context: &ForceContext) {
        self.fuel = self.config.initial_fuel.clamp(0.0, self.config.fuel_capacity);
    }

    fn update(&mut self, _context: &ForceContext, _dt: f64) {}

    /// Weight acting at the centre of gravity.
    fn compute_force_and_moment(&self, context: &ForceContext) -> ForceMoment {
        ForceMoment::at_point(context.kinematics.gravity_body * self.mass(), &self.cg())
    }
}
