pub mod components;
pub mod error;
pub mod integrator;
pub mod traits;

pub use components::{ForceContext, ForceMoment, Kinematics};
pub use error::PhysicsError;
pub use integrator::rk4_step;
pub use traits::ForceMomentModel;
