mod context;
mod forces;

pub use context::{ForceContext, Kinematics};
pub use forces::ForceMoment;

#[cfg(test)]
pub(crate) use context::test_context;
