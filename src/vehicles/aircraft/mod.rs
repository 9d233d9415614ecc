#[allow(clippy::module_inception)]
mod aircraft;
mod crash;
mod derived;
mod dynamics;

pub use aircraft::Aircraft;
pub use crash::CrashDetector;
pub use dynamics::ForceModels;
