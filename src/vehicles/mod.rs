pub mod aircraft;

pub use aircraft::{Aircraft, CrashDetector, ForceModels};
