mod config;
mod modes;

pub use config::{AntiWindup, AutopilotConfig, CourseLawConfig, PidConfig};
pub use modes::{Annunciators, ArmState, LateralMode, VerticalMode};
