mod landing_gear;

pub use landing_gear::{GearPosition, LandingGearModel};
