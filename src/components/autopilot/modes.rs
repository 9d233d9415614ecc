use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LateralMode {
    #[default]
    FlightDirectorOnly,
    Heading,
    Nav,
    Approach,
    BackCourse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VerticalMode {
    #[default]
    FlightDirectorOnly,
    Altitude,
    Airspeed,
    VerticalSpeed,
    AltitudeArm,
    Glideslope,
}

/// Pending radio-navigation capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ArmState {
    #[default]
    None,
    NavArm,
    ApproachArm,
    BackCourseArm,
}

impl ArmState {
    /// The lateral mode entered when this arm captures.
    pub fn target(self) -> Option<LateralMode> {
        match self {
            ArmState::None => None,
            ArmState::NavArm => Some(LateralMode::Nav),
            ArmState::ApproachArm => Some(LateralMode::Approach),
            ArmState::BackCourseArm => Some(LateralMode::BackCourse),
        }
    }

    /// The arm that captures into `mode`, if it is a radio mode.
    pub fn for_mode(mode: LateralMode) -> ArmState {
        match mode {
            LateralMode::Nav => ArmState::NavArm,
            LateralMode::Approach => ArmState::ApproachArm,
            LateralMode::BackCourse => ArmState::BackCourseArm,
            LateralMode::FlightDirectorOnly | LateralMode::Heading => ArmState::None,
        }
    }
}

/// Cockpit lamp states, one per mode button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Annunciators {
    pub engaged: bool,
    pub heading: bool,
    pub nav: bool,
    pub nav_armed: bool,
    pub approach: bool,
    pub approach_armed: bool,
    pub back_course: bool,
    pub back_course_armed: bool,
    pub altitude: bool,
    pub altitude_armed: bool,
    pub airspeed: bool,
    pub vertical_speed: bool,
    pub glideslope: bool,
}

impl Annunciators {
    pub fn from_modes(engaged: bool, lateral: LateralMode, vertical: VerticalMode, arm: ArmState) -> Self {
        Self {
            engaged,
            heading: lateral == LateralMode::Heading,
            nav: lateral == LateralMode::Nav,
            nav_armed: arm == ArmState::NavArm,
            approach: lateral == LateralMode::Approach,
            approach_armed: arm == ArmState::ApproachArm,
            back_course: lateral == LateralMode::BackCourse,
            back_course_armed: arm == ArmState::BackCourseArm,
            altitude: vertical == VerticalMode::Altitude,
            altitude_armed: vertical == VerticalMode::AltitudeArm,
            airspeed: vertical == VerticalMode::Airspeed,
            vertical_speed: vertical == VerticalMode::VerticalSpeed,
            glideslope: vertical == VerticalMode::Glideslope,
        }
    }
}
