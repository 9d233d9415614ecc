use bevy::prelude::*;
use std::f64::consts::PI;

use crate::components::{
    Annunciators, ArmState, AutopilotConfig, ConfigError, FlightData, LateralMode, VerticalMode,
};
use crate::resources::{Deviation, NavReceiver};
use crate::systems::autopilot::course_law::CourseLaw;
use crate::systems::autopilot::pid::Pid;
use crate::utils::constants::GRAVITY;
use crate::utils::math::{first_order_lag, rate_limit, wrap_pi, wrap_two_pi};

/// Attitude commands handed to the control-surface actuator layer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlightDirectorOutput {
    pub commanded_roll: f64,
    pub commanded_pitch: f64,
    pub commanded_turn_rate: f64,
}

/// Quantities read back from the airframe each tick.
#[derive(Debug, Clone, Copy, Default)]
struct Measured {
    roll: f64,
    pitch: f64,
    turn_rate: f64,
    climb_rate: f64,
    true_airspeed: f64,
}

impl From<&FlightData> for Measured {
    fn from(data: &FlightData) -> Self {
        Self {
            roll: data.roll,
            pitch: data.pitch,
            turn_rate: data.turn_rate,
            climb_rate: data.climb_rate,
            true_airspeed: data.true_airspeed,
        }
    }
}

/// Lateral and vertical mode logic of the autopilot with its control laws.
#[derive(Debug, Clone)]
pub struct FlightDirector {
    config: AutopilotConfig,

    heading_pid: Pid,
    turn_rate_pid: Pid,
    nav_law: CourseLaw,
    approach_law: CourseLaw,
    back_course_law: CourseLaw,
    altitude_pid: Pid,
    airspeed_pid: Pid,
    vertical_speed_pid: Pid,
    glideslope_pid: Pid,

    engaged: bool,
    lateral: LateralMode,
    previous_lateral: LateralMode,
    vertical: VerticalMode,
    arm: ArmState,

    target_altitude: f64,
    target_airspeed: f64,
    target_heading: f64,
    target_course: f64,
    target_vertical_speed: f64,

    filtered_vertical_speed: f64,
    previous_glideslope: Option<f64>,
    measured: Measured,
    output: FlightDirectorOutput,
}

impl FlightDirector {
    pub fn new(config: AutopilotConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            heading_pid: Pid::new(config.heading),
            turn_rate_pid: Pid::new(config.turn_rate),
            nav_law: CourseLaw::new("nav", &config.nav),
            approach_law: CourseLaw::new("approach", &config.approach),
            back_course_law: CourseLaw::new("back course", &config.approach),
            altitude_pid: Pid::new(config.altitude),
            airspeed_pid: Pid::new(config.airspeed),
            vertical_speed_pid: Pid::new(config.vertical_speed),
            glideslope_pid: Pid::new(config.glideslope),
            config,
            engaged: false,
            lateral: LateralMode::FlightDirectorOnly,
            previous_lateral: LateralMode::FlightDirectorOnly,
            vertical: VerticalMode::FlightDirectorOnly,
            arm: ArmState::None,
            target_altitude: 0.0,
            target_airspeed: 0.0,
            target_heading: 0.0,
            target_course: 0.0,
            target_vertical_speed: 0.0,
            filtered_vertical_speed: 0.0,
            previous_glideslope: None,
            measured: Measured::default(),
            output: FlightDirectorOutput::default(),
        })
    }

    pub fn config(&self) -> &AutopilotConfig {
        &self.config
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    pub fn lateral_mode(&self) -> LateralMode {
        self.lateral
    }

    pub fn vertical_mode(&self) -> VerticalMode {
        self.vertical
    }

    pub fn arm_state(&self) -> ArmState {
        self.arm
    }

    pub fn output(&self) -> FlightDirectorOutput {
        self.output
    }

    pub fn annunciators(&self) -> Annunciators {
        Annunciators::from_modes(self.engaged, self.lateral, self.vertical, self.arm)
    }

    // Setpoints

    pub fn set_target_altitude(&mut self, altitude: f64) {
        self.target_altitude = altitude;
    }

    pub fn target_altitude(&self) -> f64 {
        self.target_altitude
    }

    pub fn set_target_airspeed(&mut self, airspeed: f64) {
        self.target_airspeed = airspeed;
    }

    pub fn target_airspeed(&self) -> f64 {
        self.target_airspeed
    }

    pub fn set_target_heading(&mut self, heading: f64) {
        self.target_heading = wrap_two_pi(heading);
    }

    pub fn target_heading(&self) -> f64 {
        self.target_heading
    }

    pub fn set_target_course(&mut self, course: f64) {
        self.target_course = wrap_two_pi(course);
    }

    pub fn target_course(&self) -> f64 {
        self.target_course
    }

    pub fn set_target_vertical_speed(&mut self, vertical_speed: f64) {
        self.target_vertical_speed = vertical_speed;
    }

    pub fn target_vertical_speed(&self) -> f64 {
        self.target_vertical_speed
    }

    // Mode buttons

    pub fn on_pressed_hdg(&mut self) {
        self.engage();
        let mode = if self.lateral == LateralMode::Heading {
            LateralMode::FlightDirectorOnly
        } else {
            LateralMode::Heading
        };
        self.set_lateral(mode);
    }

    pub fn on_pressed_nav(&mut self) {
        self.press_radio_mode(LateralMode::Nav);
    }

    pub fn on_pressed_apr(&mut self) {
        self.press_radio_mode(LateralMode::Approach);
    }

    pub fn on_pressed_bc(&mut self) {
        self.press_radio_mode(LateralMode::BackCourse);
    }

    pub fn on_pressed_alt(&mut self) {
        self.toggle_vertical(VerticalMode::Altitude);
    }

    pub fn on_pressed_ias(&mut self) {
        self.toggle_vertical(VerticalMode::Airspeed);
    }

    pub fn on_pressed_vs(&mut self) {
        self.toggle_vertical(VerticalMode::VerticalSpeed);
    }

    pub fn on_pressed_arm(&mut self) {
        self.toggle_vertical(VerticalMode::AltitudeArm);
    }

    pub fn engage(&mut self) {
        if self.engaged {
            return;
        }
        self.engaged = true;
        self.output.commanded_roll = self.measured.roll;
        self.output.commanded_pitch = self.measured.pitch;
        self.output.commanded_turn_rate = self.measured.turn_rate;
        info!("Autopilot engaged");
    }

    /// Drops every mode and starts the next engagement from the measured state.
    pub fn disengage(&mut self) {
        for pid in [
            &mut self.heading_pid,
            &mut self.turn_rate_pid,
            &mut self.altitude_pid,
            &mut self.airspeed_pid,
            &mut self.vertical_speed_pid,
            &mut self.glideslope_pid,
        ] {
            pid.reset();
        }
        self.nav_law.reset();
        self.approach_law.reset();
        self.back_course_law.reset();

        self.output = FlightDirectorOutput::default();
        self.set_lateral(LateralMode::FlightDirectorOnly);
        self.previous_lateral = LateralMode::FlightDirectorOnly;
        self.set_vertical(VerticalMode::FlightDirectorOnly);
        self.arm = ArmState::None;
        self.previous_glideslope = None;

        self.output.commanded_turn_rate = self.measured.turn_rate;
        self.filtered_vertical_speed = self.measured.climb_rate;

        if self.engaged {
            info!("Autopilot disengaged");
        }
        self.engaged = false;
    }

    /// Runs one tick of mode logic and control laws.
    pub fn update(
        &mut self,
        flight_data: &FlightData,
        nav: &NavReceiver,
        dt: f64,
    ) -> FlightDirectorOutput {
        self.measured = Measured::from(flight_data);
        if dt <= 0.0 {
            return self.output;
        }

        if !self.engaged {
            self.track_measured(flight_data);
            return self.output;
        }

        self.update_lateral_capture(nav);
        self.update_vertical_capture(flight_data, nav);

        self.output.commanded_roll = self.lateral_law(flight_data, nav, dt);
        self.output.commanded_pitch = self.vertical_law(flight_data, nav, dt);
        self.sync_inactive_vertical_loops(flight_data);

        self.output
    }

    // Mode transitions

    fn press_radio_mode(&mut self, mode: LateralMode) {
        self.engage();
        if self.lateral == mode && self.arm == ArmState::None {
            self.set_lateral(LateralMode::FlightDirectorOnly);
        } else {
            self.arm = ArmState::for_mode(mode);
            debug!("{:?} armed", mode);
        }
    }

    fn toggle_vertical(&mut self, mode: VerticalMode) {
        if self.vertical == VerticalMode::Glideslope {
            return;
        }
        self.engage();
        let next = if self.vertical == mode {
            VerticalMode::FlightDirectorOnly
        } else {
            mode
        };
        self.set_vertical(next);
    }

    fn set_lateral(&mut self, mode: LateralMode) {
        if self.lateral != mode {
            debug!("Lateral mode {:?} -> {:?}", self.lateral, mode);
            self.lateral = mode;
        }
    }

    fn set_vertical(&mut self, mode: VerticalMode) {
        if self.vertical != mode {
            debug!("Vertical mode {:?} -> {:?}", self.vertical, mode);
            if matches!(mode, VerticalMode::VerticalSpeed | VerticalMode::AltitudeArm) {
                self.filtered_vertical_speed = self.measured.climb_rate;
            }
            self.vertical = mode;
        }
    }

    fn receiver(mode: LateralMode, nav: &NavReceiver) -> Deviation {
        match mode {
            LateralMode::Nav => nav.nav,
            LateralMode::Approach => nav.localizer,
            LateralMode::BackCourse => Deviation::new(nav.localizer.valid, -nav.localizer.deviation),
            LateralMode::FlightDirectorOnly | LateralMode::Heading => Deviation::invalid(),
        }
    }

    fn capture_threshold(&self, mode: LateralMode) -> f64 {
        match mode {
            LateralMode::Nav => self.nav_law.capture_threshold(),
            LateralMode::Approach => self.approach_law.capture_threshold(),
            _ => self.back_course_law.capture_threshold(),
        }
    }

    fn is_radio_mode(mode: LateralMode) -> bool {
        matches!(
            mode,
            LateralMode::Nav | LateralMode::Approach | LateralMode::BackCourse
        )
    }

    fn update_lateral_capture(&mut self, nav: &NavReceiver) {
        // A radio mode without a valid receiver is never flown, armed or not
        let mode = self.lateral;
        if Self::is_radio_mode(mode) && !Self::receiver(mode, nav).valid {
            debug!("{:?} signal lost, re-arming", mode);
            if self.arm == ArmState::None {
                self.arm = ArmState::for_mode(mode);
            }
            let fallback = self.previous_lateral;
            self.set_lateral(fallback);
        }

        if let Some(target) = self.arm.target() {
            let signal = Self::receiver(target, nav);
            if signal.valid && signal.deviation.abs() < self.capture_threshold(target) {
                if !Self::is_radio_mode(self.lateral) {
                    self.previous_lateral = self.lateral;
                }
                debug!("{:?} captured", target);
                self.set_lateral(target);
                self.arm = ArmState::None;
            }
            return;
        }

        let mode = self.lateral;
        if Self::is_radio_mode(mode)
            && Self::receiver(mode, nav).deviation.abs() > self.capture_threshold(mode)
        {
            debug!("{:?} deviation beyond capture, re-arming", mode);
            self.arm = ArmState::for_mode(mode);
        }
    }

    fn update_vertical_capture(&mut self, flight_data: &FlightData, nav: &NavReceiver) {
        if self.vertical == VerticalMode::Glideslope && self.lateral != LateralMode::Approach {
            self.set_vertical(VerticalMode::FlightDirectorOnly);
        }

        let glideslope = nav.glideslope;
        if self.lateral == LateralMode::Approach
            && self.vertical != VerticalMode::Glideslope
            && glideslope.valid
        {
            let crossed = self.previous_glideslope.is_some_and(|previous| {
                previous != 0.0 && previous * glideslope.deviation <= 0.0
            });
            if crossed {
                debug!("Glideslope captured");
                self.set_vertical(VerticalMode::Glideslope);
            }
        }
        self.previous_glideslope = glideslope.valid.then_some(glideslope.deviation);

        if self.vertical == VerticalMode::AltitudeArm
            && (self.target_altitude - flight_data.altitude).abs()
                < self.config.altitude_capture_band
        {
            debug!("Altitude captured");
            self.set_vertical(VerticalMode::Altitude);
        }
    }

    // Control laws

    fn track_measured(&mut self, flight_data: &FlightData) {
        self.sync_turn_loops(flight_data);
        self.output.commanded_roll = flight_data.roll;
        self.output.commanded_pitch = flight_data.pitch;
        self.filtered_vertical_speed = flight_data.climb_rate;
        self.previous_glideslope = None;
        self.sync_inactive_vertical_loops(flight_data);
    }

    /// Holds the heading and turn-rate loops on the measured turn.
    fn sync_turn_loops(&mut self, flight_data: &FlightData) {
        let coordinated = self.coordinated_roll(flight_data.turn_rate);
        self.heading_pid.set_value(flight_data.turn_rate);
        self.turn_rate_pid.set_value(flight_data.roll - coordinated);
        self.output.commanded_turn_rate = flight_data.turn_rate;
    }

    fn coordinated_roll(&self, turn_rate: f64) -> f64 {
        (self.measured.true_airspeed * turn_rate).atan2(GRAVITY)
    }

    fn lateral_law(&mut self, flight_data: &FlightData, nav: &NavReceiver, dt: f64) -> f64 {
        let max_intercept = self.config.max_intercept_angle;
        let dme = nav.dme();

        let commanded_heading = match self.lateral {
            LateralMode::FlightDirectorOnly => {
                self.reset_course_laws(None);
                self.sync_turn_loops(flight_data);
                return flight_data.roll;
            }
            LateralMode::Heading => {
                self.reset_course_laws(None);
                self.target_heading
            }
            LateralMode::Nav => {
                self.reset_course_laws(Some(LateralMode::Nav));
                let deviation = Self::receiver(LateralMode::Nav, nav).deviation;
                self.target_course + self.nav_law.update(deviation, dme, max_intercept, dt)
            }
            LateralMode::Approach => {
                self.reset_course_laws(Some(LateralMode::Approach));
                let deviation = Self::receiver(LateralMode::Approach, nav).deviation;
                self.target_course + self.approach_law.update(deviation, dme, max_intercept, dt)
            }
            LateralMode::BackCourse => {
                self.reset_course_laws(Some(LateralMode::BackCourse));
                let deviation = Self::receiver(LateralMode::BackCourse, nav).deviation;
                self.target_course
                    + PI
                    + self
                        .back_course_law
                        .update(deviation, dme, max_intercept, dt)
            }
        };

        let max_turn_rate = self.config.max_turn_rate;
        let heading_error = wrap_pi(commanded_heading - flight_data.heading);
        let turn_rate = self
            .heading_pid
            .update(heading_error, dt)
            .clamp(-max_turn_rate, max_turn_rate);
        self.output.commanded_turn_rate = turn_rate;

        let trim = self
            .turn_rate_pid
            .update(turn_rate - flight_data.turn_rate, dt);
        let max_roll = self.config.max_roll;
        let roll = (self.coordinated_roll(turn_rate) + trim).clamp(-max_roll, max_roll);

        rate_limit(
            self.output.commanded_roll,
            roll,
            self.config.max_roll_rate * dt,
        )
    }

    fn reset_course_laws(&mut self, active: Option<LateralMode>) {
        if active != Some(LateralMode::Nav) {
            self.nav_law.reset();
        }
        if active != Some(LateralMode::Approach) {
            self.approach_law.reset();
        }
        if active != Some(LateralMode::BackCourse) {
            self.back_course_law.reset();
        }
    }

    fn altitude_arm_climb_rate(&self, flight_data: &FlightData) -> f64 {
        let rate = if self.target_vertical_speed.abs() > 1e-6 {
            self.target_vertical_speed.abs()
        } else {
            self.config.default_vertical_speed
        };
        let error = self.target_altitude - flight_data.altitude;
        if error == 0.0 {
            return 0.0;
        }
        error.signum() * rate
    }

    fn vertical_law(&mut self, flight_data: &FlightData, nav: &NavReceiver, dt: f64) -> f64 {
        let tau = self.config.vertical_speed_time_constant;

        let pitch = match self.vertical {
            VerticalMode::FlightDirectorOnly => {
                self.filtered_vertical_speed = flight_data.climb_rate;
                return flight_data.pitch;
            }
            VerticalMode::Altitude => self
                .altitude_pid
                .update(self.target_altitude - flight_data.altitude, dt),
            VerticalMode::Airspeed => -self
                .airspeed_pid
                .update(self.target_airspeed - flight_data.indicated_airspeed, dt),
            VerticalMode::VerticalSpeed | VerticalMode::AltitudeArm => {
                let target = if self.vertical == VerticalMode::AltitudeArm {
                    self.altitude_arm_climb_rate(flight_data)
                } else {
                    self.target_vertical_speed
                };
                self.filtered_vertical_speed =
                    first_order_lag(self.filtered_vertical_speed, target, dt, tau);
                self.vertical_speed_pid
                    .update(self.filtered_vertical_speed - flight_data.climb_rate, dt)
            }
            VerticalMode::Glideslope => {
                if nav.glideslope.valid {
                    self.glideslope_pid.update(-nav.glideslope.deviation, dt)
                } else {
                    self.output.commanded_pitch
                }
            }
        };

        let max_pitch = self.config.max_pitch;
        rate_limit(
            self.output.commanded_pitch,
            pitch.clamp(-max_pitch, max_pitch),
            self.config.max_pitch_rate * dt,
        )
    }

    /// Seeds every vertical loop that is not flying onto the commanded pitch.
    fn sync_inactive_vertical_loops(&mut self, flight_data: &FlightData) {
        let pitch = self.output.commanded_pitch;
        let live = if self.engaged {
            self.vertical
        } else {
            VerticalMode::FlightDirectorOnly
        };

        if live != VerticalMode::Altitude {
            self.altitude_pid.set_value(pitch);
        }
        if live != VerticalMode::Airspeed {
            self.airspeed_pid.set_value(-pitch);
        }
        if !matches!(live, VerticalMode::VerticalSpeed | VerticalMode::AltitudeArm) {
            self.vertical_speed_pid.set_value(pitch);
            self.filtered_vertical_speed = flight_data.climb_rate;
        }
        if live != VerticalMode::Glideslope {
            self.glideslope_pid.set_value(pitch);
        }
    }
}
