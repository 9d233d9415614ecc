use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{LandingGearConfig, StrutConfig};
use crate::physics::{ForceContext, ForceMoment, ForceMomentModel};
use crate::resources::GroundContact;

/// Position of the gear legs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GearPosition {
    Up,
    Down,
    Extending(f64),
    Retracting(f64),
}

impl GearPosition {
    /// Extension fraction, 0 stowed and 1 locked down.
    pub fn extension(self) -> f64 {
        match self {
            GearPosition::Up => 0.0,
            GearPosition::Down => 1.0,
            GearPosition::Extending(f) | GearPosition::Retracting(f) => f,
        }
    }

    fn toward(self, down: bool, step: f64) -> Self {
        match (self, down) {
            (GearPosition::Down, true) | (GearPosition::Up, false) => self,
            (_, true) => {
                let f = self.extension() + step;
                if f >= 1.0 {
                    GearPosition::Down
                } else {
                    GearPosition::Extending(f)
                }
            }
            (_, false) => {
                let f = self.extension() - step;
                if f <= 0.0 {
                    GearPosition::Up
                } else {
                    GearPosition::Retracting(f)
                }
            }
        }
    }
}

/// Spring-damper load of one strut pressed into the ground, Earth-centred.
fn strut_force(
    strut: &StrutConfig,
    ground: &GroundContact,
    context: &ForceContext,
    fade_speed: f64,
) -> Option<Vector3<f64>> {
    let kinematics = &context.kinematics;
    let contact = kinematics.point_position(&strut.position);
    let compression = -ground.height_above(&contact);
    if compression <= 0.0 {
        return None;
    }

    let normal = ground.normal;
    let velocity = kinematics.attitude * kinematics.point_velocity(&strut.position);
    let normal_speed = velocity.dot(&normal);

    let reaction = (strut.stiffness * compression - strut.damping * normal_speed).max(0.0);
    if reaction == 0.0 {
        return Some(Vector3::zeros());
    }

    let along_ground = |v: Vector3<f64>| v - normal * v.dot(&normal);
    let slip = along_ground(velocity);
    let heading = along_ground(kinematics.attitude * Vector3::x());
    let heading = if heading.norm() > 1e-9 {
        heading.normalize()
    } else {
        Vector3::zeros()
    };

    // Friction ramps in linearly below the fade speed
    let rolling = heading * slip.dot(&heading);
    let lateral = slip - rolling;
    let brake = context.controls.clamped().brake;
    let mu_rolling = strut.rolling_friction + brake * strut.brake_friction;

    let fade = |v: &Vector3<f64>| v / v.norm().max(fade_speed);
    let friction =
        -(fade(&rolling) * mu_rolling + fade(&lateral) * strut.side_friction) * reaction;

    Some(normal * reaction + friction)
}

/// Landing gear struts against the ground plane cached for the tick.
#[derive(Debug, Clone)]
pub struct LandingGearModel {
    config: LandingGearConfig,
    position: GearPosition,
}

impl LandingGearModel {
    pub fn new(config: LandingGearConfig) -> Self {
        Self {
            config,
            position: GearPosition::Down,
        }
    }

    pub fn position(&self) -> GearPosition {
        self.position
    }

    /// Struts carry load only when locked down.
    fn is_locked_down(&self) -> bool {
        self.position == GearPosition::Down
    }

    /// Whether any strut touches the ground in `context`.
    pub fn on_ground(&self, context: &ForceContext) -> bool {
        let Some(ground) = context.ground.as_ref() else {
            return false;
        };
        self.is_locked_down()
            && self.config.struts.iter().any(|strut| {
                ground.height_above(&context.kinematics.point_position(&strut.position)) <= 0.0
            })
    }

    /// Sum of the strut reaction magnitudes (N).
    pub fn gear_load(&self, context: &ForceContext) -> f64 {
        self.strut_forces(context).map(|(_, force)| force.norm()).sum()
    }

    fn strut_forces<'a>(
        &'a self,
        context: &'a ForceContext,
    ) -> impl Iterator<Item = (&'a StrutConfig, Vector3<f64>)> + 'a {
        let ground = context.ground.filter(|_| self.is_locked_down());
        let fade_speed = self.config.friction_fade_speed;
        self.config.struts.iter().filter_map(move |strut| {
            let ground = ground.as_ref()?;
            strut_force(strut, ground, context, fade_speed).map(|force| (strut, force))
        })
    }
}

impl ForceMomentModel for LandingGearModel {
    fn name(&self) -> &str {
        "landing gear"
    }

    fn initialize(&mut self, _engine_running: bool, context: &ForceContext) {
        self.position = if !self.config.retractable || context.controls.gear_down {
            GearPosition::Down
        } else {
            GearPosition::Up
        };
    }

    fn update(&mut self, context: &ForceContext, dt: f64) {
        if !self.config.retractable {
            return;
        }

        let step = if self.config.extension_time > 0.0 {
            dt / self.config.extension_time
        } else {
            1.0
        };
        let next = self.position.toward(context.controls.gear_down, step);
        if next != self.position && matches!(next, GearPosition::Up | GearPosition::Down) {
            debug!("Landing gear {:?}", next);
        }
        self.position = next;
    }

    fn compute_force_and_moment(&self, context: &ForceContext) -> ForceMoment {
        let inverse = context.kinematics.attitude.inverse();
        self.strut_forces(context)
            .map(|(strut, force)| ForceMoment::at_point(inverse * force, &strut.position))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::components::test_context;
    use crate::physics::Kinematics;
    use crate::resources::{FlatTerrain, Terrain};
    use crate::utils::math::{geodetic_to_ecef, ned_frame};
    use approx::assert_relative_eq;

    /// Twin Otter resting `sink` metres into flat ground at sea level.
    fn on_runway(sink: f64, velocity: Vector3<f64>) -> ForceContext {
        let (lat, lon) = (0.9, 0.0);
        let strut_depth = 1.9;
        let kinematics = Kinematics::new(
            geodetic_to_ecef(lat, lon, strut_depth - sink),
            ned_frame(lat, lon),
            velocity,
            Vector3::zeros(),
        );

        let mut context = test_context();
        context.kinematics = kinematics;
        context.ground = FlatTerrain::new(0.0).ground_below(&kinematics.position, 10.0);
        context
    }

    #[test]
    fn test_compressed_struts_push_up() {
        let gear = LandingGearModel::new(LandingGearConfig::twin_otter());
        let context = on_runway(0.05, Vector3::zeros());

        let loads = gear.compute_force_and_moment(&context);
        assert!(gear.on_ground(&context));
        assert!(loads.force.z < 0.0, "reaction should act along body -z");
        assert_relative_eq!(loads.force.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(gear.gear_load(&context), -loads.force.z, epsilon = 1e-3);
    }

    #[test]
    fn test_airborne_gear_is_unloaded() {
        let gear = LandingGearModel::new(LandingGearConfig::twin_otter());
        let context = on_runway(-0.5, Vector3::zeros());

        assert!(!gear.on_ground(&context));
        assert_eq!(gear.compute_force_and_moment(&context), ForceMoment::zero());
    }

    #[test]
    fn test_rolling_friction_opposes_motion() {
        let gear = LandingGearModel::new(LandingGearConfig::twin_otter());
        let mut braking = on_runway(0.05, Vector3::new(20.0, 0.0, 0.0));
        let rolling = gear.compute_force_and_moment(&braking);
        braking.controls.brake = 1.0;
        let braked = gear.compute_force_and_moment(&braking);

        assert!(rolling.force.x < 0.0);
        assert!(braked.force.x < rolling.force.x);
    }

    #[test]
    fn test_retraction_takes_extension_time() {
        let config = LandingGearConfig::f4_phantom();
        let extension_time = config.extension_time;
        let mut gear = LandingGearModel::new(config);
        let mut context = on_runway(0.05, Vector3::zeros());
        gear.initialize(true, &context);
        assert_eq!(gear.position(), GearPosition::Down);

        context.controls.gear_down = false;
        gear.update(&context, extension_time / 2.0);
        assert!(matches!(gear.position(), GearPosition::Retracting(_)));
        assert_eq!(gear.compute_force_and_moment(&context), ForceMoment::zero());

        gear.update(&context, extension_time);
        assert_eq!(gear.position(), GearPosition::Up);
    }

    #[test]
    fn test_fixed_gear_stays_down() {
        let mut gear = LandingGearModel::new(LandingGearConfig::twin_otter());
        let mut context = on_runway(0.05, Vector3::zeros());
        context.controls.gear_down = false;
        gear.initialize(true, &context);
        gear.update(&context, 100.0);

        assert_eq!(gear.position(), GearPosition::Down);
    }
}
