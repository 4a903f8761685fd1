//! Per-tick lifecycle: pre-update hook, integration, deactivation, post-update hook
//!
//! Order is fixed and matters: forces are consumed exactly once per tick and
//! the deactivation snap sees the freshly integrated velocity.

use crate::core::Vec2;
use crate::domain::Shape;

use super::body::Entity;

/// Axis-aligned scene rectangle used by the bounds-clamping hook
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Viewport-sized bounds anchored at the origin.
    pub fn viewport(width: u32, height: u32) -> Self {
        Self {
            min: Vec2::zero(),
            max: Vec2::new(width as f32, height as f32),
        }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

impl Entity {
    /// Advance one fixed tick of `dt` seconds.
    pub fn update(&mut self, dt: f32, bounds: Option<&Bounds>) {
        if !self.active {
            self.force = Vec2::zero();
            return;
        }

        self.pre_update();
        self.integrate(dt);
        self.deactivate_if_slow();
        self.force = Vec2::zero();
        self.post_update(bounds);
    }

    /// Semi-implicit Euler. Kinematic entities skip the force term but still coast.
    fn integrate(&mut self, dt: f32) {
        if !self.kinematic {
            let accel = self.force / self.mass;
            self.velocity += accel * dt;
        }
        self.position += self.velocity * dt;
    }

    fn deactivate_if_slow(&mut self) {
        if self.velocity.length() < self.material.deactivation_threshold {
            self.velocity = Vec2::zero();
        }
    }

    fn pre_update(&mut self) {
        if let Shape::Box { .. } = self.shape {
            self.rotation = self.rotation.rem_euclid(360.0);
        }
    }

    fn post_update(&mut self, bounds: Option<&Bounds>) {
        let Some(bounds) = bounds else {
            return;
        };

        let half = self.shape.half_extents();
        let lo = bounds.min + half;
        let hi = bounds.max - half;

        // Shapes larger than the bounds are centered on that axis.
        let clamp_axis = |p: f32, v: &mut f32, lo: f32, hi: f32| -> f32 {
            if lo > hi {
                *v = 0.0;
                return (lo + hi) * 0.5;
            }
            if p < lo {
                if *v < 0.0 {
                    *v = 0.0;
                }
                lo
            } else if p > hi {
                if *v > 0.0 {
                    *v = 0.0;
                }
                hi
            } else {
                p
            }
        };

        self.position.x = clamp_axis(self.position.x, &mut self.velocity.x, lo.x, hi.x);
        self.position.y = clamp_axis(self.position.y, &mut self.velocity.y, lo.y, hi.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::entity::EntityDesc;

    const DT: f32 = 1.0 / 60.0;

    fn circle() -> Entity {
        Entity::new(EntityDesc::circle(Vec2::new(100.0, 100.0), 10.0, 2.0)).unwrap()
    }

    #[test]
    fn semi_implicit_euler_uses_updated_velocity() {
        let mut e = circle();
        e.apply_force(Vec2::new(0.0, -120.0)); // a = -60
        e.update(DT, None);
        assert!((e.velocity.y - (-1.0)).abs() < 1e-5);
        assert!((e.position.y - (100.0 - DT)).abs() < 1e-4);
        assert_eq!(e.force, Vec2::zero());
    }

    #[test]
    fn slow_entity_snaps_to_rest() {
        let mut e = circle();
        e.velocity = Vec2::new(0.01, 0.0);
        e.update(DT, None);
        assert_eq!(e.velocity, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn kinematic_coasts_but_ignores_force() {
        let mut e = Entity::new(
            EntityDesc::circle(Vec2::zero(), 1.0, 1.0)
                .kinematic(true)
                .velocity(Vec2::new(60.0, 0.0)),
        )
        .unwrap();
        e.force = Vec2::new(0.0, -1000.0);
        e.update(DT, None);
        assert_eq!(e.velocity, Vec2::new(60.0, 0.0));
        assert!((e.position.x - 1.0).abs() < 1e-5);
        assert_eq!(e.force, Vec2::zero());
    }

    #[test]
    fn box_rotation_wraps_into_degree_range() {
        let mut e = Entity::new(EntityDesc::rect(Vec2::zero(), 2.0, 2.0, 1.0)).unwrap();
        e.rotation = -30.0;
        e.update(DT, None);
        assert!((e.rotation - 330.0).abs() < 1e-4);
        e.rotation = 725.0;
        e.update(DT, None);
        assert!((e.rotation - 5.0).abs() < 1e-4);
    }

    #[test]
    fn bounds_hook_keeps_shape_inside() {
        let bounds = Bounds::viewport(200, 200);
        let mut e = circle();
        e.position = Vec2::new(5.0, 100.0);
        e.velocity = Vec2::new(-30.0, 0.0);
        e.update(DT, Some(&bounds));
        assert_eq!(e.position.x, 10.0);
        assert_eq!(e.velocity.x, 0.0);
    }

    #[test]
    fn offset_bounds_clamp_both_sides() {
        let bounds = Bounds::new(Vec2::new(-50.0, 20.0), Vec2::new(50.0, 80.0));
        assert!(bounds.contains(Vec2::new(0.0, 50.0)));
        assert!(!bounds.contains(Vec2::new(0.0, 10.0)));

        let mut e = circle();
        e.position = Vec2::new(-60.0, 95.0);
        e.velocity = Vec2::new(-5.0, 5.0);
        e.update(DT, Some(&bounds));
        assert_eq!(e.position, Vec2::new(-40.0, 70.0));
        assert_eq!(e.velocity, Vec2::zero());
    }

    #[test]
    fn inactive_entity_does_not_move() {
        let mut e = circle();
        e.active = false;
        e.velocity = Vec2::new(100.0, 0.0);
        e.apply_force(Vec2::new(5.0, 5.0));
        e.update(DT, None);
        assert_eq!(e.position, Vec2::new(100.0, 100.0));
        assert_eq!(e.force, Vec2::zero());
    }
}
