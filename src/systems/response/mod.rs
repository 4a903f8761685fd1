//! Collision response - separation, restitution impulse and contact friction
//!
//! Pairs are resolved one at a time in scene order (no global solver), so
//! stacks of simultaneous contacts settle over several ticks.
//! Kinematic entities behave as infinite mass: they are never pushed and
//! their velocity is never written.
//!
//! Resting contact is not special-cased. A body lying on a kinematic floor is
//! pulled back in by gravity every tick and bounced out again, so it settles
//! at the surface with a steady upward velocity of `e * g * dt / (1 + e)`
//! instead of zero. Only `e = 0` lets the rest snap bring it to a stop.

use crate::core::Vec2;
use crate::systems::collision::Contact;
use crate::systems::entity::Entity;

/// What resolving one contact did
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Resolution {
    /// Magnitude of the normal impulse (0 when the pair was already separating)
    pub impulse: f32,
    /// Whether positions were corrected
    pub corrected: bool,
}

/// Resolve contact `contact` (normal from `a` to `b`).
pub fn resolve(a: &mut Entity, b: &mut Entity, contact: &Contact) -> Resolution {
    if !contact.overlaps {
        return Resolution::default();
    }

    let inv_a = a.inverse_mass();
    let inv_b = b.inverse_mass();
    let inv_sum = inv_a + inv_b;
    if inv_sum <= 0.0 {
        return Resolution::default();
    }

    let n = contact.normal;

    // 1. Positional correction: remove the full depth, split by inverse mass.
    let correction = n * (contact.penetration / inv_sum);
    a.position -= correction * inv_a;
    b.position += correction * inv_b;

    // 2. Restitution impulse, only for approaching pairs.
    let relative = b.velocity - a.velocity;
    let approach = relative.dot(n);
    let mut impulse = 0.0;
    if approach < 0.0 {
        let e = a.material.combined_bounciness(&b.material);
        impulse = -(1.0 + e) * approach / inv_sum;
        let j = n * impulse;
        a.velocity -= j * inv_a;
        b.velocity += j * inv_b;
    }

    // 3. Tangential friction damping.
    let mu = a.material.combined_friction(&b.material);
    if mu > 0.0 {
        apply_friction(a, n, mu);
        apply_friction(b, n, mu);
    }

    Resolution {
        impulse,
        corrected: true,
    }
}

fn apply_friction(entity: &mut Entity, normal: Vec2, mu: f32) {
    if entity.inverse_mass() == 0.0 {
        return;
    }
    let v = entity.velocity;
    let tangent = v - normal * v.dot(normal);
    entity.velocity -= tangent * mu;
}
