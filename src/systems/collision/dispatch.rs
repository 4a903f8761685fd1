use crate::domain::Shape;
use crate::systems::entity::Entity;
use crate::systems::response::{resolve, Resolution};

use super::contact::Contact;
use super::narrow::{box_box, circle_box, circle_circle};

/// Counters gathered during one collision pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionStats {
    /// Narrow-phase tests executed
    pub pair_tests: u32,
    /// Tests that reported overlap and were resolved
    pub contacts: u32,
    /// Contacts that applied a velocity impulse
    pub impulses: u32,
}

impl CollisionStats {
    fn record(&mut self, resolution: &Resolution) {
        self.contacts += 1;
        if resolution.impulse > 0.0 {
            self.impulses += 1;
        }
    }
}

/// Run the shape-pair test selected by both shape variants.
///
/// The returned normal points from `a` to `b`.
pub fn test_pair(a: &Entity, b: &Entity) -> Contact {
    match (a.shape, b.shape) {
        (Shape::Circle { radius: ra }, Shape::Circle { radius: rb }) => {
            circle_circle(a.position, ra, b.position, rb)
        }
        (Shape::Circle { radius }, Shape::Box { .. }) => {
            circle_box(a.position, radius, b.position, b.shape.half_extents())
        }
        (Shape::Box { .. }, Shape::Circle { radius }) => {
            circle_box(b.position, radius, a.position, a.shape.half_extents()).flipped()
        }
        (Shape::Box { .. }, Shape::Box { .. }) => box_box(
            a.position,
            a.shape.half_extents(),
            b.position,
            b.shape.half_extents(),
        ),
    }
}

/// Check entity `index` against every candidate in `entities` and resolve hits.
///
/// Candidates at lower indices are skipped: they already checked this pair
/// from their side, so each unordered pair resolves at most once per pass.
/// Returns the number of contacts resolved.
pub fn check_collisions(entities: &mut [Entity], index: usize, stats: &mut CollisionStats) -> usize {
    if index >= entities.len() || !entities[index].active {
        return 0;
    }

    let mut resolved = 0;
    for other in (index + 1)..entities.len() {
        let (a, b) = pair_mut(entities, index, other);
        if !b.active {
            continue;
        }

        stats.pair_tests += 1;
        let contact = test_pair(a, b);
        if !contact.overlaps {
            continue;
        }

        let resolution = resolve(a, b, &contact);
        stats.record(&resolution);
        resolved += 1;
    }
    resolved
}

/// One full collision pass in list order.
pub fn check_all(entities: &mut [Entity], stats: &mut CollisionStats) -> usize {
    let mut resolved = 0;
    for index in 0..entities.len() {
        resolved += check_collisions(entities, index, stats);
    }
    resolved
}

#[inline]
fn pair_mut(entities: &mut [Entity], i: usize, j: usize) -> (&mut Entity, &mut Entity) {
    debug_assert!(i < j);
    let (head, tail) = entities.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vec2;
    use crate::systems::entity::EntityDesc;
    use proptest::prelude::*;

    fn circle(x: f32, y: f32, r: f32) -> Entity {
        Entity::new(EntityDesc::circle(Vec2::new(x, y), r, 1.0)).unwrap()
    }

    fn rect(x: f32, y: f32, w: f32, l: f32) -> Entity {
        Entity::new(EntityDesc::rect(Vec2::new(x, y), w, l, 1.0)).unwrap()
    }

    #[test]
    fn box_circle_is_mirror_of_circle_box() {
        let c = circle(0.0, 14.0, 5.0);
        let b = rect(0.0, 0.0, 40.0, 20.0);
        let cb = test_pair(&c, &b);
        let bc = test_pair(&b, &c);
        assert!(cb.overlaps && bc.overlaps);
        assert_eq!(cb.normal, Vec2::new(0.0, -1.0));
        assert_eq!(bc.normal, Vec2::new(0.0, 1.0));
        assert_eq!(cb.penetration, bc.penetration);
    }

    #[test]
    fn lower_index_pairs_are_left_to_the_other_side() {
        let mut entities = vec![circle(0.0, 0.0, 5.0), circle(8.0, 0.0, 5.0)];
        let mut stats = CollisionStats::default();

        assert_eq!(check_collisions(&mut entities, 1, &mut stats), 0);
        assert_eq!(stats.pair_tests, 0);

        assert_eq!(check_collisions(&mut entities, 0, &mut stats), 1);
        assert_eq!(stats.pair_tests, 1);
        assert_eq!(stats.contacts, 1);
    }

    #[test]
    fn inactive_entities_are_skipped() {
        let mut entities = vec![circle(0.0, 0.0, 5.0), circle(8.0, 0.0, 5.0)];
        entities[1].active = false;
        let mut stats = CollisionStats::default();
        assert_eq!(check_all(&mut entities, &mut stats), 0);
        assert_eq!(stats.pair_tests, 0);
    }

    #[test]
    fn out_of_range_index_is_a_no_op() {
        let mut entities = vec![circle(0.0, 0.0, 5.0)];
        let mut stats = CollisionStats::default();
        assert_eq!(check_collisions(&mut entities, 3, &mut stats), 0);
    }

    proptest! {
        #[test]
        fn every_unordered_pair_is_tested_once_per_pass(n in 0usize..12) {
            // Everyone overlaps everyone at the origin.
            let mut entities: Vec<Entity> = (0..n).map(|_| circle(0.0, 0.0, 50.0)).collect();
            let mut stats = CollisionStats::default();

            // Visiting indices in reverse must not change the count either.
            for index in (0..n).rev() {
                check_collisions(&mut entities, index, &mut stats);
            }
            let pairs = (n * n.saturating_sub(1) / 2) as u32;
            prop_assert_eq!(stats.pair_tests, pairs);
        }
    }
}
