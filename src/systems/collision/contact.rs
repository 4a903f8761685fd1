use crate::core::Vec2;

/// Result of a narrow-phase test between shapes A and B
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    pub overlaps: bool,
    /// Unit vector pointing from A towards B (zero when not overlapping)
    pub normal: Vec2,
    /// Overlap distance along `normal`
    pub penetration: f32,
}

impl Contact {
    #[inline]
    pub fn none() -> Self {
        Self {
            overlaps: false,
            normal: Vec2::zero(),
            penetration: 0.0,
        }
    }

    #[inline]
    pub fn hit(normal: Vec2, penetration: f32) -> Self {
        debug_assert!(!normal.is_zero());
        Self {
            overlaps: true,
            normal,
            penetration,
        }
    }

    /// Same contact seen from B's side.
    #[inline]
    pub fn flipped(self) -> Self {
        Self {
            normal: -self.normal,
            ..self
        }
    }
}
