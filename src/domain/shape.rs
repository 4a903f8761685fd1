use serde::{Deserialize, Serialize};

use crate::core::Vec2;

use super::error::ConfigError;

/// Discriminant used to pick the pair test in collision dispatch
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeTag {
    Circle,
    Box,
}

impl ShapeTag {
    /// Numeric code used in packed render buffers.
    pub fn code(self) -> u8 {
        match self {
            ShapeTag::Circle => 0,
            ShapeTag::Box => 1,
        }
    }
}

/// Per-variant geometry. Boxes are axis-aligned for collision purposes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Circle { radius: f32 },
    Box { width: f32, length: f32 },
}

impl Shape {
    pub fn circle(radius: f32) -> Result<Self, ConfigError> {
        let s = Shape::Circle { radius };
        s.validate()?;
        Ok(s)
    }

    pub fn rect(width: f32, length: f32) -> Result<Self, ConfigError> {
        let s = Shape::Box { width, length };
        s.validate()?;
        Ok(s)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Shape::Circle { radius } => positive("radius", radius),
            Shape::Box { width, length } => {
                positive("width", width)?;
                positive("length", length)
            }
        }
    }

    pub fn tag(&self) -> ShapeTag {
        match self {
            Shape::Circle { .. } => ShapeTag::Circle,
            Shape::Box { .. } => ShapeTag::Box,
        }
    }

    /// Half size of the shape's axis-aligned bounds.
    pub fn half_extents(&self) -> Vec2 {
        match *self {
            Shape::Circle { radius } => Vec2::new(radius, radius),
            Shape::Box { width, length } => Vec2::new(width * 0.5, length * 0.5),
        }
    }

    /// Full (width, height) of the axis-aligned bounds.
    pub fn size(&self) -> (f32, f32) {
        let h = self.half_extents();
        (h.x * 2.0, h.y * 2.0)
    }
}

fn positive(what: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositiveDimension { what, value })
    }
}
