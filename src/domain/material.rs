use serde::{Deserialize, Serialize};

use super::error::ConfigError;

pub const DEFAULT_BOUNCINESS: f32 = 0.85;
pub const DEFAULT_FRICTION: f32 = 0.05;
pub const DEFAULT_DEACTIVATION: f32 = 0.05;

/// Surface response coefficients of an entity
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Restitution (0.0 = no bounce, 1.0 = fully elastic)
    pub bounciness: f32,
    /// Fraction of tangential velocity removed on contact, in [0, 1]
    pub friction: f32,
    /// Speed below which velocity snaps to rest
    pub deactivation_threshold: f32,
}

impl Material {
    pub fn new(bounciness: f32, friction: f32, deactivation_threshold: f32) -> Result<Self, ConfigError> {
        let m = Self {
            bounciness,
            friction,
            deactivation_threshold,
        };
        m.validate()?;
        Ok(m)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.bounciness) {
            return Err(ConfigError::BouncinessOutOfRange(self.bounciness));
        }
        if !(0.0..=1.0).contains(&self.friction) {
            return Err(ConfigError::FrictionOutOfRange(self.friction));
        }
        if !self.deactivation_threshold.is_finite() || self.deactivation_threshold < 0.0 {
            return Err(ConfigError::NegativeDeactivation(self.deactivation_threshold));
        }
        Ok(())
    }

    /// Combined restitution of a contact pair (average policy).
    #[inline]
    pub fn combined_bounciness(&self, other: &Material) -> f32 {
        (self.bounciness + other.bounciness) * 0.5
    }

    /// Combined tangential damping of a contact pair (weaker surface wins).
    #[inline]
    pub fn combined_friction(&self, other: &Material) -> f32 {
        self.friction.min(other.friction)
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            bounciness: DEFAULT_BOUNCINESS,
            friction: DEFAULT_FRICTION,
            deactivation_threshold: DEFAULT_DEACTIVATION,
        }
    }
}
