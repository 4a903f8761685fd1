//! Scene configuration loaded from JSON
//!
//! Every field has a default, so `{}` is a valid config. Validation runs
//! after parsing and rejects bad values instead of clamping them.

use serde::{Deserialize, Serialize};

use crate::core::Vec2;

use super::error::ConfigError;
use super::material::Material;
use super::shape::Shape;

/// Blueprint used when the input layer asks for a new circle or box
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntityTemplate {
    pub shape: Shape,
    pub mass: f32,
    #[serde(default)]
    pub kinematic: bool,
    #[serde(default)]
    pub material: Material,
    #[serde(default = "default_color")]
    pub color: [f32; 3],
}

impl EntityTemplate {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shape.validate()?;
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(ConfigError::NonPositiveMass(self.mass));
        }
        self.material.validate()
    }
}

fn default_color() -> [f32; 3] {
    [0.5, 0.5, 0.5]
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Viewport width in world units (pixels)
    pub width: u32,
    /// Viewport height in world units (pixels)
    pub height: u32,
    pub ticks_per_second: f32,
    /// Gravity acceleration (px/s^2), y points up
    pub gravity: Vec2,
    /// Acceleration applied per unit of directional input
    pub move_force: f32,
    /// Rotation applied per unit of rotation input (degrees)
    pub rotation_step: f32,
    /// Upper bound of ticks one `advance` call may run
    pub max_ticks_per_advance: u32,
    /// Keep entities inside the viewport
    pub clamp_to_bounds: bool,
    pub seed: u32,
    pub circle: EntityTemplate,
    #[serde(rename = "box")]
    pub rect: EntityTemplate,
    pub initial_circles: u32,
    pub initial_boxes: u32,
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        if !self.ticks_per_second.is_finite() || self.ticks_per_second <= 0.0 {
            return Err(ConfigError::InvalidTickRate(self.ticks_per_second));
        }
        if !self.gravity.is_finite() {
            return Err(ConfigError::NonFinite { what: "gravity" });
        }
        if !self.move_force.is_finite() {
            return Err(ConfigError::NonFinite { what: "move_force" });
        }
        if !self.rotation_step.is_finite() {
            return Err(ConfigError::NonFinite { what: "rotation_step" });
        }
        self.circle.validate()?;
        self.rect.validate()
    }

    /// Duration of one fixed tick in seconds.
    pub fn tick_seconds(&self) -> f32 {
        1.0 / self.ticks_per_second
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            ticks_per_second: 60.0,
            gravity: Vec2::new(0.0, -600.0),
            move_force: 600.0,
            rotation_step: 1.0,
            max_ticks_per_advance: 8,
            clamp_to_bounds: false,
            seed: 12345,
            circle: EntityTemplate {
                shape: Shape::Circle { radius: 20.0 },
                mass: 1.0,
                kinematic: false,
                material: Material::default(),
                color: [0.2, 0.45, 0.9],
            },
            rect: EntityTemplate {
                shape: Shape::Box { width: 240.0, length: 40.0 },
                mass: 10.0,
                kinematic: true,
                material: Material::default(),
                color: [0.3, 0.3, 0.3],
            },
            initial_circles: 2,
            initial_boxes: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_config_loads_back_unchanged() {
        let config = SceneConfig {
            width: 1024,
            gravity: Vec2::new(0.0, -300.0),
            clamp_to_bounds: true,
            ..SceneConfig::default()
        };
        let json = config.to_json().unwrap();
        assert!(json.contains(r#""box":"#));
        assert_eq!(SceneConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn empty_json_yields_defaults() {
        let config = SceneConfig::from_json("{}").unwrap();
        assert_eq!(config, SceneConfig::default());
        assert!((config.tick_seconds() - 1.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn partial_json_overrides_fields() {
        let json = r#"{
            "width": 320,
            "gravity": { "x": 0, "y": -10 },
            "circle": { "shape": { "kind": "circle", "radius": 4 }, "mass": 2, "kinematic": true }
        }"#;
        let config = SceneConfig::from_json(json).unwrap();
        assert_eq!(config.width, 320);
        assert_eq!(config.height, 600);
        assert_eq!(config.gravity, Vec2::new(0.0, -10.0));
        assert_eq!(config.circle.mass, 2.0);
        assert!(config.circle.kinematic);
        assert_eq!(config.circle.material, Material::default());
    }

    #[test]
    fn invalid_template_fails_validation() {
        let json = r#"{ "circle": { "shape": { "kind": "circle", "radius": 4 }, "mass": 0 } }"#;
        assert!(matches!(
            SceneConfig::from_json(json),
            Err(ConfigError::NonPositiveMass(_))
        ));

        let json = r#"{ "box": { "shape": { "kind": "box", "width": 4, "length": 4 }, "mass": 1,
                        "material": { "bounciness": 2.0 } } }"#;
        assert!(matches!(
            SceneConfig::from_json(json),
            Err(ConfigError::BouncinessOutOfRange(_))
        ));
    }

    #[test]
    fn bad_tick_rate_and_malformed_json() {
        assert!(matches!(
            SceneConfig::from_json(r#"{ "ticks_per_second": 0 }"#),
            Err(ConfigError::InvalidTickRate(_))
        ));
        assert!(matches!(
            SceneConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
