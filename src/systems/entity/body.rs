use crate::core::Vec2;
use crate::domain::{ConfigError, Material, Shape, ShapeTag};

/// Everything needed to construct an entity
#[derive(Clone, Copy, Debug)]
pub struct EntityDesc {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Rotation in degrees
    pub rotation: f32,
    pub mass: f32,
    pub kinematic: bool,
    pub material: Material,
    pub shape: Shape,
    pub color: [f32; 3],
}

impl EntityDesc {
    pub fn circle(position: Vec2, radius: f32, mass: f32) -> Self {
        Self::with_shape(position, Shape::Circle { radius }, mass)
    }

    pub fn rect(position: Vec2, width: f32, length: f32, mass: f32) -> Self {
        Self::with_shape(position, Shape::Box { width, length }, mass)
    }

    pub fn with_shape(position: Vec2, shape: Shape, mass: f32) -> Self {
        Self {
            position,
            velocity: Vec2::zero(),
            rotation: 0.0,
            mass,
            kinematic: false,
            material: Material::default(),
            shape,
            color: [1.0, 1.0, 1.0],
        }
    }

    pub fn kinematic(mut self, kinematic: bool) -> Self {
        self.kinematic = kinematic;
        self
    }

    pub fn velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn color(mut self, color: [f32; 3]) -> Self {
        self.color = color;
        self
    }
}

/// A simulated circle or box
#[derive(Clone, Debug)]
pub struct Entity {
    /// Scene-assigned ID (0 until spawned into a scene)
    pub id: u32,

    // === Kinematic state ===
    /// Center of mass (world units)
    pub position: Vec2,
    pub velocity: Vec2,
    /// Accumulated force, cleared after every integration
    pub force: Vec2,
    /// Orientation in degrees (visual only, collision ignores it)
    pub rotation: f32,
    pub mass: f32,
    /// Immune to forces and impulses, still collides and coasts on its velocity
    pub kinematic: bool,
    /// Inactive entities are skipped by integration and collision
    pub active: bool,

    // === Geometry & surface ===
    pub shape: Shape,
    pub material: Material,

    /// Render-only tint, never read by physics
    pub color: [f32; 3],
}

impl Entity {
    pub fn new(desc: EntityDesc) -> Result<Self, ConfigError> {
        if !desc.mass.is_finite() || desc.mass <= 0.0 {
            return Err(ConfigError::NonPositiveMass(desc.mass));
        }
        desc.shape.validate()?;
        desc.material.validate()?;
        if !desc.position.is_finite() {
            return Err(ConfigError::NonFinite { what: "position" });
        }
        if !desc.velocity.is_finite() {
            return Err(ConfigError::NonFinite { what: "velocity" });
        }
        if !desc.rotation.is_finite() {
            return Err(ConfigError::NonFinite { what: "rotation" });
        }

        Ok(Self {
            id: 0,
            position: desc.position,
            velocity: desc.velocity,
            force: Vec2::zero(),
            rotation: desc.rotation,
            mass: desc.mass,
            kinematic: desc.kinematic,
            active: true,
            shape: desc.shape,
            material: desc.material,
            color: desc.color,
        })
    }

    #[inline]
    pub fn shape_tag(&self) -> ShapeTag {
        self.shape.tag()
    }

    /// Zero for kinematic (infinite mass) and inactive entities.
    #[inline]
    pub fn inverse_mass(&self) -> f32 {
        if self.kinematic || !self.active {
            0.0
        } else {
            1.0 / self.mass
        }
    }

    /// Accumulate a force for the current tick. Ignored by kinematic entities.
    pub fn apply_force(&mut self, force: Vec2) {
        if !self.kinematic {
            self.force += force;
        }
    }

    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    /// World-space (min, max) corners of the axis-aligned bounds.
    pub fn aabb(&self) -> (Vec2, Vec2) {
        let h = self.shape.half_extents();
        (self.position - h, self.position + h)
    }
}
