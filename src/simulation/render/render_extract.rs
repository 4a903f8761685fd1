//! Render boundary
//!
//! The physics core never issues graphics calls. It hands each entity to a
//! `RenderSink`, or packs them into a flat instance buffer the JS side
//! uploads as-is.

use crate::core::Vec2;
use crate::domain::ShapeTag;
use crate::systems::entity::Entity;

use super::SceneCore;

/// Floats per entity in the instance buffer:
/// `[x, y, rotation_rad, r, g, b, shape_code, width, height]`
pub const INSTANCE_STRIDE: usize = 9;

/// Everything a renderer needs to draw one entity
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawItem {
    pub id: u32,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Degrees
    pub rotation: f32,
    pub color: [f32; 3],
    pub tag: ShapeTag,
    pub width: f32,
    pub height: f32,
    /// Fraction of a tick elapsed since this state was simulated
    pub alpha: f32,
}

impl DrawItem {
    fn from_entity(entity: &Entity, alpha: f32) -> Self {
        let (width, height) = entity.shape.size();
        Self {
            id: entity.id,
            position: entity.position,
            velocity: entity.velocity,
            rotation: entity.rotation,
            color: entity.color,
            tag: entity.shape_tag(),
            width,
            height,
            alpha,
        }
    }

    /// Position extrapolated by `alpha` ticks of `tick_seconds` each.
    pub fn predicted_position(&self, tick_seconds: f32) -> Vec2 {
        self.position + self.velocity * (self.alpha * tick_seconds)
    }
}

/// Receiver of per-entity draw requests (implemented by the graphics layer)
pub trait RenderSink {
    fn draw(&mut self, item: &DrawItem);
}

impl RenderSink for Vec<DrawItem> {
    fn draw(&mut self, item: &DrawItem) {
        self.push(*item);
    }
}

pub(super) fn render(scene: &SceneCore, sink: &mut dyn RenderSink) -> usize {
    let alpha = scene.clock.alpha();
    let mut drawn = 0;
    for entity in scene.entities.iter().filter(|e| e.active) {
        sink.draw(&DrawItem::from_entity(entity, alpha));
        drawn += 1;
    }
    drawn
}

/// Pack active entities into the instance buffer; returns the instance count.
pub(super) fn extract_instances(scene: &mut SceneCore) -> usize {
    let buffer = &mut scene.instance_buffer;
    buffer.clear();
    buffer.reserve(scene.entities.len() * INSTANCE_STRIDE);

    let mut count = 0;
    for entity in scene.entities.iter().filter(|e| e.active) {
        let (w, h) = entity.shape.size();
        buffer.extend_from_slice(&[
            entity.position.x,
            entity.position.y,
            entity.rotation.to_radians(),
            entity.color[0],
            entity.color[1],
            entity.color[2],
            entity.shape_tag().code() as f32,
            w,
            h,
        ]);
        count += 1;
    }
    count
}
