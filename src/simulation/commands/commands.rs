use crate::core::Vec2;
use crate::domain::{ConfigError, EntityTemplate, Shape};
use crate::systems::entity::{Entity, EntityDesc};

use super::SceneCore;

/// Discrete event from the input layer, applied at the next tick boundary
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Spawn a circle from the scene's circle template
    SpawnCircle { position: Vec2, kinematic: bool },
    /// Spawn a box from the scene's box template
    SpawnBox { position: Vec2 },
    /// Directional push for one tick (unit-ish direction, scaled by `move_force`)
    Move { direction: Vec2 },
    /// Rotation nudge for boxes for one tick (scaled by `rotation_step`)
    Rotate { delta: f32 },
    Despawn { id: u32 },
}

/// Input accumulated for the tick being prepared
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(super) struct TickInput {
    pub(super) direction: Vec2,
    pub(super) rotation: f32,
}

pub(super) fn spawn(scene: &mut SceneCore, desc: EntityDesc) -> Result<u32, ConfigError> {
    let mut entity = Entity::new(desc)?;

    let id = scene.next_id;
    scene.next_id = scene.next_id.saturating_add(1);
    entity.id = id;

    tracing::debug!(
        id,
        shape = ?entity.shape_tag(),
        x = entity.position.x,
        y = entity.position.y,
        kinematic = entity.kinematic,
        "spawned entity"
    );
    scene.entities.push(entity);
    Ok(id)
}

pub(super) fn spawn_from_template(
    scene: &mut SceneCore,
    template: EntityTemplate,
    position: Vec2,
    kinematic: bool,
) -> Result<u32, ConfigError> {
    let desc = EntityDesc::with_shape(position, template.shape, template.mass)
        .kinematic(kinematic)
        .material(template.material)
        .color(template.color);
    spawn(scene, desc)
}

pub(super) fn spawn_circle(scene: &mut SceneCore, position: Vec2, kinematic: bool) -> Result<u32, ConfigError> {
    let template = scene.config.circle;
    spawn_from_template(scene, template, position, kinematic)
}

pub(super) fn spawn_box(scene: &mut SceneCore, position: Vec2) -> Result<u32, ConfigError> {
    let template = scene.config.rect;
    spawn_from_template(scene, template, position, template.kinematic)
}

/// Remove an entity, keeping the spawn order of the others.
///
/// Unknown IDs are ignored so a stale despawn never fails.
pub(super) fn remove_entity(scene: &mut SceneCore, id: u32) -> bool {
    match scene.entities.iter().position(|e| e.id == id) {
        Some(idx) => {
            scene.entities.remove(idx);
            tracing::debug!(id, "despawned entity");
            true
        }
        None => false,
    }
}

pub(super) fn push_input(scene: &mut SceneCore, event: InputEvent) {
    scene.pending_input.push(event);
}

/// Apply queued events and return the one-tick input they produced.
pub(super) fn drain_input(scene: &mut SceneCore) -> (TickInput, u32) {
    let events = std::mem::take(&mut scene.pending_input);
    let count = events.len() as u32;
    let mut input = TickInput::default();

    for event in events.iter().copied() {
        match event {
            InputEvent::SpawnCircle { position, kinematic } => {
                if let Err(err) = spawn_circle(scene, position, kinematic) {
                    tracing::warn!(%err, "rejected circle spawn");
                }
            }
            InputEvent::SpawnBox { position } => {
                if let Err(err) = spawn_box(scene, position) {
                    tracing::warn!(%err, "rejected box spawn");
                }
            }
            InputEvent::Move { direction } => {
                if direction.is_finite() {
                    input.direction += direction;
                }
            }
            InputEvent::Rotate { delta } => {
                if delta.is_finite() {
                    input.rotation += delta;
                }
            }
            InputEvent::Despawn { id } => {
                remove_entity(scene, id);
            }
        }
    }

    // Reuse the allocation for the next batch.
    let mut events = events;
    events.clear();
    scene.pending_input = events;

    (input, count)
}

/// Write gravity and input forces into every entity, and rotate boxes.
pub(super) fn apply_tick_input(scene: &mut SceneCore, input: TickInput) {
    let gravity = scene.config.gravity;
    let push = (input.direction + scene.held_input.direction) * scene.config.move_force;
    let spin = (input.rotation + scene.held_input.rotation) * scene.config.rotation_step;

    for entity in scene.entities.iter_mut().filter(|e| e.active) {
        if !entity.kinematic {
            let mass = entity.mass;
            entity.apply_force(gravity * mass);
            entity.apply_force(push * mass);
        }
        // Direct rotation write, bypasses physics.
        if spin != 0.0 {
            if let Shape::Box { .. } = entity.shape {
                entity.rotation += spin;
            }
        }
    }
}

pub(super) fn clear(scene: &mut SceneCore) {
    scene.entities.clear();
    scene.pending_input.clear();
    scene.held_input = TickInput::default();
    scene.next_id = 1;
    scene.frame = 0;
    scene.clock.reset();
}
