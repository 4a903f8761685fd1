use crate::core::Vec2;
use crate::domain::{ConfigError, SceneConfig};
use crate::systems::collision::CollisionStats;
use crate::systems::entity::Bounds;

use super::clock::FixedTimestep;
use super::commands::{spawn_box, spawn_circle, TickInput};
use super::perf_stats::PerfStats;
use super::random::range_f32;
use super::SceneCore;

pub(super) fn create_scene_core(config: SceneConfig) -> Result<SceneCore, ConfigError> {
    if let Err(err) = config.validate() {
        tracing::warn!(%err, "rejected scene config");
        return Err(err);
    }

    tracing::info!(
        width = config.width,
        height = config.height,
        ticks_per_second = config.ticks_per_second,
        "scene created"
    );

    Ok(SceneCore {
        clock: FixedTimestep::new(config.ticks_per_second, config.max_ticks_per_advance),
        bounds: Bounds::viewport(config.width, config.height),
        // xorshift needs a non-zero state
        rng_state: config.seed.max(1),
        entities: Vec::new(),
        pending_input: Vec::new(),
        held_input: TickInput::default(),
        next_id: 1,
        frame: 0,
        last_collisions: CollisionStats::default(),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        instance_buffer: Vec::new(),
        config,
    })
}

/// Spawn the configured starting set: boxes first, then circles, at random
/// positions inside the viewport.
pub(super) fn populate(scene: &mut SceneCore) -> Result<Vec<u32>, ConfigError> {
    let width = scene.config.width as f32;
    let height = scene.config.height as f32;
    let mut ids = Vec::new();

    for _ in 0..scene.config.initial_boxes {
        let x = range_f32(&mut scene.rng_state, 0.1 * width, 0.8 * width);
        let y = range_f32(&mut scene.rng_state, 0.1 * height, 0.5 * height);
        ids.push(spawn_box(scene, Vec2::new(x, y))?);
    }

    for _ in 0..scene.config.initial_circles {
        let x = range_f32(&mut scene.rng_state, 0.1 * width, 0.9 * width);
        let y = range_f32(&mut scene.rng_state, 0.6 * height, 0.9 * height);
        ids.push(spawn_circle(scene, Vec2::new(x, y), false)?);
    }

    Ok(ids)
}
