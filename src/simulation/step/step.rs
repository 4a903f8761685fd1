use crate::systems::collision::{check_all, CollisionStats};
use crate::systems::entity::Bounds;

use super::commands::{apply_tick_input, drain_input};
use super::{PerfTimer, SceneCore};

/// One fixed tick: input -> forces -> integrate every entity -> collide every pair.
pub(super) fn tick(scene: &mut SceneCore) {
    let perf_on = scene.perf_enabled;
    if perf_on {
        scene.perf_stats.reset();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };
    let mut lap = PerfTimer::start();

    // === INPUT (tick boundary) ===
    let (input, events) = drain_input(scene);
    apply_tick_input(scene, input);
    if perf_on {
        scene.perf_stats.input_ms = lap.lap_ms();
        scene.perf_stats.input_events = events;
    }

    // === INTEGRATION ===
    let dt = scene.config.tick_seconds();
    let bounds: Option<Bounds> = scene.config.clamp_to_bounds.then_some(scene.bounds);
    for entity in scene.entities.iter_mut() {
        entity.update(dt, bounds.as_ref());
    }
    if perf_on {
        scene.perf_stats.integrate_ms = lap.lap_ms();
    }

    // === COLLISION ===
    let mut stats = CollisionStats::default();
    check_all(&mut scene.entities, &mut stats);
    scene.last_collisions = stats;
    if perf_on {
        scene.perf_stats.collision_ms = lap.lap_ms();
        scene.perf_stats.record_collisions(&stats);
        scene.perf_stats.entity_count = scene.entities.len() as u32;
        scene.perf_stats.kinetic_energy = scene
            .entities
            .iter()
            .filter(|e| !e.kinematic)
            .map(|e| e.kinetic_energy())
            .sum();
        if let Some(start) = step_start {
            scene.perf_stats.step_ms = start.elapsed_ms();
        }
    }

    scene.frame += 1;
}

/// Feed wall-clock time to the fixed-timestep clock and run the ticks it releases.
pub(super) fn advance(scene: &mut SceneCore, elapsed_seconds: f64) -> u32 {
    let ticks = scene.clock.advance(elapsed_seconds);
    for _ in 0..ticks {
        tick(scene);
    }
    ticks
}
