use crate::core::Vec2;

use super::commands::TickInput;
use super::perf_stats::PerfStats;
use super::SceneCore;

pub(super) fn enable_perf_metrics(scene: &mut SceneCore, enabled: bool) {
    scene.perf_enabled = enabled;
    if !enabled {
        scene.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(scene: &SceneCore) -> PerfStats {
    scene.perf_stats.clone()
}

pub(super) fn set_gravity(scene: &mut SceneCore, x: f32, y: f32) {
    let gravity = Vec2::new(x, y);
    if gravity.is_finite() {
        scene.config.gravity = gravity;
    }
}

pub(super) fn set_clamp_to_bounds(scene: &mut SceneCore, enabled: bool) {
    scene.config.clamp_to_bounds = enabled;
}

/// Held input applies on every tick until replaced.
pub(super) fn set_held_input(scene: &mut SceneCore, direction: Vec2, rotation: f32) {
    scene.held_input = TickInput {
        direction: if direction.is_finite() { direction } else { Vec2::zero() },
        rotation: if rotation.is_finite() { rotation } else { 0.0 },
    };
}
