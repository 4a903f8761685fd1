//! Scene - Owned simulation context
//!
//! `SceneCore` owns the entity list, the fixed-timestep clock and the input
//! queue. It only orchestrates; integration lives in `systems::entity`,
//! detection in `systems::collision`, response in `systems::response`.
//!
//! Per tick: queued input -> gravity/input forces -> `Entity::update` on every
//! entity -> `check_all` over the list. The list is only mutated between ticks.

use crate::core::{Mat4, Vec2};
use crate::domain::{ConfigError, SceneConfig};
use crate::systems::collision::CollisionStats;
use crate::systems::entity::{Bounds, Entity, EntityDesc};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "clock/fixed_timestep.rs"]
mod clock;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use clock::FixedTimestep;
pub use commands::InputEvent;
pub use facade::World;
pub use perf_stats::PerfStats;
pub use render::{DrawItem, RenderSink, INSTANCE_STRIDE};

use commands::TickInput;
use perf_timer::PerfTimer;

/// The simulation scene
pub struct SceneCore {
    config: SceneConfig,
    entities: Vec<Entity>,
    next_id: u32,

    // Input collected between ticks
    pending_input: Vec<InputEvent>,
    held_input: TickInput,

    clock: FixedTimestep,
    bounds: Bounds,
    frame: u64,
    rng_state: u32,

    last_collisions: CollisionStats,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,

    // Render transfer
    instance_buffer: Vec<f32>,
}

impl SceneCore {
    /// Create an empty scene. Fails on an invalid config.
    pub fn new(config: SceneConfig) -> Result<Self, ConfigError> {
        init::create_scene_core(config)
    }

    pub fn from_config_json(json: &str) -> Result<Self, ConfigError> {
        Self::new(SceneConfig::from_json(json)?)
    }

    /// Create a scene and spawn the configured starting entities.
    pub fn with_default_population(config: SceneConfig) -> Result<Self, ConfigError> {
        let mut scene = Self::new(config)?;
        scene.populate()?;
        Ok(scene)
    }

    /// Spawn `initial_boxes` boxes then `initial_circles` circles at random spots.
    pub fn populate(&mut self) -> Result<Vec<u32>, ConfigError> {
        init::populate(self)
    }

    pub fn config(&self) -> &SceneConfig { &self.config }

    pub fn width(&self) -> u32 { self.config.width }

    pub fn height(&self) -> u32 { self.config.height }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn entity_count(&self) -> usize { self.entities.len() }

    /// Entities in spawn order.
    pub fn entities(&self) -> &[Entity] { &self.entities }

    pub fn entity(&self, id: u32) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Direct access for tools and tests; do not call mid-tick.
    pub fn entity_mut(&mut self, id: u32) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Collision counters of the most recent tick.
    pub fn last_collisions(&self) -> CollisionStats { self.last_collisions }

    pub fn tick_seconds(&self) -> f32 { self.config.tick_seconds() }

    /// Fraction of a tick waiting in the clock (render interpolation factor).
    pub fn alpha(&self) -> f32 { self.clock.alpha() }

    pub fn dropped_ticks(&self) -> u64 { self.clock.dropped_ticks() }

    // === SETTINGS ===

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        settings::set_gravity(self, x, y);
    }

    pub fn set_clamp_to_bounds(&mut self, enabled: bool) {
        settings::set_clamp_to_bounds(self, enabled);
    }

    pub fn set_held_input(&mut self, direction: Vec2, rotation: f32) {
        settings::set_held_input(self, direction, rotation);
    }

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === ENTITY API ===

    /// Spawn an entity immediately (between ticks). Returns its ID.
    pub fn spawn(&mut self, desc: EntityDesc) -> Result<u32, ConfigError> {
        commands::spawn(self, desc)
    }

    /// Spawn a circle from the circle template.
    pub fn spawn_circle(&mut self, position: Vec2, kinematic: bool) -> Result<u32, ConfigError> {
        commands::spawn_circle(self, position, kinematic)
    }

    /// Spawn a box from the box template.
    pub fn spawn_box(&mut self, position: Vec2) -> Result<u32, ConfigError> {
        commands::spawn_box(self, position)
    }

    /// Remove an entity by ID, returns false for unknown IDs.
    pub fn remove_entity(&mut self, id: u32) -> bool {
        commands::remove_entity(self, id)
    }

    /// Queue an input event for the next tick boundary.
    pub fn push_input(&mut self, event: InputEvent) {
        commands::push_input(self, event);
    }

    /// Drop every entity and reset the clock (scene teardown).
    pub fn clear(&mut self) {
        commands::clear(self);
    }

    // === STEPPING ===

    /// Run exactly one fixed tick.
    pub fn tick(&mut self) {
        step::tick(self);
    }

    /// Accumulate wall-clock time and run the whole ticks it covers.
    pub fn advance(&mut self, elapsed_seconds: f64) -> u32 {
        step::advance(self, elapsed_seconds)
    }

    // === RENDERING ===

    /// Hand every active entity to `sink`. Returns the number drawn.
    pub fn render(&self, sink: &mut dyn RenderSink) -> usize {
        render::render(self, sink)
    }

    /// Pack active entities into the instance buffer. Returns the instance count.
    pub fn extract_instances(&mut self) -> usize {
        render::extract_instances(self)
    }

    pub fn instances(&self) -> &[f32] { &self.instance_buffer }

    /// Orthographic projection of the viewport, y up.
    pub fn projection(&self) -> Mat4 {
        Mat4::orthographic(0.0, self.config.width as f32, 0.0, self.config.height as f32, 0.0, 1.0)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
