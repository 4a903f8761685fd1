use wasm_bindgen::prelude::*;

use crate::core::Vec2;
use crate::domain::{ConfigError, SceneConfig};

use super::perf_stats::PerfStats;
use super::{InputEvent, SceneCore, INSTANCE_STRIDE};

fn to_js(err: ConfigError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Browser-facing handle around `SceneCore`
#[wasm_bindgen]
pub struct World {
    core: SceneCore,
}

#[wasm_bindgen]
impl World {
    /// Create an empty world with the default config and the given viewport
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<World, JsValue> {
        let config = SceneConfig {
            width,
            height,
            ..SceneConfig::default()
        };
        let core = SceneCore::new(config).map_err(to_js)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<World, JsValue> {
        let core = SceneCore::from_config_json(json).map_err(to_js)?;
        Ok(Self { core })
    }

    /// Spawn the configured starting entities
    pub fn populate(&mut self) -> Result<u32, JsValue> {
        let ids = self.core.populate().map_err(to_js)?;
        Ok(ids.len() as u32)
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn entity_count(&self) -> usize { self.core.entity_count() }

    /// Render interpolation factor in [0, 1)
    #[wasm_bindgen(getter)]
    pub fn alpha(&self) -> f32 { self.core.alpha() }

    pub fn config_json(&self) -> Result<String, JsValue> {
        self.core.config().to_json().map_err(to_js)
    }

    // === SETTINGS ===

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.core.set_gravity(x, y);
    }

    pub fn set_clamp_to_bounds(&mut self, enabled: bool) {
        self.core.set_clamp_to_bounds(enabled);
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Last tick's perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === ENTITY API ===

    /// Spawn a circle immediately, returns its ID
    pub fn spawn_circle(&mut self, x: f32, y: f32, kinematic: bool) -> Result<u32, JsValue> {
        self.core.spawn_circle(Vec2::new(x, y), kinematic).map_err(to_js)
    }

    /// Spawn a box immediately, returns its ID
    pub fn spawn_box(&mut self, x: f32, y: f32) -> Result<u32, JsValue> {
        self.core.spawn_box(Vec2::new(x, y)).map_err(to_js)
    }

    pub fn remove_entity(&mut self, id: u32) -> bool {
        self.core.remove_entity(id)
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    // === INPUT (applied at the next tick) ===

    pub fn queue_spawn_circle(&mut self, x: f32, y: f32, kinematic: bool) {
        self.core.push_input(InputEvent::SpawnCircle {
            position: Vec2::new(x, y),
            kinematic,
        });
    }

    pub fn queue_spawn_box(&mut self, x: f32, y: f32) {
        self.core.push_input(InputEvent::SpawnBox {
            position: Vec2::new(x, y),
        });
    }

    pub fn queue_despawn(&mut self, id: u32) {
        self.core.push_input(InputEvent::Despawn { id });
    }

    /// One-tick directional push
    pub fn push_move(&mut self, x: f32, y: f32) {
        self.core.push_input(InputEvent::Move {
            direction: Vec2::new(x, y),
        });
    }

    /// One-tick box rotation nudge
    pub fn push_rotate(&mut self, delta: f32) {
        self.core.push_input(InputEvent::Rotate { delta });
    }

    /// Held keys: applied every tick until changed
    pub fn set_held_input(&mut self, move_x: f32, move_y: f32, rotate: f32) {
        self.core.set_held_input(Vec2::new(move_x, move_y), rotate);
    }

    // === STEPPING ===

    /// Run one fixed tick
    pub fn step(&mut self) {
        self.core.tick();
    }

    /// Feed wall-clock seconds, returns ticks run
    pub fn advance(&mut self, elapsed_seconds: f64) -> u32 {
        self.core.advance(elapsed_seconds)
    }

    // === RENDER API ===

    /// Pack entities for drawing, returns instance count
    pub fn extract_instances(&mut self) -> usize {
        self.core.extract_instances()
    }

    /// Pointer to the packed instance floats (for JS rendering)
    pub fn instances_ptr(&self) -> *const f32 {
        self.core.instances().as_ptr()
    }

    /// Number of floats in the instance buffer
    pub fn instances_len(&self) -> usize {
        self.core.instances().len()
    }

    pub fn instance_stride(&self) -> usize {
        INSTANCE_STRIDE
    }

    /// Column-major orthographic projection for the viewport
    pub fn projection_matrix(&self) -> Vec<f32> {
        self.core.projection().as_slice().to_vec()
    }
}

impl World {
    /// Native access to the wrapped scene.
    pub fn core(&self) -> &SceneCore {
        &self.core
    }
}
