//! Sandbox Physics - Rigid-body core for the circle/box sandbox
//!
//! Architecture:
//! - core/        - Vec2 / Mat4 math
//! - domain/      - Shapes, materials, scene config and errors
//! - systems/     - Entity integration, collision detection, collision response
//! - simulation/  - Owned scene context, input queue, fixed-timestep clock,
//!                  render extraction and the wasm `World` facade

pub mod core;
pub mod domain;
pub mod simulation;
pub mod systems;

pub use systems::collision;
pub use systems::entity;
pub use systems::response;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Sandbox physics engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{Mat4, Vec2};
pub use domain::{ConfigError, Material, SceneConfig, Shape, ShapeTag};
pub use simulation::{DrawItem, InputEvent, RenderSink, SceneCore, World};
pub use systems::entity::{Entity, EntityDesc};
