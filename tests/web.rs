//! Browser smoke tests, run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use sandbox_physics::World;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn world_steps_in_browser() {
    sandbox_physics::init();
    let mut world = World::new(320, 240).unwrap();
    world.populate().unwrap();
    world.enable_perf_metrics(true);
    assert_eq!(world.advance(0.04), 2);
    assert_eq!(world.extract_instances(), 3);
    assert!(world.get_perf_stats().step_ms() >= 0.0);
}

#[wasm_bindgen_test]
fn bad_config_surfaces_as_js_error() {
    let err = World::from_config_json(r#"{ "ticks_per_second": -1 }"#);
    assert!(err.is_err());
}
