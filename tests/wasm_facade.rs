#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use platforming_engine::PlatformingWorld;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn steps_a_level_from_js() {
    platforming_engine::init();
    let mut world = PlatformingWorld::new();
    world.add_tile_map(0.0, 0.0, "    \n    \n    \nxxxx");
    let hero = world.add_character(2.0, 0.0, 1.0, 2.0);
    world.enable_perf_metrics(true);
    for _ in 0..120 {
        world.step(1.0 / 60.0);
    }
    assert!(world.on_ground(hero));
    assert!(world.get_step_stats().step_ms() >= 0.0);
    assert_eq!(world.frame(), 120);
}

#[wasm_bindgen_test]
fn reports_bad_level_json() {
    let mut world = PlatformingWorld::new();
    let err = world.load_level("{ \"tileMaps\": [{ \"rows\": [] }] }".to_string()).unwrap_err();
    assert!(err.as_string().unwrap_or_default().contains("no tiles"));
    assert_eq!(world.body_count(), 0);
}
