//! Platforming Engine - tile-map platforming physics in WASM
//!
//! Bodies move one axis at a time against tile maps and against each other.
//!
//! Architecture:
//! - core/        - Geometry, tile grid container, logging
//! - domain/      - Tile taxonomy, map parsing, level descriptions
//! - systems/     - Bodies and the axis resolver
//! - simulation/  - Level orchestration, rendering extraction, JS facade

// Logging macros must be declared before the modules that use them.
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

// Compatibility re-exports (short paths for the most used modules)
pub use crate::core::geometry;
pub use crate::core::grid;
pub use domain::tiles;
pub use systems::body;
pub use systems::resolver;

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

    engine_log!("platforming engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use body::{Behavior, Body, BodyId, BodyState, CharacterOptions, TileMapOptions};
pub use geometry::{Axis, Rect, Vec2};
pub use resolver::{move_and_collide, move_and_collide_with, ResolverSettings};
pub use simulation::{GroupId, PlatformingLevel, PlatformingWorld, StepStats};
pub use tiles::{PlatformingTile, SlopeProfile, TileKind};
