use wasm_bindgen::prelude::*;

use crate::body::{Body, BodyId, BoxCharacter, CharacterOptions, ConstantVelocity, TileMapBody, TileMapOptions};
use crate::domain::map_data::tiles_from_rows;
use crate::resolver::ResolverSettings;

use super::render::RenderBatch;
use super::step_stats::StepStats;
use super::PlatformingLevel;

/// JS handle to a level. Bodies are addressed by the `u32` ids returned
/// when they are added.
#[wasm_bindgen]
pub struct PlatformingWorld {
    level: PlatformingLevel,
    batch: RenderBatch,
}

#[wasm_bindgen]
impl PlatformingWorld {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            level: PlatformingLevel::new(),
            batch: RenderBatch::new(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.level.frame() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.level.body_count() as u32 }

    /// Remove every body
    pub fn clear(&mut self) {
        self.level.init();
        self.batch.clear();
    }

    /// Add the bodies of a JSON level description; returns their ids
    pub fn load_level(&mut self, json: String) -> Result<Vec<u32>, JsValue> {
        let ids = self
            .level
            .load_level_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(ids.into_iter().map(BodyId::raw).collect())
    }

    // === Bodies ===

    /// Character with a `width` x `height` hitbox centred on (x, y)
    pub fn add_character(&mut self, x: f64, y: f64, width: f64, height: f64) -> u32 {
        let body = Body::character_with(CharacterOptions::at(x, y), BoxCharacter::new(width, height));
        self.level.push_object(body, &[]).raw()
    }

    /// Still tile map; `rows` holds one map row per line
    pub fn add_tile_map(&mut self, x: f64, y: f64, rows: &str) -> u32 {
        let map = TileMapBody::new(tiles_from_rows(split_rows(rows).as_slice(), false));
        let body = Body::tile_map(map, TileMapOptions::at(x, y));
        self.level.push_object(body, &[]).raw()
    }

    /// Tile map moving at a constant (dx, dy)
    pub fn add_moving_tile_map(&mut self, x: f64, y: f64, rows: &str, dx: f64, dy: f64) -> u32 {
        let map = TileMapBody::new(tiles_from_rows(split_rows(rows).as_slice(), false));
        let body = Body::tile_map_with(map, TileMapOptions::at(x, y), ConstantVelocity::new(dx, dy));
        self.level.push_object(body, &[]).raw()
    }

    pub fn remove(&mut self, id: u32) -> bool {
        self.level.remove_object(BodyId(id)).is_some()
    }

    pub fn set_velocity(&mut self, id: u32, dx: f64, dy: f64) -> bool {
        match self.level.body_mut(BodyId(id)) {
            Some(body) => {
                body.state.velocity.x = dx;
                body.state.velocity.y = dy;
                true
            }
            None => false,
        }
    }

    /// Make body `id` collide with the members of group `name`
    pub fn set_collision_group(&mut self, id: u32, name: &str) -> bool {
        let group = self.level.intern_group(name);
        match self.level.body_mut(BodyId(id)) {
            Some(body) => {
                body.state.collision_group = group;
                true
            }
            None => false,
        }
    }

    /// NaN for unknown ids
    pub fn x(&self, id: u32) -> f64 {
        self.level.body(BodyId(id)).map_or(f64::NAN, |body| body.state.pos.x)
    }

    pub fn y(&self, id: u32) -> f64 {
        self.level.body(BodyId(id)).map_or(f64::NAN, |body| body.state.pos.y)
    }

    pub fn on_ground(&self, id: u32) -> bool {
        self.level.body(BodyId(id)).map_or(false, |body| body.state.on_ground)
    }

    pub fn on_ceiling(&self, id: u32) -> bool {
        self.level.body(BodyId(id)).map_or(false, |body| body.state.on_ceiling)
    }

    // === Simulation ===

    /// Advance by `dt` seconds. Non-positive or non-finite steps are skipped.
    pub fn step(&mut self, dt: f64) {
        if !(dt > 0.0 && dt.is_finite()) {
            engine_warn!("step: ignoring dt={}", dt);
            return;
        }
        self.level.update(dt);
    }

    pub fn set_epsilon(&mut self, epsilon: f64) {
        let settings = ResolverSettings { epsilon, ..self.level.resolver_settings() };
        self.level.set_resolver_settings(settings);
    }

    pub fn set_max_step_up(&mut self, max_step_up: f64) {
        let settings = ResolverSettings { max_step_up, ..self.level.resolver_settings() };
        self.level.set_resolver_settings(settings);
    }

    /// Enable or disable step timing
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.level.enable_perf_metrics(enabled);
    }

    /// Counters of the last step
    pub fn get_step_stats(&self) -> StepStats {
        self.level.stats().clone()
    }

    // === Debug rendering ===

    /// Re-extract draw calls; read them with the buffer getters below
    pub fn render(&mut self) {
        self.batch.clear();
        self.level.render(&mut self.batch);
    }

    /// `left, top, width, height` per rect
    pub fn rect_buffer(&self) -> Vec<f32> { self.batch.rects.clone() }

    pub fn rect_colors(&self) -> Vec<u32> { self.batch.rect_colors.clone() }

    /// `x, y` pairs of every polygon, back to back
    pub fn polygon_points(&self) -> Vec<f32> { self.batch.polygon_points.clone() }

    /// First point index of each polygon
    pub fn polygon_starts(&self) -> Vec<u32> { self.batch.polygon_starts.clone() }

    pub fn polygon_colors(&self) -> Vec<u32> { self.batch.polygon_colors.clone() }
}

impl Default for PlatformingWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformingWorld {
    /// The wrapped level, for Rust callers
    pub fn level(&self) -> &PlatformingLevel {
        &self.level
    }

    pub fn level_mut(&mut self) -> &mut PlatformingLevel {
        &mut self.level
    }
}

fn split_rows(rows: &str) -> Vec<&str> {
    rows.lines().collect()
}
