use wasm_bindgen::prelude::*;

/// Counters for the last `update` call
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepStats {
    pub(super) step_ms: f64,
    pub(super) resolves: u32,
    pub(super) tile_map_resolves: u32,
    pub(super) ground_contacts: u32,
    pub(super) ceiling_contacts: u32,
    pub(super) bodies: u32,
    pub(super) frame: u64,
}

impl StepStats {
    pub(crate) fn reset(&mut self) {
        *self = StepStats::default();
    }
}

#[wasm_bindgen]
impl StepStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    /// Axis resolutions performed, tile maps included
    #[wasm_bindgen(getter)]
    pub fn resolves(&self) -> u32 { self.resolves }
    #[wasm_bindgen(getter)]
    pub fn tile_map_resolves(&self) -> u32 { self.tile_map_resolves }
    /// Regular bodies on the ground after the Y pass
    #[wasm_bindgen(getter)]
    pub fn ground_contacts(&self) -> u32 { self.ground_contacts }
    #[wasm_bindgen(getter)]
    pub fn ceiling_contacts(&self) -> u32 { self.ceiling_contacts }
    #[wasm_bindgen(getter)]
    pub fn bodies(&self) -> u32 { self.bodies }
    /// Frame number the stats belong to
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
}
