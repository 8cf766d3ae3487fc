//! Level - orchestrates one platforming scene
//!
//! Owns every body in an id-indexed arena, the collision-group table and the
//! resolver settings, and drives the per-frame phase sequence:
//!
//! 1. snapshot regular bodies
//! 2. snapshot tile maps, run their X velocity hook
//! 3. resolve X for tile maps that don't opt into other maps' tiles
//! 4. X velocity hook for every regular body, then X resolution for each
//! 5. steps 2-4 again for Y (without the snapshot)
//!
//! Moving platforms therefore publish their per-axis displacement before any
//! rider resolves that axis. Two regular bodies colliding on the same axis
//! resolve in registration order: the later one reacts to the earlier one's
//! new position.

use crate::body::{Body, BodyId};
use crate::domain::content::LevelDescription;
use crate::resolver::ResolverSettings;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/step_stats.rs"]
mod step_stats;
#[path = "groups/groups.rs"]
mod groups;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
pub mod render;
mod facade;

pub use facade::PlatformingWorld;
pub use groups::GroupId;
pub use render::{DrawSurface, RenderBatch};
pub use step_stats::StepStats;

use groups::GroupTable;
use perf_timer::PerfTimer;

pub struct PlatformingLevel {
    // Arena: a removed body leaves `None`, ids are never reused
    slots: Vec<Option<Body>>,
    objects: Vec<BodyId>,
    tile_map_objects: Vec<BodyId>,
    groups: GroupTable,

    // Settings
    settings: ResolverSettings,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    stats: StepStats,
}

impl PlatformingLevel {
    pub fn new() -> Self {
        init::create_level()
    }

    /// Forget every body and group membership. Settings are kept.
    pub fn init(&mut self) {
        init::reset_level(self);
    }

    /// Register `body` in `groups` and in `GroupId::ALL`.
    ///
    /// Tile maps go to the tile-map list, everything else to the regular
    /// list; within each list update order is registration order.
    pub fn push_object(&mut self, body: Body, groups: &[GroupId]) -> BodyId {
        commands::push_object(self, body, groups)
    }

    /// Same as `push_object`, with group names (interned on the fly)
    pub fn push_object_in(&mut self, body: Body, group_names: &[&str]) -> BodyId {
        let groups: Vec<GroupId> = group_names.iter().map(|name| self.groups.intern(name)).collect();
        commands::push_object(self, body, &groups)
    }

    /// Unregister a body everywhere and hand it back. Unknown ids are a no-op.
    pub fn remove_object(&mut self, id: BodyId) -> Option<Body> {
        commands::remove_object(self, id)
    }

    /// Add the bodies of a level description. Returns their ids, tile maps
    /// first, in description order.
    pub fn load_description(&mut self, description: &LevelDescription) -> Result<Vec<BodyId>, String> {
        commands::load_description(self, description)
    }

    pub fn load_level_json(&mut self, json: &str) -> Result<Vec<BodyId>, String> {
        let description = LevelDescription::from_json(json)?;
        self.load_description(&description)
    }

    /// Advance the level by `dt` seconds. `dt` must be positive.
    pub fn update(&mut self, dt: f64) {
        step::update(self, dt);
    }

    // === Bodies ===

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Regular bodies in update order
    pub fn objects(&self) -> &[BodyId] {
        &self.objects
    }

    /// Tile-map bodies in update order
    pub fn tile_map_objects(&self) -> &[BodyId] {
        &self.tile_map_objects
    }

    pub fn body_count(&self) -> usize {
        self.objects.len() + self.tile_map_objects.len()
    }

    /// Every live body, tile maps first
    pub fn bodies(&self) -> impl Iterator<Item = (BodyId, &Body)> + '_ {
        self.tile_map_objects
            .iter()
            .chain(self.objects.iter())
            .filter_map(move |&id| self.body(id).map(|body| (id, body)))
    }

    // === Groups ===

    pub fn intern_group(&mut self, name: &str) -> GroupId {
        self.groups.intern(name)
    }

    pub fn group_id(&self, name: &str) -> Option<GroupId> {
        self.groups.lookup(name)
    }

    pub fn group_name(&self, id: GroupId) -> Option<&str> {
        self.groups.name(id)
    }

    pub fn group_members(&self, id: GroupId) -> &[BodyId] {
        self.groups.members(id)
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    // === Settings & metrics ===

    pub fn resolver_settings(&self) -> ResolverSettings {
        self.settings
    }

    pub fn set_resolver_settings(&mut self, settings: ResolverSettings) {
        settings::set_resolver_settings(self, settings);
    }

    /// Enable or disable step timing (counters are always kept)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    pub fn stats(&self) -> &StepStats {
        &self.stats
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Draw every body, tile maps first
    pub fn render(&self, surface: &mut impl DrawSurface) {
        for (_, body) in self.bodies() {
            render::render_body(body, surface);
        }
    }
}

impl Default for PlatformingLevel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
