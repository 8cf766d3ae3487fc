use crate::resolver::ResolverSettings;

use super::groups::GroupTable;
use super::step_stats::StepStats;
use super::PlatformingLevel;

pub(super) fn create_level() -> PlatformingLevel {
    PlatformingLevel {
        slots: Vec::new(),
        objects: Vec::new(),
        tile_map_objects: Vec::new(),
        groups: GroupTable::new(),
        settings: ResolverSettings::default(),
        frame: 0,
        perf_enabled: false,
        stats: StepStats::default(),
    }
}

pub(super) fn reset_level(level: &mut PlatformingLevel) {
    level.slots.clear();
    level.objects.clear();
    level.tile_map_objects.clear();
    // Interned names stay valid so callers' GroupIds survive a reset.
    level.groups.clear_members();
    level.frame = 0;
    level.stats.reset();
}
