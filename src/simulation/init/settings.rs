use crate::resolver::ResolverSettings;

use super::PlatformingLevel;

pub(super) fn set_resolver_settings(level: &mut PlatformingLevel, settings: ResolverSettings) {
    if !(settings.epsilon > 0.0) || !(settings.max_step_up >= 0.0) {
        engine_warn!(
            "ignoring resolver settings epsilon={} max_step_up={}",
            settings.epsilon,
            settings.max_step_up
        );
        return;
    }
    level.settings = settings;
}

pub(super) fn enable_perf_metrics(level: &mut PlatformingLevel, enabled: bool) {
    level.perf_enabled = enabled;
}
