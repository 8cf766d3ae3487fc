/// Measures one `PlatformingLevel::update` call for `StepStats::step_ms`.
///
/// Reads `Date.now()` in the browser (millisecond resolution) and `Instant`
/// natively.
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    #[cfg(target_arch = "wasm32")]
    started_at_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    started_at: std::time::Instant,
}

impl PerfTimer {
    /// Start timing a step, or `None` when perf metrics are off.
    pub(crate) fn start_if(enabled: bool) -> Option<Self> {
        enabled.then(Self::start)
    }

    pub(crate) fn start() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            PerfTimer { started_at_ms: js_sys::Date::now() }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            PerfTimer { started_at: std::time::Instant::now() }
        }
    }

    /// Milliseconds since `start`, never negative
    pub(crate) fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        let ms = js_sys::Date::now() - self.started_at_ms;
        #[cfg(not(target_arch = "wasm32"))]
        let ms = self.started_at.elapsed().as_secs_f64() * 1000.0;
        ms.max(0.0)
    }
}
