//! Phase stopwatch for the tick breakdown

/// Milliseconds on a monotonic-enough clock: `Date.now()` in the browser,
/// time since first use natively
#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Splits one tick into consecutive phases; each `lap` returns the time
/// since the previous one
#[derive(Clone, Copy, Debug)]
pub(crate) struct PerfTimer {
    mark_ms: f64,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        PerfTimer { mark_ms: now_ms() }
    }

    /// Milliseconds since `start` or the last lap, then restart
    pub(crate) fn lap(&mut self) -> f64 {
        let now = now_ms();
        // Date.now() can step backwards with the wall clock
        let elapsed = (now - self.mark_ms).max(0.0);
        self.mark_ms = now;
        elapsed
    }
}
