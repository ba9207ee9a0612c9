//! Tool-call timing for `OpStats`

/// Milliseconds on the host clock. `Date.now()` in the browser, where
/// `Instant` is unavailable.
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

/// Run `op`, returning its result and the wall time it took. The clock is
/// not read at all when `enabled` is false, and the time is reported as 0.
pub(crate) fn timed<R>(enabled: bool, op: impl FnOnce() -> R) -> (R, f64) {
    if !enabled {
        return (op(), 0.0);
    }
    let started = now_ms();
    let out = op();
    (out, (now_ms() - started).max(0.0))
}
