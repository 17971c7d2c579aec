//! Scoped repeating timer for simulated live tracking.
//!
//! DESIGN
//! ======
//! A `LiveTimer` is the only handle to its interval. Dropping it cancels the
//! interval, so whoever owns the value owns the timer's lifetime: the map view
//! keeps it in a `StoredValue` and clears that slot in `on_cleanup`.
//!
//! Outside the browser there is no event loop to tick on; `start` still
//! returns a guard (and is counted) but the callback never fires.

#[cfg(test)]
#[path = "live_timer_test.rs"]
mod live_timer_test;

use std::cell::Cell;
use std::time::Duration;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Interval;

thread_local! {
    static ACTIVE: Cell<usize> = const { Cell::new(0) };
}

/// Number of live timers currently running on this thread.
pub fn active_timers() -> usize {
    ACTIVE.with(Cell::get)
}

/// Running interval. Cancelled on drop.
#[must_use = "dropping a LiveTimer cancels it immediately"]
pub struct LiveTimer {
    #[cfg(feature = "hydrate")]
    _interval: Interval,
}

impl LiveTimer {
    /// Call `on_tick` every `period` until the returned guard is dropped.
    pub fn start(period: Duration, on_tick: impl FnMut() + 'static) -> Self {
        ACTIVE.with(|n| n.set(n.get() + 1));
        #[cfg(feature = "hydrate")]
        {
            let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
            let mut on_tick = on_tick;
            Self { _interval: Interval::new(millis, move || on_tick()) }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (period, on_tick);
            Self {}
        }
    }
}

impl Drop for LiveTimer {
    fn drop(&mut self) {
        ACTIVE.with(|n| n.set(n.get().saturating_sub(1)));
    }
}

/// Seed for the drift generator of one map view.
#[cfg_attr(feature = "hydrate", allow(clippy::cast_possible_truncation, clippy::cast_sign_loss))]
pub fn entropy_seed() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0x5EED
    }
}
