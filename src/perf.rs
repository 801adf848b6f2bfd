//! Pointer event timing.
//!
//! Moves arrive once per input sample while a button is held, so each one
//! has to finish well inside a frame. The controller times every move into
//! [`PointerTimings`], which keeps running totals for the current session and
//! for the controller's lifetime. The session totals are logged at debug
//! level and cleared when the session ends.
//!
//! `profile_scope!` adds trace-level scope timing to the pointer handlers
//! when the `profiling` feature is enabled and expands to nothing otherwise.

use crate::types::RectId;
use std::time::Instant;
use tracing::{debug, warn};

/// Budget for handling a single pointer event
pub const POINTER_EVENT_BUDGET_MS: f64 = 4.0;

/// Time the rest of the enclosing scope under `name` (`profiling` feature).
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _scope = $crate::perf::ScopeTrace::start($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
}

pub use profile_scope;

/// Emits the elapsed time of a scope at trace level when dropped.
#[cfg(feature = "profiling")]
#[doc(hidden)]
pub struct ScopeTrace {
    name: &'static str,
    start: Instant,
}

#[cfg(feature = "profiling")]
impl ScopeTrace {
    pub fn start(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }
}

#[cfg(feature = "profiling")]
impl Drop for ScopeTrace {
    fn drop(&mut self) {
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        tracing::trace!(scope = self.name, elapsed_ms, "Pointer scope");
    }
}

/// Running totals over a series of pointer moves.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MoveStats {
    count: u64,
    total_ms: f64,
    worst_ms: f64,
    over_budget: u64,
}

impl MoveStats {
    fn record(&mut self, elapsed_ms: f64) {
        self.count += 1;
        self.total_ms += elapsed_ms;
        self.worst_ms = self.worst_ms.max(elapsed_ms);
        if elapsed_ms > POINTER_EVENT_BUDGET_MS {
            self.over_budget += 1;
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Mean move time, 0 before the first move.
    pub fn mean_ms(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total_ms / self.count as f64
        }
    }

    pub fn worst_ms(&self) -> f64 {
        self.worst_ms
    }

    /// Moves that took longer than [`POINTER_EVENT_BUDGET_MS`]
    pub fn over_budget(&self) -> u64 {
        self.over_budget
    }
}

/// Move timings owned by the interaction controller.
#[derive(Debug, Default)]
pub struct PointerTimings {
    session: MoveStats,
    lifetime: MoveStats,
}

impl PointerTimings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one move computation, recording how long it took.
    pub fn time_move<T>(&mut self, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let result = f();
        self.record_move(start.elapsed().as_secs_f64() * 1000.0);
        result
    }

    pub fn record_move(&mut self, elapsed_ms: f64) {
        if elapsed_ms > POINTER_EVENT_BUDGET_MS {
            warn!(
                elapsed_ms = format!("{:.2}", elapsed_ms),
                budget_ms = format!("{:.2}", POINTER_EVENT_BUDGET_MS),
                "Slow pointer move"
            );
        }
        self.session.record(elapsed_ms);
        self.lifetime.record(elapsed_ms);
    }

    /// Moves of the open session so far
    pub fn session(&self) -> &MoveStats {
        &self.session
    }

    /// Moves since construction or the last [`reset`](Self::reset)
    pub fn lifetime(&self) -> &MoveStats {
        &self.lifetime
    }

    /// Log and clear the totals of the session that just ended on `rect_id`.
    pub fn end_session(&mut self, rect_id: RectId) -> MoveStats {
        let stats = std::mem::take(&mut self.session);
        if stats.count > 0 {
            debug!(
                rect_id,
                moves = stats.count,
                mean_ms = format!("{:.3}", stats.mean_ms()),
                worst_ms = format!("{:.3}", stats.worst_ms),
                over_budget = stats.over_budget,
                "Session timings"
            );
        }
        stats
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
