//! Process-wide trace enable flag.
//!
//! The mask is the only shared mutable state in the facility. Every wrapper
//! reads it at the top of the call and degrades to pure pass-through when it
//! is clear; toggling it is an external, out-of-band control operation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared on/off switch for event emission.
///
/// Cheaply clonable handle over a single atomic flag; clones observe the
/// same state. Starts disabled. Wrappers only ever read it, from any
/// execution context, with no side effects and no locking.
#[derive(Debug, Clone)]
pub struct TraceMask {
    enabled: Arc<AtomicBool>,
}

impl TraceMask {
    /// Create a mask in the disabled state.
    pub fn new() -> Self {
        TraceMask {
            enabled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a mask that starts enabled.
    pub fn enabled() -> Self {
        let mask = TraceMask::new();
        mask.enable();
        mask
    }

    /// Check whether event emission is active.
    ///
    /// Relaxed load: a stale read only delays a toggle taking effect, and
    /// the hot path must not pay for ordering it does not need.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Turn event emission on.
    pub fn enable(&self) {
        self.enabled.store(true, Ordering::Release);
    }

    /// Turn event emission off.
    pub fn disable(&self) {
        self.enabled.store(false, Ordering::Release);
    }

    /// Set the flag from an external control surface.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Release);
    }
}

impl Default for TraceMask {
    fn default() -> Self {
        TraceMask::new()
    }
}
