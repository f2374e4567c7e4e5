//! Single-slot coalescing for bursty update sources.
//!
//! Resize notifications can arrive far faster than it is useful to react to
//! them. A [`FrameGate`] collapses such a burst into exactly one scheduled
//! callback: the first event arms the gate and schedules the work, later
//! events see the gate already armed and do nothing. The work itself runs
//! with trailing-edge semantics: because the scheduled callback reads its
//! input when it finally runs, intermediate values are skipped and the final
//! one is never missed.
//!
//! Disarming before the callback runs doubles as cancellation: the callback
//! observes [`disarm`](FrameGate::disarm) returning `false` and must skip its
//! work.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Fallback delay for hosts without a paint clock.
///
/// Roughly three frames at 60 Hz. Hosts that cannot schedule a real
/// before-next-paint callback should run the pending callback after this
/// delay instead.
pub const FALLBACK_FRAME_DELAY: Duration = Duration::from_millis(66);

/// A single-slot gate that coalesces a burst of events into one callback.
#[derive(Debug, Default)]
pub struct FrameGate {
    armed: AtomicBool,
}

impl FrameGate {
    /// Create a new, unarmed gate.
    pub fn new() -> Self {
        Self {
            armed: AtomicBool::new(false),
        }
    }

    /// Arm the gate.
    ///
    /// Returns `true` only if the gate was previously unarmed; exactly one
    /// caller in a burst gets `true` and is responsible for scheduling the
    /// callback. Later callers get `false` and schedule nothing.
    pub fn arm(&self) -> bool {
        self.armed
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// Disarm the gate, returning whether it was armed.
    ///
    /// The scheduled callback calls this first and proceeds only on `true`.
    /// Calling `disarm` from elsewhere (for example on teardown) cancels the
    /// pending callback: when it eventually runs it sees `false` and skips.
    pub fn disarm(&self) -> bool {
        self.armed.swap(false, Ordering::SeqCst)
    }

    /// Check whether a callback is currently pending.
    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::SeqCst)
    }
}

static_assertions::assert_impl_all!(FrameGate: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_arm_wins() {
        let gate = FrameGate::new();

        assert!(gate.arm());
        assert!(!gate.arm());
        assert!(!gate.arm());
        assert!(gate.is_armed());
    }

    #[test]
    fn test_disarm_releases() {
        let gate = FrameGate::new();

        assert!(gate.arm());
        assert!(gate.disarm());
        assert!(!gate.is_armed());

        // A new burst can arm again
        assert!(gate.arm());
    }

    #[test]
    fn test_disarm_unarmed_reports_false() {
        let gate = FrameGate::new();

        assert!(!gate.disarm());

        gate.arm();
        assert!(gate.disarm());
        assert!(!gate.disarm()); // Cancelled callbacks see false
    }
}
