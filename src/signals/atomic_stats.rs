/*!
 * Lock-Free Bridge Statistics
 * Atomic counters that are safe to bump from signal-handler context
 */

use crate::signals::types::BridgeStats;
use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic bridge statistics
///
/// # Performance
/// - Cache-line aligned to prevent false sharing
/// - All operations use relaxed ordering; counters carry no synchronization
#[repr(C, align(64))]
pub struct AtomicBridgeStats {
    signals_received: AtomicU64,
    signal_events: AtomicU64,
    quit_events: AtomicU64,
    shutdowns_scheduled: AtomicU64,
}

impl AtomicBridgeStats {
    #[inline]
    pub const fn new() -> Self {
        Self {
            signals_received: AtomicU64::new(0),
            signal_events: AtomicU64::new(0),
            quit_events: AtomicU64::new(0),
            shutdowns_scheduled: AtomicU64::new(0),
        }
    }

    /// Called from the signal handler
    #[inline(always)]
    pub fn inc_signals_received(&self) {
        self.signals_received.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn inc_signal_events(&self) {
        self.signal_events.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn inc_quit_events(&self) {
        self.quit_events.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn inc_shutdowns_scheduled(&self) {
        self.shutdowns_scheduled.fetch_add(1, Ordering::Relaxed);
    }

    /// Get snapshot of current stats
    pub fn snapshot(&self) -> BridgeStats {
        BridgeStats {
            signals_received: self.signals_received.load(Ordering::Relaxed),
            signal_events: self.signal_events.load(Ordering::Relaxed),
            quit_events: self.quit_events.load(Ordering::Relaxed),
            shutdowns_scheduled: self.shutdowns_scheduled.load(Ordering::Relaxed),
        }
    }
}

impl Default for AtomicBridgeStats {
    fn default() -> Self {
        Self::new()
    }
}
