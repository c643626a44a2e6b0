/*!
 * Signal Bridge
 * Turns asynchronous signal deliveries into blocking, pollable events
 *
 * Two counting gates carry all cross-thread state:
 * - the event gate counts signal occurrences not yet consumed
 * - the wake gate releases the blocked consumer, either for a signal or
 *   for a shutdown request
 *
 * A consumer that wakes and finds the event gate empty was woken to quit.
 */

use super::atomic_stats::AtomicBridgeStats;
use super::timer::ShutdownTimer;
use super::types::{BridgeEvent, BridgeStats, WatchedSignal};
use crate::core::errors::BridgeResult;
use crate::core::sync::{GateConfig, Semaphore};
use std::time::Duration;
use tracing::{debug, info};

/// Coordination object shared by the signal handler, shutdown timers and
/// the consumer
///
/// # Single consumer
///
/// `poll_next_event` must only be called from one thread at a time. Two
/// concurrent pollers can each take a wake unit and then race on the event
/// gate, so one may report another's signal or both may report `Quit`.
pub struct SignalBridge {
    signal: WatchedSignal,
    events: Semaphore,
    wake: Semaphore,
    stats: AtomicBridgeStats,
}

impl SignalBridge {
    /// Create a bridge for window-resize signals
    pub fn new(config: GateConfig) -> Self {
        Self::for_signal(WatchedSignal::WindowResize, config)
    }

    /// Create a bridge that reports `signal`
    pub fn for_signal(signal: WatchedSignal, config: GateConfig) -> Self {
        Self {
            signal,
            events: Semaphore::new(config),
            wake: Semaphore::new(config),
            stats: AtomicBridgeStats::new(),
        }
    }

    /// Signal kind this bridge reports
    pub fn signal(&self) -> WatchedSignal {
        self.signal
    }

    /// Record one signal occurrence and wake the consumer
    ///
    /// This is the body of the OS signal handler: it only performs atomic
    /// increments and gate releases. The event release comes first so a
    /// consumer woken by this call always finds the event pending.
    #[inline]
    pub fn notify_signal(&self) {
        self.stats.inc_signals_received();
        self.events.release();
        self.wake.release();
    }

    /// Block until woken, then report whether a signal was pending
    pub fn poll_next_event(&self) -> BridgeEvent {
        self.wake.acquire();
        self.decide()
    }

    /// Like `poll_next_event`, but gives up after `timeout`
    ///
    /// Returns `None` if nothing woke the consumer in time.
    pub fn poll_next_event_timeout(&self, timeout: Duration) -> Option<BridgeEvent> {
        if self.wake.acquire_timeout(timeout) {
            Some(self.decide())
        } else {
            None
        }
    }

    fn decide(&self) -> BridgeEvent {
        if self.events.try_acquire() {
            self.stats.inc_signal_events();
            debug!(signal = %self.signal, "signal event consumed");
            BridgeEvent::Signal(self.signal)
        } else {
            self.stats.inc_quit_events();
            debug!("woken without pending signal, reporting quit");
            BridgeEvent::Quit
        }
    }

    /// Wake the consumer once after `delay` without recording a signal
    pub fn schedule_shutdown(&self, delay: Duration) -> BridgeResult<()> {
        ShutdownTimer::spawn(self.wake.clone(), delay)?;
        self.stats.inc_shutdowns_scheduled();
        info!(delay_ms = delay.as_millis() as u64, "shutdown scheduled");
        Ok(())
    }

    /// Wake the consumer now without recording a signal
    pub fn request_shutdown(&self) {
        self.stats.inc_shutdowns_scheduled();
        info!("shutdown requested");
        self.wake.release();
    }

    /// Signal occurrences not yet consumed
    pub fn pending_events(&self) -> usize {
        self.events.available()
    }

    /// Whether `notify_signal` is safe to call from a signal handler
    pub fn is_signal_safe(&self) -> bool {
        self.events.is_signal_safe() && self.wake.is_signal_safe()
    }

    /// Get statistics snapshot
    pub fn stats(&self) -> BridgeStats {
        self.stats.snapshot()
    }

    /// Async-compatible poll using tokio::spawn_blocking
    ///
    /// The blocking wait runs on tokio's blocking pool so the runtime keeps
    /// making progress. The single-consumer contract still applies.
    #[cfg(feature = "async")]
    pub async fn poll_next_event_async(self: std::sync::Arc<Self>) -> BridgeEvent {
        match tokio::task::spawn_blocking(move || self.poll_next_event()).await {
            Ok(event) => event,
            Err(e) => {
                // The blocking task only fails if it panicked or the runtime
                // is shutting down; either way the consumer should stop.
                tracing::warn!(error = %e, "blocking poll task failed");
                BridgeEvent::Quit
            }
        }
    }
}

impl Default for SignalBridge {
    fn default() -> Self {
        Self::new(GateConfig::signal_safe())
    }
}

impl std::fmt::Debug for SignalBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalBridge")
            .field("signal", &self.signal)
            .field("events", &self.events)
            .field("wake", &self.wake)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use std::time::Instant;

    fn configs() -> [GateConfig; 2] {
        [GateConfig::default(), GateConfig::condvar()]
    }

    #[test]
    fn test_notify_then_poll_reports_signal() {
        for config in configs() {
            let bridge = SignalBridge::new(config);
            bridge.notify_signal();
            bridge.notify_signal();

            assert_eq!(bridge.pending_events(), 2);
            assert_eq!(
                bridge.poll_next_event(),
                BridgeEvent::Signal(WatchedSignal::WindowResize)
            );
            assert_eq!(
                bridge.poll_next_event(),
                BridgeEvent::Signal(WatchedSignal::WindowResize)
            );
            assert_eq!(bridge.pending_events(), 0);
        }
    }

    #[test]
    fn test_request_shutdown_reports_quit() {
        for config in configs() {
            let bridge = SignalBridge::new(config);
            bridge.request_shutdown();

            assert_eq!(bridge.poll_next_event(), BridgeEvent::Quit);
            assert_eq!(bridge.pending_events(), 0);
        }
    }

    #[test]
    fn test_poll_blocks_until_notified() {
        let bridge = Arc::new(SignalBridge::default());
        let consumer = {
            let bridge = bridge.clone();
            thread::spawn(move || bridge.poll_next_event())
        };

        thread::sleep(Duration::from_millis(50));
        assert!(!consumer.is_finished());
        bridge.notify_signal();

        assert_eq!(
            consumer.join().unwrap(),
            BridgeEvent::Signal(WatchedSignal::WindowResize)
        );
    }

    #[test]
    fn test_poll_timeout_without_wake() {
        let bridge = SignalBridge::default();
        let start = Instant::now();

        assert_eq!(bridge.poll_next_event_timeout(Duration::from_millis(40)), None);
        assert!(start.elapsed() >= Duration::from_millis(40));
        assert_eq!(bridge.stats(), BridgeStats::default());
    }

    #[test]
    fn test_stats_track_outcomes() {
        let bridge = SignalBridge::default();
        bridge.notify_signal();
        bridge.request_shutdown();

        assert!(bridge.poll_next_event_timeout(Duration::from_secs(1)).is_some());
        assert!(bridge.poll_next_event_timeout(Duration::from_secs(1)).is_some());

        let stats = bridge.stats();
        assert_eq!(stats.signals_received, 1);
        assert_eq!(stats.signal_events, 1);
        assert_eq!(stats.quit_events, 1);
        assert_eq!(stats.shutdowns_scheduled, 1);
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn test_default_bridge_is_signal_safe() {
        assert!(SignalBridge::default().is_signal_safe());
        assert!(!SignalBridge::new(GateConfig::condvar()).is_signal_safe());
    }
}
