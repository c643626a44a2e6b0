/*!
 * Semaphore
 *
 * High-level counting gate handle.
 * Selects the strategy once at creation time based on platform and configuration.
 */

use super::condvar::CondvarGate;
use super::config::{GateConfig, StrategyType};
#[cfg(target_os = "linux")]
use super::futex::FutexGate;
use super::traits::CountingGate;
use std::sync::Arc;
use std::time::Duration;

/// Cloneable counting semaphore
///
/// Clones share the same counter.
///
/// # Examples
///
/// ```
/// use resize_bridge::core::sync::{GateConfig, Semaphore};
/// use std::time::Duration;
///
/// let gate = Semaphore::new(GateConfig::default());
/// assert!(!gate.try_acquire());
///
/// gate.release();
/// assert!(gate.acquire_timeout(Duration::from_millis(10)));
/// ```
#[derive(Clone)]
pub struct Semaphore {
    gate: Arc<dyn CountingGate>,
}

impl Semaphore {
    /// Create a new semaphore with the specified configuration
    pub fn new(config: GateConfig) -> Self {
        let gate: Arc<dyn CountingGate> = match config.select_strategy() {
            #[cfg(target_os = "linux")]
            StrategyType::Futex => Arc::new(FutexGate::new()),
            _ => Arc::new(CondvarGate::new()),
        };

        Self { gate }
    }

    /// Create with default configuration (auto-selects best strategy)
    pub fn with_defaults() -> Self {
        Self::new(GateConfig::default())
    }

    /// Wrap a custom gate implementation
    pub fn from_gate(gate: Arc<dyn CountingGate>) -> Self {
        Self { gate }
    }

    /// Increment the count and wake one waiter
    #[inline]
    pub fn release(&self) {
        self.gate.release();
    }

    /// Block until a unit is available and consume it
    pub fn acquire(&self) {
        self.gate.acquire();
    }

    /// Consume a unit if one is available, never blocking
    #[inline]
    pub fn try_acquire(&self) -> bool {
        self.gate.try_acquire()
    }

    /// Wait at most `timeout` for a unit
    pub fn acquire_timeout(&self, timeout: Duration) -> bool {
        self.gate.acquire_timeout(Some(timeout))
    }

    /// Current count (diagnostic snapshot)
    pub fn available(&self) -> usize {
        self.gate.available()
    }

    /// Whether `release` may run inside a signal handler
    pub fn is_signal_safe(&self) -> bool {
        self.gate.is_signal_safe()
    }

    /// Get the name of the active strategy
    pub fn strategy_name(&self) -> &'static str {
        self.gate.name()
    }
}

impl std::fmt::Debug for Semaphore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Semaphore")
            .field("strategy", &self.strategy_name())
            .field("available", &self.available())
            .finish()
    }
}
