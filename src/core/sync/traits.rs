/*!
 * Counting Gate Traits
 *
 * Core abstraction for the counting semaphores that carry signal
 * occurrences and consumer wakeups between threads.
 *
 * # Design: Trait-Based Abstraction for Implementations
 *
 * `Semaphore` dispatches through this trait so the strategy can be picked
 * at construction time (futex on Linux, condvar elsewhere) and so tests can
 * exercise every strategy against the same contract.
 */

use std::time::Duration;

/// A counting gate: a non-negative counter with blocking acquisition
///
/// Implementations must be:
/// - **Thread-safe**: `release` may race with any number of acquirers
/// - **Lossless**: every `release` is observed by exactly one successful
///   `acquire`/`try_acquire`
/// - **Non-blocking on release**: `release` never waits and never allocates
pub trait CountingGate: Send + Sync {
    /// Increment the count and wake at most one blocked waiter
    fn release(&self);

    /// Block until the count is positive, then decrement it
    fn acquire(&self) {
        let acquired = self.acquire_timeout(None);
        debug_assert!(acquired, "unbounded acquire returned without a unit");
    }

    /// Decrement the count if it is positive, without blocking
    ///
    /// Returns `false` immediately when the count is zero.
    fn try_acquire(&self) -> bool;

    /// Block until a unit is available or the timeout elapses
    ///
    /// `None` waits forever. Returns `true` if a unit was consumed.
    fn acquire_timeout(&self, timeout: Option<Duration>) -> bool;

    /// Snapshot of the current count (for diagnostics only)
    fn available(&self) -> usize;

    /// Whether `release` may be called from an asynchronous signal handler
    fn is_signal_safe(&self) -> bool;

    /// Get strategy name for debugging
    fn name(&self) -> &'static str;
}
