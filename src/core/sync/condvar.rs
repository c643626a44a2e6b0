/*!
 * Condvar-Based Counting Gate
 *
 * Cross-platform gate using parking_lot::Mutex and parking_lot::Condvar
 */

use super::traits::CountingGate;
use parking_lot::{Condvar, Mutex};
use std::time::{Duration, Instant};

/// Mutex/condvar counting gate
///
/// The count and the condition share one lock, so a waiter can never miss
/// a release between checking the count and going to sleep.
///
/// Not async-signal-safe: a handler that interrupts a thread holding the
/// lock would deadlock. Use `FutexGate` for gates released from handlers.
pub struct CondvarGate {
    count: Mutex<usize>,
    condvar: Condvar,
}

impl CondvarGate {
    /// Create a gate with a zero count
    pub const fn new() -> Self {
        Self {
            count: Mutex::new(0),
            condvar: Condvar::new(),
        }
    }
}

impl Default for CondvarGate {
    fn default() -> Self {
        Self::new()
    }
}

impl CountingGate for CondvarGate {
    fn release(&self) {
        let mut count = self.count.lock();
        *count += 1;
        self.condvar.notify_one();
    }

    fn try_acquire(&self) -> bool {
        let mut count = self.count.lock();
        if *count > 0 {
            *count -= 1;
            true
        } else {
            false
        }
    }

    fn acquire_timeout(&self, timeout: Option<Duration>) -> bool {
        let deadline = timeout.map(|t| Instant::now() + t);
        let mut count = self.count.lock();

        while *count == 0 {
            match deadline {
                Some(deadline) => {
                    if self.condvar.wait_until(&mut count, deadline).timed_out() {
                        // A release may have landed right at the deadline
                        break;
                    }
                }
                None => self.condvar.wait(&mut count),
            }
        }

        if *count > 0 {
            *count -= 1;
            true
        } else {
            false
        }
    }

    fn available(&self) -> usize {
        *self.count.lock()
    }

    fn is_signal_safe(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "condvar"
    }
}
