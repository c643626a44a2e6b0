/*!
 * Futex-Based Counting Gate
 *
 * Lock-free counting gate for Linux built on an `AtomicU32` and raw
 * `futex(2)` calls.
 *
 * # Design
 *
 * - `release` is one atomic add plus at most one `FUTEX_WAKE` syscall.
 *   Both are async-signal-safe, so the gate can be released from a
 *   signal handler that interrupted arbitrary code.
 * - Waiters sleep with `FUTEX_WAIT` on the count word while it reads zero.
 *   The kernel re-checks the word atomically, so a release between the
 *   load and the sleep makes the wait return immediately.
 * - The waiter counter lets `release` skip the syscall when nobody sleeps.
 *   Both sides use `SeqCst` so at least one of them observes the other.
 */

use super::traits::CountingGate;
use nix::libc;
use std::io;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{Duration, Instant};

/// Futex-backed counting gate
#[repr(C, align(64))] // Cache-line aligned to prevent false sharing
pub struct FutexGate {
    count: AtomicU32,
    sleepers: AtomicU32,
}

impl FutexGate {
    /// Create a gate with a zero count
    pub const fn new() -> Self {
        Self {
            count: AtomicU32::new(0),
            sleepers: AtomicU32::new(0),
        }
    }

    /// Sleep while the count word still holds `expected`
    fn futex_wait(&self, expected: u32, timeout: Option<Duration>) {
        let ts = timeout.map(|t| libc::timespec {
            tv_sec: t.as_secs().min(libc::time_t::MAX as u64) as libc::time_t,
            tv_nsec: t.subsec_nanos() as libc::c_long,
        });
        let ts_ptr = ts
            .as_ref()
            .map_or(std::ptr::null(), |ts| ts as *const libc::timespec);

        // SAFETY: the address points to a live AtomicU32 owned by self and
        // the timespec outlives the call.
        let rc = unsafe {
            libc::syscall(
                libc::SYS_futex,
                self.count.as_ptr(),
                libc::FUTEX_WAIT | libc::FUTEX_PRIVATE_FLAG,
                expected,
                ts_ptr,
            )
        };

        if rc == -1 {
            // EAGAIN (word changed), EINTR and ETIMEDOUT are all handled by
            // the caller re-checking the count and the deadline.
            let err = io::Error::last_os_error();
            if !matches!(
                err.raw_os_error(),
                Some(libc::EAGAIN) | Some(libc::EINTR) | Some(libc::ETIMEDOUT)
            ) {
                tracing::warn!(error = %err, "futex wait failed");
            }
        }
    }

    /// Wake one thread sleeping on the count word
    #[inline]
    fn futex_wake_one(&self) {
        // SAFETY: FUTEX_WAKE only inspects the address; it is valid for
        // the lifetime of self.
        unsafe {
            libc::syscall(
                libc::SYS_futex,
                self.count.as_ptr(),
                libc::FUTEX_WAKE | libc::FUTEX_PRIVATE_FLAG,
                1,
            );
        }
    }
}

impl Default for FutexGate {
    fn default() -> Self {
        Self::new()
    }
}

impl CountingGate for FutexGate {
    #[inline]
    fn release(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
        if self.sleepers.load(Ordering::SeqCst) > 0 {
            self.futex_wake_one();
        }
    }

    #[inline]
    fn try_acquire(&self) -> bool {
        let mut current = self.count.load(Ordering::Acquire);
        while current > 0 {
            match self.count.compare_exchange_weak(
                current,
                current - 1,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return true,
                Err(actual) => current = actual,
            }
        }
        false
    }

    fn acquire_timeout(&self, timeout: Option<Duration>) -> bool {
        let deadline = timeout.map(|t| Instant::now() + t);

        loop {
            if self.try_acquire() {
                return true;
            }

            let remaining = match deadline {
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        return false;
                    }
                    Some(deadline - now)
                }
                None => None,
            };

            self.sleepers.fetch_add(1, Ordering::SeqCst);
            if self.count.load(Ordering::SeqCst) == 0 {
                self.futex_wait(0, remaining);
            }
            self.sleepers.fetch_sub(1, Ordering::SeqCst);
        }
    }

    fn available(&self) -> usize {
        self.count.load(Ordering::Acquire) as usize
    }

    fn is_signal_safe(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "futex"
    }
}
