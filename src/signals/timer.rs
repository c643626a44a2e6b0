/*!
 * Shutdown Timer
 * Detached thread that wakes the consumer once after a delay
 */

use crate::core::errors::{BridgeError, BridgeResult};
use crate::core::sync::Semaphore;
use std::thread;
use std::time::Duration;
use tracing::debug;

const TIMER_THREAD_NAME: &str = "shutdown-timer";

/// Fire-and-forget shutdown timer
///
/// Releases the wake gate exactly once after `delay`, without touching the
/// event gate, so the woken consumer reports `Quit`. Timers cannot be
/// cancelled and several may overlap; each one wakes the consumer once.
pub struct ShutdownTimer;

impl ShutdownTimer {
    /// Launch the timer thread and detach it
    pub fn spawn(wake: Semaphore, delay: Duration) -> BridgeResult<()> {
        thread::Builder::new()
            .name(TIMER_THREAD_NAME.to_string())
            .spawn(move || {
                thread::sleep(delay);
                debug!(delay_ms = delay.as_millis() as u64, "shutdown timer expired");
                wake.release();
            })
            .map_err(|source| BridgeError::ThreadSpawn {
                name: TIMER_THREAD_NAME,
                source,
            })?;

        // Dropping the JoinHandle detaches the thread
        Ok(())
    }
}
