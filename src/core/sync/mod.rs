/*!
 * Synchronization Primitives
 *
 * Counting gates used to hand signal occurrences and consumer wakeups
 * across threads:
 * - Futex-based (Linux) with an async-signal-safe release
 * - Condvar-based (cross-platform) for reliability
 *
 * # Architecture
 *
 * `Semaphore` is a cloneable handle over a `CountingGate` strategy chosen
 * from a `GateConfig` at construction time.
 */

mod condvar;
mod config;
#[cfg(target_os = "linux")]
mod futex;
mod gate;
mod traits;

pub use config::{GateConfig, StrategyType};
pub use gate::Semaphore;
pub use traits::CountingGate;

// Re-export specific strategies for advanced users
pub use condvar::CondvarGate;
#[cfg(target_os = "linux")]
pub use futex::FutexGate;
