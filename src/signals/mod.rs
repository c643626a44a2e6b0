/*!
 * Signals Module
 * Bridges terminal-resize signals into blocking consumer events
 */

mod atomic_stats;
mod bridge;
mod handler;
mod listener;
mod timer;
pub mod types;
mod winsize;

// Re-export public API
pub use atomic_stats::AtomicBridgeStats;
pub use bridge::SignalBridge;
pub use handler::{global_bridge, init_global, install_signal_handler, uninstall_signal_handler};
pub use listener::{run_listener, spawn_listener, ListenerSummary};
pub use timer::ShutdownTimer;
pub use types::{BridgeEvent, BridgeStats, WatchedSignal, QUIT_PAYLOAD, SIGNAL_PAYLOAD};
pub use winsize::{window_size, window_size_of, WindowSize};
