/*!
 * Resize Bridge Library
 * Turns terminal-resize signals into blocking, pollable consumer events
 */

pub mod api;
pub mod config;
pub mod core;
pub mod monitoring;
pub mod signals;

// Re-exports
pub use config::BridgeConfig;
pub use crate::core::errors::{BridgeError, BridgeResult};
pub use crate::core::sync::{GateConfig, Semaphore, StrategyType};
pub use monitoring::init_tracing;
pub use signals::{
    global_bridge, install_signal_handler, BridgeEvent, SignalBridge, WatchedSignal,
};
