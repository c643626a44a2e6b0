/*!
 * Configuration
 * Defaults overridden by RESIZE_BRIDGE_* environment variables
 */

use crate::core::errors::{BridgeError, BridgeResult};
use crate::core::sync::{GateConfig, StrategyType};
use std::time::Duration;

pub const ENV_GATE: &str = "RESIZE_BRIDGE_GATE";
pub const ENV_SHUTDOWN_MS: &str = "RESIZE_BRIDGE_SHUTDOWN_MS";
pub const ENV_TRACE_JSON: &str = "RESIZE_BRIDGE_TRACE_JSON";

/// Runtime configuration for the bridge binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Gate strategy for the process-wide bridge
    pub gate: GateConfig,
    /// Self-scheduled shutdown after startup, if any
    pub shutdown_after: Option<Duration>,
    /// Emit JSON logs
    pub trace_json: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            gate: GateConfig::signal_safe(),
            shutdown_after: None,
            trace_json: false,
        }
    }
}

impl BridgeConfig {
    /// Load from the process environment
    pub fn from_env() -> BridgeResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup (the environment in production)
    pub fn from_lookup<F>(lookup: F) -> BridgeResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_GATE) {
            config.gate.strategy = value.parse::<StrategyType>()?;
        }

        if let Some(value) = lookup(ENV_SHUTDOWN_MS) {
            let ms = value.trim().parse::<u64>().map_err(|e| {
                BridgeError::InvalidConfig(format!("{}='{}': {}", ENV_SHUTDOWN_MS, value, e))
            })?;
            config.shutdown_after = Some(Duration::from_millis(ms));
        }

        if let Some(value) = lookup(ENV_TRACE_JSON) {
            config.trace_json = value == "1" || value.eq_ignore_ascii_case("true");
        }

        Ok(config)
    }
}
