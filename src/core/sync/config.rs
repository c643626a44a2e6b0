/*!
 * Gate Configuration
 *
 * Runtime configuration for counting gate strategy selection
 */

use crate::core::errors::BridgeError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Strategy type selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyType {
    /// Atomic counter plus raw futex (Linux only, async-signal-safe release)
    Futex,
    /// Mutex plus condition variable (cross-platform)
    Condvar,
    /// Auto-select based on platform
    Auto,
}

impl FromStr for StrategyType {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "futex" => Ok(StrategyType::Futex),
            "condvar" => Ok(StrategyType::Condvar),
            "auto" => Ok(StrategyType::Auto),
            other => Err(BridgeError::InvalidConfig(format!(
                "unknown gate strategy '{}' (expected auto, futex or condvar)",
                other
            ))),
        }
    }
}

/// Counting gate configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateConfig {
    /// Preferred strategy
    pub strategy: StrategyType,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyType::Auto,
        }
    }
}

impl GateConfig {
    /// Configuration for gates released from signal-handler context
    pub const fn signal_safe() -> Self {
        Self {
            strategy: StrategyType::Auto,
        }
    }

    /// Plain mutex/condvar gates
    pub const fn condvar() -> Self {
        Self {
            strategy: StrategyType::Condvar,
        }
    }

    /// Resolve `Auto` and any strategy the platform cannot provide
    pub fn select_strategy(&self) -> StrategyType {
        match self.strategy {
            StrategyType::Auto | StrategyType::Futex => {
                // Prefer futex on Linux, condvar elsewhere
                #[cfg(target_os = "linux")]
                {
                    StrategyType::Futex
                }
                #[cfg(not(target_os = "linux"))]
                {
                    StrategyType::Condvar
                }
            }
            StrategyType::Condvar => StrategyType::Condvar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strategy() {
        assert_eq!("futex".parse::<StrategyType>().unwrap(), StrategyType::Futex);
        assert_eq!(" Condvar ".parse::<StrategyType>().unwrap(), StrategyType::Condvar);
        assert_eq!("AUTO".parse::<StrategyType>().unwrap(), StrategyType::Auto);
        assert!(matches!(
            "spin".parse::<StrategyType>(),
            Err(BridgeError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_condvar_is_never_rewritten() {
        assert_eq!(GateConfig::condvar().select_strategy(), StrategyType::Condvar);
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn test_auto_prefers_futex_on_linux() {
        assert_eq!(GateConfig::default().select_strategy(), StrategyType::Futex);
        assert_eq!(GateConfig::signal_safe().select_strategy(), StrategyType::Futex);
    }
}
