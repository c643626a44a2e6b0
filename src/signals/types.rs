/*!
 * Signal Types
 * Watched signal, consumer events and their wire encoding
 */

use crate::core::errors::BridgeResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Payload returned when a genuine signal was consumed
pub const SIGNAL_PAYLOAD: &str = r#"{"SIGNAL": "WINDOW_RESIZE"}"#;

/// Payload returned when the consumer was woken to shut down
pub const QUIT_PAYLOAD: &str = r#"{"EVENT": "QUIT"}"#;

/// The signal kind bridged into consumer events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WatchedSignal {
    /// Terminal window size changed (SIGWINCH)
    #[serde(rename = "WINDOW_RESIZE")]
    WindowResize,
}

impl WatchedSignal {
    /// OS signal number this kind is registered for
    pub const fn as_nix(self) -> nix::sys::signal::Signal {
        match self {
            WatchedSignal::WindowResize => nix::sys::signal::Signal::SIGWINCH,
        }
    }

    /// Conventional signal name
    pub const fn name(self) -> &'static str {
        match self {
            WatchedSignal::WindowResize => "SIGWINCH",
        }
    }
}

impl fmt::Display for WatchedSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of one blocking poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "WireEvent", from = "WireEvent")]
pub enum BridgeEvent {
    /// A signal occurrence was pending and has been consumed
    Signal(WatchedSignal),
    /// Woken with nothing pending: the consumer should shut down
    Quit,
}

impl BridgeEvent {
    /// Fixed wire payload for this event
    pub const fn to_wire(self) -> &'static str {
        match self {
            BridgeEvent::Signal(WatchedSignal::WindowResize) => SIGNAL_PAYLOAD,
            BridgeEvent::Quit => QUIT_PAYLOAD,
        }
    }

    /// Parse a wire payload back into an event
    pub fn from_wire(payload: &str) -> BridgeResult<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Whether the consumer loop should stop
    pub const fn is_quit(self) -> bool {
        matches!(self, BridgeEvent::Quit)
    }
}

impl fmt::Display for BridgeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_wire())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum Lifecycle {
    #[serde(rename = "QUIT")]
    Quit,
}

/// Externally tagged shape of the two payloads
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
enum WireEvent {
    #[serde(rename = "SIGNAL")]
    Signal(WatchedSignal),
    #[serde(rename = "EVENT")]
    Event(Lifecycle),
}

impl From<BridgeEvent> for WireEvent {
    fn from(event: BridgeEvent) -> Self {
        match event {
            BridgeEvent::Signal(signal) => WireEvent::Signal(signal),
            BridgeEvent::Quit => WireEvent::Event(Lifecycle::Quit),
        }
    }
}

impl From<WireEvent> for BridgeEvent {
    fn from(wire: WireEvent) -> Self {
        match wire {
            WireEvent::Signal(signal) => BridgeEvent::Signal(signal),
            WireEvent::Event(Lifecycle::Quit) => BridgeEvent::Quit,
        }
    }
}

/// Bridge statistics snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeStats {
    pub signals_received: u64,
    pub signal_events: u64,
    pub quit_events: u64,
    pub shutdowns_scheduled: u64,
}
