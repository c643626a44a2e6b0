/*!
 * Error Types
 * Centralized error handling with thiserror and miette
 */

use crate::signals::WatchedSignal;
use miette::Diagnostic;
use thiserror::Error;

/// Result type for bridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Bridge errors with miette diagnostics
///
/// Waking up without a pending signal is not an error; it is reported as
/// `BridgeEvent::Quit`.
#[derive(Error, Debug, Diagnostic)]
pub enum BridgeError {
    #[error("Failed to install handler for {signal}: {source}")]
    #[diagnostic(
        code(signals::install_failed),
        help("sigaction(2) rejected the registration. Check that the signal is catchable on this platform.")
    )]
    HandlerInstall {
        signal: WatchedSignal,
        #[source]
        source: nix::errno::Errno,
    },

    #[error("Failed to spawn {name} thread: {source}")]
    #[diagnostic(
        code(runtime::thread_spawn_failed),
        help("The OS refused to create a thread. Check process thread limits.")
    )]
    ThreadSpawn {
        name: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Output error: {0}")]
    #[diagnostic(
        code(io::output_failed),
        help("Writing to the output stream failed. The stream may be closed.")
    )]
    Output(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    #[diagnostic(
        code(config::invalid),
        help("Review the RESIZE_BRIDGE_* environment variables.")
    )]
    InvalidConfig(String),

    #[error("Malformed event payload: {0}")]
    #[diagnostic(
        code(wire::malformed_payload),
        help("Expected {{\"SIGNAL\": \"WINDOW_RESIZE\"}} or {{\"EVENT\": \"QUIT\"}}.")
    )]
    MalformedPayload(#[from] serde_json::Error),
}
