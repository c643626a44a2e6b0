/*!
 * Host Boundary Operations
 *
 * The four operations a host runtime binds to. Each one works on the
 * process-wide bridge and speaks the fixed wire payloads.
 */

use crate::core::errors::BridgeResult;
use crate::signals::{self, BridgeEvent};
use std::io::{self, Write};
use std::time::Duration;
use tracing::debug;

/// Install the window-resize handler (idempotent)
pub fn install_signal_handler() -> BridgeResult<()> {
    signals::install_signal_handler().map(|_| ())
}

/// Wake the consumer once after `delay_ms` milliseconds
///
/// Negative delays are treated as zero.
pub fn schedule_shutdown(delay_ms: i64) -> BridgeResult<()> {
    let delay = Duration::from_millis(delay_ms.max(0) as u64);
    signals::global_bridge().schedule_shutdown(delay)
}

/// Block for the next event and return its wire payload
///
/// Single consumer only: call this from one thread.
pub fn poll_next_event() -> String {
    let event: BridgeEvent = signals::global_bridge().poll_next_event();
    event.to_wire().to_string()
}

/// Write `text` to stdout unchanged and return it
pub fn echo_text(text: &str) -> BridgeResult<String> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    echo_text_to(&mut lock, text)
}

/// Write `text` to `out` unchanged, flush, and return it
pub fn echo_text_to<W: Write>(out: &mut W, text: &str) -> BridgeResult<String> {
    out.write_all(text.as_bytes())?;
    out.flush()?;
    debug!(bytes = text.len(), "echoed text");
    Ok(text.to_owned())
}
