/*!
 * Resize Bridge - Main Entry Point
 *
 * Installs the window-resize handler and prints one wire payload per
 * polled event until the bridge reports QUIT.
 */

use miette::IntoDiagnostic;
use std::io::Write;
use tracing::info;

use resize_bridge::{init_tracing, signals, BridgeConfig, BridgeEvent};

fn main() -> miette::Result<()> {
    let config = BridgeConfig::from_env()?;
    init_tracing(config.trace_json);

    info!(gate = ?config.gate.strategy, "resize bridge starting");

    let bridge = signals::init_global(config.gate);
    signals::install_signal_handler()?;

    if let Some(delay) = config.shutdown_after {
        bridge.schedule_shutdown(delay)?;
    }

    info!("waiting for window resize events");
    let stdout = std::io::stdout();
    loop {
        let event = bridge.poll_next_event();
        {
            let mut out = stdout.lock();
            writeln!(out, "{}", event.to_wire()).into_diagnostic()?;
            out.flush().into_diagnostic()?;
        }
        if let BridgeEvent::Signal(_) = event {
            if let Some(size) = signals::window_size() {
                info!(rows = size.rows, cols = size.cols, "terminal resized");
            }
        } else {
            break;
        }
    }

    signals::uninstall_signal_handler()?;
    info!(stats = ?bridge.stats(), "resize bridge stopped");
    Ok(())
}
