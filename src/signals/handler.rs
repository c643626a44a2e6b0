/*!
 * Signal Handler Registration
 * Process-wide bridge and the OS-level handler that feeds it
 */

use super::bridge::SignalBridge;
use super::types::WatchedSignal;
use crate::core::errors::{BridgeError, BridgeResult};
use crate::core::sync::GateConfig;
use nix::libc::c_int;
use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet};
use std::sync::{Arc, OnceLock};
use tracing::{info, warn};

/// Process-wide bridge, created once and kept for the process lifetime
static GLOBAL_BRIDGE: OnceLock<Arc<SignalBridge>> = OnceLock::new();

/// Get the process-wide bridge, creating it with signal-safe gates if needed
pub fn global_bridge() -> Arc<SignalBridge> {
    init_global(GateConfig::signal_safe())
}

/// Create the process-wide bridge with `config`
///
/// The first call wins; later calls return the existing bridge and ignore
/// their configuration.
pub fn init_global(config: GateConfig) -> Arc<SignalBridge> {
    let mut created = false;
    let bridge = GLOBAL_BRIDGE
        .get_or_init(|| {
            created = true;
            Arc::new(SignalBridge::new(config))
        })
        .clone();

    if created {
        info!(signal_safe = bridge.is_signal_safe(), "process-wide signal bridge created");
        if !bridge.is_signal_safe() {
            warn!("bridge gates are lock-based; releases from a signal handler may deadlock");
        }
    }
    bridge
}

/// OS-level handler: async-signal context, so no logging and no allocation
extern "C" fn handle_signal(_signum: c_int) {
    if let Some(bridge) = GLOBAL_BRIDGE.get() {
        bridge.notify_signal();
    }
}

/// Register the handler for the watched signal, replacing any previous one
///
/// Re-registering is harmless. The registration persists until the process
/// exits or `uninstall_signal_handler` runs.
pub fn install_signal_handler() -> BridgeResult<Arc<SignalBridge>> {
    let bridge = global_bridge();
    let signal = bridge.signal();

    let action = SigAction::new(
        SigHandler::Handler(handle_signal),
        SaFlags::SA_RESTART,
        SigSet::empty(),
    );
    set_action(signal, &action)?;

    info!(signal = %signal, "signal handler installed");
    Ok(bridge)
}

/// Restore the default disposition for the watched signal
pub fn uninstall_signal_handler() -> BridgeResult<()> {
    let signal = WatchedSignal::WindowResize;
    let action = SigAction::new(SigHandler::SigDfl, SaFlags::empty(), SigSet::empty());
    set_action(signal, &action)?;

    info!(signal = %signal, "signal handler removed");
    Ok(())
}

fn set_action(signal: WatchedSignal, action: &SigAction) -> BridgeResult<()> {
    // SAFETY: handle_signal only touches the OnceLock, atomics and the
    // gates' release. With futex gates (the Linux default) that is all
    // async-signal-safe. With condvar gates the release takes a
    // parking_lot::Mutex and can deadlock if the signal interrupts a thread
    // holding it; init_global warns when the bridge is built that way.
    unsafe { sigaction(signal.as_nix(), action) }
        .map(|_previous| ())
        .map_err(|source| BridgeError::HandlerInstall { signal, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(target_os = "linux")]
    fn test_global_bridge_is_signal_safe_by_default() {
        let bridge = global_bridge();
        assert!(bridge.is_signal_safe());
        assert!(Arc::ptr_eq(&bridge, &init_global(GateConfig::condvar())));
        assert!(init_global(GateConfig::condvar()).is_signal_safe());
    }
}
