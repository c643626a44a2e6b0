/*!
 * Resize Listener
 * Dedicated consumer thread that drains the bridge until shutdown
 */

use super::bridge::SignalBridge;
use super::types::BridgeEvent;
use super::winsize::{window_size, WindowSize};
use crate::core::errors::{BridgeError, BridgeResult};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, info};

const LISTENER_THREAD_NAME: &str = "resize-listener";

/// What the listener saw before it stopped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListenerSummary {
    pub resizes: u64,
}

/// Poll `bridge` on the current thread until it reports `Quit`
///
/// `on_resize` runs once per consumed signal with the terminal size read
/// right after the event, if stdout is a terminal.
pub fn run_listener<F>(bridge: &SignalBridge, mut on_resize: F) -> ListenerSummary
where
    F: FnMut(Option<WindowSize>),
{
    let mut summary = ListenerSummary::default();

    loop {
        match bridge.poll_next_event() {
            BridgeEvent::Signal(signal) => {
                summary.resizes += 1;
                let size = window_size();
                debug!(signal = %signal, ?size, "resize delivered to listener");
                on_resize(size);
            }
            BridgeEvent::Quit => break,
        }
    }

    info!(resizes = summary.resizes, "resize listener stopped");
    summary
}

/// Run `run_listener` on a named thread
///
/// This thread is the bridge's single consumer; nothing else may poll the
/// same bridge while it runs.
pub fn spawn_listener<F>(
    bridge: Arc<SignalBridge>,
    on_resize: F,
) -> BridgeResult<JoinHandle<ListenerSummary>>
where
    F: FnMut(Option<WindowSize>) + Send + 'static,
{
    thread::Builder::new()
        .name(LISTENER_THREAD_NAME.to_string())
        .spawn(move || run_listener(&bridge, on_resize))
        .map_err(|source| BridgeError::ThreadSpawn {
            name: LISTENER_THREAD_NAME,
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::Duration;

    #[test]
    fn test_listener_counts_resizes_until_quit() {
        let bridge = Arc::new(SignalBridge::default());
        let seen = Arc::new(AtomicU64::new(0));

        let handle = {
            let seen = seen.clone();
            spawn_listener(bridge.clone(), move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap()
        };

        for _ in 0..3 {
            bridge.notify_signal();
        }
        bridge.schedule_shutdown(Duration::from_millis(50)).unwrap();

        let summary = handle.join().unwrap();
        assert_eq!(summary.resizes, 3);
        assert_eq!(seen.load(Ordering::SeqCst), 3);
        assert_eq!(bridge.pending_events(), 0);
    }
}
