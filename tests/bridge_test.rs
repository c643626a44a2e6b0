/*!
 * Signal Bridge Tests
 * Event-versus-wake decisions, bursts and shutdown timing
 */

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use resize_bridge::core::sync::GateConfig;
use resize_bridge::signals::{BridgeEvent, SignalBridge, WatchedSignal};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

const RESIZE: BridgeEvent = BridgeEvent::Signal(WatchedSignal::WindowResize);

fn configs() -> [GateConfig; 2] {
    [GateConfig::signal_safe(), GateConfig::condvar()]
}

proptest! {
    #[test]
    fn prop_paired_releases_always_report_signal(n in 1usize..64, condvar in any::<bool>()) {
        let config = if condvar { GateConfig::condvar() } else { GateConfig::signal_safe() };
        let bridge = SignalBridge::new(config);

        for _ in 0..n {
            bridge.notify_signal();
        }
        for _ in 0..n {
            prop_assert_eq!(bridge.poll_next_event(), RESIZE);
        }
        prop_assert_eq!(bridge.pending_events(), 0);
    }
}

#[test]
fn test_wake_without_event_reports_quit() {
    for config in configs() {
        let bridge = SignalBridge::new(config);
        bridge.request_shutdown();

        assert_eq!(bridge.poll_next_event(), BridgeEvent::Quit);
        assert_eq!(bridge.pending_events(), 0);

        // A later signal is still reported normally
        bridge.notify_signal();
        assert_eq!(bridge.poll_next_event(), RESIZE);
    }
}

#[test]
fn test_concurrent_burst_drains_exactly() {
    for config in configs() {
        let bridge = Arc::new(SignalBridge::new(config));

        let senders: Vec<_> = (0..4)
            .map(|_| {
                let bridge = bridge.clone();
                thread::spawn(move || {
                    for _ in 0..25 {
                        bridge.notify_signal();
                    }
                })
            })
            .collect();
        for sender in senders {
            sender.join().unwrap();
        }

        let mut signals = 0;
        let mut quits = 0;
        for _ in 0..100 {
            match bridge.poll_next_event() {
                BridgeEvent::Signal(_) => signals += 1,
                BridgeEvent::Quit => quits += 1,
            }
        }

        assert_eq!(signals, 100);
        assert_eq!(quits, 0);
        assert_eq!(bridge.pending_events(), 0);
        assert_eq!(bridge.poll_next_event_timeout(Duration::from_millis(50)), None);
    }
}

#[test]
fn test_burst_while_consumer_polls() {
    let bridge = Arc::new(SignalBridge::default());

    let consumer = {
        let bridge = bridge.clone();
        thread::spawn(move || {
            let mut signals = 0;
            loop {
                match bridge.poll_next_event() {
                    BridgeEvent::Signal(_) => signals += 1,
                    BridgeEvent::Quit => return signals,
                }
            }
        })
    };

    let senders: Vec<_> = (0..4)
        .map(|_| {
            let bridge = bridge.clone();
            thread::spawn(move || {
                for _ in 0..250 {
                    bridge.notify_signal();
                }
            })
        })
        .collect();
    for sender in senders {
        sender.join().unwrap();
    }
    bridge.request_shutdown();

    assert_eq!(consumer.join().unwrap(), 1_000);
    assert_eq!(bridge.pending_events(), 0);
}

#[test]
fn test_shutdown_timer_wakes_blocked_poll_after_delay() {
    const DELAY: Duration = Duration::from_millis(200);

    for config in configs() {
        let bridge = Arc::new(SignalBridge::new(config));

        let consumer = {
            let bridge = bridge.clone();
            thread::spawn(move || {
                let start = Instant::now();
                let event = bridge.poll_next_event();
                (event, start.elapsed())
            })
        };

        let scheduled = Instant::now();
        bridge.schedule_shutdown(DELAY).unwrap();

        let (event, _) = consumer.join().unwrap();
        let elapsed = scheduled.elapsed();

        assert_eq!(event, BridgeEvent::Quit);
        assert!(elapsed >= DELAY, "woke early after {:?}", elapsed);
        assert!(elapsed < DELAY + Duration::from_secs(2), "woke late after {:?}", elapsed);
        assert_eq!(bridge.stats().shutdowns_scheduled, 1);
    }
}

#[test]
fn test_multiple_timers_each_wake_once() {
    let bridge = SignalBridge::default();
    bridge.schedule_shutdown(Duration::from_millis(10)).unwrap();
    bridge.schedule_shutdown(Duration::from_millis(30)).unwrap();

    assert_eq!(bridge.poll_next_event(), BridgeEvent::Quit);
    assert_eq!(bridge.poll_next_event(), BridgeEvent::Quit);
    assert_eq!(bridge.poll_next_event_timeout(Duration::from_millis(100)), None);
}

#[cfg(feature = "async")]
#[tokio::test]
async fn test_async_poll() {
    let bridge = Arc::new(SignalBridge::default());
    bridge.notify_signal();
    assert_eq!(bridge.clone().poll_next_event_async().await, RESIZE);

    bridge.schedule_shutdown(Duration::from_millis(20)).unwrap();
    assert_eq!(bridge.clone().poll_next_event_async().await, BridgeEvent::Quit);
}
