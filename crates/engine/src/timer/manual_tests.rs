#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use parking_lot::Mutex;
use std::sync::Arc;

fn recorder() -> (Arc<Mutex<Vec<(&'static str, u64)>>>, FakeClock) {
    (Arc::new(Mutex::new(Vec::new())), FakeClock::at_zero())
}

fn push(
    log: &Arc<Mutex<Vec<(&'static str, u64)>>>,
    clock: &FakeClock,
    label: &'static str,
) -> TimerCallback {
    let log = Arc::clone(log);
    let clock = clock.clone();
    Box::new(move || log.lock().push((label, clock.now_millis())))
}

#[test]
fn test_fires_at_due_time() {
    let (log, clock) = recorder();
    let timer = ManualTimer::with_clock(clock.clone());

    timer.schedule(Duration::from_millis(100), push(&log, &clock, "a"));

    assert_eq!(timer.advance(99), 0);
    assert!(log.lock().is_empty());
    assert_eq!(timer.advance(1), 1);
    assert_eq!(*log.lock(), vec![("a", 100)]);
    assert_eq!(clock.now_millis(), 100);
}

#[test]
fn test_fires_in_due_then_schedule_order() {
    let (log, clock) = recorder();
    let timer = ManualTimer::with_clock(clock.clone());

    timer.schedule(Duration::from_millis(300), push(&log, &clock, "late"));
    timer.schedule(Duration::from_millis(100), push(&log, &clock, "first"));
    timer.schedule(Duration::from_millis(100), push(&log, &clock, "second"));

    assert_eq!(timer.advance(1000), 3);
    assert_eq!(
        *log.lock(),
        vec![("first", 100), ("second", 100), ("late", 300)]
    );
    assert_eq!(clock.now_millis(), 1000);
}

#[test]
fn test_cancel_prevents_fire() {
    let (log, clock) = recorder();
    let timer = ManualTimer::with_clock(clock.clone());

    let handle = timer.schedule(Duration::from_millis(50), push(&log, &clock, "a"));
    assert!(timer.is_pending(handle));
    timer.cancel(handle);
    assert!(!timer.is_pending(handle));

    timer.advance(100);
    assert!(log.lock().is_empty());
    assert_eq!(timer.pending(), 0);
}

#[test]
fn test_cancel_after_fire_and_double_cancel_are_noops() {
    let (log, clock) = recorder();
    let timer = ManualTimer::with_clock(clock.clone());

    let fired = timer.schedule(Duration::from_millis(10), push(&log, &clock, "a"));
    let other = timer.schedule(Duration::from_millis(500), push(&log, &clock, "b"));
    timer.advance(10);

    timer.cancel(fired);
    timer.cancel(fired);
    assert!(timer.is_pending(other));
    assert_eq!(timer.pending(), 1);
}

#[test]
fn test_callback_can_schedule_follow_up() {
    let (log, clock) = recorder();
    let timer = ManualTimer::with_clock(clock.clone());

    let inner_timer = timer.clone();
    let inner_log = Arc::clone(&log);
    let inner_clock = clock.clone();
    timer.schedule(
        Duration::from_millis(100),
        Box::new(move || {
            inner_log.lock().push(("outer", inner_clock.now_millis()));
            let cb = push(&inner_log, &inner_clock, "inner");
            inner_timer.schedule(Duration::from_millis(50), cb);
        }),
    );

    assert_eq!(timer.advance(200), 2);
    assert_eq!(*log.lock(), vec![("outer", 100), ("inner", 150)]);
}

#[test]
fn test_zero_delay_fires_on_zero_advance() {
    let (log, clock) = recorder();
    let timer = ManualTimer::with_clock(clock.clone());

    timer.schedule(Duration::ZERO, push(&log, &clock, "now"));
    assert_eq!(timer.advance(0), 1);
}

#[test]
fn test_fire_next_jumps_clock() {
    let (log, clock) = recorder();
    let timer = ManualTimer::with_clock(clock.clone());

    timer.schedule(Duration::from_millis(4000), push(&log, &clock, "tick"));
    assert_eq!(timer.next_due_ms(), Some(4000));

    assert!(timer.fire_next());
    assert_eq!(*log.lock(), vec![("tick", 4000)]);
    assert!(!timer.fire_next());
    assert_eq!(timer.next_due_ms(), None);
}

#[test]
fn test_scheduled_total_counts_cancelled_handles() {
    let timer = ManualTimer::new();
    assert_eq!(timer.scheduled_total(), 0);

    let h = timer.schedule(Duration::from_millis(1), Box::new(|| {}));
    timer.cancel(h);
    timer.schedule(Duration::from_millis(1), Box::new(|| {}));

    assert_eq!(timer.scheduled_total(), 2);
    assert_eq!(timer.pending(), 1);
}

#[test]
fn test_handles_are_unique() {
    let timer = ManualTimer::new();
    let a = timer.schedule(Duration::from_millis(1), Box::new(|| {}));
    let b = timer.schedule(Duration::from_millis(1), Box::new(|| {}));
    assert_ne!(a, b);
}
