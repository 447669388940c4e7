//! Integration tests for the signal open/closed lifecycle.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use horizon_datepicker_core::{Signal, SignalError};

#[test]
fn test_observer_sees_no_emission_after_close() {
    let signal = Arc::new(Signal::<()>::new());
    let before = Arc::new(AtomicUsize::new(0));
    let after_close = Arc::new(AtomicUsize::new(0));

    let before_clone = before.clone();
    let after_clone = after_close.clone();
    let signal_for_slot = Arc::downgrade(&signal);
    signal.connect(move |_| {
        let closed = signal_for_slot
            .upgrade()
            .map(|s| s.is_closed())
            .unwrap_or(true);
        if closed {
            after_clone.fetch_add(1, Ordering::SeqCst);
        } else {
            before_clone.fetch_add(1, Ordering::SeqCst);
        }
    });

    signal.emit(());
    signal.close();
    signal.emit(());
    signal.emit(());

    assert_eq!(before.load(Ordering::SeqCst), 1);
    assert_eq!(after_close.load(Ordering::SeqCst), 0);
}

#[test]
fn test_close_from_slot() {
    let signal = Arc::new(Signal::<u32>::new());
    let received = Arc::new(AtomicUsize::new(0));

    let weak = Arc::downgrade(&signal);
    let received_clone = received.clone();
    signal.connect(move |&n| {
        received_clone.fetch_add(n as usize, Ordering::SeqCst);
        if let Some(signal) = weak.upgrade() {
            signal.close();
        }
    });

    signal.emit(5);
    signal.emit(7);

    assert_eq!(received.load(Ordering::SeqCst), 5);
    assert_eq!(signal.try_connect(|_| {}), Err(SignalError::Closed));
}

#[test]
fn test_blocked_then_closed() {
    let signal = Signal::<()>::new();
    signal.set_blocked(true);
    assert!(signal.close());
    signal.set_blocked(false);

    let count = Arc::new(AtomicUsize::new(0));
    let count_clone = count.clone();
    signal.connect(move |_| {
        count_clone.fetch_add(1, Ordering::SeqCst);
    });
    signal.emit(());

    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn test_close_from_slot_skips_remaining_slots() {
    let signal = Arc::new(Signal::<()>::new());
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));

    let weak = Arc::downgrade(&signal);
    let first_clone = first.clone();
    signal.connect(move |_| {
        first_clone.fetch_add(1, Ordering::SeqCst);
        if let Some(signal) = weak.upgrade() {
            signal.close();
        }
    });
    let second_clone = second.clone();
    signal.connect(move |_| {
        second_clone.fetch_add(1, Ordering::SeqCst);
    });

    signal.emit(());

    assert_eq!(first.load(Ordering::SeqCst), 1);
    assert_eq!(second.load(Ordering::SeqCst), 0);
    assert!(signal.is_closed());
}
