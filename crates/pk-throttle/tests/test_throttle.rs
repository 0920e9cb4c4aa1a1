//! Integration tests for `Throttle` timing and thread safety.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Barrier, Mutex};
use std::thread;
use std::time::Duration;

use pk_throttle::{throttle, Throttle};
use proptest::prelude::*;

#[test]
fn drops_inside_window_then_reopens() {
    let calls = AtomicU32::new(0);
    let delay = Duration::from_millis(50);
    let throttled = throttle(
        |_: ()| {
            calls.fetch_add(1, Ordering::SeqCst);
        },
        delay,
    );

    throttled(());
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    for _ in 0..10 {
        throttled(());
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    thread::sleep(delay * 2);
    throttled(());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn hundred_threads_one_call() {
    const THREADS: usize = 100;

    let calls = AtomicU32::new(0);
    let throttled = Throttle::new(
        |_: usize| {
            calls.fetch_add(1, Ordering::SeqCst);
        },
        Duration::from_secs(1),
    );
    let start = Barrier::new(THREADS);

    let accepted = thread::scope(|s| {
        (0..THREADS)
            .map(|i| {
                let (throttled, start) = (&throttled, &start);
                s.spawn(move || {
                    start.wait();
                    throttled.call(i)
                })
            })
            .collect::<Vec<_>>()
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|&ran| ran)
            .count()
    });

    assert_eq!(accepted, 1);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn spaced_calls_all_pass() {
    let seen = Mutex::new(Vec::new());
    let throttled = Throttle::new(|n: u8| seen.lock().unwrap().push(n), Duration::from_millis(10));
    for n in 0..3 {
        assert!(throttled.call(n));
        thread::sleep(Duration::from_millis(25));
    }
    assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2]);
}

proptest! {
    #[test]
    fn long_window_admits_exactly_one(args in proptest::collection::vec(any::<u16>(), 1..64)) {
        let seen = Mutex::new(Vec::new());
        let throttled = Throttle::new(|n: u16| seen.lock().unwrap().push(n), Duration::from_secs(3600));
        let accepted = args.iter().filter(|&&a| throttled.call(a)).count();
        prop_assert_eq!(accepted, 1);
        prop_assert_eq!(seen.lock().unwrap().clone(), vec![args[0]]);
    }

    #[test]
    fn zero_window_admits_everything(args in proptest::collection::vec(any::<u16>(), 0..64)) {
        let seen = Mutex::new(Vec::new());
        let throttled = Throttle::new(|n: u16| seen.lock().unwrap().push(n), Duration::ZERO);
        for &a in &args {
            prop_assert!(throttled.call(a));
        }
        prop_assert_eq!(seen.lock().unwrap().clone(), args);
    }
}
