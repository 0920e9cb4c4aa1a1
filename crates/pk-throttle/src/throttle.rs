//! Leading-edge throttle.
//!
//! The first call runs immediately.  Calls that arrive while it is running,
//! or within `delay` after it returned, are dropped (not queued).  The first
//! call after that runs and starts the cycle again.

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

use log::trace;

#[derive(Debug, Clone, Copy)]
enum Gate {
    Closed,
    Running,
    /// The last accepted call returned at this instant.
    Cooling(Instant),
}

/// Wraps a function so that calls closer than `delay` to the end of the
/// previous accepted call are dropped.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use pk_throttle::Throttle;
///
/// let throttled = Throttle::new(|n: u32| println!("tick {n}"), Duration::from_secs(60));
/// assert!(throttled.call(1));
/// assert!(!throttled.call(2));
/// ```
pub struct Throttle<F> {
    f: F,
    delay: Duration,
    gate: Mutex<Gate>,
}

impl<F> Throttle<F> {
    /// Wrap `f`.  The first call always goes through.
    pub fn new(f: F, delay: Duration) -> Self {
        Self {
            f,
            delay,
            gate: Mutex::new(Gate::Closed),
        }
    }

    /// The minimum spacing between the end of an accepted call and the
    /// next accepted call.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Invoke the wrapped function with `arg` unless the gate is busy.
    ///
    /// Returns `true` if the function ran.  The gate decision is made under
    /// the internal lock, but the function itself runs after the lock is
    /// released.  The delay window starts once the function returns; if it
    /// panics the gate is left closed.
    pub fn call<A>(&self, arg: A) -> bool
    where
        F: Fn(A),
    {
        if !self.try_enter() {
            trace!("throttled call dropped");
            return false;
        }
        let _cooldown = Cooldown { throttle: self };
        (self.f)(arg);
        true
    }

    fn try_enter(&self) -> bool {
        let mut gate = self.lock();
        let open = match *gate {
            Gate::Closed => true,
            Gate::Running => false,
            Gate::Cooling(since) => since.elapsed() >= self.delay,
        };
        if open {
            *gate = Gate::Running;
        }
        open
    }

    fn lock(&self) -> MutexGuard<'_, Gate> {
        self.gate.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Starts the delay window when the accepted call ends.
struct Cooldown<'a, F> {
    throttle: &'a Throttle<F>,
}

impl<F> Drop for Cooldown<'_, F> {
    fn drop(&mut self) {
        *self.throttle.lock() = if thread::panicking() {
            Gate::Closed
        } else {
            Gate::Cooling(Instant::now())
        };
    }
}

impl<F> fmt::Debug for Throttle<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Throttle")
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

/// Return a throttled version of `f` as a plain closure.
///
/// Equivalent to [`Throttle::call`] with the return value discarded.
pub fn throttle<A, F>(f: F, delay: Duration) -> impl Fn(A)
where
    F: Fn(A),
{
    let throttled = Throttle::new(f, delay);
    move |arg| {
        throttled.call(arg);
    }
}
