//! Subject / Observer pattern.
//!
//! * A **Subject** owns a piece of state and a list of observers.
//! * Every call to [`Subject::set_state`] notifies each observer, in
//!   attachment order, with the new state and the one it replaced.
//!
//! Notification is plain synchronous fan-out on the caller's thread.  The
//! subject takes `&mut self` for every change, so sharing one between
//! threads needs the caller's own lock.

use std::fmt;
use std::sync::Arc;

use log::trace;

/// An object that reacts to state changes of a [`Subject`].
///
/// `update` takes `&self`; observers that record what they see use interior
/// mutability (`Mutex`, atomics).
pub trait Observer<T>: Send + Sync {
    /// Called after the subject's state changed from `prev_state` to `state`.
    fn update(&self, state: &T, prev_state: &T);
}

/// A piece of state plus the observers interested in it.
pub struct Subject<T> {
    observers: Vec<Arc<dyn Observer<T>>>,
    state: T,
}

impl<T: Default> Subject<T> {
    /// Create a subject with no observers and `T::default()` as its state.
    pub fn new() -> Self {
        Self::with_state(T::default())
    }
}

impl<T> Subject<T> {
    /// Create a subject with no observers and the given initial state.
    pub fn with_state(state: T) -> Self {
        Self {
            observers: Vec::new(),
            state,
        }
    }

    /// Append observers.  Passing none is a no-op.
    pub fn attach<I>(&mut self, observers: I)
    where
        I: IntoIterator<Item = Arc<dyn Observer<T>>>,
    {
        self.observers.extend(observers);
    }

    /// Remove an observer (by pointer equality of the `Arc`).
    ///
    /// Returns `true` if it was attached.
    pub fn detach(&mut self, observer: &Arc<dyn Observer<T>>) -> bool {
        let before = self.observers.len();
        self.observers.retain(|o| !Arc::ptr_eq(o, observer));
        self.observers.len() != before
    }

    /// Replace the state and notify every observer.
    pub fn set_state(&mut self, state: T) {
        let prev_state = std::mem::replace(&mut self.state, state);
        self.notify_all(&prev_state);
    }

    /// The current state.
    pub fn state(&self) -> &T {
        &self.state
    }

    /// Number of attached observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn notify_all(&self, prev_state: &T) {
        trace!("notifying {} observer(s)", self.observers.len());
        for observer in &self.observers {
            observer.update(&self.state, prev_state);
        }
    }
}

impl<T: Default> Default for Subject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Subject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subject")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        states: Mutex<Vec<(i32, i32)>>,
    }

    impl Observer<i32> for Recorder {
        fn update(&self, state: &i32, prev_state: &i32) {
            self.states.lock().unwrap().push((*state, *prev_state));
        }
    }

    #[test]
    fn new_subject_is_empty() {
        let s = Subject::<i32>::new();
        assert_eq!(*s.state(), 0);
        assert_eq!(s.observer_count(), 0);
    }

    #[test]
    fn attach_nothing() {
        let mut s = Subject::<i32>::new();
        s.attach(Vec::new());
        assert_eq!(s.observer_count(), 0);
        s.set_state(99);
        assert_eq!(*s.state(), 99);
    }

    #[test]
    fn set_state_notifies_with_previous() {
        let rec = Arc::new(Recorder::default());
        let mut s = Subject::<i32>::new();
        s.attach([rec.clone() as Arc<dyn Observer<i32>>]);

        s.set_state(42);
        s.set_state(-2);
        assert_eq!(*rec.states.lock().unwrap(), vec![(42, 0), (-2, 42)]);
    }

    #[test]
    fn detach_stops_notifications() {
        let rec = Arc::new(Recorder::default());
        let handle = rec.clone() as Arc<dyn Observer<i32>>;
        let mut s = Subject::<i32>::new();
        s.attach([Arc::clone(&handle)]);

        s.set_state(1);
        assert!(s.detach(&handle));
        assert!(!s.detach(&handle));
        s.set_state(2);
        assert_eq!(rec.states.lock().unwrap().len(), 1);
    }

    #[test]
    fn debug_shows_state() {
        let s = Subject::with_state(String::from("idle"));
        let shown = format!("{s:?}");
        assert!(shown.contains("idle"));
        assert!(shown.contains("observers: 0"));
    }
}
