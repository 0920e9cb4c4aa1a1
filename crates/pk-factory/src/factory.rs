//! `Factory` trait and `SharedFactory`.
//!
//! A factory answers two questions: "give me a new `T`" ([`Factory::create`])
//! and "give me *the* `T`" ([`Factory::get_shared`]).  The shared instance
//! lives behind a [`LazyHolder`], so it is only built when first requested
//! and every caller receives a handle to the same allocation.

use std::fmt;
use std::sync::Mutex;

use log::trace;
use pk_core::{errors::Result, Shared};
use pk_singleton::LazyHolder;

/// Produces independent instances of `T` and owns one shared instance.
pub trait Factory<T> {
    /// Return a brand-new instance, unrelated to any other.
    fn create(&self) -> T;

    /// Return a handle to this factory's shared instance, building it on
    /// first use.
    fn get_shared(&self) -> Result<Shared<T>>;
}

/// A [`Factory`] whose instances start from `T::default()`.
///
/// Each `SharedFactory` owns its own holder: two factories, even for the
/// same `T`, never share an instance.
///
/// # Example
/// ```
/// use pk_factory::{Factory, SharedFactory};
///
/// let factory = SharedFactory::<i32>::new();
/// assert_eq!(factory.create(), 0);
///
/// let shared = factory.get_shared().unwrap();
/// *shared.lock().unwrap() = 7;
/// assert_eq!(*factory.get_shared().unwrap().lock().unwrap(), 7);
/// assert_eq!(factory.create(), 0);
/// ```
pub struct SharedFactory<T> {
    shared: LazyHolder<Mutex<T>>,
}

impl<T: Default + 'static> SharedFactory<T> {
    /// Create a factory.  The shared instance is not built yet.
    pub fn new() -> Self {
        Self {
            shared: LazyHolder::new(|| Mutex::new(T::default())),
        }
    }
}

impl<T> SharedFactory<T> {
    /// Return `true` once the shared instance has been built.
    pub fn has_shared(&self) -> bool {
        self.shared.is_initialized()
    }
}

impl<T: Default + 'static> Default for SharedFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default> Factory<T> for SharedFactory<T> {
    fn create(&self) -> T {
        T::default()
    }

    fn get_shared(&self) -> Result<Shared<T>> {
        trace!("shared instance of {} requested", std::any::type_name::<T>());
        self.shared.get()
    }
}

impl<T> fmt::Debug for SharedFactory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedFactory")
            .field("shared", &self.shared)
            .finish()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
