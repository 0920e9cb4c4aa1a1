//! `LazyHolder<T>` — a value produced on first use and shared by every
//! caller afterwards.
//!
//! The internal mutex guards only the check and the commit.  A caller that
//! finds no value clones the factory, releases the lock and runs it.  When
//! it finishes it re-locks: if nobody committed in the meantime its value
//! is stored and the factory is released, otherwise its value is dropped
//! and the stored one is returned.  Concurrent first callers may therefore
//! each run the factory, but exactly one result is ever committed, and no
//! caller waits on another caller's factory.
//!
//! A failed or panicking factory leaves the holder untouched, so a later
//! call simply tries again.

use std::any::type_name;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, trace, warn};
use pk_core::errors::{BoxError, Error, Result};

/// Type-erased factory stored by a [`LazyHolder`].
pub type FactoryFn<T> = Arc<dyn Fn() -> std::result::Result<T, BoxError> + Send + Sync>;

struct Inner<T> {
    value: Option<Arc<T>>,
    factory: Option<FactoryFn<T>>,
}

/// A lazily initialised value shared across threads.
///
/// The factory is invoked by [`get`][Self::get] until one invocation
/// succeeds and is committed; every later call returns a clone of the same
/// `Arc<T>` and the factory is dropped.
///
/// # Example
/// ```
/// use pk_singleton::LazyHolder;
///
/// let answer = LazyHolder::new(|| 6 * 7);
/// assert!(!answer.is_initialized());
/// assert_eq!(*answer.get().unwrap(), 42);
/// assert!(answer.is_initialized());
/// ```
pub struct LazyHolder<T> {
    inner: Mutex<Inner<T>>,
}

impl<T> LazyHolder<T> {
    /// Create a holder around an infallible factory.
    ///
    /// The factory is stored but not invoked.
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        let factory: FactoryFn<T> = Arc::new(move || Ok::<T, BoxError>(factory()));
        Self::from_factory(Some(factory))
    }

    /// Create a holder around a factory that may fail.
    ///
    /// A failed attempt is reported as [`Error::FactoryFailure`] and leaves
    /// the holder ready for another attempt.
    pub fn try_new<F, E>(factory: F) -> Self
    where
        F: Fn() -> std::result::Result<T, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        let factory: FactoryFn<T> =
            Arc::new(move || -> std::result::Result<T, BoxError> { factory().map_err(Into::into) });
        Self::from_factory(Some(factory))
    }

    /// Create a holder from an optional, already type-erased factory.
    ///
    /// With `None`, every [`get`][Self::get] fails with
    /// [`Error::UninitializedFactory`].
    pub fn from_factory(factory: Option<FactoryFn<T>>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                value: None,
                factory,
            }),
        }
    }

    /// Create a holder with no factory.
    pub fn uninitialized() -> Self {
        Self::from_factory(None)
    }

    /// Return the shared value, running the factory if no value has been
    /// committed yet.
    ///
    /// # Errors
    /// * [`Error::UninitializedFactory`] if the holder has no factory.
    /// * [`Error::FactoryFailure`] if this call ran the factory and it
    ///   returned an error.
    ///
    /// # Panics
    /// A panic raised by the factory propagates to the caller that ran it.
    /// The holder is left as it was.
    pub fn get(&self) -> Result<Arc<T>> {
        let factory = {
            let inner = self.lock();
            if let Some(value) = &inner.value {
                return Ok(Arc::clone(value));
            }
            match &inner.factory {
                Some(factory) => Arc::clone(factory),
                None => return Err(Error::UninitializedFactory),
            }
        };

        let produced = match factory() {
            Ok(value) => Arc::new(value),
            Err(err) => {
                warn!("factory for {} failed: {err}", type_name::<T>());
                return Err(Error::factory_failure(err));
            }
        };

        let mut inner = self.lock();
        if let Some(committed) = &inner.value {
            trace!("discarding racing value for {}", type_name::<T>());
            return Ok(Arc::clone(committed));
        }
        inner.value = Some(Arc::clone(&produced));
        inner.factory = None;
        debug!("initialised {}", type_name::<T>());
        Ok(produced)
    }

    /// Return the committed value without ever running the factory.
    pub fn get_if_ready(&self) -> Option<Arc<T>> {
        self.lock().value.clone()
    }

    /// Return `true` once a value has been committed.
    pub fn is_initialized(&self) -> bool {
        self.lock().value.is_some()
    }

    // The mutex is never held across user code, so poisoning can only
    // come from a bug in this module; the state is still consistent.
    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Default for LazyHolder<T> {
    fn default() -> Self {
        Self::uninitialized()
    }
}

impl<T> fmt::Debug for LazyHolder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        let phase = if inner.value.is_some() {
            "ready"
        } else {
            "uninitialized"
        };
        f.debug_struct("LazyHolder")
            .field("type", &type_name::<T>())
            .field("phase", &phase)
            .field("has_factory", &inner.factory.is_some())
            .finish()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
