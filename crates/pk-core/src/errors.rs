//! Error types for patternkit.
//!
//! Every fallible operation in the workspace reports a single
//! `thiserror`-derived enum.  Factory errors keep their original source so
//! callers can downcast to the concrete type they returned.

use std::sync::Arc;

use thiserror::Error;

/// Boxed error accepted from user-supplied factories.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The top-level error type used throughout patternkit.
#[derive(Debug, Error, Clone)]
pub enum Error {
    /// `get` was called on a holder that has no factory to run.
    #[error("factory function is not set")]
    UninitializedFactory,

    /// The factory ran and returned an error.
    ///
    /// The holder stays uninitialized; a later call may try again.
    #[error("factory failed: {0}")]
    FactoryFailure(#[source] Arc<dyn std::error::Error + Send + Sync + 'static>),
}

impl Error {
    /// Wrap an error returned by a factory.
    pub fn factory_failure(err: impl Into<BoxError>) -> Self {
        Error::FactoryFailure(Arc::from(err.into()))
    }

    /// Return `true` for [`Error::UninitializedFactory`].
    pub fn is_uninitialized_factory(&self) -> bool {
        matches!(self, Error::UninitializedFactory)
    }

    /// Attempt to view the factory's own error as a concrete type.
    ///
    /// Returns `None` for [`Error::UninitializedFactory`] or when the source
    /// has a different type.
    pub fn factory_source<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            Error::FactoryFailure(source) => source.downcast_ref::<E>(),
            Error::UninitializedFactory => None,
        }
    }
}

/// Shorthand `Result` type used throughout patternkit.
pub type Result<T, E = Error> = std::result::Result<T, E>;
