//! # pk-factory
//!
//! Value factories that hand out fresh instances on demand and one lazily
//! created shared instance per factory.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// `Factory` trait and the `SharedFactory` implementation.
pub mod factory;

pub use factory::{Factory, SharedFactory};
pub use pk_core::{Error, Result, Shared};
