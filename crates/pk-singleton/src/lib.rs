//! # pk-singleton
//!
//! A lazily initialised, thread-safe value holder.
//!
//! [`LazyHolder`] commits exactly one successful factory result, publishes
//! it to every caller as an `Arc<T>`, and lets a failed initialisation be
//! retried.  The holder carries no global state: sharing it across a
//! process is done by the caller, e.g. by putting it in a `static` or by
//! passing an `Arc<LazyHolder<T>>` around.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// `LazyHolder<T>` and its factory type.
pub mod holder;

pub use holder::{FactoryFn, LazyHolder};
pub use pk_core::{Error, Result};
