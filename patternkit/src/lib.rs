//! # patternkit
//!
//! Small, thread-safe building blocks: a lazily initialised value holder,
//! a factory with a shared instance, a subject/observer fan-out and a call
//! throttle.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `pk-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use patternkit::factory::{Factory, SharedFactory};
//! use patternkit::singleton::LazyHolder;
//!
//! let greeting = LazyHolder::new(|| String::from("hello"));
//! assert_eq!(greeting.get().unwrap().as_str(), "hello");
//!
//! let counters = SharedFactory::<u64>::new();
//! *counters.get_shared().unwrap().lock().unwrap() += 1;
//! assert_eq!(*counters.get_shared().unwrap().lock().unwrap(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and the `Shared<T>` handle.
pub use pk_core as core;

/// Lazily initialised value holder.
pub use pk_singleton as singleton;

/// Factories with a shared instance.
pub use pk_factory as factory;

/// Subject / observer notification.
pub use pk_observer as observer;

/// Call throttling.
pub use pk_throttle as throttle;

pub use pk_core::{Error, Result, Shared};
