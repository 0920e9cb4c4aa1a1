//! # pk-observer
//!
//! A subject that fans state changes out to its observers.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// `Observer` trait and `Subject`.
pub mod subject;

pub use subject::{Observer, Subject};
