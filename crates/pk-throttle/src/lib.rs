//! # pk-throttle
//!
//! Drop calls to a side-effecting function that arrive too soon after the
//! last one that went through.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// `Throttle` and the `throttle` closure helper.
pub mod throttle;

pub use throttle::{throttle, Throttle};
