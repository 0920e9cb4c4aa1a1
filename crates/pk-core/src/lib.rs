//! # pk-core
//!
//! Core types and error definitions for patternkit.
//!
//! This crate provides the building blocks shared by the other crates in
//! the workspace: the error hierarchy and the `Shared<T>` handle returned
//! by shared-instance factories.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::sync::{Arc, Mutex};

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `Result` alias.
pub mod errors;

// ── Shared handles ────────────────────────────────────────────────────────────

/// A thread-safe, shared, mutable handle to a single value.
///
/// Every clone points at the same allocation, so a write through one handle
/// is visible through all of them.
pub type Shared<T> = Arc<Mutex<T>>;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{BoxError, Error, Result};
