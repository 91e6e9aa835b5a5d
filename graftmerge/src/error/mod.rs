//! Error types produced while loading options and exporting graphs.
//!
//! The merge engine itself is total and never fails; errors only arise at
//! the edges (option extraction and JSON export).

mod constructors;
mod types;

use std::sync::Arc;

pub use types::MergeError;

/// Result alias used throughout the crate.
///
/// Errors are shared behind an [`Arc`] so callers can fan a single failure
/// out to several consumers without cloning the underlying error.
pub type MergeResult<T> = Result<T, Arc<MergeError>>;

#[cfg(test)]
mod tests;
