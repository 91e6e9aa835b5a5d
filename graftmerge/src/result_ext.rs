//! Extensions for mapping errors to `MergeResult` concisely.
//!
//! These helpers reduce repetitive `.map_err(|e| Arc::new(e.into()))`
//! patterns when converting external error types into the crate's
//! `MergeResult<T>` alias (`Result<T, Arc<MergeError>>`).
//!
//! # Examples
//!
//! ```
//! use graftmerge::{MergeOptions, MergeResult, MergeResultExt};
//! use figment::{Figment, providers::Serialized};
//!
//! fn extract(figment: &Figment) -> MergeResult<MergeOptions> {
//!     // figment::Error implements Into<MergeError>
//!     figment.extract::<MergeOptions>().into_merge()
//! }
//!
//! let figment = Figment::from(Serialized::defaults(MergeOptions::default()));
//! assert!(!extract(&figment)?.merge_arrays);
//! # Ok::<_, std::sync::Arc<graftmerge::MergeError>>(())
//! ```

use std::sync::Arc;

use crate::{MergeError, MergeResult};

/// Generic extension for mapping any `Result<T, E>` with `E: Into<MergeError>`
/// into a `MergeResult<T>`.
pub trait MergeResultExt<T, E> {
    /// Convert `Result<T, E>` into `MergeResult<T>` using `Into<MergeError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into `Arc<MergeError>`.
    fn into_merge(self) -> MergeResult<T>;
}

impl<T, E> MergeResultExt<T, E> for Result<T, E>
where
    E: Into<MergeError>,
{
    fn into_merge(self) -> MergeResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}
