//! Merge options and their layered loading.
//!
//! Options are a plain serde record so they can come from anywhere Figment
//! can read. [`MergeOptions::load`] layers built-in defaults, an optional
//! `<prefix>.toml` file and `<PREFIX>_*` environment variables, in that order
//! of increasing precedence.

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::{MergeResult, MergeResultExt};

/// Normalize a prefix by trimming trailing underscores and converting
/// to lowercase ASCII.
#[must_use]
pub fn normalize_prefix(prefix: &str) -> String {
    prefix.trim_end_matches('_').to_ascii_lowercase()
}

/// Options recognised by [`crate::deep_merge`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeOptions {
    /// Concatenate sequences (target elements first) instead of letting the
    /// source sequence replace the target's contents. Applies at every depth.
    #[serde(alias = "mergeArrays")]
    pub merge_arrays: bool,
}

impl MergeOptions {
    /// Options with every setting at its default.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            merge_arrays: false,
        }
    }

    /// Return a copy with `merge_arrays` set to `enabled`.
    #[must_use]
    pub const fn with_merge_arrays(mut self, enabled: bool) -> Self {
        self.merge_arrays = enabled;
        self
    }

    /// Extract options from an arbitrary Figment.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MergeError::Options`] when the providers hold values
    /// of the wrong type.
    pub fn from_figment(figment: &Figment) -> MergeResult<Self> {
        figment.extract().into_merge()
    }

    /// Build the layered Figment used by [`MergeOptions::load`].
    ///
    /// The prefix is normalised with [`normalize_prefix`]; `"App_"` reads
    /// `app.toml` and `APP_*` variables.
    #[must_use]
    pub fn figment(prefix: &str) -> Figment {
        let name = normalize_prefix(prefix);
        let env_prefix = format!("{}_", name.to_ascii_uppercase());
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(format!("{name}.toml")))
            .merge(Env::prefixed(&env_prefix))
    }

    /// Load options from defaults, `<prefix>.toml` and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MergeError::Options`] when any layer cannot be parsed
    /// or holds values of the wrong type.
    pub fn load(prefix: &str) -> MergeResult<Self> {
        let options = Self::from_figment(&Self::figment(prefix))?;
        tracing::debug!(prefix, merge_arrays = options.merge_arrays, "loaded merge options");
        Ok(options)
    }
}
