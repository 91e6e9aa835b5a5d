//! Shared helpers for working with `figment::Jail` in tests.

use anyhow::{Result, anyhow};
use graftmerge::MergeOptions;

/// Executes `f` inside a [`figment::Jail`], returning the closure's output.
///
/// The jail is torn down once the closure completes, even when it fails.
///
/// # Errors
///
/// Returns an error if the jail initialisation fails or the closure returns a
/// [`figment::error::Error`].
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|j| {
        output = Some(f(j)?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}

/// Loads [`MergeOptions`] for `prefix` inside a jail after running `setup`.
///
/// Load failures are returned as the inner `Result` so callers can assert on
/// them.
///
/// # Errors
///
/// Returns an error when the jail itself or `setup` fails.
pub fn load_options_with<F>(prefix: &str, setup: F) -> Result<Result<MergeOptions>>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<()>,
{
    with_jail(|j| {
        setup(j)?;
        Ok(MergeOptions::load(prefix).map_err(|err| anyhow!(err.to_string())))
    })
}
