//! Test helpers shared across crates.
//!
//! This crate provides graph snapshots for non-mutation checks, builders for
//! cyclic fixtures and a `figment::Jail` wrapper for option-loading tests.

pub mod fixtures;
pub mod jail;
pub mod snapshot;
