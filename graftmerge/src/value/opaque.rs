//! Structured values that merge by replacement only.

use chrono::{DateTime, Utc};

use super::MapNode;

/// A structured value that is never decomposed during a merge.
///
/// Opaque nodes are carried through by reference from whichever side wins.
#[derive(Clone, Debug, PartialEq)]
pub enum Opaque {
    /// Point in time.
    Date(DateTime<Utc>),
    /// Regular-expression-like pattern.
    Pattern {
        /// Pattern body.
        source: String,
        /// Modifier flags.
        flags: String,
    },
    /// Instance of a named class. Its fields are preserved but never merged.
    Instance {
        /// Class name.
        class: String,
        /// Instance state.
        fields: MapNode,
    },
}

impl Opaque {
    /// Construct a pattern without flags.
    #[must_use]
    pub fn pattern(source: &str) -> Self {
        Self::Pattern {
            source: source.to_owned(),
            flags: String::new(),
        }
    }

    /// Construct an instance of `class` with the given fields.
    #[must_use]
    pub fn instance(class: &str, fields: MapNode) -> Self {
        Self::Instance {
            class: class.to_owned(),
            fields,
        }
    }

    /// Short type label used in logs and JSON export.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Date(_) => "date",
            Self::Pattern { .. } => "pattern",
            Self::Instance { .. } => "instance",
        }
    }
}
