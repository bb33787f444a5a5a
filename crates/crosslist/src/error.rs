use std::fmt;

use crate::model::{GroupKey, InconsistentGroup};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    /// No listings were given to merge.
    EmptyInput,
    /// A listing does not belong to the group's (year, course_id).
    MixedGroup { expected: GroupKey, found: GroupKey },
    /// Listings of one group disagree on a field that must be shared.
    InconsistentGroup(InconsistentGroup),
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (empty name, empty year filter, etc.).
    ConfigValidation(String),
    /// JSON serialization error.
    Json(String),
    /// IO error (file read, etc.).
    Io(String),
}

impl fmt::Display for MergeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "no course listings to merge"),
            Self::MixedGroup { expected, found } => {
                write!(f, "listing {found} does not belong to group {expected}")
            }
            Self::InconsistentGroup(group) => write!(f, "{group}"),
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::Json(msg) => write!(f, "JSON error: {msg}"),
            Self::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for MergeError {}

impl From<InconsistentGroup> for MergeError {
    fn from(group: InconsistentGroup) -> Self {
        Self::InconsistentGroup(group)
    }
}
