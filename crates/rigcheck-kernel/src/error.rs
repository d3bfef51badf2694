//! Error types for rigcheck kernel operations.
//!
//! Only caller-input defects are errors. Data-quality problems inside a
//! build (missing specification keys, malformed rule data, unknown rule
//! types) are reported as non-blocking findings instead.

use crate::part::PartId;
use crate::rule::RuleId;

/// A caller-input defect. The caller must fix the request; retrying with the
/// same input yields the same error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// The same part identifier appears more than once in the input set.
    #[error("duplicate part id {id} in build")]
    DuplicatePart { id: PartId },

    /// A rule is structurally unusable (empty category or type tag).
    #[error("invalid rule {id}: {reason}")]
    InvalidRule { id: RuleId, reason: String },

    /// A part's specification value has the wrong kind for its category.
    #[error("invalid specifications for {part_type}: `{key}`: {reason}")]
    InvalidSpecification {
        part_type: String,
        key: String,
        reason: String,
    },

    /// The specification schema for a category could not be compiled.
    #[error("invalid specification schema for {part_type}: {reason}")]
    Schema { part_type: String, reason: String },
}

/// Failure to load or accept an engine configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid toml at {path}: {source}")]
    ParseToml {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}
