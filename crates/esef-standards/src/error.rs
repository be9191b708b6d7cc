//! Error types for rule configuration.

use std::path::PathBuf;

use esef_model::LinkbaseRole;
use thiserror::Error;

/// Fatal configuration problems. A run that hits one returns no diagnostics.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigurationError {
    #[error("unknown linkbase role: {role}")]
    UnknownRole { role: String },

    #[error("unknown reporting-framework version: {version}")]
    UnknownVersion { version: String },

    #[error("no filename rule registered for linkbase role {role}")]
    MissingRole { role: LinkbaseRole },

    #[error("duplicate filename rule for linkbase role {role}")]
    DuplicateRole { role: LinkbaseRole },

    #[error("invalid rule pattern {pattern}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("unknown rule id in severity overrides: {rule_id}")]
    UnknownRuleId { rule_id: String },

    #[error("invalid severity '{value}' for rule {rule_id}")]
    InvalidSeverity { rule_id: String, value: String },

    #[error("failed to read rules config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse rules config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigurationError {
    pub(crate) fn unknown_role(role: impl Into<String>) -> Self {
        Self::UnknownRole { role: role.into() }
    }

    pub(crate) fn unknown_version(version: impl Into<String>) -> Self {
        Self::UnknownVersion {
            version: version.into(),
        }
    }
}

/// Result type for rule configuration operations.
pub type Result<T> = std::result::Result<T, ConfigurationError>;
