//! External rule configuration (TOML).
//!
//! Every key is optional; an empty file reproduces the built-in constants.
//!
//! ```toml
//! max_image_length = 5242880
//! extra_disallowed_uri_patterns = ["http://example\\.com/taxonomy/.*\\.xsd"]
//! extra_esef_namespaces = ["http://www.esma.europa.eu/taxonomy/20"]
//!
//! [severity]
//! "ESEF-NS-002" = "warning"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, Result};

/// Overrides applied on top of the built-in rule constants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RulesConfig {
    /// Replaces the 5 MiB embedded image limit.
    pub max_image_length: Option<u64>,
    /// Additional regexes matched against the whole reference URI.
    pub extra_disallowed_uri_patterns: Vec<String>,
    /// Additional ESEF namespace prefixes, applied to every version.
    pub extra_esef_namespaces: Vec<String>,
    /// Severity per rule ID ("violation" or "warning").
    pub severity: BTreeMap<String, String>,
}

/// Read a rules configuration file.
pub fn load_rules_config(path: &Path) -> Result<RulesConfig> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigurationError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_rules_config(&contents, path)
}

/// Parse configuration text; `origin` is only used in error messages.
pub fn parse_rules_config(contents: &str, origin: &Path) -> Result<RulesConfig> {
    toml::from_str(contents).map_err(|source| ConfigurationError::Toml {
        path: origin.to_path_buf(),
        source,
    })
}
