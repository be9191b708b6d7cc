#![deny(unsafe_code)]

pub mod config;
pub mod constants;
pub mod error;
pub mod registry;
pub mod version;

pub use crate::config::{RulesConfig, load_rules_config};
pub use crate::error::{ConfigurationError, Result};
pub use crate::registry::{FilenameRule, RuleConstantsRegistry, VersionRules};
pub use crate::version::ReportingVersion;
