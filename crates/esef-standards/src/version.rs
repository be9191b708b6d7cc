//! Reporting-framework versions.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigurationError;

/// ESEF reporting-framework version, selecting the mandatory-element table
/// and the namespace set that apply to a filing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReportingVersion {
    /// RTS on ESEF as applied to 2020 annual reports.
    Esef2020,
    /// RTS amendment adding notes block tagging, applied from 2022.
    Esef2022,
}

impl ReportingVersion {
    pub const fn all() -> &'static [Self] {
        &[Self::Esef2020, Self::Esef2022]
    }

    /// Version identifier as accepted on input ("2020", "2022").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Esef2020 => "2020",
            Self::Esef2022 => "2022",
        }
    }

    /// Parse a version identifier; anything unrecognised is a configuration error.
    pub fn parse(s: &str) -> Result<Self, ConfigurationError> {
        let normalized = s.trim().to_lowercase();
        match normalized.strip_prefix("esef-").unwrap_or(normalized.as_str()) {
            "2020" => Ok(Self::Esef2020),
            "2022" => Ok(Self::Esef2022),
            _ => Err(ConfigurationError::unknown_version(s)),
        }
    }
}

impl fmt::Display for ReportingVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportingVersion {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
