//! Type-safe enumerations for ESEF rule evaluation.
//!
//! # ESEF Reporting Manual Reference
//!
//! - Linkbase file naming: Guidance 2.6.1 (extension taxonomy file structure)
//! - Severity follows the regulator's split between blocking errors and warnings

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Linkbase role, one per XBRL 2.1 relationship category.
///
/// Each role carries a short code used in linkbase file names
/// (`acme-2021-12-31_cal.xml`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkbaseRole {
    /// Calculation linkbase (`_cal`).
    Calculation,
    /// Definition linkbase (`_def`), carries dimensional relationships.
    Definition,
    /// Label linkbase (`_lab-<lang>`), one file per language.
    Label,
    /// Presentation linkbase (`_pre`).
    Presentation,
    /// Reference linkbase (`_ref`).
    Reference,
}

impl LinkbaseRole {
    /// All roles in declaration order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Calculation,
            Self::Definition,
            Self::Label,
            Self::Presentation,
            Self::Reference,
        ]
    }

    /// Returns the lowercase role name.
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkbaseRole::Calculation => "calculation",
            LinkbaseRole::Definition => "definition",
            LinkbaseRole::Label => "label",
            LinkbaseRole::Presentation => "presentation",
            LinkbaseRole::Reference => "reference",
        }
    }

    /// Returns the short code used in file name suffixes.
    pub fn code(&self) -> &'static str {
        match self {
            LinkbaseRole::Calculation => "cal",
            LinkbaseRole::Definition => "def",
            LinkbaseRole::Label => "lab",
            LinkbaseRole::Presentation => "pre",
            LinkbaseRole::Reference => "ref",
        }
    }

    /// Returns the XBRL 2.1 `linkbaseRef` role URI for this role.
    pub fn linkbase_ref_role(&self) -> &'static str {
        match self {
            LinkbaseRole::Calculation => "http://www.xbrl.org/2003/role/calculationLinkbaseRef",
            LinkbaseRole::Definition => "http://www.xbrl.org/2003/role/definitionLinkbaseRef",
            LinkbaseRole::Label => "http://www.xbrl.org/2003/role/labelLinkbaseRef",
            LinkbaseRole::Presentation => "http://www.xbrl.org/2003/role/presentationLinkbaseRef",
            LinkbaseRole::Reference => "http://www.xbrl.org/2003/role/referenceLinkbaseRef",
        }
    }

    /// Map a `linkbaseRef` role URI back to its role.
    pub fn from_linkbase_ref_role(uri: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|role| role.linkbase_ref_role() == uri.trim())
    }

    /// True when files of this role carry a language subtag.
    pub fn requires_language(&self) -> bool {
        matches!(self, LinkbaseRole::Label)
    }
}

impl fmt::Display for LinkbaseRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LinkbaseRole {
    type Err = String;

    /// Accepts full names and short codes (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();

        match normalized.as_str() {
            "calculation" | "cal" => Ok(LinkbaseRole::Calculation),
            "definition" | "def" => Ok(LinkbaseRole::Definition),
            "label" | "lab" => Ok(LinkbaseRole::Label),
            "presentation" | "pre" => Ok(LinkbaseRole::Presentation),
            "reference" | "ref" => Ok(LinkbaseRole::Reference),
            _ => Err(format!("Unknown linkbase role: {s}")),
        }
    }
}

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Non-compliant; the filing breaks a regulator rule.
    Violation,
    /// Should review.
    Warning,
}

impl Severity {
    /// Parse severity from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "violation" | "error" => Some(Self::Violation),
            "warning" => Some(Self::Warning),
            _ => None,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Violation => "Violation",
            Self::Warning => "Warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rule category. The declaration order is the primary sort key of a run's
/// diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RuleCategory {
    Filename,
    Namespace,
    MandatoryTags,
    Dimensional,
    EmbeddedResources,
}

impl RuleCategory {
    /// Get all rule categories.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Filename,
            Self::Namespace,
            Self::MandatoryTags,
            Self::Dimensional,
            Self::EmbeddedResources,
        ]
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Filename => "Filename",
            Self::Namespace => "Namespace",
            Self::MandatoryTags => "Mandatory Tags",
            Self::Dimensional => "Dimensional",
            Self::EmbeddedResources => "Embedded Resources",
        }
    }

    /// Description for reports.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Filename => "Linkbase file naming conventions",
            Self::Namespace => "Taxonomy reference and namespace checks",
            Self::MandatoryTags => "Mandatory disclosure coverage",
            Self::Dimensional => "Dimensional arcrole and linkrole checks",
            Self::EmbeddedResources => "Embedded image size and hidden fact checks",
        }
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
