use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::{RuleCategory, Severity};

/// The kind of rule a diagnostic reports on. Each kind has a stable rule ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DiagnosticKind {
    StructuralViolation,
    DisallowedReferenceViolation,
    UnexpectedNamespaceViolation,
    MissingMandatoryTagViolation,
    InvalidArcroleViolation,
    LinkroleMismatchViolation,
    ImageSizeViolation,
    UntransformableHiddenFactViolation,
}

impl DiagnosticKind {
    pub const fn all() -> &'static [Self] {
        &[
            Self::StructuralViolation,
            Self::DisallowedReferenceViolation,
            Self::UnexpectedNamespaceViolation,
            Self::MissingMandatoryTagViolation,
            Self::InvalidArcroleViolation,
            Self::LinkroleMismatchViolation,
            Self::ImageSizeViolation,
            Self::UntransformableHiddenFactViolation,
        ]
    }

    /// Stable rule identifier for machine filtering.
    pub fn rule_id(&self) -> &'static str {
        match self {
            Self::StructuralViolation => "ESEF-FN-001",
            Self::DisallowedReferenceViolation => "ESEF-NS-001",
            Self::UnexpectedNamespaceViolation => "ESEF-NS-002",
            Self::MissingMandatoryTagViolation => "ESEF-MT-001",
            Self::InvalidArcroleViolation => "ESEF-DM-001",
            Self::LinkroleMismatchViolation => "ESEF-DM-002",
            Self::ImageSizeViolation => "ESEF-IM-001",
            Self::UntransformableHiddenFactViolation => "ESEF-HF-001",
        }
    }

    /// Look a kind up by its rule identifier.
    pub fn from_rule_id(rule_id: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.rule_id() == rule_id.trim())
    }

    pub fn category(&self) -> RuleCategory {
        match self {
            Self::StructuralViolation => RuleCategory::Filename,
            Self::DisallowedReferenceViolation | Self::UnexpectedNamespaceViolation => {
                RuleCategory::Namespace
            }
            Self::MissingMandatoryTagViolation => RuleCategory::MandatoryTags,
            Self::InvalidArcroleViolation | Self::LinkroleMismatchViolation => {
                RuleCategory::Dimensional
            }
            Self::ImageSizeViolation | Self::UntransformableHiddenFactViolation => {
                RuleCategory::EmbeddedResources
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::StructuralViolation => "StructuralViolation",
            Self::DisallowedReferenceViolation => "DisallowedReferenceViolation",
            Self::UnexpectedNamespaceViolation => "UnexpectedNamespaceViolation",
            Self::MissingMandatoryTagViolation => "MissingMandatoryTagViolation",
            Self::InvalidArcroleViolation => "InvalidArcroleViolation",
            Self::LinkroleMismatchViolation => "LinkroleMismatchViolation",
            Self::ImageSizeViolation => "ImageSizeViolation",
            Self::UntransformableHiddenFactViolation => "UntransformableHiddenFactViolation",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single rule outcome emitted by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationDiagnostic {
    /// Stable rule identifier (e.g., "ESEF-FN-001").
    pub rule_id: String,
    pub kind: DiagnosticKind,
    pub severity: Severity,
    /// Human-readable message describing the issue.
    pub message: String,
    /// File name, URI or concept identifier the diagnostic is about.
    pub subject: String,
    pub category: RuleCategory,
}

impl ValidationDiagnostic {
    /// Deterministic ordering key: category first, then subject.
    pub fn sort_key(&self) -> (RuleCategory, &str, &str, &str) {
        (
            self.category,
            self.subject.as_str(),
            self.rule_id.as_str(),
            self.message.as_str(),
        )
    }
}

/// All diagnostics of one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceReport {
    /// Reporting-framework version the filing was checked against.
    pub version: String,
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ComplianceReport {
    pub fn violation_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.severity == Severity::Violation)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.severity == Severity::Warning)
            .count()
    }

    /// True when no diagnostic of severity violation was emitted.
    pub fn is_compliant(&self) -> bool {
        self.violation_count() == 0
    }

    /// Diagnostic counts per category; categories without findings are omitted.
    pub fn count_by_category(&self) -> BTreeMap<RuleCategory, usize> {
        let mut counts = BTreeMap::new();
        for diagnostic in &self.diagnostics {
            *counts.entry(diagnostic.category).or_insert(0) += 1;
        }
        counts
    }
}
