//! Validation issue types.
//!
//! The Issue enum provides type-safe issue creation where each variant
//! carries only its needed data. Issues become [`ValidationDiagnostic`]s once
//! severity overrides from the registry are applied.

use esef_model::{DiagnosticKind, LinkbaseRole, RuleCategory, Severity, ValidationDiagnostic};
use esef_standards::{ReportingVersion, RuleConstantsRegistry};

/// Why a linkbase file name was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilenameDefect {
    /// The name does not follow the role's pattern (suffix, date shape, language tag).
    PatternMismatch,
    /// The date segment has the right shape but is not a calendar date.
    InvalidDate { date: String },
}

/// Validation issue - each variant carries only its needed data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    // Filename checks
    /// Linkbase file name does not follow its role's convention
    FilenameMismatch {
        file_name: String,
        role: LinkbaseRole,
        expected: String,
        defect: FilenameDefect,
    },

    // Namespace checks
    /// Reference to an unmodified upstream entry point
    DisallowedReference { uri: String },
    /// ESEF taxonomy namespace referenced from outside the extension package
    UnexpectedNamespace { uri: String, namespace: String },

    // Mandatory tag checks
    /// Mandatory element not tagged anywhere in the filing
    MissingMandatoryTag {
        element: String,
        version: ReportingVersion,
    },

    // Dimensional checks
    /// Arcrole outside the allowed dimensional set
    InvalidArcrole {
        arcrole: String,
        source: String,
        target: String,
        linkrole: String,
    },
    /// Hypercube declaration in a linkrole other than the default or line-items roles
    LinkroleMismatch {
        arcrole: String,
        source: String,
        target: String,
        linkrole: String,
    },

    // Embedded resource checks
    /// Embedded image larger than the browser limit
    ImageTooLarge {
        source: String,
        length: u64,
        max_allowed: u64,
    },
    /// Hidden fact with a datatype no transformation can produce
    UntransformableHiddenFact { concept: String, datatype: String },
}

impl Issue {
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Issue::FilenameMismatch { .. } => DiagnosticKind::StructuralViolation,
            Issue::DisallowedReference { .. } => DiagnosticKind::DisallowedReferenceViolation,
            Issue::UnexpectedNamespace { .. } => DiagnosticKind::UnexpectedNamespaceViolation,
            Issue::MissingMandatoryTag { .. } => DiagnosticKind::MissingMandatoryTagViolation,
            Issue::InvalidArcrole { .. } => DiagnosticKind::InvalidArcroleViolation,
            Issue::LinkroleMismatch { .. } => DiagnosticKind::LinkroleMismatchViolation,
            Issue::ImageTooLarge { .. } => DiagnosticKind::ImageSizeViolation,
            Issue::UntransformableHiddenFact { .. } => {
                DiagnosticKind::UntransformableHiddenFactViolation
            }
        }
    }

    /// Stable rule ID.
    pub fn rule_id(&self) -> &'static str {
        self.kind().rule_id()
    }

    pub fn category(&self) -> RuleCategory {
        self.kind().category()
    }

    /// File name, URI or concept identifier the issue is about.
    pub fn subject(&self) -> &str {
        match self {
            Issue::FilenameMismatch { file_name, .. } => file_name,
            Issue::DisallowedReference { uri } => uri,
            Issue::UnexpectedNamespace { uri, .. } => uri,
            Issue::MissingMandatoryTag { element, .. } => element,
            Issue::InvalidArcrole { source, .. } => source,
            Issue::LinkroleMismatch { source, .. } => source,
            Issue::ImageTooLarge { source, .. } => source,
            Issue::UntransformableHiddenFact { concept, .. } => concept,
        }
    }

    /// Default severity (can be overridden by registry configuration).
    pub fn default_severity(&self) -> Severity {
        Severity::Violation
    }

    /// Get severity using registry overrides if present.
    pub fn severity(&self, registry: &RuleConstantsRegistry) -> Severity {
        registry
            .severity_override(self.kind())
            .unwrap_or_else(|| self.default_severity())
    }

    /// Format message with issue-specific data.
    pub fn message(&self) -> String {
        match self {
            Issue::FilenameMismatch {
                file_name,
                role,
                expected,
                defect: FilenameDefect::PatternMismatch,
            } => format!(
                "{} linkbase file {} does not match the naming convention {}",
                role, file_name, expected
            ),

            Issue::FilenameMismatch {
                file_name,
                role,
                defect: FilenameDefect::InvalidDate { date },
                ..
            } => format!(
                "{} linkbase file {} carries {} which is not a calendar date",
                role, file_name, date
            ),

            Issue::DisallowedReference { uri } => format!(
                "Taxonomy reference {} points to an unmodified upstream entry point",
                uri
            ),

            Issue::UnexpectedNamespace { uri, namespace } => format!(
                "Taxonomy reference {} uses ESEF namespace {} but is not part of the extension package",
                uri, namespace
            ),

            Issue::MissingMandatoryTag { element, version } => format!(
                "Mandatory element {} is not tagged (ESEF {} taxonomy)",
                element, version
            ),

            Issue::InvalidArcrole {
                arcrole,
                source,
                target,
                linkrole,
            } => format!(
                "Arc {} -> {} in {} uses arcrole {} which is not a dimensional arcrole",
                source, target, linkrole, arcrole
            ),

            Issue::LinkroleMismatch {
                arcrole,
                source,
                target,
                linkrole,
            } => format!(
                "Hypercube arc {} -> {} ({}) is declared in {} instead of a default dimension or line-items-not-qualified linkrole",
                source, target, arcrole, linkrole
            ),

            Issue::ImageTooLarge {
                source,
                length,
                max_allowed,
            } => format!(
                "Embedded image {} is {} bytes, exceeding the {} byte limit",
                source, length, max_allowed
            ),

            Issue::UntransformableHiddenFact { concept, datatype } => format!(
                "Hidden fact {} has datatype {} which cannot be produced by a transformation",
                concept, datatype
            ),
        }
    }

    /// Convert into the diagnostic emitted to callers.
    pub fn into_diagnostic(self, registry: &RuleConstantsRegistry) -> ValidationDiagnostic {
        let kind = self.kind();
        ValidationDiagnostic {
            rule_id: kind.rule_id().to_string(),
            kind,
            severity: self.severity(registry),
            message: self.message(),
            subject: self.subject().to_string(),
            category: kind.category(),
        }
    }
}
