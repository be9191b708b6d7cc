//! Document model consumed by the ESEF rule engine and the diagnostics it emits.
//!
//! The host builds a [`FilingModel`] from an already-parsed report; nothing in
//! this crate reads markup.

pub mod diagnostic;
pub mod enums;
pub mod filing;

pub use diagnostic::{ComplianceReport, DiagnosticKind, ValidationDiagnostic};
pub use enums::{LinkbaseRole, RuleCategory, Severity};
pub use filing::{
    DimensionalRelationshipArc, EmbeddedImage, FilingModel, LinkbaseFileDescriptor, TaggedFact,
    TaxonomyReference, local_name,
};
