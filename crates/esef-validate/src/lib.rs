//! ESEF compliance rule engine.
//!
//! Checks a [`FilingModel`](esef_model::FilingModel) against the filing rules
//! of a reporting version and returns every violation found, ordered by rule
//! category and subject.

pub mod checks;
mod engine;
pub mod issue;

pub use checks::filename::{FilenameParts, parse_file_name};
pub use engine::{ValidationOrchestrator, sort_diagnostics, validate};
pub use issue::{FilenameDefect, Issue};
