//! Loading filings and rule configuration from disk.

use std::path::Path;

use anyhow::{Context, Result};
use esef_model::{ComplianceReport, FilingModel};
use esef_standards::{RuleConstantsRegistry, load_rules_config};
use tracing::{debug, info};

/// Exit code when the filing has at least one violation.
pub const EXIT_VIOLATIONS: i32 = 1;
/// Exit code for configuration and input errors.
pub const EXIT_ERROR: i32 = 2;

/// Read a filing model serialized as JSON.
pub fn load_filing(path: &Path) -> Result<FilingModel> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read filing {}", path.display()))?;
    let filing: FilingModel = serde_json::from_str(&contents)
        .with_context(|| format!("parse filing {}", path.display()))?;
    debug!(
        path = %path.display(),
        linkbases = filing.linkbases.len(),
        references = filing.references.len(),
        facts = filing.facts.len(),
        "filing loaded"
    );
    Ok(filing)
}

/// Built-in registry, or one with the overrides of a rules file applied.
pub fn load_registry(rules: Option<&Path>) -> Result<RuleConstantsRegistry> {
    let Some(path) = rules else {
        return RuleConstantsRegistry::new().context("build rule registry");
    };
    let config = load_rules_config(path)?;
    info!(path = %path.display(), "rule overrides loaded");
    RuleConstantsRegistry::from_config(&config)
        .with_context(|| format!("apply rules from {}", path.display()))
}

/// Process exit code for a finished run.
pub fn exit_code(report: &ComplianceReport) -> i32 {
    if report.is_compliant() {
        0
    } else {
        EXIT_VIOLATIONS
    }
}

/// Pretty-printed JSON rendering of a report.
pub fn render_json(report: &ComplianceReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("serialize report")
}
