//! Validation orchestrator.
//!
//! Runs every rule category over a filing model and returns the merged,
//! sorted diagnostics. Categories run as independent rayon tasks; each task
//! fills its own issue list and the lists are concatenated afterwards.

use esef_model::{ComplianceReport, FilingModel, RuleCategory, ValidationDiagnostic};
use esef_standards::{ReportingVersion, Result, RuleConstantsRegistry, VersionRules};
use rayon::prelude::*;
use tracing::{Span, debug, info, info_span, warn};

use crate::checks::{dimensional, embedded, filename, mandatory, namespace};
use crate::issue::Issue;

/// Runs all rule categories against filings using one registry.
#[derive(Debug, Clone, Copy)]
pub struct ValidationOrchestrator<'a> {
    registry: &'a RuleConstantsRegistry,
}

impl<'a> ValidationOrchestrator<'a> {
    pub fn new(registry: &'a RuleConstantsRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'a RuleConstantsRegistry {
        self.registry
    }

    /// Validate a filing against the rules of a reporting version ("2020", "2022").
    ///
    /// Every applicable violation is reported in one pass. A configuration
    /// error aborts the run and returns no diagnostics.
    pub fn validate(
        &self,
        filing: &FilingModel,
        version: &str,
    ) -> Result<Vec<ValidationDiagnostic>> {
        self.validate_version(filing, parse_version(version)?)
    }

    /// Same as [`validate`](Self::validate) with an already parsed version.
    pub fn validate_version(
        &self,
        filing: &FilingModel,
        version: ReportingVersion,
    ) -> Result<Vec<ValidationDiagnostic>> {
        let span = info_span!(
            "validate",
            version = %version,
            linkbases = filing.linkbases.len(),
            references = filing.references.len(),
            arcs = filing.arcs.len(),
            facts = filing.facts.len(),
            images = filing.images.len(),
        );
        let _guard = span.enter();

        let version_rules = self.registry.version_rules(version).inspect_err(|error| {
            warn!(%error, "validation aborted");
        })?;

        let unresolved = filing
            .references
            .iter()
            .filter(|reference| !reference.resolved)
            .count();
        if unresolved > 0 {
            debug!(unresolved, "filing carries unresolved taxonomy references");
        }

        let parent = Span::current();
        let per_category = RuleCategory::all()
            .par_iter()
            .map(|category| -> Result<Vec<Issue>> {
                let _entered = parent.enter();
                let issues = self.run_category(*category, filing, version_rules)?;
                debug!(category = %category, issues = issues.len(), "category checked");
                Ok(issues)
            })
            .collect::<Result<Vec<Vec<Issue>>>>()
            .inspect_err(|error| {
                warn!(%error, "validation aborted");
            })?;

        let mut diagnostics: Vec<ValidationDiagnostic> = per_category
            .into_iter()
            .flatten()
            .map(|issue| issue.into_diagnostic(self.registry))
            .collect();
        sort_diagnostics(&mut diagnostics);

        info!(diagnostics = diagnostics.len(), "validation complete");
        Ok(diagnostics)
    }

    /// Validate and wrap the diagnostics with their version and counts.
    pub fn validate_report(&self, filing: &FilingModel, version: &str) -> Result<ComplianceReport> {
        let parsed = parse_version(version)?;
        let diagnostics = self.validate_version(filing, parsed)?;
        Ok(ComplianceReport {
            version: parsed.to_string(),
            diagnostics,
        })
    }

    fn run_category(
        &self,
        category: RuleCategory,
        filing: &FilingModel,
        version_rules: &VersionRules,
    ) -> Result<Vec<Issue>> {
        let issues = match category {
            RuleCategory::Filename => filename::check_all(&filing.linkbases, self.registry)?,
            RuleCategory::Namespace => {
                namespace::check_all(&filing.references, self.registry, version_rules)
            }
            RuleCategory::MandatoryTags => mandatory::check(version_rules, &filing.facts),
            RuleCategory::Dimensional => dimensional::check_all(&filing.arcs, self.registry),
            RuleCategory::EmbeddedResources => {
                let mut issues = embedded::check_images(&filing.images, self.registry);
                issues.extend(embedded::check_hidden_facts(&filing.facts, self.registry));
                issues
            }
        };
        Ok(issues)
    }
}

fn parse_version(version: &str) -> Result<ReportingVersion> {
    ReportingVersion::parse(version).inspect_err(|error| {
        warn!(%error, "validation aborted");
    })
}

/// Validate a filing with the given registry.
pub fn validate(
    registry: &RuleConstantsRegistry,
    filing: &FilingModel,
    version: &str,
) -> Result<Vec<ValidationDiagnostic>> {
    ValidationOrchestrator::new(registry).validate(filing, version)
}

/// Order by category, then subject; rule ID and message break ties.
pub fn sort_diagnostics(diagnostics: &mut [ValidationDiagnostic]) {
    diagnostics.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
}
