//! Taxonomy reference checks.
//!
//! Two independent checks per reference; both always run, so one URI can
//! yield a disallowed-reference and an unexpected-namespace issue.

use esef_model::TaxonomyReference;
use esef_standards::{RuleConstantsRegistry, VersionRules};

use crate::issue::Issue;

/// Check every taxonomy reference.
pub fn check_all(
    references: &[TaxonomyReference],
    registry: &RuleConstantsRegistry,
    version: &VersionRules,
) -> Vec<Issue> {
    references
        .iter()
        .flat_map(|reference| check(reference, registry, version))
        .collect()
}

pub fn check(
    reference: &TaxonomyReference,
    registry: &RuleConstantsRegistry,
    version: &VersionRules,
) -> Vec<Issue> {
    let mut issues = Vec::new();
    let uri = reference.uri.trim();

    if registry.is_disallowed_uri(uri) {
        issues.push(Issue::DisallowedReference {
            uri: uri.to_string(),
        });
    }

    if !reference.extension_package
        && let Some(namespace) = version
            .esef_namespaces()
            .find(|prefix| uri.starts_with(prefix))
    {
        issues.push(Issue::UnexpectedNamespace {
            uri: uri.to_string(),
            namespace: namespace.to_string(),
        });
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use esef_model::DiagnosticKind;
    use esef_standards::ReportingVersion;

    fn kinds(reference: TaxonomyReference) -> Vec<DiagnosticKind> {
        let registry = RuleConstantsRegistry::new().unwrap();
        let version = registry.version_rules(ReportingVersion::Esef2022).unwrap();
        check(&reference, &registry, version)
            .iter()
            .map(Issue::kind)
            .collect()
    }

    #[test]
    fn esef_all_entry_point_is_disallowed() {
        assert_eq!(
            kinds(TaxonomyReference::new(
                "http://www.esma.europa.eu/taxonomy/2021-03-24/esef_all.xsd"
            )),
            vec![DiagnosticKind::DisallowedReferenceViolation]
        );
    }

    #[test]
    fn filer_extension_passes() {
        assert!(kinds(TaxonomyReference::new("http://acme.com/xbrl/2021/acme-ext.xsd")).is_empty());
        assert!(
            kinds(
                TaxonomyReference::new("http://acme.com/xbrl/2021/acme-ext.xsd")
                    .in_extension_package()
            )
            .is_empty()
        );
    }

    #[test]
    fn full_ifrs_entry_point_triggers_both_checks() {
        assert_eq!(
            kinds(TaxonomyReference::new(
                "http://xbrl.ifrs.org/taxonomy/2020-03-16/full_ifrs/full_ifrs-cor_2020-03-16.xsd"
            )),
            vec![
                DiagnosticKind::DisallowedReferenceViolation,
                DiagnosticKind::UnexpectedNamespaceViolation,
            ]
        );
    }

    #[test]
    fn esef_namespace_inside_extension_package_is_accepted() {
        assert!(
            kinds(
                TaxonomyReference::new("http://xbrl.ifrs.org/taxonomy/2021-03-24/ifrs-full")
                    .in_extension_package()
            )
            .is_empty()
        );
        assert_eq!(
            kinds(TaxonomyReference::new(
                "http://xbrl.ifrs.org/taxonomy/2021-03-24/ifrs-full"
            )),
            vec![DiagnosticKind::UnexpectedNamespaceViolation]
        );
    }
}
