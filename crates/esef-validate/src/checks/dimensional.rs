//! Dimensional arcrole and linkrole checks.
//!
//! The arcrole check and the hypercube linkrole check are independent; an arc
//! failing both yields both issues.

use esef_model::DimensionalRelationshipArc;
use esef_standards::RuleConstantsRegistry;

use crate::issue::Issue;

pub fn check_all(
    arcs: &[DimensionalRelationshipArc],
    registry: &RuleConstantsRegistry,
) -> Vec<Issue> {
    arcs.iter().flat_map(|arc| check(arc, registry)).collect()
}

pub fn check(arc: &DimensionalRelationshipArc, registry: &RuleConstantsRegistry) -> Vec<Issue> {
    let mut issues = Vec::new();

    if !registry.is_allowed_arcrole(&arc.arcrole) {
        issues.push(Issue::InvalidArcrole {
            arcrole: arc.arcrole.clone(),
            source: arc.source.clone(),
            target: arc.target.clone(),
            linkrole: arc.linkrole.clone(),
        });
    }

    if registry.is_hypercube_arcrole(&arc.arcrole)
        && !registry.is_allowed_hypercube_linkrole(&arc.linkrole)
    {
        issues.push(Issue::LinkroleMismatch {
            arcrole: arc.arcrole.clone(),
            source: arc.source.clone(),
            target: arc.target.clone(),
            linkrole: arc.linkrole.clone(),
        });
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use esef_model::DiagnosticKind;
    use esef_standards::constants::{
        ARCROLE_ALL, ARCROLE_DIMENSION_DEFAULT, ARCROLE_NOT_ALL, ARCROLE_WIDER_NARROWER,
        LINE_ITEMS_NOT_QUALIFIED_LINKROLE,
    };

    const STATEMENT_ROLE: &str = "http://acme.com/role/StatementOfFinancialPosition";
    const DEFAULT_ROLE: &str = "http://www.esma.europa.eu/xbrl/role/cor/ifrs-dim_role-990000";

    fn kinds(arcrole: &str, linkrole: &str) -> Vec<DiagnosticKind> {
        let registry = RuleConstantsRegistry::new().unwrap();
        let arc = DimensionalRelationshipArc::new(
            arcrole,
            "ifrs-full:StatementOfFinancialPositionLineItems",
            "ifrs-full:StatementOfFinancialPositionTable",
            linkrole,
        );
        check(&arc, &registry).iter().map(Issue::kind).collect()
    }

    #[test]
    fn hypercube_in_statement_role_is_a_linkrole_mismatch() {
        assert_eq!(
            kinds(ARCROLE_ALL, STATEMENT_ROLE),
            vec![DiagnosticKind::LinkroleMismatchViolation]
        );
        assert_eq!(
            kinds(ARCROLE_NOT_ALL, STATEMENT_ROLE),
            vec![DiagnosticKind::LinkroleMismatchViolation]
        );
    }

    #[test]
    fn hypercube_in_allowed_roles_passes() {
        assert!(kinds(ARCROLE_ALL, DEFAULT_ROLE).is_empty());
        assert!(kinds(ARCROLE_NOT_ALL, LINE_ITEMS_NOT_QUALIFIED_LINKROLE).is_empty());
    }

    #[test]
    fn non_hypercube_arcroles_ignore_linkrole() {
        assert!(kinds(ARCROLE_DIMENSION_DEFAULT, STATEMENT_ROLE).is_empty());
        assert!(kinds(ARCROLE_WIDER_NARROWER, STATEMENT_ROLE).is_empty());
    }

    #[test]
    fn unknown_arcrole_is_invalid_independent_of_linkrole() {
        let parent_child = "http://www.xbrl.org/2003/arcrole/parent-child";
        assert_eq!(
            kinds(parent_child, STATEMENT_ROLE),
            vec![DiagnosticKind::InvalidArcroleViolation]
        );
        assert_eq!(
            kinds(parent_child, DEFAULT_ROLE),
            vec![DiagnosticKind::InvalidArcroleViolation]
        );
    }
}
