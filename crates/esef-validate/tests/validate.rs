use esef_model::{
    DiagnosticKind, DimensionalRelationshipArc, EmbeddedImage, FilingModel,
    LinkbaseFileDescriptor, LinkbaseRole, RuleCategory, Severity, TaggedFact, TaxonomyReference,
    ValidationDiagnostic,
};
use esef_standards::constants::{
    ARCROLE_ALL, ARCROLE_DOMAIN_MEMBER, ARCROLE_HYPERCUBE_DIMENSION,
    LINE_ITEMS_NOT_QUALIFIED_LINKROLE, MANDATORY_ELEMENTS_2020,
};
use esef_standards::{ConfigurationError, ReportingVersion, RuleConstantsRegistry, RulesConfig};
use esef_validate::{ValidationOrchestrator, sort_diagnostics, validate};

const STATEMENT_ROLE: &str = "http://acme.com/role/StatementOfFinancialPosition";
const ESEF_ALL: &str = "http://www.esma.europa.eu/taxonomy/2021-03-24/esef_all.xsd";
const FULL_IFRS: &str =
    "http://xbrl.ifrs.org/taxonomy/2020-03-16/full_ifrs/full_ifrs-cor_2020-03-16.xsd";

fn registry() -> RuleConstantsRegistry {
    RuleConstantsRegistry::new().expect("built-in registry")
}

/// A 2020 filing that satisfies every rule.
fn compliant_filing() -> FilingModel {
    FilingModel {
        linkbases: vec![
            LinkbaseFileDescriptor::new(LinkbaseRole::Calculation, "acme-2021-12-31_cal.xml"),
            LinkbaseFileDescriptor::new(LinkbaseRole::Definition, "acme-2021-12-31_def.xml"),
            LinkbaseFileDescriptor::new(LinkbaseRole::Label, "acme-2021-12-31_lab-en.xml")
                .with_language("en"),
            LinkbaseFileDescriptor::new(LinkbaseRole::Presentation, "acme-2021-12-31_pre.xml"),
        ],
        references: vec![
            TaxonomyReference::new("http://www.acme.com/xbrl/2021-12-31/acme-2021-12-31.xsd")
                .in_extension_package(),
        ],
        arcs: vec![
            DimensionalRelationshipArc::new(
                ARCROLE_ALL,
                "acme:LineItems",
                "acme:Table",
                LINE_ITEMS_NOT_QUALIFIED_LINKROLE,
            ),
            DimensionalRelationshipArc::new(
                ARCROLE_HYPERCUBE_DIMENSION,
                "acme:Table",
                "acme:SegmentsAxis",
                STATEMENT_ROLE,
            ),
        ],
        facts: MANDATORY_ELEMENTS_2020
            .iter()
            .map(|element| {
                TaggedFact::new(format!("ifrs-full:{element}"), "xbrli:stringItemType")
                    .with_value("Acme plc")
            })
            .collect(),
        images: vec![EmbeddedImage::new("logo", 5_000_000)],
    }
}

fn kinds(diagnostics: &[ValidationDiagnostic]) -> Vec<DiagnosticKind> {
    diagnostics.iter().map(|diagnostic| diagnostic.kind).collect()
}

#[test]
fn compliant_filing_produces_no_diagnostics() {
    let registry = registry();
    let diagnostics = validate(&registry, &compliant_filing(), "2020").expect("validate");
    assert!(diagnostics.is_empty(), "{diagnostics:#?}");
}

#[test]
fn malformed_linkbase_name_is_structural() {
    let registry = registry();
    let mut filing = compliant_filing();
    filing.linkbases[0] = LinkbaseFileDescriptor::new(LinkbaseRole::Calculation, "acme_cal.xml");

    let diagnostics = validate(&registry, &filing, "2020").expect("validate");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind, DiagnosticKind::StructuralViolation);
    assert_eq!(diagnostics[0].rule_id, "ESEF-FN-001");
    assert_eq!(diagnostics[0].subject, "acme_cal.xml");
    assert_eq!(diagnostics[0].category, RuleCategory::Filename);
}

#[test]
fn impossible_date_is_structural() {
    let registry = registry();
    let mut filing = compliant_filing();
    filing.linkbases[1] =
        LinkbaseFileDescriptor::new(LinkbaseRole::Definition, "acme-2021-02-30_def.xml");

    let diagnostics = validate(&registry, &filing, "2020").expect("validate");
    assert_eq!(kinds(&diagnostics), vec![DiagnosticKind::StructuralViolation]);
    assert!(diagnostics[0].message.contains("2021-02-30"));
}

#[test]
fn unmodified_entry_point_is_disallowed() {
    let registry = registry();
    let mut filing = compliant_filing();
    filing.references.push(TaxonomyReference::new(ESEF_ALL));

    let diagnostics = validate(&registry, &filing, "2020").expect("validate");
    assert_eq!(
        kinds(&diagnostics),
        vec![DiagnosticKind::DisallowedReferenceViolation]
    );
    assert_eq!(diagnostics[0].subject, ESEF_ALL);
}

#[test]
fn full_ifrs_outside_extension_package_triggers_both_namespace_rules() {
    let registry = registry();
    let mut filing = compliant_filing();
    filing.references.push(TaxonomyReference::new(FULL_IFRS));

    let diagnostics = validate(&registry, &filing, "2022").expect("validate");
    let namespace: Vec<DiagnosticKind> = diagnostics
        .iter()
        .filter(|diagnostic| diagnostic.category == RuleCategory::Namespace)
        .map(|diagnostic| diagnostic.kind)
        .collect();
    assert_eq!(
        namespace,
        vec![
            DiagnosticKind::DisallowedReferenceViolation,
            DiagnosticKind::UnexpectedNamespaceViolation,
        ]
    );
}

#[test]
fn missing_mandatory_elements_are_reported_individually() {
    let registry = registry();
    let mut filing = compliant_filing();
    filing.facts.retain(|fact| {
        !matches!(
            fact.concept_local_name(),
            "DomicileOfEntity" | "LegalFormOfEntity"
        )
    });

    let diagnostics = validate(&registry, &filing, "2020").expect("validate");
    assert_eq!(diagnostics.len(), 2);
    let subjects: Vec<&str> = diagnostics.iter().map(|d| d.subject.as_str()).collect();
    assert_eq!(subjects, vec!["DomicileOfEntity", "LegalFormOfEntity"]);
    assert!(
        diagnostics
            .iter()
            .all(|d| d.kind == DiagnosticKind::MissingMandatoryTagViolation)
    );
}

#[test]
fn mandatory_table_follows_the_requested_version() {
    let registry = registry();
    let filing = compliant_filing();

    let v2020 = validate(&registry, &filing, "2020").expect("validate 2020");
    let v2022 = validate(&registry, &filing, "2022").expect("validate 2022");
    assert!(v2020.is_empty());
    let expected: Vec<&str> = registry
        .mandatory_elements(ReportingVersion::Esef2022)
        .unwrap()
        .iter()
        .map(String::as_str)
        .filter(|element| !MANDATORY_ELEMENTS_2020.contains(element))
        .collect();
    assert_eq!(v2022.len(), expected.len());
    assert!(
        v2022
            .iter()
            .all(|d| d.kind == DiagnosticKind::MissingMandatoryTagViolation)
    );
}

#[test]
fn hypercube_outside_allowed_linkroles_is_a_linkrole_mismatch() {
    let registry = registry();
    let mut filing = compliant_filing();
    filing.arcs.push(DimensionalRelationshipArc::new(
        ARCROLE_ALL,
        "acme:LineItems",
        "acme:Table",
        STATEMENT_ROLE,
    ));

    let diagnostics = validate(&registry, &filing, "2020").expect("validate");
    assert_eq!(
        kinds(&diagnostics),
        vec![DiagnosticKind::LinkroleMismatchViolation]
    );
}

#[test]
fn non_dimensional_arcrole_is_invalid() {
    let registry = registry();
    let mut filing = compliant_filing();
    filing.arcs.push(DimensionalRelationshipArc::new(
        "http://www.xbrl.org/2003/arcrole/parent-child",
        "ifrs-full:Assets",
        "ifrs-full:CurrentAssets",
        STATEMENT_ROLE,
    ));
    filing.arcs.push(DimensionalRelationshipArc::new(
        ARCROLE_DOMAIN_MEMBER,
        "acme:SegmentsMember",
        "acme:RetailMember",
        STATEMENT_ROLE,
    ));

    let diagnostics = validate(&registry, &filing, "2020").expect("validate");
    assert_eq!(kinds(&diagnostics), vec![DiagnosticKind::InvalidArcroleViolation]);
    assert_eq!(diagnostics[0].subject, "ifrs-full:Assets");
}

#[test]
fn image_limit_is_exclusive() {
    let registry = registry();
    let mut filing = compliant_filing();
    filing.images = vec![
        EmbeddedImage::new("chart", 5_242_880),
        EmbeddedImage::new("cover", 6_000_000),
    ];

    let diagnostics = validate(&registry, &filing, "2020").expect("validate");
    assert_eq!(kinds(&diagnostics), vec![DiagnosticKind::ImageSizeViolation]);
    assert_eq!(diagnostics[0].subject, "cover");
}

#[test]
fn hidden_untransformable_fact_is_reported() {
    let registry = registry();
    let mut filing = compliant_filing();
    filing
        .facts
        .push(TaggedFact::new("acme:WebsiteAddress", "xs:anyURI").hidden());
    filing
        .facts
        .push(TaggedFact::new("acme:VisibleAddress", "xs:anyURI"));
    filing
        .facts
        .push(TaggedFact::new("acme:HiddenName", "xbrli:stringItemType").hidden());

    let diagnostics = validate(&registry, &filing, "2020").expect("validate");
    assert_eq!(
        kinds(&diagnostics),
        vec![DiagnosticKind::UntransformableHiddenFactViolation]
    );
    assert_eq!(diagnostics[0].subject, "acme:WebsiteAddress");
}

#[test]
fn unknown_version_aborts_without_diagnostics() {
    let registry = registry();
    let err = validate(&registry, &compliant_filing(), "2019").unwrap_err();
    assert!(matches!(err, ConfigurationError::UnknownVersion { .. }));
}

#[test]
fn validation_is_idempotent() {
    let registry = registry();
    let mut filing = compliant_filing();
    filing.linkbases.push(LinkbaseFileDescriptor::new(
        LinkbaseRole::Reference,
        "acme_ref.xml",
    ));
    filing.references.push(TaxonomyReference::new(FULL_IFRS));
    filing.images.push(EmbeddedImage::new("banner", 9_000_000));

    let first = validate(&registry, &filing, "2022").expect("first run");
    let second = validate(&registry, &filing, "2022").expect("second run");
    assert_eq!(first, second);
}

#[test]
fn diagnostics_are_ordered_by_category_then_subject() {
    let registry = registry();
    let mut filing = compliant_filing();
    filing.images.push(EmbeddedImage::new("b-image", 6_000_000));
    filing.images.push(EmbeddedImage::new("a-image", 6_000_000));
    filing.linkbases.push(LinkbaseFileDescriptor::new(
        LinkbaseRole::Reference,
        "zeta_ref.xml",
    ));
    filing.references.push(TaxonomyReference::new(ESEF_ALL));
    filing.facts.clear();

    let diagnostics = validate(&registry, &filing, "2020").expect("validate");
    assert!(
        diagnostics
            .windows(2)
            .all(|pair| pair[0].sort_key() <= pair[1].sort_key())
    );
    assert_eq!(diagnostics.first().map(|d| d.category), Some(RuleCategory::Filename));
    assert_eq!(
        diagnostics.last().map(|d| d.subject.as_str()),
        Some("b-image")
    );

    let mut shuffled = diagnostics.clone();
    shuffled.reverse();
    sort_diagnostics(&mut shuffled);
    assert_eq!(shuffled, diagnostics);
}

#[test]
fn severity_override_downgrades_rule() {
    let config = RulesConfig {
        severity: [("ESEF-IM-001".to_string(), "warning".to_string())]
            .into_iter()
            .collect(),
        ..RulesConfig::default()
    };
    let registry = RuleConstantsRegistry::from_config(&config).expect("registry");
    let mut filing = compliant_filing();
    filing.images.push(EmbeddedImage::new("cover", 6_000_000));

    let report = ValidationOrchestrator::new(&registry)
        .validate_report(&filing, "esef-2020")
        .expect("report");
    assert_eq!(report.version, "2020");
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].severity, Severity::Warning);
    assert_eq!(report.warning_count(), 1);
    assert!(report.is_compliant());
}

#[test]
fn configured_image_limit_applies() {
    let config = RulesConfig {
        max_image_length: Some(1_000),
        ..RulesConfig::default()
    };
    let registry = RuleConstantsRegistry::from_config(&config).expect("registry");
    let diagnostics = validate(&registry, &compliant_filing(), "2020").expect("validate");
    assert_eq!(kinds(&diagnostics), vec![DiagnosticKind::ImageSizeViolation]);
    assert!(diagnostics[0].message.contains("1000 byte limit"));
}

#[test]
fn empty_filing_reports_only_mandatory_gaps() {
    let registry = registry();
    let diagnostics = validate(&registry, &FilingModel::new(), "2020").expect("validate");
    assert_eq!(diagnostics.len(), MANDATORY_ELEMENTS_2020.len());
    assert!(
        diagnostics
            .iter()
            .all(|d| d.category == RuleCategory::MandatoryTags)
    );
}

#[test]
fn registry_is_shared_across_concurrent_runs() {
    let registry = registry();
    let mut filing = compliant_filing();
    filing.images.push(EmbeddedImage::new("cover", 6_000_000));
    let expected = validate(&registry, &filing, "2022").expect("validate");

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| validate(&registry, &filing, "2022").expect("validate")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().expect("thread"), expected);
        }
    });
}

#[test]
fn filing_model_is_read_from_json() {
    let json = serde_json::json!({
        "linkbases": [
            { "role": "calculation", "file_name": "acme_cal.xml" },
            { "role": "label", "file_name": "acme-2021-12-31_lab-fr.xml", "language": "fr" }
        ],
        "references": [
            { "uri": ESEF_ALL }
        ],
        "images": [
            { "source": "logo", "encoded_length": 6000000 }
        ]
    });
    let filing: FilingModel = serde_json::from_value(json).expect("filing json");

    let registry = registry();
    let diagnostics = validate(&registry, &filing, "2020").expect("validate");
    let rule_ids: Vec<&str> = diagnostics
        .iter()
        .filter(|d| d.category != RuleCategory::MandatoryTags)
        .map(|d| d.rule_id.as_str())
        .collect();
    assert_eq!(rule_ids, vec!["ESEF-FN-001", "ESEF-NS-001", "ESEF-IM-001"]);
}

#[test]
fn rendered_diagnostics_snapshot() {
    let registry = registry();
    let mut filing = compliant_filing();
    filing.linkbases[0] = LinkbaseFileDescriptor::new(LinkbaseRole::Calculation, "acme_cal.xml");
    filing.references.push(TaxonomyReference::new(ESEF_ALL));
    filing.arcs.push(DimensionalRelationshipArc::new(
        ARCROLE_ALL,
        "acme:LineItems",
        "acme:Table",
        STATEMENT_ROLE,
    ));
    filing.arcs.push(DimensionalRelationshipArc::new(
        "http://www.xbrl.org/2003/arcrole/parent-child",
        "ifrs-full:Assets",
        "ifrs-full:CurrentAssets",
        STATEMENT_ROLE,
    ));
    filing
        .facts
        .push(TaggedFact::new("ifrs-full:SomeCode", "xs:QName").hidden());
    filing.images = vec![EmbeddedImage::new("logo.png", 6_000_000)];

    let diagnostics = validate(&registry, &filing, "2020").expect("validate");
    let rendered = diagnostics
        .iter()
        .map(|d| format!("{} {} {}", d.rule_id, d.severity, d.subject))
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(rendered, @r"
    ESEF-FN-001 Violation acme_cal.xml
    ESEF-NS-001 Violation http://www.esma.europa.eu/taxonomy/2021-03-24/esef_all.xsd
    ESEF-DM-002 Violation acme:LineItems
    ESEF-DM-001 Violation ifrs-full:Assets
    ESEF-HF-001 Violation ifrs-full:SomeCode
    ESEF-IM-001 Violation logo.png
    ");
}
