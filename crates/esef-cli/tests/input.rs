//! Integration tests for filing and rule loading.

use std::fs;
use std::path::PathBuf;

use esef_cli::input::{EXIT_VIOLATIONS, exit_code, load_filing, load_registry, render_json};
use esef_model::{ComplianceReport, LinkbaseRole, Severity};
use esef_validate::ValidationOrchestrator;

fn temp_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("esef_cli_{label}_{stamp}"));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

const FILING: &str = r#"{
    "linkbases": [
        { "role": "calculation", "file_name": "acme_cal.xml" },
        { "role": "presentation", "file_name": "acme-2021-12-31_pre.xml" }
    ],
    "references": [
        { "uri": "http://www.acme.com/xbrl/2021/acme-ext.xsd", "extension_package": true }
    ],
    "images": [
        { "source": "logo", "encoded_length": 6000000 }
    ]
}"#;

#[test]
fn filing_json_is_loaded() {
    let dir = temp_dir("filing");
    let path = dir.join("filing.json");
    fs::write(&path, FILING).unwrap();

    let filing = load_filing(&path).expect("load filing");
    assert_eq!(filing.linkbases.len(), 2);
    assert_eq!(filing.linkbases[0].role, LinkbaseRole::Calculation);
    assert!(filing.references[0].extension_package);
    assert!(filing.references[0].resolved);
    assert!(filing.facts.is_empty());
}

#[test]
fn missing_filing_reports_path() {
    let dir = temp_dir("missing");
    let path = dir.join("absent.json");
    let err = load_filing(&path).unwrap_err();
    assert!(format!("{err:#}").contains("absent.json"));
}

#[test]
fn malformed_filing_is_an_error() {
    let dir = temp_dir("malformed");
    let path = dir.join("filing.json");
    fs::write(&path, r#"{ "linkbases": [ { "role": "formula", "file_name": "x.xml" } ] }"#)
        .unwrap();
    let err = load_filing(&path).unwrap_err();
    assert!(format!("{err:#}").contains("parse filing"));
}

#[test]
fn rules_file_overrides_registry() {
    let dir = temp_dir("rules");
    let path = dir.join("rules.toml");
    fs::write(
        &path,
        r#"
max_image_length = 7000000

[severity]
"ESEF-FN-001" = "warning"
"#,
    )
    .unwrap();

    let registry = load_registry(Some(&path)).expect("registry");
    assert_eq!(registry.max_image_length(), 7_000_000);

    let filing_path = dir.join("filing.json");
    fs::write(&filing_path, FILING).unwrap();
    let filing = load_filing(&filing_path).unwrap();
    let report = ValidationOrchestrator::new(&registry)
        .validate_report(&filing, "2020")
        .unwrap();

    let structural: Vec<_> = report
        .diagnostics
        .iter()
        .filter(|d| d.rule_id == "ESEF-FN-001")
        .collect();
    assert_eq!(structural.len(), 1);
    assert_eq!(structural[0].severity, Severity::Warning);
    assert!(!report.diagnostics.iter().any(|d| d.rule_id == "ESEF-IM-001"));
}

#[test]
fn unknown_rule_in_rules_file_is_rejected() {
    let dir = temp_dir("bad_rules");
    let path = dir.join("rules.toml");
    fs::write(&path, "[severity]\n\"ESEF-XX-001\" = \"warning\"\n").unwrap();
    let err = load_registry(Some(&path)).unwrap_err();
    assert!(format!("{err:#}").contains("ESEF-XX-001"));
}

#[test]
fn exit_code_reflects_violations() {
    assert_eq!(exit_code(&ComplianceReport::default()), 0);

    let registry = load_registry(None).unwrap();
    let dir = temp_dir("exit");
    let path = dir.join("filing.json");
    fs::write(&path, FILING).unwrap();
    let filing = load_filing(&path).unwrap();
    let report = ValidationOrchestrator::new(&registry)
        .validate_report(&filing, "2022")
        .unwrap();
    assert_eq!(exit_code(&report), EXIT_VIOLATIONS);

    let json = render_json(&report).unwrap();
    let parsed: ComplianceReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, report);
}
