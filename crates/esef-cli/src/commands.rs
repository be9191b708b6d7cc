use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use esef_cli::input::{load_filing, load_registry, render_json};
use esef_model::{ComplianceReport, LinkbaseRole};
use esef_standards::{ReportingVersion, RuleConstantsRegistry};
use esef_validate::ValidationOrchestrator;

use crate::cli::{OutputArg, RulesArgs, ValidateArgs};
use crate::summary::{apply_table_style, header_cell, print_summary};

pub fn run_validate(args: &ValidateArgs) -> Result<ComplianceReport> {
    let span = info_span!("esef_check", filing = %args.filing.display());
    let _guard = span.enter();
    let started = Instant::now();

    let registry = load_registry(args.rules.as_deref())?;
    let filing = load_filing(&args.filing)?;
    let report = ValidationOrchestrator::new(&registry)
        .validate_report(&filing, &args.version)
        .with_context(|| format!("validate {}", args.filing.display()))?;

    info!(
        violations = report.violation_count(),
        warnings = report.warning_count(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "filing checked"
    );

    match args.output {
        OutputArg::Table => print_summary(&report),
        OutputArg::Json => println!("{}", render_json(&report)?),
    }
    Ok(report)
}

pub fn run_rules(args: &RulesArgs) -> Result<()> {
    let registry = load_registry(args.rules.as_deref())?;
    let versions = match &args.version {
        Some(version) => vec![ReportingVersion::parse(version)?],
        None => ReportingVersion::all().to_vec(),
    };

    print_filename_rules(&registry)?;
    print_entry(
        "Disallowed taxonomy references",
        registry.disallowed_uri_patterns().iter().cloned(),
    );
    print_entry(
        "Dimensional arcroles",
        registry.allowed_arcroles().map(str::to_string),
    );
    print_entry(
        "Hypercube linkroles",
        registry
            .default_dimension_linkroles()
            .iter()
            .cloned()
            .chain(std::iter::once(
                registry.line_items_not_qualified_linkrole().to_string(),
            )),
    );
    print_entry(
        "Untransformable hidden datatypes",
        registry.untransformable_types().map(str::to_string),
    );
    println!("Maximum embedded image length: {} bytes", registry.max_image_length());
    print_entry(
        "Primary statement placeholders",
        registry
            .primary_statement_placeholders()
            .iter()
            .cloned(),
    );
    print_entry(
        "Monetary declaration statements",
        registry
            .monetary_declaration_statements()
            .iter()
            .cloned(),
    );

    for version in versions {
        let rules = registry.version_rules(version)?;
        print_entry(
            &format!("ESEF {version} taxonomy namespaces"),
            rules.esef_namespaces().map(str::to_string),
        );
        print_entry(
            &format!(
                "ESEF {version} mandatory elements ({})",
                rules.mandatory_elements().len()
            ),
            rules.mandatory_elements().iter().cloned(),
        );
    }
    Ok(())
}

fn print_filename_rules(registry: &RuleConstantsRegistry) -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Role"),
        header_cell("Code"),
        header_cell("File name"),
    ]);
    apply_table_style(&mut table);
    for role in LinkbaseRole::all() {
        let rule = registry.filename_rule(*role)?;
        table.add_row(vec![
            role.as_str().to_string(),
            role.code().to_string(),
            rule.pattern().to_string(),
        ]);
    }
    println!("Linkbase file names:");
    println!("{table}");
    Ok(())
}

fn print_entry(title: &str, values: impl Iterator<Item = String>) {
    let mut table = Table::new();
    table.set_header(vec![header_cell(title)]);
    apply_table_style(&mut table);
    for value in values {
        table.add_row(vec![value]);
    }
    println!();
    println!("{table}");
}
