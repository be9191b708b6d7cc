#![deny(unsafe_code)]

use std::collections::{BTreeMap, BTreeSet};

use esef_model::{DiagnosticKind, LinkbaseRole, Severity};
use regex::Regex;
use tracing::debug;

use crate::config::RulesConfig;
use crate::constants;
use crate::error::{ConfigurationError, Result};
use crate::version::ReportingVersion;

/// Naming rule for one linkbase role.
#[derive(Debug, Clone)]
pub struct FilenameRule {
    role: LinkbaseRole,
    pattern: String,
    regex: Regex,
}

impl FilenameRule {
    pub fn role(&self) -> LinkbaseRole {
        self.role
    }

    /// Generation pattern, e.g. `{base}-{date}_cal.xml`.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Compiled validation regex with `base`, `date` and (labels) `lang` groups.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Render the generation pattern. Placeholders without a value stay as-is.
    pub fn expected_name(&self, base: &str, date: &str, lang: Option<&str>) -> String {
        let name = self.pattern.replace("{base}", base).replace("{date}", date);
        match lang {
            Some(lang) => name.replace("{lang}", lang),
            None => name,
        }
    }
}

/// Rule tables that differ between reporting-framework versions.
#[derive(Debug, Clone)]
pub struct VersionRules {
    version: ReportingVersion,
    mandatory_elements: Vec<String>,
    esef_namespaces: BTreeSet<String>,
}

impl VersionRules {
    pub fn version(&self) -> ReportingVersion {
        self.version
    }

    /// Mandatory element local names, in regulator order, without duplicates.
    pub fn mandatory_elements(&self) -> &[String] {
        &self.mandatory_elements
    }

    pub fn esef_namespaces(&self) -> impl Iterator<Item = &str> {
        self.esef_namespaces.iter().map(String::as_str)
    }

    /// True when the URI lies under one of the version's ESEF namespace prefixes.
    pub fn is_esef_namespace(&self, uri: &str) -> bool {
        self.esef_namespaces
            .iter()
            .any(|prefix| uri.starts_with(prefix.as_str()))
    }
}

/// Immutable snapshot of every rule parameter the validators read.
///
/// Built once per process (or per run when rules come from a config file)
/// and shared read-only between validators.
#[derive(Debug, Clone)]
pub struct RuleConstantsRegistry {
    filename_rules: BTreeMap<LinkbaseRole, FilenameRule>,
    disallowed_patterns: Vec<String>,
    disallowed_uris: Regex,
    versions: BTreeMap<ReportingVersion, VersionRules>,
    allowed_arcroles: BTreeSet<String>,
    hypercube_arcroles: BTreeSet<String>,
    default_dimension_linkroles: Vec<String>,
    line_items_not_qualified_linkrole: String,
    untransformable_types: BTreeSet<String>,
    max_image_length: u64,
    primary_statement_placeholders: Vec<String>,
    monetary_declaration_statements: Vec<String>,
    severity_overrides: BTreeMap<DiagnosticKind, Severity>,
}

impl RuleConstantsRegistry {
    /// Registry with the built-in ESEF constants.
    pub fn new() -> Result<Self> {
        Self::from_config(&RulesConfig::default())
    }

    /// Registry with the built-in constants plus the given overrides.
    pub fn from_config(config: &RulesConfig) -> Result<Self> {
        let filename_rules = build_filename_rules()?;

        let mut disallowed = constants::DISALLOWED_URI_PATTERNS
            .iter()
            .map(|pattern| (*pattern).to_string())
            .collect::<Vec<_>>();
        for pattern in &config.extra_disallowed_uri_patterns {
            compile(pattern)?;
            disallowed.push(pattern.clone());
        }
        let disallowed_uris = compile(&whole_match_alternation(&disallowed))?;

        let mut versions = BTreeMap::new();
        for version in ReportingVersion::all().iter().copied() {
            let mut esef_namespaces = to_set(constants::ESEF_TAXONOMY_NAMESPACES);
            esef_namespaces.extend(config.extra_esef_namespaces.iter().cloned());
            versions.insert(
                version,
                VersionRules {
                    version,
                    mandatory_elements: ordered_unique(mandatory_table(version)),
                    esef_namespaces,
                },
            );
        }

        let severity_overrides = parse_severity_overrides(&config.severity)?;

        let registry = Self {
            filename_rules,
            disallowed_patterns: disallowed,
            disallowed_uris,
            versions,
            allowed_arcroles: to_set(constants::DEFINITION_ARCROLES),
            hypercube_arcroles: to_set(constants::HYPERCUBE_ARCROLES),
            default_dimension_linkroles: ordered_unique(constants::DEFAULT_DIMENSION_LINKROLES),
            line_items_not_qualified_linkrole: constants::LINE_ITEMS_NOT_QUALIFIED_LINKROLE
                .to_string(),
            untransformable_types: to_set(constants::UNTRANSFORMABLE_TYPES),
            max_image_length: config
                .max_image_length
                .unwrap_or(constants::MAX_IMAGE_LENGTH),
            primary_statement_placeholders: ordered_unique(
                constants::PRIMARY_STATEMENT_PLACEHOLDERS,
            ),
            monetary_declaration_statements: ordered_unique(
                constants::MONETARY_DECLARATION_STATEMENTS,
            ),
            severity_overrides,
        };

        debug!(
            roles = registry.filename_rules.len(),
            versions = registry.versions.len(),
            disallowed_patterns = registry.disallowed_patterns.len(),
            max_image_length = registry.max_image_length,
            severity_overrides = registry.severity_overrides.len(),
            "rule constants registry built"
        );

        Ok(registry)
    }

    /// Filename rule for a role. Fails rather than skipping the check.
    pub fn filename_rule(&self, role: LinkbaseRole) -> Result<&FilenameRule> {
        self.filename_rules
            .get(&role)
            .ok_or(ConfigurationError::MissingRole { role })
    }

    pub fn filename_rules(&self) -> impl Iterator<Item = &FilenameRule> {
        self.filename_rules.values()
    }

    /// Resolve a role from its name, short code, or `linkbaseRef` role URI.
    pub fn role(&self, name: &str) -> Result<LinkbaseRole> {
        let role = LinkbaseRole::from_linkbase_ref_role(name)
            .or_else(|| name.parse::<LinkbaseRole>().ok())
            .ok_or_else(|| ConfigurationError::unknown_role(name))?;
        self.filename_rule(role)?;
        Ok(role)
    }

    /// Disallowed reference patterns, built-in first.
    pub fn disallowed_uri_patterns(&self) -> &[String] {
        &self.disallowed_patterns
    }

    pub fn disallowed_uris(&self) -> &Regex {
        &self.disallowed_uris
    }

    pub fn is_disallowed_uri(&self, uri: &str) -> bool {
        self.disallowed_uris.is_match(uri.trim())
    }

    /// Rules for a version identifier such as "2022".
    pub fn version(&self, id: &str) -> Result<&VersionRules> {
        self.version_rules(ReportingVersion::parse(id)?)
    }

    pub fn version_rules(&self, version: ReportingVersion) -> Result<&VersionRules> {
        self.versions
            .get(&version)
            .ok_or_else(|| ConfigurationError::unknown_version(version.as_str()))
    }

    pub fn mandatory_elements(&self, version: ReportingVersion) -> Result<&[String]> {
        Ok(self.version_rules(version)?.mandatory_elements())
    }

    pub fn allowed_arcroles(&self) -> impl Iterator<Item = &str> {
        self.allowed_arcroles.iter().map(String::as_str)
    }

    pub fn is_allowed_arcrole(&self, arcrole: &str) -> bool {
        self.allowed_arcroles.contains(arcrole)
    }

    /// True for `all` and `notAll`, the hypercube declaration arcroles.
    pub fn is_hypercube_arcrole(&self, arcrole: &str) -> bool {
        self.hypercube_arcroles.contains(arcrole)
    }

    pub fn default_dimension_linkroles(&self) -> &[String] {
        &self.default_dimension_linkroles
    }

    pub fn line_items_not_qualified_linkrole(&self) -> &str {
        &self.line_items_not_qualified_linkrole
    }

    /// Linkroles a hypercube declaration may be placed in.
    pub fn is_allowed_hypercube_linkrole(&self, linkrole: &str) -> bool {
        linkrole == self.line_items_not_qualified_linkrole
            || self
                .default_dimension_linkroles
                .iter()
                .any(|role| role == linkrole)
    }

    pub fn untransformable_types(&self) -> impl Iterator<Item = &str> {
        self.untransformable_types.iter().map(String::as_str)
    }

    /// Expects a datatype local name (`anyURI`, not `xs:anyURI`).
    pub fn is_untransformable(&self, datatype: &str) -> bool {
        self.untransformable_types.contains(datatype)
    }

    pub fn max_image_length(&self) -> u64 {
        self.max_image_length
    }

    pub fn primary_statement_placeholders(&self) -> &[String] {
        &self.primary_statement_placeholders
    }

    pub fn monetary_declaration_statements(&self) -> &[String] {
        &self.monetary_declaration_statements
    }

    pub fn severity_override(&self, kind: DiagnosticKind) -> Option<Severity> {
        self.severity_overrides.get(&kind).copied()
    }
}

fn build_filename_rules() -> Result<BTreeMap<LinkbaseRole, FilenameRule>> {
    let mut rules = BTreeMap::new();
    for (code, pattern, regex) in constants::FILENAME_RULES {
        let role = code
            .parse::<LinkbaseRole>()
            .map_err(|_| ConfigurationError::unknown_role(*code))?;
        let rule = FilenameRule {
            role,
            pattern: (*pattern).to_string(),
            regex: compile(regex)?,
        };
        if rules.insert(role, rule).is_some() {
            return Err(ConfigurationError::DuplicateRole { role });
        }
    }
    for role in LinkbaseRole::all() {
        if !rules.contains_key(role) {
            return Err(ConfigurationError::MissingRole { role: *role });
        }
    }
    Ok(rules)
}

fn mandatory_table(version: ReportingVersion) -> &'static [&'static str] {
    match version {
        ReportingVersion::Esef2020 => constants::MANDATORY_ELEMENTS_2020,
        ReportingVersion::Esef2022 => constants::MANDATORY_ELEMENTS_2022,
    }
}

fn parse_severity_overrides(
    raw: &BTreeMap<String, String>,
) -> Result<BTreeMap<DiagnosticKind, Severity>> {
    let mut overrides = BTreeMap::new();
    for (rule_id, value) in raw {
        let kind =
            DiagnosticKind::from_rule_id(rule_id).ok_or_else(|| ConfigurationError::UnknownRuleId {
                rule_id: rule_id.clone(),
            })?;
        let severity = Severity::parse(value).ok_or_else(|| ConfigurationError::InvalidSeverity {
            rule_id: rule_id.clone(),
            value: value.clone(),
        })?;
        overrides.insert(kind, severity);
    }
    Ok(overrides)
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| ConfigurationError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// `^(?:(?:a)|(?:b))(?:[#?].*)?$`: an alternative must match the whole URI
/// up to an optional fragment or query.
fn whole_match_alternation(patterns: &[String]) -> String {
    let alternatives = patterns
        .iter()
        .map(|pattern| format!("(?:{pattern})"))
        .collect::<Vec<_>>()
        .join("|");
    format!("^(?:{alternatives})(?:[#?].*)?$")
}

fn to_set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

/// Drop repeated entries, keeping the first occurrence's position.
fn ordered_unique(values: &[&str]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    values
        .iter()
        .filter(|value| seen.insert(**value))
        .map(|value| (*value).to_string())
        .collect()
}
