//! Linkbase file naming (Reporting Manual guidance 2.6.1).
//!
//! Names follow `{base}-{date}_{suffix}.xml`, labels additionally carry a
//! language tag (`_lab-en`, `_lab-de-CH`). Matching is case-sensitive and
//! never looks at file contents.

use chrono::NaiveDate;
use esef_model::LinkbaseFileDescriptor;
use esef_standards::{FilenameRule, Result, RuleConstantsRegistry};
use tracing::trace;

use crate::issue::{FilenameDefect, Issue};

/// Components extracted from a conforming file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameParts {
    pub base: String,
    pub date: NaiveDate,
    /// Language tag of a label linkbase.
    pub language: Option<String>,
}

/// Check every linkbase descriptor.
pub fn check_all(
    descriptors: &[LinkbaseFileDescriptor],
    registry: &RuleConstantsRegistry,
) -> Result<Vec<Issue>> {
    let mut issues = Vec::new();
    for descriptor in descriptors {
        issues.extend(check(descriptor, registry)?);
    }
    Ok(issues)
}

/// Check one descriptor against its role's naming rule.
pub fn check(
    descriptor: &LinkbaseFileDescriptor,
    registry: &RuleConstantsRegistry,
) -> Result<Vec<Issue>> {
    let rule = registry.filename_rule(descriptor.role)?;
    let file_name = bare_file_name(&descriptor.file_name);

    match parse_file_name(rule, file_name) {
        Ok(parts) => {
            trace!(
                file = file_name,
                base = %parts.base,
                date = %parts.date,
                "linkbase file name accepted"
            );
            Ok(Vec::new())
        }
        Err(defect) => Ok(vec![Issue::FilenameMismatch {
            file_name: file_name.to_string(),
            role: descriptor.role,
            expected: rule.expected_name("{base}", "{date}", descriptor.language.as_deref()),
            defect,
        }]),
    }
}

/// Match a file name against a rule and extract its parts.
pub fn parse_file_name(
    rule: &FilenameRule,
    file_name: &str,
) -> std::result::Result<FilenameParts, FilenameDefect> {
    let captures = rule
        .regex()
        .captures(file_name)
        .ok_or(FilenameDefect::PatternMismatch)?;

    let base = captures
        .name("base")
        .map(|m| m.as_str().to_string())
        .ok_or(FilenameDefect::PatternMismatch)?;
    let raw_date = captures
        .name("date")
        .map(|m| m.as_str())
        .ok_or(FilenameDefect::PatternMismatch)?;
    let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d").map_err(|_| {
        FilenameDefect::InvalidDate {
            date: raw_date.to_string(),
        }
    })?;
    let language = captures.name("lang").map(|m| m.as_str().to_string());

    if rule.role().requires_language() && language.is_none() {
        return Err(FilenameDefect::PatternMismatch);
    }

    Ok(FilenameParts {
        base,
        date,
        language,
    })
}

/// Drop any directory components the host left on the name.
fn bare_file_name(name: &str) -> &str {
    name.rsplit(['/', '\\']).next().unwrap_or(name)
}
