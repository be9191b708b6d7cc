//! Mandatory disclosure coverage.
//!
//! One issue per mandatory element with no tagged fact, in the order of the
//! version's table. A filing with no facts at all reports every element.

use std::collections::HashSet;

use esef_model::TaggedFact;
use esef_standards::VersionRules;

use crate::issue::Issue;

pub fn check(version: &VersionRules, facts: &[TaggedFact]) -> Vec<Issue> {
    let tagged: HashSet<&str> = facts.iter().map(TaggedFact::concept_local_name).collect();

    version
        .mandatory_elements()
        .iter()
        .filter(|element| !tagged.contains(element.as_str()))
        .map(|element| Issue::MissingMandatoryTag {
            element: element.clone(),
            version: version.version(),
        })
        .collect()
}
