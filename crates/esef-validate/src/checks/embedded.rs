//! Embedded resource checks: image payload size and hidden facts whose
//! datatype has no inline transformation.

use esef_model::{EmbeddedImage, TaggedFact};
use esef_standards::RuleConstantsRegistry;

use crate::issue::Issue;

/// Images whose encoded payload exceeds the registry limit.
pub fn check_images(images: &[EmbeddedImage], registry: &RuleConstantsRegistry) -> Vec<Issue> {
    let max_allowed = registry.max_image_length();
    images
        .iter()
        .filter(|image| image.encoded_length > max_allowed)
        .map(|image| Issue::ImageTooLarge {
            source: image.source.clone(),
            length: image.encoded_length,
            max_allowed,
        })
        .collect()
}

/// Hidden facts whose XSD base type is untransformable.
pub fn check_hidden_facts(facts: &[TaggedFact], registry: &RuleConstantsRegistry) -> Vec<Issue> {
    facts
        .iter()
        .filter(|fact| fact.hidden && registry.is_untransformable(fact.base_datatype()))
        .map(|fact| Issue::UntransformableHiddenFact {
            concept: fact.concept.clone(),
            datatype: fact.datatype_local_name().to_string(),
        })
        .collect()
}
