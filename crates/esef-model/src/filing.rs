//! Filing document model supplied by the host.
//!
//! All types here are read-only inputs to the rule engine. The host builds
//! them from the discovered taxonomy set and the inline report; the engine
//! only borrows them.

use serde::{Deserialize, Serialize};

use crate::enums::LinkbaseRole;

/// One linkbase file of the filer's extension taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkbaseFileDescriptor {
    pub role: LinkbaseRole,
    /// File name without directory components (`acme-2021-12-31_cal.xml`).
    pub file_name: String,
    /// Language of a label linkbase, as declared by the host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl LinkbaseFileDescriptor {
    pub fn new(role: LinkbaseRole, file_name: impl Into<String>) -> Self {
        Self {
            role,
            file_name: file_name.into(),
            language: None,
        }
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// A schema import or schemaRef found in the filing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyReference {
    pub uri: String,
    /// Whether the host resolved the referenced schema.
    #[serde(default = "default_true")]
    pub resolved: bool,
    /// Whether the reference belongs to the filer's own extension taxonomy package.
    #[serde(default)]
    pub extension_package: bool,
}

impl TaxonomyReference {
    /// A resolved reference from outside the extension package.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            resolved: true,
            extension_package: false,
        }
    }

    #[must_use]
    pub fn in_extension_package(mut self) -> Self {
        self.extension_package = true;
        self
    }
}

fn default_true() -> bool {
    true
}

/// A dimensional relationship discovered in the definition linkbase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionalRelationshipArc {
    pub arcrole: String,
    pub source: String,
    pub target: String,
    /// Extended link role the arc is declared in.
    pub linkrole: String,
}

impl DimensionalRelationshipArc {
    pub fn new(
        arcrole: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
        linkrole: impl Into<String>,
    ) -> Self {
        Self {
            arcrole: arcrole.into(),
            source: source.into(),
            target: target.into(),
            linkrole: linkrole.into(),
        }
    }
}

/// A tagged fact from the inline report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedFact {
    /// Concept identifier: `prefix:Local`, `{namespace}Local` or a bare local name.
    pub concept: String,
    /// Datatype as declared: an XSD type (`xs:anyURI`) or an XBRL item type
    /// (`xbrli:anyURIItemType`), prefixed, in Clark notation or bare.
    pub datatype: String,
    #[serde(default)]
    pub value: String,
    /// True when the fact sits in the hidden section of the inline document.
    #[serde(default)]
    pub hidden: bool,
}

impl TaggedFact {
    pub fn new(concept: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            concept: concept.into(),
            datatype: datatype.into(),
            value: String::new(),
            hidden: false,
        }
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Concept local name with any prefix or namespace stripped.
    pub fn concept_local_name(&self) -> &str {
        local_name(&self.concept)
    }

    /// Datatype local name with any prefix or namespace stripped.
    pub fn datatype_local_name(&self) -> &str {
        local_name(&self.datatype)
    }

    /// XSD base type of the datatype: item types drop their `ItemType`
    /// suffix (`xbrli:tokenItemType` -> `token`).
    pub fn base_datatype(&self) -> &str {
        let local = self.datatype_local_name();
        match local.strip_suffix("ItemType") {
            Some(base) if !base.is_empty() => base,
            _ => local,
        }
    }
}

/// An image embedded in the inline document as a data URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddedImage {
    /// Where the image was found (element id or document path).
    pub source: String,
    /// Length in bytes of the base64-encoded payload.
    pub encoded_length: u64,
}

impl EmbeddedImage {
    pub fn new(source: impl Into<String>, encoded_length: u64) -> Self {
        Self {
            source: source.into(),
            encoded_length,
        }
    }
}

/// Everything the rule engine reads from one filing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilingModel {
    #[serde(default)]
    pub linkbases: Vec<LinkbaseFileDescriptor>,
    #[serde(default)]
    pub references: Vec<TaxonomyReference>,
    #[serde(default)]
    pub arcs: Vec<DimensionalRelationshipArc>,
    #[serde(default)]
    pub facts: Vec<TaggedFact>,
    #[serde(default)]
    pub images: Vec<EmbeddedImage>,
}

impl FilingModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the model carries no input of any kind.
    pub fn is_empty(&self) -> bool {
        self.linkbases.is_empty()
            && self.references.is_empty()
            && self.arcs.is_empty()
            && self.facts.is_empty()
            && self.images.is_empty()
    }
}

/// Strip a Clark-notation namespace or a QName prefix from an identifier.
pub fn local_name(identifier: &str) -> &str {
    let trimmed = identifier.trim();
    if let Some((_, local)) = trimmed.rsplit_once('}') {
        return local;
    }
    match trimmed.rsplit_once(':') {
        Some((_, local)) => local,
        None => trimmed,
    }
}
