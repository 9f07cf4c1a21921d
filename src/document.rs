//! JSON-LD document model
//!
//! The generator emits a heterogeneous sequence of these documents, each a
//! mapping with an `@id` key and, for typed documents, an `@type` key. Serde
//! renames carry the JSON-LD and OWL key names so the serialized form is a
//! valid JSON-LD node object as-is.

use serde::Serialize;

use crate::vocab;

/// A reference to another ontology entity by its identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identified {
    #[serde(rename = "@id")]
    pub id: String,
}

impl Identified {
    /// Create a reference to the entity with the given identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// An OWL restriction asserting an exact value count for a property on a
/// class.
///
/// Created once per scalar field at generation time, identified by a fresh
/// blank node label, and referenced exactly once from the owning class's
/// superclass list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardinalityRestriction {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub doc_type: String,
    #[serde(rename = "owl:cardinality")]
    pub cardinality: u32,
    #[serde(rename = "owl:onProperty")]
    pub property: Identified,
}

impl CardinalityRestriction {
    /// Create a restriction asserting that `property` has exactly one value
    pub fn exactly_one(id: impl Into<String>, property: Identified) -> Self {
        Self {
            id: id.into(),
            doc_type: vocab::OWL_RESTRICTION.to_string(),
            cardinality: 1,
            property,
        }
    }
}

/// An ontology property declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    #[serde(rename = "@id")]
    pub id: String,
    /// `owl:DatatypeProperty` or `owl:ObjectProperty`.
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "rdfs:domain")]
    pub domain: Identified,
    #[serde(rename = "rdfs:range")]
    pub range: Identified,
}

impl Property {
    /// Create a property declaration
    pub fn new(
        id: impl Into<String>,
        kind: impl Into<String>,
        domain: Identified,
        range: Identified,
    ) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            domain,
            range,
        }
    }
}

/// An ontology class declaration for one registered type.
///
/// The superclass list begins with exactly one base vocabulary class
/// (`linkedql:ValueStep` or `linkedql:Step`) followed by one restriction
/// reference per scalar field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Class {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub doc_type: String,
    #[serde(rename = "rdfs:subClassOf")]
    pub super_classes: Vec<Identified>,
}

impl Class {
    /// Create a class declaration with the given superclass list
    pub fn new(id: impl Into<String>, super_classes: Vec<Identified>) -> Self {
        Self {
            id: id.into(),
            doc_type: vocab::RDFS_CLASS.to_string(),
            super_classes,
        }
    }
}

/// A single document in the generated corpus.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Document {
    Restriction(CardinalityRestriction),
    Property(Property),
    Class(Class),
}

impl Document {
    /// The document's `@id`
    pub fn id(&self) -> &str {
        match self {
            Document::Restriction(r) => &r.id,
            Document::Property(p) => &p.id,
            Document::Class(c) => &c.id,
        }
    }
}

impl From<CardinalityRestriction> for Document {
    fn from(restriction: CardinalityRestriction) -> Self {
        Document::Restriction(restriction)
    }
}

impl From<Property> for Document {
    fn from(property: Property) -> Self {
        Document::Property(property)
    }
}

impl From<Class> for Document {
    fn from(class: Class) -> Self {
        Document::Class(class)
    }
}
