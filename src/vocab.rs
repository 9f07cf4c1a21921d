//! Vocabulary identifiers
//!
//! Every identifier the generator emits, in one place: RDFS for class
//! declarations, OWL for property and restriction declarations, XSD for
//! literal datatypes, and the `linkedql:` namespace for the query language's
//! own classes and properties.

/// Namespace prefix applied to registered type names and field tags.
pub const NAMESPACE: &str = "linkedql:";

// Base vocabulary classes
pub const STEP: &str = "linkedql:Step";
pub const VALUE_STEP: &str = "linkedql:ValueStep";
pub const OPERATOR: &str = "linkedql:Operator";
pub const RESOURCE: &str = "rdfs:Resource";

// Document type tags
pub const RDFS_CLASS: &str = "rdfs:Class";
pub const OWL_RESTRICTION: &str = "owl:Restriction";
pub const DATATYPE_PROPERTY: &str = "owl:DatatypeProperty";
pub const OBJECT_PROPERTY: &str = "owl:ObjectProperty";

// XSD literal datatypes
pub const XSD_STRING: &str = "xsd:string";
pub const XSD_BOOL: &str = "xsd:bool";
pub const XSD_INT: &str = "xsd:int";

/// Prefix mapping for serializing the corpus as a standalone JSON-LD
/// document.
pub fn context() -> serde_json::Value {
    serde_json::json!({
        "rdfs": "http://www.w3.org/2000/01/rdf-schema#",
        "owl": "http://www.w3.org/2002/07/owl#",
        "xsd": "http://www.w3.org/2001/XMLSchema#",
        "linkedql": "http://cayley.io/linkedql#",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_declares_all_emitted_prefixes() {
        let context = context();
        for prefix in ["rdfs", "owl", "xsd", "linkedql"] {
            assert!(
                context.get(prefix).is_some(),
                "missing prefix {prefix} in @context"
            );
        }
    }
}
