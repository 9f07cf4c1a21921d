//! Range resolution
//!
//! Maps a field's declared type to the ontology identifier appearing as
//! that field's `rdfs:range`, and a type's own capabilities to its base
//! superclass.

use crate::descriptor::{Capabilities, FieldType};
use crate::document::Identified;
use crate::vocab;

/// Resolve the ontology identifier for values of a declared field type.
///
/// Sequences resolve to their element type; the "many" cardinality is
/// expressed by the absence of a cardinality restriction, not by the range.
///
/// # Panics
///
/// Panics if the declared type matches none of the mapping rules. A field
/// type reaching that point means a new kind was introduced without
/// extending this table; the vocabulary tests exercise every registered
/// field so the abort happens at test time, never in production use.
pub fn resolve_range(field_type: &FieldType) -> Identified {
    match field_type {
        FieldType::Sequence(element) => resolve_range(element),
        FieldType::String => Identified::new(vocab::XSD_STRING),
        FieldType::Bool => Identified::new(vocab::XSD_BOOL),
        FieldType::Int => Identified::new(vocab::XSD_INT),
        FieldType::Typed(capabilities) => {
            // A value step also satisfies the step capability; the more
            // specific class has to win.
            if capabilities.value_step {
                Identified::new(vocab::VALUE_STEP)
            } else if capabilities.step {
                Identified::new(vocab::STEP)
            } else if capabilities.operator {
                Identified::new(vocab::OPERATOR)
            } else if capabilities.value {
                Identified::new(vocab::RESOURCE)
            } else {
                panic!("no range mapping for field type {field_type:?}")
            }
        }
    }
}

/// The base vocabulary class a registered type descends from: value steps
/// under `linkedql:ValueStep`, everything else under `linkedql:Step`.
pub fn step_superclass(capabilities: &Capabilities) -> Identified {
    if capabilities.value_step {
        Identified::new(vocab::VALUE_STEP)
    } else {
        Identified::new(vocab::STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_ranges() {
        assert_eq!(resolve_range(&FieldType::String).id, "xsd:string");
        assert_eq!(resolve_range(&FieldType::Bool).id, "xsd:bool");
        assert_eq!(resolve_range(&FieldType::Int).id, "xsd:int");
    }

    #[test]
    fn test_capability_ranges_most_specific_first() {
        assert_eq!(resolve_range(&FieldType::value_step()).id, "linkedql:ValueStep");
        assert_eq!(resolve_range(&FieldType::step()).id, "linkedql:Step");
        assert_eq!(resolve_range(&FieldType::operator()).id, "linkedql:Operator");
        assert_eq!(resolve_range(&FieldType::value()).id, "rdfs:Resource");
    }

    #[test]
    fn test_sequences_resolve_to_element_range() {
        let tags = FieldType::sequence_of(FieldType::String);
        assert_eq!(resolve_range(&tags).id, "xsd:string");

        let nested = FieldType::sequence_of(FieldType::sequence_of(FieldType::step()));
        assert_eq!(resolve_range(&nested).id, "linkedql:Step");
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let field_type = FieldType::sequence_of(FieldType::value());
        assert_eq!(resolve_range(&field_type), resolve_range(&field_type));
    }

    #[test]
    fn test_step_superclass() {
        assert_eq!(step_superclass(&Capabilities::step()).id, "linkedql:Step");
        assert_eq!(
            step_superclass(&Capabilities::value_step()).id,
            "linkedql:ValueStep"
        );
        // Anything without the value step capability falls back to Step
        assert_eq!(step_superclass(&Capabilities::default()).id, "linkedql:Step");
    }

    #[test]
    #[should_panic(expected = "no range mapping")]
    fn test_unmapped_type_aborts() {
        // A reference with no capabilities at all has no resolution rule
        resolve_range(&FieldType::Typed(Capabilities::default()));
    }
}
