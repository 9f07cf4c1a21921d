//! Schema document synthesis
//!
//! Turns one registered type into its ordered document block, and the whole
//! registry into the full schema corpus.

use tracing::debug;

use crate::blank::BlankNodeGenerator;
use crate::descriptor::TypeDescriptor;
use crate::document::{CardinalityRestriction, Class, Document, Identified, Property};
use crate::registry::TypeRegistry;
use crate::resolve;
use crate::vocab;

/// Produce the ordered document block for a single registered type.
///
/// Each scalar field contributes a (restriction, property) pair and each
/// sequence field a lone property, in field declaration order; the class
/// document for the type itself comes last. The class's superclass list
/// starts with its base vocabulary class and accumulates one restriction
/// reference per scalar field.
pub fn type_documents(
    name: &str,
    descriptor: &TypeDescriptor,
    blank_nodes: &mut dyn BlankNodeGenerator,
) -> Vec<Document> {
    let mut documents = Vec::new();
    let mut super_classes = vec![resolve::step_superclass(&descriptor.capabilities)];

    for field in &descriptor.fields {
        let property = format!("{}{}", vocab::NAMESPACE, field.tag);

        if !field.field_type.is_sequence() {
            let restriction = blank_nodes.next_id();
            super_classes.push(Identified::new(restriction.clone()));
            documents.push(
                CardinalityRestriction::exactly_one(restriction, Identified::new(property.clone()))
                    .into(),
            );
        }

        // Classified on the field's outer kind: a sequence of strings still
        // emits owl:ObjectProperty even though its range resolves to
        // xsd:string.
        let kind = if field.field_type.is_primitive() {
            vocab::DATATYPE_PROPERTY
        } else {
            vocab::OBJECT_PROPERTY
        };

        documents.push(
            Property::new(
                property,
                kind,
                Identified::new(name),
                resolve::resolve_range(&field.field_type),
            )
            .into(),
        );
    }

    documents.push(Class::new(name, super_classes).into());
    documents
}

/// Generate the full schema corpus for every type in the registry.
///
/// Types are visited in the registry's lexical name order; within one type
/// the document order of [`type_documents`] applies. The result is a single
/// flat sequence, complete in one call.
pub fn generate_schema(
    registry: &TypeRegistry,
    blank_nodes: &mut dyn BlankNodeGenerator,
) -> Vec<Document> {
    let mut documents = Vec::new();
    for (name, descriptor) in registry.iter() {
        debug!(name, fields = descriptor.fields.len(), "synthesizing type documents");
        documents.extend(type_documents(name, descriptor, blank_nodes));
    }
    debug!(types = registry.len(), documents = documents.len(), "schema generated");
    documents
}
