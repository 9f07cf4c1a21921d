//! Built-in step vocabulary
//!
//! The step and value-step types that ship with the query language, declared
//! as descriptor tables and registered under their namespaced names. Every
//! field kind the range resolver knows appears somewhere in this catalog, so
//! exercising the whole registry in tests covers the full mapping table.

use crate::descriptor::{FieldType, TypeDescriptor};
use crate::error::Result;
use crate::registry::TypeRegistry;

/// Register the built-in step and value-step types into `registry`.
pub fn register_builtin(registry: &mut TypeRegistry) -> Result<()> {
    registry.register(
        "linkedql:As",
        TypeDescriptor::step()
            .with_field("from", FieldType::step())
            .with_field("tags", FieldType::sequence_of(FieldType::String)),
    )?;
    registry.register(
        "linkedql:Back",
        TypeDescriptor::step()
            .with_field("from", FieldType::step())
            .with_field("name", FieldType::String),
    )?;
    registry.register(
        "linkedql:Both",
        TypeDescriptor::step()
            .with_field("from", FieldType::step())
            .with_field("via", FieldType::value()),
    )?;
    registry.register(
        "linkedql:Count",
        TypeDescriptor::value_step().with_field("from", FieldType::step()),
    )?;
    registry.register(
        "linkedql:Filter",
        TypeDescriptor::step()
            .with_field("from", FieldType::step())
            .with_field("filter", FieldType::operator()),
    )?;
    registry.register(
        "linkedql:Has",
        TypeDescriptor::step()
            .with_field("from", FieldType::step())
            .with_field("via", FieldType::value())
            .with_field("values", FieldType::sequence_of(FieldType::value())),
    )?;
    registry.register(
        "linkedql:In",
        TypeDescriptor::step()
            .with_field("from", FieldType::step())
            .with_field("via", FieldType::value()),
    )?;
    registry.register(
        "linkedql:Intersect",
        TypeDescriptor::step()
            .with_field("from", FieldType::step())
            .with_field("steps", FieldType::sequence_of(FieldType::step())),
    )?;
    registry.register(
        "linkedql:Limit",
        TypeDescriptor::step()
            .with_field("from", FieldType::step())
            .with_field("limit", FieldType::Int),
    )?;
    registry.register(
        "linkedql:Order",
        TypeDescriptor::step()
            .with_field("from", FieldType::step())
            .with_field("descending", FieldType::Bool),
    )?;
    registry.register(
        "linkedql:Out",
        TypeDescriptor::step()
            .with_field("from", FieldType::step())
            .with_field("via", FieldType::value()),
    )?;
    registry.register(
        "linkedql:Select",
        TypeDescriptor::value_step()
            .with_field("from", FieldType::step())
            .with_field("tags", FieldType::sequence_of(FieldType::String)),
    )?;
    registry.register(
        "linkedql:Skip",
        TypeDescriptor::step()
            .with_field("from", FieldType::step())
            .with_field("offset", FieldType::Int),
    )?;
    registry.register(
        "linkedql:Union",
        TypeDescriptor::step()
            .with_field("from", FieldType::step())
            .with_field("steps", FieldType::sequence_of(FieldType::step())),
    )?;
    registry.register(
        "linkedql:Vertex",
        TypeDescriptor::step().with_field("values", FieldType::sequence_of(FieldType::value())),
    )?;
    Ok(())
}

/// A registry pre-populated with the built-in vocabulary.
pub fn default_registry() -> Result<TypeRegistry> {
    let mut registry = TypeRegistry::new();
    register_builtin(&mut registry)?;
    Ok(registry)
}
