//! Type registry
//!
//! Owns the mapping from registered vocabulary type names to their
//! descriptors. The registry is an explicit object constructed by the
//! caller; registration happens through [`TypeRegistry::register`] and the
//! registry is read-only while a schema is being generated.

use std::collections::BTreeMap;

use crate::descriptor::TypeDescriptor;
use crate::error::{Result, SchemaError};

/// Registry of vocabulary type descriptors.
///
/// Iteration order is lexical by registered name so that generated output is
/// reproducible across runs.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: BTreeMap<String, TypeDescriptor>,
}

impl TypeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type descriptor under the given name
    ///
    /// Names are registered at most once; a second registration under the
    /// same name is rejected.
    pub fn register(&mut self, name: impl Into<String>, descriptor: TypeDescriptor) -> Result<()> {
        let name = name.into();
        if self.types.contains_key(&name) {
            return Err(SchemaError::DuplicateType { name });
        }
        self.types.insert(name, descriptor);
        Ok(())
    }

    /// Look up a descriptor by registered name
    pub fn get(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.get(name)
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the registry has no entries
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate over (name, descriptor) pairs in lexical name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeDescriptor)> {
        self.types.iter().map(|(name, descriptor)| (name.as_str(), descriptor))
    }
}
