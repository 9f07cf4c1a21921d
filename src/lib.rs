//! LinkedQL Schema Generator
//!
//! Converts the registered step and operator vocabulary of the LinkedQL
//! query language into a machine-readable semantic schema: a sequence of
//! JSON-LD documents describing classes, properties, and cardinality
//! constraints in the RDFS, OWL, and XSD vocabularies plus LinkedQL's own
//! `linkedql:` namespace. The output lets documentation generators,
//! validators, and linked-data browsers understand the vocabulary without
//! reading its source.
//!
//! ## Architecture
//!
//! ```text
//! TypeRegistry ──▶ generate_schema()
//!                    for each registered type:
//!                      resolve_range()    field type -> rdfs:range
//!                      type_documents()   restrictions + properties + class
//!                    ▼
//!                  Vec<Document> ──▶ {"@context": ..., "@graph": [...]}
//! ```
//!
//! Generation is a pure, synchronous pass over the registry; the only
//! injected dependency is the [`BlankNodeGenerator`] naming the restriction
//! documents. Substituting [`SequentialBlankNodes`] makes the full corpus
//! reproducible byte for byte.

pub mod blank;
pub mod descriptor;
pub mod document;
pub mod error;
pub mod export;
pub mod generate;
pub mod registry;
pub mod resolve;
pub mod steps;
pub mod vocab;

pub use blank::{BlankNodeGenerator, RandomBlankNodes, SequentialBlankNodes};
pub use descriptor::{Capabilities, Field, FieldType, TypeDescriptor};
pub use document::{CardinalityRestriction, Class, Document, Identified, Property};
pub use error::{Result, SchemaError};
pub use export::{wrap_graph, write_json, OutputFormat};
pub use generate::{generate_schema, type_documents};
pub use registry::TypeRegistry;
pub use resolve::{resolve_range, step_superclass};
pub use steps::{default_registry, register_builtin};
