//! Corpus serialization
//!
//! Helpers for turning the generated document sequence into a standalone
//! JSON-LD byte stream: the `@context`/`@graph` envelope and pretty/compact
//! writing. The core generator stays I/O-free; everything here sits on top
//! of its output.

use std::io::Write;

use serde_json::Value;

use crate::document::Document;
use crate::error::Result;
use crate::vocab;

/// Output format for serialized JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Compact,
}

/// Wrap the document sequence in a JSON-LD envelope with the vocabulary's
/// prefix context.
pub fn wrap_graph(documents: &[Document]) -> Result<Value> {
    Ok(serde_json::json!({
        "@context": vocab::context(),
        "@graph": serde_json::to_value(documents)?,
    }))
}

/// Write a JSON value in the requested format, with a trailing newline.
pub fn write_json(value: &Value, writer: &mut impl Write, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Pretty => serde_json::to_writer_pretty(&mut *writer, value)?,
        OutputFormat::Compact => serde_json::to_writer(&mut *writer, value)?,
    }
    writeln!(writer)?;
    Ok(())
}
