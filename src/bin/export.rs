//! Schema Export CLI
//!
//! Generates the JSON-LD schema for the built-in LinkedQL vocabulary and
//! writes it to a file or stdout.

use std::fs::File;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use linkedql_schemas::{
    default_registry, generate_schema, wrap_graph, write_json, OutputFormat, RandomBlankNodes,
    SequentialBlankNodes,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "schema-export")]
#[command(about = "Export the LinkedQL vocabulary as a JSON-LD schema")]
struct Cli {
    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,

    /// Emit the bare document array without the @context envelope
    #[arg(long)]
    bare: bool,

    /// Use the deterministic _:b0, _:b1, ... blank node sequence instead of
    /// random labels, for diffable output
    #[arg(long)]
    deterministic: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let registry = default_registry()?;

    let documents = if cli.deterministic {
        generate_schema(&registry, &mut SequentialBlankNodes::default())
    } else {
        generate_schema(&registry, &mut RandomBlankNodes)
    };

    let value = if cli.bare {
        serde_json::to_value(&documents)?
    } else {
        wrap_graph(&documents)?
    };

    let format = if cli.compact {
        OutputFormat::Compact
    } else {
        OutputFormat::Pretty
    };

    match cli.output {
        Some(path) => {
            let mut file = File::create(&path)?;
            write_json(&value, &mut file, format)?;
            println!(
                "✅ Wrote {} documents for {} types to {}",
                documents.len(),
                registry.len(),
                path.display()
            );
        }
        None => {
            write_json(&value, &mut io::stdout().lock(), format)?;
        }
    }

    Ok(())
}
