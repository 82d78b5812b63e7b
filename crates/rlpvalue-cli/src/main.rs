//! `rlpv` CLI: check, format, query and summarize JSON documents from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Validate that stdin holds exactly one JSON document
//! echo '{"a":1}' | rlpv check
//!
//! # Rewrite compactly, or pretty-printed with 2 spaces per level
//! rlpv fmt -i data.json
//! rlpv fmt -i data.json -o pretty.json --indent 2
//!
//! # Pull out one element (numeric segments index arrays, others are keys)
//! rlpv get result.txs.0.amount -i block.json
//!
//! # Count values per kind and report the nesting depth
//! rlpv stats -i block.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rlpvalue::{Kind, Value};
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "rlpv", version, about = "Exact-text JSON checker and formatter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the input is exactly one well-formed JSON document
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Rewrite JSON compactly or pretty-printed; numbers keep their exact text
    Fmt {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Spaces per nesting level; 0 writes compact JSON
        #[arg(long, default_value_t = 0)]
        indent: usize,
    },
    /// Print the value at a dot-separated path, or null if it is absent
    Get {
        /// Path such as `result.items.0.name`; an empty path selects the root
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Show value counts per kind and the maximum nesting depth
    Stats {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { input } => {
            read_document(input.as_deref())?;
            println!("ok");
        }
        Commands::Fmt {
            input,
            output,
            indent,
        } => {
            let value = read_document(input.as_deref())?;
            let mut text = value.write_pretty(indent);
            text.push('\n');
            write_output(output.as_deref(), &text)?;
        }
        Commands::Get { path, input } => {
            let value = read_document(input.as_deref())?;
            println!("{}", lookup(&value, &path).write());
        }
        Commands::Stats { input } => {
            let value = read_document(input.as_deref())?;
            let mut stats = Stats::default();
            stats.visit(&value, 0);
            println!("objects:    {}", stats.count(Kind::Object));
            println!("arrays:     {}", stats.count(Kind::Array));
            println!("strings:    {}", stats.count(Kind::Str));
            println!("numbers:    {}", stats.count(Kind::Num));
            println!("bools:      {}", stats.count(Kind::Bool));
            println!("nulls:      {}", stats.count(Kind::Null));
            println!("max depth:  {}", stats.max_depth);
        }
    }

    Ok(())
}

/// Walk `path` one segment at a time. A segment that parses as an index is tried as
/// an array position first and as an object key otherwise, so `{"0": ...}` still works.
/// Misses fall through to the shared null value instead of failing.
fn lookup<'a>(root: &'a Value, path: &str) -> &'a Value {
    if path.is_empty() {
        return root;
    }
    path.split('.').fold(root, |node, segment| match segment.parse::<usize>() {
        Ok(index) if node.is_array() => &node[index],
        _ => &node[segment],
    })
}

/// Per-kind value counts and deepest container nesting.
#[derive(Default)]
struct Stats {
    counts: [usize; 6],
    max_depth: usize,
}

impl Stats {
    fn visit(&mut self, value: &Value, depth: usize) {
        self.counts[kind_slot(value.kind())] += 1;
        if value.is_array() || value.is_object() {
            self.max_depth = self.max_depth.max(depth + 1);
        }
        for child in value.values() {
            self.visit(child, depth + 1);
        }
    }

    fn count(&self, kind: Kind) -> usize {
        self.counts[kind_slot(kind)]
    }
}

fn kind_slot(kind: Kind) -> usize {
    match kind {
        Kind::Null => 0,
        Kind::Bool => 1,
        Kind::Object => 2,
        Kind::Array => 3,
        Kind::Str => 4,
        Kind::Num => 5,
    }
}

fn read_document(path: Option<&str>) -> Result<Value> {
    let text = read_input(path)?;
    let mut value = Value::new();
    value
        .read(&text)
        .context("Input is not a single well-formed JSON document")?;
    Ok(value)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
