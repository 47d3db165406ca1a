// SPDX-License-Identifier: MIT OR Apache-2.0
//! cosan CLI binary - mapping-driven comparison of JSON documents

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cosan_compare::{Comparison, Mapping, MappingEntry, compare_documents, correlate};
use cosan_core::path::ParsedPath;
use cosan_core::pointers::{leaf_pointers, pointer_entry};
use cosan_core::resolve::resolve_node;
use serde::Serialize;
use serde_json::Value;

#[derive(Parser)]
#[command(name = "cosan")]
#[command(version, about, long_about = None)]
struct Args {
    /// Verbose diagnostics (per-row mapping and resolution detail)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Subcommands for cosan CLI
#[derive(Subcommand)]
enum Commands {
    /// Compare two JSON documents under a field mapping
    Compare {
        /// Old-side JSON document
        old: PathBuf,
        /// New-side JSON document
        new: PathBuf,
        /// Mapping CSV: old path, new path per row; first row is a header
        #[arg(short, long)]
        mapping: PathBuf,
        /// Write the report CSV here (stdout if not provided)
        #[arg(long)]
        report: Option<PathBuf>,
        /// Write the result tree JSON here (stdout if not provided)
        #[arg(long)]
        tree: Option<PathBuf>,
    },
    /// Generate a mapping skeleton from two sample documents
    Scaffold {
        /// Old-side JSON document
        old: PathBuf,
        /// New-side JSON document
        new: PathBuf,
        /// Output CSV (stdout if not provided)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Pair up documents from two collections that share mapped values
    Correlate {
        /// Old-side JSON document
        old: PathBuf,
        /// New-side JSON document
        new: PathBuf,
        /// Mapping CSV: old path, new path per row; first row is a header
        #[arg(short, long)]
        mapping: PathBuf,
        /// Path expression locating the old-side item array
        #[arg(long, default_value = "")]
        old_items: String,
        /// Path expression locating the new-side item array
        #[arg(long, default_value = "")]
        new_items: String,
        /// Output JSON (stdout if not provided)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    match args.command {
        Commands::Compare { .. } => handle_compare(&args),
        Commands::Scaffold { .. } => handle_scaffold(&args),
        Commands::Correlate { .. } => handle_correlate(&args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn handle_compare(args: &Args) {
    if let Commands::Compare {
        old,
        new,
        mapping,
        report,
        tree,
    } = &args.command
        && let Err(e) = run_compare(old, new, mapping, report.as_ref(), tree.as_ref())
    {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run_compare(
    old: &Path,
    new: &Path,
    mapping_path: &Path,
    report: Option<&PathBuf>,
    tree: Option<&PathBuf>,
) -> Result<()> {
    let old_root = load_json(old)?;
    let new_root = load_json(new)?;
    let mapping = read_mapping(mapping_path)?;

    let comparison = compare_documents(&old_root, &new_root, &mapping)
        .context("building the comparison output")?;

    let report_csv = render_report(&comparison)?;
    match report {
        Some(path) => fs::write(path, &report_csv)
            .with_context(|| format!("writing report to {}", path.display()))?,
        None => write_output(&report_csv)?,
    }

    let tree_json = serde_json::to_string_pretty(&comparison.tree)?;
    match tree {
        Some(path) => fs::write(path, &tree_json)
            .with_context(|| format!("writing result tree to {}", path.display()))?,
        None => {
            write_output(&tree_json)?;
            write_output("\n")?;
        }
    }

    tracing::info!(rows = comparison.rows.len(), "comparison complete");
    Ok(())
}

fn handle_scaffold(args: &Args) {
    if let Commands::Scaffold { old, new, output } = &args.command
        && let Err(e) = run_scaffold(old, new, output.as_ref())
    {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run_scaffold(old: &Path, new: &Path, output: Option<&PathBuf>) -> Result<()> {
    let old_root = load_json(old)?;
    let new_root = load_json(new)?;
    let skeleton = render_scaffold(&old_root, &new_root)?;
    match output {
        Some(path) => fs::write(path, &skeleton)
            .with_context(|| format!("writing skeleton to {}", path.display()))?,
        None => write_output(&skeleton)?,
    }
    Ok(())
}

fn handle_correlate(args: &Args) {
    if let Commands::Correlate {
        old,
        new,
        mapping,
        old_items,
        new_items,
        output,
    } = &args.command
        && let Err(e) = run_correlate(old, new, mapping, old_items, new_items, output.as_ref())
    {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run_correlate(
    old: &Path,
    new: &Path,
    mapping_path: &Path,
    old_items: &str,
    new_items: &str,
    output: Option<&PathBuf>,
) -> Result<()> {
    let old_root = load_json(old)?;
    let new_root = load_json(new)?;
    let mapping = read_mapping(mapping_path)?;

    let old_docs = item_array(&old_root, old_items, "--old-items")?;
    let new_docs = item_array(&new_root, new_items, "--new-items")?;

    let pairs = correlate(old_docs, new_docs, &mapping);
    let rendered: Vec<MatchedPair<'_>> = pairs
        .iter()
        .map(|&(old_index, new_index)| MatchedPair {
            old: &old_docs[old_index],
            new: &new_docs[new_index],
        })
        .collect();
    let text = serde_json::to_string_pretty(&rendered)?;

    match output {
        Some(path) => fs::write(path, &text)
            .with_context(|| format!("writing pairs to {}", path.display()))?,
        None => {
            write_output(&text)?;
            write_output("\n")?;
        }
    }

    tracing::info!(pairs = pairs.len(), "correlation complete");
    Ok(())
}

/// One correlated document pair, as written to the correlate output.
#[derive(Serialize)]
struct MatchedPair<'doc> {
    old: &'doc Value,
    new: &'doc Value,
}

/// Locate the collection a correlate side draws its documents from.
fn item_array<'doc>(root: &'doc Value, path: &str, flag: &str) -> Result<&'doc [Value]> {
    let parsed = ParsedPath::parse(path);
    let node = resolve_node(root, &parsed)
        .with_context(|| format!("{flag} path `{path}` not found in the document"))?;
    match node {
        Value::Array(items) => Ok(items),
        _ => anyhow::bail!("{flag} path `{path}` does not address an array"),
    }
}

/// Read a mapping CSV. The first row is a header and is skipped; rows
/// with a missing or empty cell are skipped with a diagnostic.
fn read_mapping(path: &Path) -> Result<Mapping> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening mapping file {}", path.display()))?;

    let mut mapping = Mapping::new();
    for (index, record) in reader.records().enumerate() {
        let row = index + 2; // 1-based, after the header
        let record = match record {
            Ok(record) => record,
            Err(error) => {
                tracing::warn!(row, %error, "skipping unreadable mapping row");
                continue;
            }
        };
        match (record.get(0), record.get(1)) {
            (Some(old_path), Some(new_path)) if !old_path.is_empty() && !new_path.is_empty() => {
                tracing::debug!(old = old_path, new = new_path, "mapping added");
                mapping.push(MappingEntry::new(old_path, new_path));
            }
            _ => tracing::warn!(row, "skipping mapping row with missing cells"),
        }
    }
    Ok(mapping)
}

/// Render the report in the comparison's row order, absent values as
/// `null`.
fn render_report(comparison: &Comparison) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "Old Path",
        "New Path",
        "Old Value",
        "New Value",
        "Matched/Not Matched",
    ])?;
    for row in &comparison.rows {
        let status = row.status.to_string();
        writer.write_record([
            row.old_path.as_str(),
            row.new_path.as_str(),
            row.old_value.as_deref().unwrap_or("null"),
            row.new_value.as_deref().unwrap_or("null"),
            status.as_str(),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|error| anyhow::anyhow!("flushing report buffer: {error}"))?;
    Ok(String::from_utf8(bytes)?)
}

/// Render the leaf inventories of both documents side by side, as a
/// starting point for a hand-edited mapping.
fn render_scaffold(old_root: &Value, new_root: &Value) -> Result<String> {
    let old_pointers = leaf_pointers(old_root);
    let new_pointers = leaf_pointers(new_root);

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "Old (Key:Value)",
        "Old Pointer",
        "New (Key:Value)",
        "New Pointer",
    ])?;
    for index in 0..old_pointers.len().max(new_pointers.len()) {
        let old_pointer = old_pointers.get(index);
        let new_pointer = new_pointers.get(index);
        let old_preview = old_pointer.and_then(|pointer| pointer_entry(old_root, pointer));
        let new_preview = new_pointer.and_then(|pointer| pointer_entry(new_root, pointer));
        writer.write_record([
            old_preview.as_deref().unwrap_or(""),
            old_pointer.map_or("", |pointer| pointer.as_str()),
            new_preview.as_deref().unwrap_or(""),
            new_pointer.map_or("", |pointer| pointer.as_str()),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|error| anyhow::anyhow!("flushing skeleton buffer: {error}"))?;
    Ok(String::from_utf8(bytes)?)
}

fn load_json(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path.display()))
}

fn write_output(output: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(output.as_bytes())?;
    Ok(())
}
