// Copyright 2025-present the trailhead authors
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the trailhead command-line interface.
//!
//! Three subcommands: `search` to query a content set, `export` to
//! emit the flattened document payload a site build would embed, and
//! `stats` to summarize what an index holds. All of them accept
//! `--content <DIR>` to load JSON collections from disk; without it
//! they fall back to the bundled sample content.

pub mod display;

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};

use trailhead::content::{self, ContentSet};
use trailhead::types::{DocumentType, SearchOptions, DEFAULT_LIMIT, MAX_LIMIT};
use trailhead::{build_documents, build_index, search, SearchDocument};

use display::{themed, timing_ms, type_badge, BOLD, CYAN, DIM, GRAY};

#[derive(Parser)]
#[command(
    name = "trailhead",
    about = "In-memory prefix search over destination content",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a content set and display ranked results
    Search {
        /// Search query (two characters minimum)
        query: String,

        /// Directory of content JSON files (defaults to bundled sample)
        #[arg(short, long)]
        content: Option<PathBuf>,

        /// Restrict results to one document type
        #[arg(short = 't', long = "type", value_parser = parse_document_type)]
        kind: Option<DocumentType>,

        /// Maximum number of results to return
        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,

        /// Emit results as a JSON array instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Export the flattened search documents as JSON
    Export {
        /// Directory of content JSON files (defaults to bundled sample)
        #[arg(short, long)]
        content: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show index statistics for a content set
    Stats {
        /// Directory of content JSON files (defaults to bundled sample)
        #[arg(short, long)]
        content: Option<PathBuf>,

        /// Emit statistics as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
}

fn parse_document_type(value: &str) -> Result<DocumentType, String> {
    value.parse()
}

/// Dispatch a parsed CLI invocation.
pub fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Search {
            query,
            content,
            kind,
            limit,
            json,
        } => run_search(&query, content.as_deref(), kind, limit, json),
        Commands::Export { content, pretty } => run_export(content.as_deref(), pretty),
        Commands::Stats { content, json } => run_stats(content.as_deref(), json),
    }
}

fn load_content(dir: Option<&std::path::Path>) -> Result<ContentSet, String> {
    match dir {
        Some(dir) => {
            let set = content::load_dir(dir)?;
            eprintln!("✓ Loaded {} records from {}", set.record_count(), dir.display());
            Ok(set)
        }
        None => {
            let set = content::sample();
            eprintln!("✓ Using bundled sample content ({} records)", set.record_count());
            Ok(set)
        }
    }
}

fn run_search(
    query: &str,
    content_dir: Option<&std::path::Path>,
    kind: Option<DocumentType>,
    limit: usize,
    json: bool,
) -> Result<(), String> {
    let set = load_content(content_dir)?;

    let started = Instant::now();
    let index = build_index(build_documents(&set)).map_err(|e| format!("{}", e))?;
    let build_ms = started.elapsed().as_secs_f64() * 1000.0;
    eprintln!("✓ Indexed {} documents in {:.1}ms", index.len(), build_ms);

    let options = SearchOptions {
        kind,
        limit: limit.min(MAX_LIMIT),
    };
    let started = Instant::now();
    let results = search(&index, query, &options);
    let query_ms = started.elapsed().as_secs_f64() * 1000.0;

    if json {
        let payload = serde_json::to_string(&results)
            .map_err(|e| format!("failed to encode results: {}", e))?;
        println!("{}", payload);
        eprintln!("✓ {} results in {:.1}ms", results.len(), query_ms);
        return Ok(());
    }

    if results.is_empty() {
        println!("No results for \"{}\"", query);
        return Ok(());
    }

    println!(
        "{} results for \"{}\" in {}",
        results.len(),
        query,
        timing_ms(query_ms)
    );
    println!();
    for (rank, document) in results.iter().enumerate() {
        print_result(rank + 1, document);
    }
    Ok(())
}

fn print_result(rank: usize, document: &SearchDocument) {
    println!(
        "{:>2}. {} {}",
        rank,
        type_badge(document.kind),
        themed(CYAN, &[BOLD], &document.title)
    );
    println!("    {}", themed(GRAY, &[], &document.href));
    if !document.snippet.is_empty() {
        println!("    {}", document.snippet);
    }
    let mut meta = Vec::new();
    if let Some(location) = &document.location {
        meta.push(location.clone());
    }
    if !document.tags.is_empty() {
        meta.push(document.tags.join(", "));
    }
    if !meta.is_empty() {
        println!("    {}", themed(GRAY, &[DIM], &meta.join(" | ")));
    }
    println!();
}

fn run_export(content_dir: Option<&std::path::Path>, pretty: bool) -> Result<(), String> {
    let set = load_content(content_dir)?;

    let started = Instant::now();
    let documents = build_documents(&set);
    let payload = if pretty {
        serde_json::to_string_pretty(&documents)
    } else {
        serde_json::to_string(&documents)
    }
    .map_err(|e| format!("failed to encode documents: {}", e))?;
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

    println!("{}", payload);
    eprintln!(
        "✓ Exported {} documents ({} bytes) in {:.1}ms",
        documents.len(),
        payload.len(),
        elapsed_ms
    );
    Ok(())
}

fn run_stats(content_dir: Option<&std::path::Path>, json: bool) -> Result<(), String> {
    let set = load_content(content_dir)?;

    let started = Instant::now();
    let index = build_index(build_documents(&set)).map_err(|e| format!("{}", e))?;
    let build_ms = started.elapsed().as_secs_f64() * 1000.0;
    let stats = index.stats();

    if json {
        let payload = serde_json::to_string_pretty(&stats)
            .map_err(|e| format!("failed to encode stats: {}", e))?;
        println!("{}", payload);
        return Ok(());
    }

    println!("Indexed in {}", timing_ms(build_ms));
    println!();
    println!("{:<16} {}", "documents", stats.documents);
    for (kind, count) in &stats.by_type {
        println!("  {:<14} {}", kind, count);
    }
    println!("{:<16} {}", "title terms", stats.title_terms);
    println!("{:<16} {}", "text terms", stats.text_terms);
    println!("{:<16} {}", "tag terms", stats.tag_terms);
    Ok(())
}
