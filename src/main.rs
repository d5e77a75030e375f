use anyhow::Result;
use clap::Parser;
use qsearch::SearchEngine;
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

// CLI Arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "Boolean keyword search over a line-paired corpus", long_about = None)]
struct Args {
    /// Corpus file: alternating identifier and document-text lines
    corpus: PathBuf,

    /// Stop-word file; enables stop-word filtering during the build
    #[arg(short, long)]
    stopwords: Option<PathBuf>,

    /// Run a single query and exit instead of the interactive prompt
    #[arg(short, long)]
    query: Option<String>,

    /// Emit query results as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct QueryResponse<'a> {
    query: &'a str,
    total: usize,
    matches: &'a BTreeSet<String>,
}

fn print_matches(query: &str, matches: &BTreeSet<String>, json: bool) -> Result<()> {
    if json {
        let response = QueryResponse {
            query,
            total: matches.len(),
            matches,
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("Found {} matching pages", matches.len());
        for id in matches {
            println!("{id}");
        }
    }
    Ok(())
}

fn interactive_loop(engine: &SearchEngine, json: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("Enter query sentence (press enter to quit): ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let query = line.trim_end_matches(['\r', '\n']);
        if query.is_empty() {
            break;
        }

        print_matches(query, &engine.search(query), json)?;
        println!();
    }

    println!("Thank you for searching!");
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    println!("Stand by while building index...");
    let engine = SearchEngine::open(&args.corpus, args.stopwords.as_deref());

    let stats = engine.stats();
    println!(
        "Indexed {} pages containing {} unique terms",
        engine.document_count(),
        stats.unique_terms
    );

    match args.query {
        Some(query) => print_matches(&query, &engine.search(&query), args.json)?,
        None => interactive_loop(&engine, args.json)?,
    }

    Ok(())
}
