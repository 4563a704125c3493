use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use docrank_cli::{
    lookup_response, render_lookup_text, render_search_text, to_hits, truncate_for_display,
    Corpus, SearchResponse,
};
use docrank_core::tokenizer::tokenize;
use tracing_subscriber::{fmt, EnvFilter};

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "docrank")]
#[command(about = "Rank a directory of text documents against a query by TF-IDF cosine similarity", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the documents under a directory against a query
    Search {
        /// Directory of .txt documents
        corpus: PathBuf,
        /// Query text; read from stdin when omitted
        query: Option<String>,
        /// Emit results as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Show at most this many results
        #[arg(long)]
        limit: Option<usize>,
    },
    /// List the documents containing a term, bypassing scoring
    Lookup {
        /// Directory of .txt documents
        corpus: PathBuf,
        /// Term to look up
        term: String,
        /// Emit the posting list as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search { corpus, query, json, limit } => run_search(&corpus, query, json, limit),
        Commands::Lookup { corpus, term, json } => run_lookup(&corpus, &term, json),
    }
}

fn run_search(dir: &Path, query: Option<String>, json: bool, limit: Option<usize>) -> Result<()> {
    let corpus = Corpus::load(dir)?;
    let (index, report) = corpus.build_index();
    tracing::info!(
        collection_size = report.collection_size,
        distinct_terms = report.distinct_terms,
        unreadable = report.unreadable_docs.len(),
        "indexed corpus"
    );

    let query = match query {
        Some(q) => q,
        None => read_query_line()?,
    };

    let mut ranked = index.search(&query);
    let total_hits = ranked.len();
    truncate_for_display(&mut ranked, limit);
    let hits = to_hits(&corpus, &ranked);

    if json {
        let response = SearchResponse {
            query,
            collection_size: index.collection_size(),
            total_hits,
            results: hits,
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print!("{}", render_search_text(&query, &hits));
    }
    Ok(())
}

fn run_lookup(dir: &Path, term: &str, json: bool) -> Result<()> {
    // The lookup term goes through the same normalization as indexed text.
    let mut tokens = tokenize(term);
    let term = match tokens.len() {
        1 => tokens.remove(0),
        0 => bail!("term is empty after normalization"),
        _ => bail!("lookup takes a single term"),
    };

    let corpus = Corpus::load(dir)?;
    let (index, report) = corpus.build_index();
    tracing::info!(
        collection_size = report.collection_size,
        distinct_terms = report.distinct_terms,
        unreadable = report.unreadable_docs.len(),
        "indexed corpus"
    );

    let response = lookup_response(&index, term);
    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print!("{}", render_lookup_text(&corpus, &response));
    }
    Ok(())
}

fn read_query_line() -> Result<String> {
    eprint!("query: ");
    let mut line = String::new();
    let n = io::stdin().lock().read_line(&mut line)?;
    if n == 0 {
        bail!("no query given on stdin");
    }
    Ok(line.trim_end().to_string())
}
