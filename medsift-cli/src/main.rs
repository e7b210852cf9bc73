//! medsift - interactive differential-diagnosis narrowing shell
//!
//! Seeds a candidate pool from a Wikipedia full-text search on the first
//! symptom, then narrows the pool round by round: each round prints the
//! remaining discriminating symptoms as a numbered checklist, reads one
//! batch of tokens (checklist numbers or free text), and filters. The run
//! ends with a single diagnosis, an ambiguous shortlist, or an exhausted
//! pool.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use medsift_core::{resolve_token, NarrowingEngine, Outcome, Step};
use medsift_wiki::{build_pool, PageFetcher, SearchClient, WikiConfig};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod config;

#[derive(Parser)]
#[command(name = "medsift", version)]
#[command(about = "Narrow candidate diseases from symptoms, one question round at a time")]
struct Cli {
    /// Maximum number of search hits seeding the candidate pool
    #[arg(long, default_value_t = 100)]
    limit: u32,

    /// Article cache directory (overrides MEDSIFT_CACHE_DIR and the config file)
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let file_config = config::load(cli.config.as_deref())?;
    let cache_dir = config::resolve_cache_dir(cli.cache_dir.as_deref(), &file_config);

    let mut wiki_config = WikiConfig::new(cache_dir);
    if let Some(url) = file_config.wiki.api_url.clone() {
        wiki_config.api_url = url;
    }
    if let Some(url) = file_config.wiki.page_base_url.clone() {
        wiki_config.page_base_url = url;
    }
    let params = file_config.extract.clone();

    let search = SearchClient::new(&wiki_config)?;
    let fetcher = PageFetcher::new(&wiki_config)?;
    info!("article cache: {}", wiki_config.cache_dir.display());

    println!("medsift: narrow candidate diseases from symptoms");
    println!("Enter symptoms; each round offers a numbered checklist to pick from.");
    println!("Type 'done' for the final result.\n");

    let mut engine = NarrowingEngine::new();

    let outcome = loop {
        if let Some(outcome) = engine.termination() {
            break outcome;
        }

        let checklist = engine.checklist();
        if engine.is_seeded() && !checklist.is_empty() {
            println!("Symptom checklist:");
            for (i, symptom) in checklist.iter().enumerate() {
                println!("  {}. {}", i + 1, symptom);
            }
            println!("{}", "-".repeat(40));
        }

        let prompt = if engine.is_seeded() {
            "Enter new symptoms (text, numbers) or 'done': "
        } else {
            "First symptom: "
        };
        let Some(line) = read_line(prompt)? else {
            // EOF: conclude with whatever survives
            if engine.is_seeded() {
                break engine.conclude();
            }
            println!("No symptoms entered.");
            return Ok(());
        };

        let line = line.trim().to_lowercase();
        if line.is_empty() {
            continue;
        }
        if line == "done" {
            if engine.is_seeded() {
                break engine.conclude();
            }
            println!("No symptoms entered.");
            return Ok(());
        }

        let mut exhausted = None;
        for token in line.replace(',', " ").split_whitespace() {
            let symptom = match resolve_token(token, &checklist, engine.is_seeded()) {
                Ok(symptom) => symptom,
                Err(err) => {
                    println!("warning: {err}");
                    continue;
                }
            };

            let step = if engine.is_seeded() {
                engine.submit(&symptom)
            } else {
                println!("Searching for candidates mentioning '{symptom}' ...");
                let pool = build_pool(&search, &fetcher, &params, &symptom, cli.limit).await?;
                engine.seed(&symptom, pool)
            };

            match step {
                Step::Seeded { candidates } => {
                    println!("Added symptom: {symptom} -> {candidates} candidates loaded");
                }
                Step::Narrowed { remaining } => {
                    println!("Added symptom: {symptom} -> {remaining} candidates remain");
                }
                Step::Duplicate => {
                    println!("warning: already added: {symptom}");
                }
                Step::Exhausted { reason } => {
                    exhausted = Some(reason);
                    break;
                }
            }
        }

        if let Some(reason) = exhausted {
            break Outcome::Exhausted(reason);
        }
        println!();
    };

    report(&outcome);
    if matches!(outcome, Outcome::Exhausted(_)) {
        std::process::exit(1);
    }
    Ok(())
}

/// Print the prompt and read one line; `None` on EOF.
fn read_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn report(outcome: &Outcome) {
    match outcome {
        Outcome::Diagnosed(name) => {
            println!("\nFinal diagnosis: {name}");
        }
        Outcome::Ambiguous(names) => {
            println!("\nUnable to narrow further. Possible matches:");
            for name in names {
                println!("  - {name}");
            }
        }
        Outcome::Exhausted(reason) => {
            println!("\nNo diagnosis: {reason}");
        }
    }
}
