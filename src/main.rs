use clap::Parser;
use lantern::{search, Corpus, FieldWeights, SearchConfig, SearchResult, Section};
use std::fs;
use std::process::ExitCode;

mod cli;

use cli::display;
use cli::{Cli, Commands};

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Search {
            corpus,
            query,
            threshold,
            max_results,
            grouped,
            json,
        } => {
            let corpus = load_corpus(&corpus)?;
            let config = SearchConfig::new(threshold, max_results, FieldWeights::default())?;
            let result = search(&corpus, &query, &config);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }
            match &result {
                SearchResult::Browsing { sections } => display::print_sections(sections),
                SearchResult::Matched { flat, grouped: by_section } => {
                    if grouped {
                        display::print_grouped(by_section);
                    } else {
                        display::print_flat(flat);
                    }
                }
            }
        }

        Commands::Browse { corpus, json } => {
            let corpus = load_corpus(&corpus)?;
            if json {
                println!("{}", serde_json::to_string_pretty(corpus.sections())?);
            } else {
                display::print_sections(corpus.sections());
            }
        }

        Commands::Get { corpus, id, json } => {
            let corpus = load_corpus(&corpus)?;
            let Some(document) = corpus.document(&id) else {
                return Err(format!("no document with id '{}'", id).into());
            };
            if json {
                println!("{}", serde_json::to_string_pretty(document)?);
            } else {
                display::print_document(document);
            }
        }
    }
    Ok(())
}

/// Read and validate a corpus file: a JSON array of sections.
fn load_corpus(path: &str) -> Result<Corpus, Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("cannot read corpus file '{}': {}", path, e))?;
    let sections: Vec<Section> = serde_json::from_str(&raw)
        .map_err(|e| format!("corpus file '{}' is not valid: {}", path, e))?;
    Ok(Corpus::build(sections)?)
}
