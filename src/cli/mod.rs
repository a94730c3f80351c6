// Copyright 2025-present Lantern contributors
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the lantern command-line interface.
//!
//! Three subcommands over a corpus JSON file: `search` runs a query and
//! prints ranked (optionally grouped) results, `browse` lists the corpus as
//! authored, and `get` looks up one document by id. Every subcommand takes
//! `--json` for machine-readable output.

pub mod display;

use clap::{Parser, Subcommand};
use lantern::{DEFAULT_MAX_RESULTS, DEFAULT_THRESHOLD};

#[derive(Parser)]
#[command(
    name = "lantern",
    about = "Typo-tolerant search over help-center content",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a corpus and display ranked results
    Search {
        /// Path to the corpus JSON file (an array of sections)
        corpus: String,

        /// Free-text query; typos within the error budget still match
        query: String,

        /// Relevance cutoff in [0,1]; results scoring above it are dropped
        #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: f64,

        /// Maximum number of results
        #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_RESULTS)]
        max_results: usize,

        /// Group results by section instead of printing the flat list
        #[arg(long)]
        grouped: bool,

        /// Emit machine-readable JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// List sections and their documents in authoring order
    Browse {
        /// Path to the corpus JSON file
        corpus: String,

        /// Emit machine-readable JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Look up a single document by id
    Get {
        /// Path to the corpus JSON file
        corpus: String,

        /// Document id
        id: String,

        /// Emit machine-readable JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
}
