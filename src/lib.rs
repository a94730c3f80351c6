//! Typo-tolerant search for in-product help-center content.
//!
//! Rank a corpus of knowledge-base articles against a free-text query across
//! several weighted fields (title, description, tags, section title, body),
//! tolerating typos and partial words, and present the hits flat or grouped
//! back into their sections.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐    ┌────────────┐    ┌─────────────┐    ┌───────────┐
//! │ corpus.rs  │───▶│ scoring.rs │───▶│ ranking.rs  │───▶│grouping.rs│
//! │ (Document, │    │ (weighted  │    │ (filter,    │    │ (facet by │
//! │  Section,  │    │  per-field │    │  sort,      │    │  section) │
//! │  Corpus)   │    │  combine)  │    │  truncate)  │    │           │
//! └────────────┘    └─────┬──────┘    └─────────────┘    └───────────┘
//!                         │
//!                   ┌─────▼──────┐
//!                   │  bitap.rs  │  bounded fuzzy matching per field
//!                   └────────────┘
//! ```
//!
//! `search.rs` drives the pipeline and owns the result contract; `config.rs`
//! validates weights and threshold up front so nothing can fail mid-query.
//!
//! # Guarantees
//!
//! - **Deterministic**: same `(corpus, query, config)`, same results - same
//!   order, same scores, regardless of call history.
//! - **Bounded**: at most `max_results` hits, all scoring at or below the
//!   threshold, in non-decreasing score order.
//! - **Total**: `search` never fails for a validated corpus and config; the
//!   empty query is the browsing mode, not an error.
//!
//! # Usage
//!
//! ```ignore
//! use lantern::{search, Corpus, SearchConfig, SearchResult};
//!
//! let corpus = Corpus::build(sections)?;
//! let config = SearchConfig::default();
//!
//! match search(&corpus, "quick strat", &config) {
//!     SearchResult::Matched { flat, grouped } => { /* render hits */ }
//!     SearchResult::Browsing { sections } => { /* render the index */ }
//! }
//! ```

mod bitap;
mod config;
mod corpus;
mod errors;
mod grouping;
mod ranking;
mod scoring;
mod search;
pub mod testing;
mod utils;

pub use bitap::{match_text, max_errors, HighlightSpan, TextMatch, MAX_BITAP_PATTERN};
pub use config::{
    Field, FieldWeights, SearchConfig, DEFAULT_MAX_RESULTS, DEFAULT_THRESHOLD, WEIGHT_SUM_EPSILON,
};
pub use corpus::{Corpus, Difficulty, Document, Section};
pub use errors::{ConfigError, IntegrityError};
pub use grouping::SectionGroup;
pub use scoring::FieldMatch;
pub use search::{search, RankedDocument, SearchResult};
pub use utils::normalize;
