//! Shared test utilities and fixtures.

#![allow(dead_code)]

use lantern::{Corpus, SearchConfig, SearchResult};

// Re-export canonical test fixtures from lantern::testing
pub use lantern::testing::{help_center_corpus, help_center_sections, make_doc};

/// Run a search with the default config and unwrap the matched mode.
pub fn matched<'c>(
    corpus: &'c Corpus,
    query: &str,
) -> (
    Vec<lantern::RankedDocument<'c>>,
    Vec<lantern::SectionGroup<'c>>,
) {
    match lantern::search(corpus, query, &SearchConfig::default()) {
        SearchResult::Matched { flat, grouped } => (flat, grouped),
        SearchResult::Browsing { .. } => panic!("query {:?} unexpectedly browsed", query),
    }
}

/// Ids of the flat result list, in rank order.
pub fn flat_ids(flat: &[lantern::RankedDocument<'_>]) -> Vec<String> {
    flat.iter().map(|r| r.document.id.clone()).collect()
}
