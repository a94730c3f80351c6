// Copyright 2025-present Lantern contributors
// SPDX-License-Identifier: Apache-2.0

//! The search entry point and its result contract.
//!
//! Two request modes, told apart by type rather than by sentinel:
//!
//! - **Browsing** - the trimmed query is empty. The caller gets the corpus's
//!   sections in authoring order, unscored; no matcher ever runs. "No active
//!   search" is not the same thing as "a search that found nothing".
//! - **Matched** - a real query ran the full pipeline. Both the flat ranked
//!   list and its section-grouped form come back; either may be empty.
//!
//! `search` is a pure function of `(corpus, query, config)`. It performs no
//! I/O, holds no state between calls, and borrows documents straight out of
//! the corpus snapshot - so any number of callers can search the same
//! snapshot concurrently.

use crate::config::SearchConfig;
use crate::corpus::{Corpus, Document, Section};
use crate::grouping::{group_by_section, SectionGroup};
use crate::ranking::rank;
use crate::scoring::{score_document, FieldMatch};
use crate::utils::normalize;
use serde::Serialize;

/// One search hit: a borrowed document, its relevance score, and the field
/// locations that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedDocument<'c> {
    pub document: &'c Document,
    /// Relevance in `[0, 1]`, lower is better; never above the threshold.
    pub score: f64,
    /// Per-field match locations for highlighting. Possibly empty, never
    /// absent - callers that don't highlight just ignore it.
    pub field_matches: Vec<FieldMatch>,
}

/// What a search call produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum SearchResult<'c> {
    /// No active query: the corpus as authored, for browsing.
    Browsing { sections: &'c [Section] },
    /// An active query: ranked results, flat and grouped. Both empty when
    /// nothing cleared the threshold.
    Matched {
        flat: Vec<RankedDocument<'c>>,
        grouped: Vec<SectionGroup<'c>>,
    },
}

impl SearchResult<'_> {
    /// True when the result is the browsing (no active query) mode.
    pub fn is_browsing(&self) -> bool {
        matches!(self, SearchResult::Browsing { .. })
    }
}

/// Search the corpus.
///
/// Never fails: a well-formed corpus and config make every query - empty,
/// whitespace, emoji, pathological - a valid input. Determinism guarantee:
/// identical `(corpus, query, config)` always produce an identical result.
pub fn search<'c>(corpus: &'c Corpus, query: &str, config: &SearchConfig) -> SearchResult<'c> {
    let query_norm = normalize(query);
    if query_norm.is_empty() {
        return SearchResult::Browsing {
            sections: corpus.sections(),
        };
    }

    let candidates: Vec<RankedDocument<'c>> = corpus
        .documents()
        .map(|(section, document)| {
            let (score, field_matches) = score_document(document, section, &query_norm, config);
            RankedDocument {
                document,
                score,
                field_matches,
            }
        })
        .collect();

    let flat = rank(candidates, config.threshold(), config.max_results());
    let grouped = group_by_section(corpus, &flat);
    SearchResult::Matched { flat, grouped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::help_center_corpus;

    #[test]
    fn whitespace_query_is_browsing_not_an_empty_match() {
        let corpus = help_center_corpus();
        let config = SearchConfig::default();

        for query in ["", "   ", "\t\n", " \u{00A0} "] {
            let result = search(&corpus, query, &config);
            match result {
                SearchResult::Browsing { sections } => {
                    assert_eq!(sections, corpus.sections());
                }
                SearchResult::Matched { .. } => {
                    panic!("query {:?} should browse, not match", query)
                }
            }
        }
    }

    #[test]
    fn no_hits_is_an_empty_match_not_browsing() {
        let corpus = help_center_corpus();
        let result = search(&corpus, "zzqxnotfound123", &SearchConfig::default());
        match result {
            SearchResult::Matched { flat, grouped } => {
                assert!(flat.is_empty());
                assert!(grouped.is_empty());
            }
            SearchResult::Browsing { .. } => panic!("a miss must stay in matched mode"),
        }
    }

    #[test]
    fn results_borrow_from_the_corpus() {
        let corpus = help_center_corpus();
        let result = search(&corpus, "quick start", &SearchConfig::default());
        if let SearchResult::Matched { flat, .. } = result {
            let hit = &flat[0];
            let original = corpus.document(&hit.document.id).unwrap();
            assert!(std::ptr::eq(hit.document, original));
        } else {
            panic!("expected matches");
        }
    }
}
