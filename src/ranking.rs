// Copyright 2025-present Lantern contributors
// SPDX-License-Identifier: Apache-2.0

//! Turning scored documents into the final ranked list.
//!
//! Three steps, in order: drop everything scoring above the threshold, sort
//! ascending by score, cut to the result limit. The sort is stable and the
//! candidates arrive in corpus authoring order, so equal scores keep that
//! order - the tiebreak that makes two identical searches return identical
//! lists, always.

use crate::search::RankedDocument;
use std::cmp::Ordering;

/// Filter, sort, truncate.
///
/// `candidates` must be in corpus authoring order; that order is the
/// deterministic tiebreak for equal scores.
pub(crate) fn rank(
    mut candidates: Vec<RankedDocument<'_>>,
    threshold: f64,
    max_results: usize,
) -> Vec<RankedDocument<'_>> {
    candidates.retain(|candidate| candidate.score <= threshold);

    // Stable sort: equal scores stay in authoring order. Scores are finite
    // ratios, so the partial_cmp fallback never actually fires.
    candidates.sort_by(|a, b| match a.score.partial_cmp(&b.score) {
        Some(ordering) => ordering,
        None => Ordering::Equal,
    });

    candidates.truncate(max_results);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{Difficulty, Document};

    fn doc(id: &str) -> Document {
        Document {
            id: id.to_string(),
            section_id: "s".to_string(),
            title: id.to_string(),
            description: String::new(),
            tags: Vec::new(),
            body: None,
            difficulty: Difficulty::Beginner,
            popular: false,
        }
    }

    fn candidates<'c>(docs: &'c [Document], scores: &[f64]) -> Vec<RankedDocument<'c>> {
        docs.iter()
            .zip(scores)
            .map(|(document, &score)| RankedDocument {
                document,
                score,
                field_matches: Vec::new(),
            })
            .collect()
    }

    #[test]
    fn filters_above_threshold_sorts_ascending_truncates() {
        let docs: Vec<Document> = ["a", "b", "c", "d", "e"].iter().map(|id| doc(id)).collect();
        let ranked = rank(candidates(&docs, &[0.3, 0.9, 0.1, 0.4, 0.2]), 0.4, 3);

        let ids: Vec<&str> = ranked.iter().map(|r| r.document.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "e", "a"]); // 0.1, 0.2, 0.3; "d" at 0.4 truncated
    }

    #[test]
    fn score_equal_to_threshold_is_kept() {
        let docs = vec![doc("a")];
        let ranked = rank(candidates(&docs, &[0.4]), 0.4, 10);
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn equal_scores_keep_authoring_order() {
        let docs: Vec<Document> = ["first", "second", "third"].iter().map(|id| doc(id)).collect();
        let ranked = rank(candidates(&docs, &[0.2, 0.2, 0.2]), 0.4, 10);
        let ids: Vec<&str> = ranked.iter().map(|r| r.document.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn output_is_monotonically_non_decreasing() {
        let docs: Vec<Document> = (0..8).map(|i| doc(&format!("d{}", i))).collect();
        let ranked = rank(
            candidates(&docs, &[0.35, 0.01, 0.2, 0.01, 0.39, 0.0, 0.15, 0.25]),
            0.4,
            10,
        );
        for pair in ranked.windows(2) {
            assert!(pair[0].score <= pair[1].score);
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(rank(Vec::new(), 0.4, 10).is_empty());
    }
}
