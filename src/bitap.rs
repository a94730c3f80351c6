// Copyright 2025-present Lantern contributors
// SPDX-License-Identifier: Apache-2.0

//! Bounded approximate substring matching.
//!
//! Given a query and one field's text, find the window of the text that is
//! closest to the query in edit distance, subject to an error budget derived
//! from the configured threshold. The field's score is
//! `min_edit_distance / query_length`, so `0.0` is an exact occurrence and
//! `1.0` means nothing usable was found.
//!
//! Two engines behind one entry point:
//!
//! - **Bitap** (Wu-Manber bit-parallel) for patterns up to 64 characters -
//!   one `u64` row per error level, `O(text × budget)` words of work. Queries
//!   are short, so this is the path that runs in practice.
//! - **Sellers column DP** for longer patterns - the classic `O(text × m)`
//!   best-window recurrence with per-cell minimization. Rare, but a pasted
//!   error message can exceed 64 characters and still deserves an answer.
//!
//! Both compute the same quantity: `D[m][j]`, the least edit distance between
//! the whole pattern and any window of the text ending at position `j`.
//! Capping the error budget is what keeps the cost linear in field length -
//! rows above the budget are never materialized, which matters once long
//! `body` fields join the scored set.
//!
//! Offsets throughout are **character** offsets into the normalized text,
//! never byte offsets - multi-byte UTF-8 must not skew highlight spans.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Longest pattern the bit-parallel engine handles (bits in a `u64`).
pub const MAX_BITAP_PATTERN: usize = 64;

/// A half-open `[start, end)` range of character offsets in the normalized
/// field text that contributed to the match. For matches that used
/// insertions or deletions the span is the widest window the match could
/// have occupied, so it may overcover by up to the error count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
}

/// Outcome of matching one query against one field.
#[derive(Debug, Clone, PartialEq)]
pub struct TextMatch {
    /// `0.0` = exact occurrence, `1.0` = no window within the error budget.
    pub score: f64,
    /// Best-scoring match windows, merged when overlapping. Empty when
    /// nothing matched. Consumers that don't highlight simply ignore this.
    pub spans: Vec<HighlightSpan>,
}

impl TextMatch {
    /// The "no usable match" outcome.
    pub fn none() -> TextMatch {
        TextMatch {
            score: 1.0,
            spans: Vec::new(),
        }
    }

    /// Did any window come in under the error budget?
    pub fn is_match(&self) -> bool {
        self.score < 1.0
    }
}

/// Edit budget for a pattern of `pattern_chars` characters under `threshold`.
///
/// `floor(threshold × length)`: a 4-character query at the default 0.4
/// tolerates one edit, an 11-character query four.
pub fn max_errors(pattern_chars: usize, threshold: f64) -> usize {
    (threshold * pattern_chars as f64).floor() as usize
}

/// Score one field's text against a query.
///
/// Both arguments are expected to be pre-normalized (see
/// [`normalize`](crate::normalize)); this function does raw character
/// matching only. An empty query matches everything with score `0.0` - no
/// filtering is a no-op, never an error.
pub fn match_text(query: &str, text: &str, threshold: f64) -> TextMatch {
    let pattern: Vec<char> = query.chars().collect();
    if pattern.is_empty() {
        return TextMatch {
            score: 0.0,
            spans: Vec::new(),
        };
    }

    let haystack: Vec<char> = text.chars().collect();
    // A threshold of 1.0 would grant a budget equal to the pattern length,
    // and a "window" reached by deleting every pattern character is not a
    // match. Capping keeps any hit strictly below the no-match score.
    let budget = max_errors(pattern.len(), threshold).min(pattern.len() - 1);

    let hit = if pattern.len() <= MAX_BITAP_PATTERN {
        bitap_scan(&pattern, &haystack, budget)
    } else {
        sellers_scan(&pattern, &haystack, budget)
    };

    match hit {
        Some(hit) => {
            let score = (hit.errors as f64 / pattern.len() as f64).clamp(0.0, 1.0);
            let spans = merge_spans(&hit.ends, pattern.len(), hit.errors);
            TextMatch { score, spans }
        }
        None => TextMatch::none(),
    }
}

/// Best match found in a scan: its error count and every text position
/// (exclusive char offset) where a window with that count ends.
struct Hit {
    errors: usize,
    ends: Vec<usize>,
}

/// Per-character position masks for the pattern.
fn char_masks(pattern: &[char]) -> HashMap<char, u64> {
    let mut masks: HashMap<char, u64> = HashMap::with_capacity(pattern.len());
    for (i, &c) in pattern.iter().enumerate() {
        *masks.entry(c).or_insert(0) |= 1 << i;
    }
    masks
}

/// Row seed: the first `d` pattern characters can be deleted for free at
/// error level `d`, so those state bits start set.
fn seed_row(d: usize) -> u64 {
    if d >= 64 {
        u64::MAX
    } else {
        (1u64 << d) - 1
    }
}

/// Wu-Manber bit-parallel scan for patterns that fit in a machine word.
///
/// `rows[d]` holds, in bit `i`, whether the pattern prefix of length `i + 1`
/// matches some window ending at the current text position with at most `d`
/// edits. The accept bit is the full-pattern bit of the cheapest row that has
/// it set. Rows beyond the budget are never tracked - that cap is the
/// early-exit the scoring cost model relies on.
fn bitap_scan(pattern: &[char], haystack: &[char], budget: usize) -> Option<Hit> {
    let m = pattern.len();
    let masks = char_masks(pattern);
    let accept = 1u64 << (m - 1);

    let mut rows: Vec<u64> = (0..=budget).map(seed_row).collect();
    let mut best: Option<usize> = None;
    let mut ends: Vec<usize> = Vec::new();

    for (j, &c) in haystack.iter().enumerate() {
        let mask = masks.get(&c).copied().unwrap_or(0);

        // carry_old walks the previous-step rows one level behind the update
        let mut carry_old = rows[0];
        rows[0] = ((carry_old << 1) | 1) & mask;
        for d in 1..=budget {
            let old = rows[d];
            rows[d] = (((old << 1) | 1) & mask)        // match this character
                | ((carry_old << 1) | 1)               // substitution
                | carry_old                            // insertion into the window
                | ((rows[d - 1] << 1) | 1);            // deletion from the pattern
            carry_old = old;
        }

        for (d, &row) in rows.iter().enumerate() {
            if row & accept != 0 {
                record_end(&mut best, &mut ends, d, j + 1);
                break; // only the cheapest level at this position counts
            }
        }
    }

    best.map(|errors| Hit { errors, ends })
}

/// Sellers best-window DP for patterns longer than 64 characters.
///
/// `col[i]` is the least edit distance between the pattern prefix of length
/// `i` and any window ending at the current text position; `col[0]` stays 0
/// because a window may start anywhere.
fn sellers_scan(pattern: &[char], haystack: &[char], budget: usize) -> Option<Hit> {
    let m = pattern.len();
    let mut col: Vec<usize> = (0..=m).collect();
    let mut best: Option<usize> = None;
    let mut ends: Vec<usize> = Vec::new();

    for (j, &c) in haystack.iter().enumerate() {
        let mut prev_diag = col[0];
        for i in 1..=m {
            let up = col[i];
            let substitute = prev_diag + usize::from(pattern[i - 1] != c);
            col[i] = substitute.min(up + 1).min(col[i - 1] + 1);
            prev_diag = up;
        }

        if col[m] <= budget {
            record_end(&mut best, &mut ends, col[m], j + 1);
        }
    }

    best.map(|errors| Hit { errors, ends })
}

/// Track the cheapest error level seen so far and the window ends achieving it.
fn record_end(best: &mut Option<usize>, ends: &mut Vec<usize>, errors: usize, end: usize) {
    match *best {
        Some(b) if errors > b => {}
        Some(b) if errors == b => ends.push(end),
        _ => {
            *best = Some(errors);
            ends.clear();
            ends.push(end);
        }
    }
}

/// Turn match end positions into highlight spans of width `m + errors`
/// (the widest window the match could cover), merging overlaps. `ends` is
/// ascending by construction, so the output is ordered and disjoint.
fn merge_spans(ends: &[usize], m: usize, errors: usize) -> Vec<HighlightSpan> {
    let width = m + errors;
    let mut spans: Vec<HighlightSpan> = Vec::new();
    for &end in ends {
        let start = end.saturating_sub(width);
        match spans.last_mut() {
            Some(last) if start <= last.end => last.end = end,
            _ => spans.push(HighlightSpan { start, end }),
        }
    }
    spans
}
