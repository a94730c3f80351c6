// Copyright 2025-present Lantern contributors
// SPDX-License-Identifier: Apache-2.0

//! Combining per-field match quality into one relevance score per document.
//!
//! Each weighted field runs through the fuzzy matcher and the results fold
//! into a single `[0, 1]` score, lower = more relevant. The combination is a
//! weighted sum in log space - equivalently a weighted geometric mean:
//!
//! ```text
//! score(doc) = Π max(fieldScore(f), ε) ^ weight(f)     over all fields f
//! ```
//!
//! Why multiplicative and not a plain weighted sum: a field with no usable
//! match scores 1.0, and `1.0^w` is the neutral element. A document whose
//! only hit is an exact tag still surfaces (`ε^0.2 ≈ 7e-4`), while a document
//! matching nowhere stays at exactly 1.0. A plain sum would charge every
//! non-matching field its full weight, and with title at 0.30 no tag-only or
//! description-only match could ever clear a 0.4 threshold - which is not how
//! the help center this engine came from behaved.
//!
//! Absence is still not free credit: a document without a `body` scores that
//! field as 1.0, exactly like a body that matched nothing. The epsilon clamp
//! keeps a perfect field from zeroing the product and erasing every other
//! field's contribution.
//!
//! Determinism: this is a pure function of `(document, section, query,
//! config)`. No caches, no call-order effects.

use crate::bitap::{match_text, HighlightSpan, TextMatch};
use crate::config::{Field, SearchConfig};
use crate::corpus::{Document, Section};
use crate::utils::normalize;
use serde::Serialize;
use std::borrow::Cow;

/// One field's contribution to a match, kept for highlighting.
///
/// Only fields that actually matched appear in a result's match list;
/// non-matching fields contribute their neutral 1.0 to the score but carry
/// no locations worth reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMatch {
    pub field: Field,
    /// The field's own `[0, 1)` match score, before weighting.
    pub score: f64,
    /// Character spans in the normalized field text (tags: the joined string).
    pub spans: Vec<HighlightSpan>,
}

/// Score one document against a normalized query.
///
/// `section` must be the document's owning section - the corpus iterator
/// hands the pair out together, and section title is scored through it.
pub(crate) fn score_document(
    document: &Document,
    section: &Section,
    query_norm: &str,
    config: &SearchConfig,
) -> (f64, Vec<FieldMatch>) {
    debug_assert_eq!(document.section_id, section.id);

    let mut combined = 1.0_f64;
    let mut matches: Vec<FieldMatch> = Vec::new();

    for field in Field::ALL {
        let weight = config.weights().get(field);
        if weight == 0.0 {
            // A zero-weighted field cannot move the score; skip the matcher.
            continue;
        }

        let outcome = match field_text(document, section, field) {
            Some(text) => match_text(query_norm, &normalize(&text), config.threshold()),
            None => TextMatch::none(), // absent field = unmatched field
        };

        combined *= outcome.score.max(f64::EPSILON).powf(weight);

        if outcome.is_match() {
            matches.push(FieldMatch {
                field,
                score: outcome.score,
                spans: outcome.spans,
            });
        }
    }

    (combined.clamp(0.0, 1.0), matches)
}

/// The text behind a field, or `None` when the document doesn't carry it.
/// Tags join into a single haystack so the matcher can find its best window
/// anywhere in the set.
fn field_text<'d>(document: &'d Document, section: &'d Section, field: Field) -> Option<Cow<'d, str>> {
    match field {
        Field::Title => Some(Cow::from(&document.title)),
        Field::Description => Some(Cow::from(&document.description)),
        Field::Tags => {
            if document.tags.is_empty() {
                None
            } else {
                Some(Cow::from(document.tags.join(" ")))
            }
        }
        Field::SectionTitle => Some(Cow::from(&section.title)),
        Field::Body => document.body.as_deref().map(Cow::from),
    }
}
