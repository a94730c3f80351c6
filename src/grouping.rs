// Copyright 2025-present Lantern contributors
// SPDX-License-Identifier: Apache-2.0

//! Faceted presentation: re-partitioning the flat ranked list by section.
//!
//! Section-to-section order follows first appearance in the flat list, not
//! the corpus's authoring order - the section holding the single best match
//! leads even when results are grouped. Within a section, documents keep
//! their flat (relevance) order. Sections with no matches don't appear.

use crate::corpus::Corpus;
use crate::corpus::Section;
use crate::search::RankedDocument;
use serde::Serialize;
use std::collections::HashMap;

/// One section's slice of the results, in relevance order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionGroup<'c> {
    pub section: &'c Section,
    pub documents: Vec<RankedDocument<'c>>,
}

/// Partition `flat` by owning section, preserving relevance order both
/// across groups (first appearance) and within each group.
pub(crate) fn group_by_section<'c>(
    corpus: &'c Corpus,
    flat: &[RankedDocument<'c>],
) -> Vec<SectionGroup<'c>> {
    let mut groups: Vec<SectionGroup<'c>> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for ranked in flat {
        let section_id = ranked.document.section_id.as_str();
        let slot = match slots.get(section_id) {
            Some(&slot) => slot,
            None => {
                // Corpus::build guarantees the section exists; skipping is
                // strictly for memory-safety under a violated invariant.
                let Some(section) = corpus.section(section_id) else {
                    continue;
                };
                slots.insert(section_id, groups.len());
                groups.push(SectionGroup {
                    section,
                    documents: Vec::new(),
                });
                groups.len() - 1
            }
        };
        groups[slot].documents.push(ranked.clone());
    }

    groups
}
