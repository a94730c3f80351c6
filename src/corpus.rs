// Copyright 2025-present Lantern contributors
// SPDX-License-Identifier: Apache-2.0

//! The corpus: sections, documents, and the immutable snapshot they form.
//!
//! Sections own their documents in author-defined display order. Each
//! document carries a `sectionId` back-reference for lookup only - ownership
//! never flows through it. [`Corpus::build`] checks the whole structure once
//! (referential integrity, unique ids, tag set semantics) and from then on
//! the snapshot is read-only: searching never mutates it, and a content edit
//! means building a fresh snapshot while in-flight searches keep using the
//! old one.
//!
//! # Invariants (checked at build, assumed everywhere after)
//!
//! - Every document's `sectionId` names its enclosing section.
//! - Document ids are unique across the corpus; section ids are unique.
//! - `tags` holds no duplicates (first occurrence wins, display order kept).

use crate::errors::IntegrityError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Editorial difficulty label. Carried through for display and consumer-side
/// filtering; scoring never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// An indexable unit of knowledge: one help-center article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Unique, stable identifier.
    pub id: String,
    /// Back-reference to the owning section. Must match the section this
    /// document is authored under - enforced at [`Corpus::build`].
    pub section_id: String,
    pub title: String,
    pub description: String,
    /// Keyword set. Deduplicated at build; matched as one joined field.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Long-form guide text. Only guide-type articles carry one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub difficulty: Difficulty,
    /// Editorial "popular article" flag. Display only, never scored.
    #[serde(default)]
    pub popular: bool,
}

/// A named grouping of documents, in author-defined display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    pub title: String,
    pub description: String,
    pub documents: Vec<Document>,
}

/// Where a document lives inside the corpus.
#[derive(Debug, Clone, Copy)]
struct DocLocation {
    section: usize,
    document: usize,
}

/// An immutable, validated snapshot of all sections and documents.
///
/// Searching is a pure function of `(corpus, query, config)`, so one snapshot
/// can serve any number of concurrent read-only callers.
#[derive(Debug, Clone)]
pub struct Corpus {
    sections: Vec<Section>,
    documents_by_id: HashMap<String, DocLocation>,
    sections_by_id: HashMap<String, usize>,
}

impl Corpus {
    /// Validate authored content and freeze it into a snapshot.
    ///
    /// Fails with [`IntegrityError`] on orphaned section references,
    /// mismatched back-references, or duplicate ids. Duplicate tags on a
    /// document are not an error - they collapse to the first occurrence.
    pub fn build(mut sections: Vec<Section>) -> Result<Corpus, IntegrityError> {
        let mut sections_by_id: HashMap<String, usize> = HashMap::with_capacity(sections.len());
        for (index, section) in sections.iter().enumerate() {
            if sections_by_id.insert(section.id.clone(), index).is_some() {
                return Err(IntegrityError::DuplicateSection {
                    id: section.id.clone(),
                });
            }
        }

        let mut documents_by_id: HashMap<String, DocLocation> = HashMap::new();
        for (section_index, section) in sections.iter_mut().enumerate() {
            for (document_index, document) in section.documents.iter_mut().enumerate() {
                dedup_tags(&mut document.tags);

                if !sections_by_id.contains_key(&document.section_id) {
                    return Err(IntegrityError::UnknownSection {
                        document_id: document.id.clone(),
                        section_id: document.section_id.clone(),
                    });
                }
                if document.section_id != section.id {
                    return Err(IntegrityError::ForeignSection {
                        document_id: document.id.clone(),
                        section_id: document.section_id.clone(),
                        enclosing: section.id.clone(),
                    });
                }

                let location = DocLocation {
                    section: section_index,
                    document: document_index,
                };
                if documents_by_id.insert(document.id.clone(), location).is_some() {
                    return Err(IntegrityError::DuplicateDocument {
                        id: document.id.clone(),
                    });
                }
            }
        }

        Ok(Corpus {
            sections,
            documents_by_id,
            sections_by_id,
        })
    }

    /// All sections in authoring order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Direct lookup by document id. `None` is an expected outcome, not an
    /// error - callers decide what a missing article means for them.
    pub fn document(&self, id: &str) -> Option<&Document> {
        let location = self.documents_by_id.get(id)?;
        self.sections
            .get(location.section)
            .and_then(|s| s.documents.get(location.document))
    }

    /// Direct lookup by section id.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections_by_id.get(id).map(|&i| &self.sections[i])
    }

    /// Total number of documents across all sections.
    pub fn document_count(&self) -> usize {
        self.documents_by_id.len()
    }

    /// Every `(section, document)` pair in global authoring order. This order
    /// is the deterministic tiebreak for equal relevance scores.
    pub(crate) fn documents(&self) -> impl Iterator<Item = (&Section, &Document)> {
        self.sections
            .iter()
            .flat_map(|section| section.documents.iter().map(move |doc| (section, doc)))
    }
}

/// Collapse duplicate tags, keeping the first occurrence in place.
fn dedup_tags(tags: &mut Vec<String>) {
    let mut seen: HashSet<String> = HashSet::with_capacity(tags.len());
    tags.retain(|tag| seen.insert(tag.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::make_doc;

    fn section(id: &str, title: &str, documents: Vec<Document>) -> Section {
        Section {
            id: id.to_string(),
            title: title.to_string(),
            description: format!("About {}", title),
            documents,
        }
    }

    #[test]
    fn builds_a_well_formed_corpus() {
        let corpus = Corpus::build(vec![
            section(
                "getting-started",
                "Getting Started",
                vec![make_doc("a", "getting-started", "First Steps", "", &[])],
            ),
            section(
                "billing",
                "Billing",
                vec![make_doc("b", "billing", "Invoices", "", &[])],
            ),
        ])
        .unwrap();

        assert_eq!(corpus.document_count(), 2);
        assert_eq!(corpus.sections().len(), 2);
        assert_eq!(corpus.document("a").unwrap().title, "First Steps");
        assert_eq!(corpus.section("billing").unwrap().title, "Billing");
        assert!(corpus.document("nope").is_none());
    }

    #[test]
    fn rejects_unknown_section_reference() {
        let result = Corpus::build(vec![section(
            "getting-started",
            "Getting Started",
            vec![make_doc("a", "no-such-section", "Orphan", "", &[])],
        )]);
        assert!(matches!(
            result,
            Err(IntegrityError::UnknownSection { .. })
        ));
    }

    #[test]
    fn rejects_mismatched_back_reference() {
        let result = Corpus::build(vec![
            section("one", "One", vec![make_doc("a", "two", "Misfiled", "", &[])]),
            section("two", "Two", vec![]),
        ]);
        assert!(matches!(result, Err(IntegrityError::ForeignSection { .. })));
    }

    #[test]
    fn rejects_duplicate_document_id() {
        let result = Corpus::build(vec![
            section("one", "One", vec![make_doc("a", "one", "First", "", &[])]),
            section("two", "Two", vec![make_doc("a", "two", "Second", "", &[])]),
        ]);
        assert!(matches!(
            result,
            Err(IntegrityError::DuplicateDocument { .. })
        ));
    }

    #[test]
    fn rejects_duplicate_section_id() {
        let result = Corpus::build(vec![
            section("one", "One", vec![]),
            section("one", "Also One", vec![]),
        ]);
        assert!(matches!(
            result,
            Err(IntegrityError::DuplicateSection { .. })
        ));
    }

    #[test]
    fn duplicate_tags_collapse_preserving_order() {
        let corpus = Corpus::build(vec![section(
            "s",
            "S",
            vec![make_doc("a", "s", "Tagged", "", &["setup", "beginner", "setup"])],
        )])
        .unwrap();
        assert_eq!(corpus.document("a").unwrap().tags, vec!["setup", "beginner"]);
    }

    #[test]
    fn authoring_order_iterates_sections_then_documents() {
        let corpus = Corpus::build(vec![
            section(
                "one",
                "One",
                vec![
                    make_doc("a", "one", "A", "", &[]),
                    make_doc("b", "one", "B", "", &[]),
                ],
            ),
            section("two", "Two", vec![make_doc("c", "two", "C", "", &[])]),
        ])
        .unwrap();

        let ids: Vec<&str> = corpus.documents().map(|(_, d)| d.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }
}
