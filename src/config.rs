// Copyright 2025-present Lantern contributors
// SPDX-License-Identifier: Apache-2.0

//! Search configuration: field weights, threshold, result limit.
//!
//! The default numbers mirror the product tuning this engine was lifted from:
//!
//! | Field        | Weight | Why this value                                  |
//! |--------------|--------|-------------------------------------------------|
//! | title        | 0.30   | The strongest editorial signal an article has   |
//! | description  | 0.20   | Curated one-liner, almost as trustworthy        |
//! | tags         | 0.20   | Hand-assigned keywords, high precision          |
//! | sectionTitle | 0.20   | Catches "billing"-style category queries        |
//! | body         | 0.10   | Long-form text, noisy, deliberately discounted  |
//!
//! They are tuning, not invariants - callers can pass their own table. What
//! *is* invariant: weights are non-negative and sum to 1.0 within epsilon,
//! the threshold lies in `[0, 1]`, and the result limit is non-zero. All of
//! that is checked once at construction, so a [`SearchConfig`] in hand is a
//! proof that no query will ever trip over its configuration.

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};

/// Tolerance when checking that weights sum to 1.0.
pub const WEIGHT_SUM_EPSILON: f64 = 1e-6;

/// Default relevance threshold: results scoring above this are dropped as noise.
pub const DEFAULT_THRESHOLD: f64 = 0.4;

/// Default cap on the number of results returned by a search.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// The independently weighted pieces of text on a document.
///
/// `SectionTitle` is resolved through the document's section at scoring time;
/// it is not stored on the document itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Title,
    Description,
    Tags,
    SectionTitle,
    Body,
}

impl Field {
    /// Every scorable field, in scoring order.
    pub const ALL: [Field; 5] = [
        Field::Title,
        Field::Description,
        Field::Tags,
        Field::SectionTitle,
        Field::Body,
    ];

    /// The wire name of the field, as it appears in corpus JSON.
    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Tags => "tags",
            Field::SectionTitle => "sectionTitle",
            Field::Body => "body",
        }
    }
}

/// Relative importance of each field, summing to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldWeights {
    pub title: f64,
    pub description: f64,
    pub tags: f64,
    pub section_title: f64,
    pub body: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        FieldWeights {
            title: 0.30,
            description: 0.20,
            tags: 0.20,
            section_title: 0.20,
            body: 0.10,
        }
    }
}

impl FieldWeights {
    /// The weight assigned to a field.
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Title => self.title,
            Field::Description => self.description,
            Field::Tags => self.tags,
            Field::SectionTitle => self.section_title,
            Field::Body => self.body,
        }
    }

    /// Sum of all weights. Valid tables sum to 1.0 within [`WEIGHT_SUM_EPSILON`].
    pub fn sum(&self) -> f64 {
        Field::ALL.iter().map(|&f| self.get(f)).sum()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for field in Field::ALL {
            let weight = self.get(field);
            // NaN fails every comparison, so the sign and sum checks alone
            // would wave a NaN table through.
            if !weight.is_finite() {
                return Err(ConfigError::NonFiniteWeight { field, weight });
            }
            if weight < 0.0 {
                return Err(ConfigError::NegativeWeight { field, weight });
            }
        }
        let sum = self.sum();
        if !sum.is_finite() || (sum - 1.0).abs() > WEIGHT_SUM_EPSILON {
            return Err(ConfigError::WeightSum { sum });
        }
        Ok(())
    }
}

/// Validated search configuration.
///
/// Fields are private on purpose: the only way to get a `SearchConfig` is
/// through [`SearchConfig::new`] or [`Default`], both of which uphold the
/// invariants. Search code reads through the accessors and never re-checks.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    threshold: f64,
    max_results: usize,
    weights: FieldWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            threshold: DEFAULT_THRESHOLD,
            max_results: DEFAULT_MAX_RESULTS,
            weights: FieldWeights::default(),
        }
    }
}

impl SearchConfig {
    /// Build a configuration, rejecting invalid thresholds, limits, and
    /// weight tables up front.
    pub fn new(
        threshold: f64,
        max_results: usize,
        weights: FieldWeights,
    ) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::Threshold { threshold });
        }
        if max_results == 0 {
            return Err(ConfigError::ZeroMaxResults);
        }
        weights.validate()?;
        Ok(SearchConfig {
            threshold,
            max_results,
            weights,
        })
    }

    /// Relevance cutoff in `[0, 1]`; also drives the matcher's error budget.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Maximum number of results a search returns.
    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// The field weight table.
    pub fn weights(&self) -> &FieldWeights {
        &self.weights
    }
}
