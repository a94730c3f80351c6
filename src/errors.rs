// Copyright 2025-present Lantern contributors
// SPDX-License-Identifier: Apache-2.0

//! Construction-time errors.
//!
//! Everything here fires when a corpus or a search configuration is built,
//! never mid-search. A corpus that survives [`Corpus::build`] and a config
//! that survives [`SearchConfig::new`] cannot make `search()` fail - that's
//! the contract the rest of the crate leans on. An invalid weight table or an
//! orphaned section reference is an authoring defect; it should block the
//! content snapshot from deploying, not degrade quietly at query time.
//!
//! [`Corpus::build`]: crate::Corpus::build
//! [`SearchConfig::new`]: crate::SearchConfig::new

use crate::config::Field;
use std::fmt;

/// Invalid search configuration, rejected before any query runs.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Field weights must sum to 1.0 within epsilon.
    WeightSum { sum: f64 },
    /// A field weight is negative.
    NegativeWeight { field: Field, weight: f64 },
    /// A field weight is NaN or infinite.
    NonFiniteWeight { field: Field, weight: f64 },
    /// Threshold must lie in `[0.0, 1.0]`.
    Threshold { threshold: f64 },
    /// A result limit of zero would make every search trivially empty.
    ZeroMaxResults,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::WeightSum { sum } => {
                write!(f, "field weights sum to {}, expected 1.0", sum)
            }
            ConfigError::NegativeWeight { field, weight } => {
                write!(f, "weight for field '{}' is negative: {}", field.name(), weight)
            }
            ConfigError::NonFiniteWeight { field, weight } => {
                write!(f, "weight for field '{}' is not finite: {}", field.name(), weight)
            }
            ConfigError::Threshold { threshold } => {
                write!(f, "threshold {} is outside [0.0, 1.0]", threshold)
            }
            ConfigError::ZeroMaxResults => {
                write!(f, "maxResults must be at least 1")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Inconsistent corpus content, rejected at [`Corpus::build`](crate::Corpus::build).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityError {
    /// A document's `sectionId` names a section that doesn't exist.
    UnknownSection {
        document_id: String,
        section_id: String,
    },
    /// A document's `sectionId` names a section other than the one it is
    /// authored under.
    ForeignSection {
        document_id: String,
        section_id: String,
        enclosing: String,
    },
    /// Two documents share an id.
    DuplicateDocument { id: String },
    /// Two sections share an id.
    DuplicateSection { id: String },
}

impl fmt::Display for IntegrityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityError::UnknownSection {
                document_id,
                section_id,
            } => {
                write!(
                    f,
                    "document '{}' references unknown section '{}'",
                    document_id, section_id
                )
            }
            IntegrityError::ForeignSection {
                document_id,
                section_id,
                enclosing,
            } => {
                write!(
                    f,
                    "document '{}' references section '{}' but is authored under '{}'",
                    document_id, section_id, enclosing
                )
            }
            IntegrityError::DuplicateDocument { id } => {
                write!(f, "duplicate document id '{}'", id)
            }
            IntegrityError::DuplicateSection { id } => {
                write!(f, "duplicate section id '{}'", id)
            }
        }
    }
}

impl std::error::Error for IntegrityError {}
