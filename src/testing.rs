// Copyright 2025-present Lantern contributors
// SPDX-License-Identifier: Apache-2.0

//! Canonical fixtures shared by unit tests, integration tests, and benches.
//!
//! The help-center fixture mirrors the content shape this engine serves in
//! production: a handful of sections, articles with curated titles and
//! descriptions, hand-assigned tags, and the occasional long-form guide
//! body.

use crate::corpus::{Corpus, Difficulty, Document, Section};

/// Build a document with sensible defaults for the fields a test doesn't
/// care about.
pub fn make_doc(
    id: &str,
    section_id: &str,
    title: &str,
    description: &str,
    tags: &[&str],
) -> Document {
    Document {
        id: id.to_string(),
        section_id: section_id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        body: None,
        difficulty: Difficulty::Beginner,
        popular: false,
    }
}

/// The sections of the canonical help-center fixture.
pub fn help_center_sections() -> Vec<Section> {
    let mut quick_start = make_doc(
        "quick-start",
        "getting-started",
        "5-Minute Quick Start Guide",
        "Everything you need for a quick start: install the CLI, create a workspace, and publish your first page.",
        &["setup", "quickstart", "beginner"],
    );
    quick_start.body = Some(
        "This guide walks through the quick start flow end to end. Install the \
         command line tools, sign in, create a workspace, and publish. Most \
         teams finish in under five minutes."
            .to_string(),
    );
    quick_start.popular = true;

    let mut account = make_doc(
        "account-setup",
        "getting-started",
        "Account Creation & Authentication",
        "Create an account and set up authentication for your team.",
        &["account", "signup", "login"],
    );
    account.popular = true;

    let mut invite = make_doc(
        "invite-team",
        "getting-started",
        "Inviting Your Team",
        "Add teammates to a workspace and assign their roles.",
        &["team", "invite", "collaboration"],
    );
    invite.difficulty = Difficulty::Intermediate;

    let audit = make_doc(
        "audit-reports",
        "security",
        "Annual Audit Reports",
        "Download the latest attestation letters for vendor reviews.",
        &["soc2", "audit", "compliance"],
    );

    let mut encryption = make_doc(
        "data-encryption",
        "security",
        "Data Encryption at Rest and in Transit",
        "How customer data is encrypted throughout its lifecycle.",
        &["encryption", "security", "soc2"],
    );
    encryption.difficulty = Difficulty::Advanced;

    let mut access = make_doc(
        "access-control",
        "security",
        "Role-Based Access Control",
        "Granting and revoking permissions with roles.",
        &["rbac", "permissions", "soc2"],
    );
    access.difficulty = Difficulty::Intermediate;

    let invoices = make_doc(
        "invoices",
        "billing",
        "Invoices and Receipts",
        "Where to view, download, and forward invoices.",
        &["billing", "invoice", "receipts"],
    );

    let upgrade = make_doc(
        "upgrade-plan",
        "billing",
        "Upgrading Your Plan",
        "Switching tiers and what happens to billing mid-cycle.",
        &["billing", "upgrade", "plans"],
    );

    vec![
        Section {
            id: "getting-started".to_string(),
            title: "Getting Started".to_string(),
            description: "First steps with the product.".to_string(),
            documents: vec![quick_start, account, invite],
        },
        Section {
            id: "security".to_string(),
            title: "Security & Compliance".to_string(),
            description: "How we keep customer data safe.".to_string(),
            documents: vec![audit, encryption, access],
        },
        Section {
            id: "billing".to_string(),
            title: "Billing & Plans".to_string(),
            description: "Plans, payments, and paperwork.".to_string(),
            documents: vec![invoices, upgrade],
        },
    ]
}

/// The canonical help-center corpus.
pub fn help_center_corpus() -> Corpus {
    Corpus::build(help_center_sections()).expect("fixture corpus is well-formed")
}
