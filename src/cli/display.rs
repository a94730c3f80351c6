// Copyright 2025-present Lantern contributors
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for search results.
//!
//! Plain ANSI styling: scores get a color band (green = strong, yellow = ok,
//! red = barely cleared the threshold), titles are bold, metadata is dim.
//! Respects `NO_COLOR` and switches everything off when stdout isn't a TTY,
//! so piping into other tools stays clean.

use lantern::{Difficulty, Document, RankedDocument, Section, SectionGroup};

/// Should output carry ANSI codes?
fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

fn paint(text: &str, code: &str) -> String {
    if use_color() {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}

fn bold(text: &str) -> String {
    paint(text, "1")
}

fn dim(text: &str) -> String {
    paint(text, "2")
}

fn cyan(text: &str) -> String {
    paint(text, "36")
}

/// Color-band a relevance score: lower is better.
fn score_badge(score: f64) -> String {
    let text = format!("{:.3}", score);
    let code = if score < 0.1 {
        "32" // green
    } else if score < 0.25 {
        "33" // yellow
    } else {
        "31" // red
    };
    paint(&text, code)
}

fn difficulty_label(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Beginner => "beginner",
        Difficulty::Intermediate => "intermediate",
        Difficulty::Advanced => "advanced",
    }
}

fn print_hit(index: usize, hit: &RankedDocument<'_>) {
    println!(
        "{:>2}. {} {}",
        index + 1,
        score_badge(hit.score),
        bold(&hit.document.title)
    );
    if !hit.document.description.is_empty() {
        println!("      {}", hit.document.description);
    }
    let mut meta = vec![
        format!("id: {}", hit.document.id),
        format!("difficulty: {}", difficulty_label(hit.document.difficulty)),
    ];
    if !hit.document.tags.is_empty() {
        meta.push(format!("tags: {}", hit.document.tags.join(", ")));
    }
    println!("      {}", dim(&meta.join("  ")));
}

/// Print the flat ranked list.
pub fn print_flat(flat: &[RankedDocument<'_>]) {
    if flat.is_empty() {
        println!("no results");
        return;
    }
    for (index, hit) in flat.iter().enumerate() {
        print_hit(index, hit);
    }
}

/// Print results grouped by section, best section first.
pub fn print_grouped(grouped: &[SectionGroup<'_>]) {
    if grouped.is_empty() {
        println!("no results");
        return;
    }
    for group in grouped {
        println!("{}", cyan(&group.section.title));
        for (index, hit) in group.documents.iter().enumerate() {
            print_hit(index, hit);
        }
        println!();
    }
}

/// Print the corpus as authored (browsing mode).
pub fn print_sections(sections: &[Section]) {
    for section in sections {
        println!(
            "{} {}",
            cyan(&section.title),
            dim(&format!("({} articles)", section.documents.len()))
        );
        for document in &section.documents {
            let marker = if document.popular { "*" } else { " " };
            println!("  {} {}  {}", marker, bold(&document.title), dim(&document.id));
        }
        println!();
    }
}

/// Print a single document in full.
pub fn print_document(document: &Document) {
    println!("{}", bold(&document.title));
    println!("{}", document.description);
    println!(
        "{}",
        dim(&format!(
            "id: {}  section: {}  difficulty: {}  popular: {}",
            document.id,
            document.section_id,
            difficulty_label(document.difficulty),
            document.popular
        ))
    );
    if !document.tags.is_empty() {
        println!("{}", dim(&format!("tags: {}", document.tags.join(", "))));
    }
    if let Some(body) = &document.body {
        println!("\n{}", body);
    }
}
