//! Criterion benchmarks for the search pipeline.
//!
//! Synthetic corpora are generated deterministically from fixed word pools,
//! so runs are comparable across machines and commits. Three query shapes
//! are measured: an exact hit, a one-typo hit, and a total miss (the miss
//! still scans every field, which makes it the worst case).
//!
//! Run with: cargo bench --bench search_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lantern::{match_text, search, Corpus, Difficulty, Document, Section, SearchConfig};

// ============================================================================
// CORPUS GENERATION
// ============================================================================

const WORDS: &[&str] = &[
    "account", "billing", "invoice", "setup", "security", "export", "team",
    "workspace", "password", "integration", "webhook", "report", "upgrade",
    "notification", "dashboard", "permission", "archive", "migration",
];

/// Pick words from the pool with a simple multiplicative walk. Deterministic,
/// no rand dependency.
fn pick(seed: &mut usize) -> &'static str {
    *seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    WORDS[(*seed >> 33) % WORDS.len()]
}

fn phrase(seed: &mut usize, words: usize) -> String {
    (0..words).map(|_| pick(seed)).collect::<Vec<_>>().join(" ")
}

/// Build a corpus with `section_count` sections of `docs_per_section`
/// documents each, every document carrying a body paragraph.
fn synthetic_corpus(section_count: usize, docs_per_section: usize) -> Corpus {
    let mut seed = 0x5eed;
    let sections: Vec<Section> = (0..section_count)
        .map(|s| {
            let section_id = format!("section-{}", s);
            let documents = (0..docs_per_section)
                .map(|d| Document {
                    id: format!("doc-{}-{}", s, d),
                    section_id: section_id.clone(),
                    title: phrase(&mut seed, 4),
                    description: phrase(&mut seed, 10),
                    tags: (0..3).map(|_| pick(&mut seed).to_string()).collect(),
                    body: Some(phrase(&mut seed, 120)),
                    difficulty: Difficulty::Intermediate,
                    popular: false,
                })
                .collect();
            Section {
                id: section_id,
                title: phrase(&mut seed, 2),
                description: String::new(),
                documents,
            }
        })
        .collect();
    Corpus::build(sections).expect("synthetic corpus is valid")
}

// ============================================================================
// MATCHER BENCHMARKS
// ============================================================================

fn bench_matcher(c: &mut Criterion) {
    let mut seed = 0xfee1;
    let short_text = phrase(&mut seed, 10);
    let long_text = phrase(&mut seed, 200);

    c.bench_function("match_exact_short", |b| {
        b.iter(|| match_text(black_box("billing"), black_box(&short_text), 0.4))
    });

    c.bench_function("match_typo_long", |b| {
        b.iter(|| match_text(black_box("billling"), black_box(&long_text), 0.4))
    });

    c.bench_function("match_miss_long", |b| {
        b.iter(|| match_text(black_box("zzqxnotfound"), black_box(&long_text), 0.4))
    });

    // Over 64 chars: exercises the DP fallback path.
    let long_query = "a".repeat(80);
    c.bench_function("match_long_pattern_dp", |b| {
        b.iter(|| match_text(black_box(&long_query), black_box(&long_text), 0.4))
    });
}

// ============================================================================
// END-TO-END SEARCH BENCHMARKS
// ============================================================================

fn bench_search_scaling(c: &mut Criterion) {
    let config = SearchConfig::default();
    let mut group = c.benchmark_group("search_scaling");

    for &docs in [50usize, 200, 1000].iter() {
        let corpus = synthetic_corpus(docs / 10, 10);
        group.bench_with_input(BenchmarkId::new("exact", docs), &corpus, |b, corpus| {
            b.iter(|| search(black_box(corpus), black_box("billing invoice"), &config))
        });
        group.bench_with_input(BenchmarkId::new("typo", docs), &corpus, |b, corpus| {
            b.iter(|| search(black_box(corpus), black_box("billling invocie"), &config))
        });
        group.bench_with_input(BenchmarkId::new("miss", docs), &corpus, |b, corpus| {
            b.iter(|| search(black_box(corpus), black_box("zzqxnotfound123"), &config))
        });
    }

    group.finish();
}

fn bench_browse(c: &mut Criterion) {
    let corpus = synthetic_corpus(20, 10);
    let config = SearchConfig::default();

    c.bench_function("browse_blank_query", |b| {
        b.iter(|| search(black_box(&corpus), black_box(""), &config))
    });
}

criterion_group!(benches, bench_matcher, bench_search_scaling, bench_browse);
criterion_main!(benches);
