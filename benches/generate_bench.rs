//! Criterion benchmarks for the word-search puzzle engine.
//!
//! Run with: `cargo bench`

use criterion::{criterion_group, criterion_main, Criterion};
use wordsearch_engine::generate::generate;
use wordsearch_engine::types::PuzzleParams;
use wordsearch_engine::verify::locate_word;

// -- JSON fixtures --

/// Small puzzle at the low end of the practical range.
const BASIC_10X10_JSON: &str = r#"{
  "words": ["SOL", "LUNA", "ESTRELLA"],
  "rows": 10,
  "cols": 10,
  "seed": 42
}"#;

/// Mid-size puzzle with enough words for crossings to matter.
const DENSE_15X15_JSON: &str = r#"{
  "words": [
    "SOL", "LUNA", "ESTRELLA", "PLANETA", "COMETA",
    "GALAXIA", "SATURNO", "MARTE", "VENUS", "ORBITA"
  ],
  "rows": 15,
  "cols": 15,
  "seed": 42
}"#;

/// Largest practical request: 20 words on a 25x25 grid.
const LARGE_25X25_JSON: &str = r#"{
  "words": [
    "SOL", "LUNA", "ESTRELLA", "PLANETA", "COMETA",
    "GALAXIA", "SATURNO", "MARTE", "VENUS", "ORBITA",
    "NEBULOSA", "UNIVERSO", "ASTEROIDE", "TELESCOPIO", "GRAVEDAD",
    "ECLIPSE", "METEORO", "COSMOS", "SATELITE", "ROTACION"
  ],
  "rows": 25,
  "cols": 25,
  "seed": 42
}"#;

fn bench_basic_10x10(c: &mut Criterion) {
    let params: PuzzleParams = serde_json::from_str(BASIC_10X10_JSON).unwrap();
    c.bench_function("generate_10x10_3_words", |b| {
        b.iter(|| generate(&params));
    });
}

fn bench_dense_15x15(c: &mut Criterion) {
    let params: PuzzleParams = serde_json::from_str(DENSE_15X15_JSON).unwrap();
    c.bench_function("generate_15x15_10_words", |b| {
        b.iter(|| generate(&params));
    });
}

fn bench_large_25x25(c: &mut Criterion) {
    let params: PuzzleParams = serde_json::from_str(LARGE_25X25_JSON).unwrap();
    c.bench_function("generate_25x25_20_words", |b| {
        b.iter(|| generate(&params));
    });
}

fn bench_locate_words(c: &mut Criterion) {
    let params: PuzzleParams = serde_json::from_str(LARGE_25X25_JSON).unwrap();
    let result = generate(&params).expect("generate");
    c.bench_function("locate_20_words_25x25", |b| {
        b.iter(|| {
            for word in &params.words {
                locate_word(&result.grid, word);
            }
        });
    });
}

criterion_group!(
    benches,
    bench_basic_10x10,
    bench_dense_15x15,
    bench_large_25x25,
    bench_locate_words
);
criterion_main!(benches);
