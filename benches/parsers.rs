// benches/parsers.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use dnd_scrape::{
    core::html::content_blocks,
    parse,
    segment::segment_spell,
    specs::listing::extract_rows,
};

const CAST_TIMES: &[&str] = &["1 Action", "1 Action R", "Reaction", "10 Minutes", "1 Action or 8 Hours"];
const RANGES: &[&str] = &["Touch", "150 feet", "Self (30-foot cone)", "1 mile", "Unlimited"];

fn bench_fields(c: &mut Criterion) {
    c.bench_function("cast_time", |b| {
        b.iter(|| {
            for raw in CAST_TIMES {
                black_box(parse::parse_cast_time(black_box(raw)));
            }
        })
    });

    c.bench_function("spell_range", |b| {
        b.iter(|| {
            for raw in RANGES {
                black_box(parse::parse_spell_range(black_box(raw)));
            }
        })
    });

    c.bench_function("components", |b| {
        b.iter(|| black_box(parse::parse_components(black_box("V, S, M"))))
    });
}

fn bench_pages(c: &mut Criterion) {
    let detail = include_str!("../tests/fixtures/spell_fire_bolt.html");
    let listing = include_str!("../tests/fixtures/spells_listing.html");
    let blocks = content_blocks(detail, "page-content", "bench").expect("fixture has a content container");

    c.bench_function("segment_spell", |b| {
        b.iter(|| black_box(segment_spell(black_box(&blocks))))
    });

    c.bench_function("content_blocks", |b| {
        b.iter(|| black_box(content_blocks(black_box(detail), "page-content", "bench").map(|v| v.len())))
    });

    c.bench_function("listing_rows", |b| {
        b.iter(|| black_box(extract_rows(black_box(listing), "page-content", "bench").map(|v| v.len())))
    });
}

criterion_group!(benches, bench_fields, bench_pages);
criterion_main!(benches);
