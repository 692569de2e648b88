use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sinscript::{GlyphTable, RomanizationTable, singlish_to_unicode, unicode_to_legacy_glyphs};

const SINGLISH_SAMPLES: &[(&str, &str)] = &[
    ("greeting", "ayubowan"),
    ("sentence", "mama gedara yanawaa"),
    ("mixed", "api 2026 dii colombo yanawaa!"),
    ("conjuncts", "krama shakthiya prashna"),
    ("ascii-only", "plain english text, nothing to convert"),
];

const UNICODE_SAMPLES: &[(&str, &str)] = &[
    ("word", "කොහොමද"),
    ("composites", "කේ කෝ කො"),
    ("conjuncts", "ක\u{0DCA}\u{200D}ය ශ\u{0DCA}\u{200D}රී"),
    ("ascii-only", "plain english text, nothing to convert"),
];

fn table_build(c: &mut Criterion) {
    c.bench_function("build/romanization", |b| b.iter(RomanizationTable::build));
    c.bench_function("build/glyphs", |b| b.iter(GlyphTable::build));
}

fn singlish(c: &mut Criterion) {
    let mut group = c.benchmark_group("singlish_to_unicode");
    for &(name, text) in SINGLISH_SAMPLES {
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| singlish_to_unicode(std::hint::black_box(text)))
        });
    }
    group.finish();
}

fn legacy(c: &mut Criterion) {
    let mut group = c.benchmark_group("unicode_to_legacy");
    for &(name, text) in UNICODE_SAMPLES {
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| unicode_to_legacy_glyphs(std::hint::black_box(text)))
        });
    }
    group.finish();
}

criterion_group!(benches, table_build, singlish, legacy);
criterion_main!(benches);
