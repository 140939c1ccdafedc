// SPDX-License-Identifier: PMPL-1.0-or-later
//! Benchmarks for the auditbot engine

use auditbot::detectors::default_detectors;
use auditbot::{analyze_html, generate_report};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const PAGE: &str = include_str!("../tests/fixtures/inaccessible.html");
const STYLESHEET: &str = include_str!("../tests/fixtures/poor-contrast.css");

fn bench_full_audit(c: &mut Criterion) {
    c.bench_function("analyze_html", |b| {
        b.iter(|| analyze_html(black_box(PAGE), black_box(Some(STYLESHEET))))
    });
}

fn bench_large_page(c: &mut Criterion) {
    let page = PAGE.repeat(200);
    c.bench_function("analyze_html_large", |b| {
        b.iter(|| analyze_html(black_box(&page), None))
    });
}

fn bench_detectors(c: &mut Criterion) {
    for detector in default_detectors() {
        let input = if detector.name() == "color-contrast" { STYLESHEET } else { PAGE };
        c.bench_function(detector.name(), |b| b.iter(|| detector.detect(black_box(input))));
    }
}

fn bench_report(c: &mut Criterion) {
    let result = analyze_html(PAGE, Some(STYLESHEET)).expect("audit should succeed");
    c.bench_function("generate_report", |b| b.iter(|| generate_report(black_box(&result))));
}

criterion_group!(benches, bench_full_audit, bench_large_page, bench_detectors, bench_report);
criterion_main!(benches);
