use criterion::{Criterion, black_box, criterion_group, criterion_main};
use atrius_fhir_codes::systems::{ISSUE_TYPE, IssueType, NAME_USE, NameUse};
use atrius_fhir_codes::{CodeEnum, CodedValue, Extension, registry};
use serde_json::json;

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup/code");

    group.bench_function("linear_hit", |b| {
        b.iter(|| NAME_USE.lookup(black_box("maiden")))
    });

    group.bench_function("linear_miss", |b| {
        b.iter(|| NAME_USE.lookup(black_box("Maiden")))
    });

    group.bench_function("indexed_hit", |b| {
        b.iter(|| ISSUE_TYPE.lookup(black_box("informational")))
    });

    group.bench_function("indexed_miss", |b| {
        b.iter(|| ISSUE_TYPE.lookup(black_box("Informational")))
    });

    group.bench_function("enum_from_str", |b| {
        b.iter(|| black_box("too-long").parse::<IssueType>())
    });

    group.finish();
}

fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup/registry");
    let registry = registry();

    group.bench_function("by_url", |b| {
        b.iter(|| registry.lookup(black_box("http://hl7.org/fhir/name-use"), black_box("official")))
    });

    group.bench_function("by_name", |b| {
        b.iter(|| registry.lookup(black_box("NameUse"), black_box("official")))
    });

    group.finish();
}

fn bench_coded_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("coded_value");

    group.bench_function("build_raw", |b| {
        b.iter(|| {
            CodedValue::<Extension>::builder(&NAME_USE)
                .id(black_box("n1"))
                .value(black_box("nickname"))
                .build()
        })
    });

    group.bench_function("of_enum", |b| {
        b.iter(|| CodedValue::<Extension>::of(black_box(NameUse::Nickname)))
    });

    let value: CodedValue = CodedValue::builder(&NAME_USE)
        .id("n1")
        .extension(Extension::new("urn:source", "valueString", json!("registration")))
        .value("nickname")
        .build()
        .unwrap();

    group.bench_function("hash_cold", |b| {
        b.iter(|| value.to_builder().build().map(|v| v.hash_code()))
    });

    group.bench_function("hash_cached", |b| {
        b.iter(|| black_box(&value).hash_code())
    });

    group.bench_function("from_json", |b| {
        let wire = json!({"id": "n1", "value": NameUse::Official.as_code()});
        b.iter(|| CodedValue::<Extension>::from_json(&NAME_USE, black_box(&wire)))
    });

    group.finish();
}

criterion_group!(benches, bench_lookup, bench_registry, bench_coded_value);
criterion_main!(benches);
