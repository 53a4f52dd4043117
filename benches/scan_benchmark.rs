//! Benchmark for the seed-script scanners.
//!
//! Measures the three layers separately:
//! 1. Row tokenization over a multi-row `VALUES` body
//! 2. Field splitting for one representative 19-column row
//! 3. Full script parsing (locate `VALUES`, tokenize, split, validate)
//! plus the writer that renders rows back into a script.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use pasar_malam_seed::{
    Columns, SeedSchema, SeedValue, parse_seed, split_fields, split_rows, write_seed,
};
use serde_json::json;
use std::hint::black_box;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// One seed row shaped like the real dataset: quoted text with apostrophes
/// and parentheses, embedded JSON with commas, NULLs, and numerics.
fn seed_row(index: usize) -> Vec<SeedValue> {
    vec![
        SeedValue::from(format!("pasar-malam-{index}")),
        SeedValue::from("It's Pasar Malam (Gerai Malam)"),
        SeedValue::from("Jalan Cerdas, Taman Connaught, 56000 Kuala Lumpur"),
        SeedValue::from("Taman Connaught"),
        SeedValue::from("Kuala Lumpur"),
        SeedValue::from("Active"),
        SeedValue::Null,
        SeedValue::Real(2400.0),
        SeedValue::Integer(700),
        SeedValue::Bool(true),
        SeedValue::Bool(false),
        SeedValue::from("Street parking along Jalan Cerdas"),
        SeedValue::Bool(true),
        SeedValue::Bool(false),
        SeedValue::Jsonb(json!({
            "latitude": 3.0806,
            "longitude": 101.7405,
            "gmaps_link": "https://maps.example/tc",
        })),
        SeedValue::Jsonb(json!([{
            "days": ["wed"],
            "times": [{"start": "17:00", "end": "23:00", "note": "Night market"}],
        }])),
        SeedValue::from("2024-06-01 00:00:00.000000+00"),
        SeedValue::from("2024-06-01 00:00:00.000000+00"),
        SeedValue::Null,
    ]
}

/// A bare `VALUES` body: `(...)` groups joined by commas, no script framing.
fn values_body(count: usize) -> String {
    (0..count)
        .map(|index| {
            let fields: Vec<String> = seed_row(index)
                .iter()
                .map(ToString::to_string)
                .collect();
            format!("({})", fields.join(", "))
        })
        .collect::<Vec<_>>()
        .join(",\n")
}

/// A complete seed script with header, column list, and footer.
fn seed_script(count: usize) -> String {
    let schema = SeedSchema::pasar_malams();
    let rows: Vec<_> = (0..count).map(seed_row).collect();
    write_seed(&schema, &rows, "2024-06-01 08:00:00").unwrap()
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn benchmark_row_tokenizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("row_tokenizer");

    for count in [10, 100, 1000] {
        let body = values_body(count);
        group.throughput(Throughput::Bytes(body.len() as u64));

        group.bench_with_input(BenchmarkId::new("split_rows", count), &body, |b, body| {
            b.iter(|| {
                let mut rows = 0;
                for row in split_rows(black_box(body)) {
                    black_box(row.unwrap());
                    rows += 1;
                }
                rows
            });
        });
    }

    group.finish();
}

fn benchmark_field_splitter(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_splitter");

    let body = values_body(1);
    let row = &body[1..body.len() - 1];
    group.throughput(Throughput::Bytes(row.len() as u64));

    group.bench_function("one_row_19_fields", |b| {
        b.iter(|| black_box(split_fields(black_box(row)).unwrap()));
    });

    group.finish();
}

fn benchmark_full_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_parse");

    let columns = Columns::pasar_malams();
    for count in [10, 100, 1000] {
        let sql = seed_script(count);
        group.throughput(Throughput::Bytes(sql.len() as u64));

        group.bench_with_input(BenchmarkId::new("parse_seed", count), &sql, |b, sql| {
            b.iter(|| {
                let parsed = parse_seed(black_box(sql), black_box(&columns)).unwrap();
                black_box(parsed.rows.len())
            });
        });
    }

    group.finish();
}

fn benchmark_seed_writer(c: &mut Criterion) {
    let mut group = c.benchmark_group("seed_writer");

    let schema = SeedSchema::pasar_malams();
    for count in [100, 1000] {
        let rows: Vec<_> = (0..count).map(seed_row).collect();

        group.bench_with_input(BenchmarkId::new("write_seed", count), &rows, |b, rows| {
            b.iter(|| {
                black_box(write_seed(black_box(&schema), rows, "2024-06-01 08:00:00").unwrap())
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_row_tokenizer,
    benchmark_field_splitter,
    benchmark_full_parse,
    benchmark_seed_writer,
);
criterion_main!(benches);
