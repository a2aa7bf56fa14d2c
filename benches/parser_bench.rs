use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::Value as SerdeValue;
use strictjson::{parse, Scanner, Value};

// A sample "medium" JSON document
const MEDIUM_JSON: &str = r#"
{
    "name": "Babbage",
    "age": 30,
    "admin": true,
    "friends": ["Ada", "Charles", "Grace"],
    "tasks": [
        { "id": 1, "title": "Parse JSON", "done": false },
        { "id": 2, "title": "Write docs\nand \"tests\"", "done": true }
    ],
    "nested": {"key": [null, 1, 1.23e4, -0.5]}
}
"#;

fn bench_scanning(c: &mut Criterion) {
    c.bench_function("Scanner::scan", |b| {
        b.iter(|| Scanner::new(black_box(MEDIUM_JSON)).scan().unwrap().len())
    });
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("JSON Parsing");

    group.bench_function("strictjson::parse", |b| {
        b.iter(|| parse(black_box(MEDIUM_JSON)).unwrap())
    });

    group.bench_function("serde_json::from_str", |b| {
        b.iter(|| serde_json::from_str::<SerdeValue>(black_box(MEDIUM_JSON)).unwrap())
    });

    group.finish();
}

fn bench_stringifying(c: &mut Criterion) {
    let value: Value = parse(MEDIUM_JSON).unwrap();
    let serde_value: SerdeValue = serde_json::from_str(MEDIUM_JSON).unwrap();

    let mut group = c.benchmark_group("JSON Stringify");

    group.bench_function("Value::stringify", |b| {
        b.iter(|| black_box(&value).stringify().unwrap())
    });

    group.bench_function("serde_json::to_string", |b| {
        b.iter(|| serde_json::to_string(black_box(&serde_value)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_scanning, bench_parsing, bench_stringifying);
criterion_main!(benches);
