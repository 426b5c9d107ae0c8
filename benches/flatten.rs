use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::Serialize;
use toon_flat::{build_prompt, flatten, to_string, to_value, DataFormat};

#[derive(Serialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Clone)]
struct NestedData {
    id: u32,
    metadata: Metadata,
    tags: Vec<String>,
}

#[derive(Serialize, Clone)]
struct Metadata {
    created: String,
    updated: String,
    version: u32,
}

fn sample_user() -> User {
    User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    }
}

fn products(size: u32) -> Vec<Product> {
    (0..size)
        .map(|i| Product {
            sku: format!("SKU{}", i),
            name: format!("Product {}", i),
            price: 9.99 + f64::from(i),
            quantity: i,
        })
        .collect()
}

fn benchmark_serialize_simple(c: &mut Criterion) {
    let user = sample_user();

    c.bench_function("serialize_simple_struct", |b| {
        b.iter(|| to_string(black_box(&user)))
    });
}

fn benchmark_serialize_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_array");

    for size in [10, 50, 100, 500].iter() {
        let products = products(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| to_string(black_box(&products)))
        });
    }
    group.finish();
}

fn benchmark_flatten_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten_value");

    for size in [10, 50, 100, 500].iter() {
        let value = to_value(&products(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &value, |b, value| {
            b.iter(|| flatten(black_box(value)).map(|doc| doc.to_string()))
        });
    }
    group.finish();
}

fn benchmark_serialize_nested(c: &mut Criterion) {
    let data = NestedData {
        id: 42,
        metadata: Metadata {
            created: "2023-01-01T00:00:00Z".to_string(),
            updated: "2023-12-31T23:59:59Z".to_string(),
            version: 3,
        },
        tags: vec![
            "important".to_string(),
            "verified".to_string(),
            "production".to_string(),
        ],
    };

    c.bench_function("serialize_nested_struct", |b| {
        b.iter(|| to_string(black_box(&data)))
    });
}

fn benchmark_primitive_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitive_array");

    let numbers: Vec<i32> = (0..100).collect();
    let bools: Vec<bool> = (0..100).map(|i| i % 2 == 0).collect();
    let floats: Vec<f64> = (0..100).map(|i| i as f64 * 1.5).collect();

    group.bench_function("serialize_integers", |b| {
        b.iter(|| to_string(black_box(&numbers)))
    });

    group.bench_function("serialize_booleans", |b| {
        b.iter(|| to_string(black_box(&bools)))
    });

    group.bench_function("serialize_floats", |b| {
        b.iter(|| to_string(black_box(&floats)))
    });

    group.finish();
}

fn benchmark_comparison_with_json(c: &mut Criterion) {
    let items = products(100);
    let mut group = c.benchmark_group("comparison");

    group.bench_function("toon_flat", |b| b.iter(|| to_string(black_box(&items))));

    group.bench_function("json_pretty", |b| {
        b.iter(|| serde_json::to_string_pretty(black_box(&items)))
    });

    group.finish();
}

fn benchmark_build_prompt(c: &mut Criterion) {
    let value = to_value(&products(50)).unwrap();
    let mut group = c.benchmark_group("build_prompt");

    for format in [DataFormat::Toon, DataFormat::Json] {
        group.bench_function(format.to_string(), |b| {
            b.iter(|| build_prompt("Summarize the inventory.", Some(black_box(&value)), format))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_serialize_simple,
    benchmark_serialize_array,
    benchmark_flatten_value,
    benchmark_serialize_nested,
    benchmark_primitive_array,
    benchmark_comparison_with_json,
    benchmark_build_prompt
);
criterion_main!(benches);
