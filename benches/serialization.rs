use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use jsontree::{from_str, to_string, to_string_pretty, to_string_with_options, tree, FormatOptions, Value};

fn product_list(size: u32) -> Value {
    Value::list((0..size).map(|i| {
        tree!({
            "sku": (format!("SKU{}", i)),
            "name": (format!("Product {}", i)),
            "price": (9.99 + f64::from(i)),
            "quantity": i,
            "tags": ["new", "sale"]
        })
    }))
}

fn nested(levels: usize) -> Value {
    let mut value = tree!({ "leaf": true });
    for i in 0..levels {
        value = tree!({ "id": (i as i64), "child": value, "siblings": [1, 2, 3] });
    }
    value
}

fn benchmark_serialize_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_list");

    for size in [10, 50, 100, 500].iter() {
        let products = product_list(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &products, |b, products| {
            b.iter(|| to_string(black_box(products)))
        });
    }
    group.finish();
}

fn benchmark_parse_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_list");

    for size in [10, 50, 100, 500].iter() {
        let text = to_string(&product_list(*size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| from_str(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_presets(c: &mut Criterion) {
    let mut group = c.benchmark_group("presets");
    let value = product_list(100);

    group.bench_function("compact", |b| b.iter(|| to_string(black_box(&value))));
    group.bench_function("formatted_wrapped", |b| {
        b.iter(|| to_string_pretty(black_box(&value)))
    });
    let readable = FormatOptions::readable();
    group.bench_function("readable", |b| {
        b.iter(|| to_string_with_options(black_box(&value), &readable))
    });

    group.finish();
}

fn benchmark_nested(c: &mut Criterion) {
    let value = nested(50);
    let text = to_string(&value);

    c.bench_function("serialize_nested", |b| b.iter(|| to_string(black_box(&value))));
    c.bench_function("parse_nested", |b| b.iter(|| from_str(black_box(&text))));
}

fn benchmark_relaxed_input(c: &mut Criterion) {
    let strict = to_string(&product_list(100));
    let relaxed = to_string_with_options(&product_list(100), &FormatOptions::readable());

    let mut group = c.benchmark_group("input_style");
    group.bench_function("double_quoted", |b| b.iter(|| from_str(black_box(&strict))));
    group.bench_function("bare_keys_single_quoted", |b| {
        b.iter(|| from_str(black_box(&relaxed)))
    });
    group.finish();
}

fn benchmark_comparison_with_json(c: &mut Criterion) {
    let text = to_string(&product_list(100));

    let mut group = c.benchmark_group("comparison");
    group.bench_function("jsontree_parse", |b| b.iter(|| from_str(black_box(&text))));
    group.bench_function("serde_json_parse", |b| {
        b.iter(|| serde_json::from_str::<serde_json::Value>(black_box(&text)))
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_serialize_list,
    benchmark_parse_list,
    benchmark_presets,
    benchmark_nested,
    benchmark_relaxed_input,
    benchmark_comparison_with_json
);
criterion_main!(benches);
