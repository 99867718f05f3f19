use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gconv::{cast, Record, Value};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize, Record)]
struct Person {
    name: String,
    age: i32,
}

fn bench_cast_int(c: &mut Criterion) {
    let v = Value::from("12345");
    c.bench_function("cast_int", |b| b.iter(|| cast::<i64>(black_box(&v))));
}

fn bench_cast_string(c: &mut Criterion) {
    let v = Value::from(12345);
    c.bench_function("cast_string", |b| b.iter(|| cast::<String>(black_box(&v))));
}

fn bench_cast_float(c: &mut Criterion) {
    let v = Value::from("123.45");
    c.bench_function("cast_float", |b| b.iter(|| cast::<f64>(black_box(&v))));
}

fn bench_cast_record(c: &mut Criterion) {
    let v: Value = [("name", Value::from("Alice")), ("age", Value::from("30"))]
        .into_iter()
        .collect();
    c.bench_function("cast_record", |b| b.iter(|| cast::<Person>(black_box(&v))));
}

criterion_group!(
    cast_benches,
    bench_cast_int,
    bench_cast_string,
    bench_cast_float,
    bench_cast_record
);
criterion_main!(cast_benches);
