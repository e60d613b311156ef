use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use safeson::{decode, encode, from_slice, rle, to_value, to_vec};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Deserialize, Clone)]
struct NestedData {
    id: u32,
    metadata: Metadata,
    tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone)]
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

fn sample_users(n: u32) -> Vec<User> {
    (0..n)
        .map(|i| User {
            id: i,
            name: format!("User{}", i),
            email: format!("user{}@example.com", i),
            active: i % 2 == 0,
        })
        .collect()
}

fn benchmark_serialize_simple(c: &mut Criterion) {
    let user = sample_user();

    c.bench_function("serialize_simple_struct", |b| {
        b.iter(|| to_vec(black_box(&user)))
    });
}

fn benchmark_deserialize_simple(c: &mut Criterion) {
    let bytes = to_vec(&sample_user()).unwrap();

    c.bench_function("deserialize_simple_struct", |b| {
        b.iter(|| from_slice::<User>(black_box(&bytes)))
    });
}

fn benchmark_array_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("array_of_structs");

    for size in [10u32, 100, 1000] {
        let users = sample_users(size);
        let bytes = to_vec(&users).unwrap();

        group.bench_with_input(BenchmarkId::new("serialize", size), &users, |b, users| {
            b.iter(|| to_vec(black_box(users)))
        });

        group.bench_with_input(BenchmarkId::new("deserialize", size), &bytes, |b, bytes| {
            b.iter(|| from_slice::<Vec<User>>(black_box(bytes)))
        });
    }

    group.finish();
}

fn benchmark_nested(c: &mut Criterion) {
    let data = NestedData {
        id: 1,
        metadata: Metadata {
            created: "2024-01-01".to_string(),
            updated: "2024-01-02".to_string(),
            version: 1,
        },
        tags: vec!["rust".to_string(), "binary".to_string()],
    };
    let bytes = to_vec(&data).unwrap();

    c.bench_function("serialize_nested", |b| b.iter(|| to_vec(black_box(&data))));
    c.bench_function("deserialize_nested", |b| {
        b.iter(|| from_slice::<NestedData>(black_box(&bytes)))
    });
}

fn benchmark_value_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("value_codec");

    let value = to_value(&sample_users(100)).unwrap();
    let wire = encode(&value);

    group.bench_function("encode", |b| b.iter(|| encode(black_box(&value))));
    group.bench_function("decode", |b| b.iter(|| decode(black_box(&wire))));

    let long = to_value(&"Hello, world!".repeat(400)).unwrap();
    let long_wire = encode(&long);

    group.bench_function("encode_long_string", |b| b.iter(|| encode(black_box(&long))));
    group.bench_function("decode_long_string", |b| {
        b.iter(|| decode(black_box(&long_wire)))
    });

    group.finish();
}

fn benchmark_zero_runs(c: &mut Criterion) {
    let mut group = c.benchmark_group("zero_runs");

    let sparse: Vec<u8> = (0..16_384u32)
        .map(|i| if i % 97 == 0 { 1 } else { 0 })
        .collect();
    let dense: Vec<u8> = (0..16_384u32).map(|i| (i % 255) as u8 + 1).collect();
    let numbers: Vec<f64> = (0..1000).map(f64::from).collect();
    let mixed = {
        let value = to_value(&numbers).unwrap();
        let mut encoder = safeson::Encoder::new();
        encoder.write_value(&value);
        encoder.into_inner()
    };

    for (name, input) in [("sparse", &sparse), ("dense", &dense), ("doubles", &mixed)] {
        let packed = rle::encode(input);

        group.bench_with_input(BenchmarkId::new("encode", name), input, |b, input| {
            b.iter(|| rle::encode(black_box(input)))
        });

        group.bench_with_input(BenchmarkId::new("decode", name), &packed, |b, packed| {
            b.iter(|| rle::decode(black_box(packed)))
        });
    }

    group.finish();
}

fn benchmark_comparison_with_json(c: &mut Criterion) {
    let users = sample_users(100);

    let mut group = c.benchmark_group("comparison");

    group.bench_function("safeson_serialize", |b| {
        b.iter(|| safeson::to_vec(black_box(&users)))
    });

    group.bench_function("json_serialize", |b| {
        b.iter(|| serde_json::to_vec(black_box(&users)))
    });

    let safeson_bytes = safeson::to_vec(&users).unwrap();
    let json_bytes = serde_json::to_vec(&users).unwrap();

    group.bench_function("safeson_deserialize", |b| {
        b.iter(|| safeson::from_slice::<Vec<User>>(black_box(&safeson_bytes)))
    });

    group.bench_function("json_deserialize", |b| {
        b.iter(|| serde_json::from_slice::<Vec<User>>(black_box(&json_bytes)))
    });

    group.finish();
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let user = sample_user();

    c.bench_function("roundtrip_simple", |b| {
        b.iter(|| {
            let bytes = to_vec(black_box(&user)).unwrap();
            let _back: User = from_slice(black_box(&bytes)).unwrap();
        })
    });
}

criterion_group!(
    benches,
    benchmark_serialize_simple,
    benchmark_deserialize_simple,
    benchmark_array_sizes,
    benchmark_nested,
    benchmark_value_codec,
    benchmark_zero_runs,
    benchmark_comparison_with_json,
    benchmark_roundtrip
);
criterion_main!(benches);
