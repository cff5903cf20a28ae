use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use numeral_core::{decode, encode, English, Grammar, Russian};

static VALUES: &[(&str, u64)] = &[
    ("small", 42),
    ("medium", 5_274_108),
    ("large", 314_042_517_234_583),
];

fn grammars() -> Vec<Box<dyn Grammar>> {
    vec![Box::new(English::new()), Box::new(Russian::new())]
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert/encode");
    for grammar in grammars() {
        for &(label, value) in VALUES {
            let id = BenchmarkId::new(grammar.code(), label);
            group.bench_with_input(id, &value, |b, &value| {
                b.iter(|| encode(grammar.as_ref(), value));
            });
        }
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert/decode");
    for grammar in grammars() {
        for &(label, value) in VALUES {
            let text = encode(grammar.as_ref(), value).expect("bench value in range");
            let id = BenchmarkId::new(grammar.code(), label);
            group.bench_with_input(id, &text, |b, text| {
                b.iter(|| decode(grammar.as_ref(), text));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
