#[cfg(feature = "criterion")]
use criterion::{criterion_group, criterion_main, Criterion};
#[cfg(feature = "criterion")]
use csv::Reader;
#[cfg(feature = "criterion")]
use keyword_filter::AutomatonBuilder;

#[cfg(feature = "criterion")]
fn builder_benchmark(c: &mut Criterion) {
    let words = Reader::from_path("benches/data/words.csv")
        .unwrap()
        .records()
        .map(|r| r.unwrap().as_slice().to_string())
        .collect::<Vec<_>>();

    c.bench_function("compile", |b| {
        b.iter(|| {
            let mut builder = AutomatonBuilder::new();
            builder.add_all(&words).unwrap().add_skip_chars([' ', '-', '_']);
            builder.compile()
        })
    });
}

#[cfg(feature = "criterion")]
criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(100);
    targets = builder_benchmark
}
#[cfg(feature = "criterion")]
criterion_main!(benches);

#[cfg(not(feature = "criterion"))]
fn main() {}
