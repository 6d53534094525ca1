#[cfg(feature = "criterion")]
use criterion::{black_box, criterion_group, criterion_main, Criterion};
#[cfg(feature = "criterion")]
use csv::Reader;
#[cfg(feature = "criterion")]
use keyword_filter::{strategy, AutomatonBuilder, MatchPolicy};

#[cfg(feature = "criterion")]
fn replace_benchmark(c: &mut Criterion) {
    let mut builder = AutomatonBuilder::new();
    builder
        .add_all(
            Reader::from_path("benches/data/words.csv")
                .unwrap()
                .records()
                .map(|r| r.unwrap().as_slice().to_string()),
        )
        .unwrap()
        .add_skip_chars([' ', '-', '_']);
    let automaton = builder.compile();
    let input = include_str!("data/input.txt");

    c.bench_function("contains_keyword", |b| {
        b.iter(|| black_box(automaton.contains_keyword(black_box(input))))
    });
    c.bench_function("replace", |b| {
        b.iter(|| {
            black_box(automaton.replace_with_policy(
                black_box(input),
                MatchPolicy::Minimal,
                &strategy::replace_chars_with!("*"),
            ))
        })
    });
    c.bench_function("replace_legacy", |b| {
        b.iter(|| {
            black_box(automaton.replace_with_policy(
                black_box(input),
                MatchPolicy::Deferred,
                &strategy::replace_chars_with!("*"),
            ))
        })
    });
}

#[cfg(feature = "criterion")]
criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(100);
    targets = replace_benchmark
}
#[cfg(feature = "criterion")]
criterion_main!(benches);

#[cfg(not(feature = "criterion"))]
fn main() {}
