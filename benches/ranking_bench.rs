//! Benchmarks for rank assignment strategies

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gradebook::{compute_stats_and_ranks, RankingStrategy, Roster, Student};

fn roster_of(count: usize) -> Roster {
    (0..count)
        .map(|i| {
            let score = (i * 37 % 101) as i32;
            Student::new(&format!("s{}", i), score, 100 - score, (i % 101) as i32).unwrap()
        })
        .collect()
}

fn ranking_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("ranking");

    for size in [30usize, 300, 3000] {
        let roster = roster_of(size);

        for strategy in [RankingStrategy::Pairwise, RankingStrategy::Sorted] {
            group.bench_with_input(
                BenchmarkId::new(strategy.to_string(), size),
                &roster,
                |b, roster| {
                    b.iter_batched_ref(
                        || roster.clone(),
                        |r| compute_stats_and_ranks(black_box(r), strategy),
                        criterion::BatchSize::SmallInput,
                    )
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, ranking_benchmarks);
criterion_main!(benches);
