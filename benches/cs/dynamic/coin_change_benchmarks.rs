use change_algos::benchmark::TEST_AMOUNTS;
use change_algos::coins::Denominations;
use change_algos::dynamic::min_coin_change;
use change_algos::greedy::greedy_change;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_change_making(c: &mut Criterion) {
    let coins = Denominations::standard();
    let mut group = c.benchmark_group("change_making");
    group.sample_size(10);

    for &amount in TEST_AMOUNTS.iter() {
        group.bench_with_input(BenchmarkId::new("greedy", amount), &amount, |b, &amount| {
            b.iter(|| greedy_change(black_box(&coins), black_box(amount)))
        });
        group.bench_with_input(BenchmarkId::new("dynamic", amount), &amount, |b, &amount| {
            b.iter(|| min_coin_change(black_box(&coins), black_box(amount)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_change_making);
criterion_main!(benches);
