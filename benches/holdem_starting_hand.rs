#[macro_use]
extern crate criterion;
extern crate holdem_coach;

use criterion::Criterion;
use holdem_coach::holdem::{StartingHand, preflop_chart};

fn all_starting(c: &mut Criterion) {
    c.bench_function("Generate all starting hands", |b| b.iter(StartingHand::all));
}

fn iter_everything(c: &mut Criterion) {
    c.bench_function("Iter all possible hands from all starting hands", |b| {
        b.iter(|| -> usize {
            StartingHand::all()
                .iter()
                .map(|sh| -> usize { sh.possible_hands().len() })
                .sum()
        })
    });
}

fn chart(c: &mut Criterion) {
    c.bench_function("Preflop chart for all starting hands", |b| {
        b.iter(preflop_chart)
    });
}

criterion_group!(benches, all_starting, iter_everything, chart);
criterion_main!(benches);
