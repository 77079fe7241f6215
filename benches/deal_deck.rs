#[macro_use]
extern crate criterion;
extern crate holdem_coach;

use holdem_coach::core::Deck;
use rand::rng;

fn shuffle_deck(c: &mut criterion::Criterion) {
    let mut rng = rng();
    let mut deck = Deck::new();

    c.bench_function("shuffle a 52 card deck", |b| {
        b.iter(|| deck.shuffle(&mut rng));
    });
}

fn deal_all_deck(c: &mut criterion::Criterion) {
    let mut rng = rng();

    c.bench_function("shuffle and deal a full holdem hand", |b| {
        b.iter(|| {
            let mut deck = Deck::shuffled_with(&mut rng);
            let hole = deck.deal(2).unwrap();
            let board = deck.deal(5).unwrap();
            (hole, board)
        });
    });
}

criterion_group!(benches, shuffle_deck, deal_all_deck);
criterion_main!(benches);
