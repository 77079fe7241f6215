#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate holdem_coach;

use holdem_coach::core::{Card, Evaluation, Hand, evaluate};

fuzz_target!(|cards: [Card; 7]| {
    // Only distinct cards make a real hand.
    let Ok(hand) = Hand::try_from_cards(&cards) else {
        return;
    };
    let cards = hand.cards();
    let seven = evaluate(&cards).unwrap();

    let mut best: Option<Evaluation> = None;
    for skip_one in 0..7 {
        for skip_two in (skip_one + 1)..7 {
            let five: Vec<Card> = cards
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != skip_one && *i != skip_two)
                .map(|(_, c)| *c)
                .collect();
            let e = evaluate(&five).unwrap();
            if best.as_ref().is_none_or(|b| e > *b) {
                best = Some(e);
            }
        }
    }
    assert_eq!(best, Some(seven));
});
