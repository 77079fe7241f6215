use std::slice::Iter;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::event;

use crate::core::card::{Card, Suit, Value};
use crate::core::PokerError;

/// `Deck` is an ordered stack of cards. Cards are dealt off the front and
/// once dealt they are gone, so a deck is meant to live for a single hand.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deck {
    /// Card storage. Index 0 is the top of the deck.
    cards: Vec<Card>,
}

impl Deck {
    /// Create the standard 52 card deck in suit then value order.
    ///
    /// ```
    /// use holdem_coach::core::Deck;
    ///
    /// assert_eq!(52, Deck::new().len());
    /// ```
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(52);
        for s in Suit::suits() {
            for v in Value::values() {
                cards.push(Card::new(v, s));
            }
        }
        Self { cards }
    }

    /// A fresh 52 card deck shuffled with the thread local rng.
    ///
    /// ```
    /// use holdem_coach::core::Deck;
    ///
    /// let mut deck = Deck::shuffled();
    /// let hole = deck.deal(2).unwrap();
    ///
    /// assert_eq!(2, hole.len());
    /// assert_eq!(50, deck.len());
    /// ```
    pub fn shuffled() -> Self {
        Self::shuffled_with(&mut rand::rng())
    }

    /// A fresh 52 card deck shuffled with the given rng.
    pub fn shuffled_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// Randomly shuffle the deck.
    ///
    /// This is a Fisher-Yates shuffle so every ordering is equally likely.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        event!(
            tracing::Level::TRACE,
            remaining = self.cards.len(),
            "Shuffled deck"
        );
    }

    /// Deal `n` cards off the top of the deck.
    ///
    /// If the deck doesn't have `n` cards left nothing is dealt and
    /// `PokerError::DeckExhausted` is returned.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, PokerError> {
        if n > self.cards.len() {
            event!(
                tracing::Level::DEBUG,
                requested = n,
                remaining = self.cards.len(),
                "Deck exhausted"
            );
            return Err(PokerError::DeckExhausted {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        let dealt: Vec<Card> = self.cards.drain(..n).collect();
        event!(
            tracing::Level::TRACE,
            dealt = n,
            remaining = self.cards.len(),
            "Dealt cards"
        );
        Ok(dealt)
    }

    /// Given a card, is it still in the deck?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }

    /// How many cards are there in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Have all of the cards been dealt from this deck?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate the cards left, top of the deck first.
    pub fn iter(&self) -> Iter<'_, Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

/// Turn a deck into an iterator
impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;
    /// Consume this deck and create a new iterator.
    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
