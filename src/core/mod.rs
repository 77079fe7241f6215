//! This is the core module. It exports the non-holdem
//! related code.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// Bit set of cards, used for fast duplicate checks.
mod card_bit_set;
/// Export `CardBitSet` and its iterator
pub use self::card_bit_set::{CardBitSet, CardBitSetIter};

/// Code related to cards in hands.
mod hand;
/// Everything in there should be public.
pub use self::hand::*;

/// Deck is the normal 52 card deck.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// Hand ranking code, five or more cards.
mod rank;
pub(crate) use self::rank::value_mask;
/// Export the trait and the results.
pub use self::rank::{
    Evaluation, HandCategory, RANKING_NAMES, Rankable, Winner, compare, evaluate,
};

/// Error types for the whole library.
mod error;
pub use self::error::{InvalidInput, PokerError};
