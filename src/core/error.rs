use thiserror::Error;

use super::Card;

/// This is the core error type for the
/// holdem coach library. It uses `thiserror` to provide
/// readable error messages
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PokerError {
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
    #[error("Can't deal {requested} cards, only {remaining} left in the deck")]
    DeckExhausted { requested: usize, remaining: usize },
    #[error("Unrecognized street {0:?}")]
    InvalidStreet(String),
    #[error("The river has been dealt, there are no more streets")]
    HandComplete,
    #[error("No hand has been dealt yet")]
    NoHandInProgress,
}

/// The ways a set of cards can be unusable for evaluation or advice.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum InvalidInput {
    #[error("at least 5 cards are needed to make a hand, got {0}")]
    TooFewCards(usize),
    #[error("card {0} is in the hand more than once")]
    DuplicateCard(Card),
    #[error("a holdem hand has exactly 2 hole cards, got {0}")]
    HoleCardCount(usize),
    #[error("the {street} has {expected} board cards, got {found}")]
    BoardCardCount {
        street: &'static str,
        expected: usize,
        found: usize,
    },
}
