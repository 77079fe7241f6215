//! A tiny rule based coach.
//!
//! This is not a solver and doesn't try to be one. Preflop it looks up the
//! starting hand in a short rule table. After the flop it ranks the made
//! hand and, when there isn't one, looks for a flush or straight draw.
use std::fmt;

use tracing::event;

use crate::core::{
    Card, Evaluation, HandCategory, InvalidInput, PokerError, Suit, evaluate, value_mask,
};
use crate::holdem::{StartingHand, Street};

/// What the coach thinks you should do.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Action {
    Raise,
    /// Call, or raise if it's cheap to do so.
    CallRaise,
    Call,
    Fold,
    Bet,
    /// Bet small into few players, otherwise check.
    BetCheck,
    CheckCallSmall,
    CheckFold,
}

impl Action {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Raise => "Raise",
            Self::CallRaise => "Call/Raise",
            Self::Call => "Call",
            Self::Fold => "Fold",
            Self::Bet => "Bet",
            Self::BetCheck => "Bet/Check",
            Self::CheckCallSmall => "Check/Call Small",
            Self::CheckFold => "Check/Fold",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An action along with a one line reason for it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct Advice {
    pub action: Action,
    pub rationale: String,
}

impl Advice {
    fn new(action: Action, rationale: impl Into<String>) -> Self {
        Self {
            action,
            rationale: rationale.into(),
        }
    }
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.action, self.rationale)
    }
}

/// Suggest an action for the given street.
///
/// `hole` must be exactly two cards and `board` must hold as many cards as
/// the street shows (0, 3, 4 or 5).
///
/// ```
/// use holdem_coach::core::Hand;
/// use holdem_coach::holdem::{recommend, Action, Street};
///
/// let hole = Hand::new_from_str("Q♠ Q♦").unwrap().cards();
/// let advice = recommend(Street::Preflop, &hole, &[]).unwrap();
///
/// assert_eq!(Action::Raise, advice.action);
/// ```
pub fn recommend(street: Street, hole: &[Card], board: &[Card]) -> Result<Advice, PokerError> {
    let starting = StartingHand::from_hole(hole)?;
    if board.len() != street.board_len() {
        return Err(InvalidInput::BoardCardCount {
            street: street.as_str(),
            expected: street.board_len(),
            found: board.len(),
        }
        .into());
    }

    let advice = match street {
        Street::Preflop => preflop(&starting),
        Street::Flop | Street::Turn | Street::River => {
            let cards: Vec<Card> = hole.iter().chain(board).copied().collect();
            postflop(&cards, &evaluate(&cards)?)
        }
    };
    event!(
        tracing::Level::TRACE,
        %street,
        action = %advice.action,
        "Recommended action"
    );
    Ok(advice)
}

/// Starting hand rules, first match wins.
pub fn preflop(hand: &StartingHand) -> Advice {
    let high = hand.high().face();
    let low = hand.low().face();

    if hand.is_pair() && high >= 8 {
        Advice::new(Action::Raise, "Strong pair preflop (8s+).")
    } else if (high == 14 && low >= 10) || (high >= 13 && low >= 11) {
        Advice::new(Action::Raise, "Two big cards play well.")
    } else if hand.is_suited() && hand.is_connected() && high >= 10 {
        Advice::new(Action::CallRaise, "Suited connectors have good potential.")
    } else if hand.is_pair() {
        Advice::new(Action::Call, "Small pair can try to see a flop.")
    } else {
        Advice::new(Action::Fold, "Weak starting hand, save chips.")
    }
}

fn postflop(cards: &[Card], evaluation: &Evaluation) -> Advice {
    let category = evaluation.category();
    if category >= HandCategory::ThreeOfAKind {
        Advice::new(
            Action::Bet,
            format!("{evaluation} is strong, bet about half the pot."),
        )
    } else if category >= HandCategory::OnePair {
        Advice::new(
            Action::BetCheck,
            format!("{evaluation}. Bet small if few players; otherwise check/call small."),
        )
    } else if has_flush_draw(cards) || has_straight_draw(cards) {
        Advice::new(
            Action::CheckCallSmall,
            "You have a draw, see the next card cheaply.",
        )
    } else {
        Advice::new(
            Action::CheckFold,
            "Nothing yet, don't invest chips without a hand.",
        )
    }
}

/// Exactly four cards of one suit.
pub fn has_flush_draw(cards: &[Card]) -> bool {
    Suit::suits()
        .iter()
        .any(|s| cards.iter().filter(|c| c.suit == *s).count() == 4)
}

/// Four distinct values inside some five value window. The ace counts
/// both high and low.
pub fn has_straight_draw(cards: &[Card]) -> bool {
    let mask = value_mask(cards.iter().map(|c| c.value));
    (1..=14u8).filter(|base| (mask & (1 << base)) != 0).any(|base| {
        let low = base.saturating_sub(4);
        let window: u16 = ((1 << (base - low + 1)) - 1) << low;
        (mask & window).count_ones() >= 4
    })
}

/// The preflop action for each of the 169 starting hands.
pub fn preflop_chart() -> Vec<(StartingHand, Action)> {
    StartingHand::all()
        .into_iter()
        .map(|sh| {
            let action = preflop(&sh).action;
            (sh, action)
        })
        .collect()
}
