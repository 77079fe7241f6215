use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::event;

use crate::core::{Card, Deck, Evaluation, PokerError, evaluate};
use crate::holdem::{Advice, Street, recommend};

/// Builder for a [`HandSession`].
///
/// ```
/// use holdem_coach::holdem::HandSessionBuilder;
///
/// let mut one = HandSessionBuilder::default().seed(7).build();
/// let mut two = HandSessionBuilder::default().seed(7).build();
/// one.fresh_hand().unwrap();
/// two.fresh_hand().unwrap();
///
/// assert_eq!(one.hole(), two.hole());
/// ```
#[derive(Debug, Default, Clone)]
pub struct HandSessionBuilder {
    seed: Option<u64>,
}

impl HandSessionBuilder {
    /// Seed the shuffles so the same seed always deals the same cards.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> HandSession {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        HandSession {
            rng,
            deck: Deck::new(),
            hole: Vec::with_capacity(2),
            board: Vec::with_capacity(5),
            street: None,
        }
    }
}

/// One player's view of a holdem hand being dealt out street by street.
///
/// The session owns the deck. Every hand gets a freshly shuffled deck and
/// cards come off the top with no burns.
#[derive(Debug)]
pub struct HandSession {
    rng: StdRng,
    deck: Deck,
    hole: Vec<Card>,
    board: Vec<Card>,
    /// None until the first hand is dealt.
    street: Option<Street>,
}

impl HandSession {
    /// A session shuffled from os entropy.
    pub fn new() -> Self {
        HandSessionBuilder::default().build()
    }

    /// Throw away the current hand, shuffle a new deck and deal two hole
    /// cards.
    pub fn fresh_hand(&mut self) -> Result<(), PokerError> {
        self.deck = Deck::shuffled_with(&mut self.rng);
        self.hole = self.deck.deal(2)?;
        self.board.clear();
        self.street = Some(Street::Preflop);
        event!(
            tracing::Level::DEBUG,
            hole = %self.hole.iter().map(Card::to_string).collect::<Vec<_>>().join(" "),
            "Dealt new hand"
        );
        Ok(())
    }

    /// Deal the next street onto the board and return it.
    ///
    /// Fails with `NoHandInProgress` before the first hand and with
    /// `HandComplete` once the river is out.
    pub fn next_street(&mut self) -> Result<Street, PokerError> {
        let current = self.street.ok_or(PokerError::NoHandInProgress)?;
        let next = current.next().ok_or(PokerError::HandComplete)?;
        let cards = self.deck.deal(next.cards_to_deal())?;
        self.board.extend(cards);
        self.street = Some(next);
        event!(
            tracing::Level::DEBUG,
            street = %next,
            board = %self.board.iter().map(Card::to_string).collect::<Vec<_>>().join(" "),
            "Dealt street"
        );
        Ok(next)
    }

    pub fn hole(&self) -> &[Card] {
        &self.hole
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn street(&self) -> Option<Street> {
        self.street
    }

    /// Cards still left in the deck.
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// Hole cards followed by the board.
    pub fn visible_cards(&self) -> Vec<Card> {
        self.hole.iter().chain(&self.board).copied().collect()
    }

    /// The best hand made so far. None until the flop is out.
    pub fn evaluation(&self) -> Option<Evaluation> {
        evaluate(&self.visible_cards()).ok()
    }

    /// What the coach suggests on the current street.
    pub fn advice(&self) -> Option<Advice> {
        let street = self.street?;
        recommend(street, &self.hole, &self.board).ok()
    }
}

impl Default for HandSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CardBitSet;
    use crate::holdem::Action;

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HandSession>();
        assert_send_sync::<Deck>();
        assert_send_sync::<Evaluation>();
        assert_send_sync::<Advice>();
    }

    #[test]
    fn test_no_hand_yet() {
        let mut session = HandSessionBuilder::default().seed(1).build();
        assert_eq!(None, session.street());
        assert!(session.hole().is_empty());
        assert!(session.evaluation().is_none());
        assert!(session.advice().is_none());
        assert_eq!(Err(PokerError::NoHandInProgress), session.next_street());
    }

    #[test_log::test]
    fn test_full_hand() {
        let mut session = HandSessionBuilder::default().seed(2).build();
        session.fresh_hand().unwrap();
        assert_eq!(Some(Street::Preflop), session.street());
        assert_eq!(2, session.hole().len());
        assert_eq!(50, session.deck_len());
        assert!(session.evaluation().is_none());
        assert!(session.advice().is_some());

        for (street, board_len) in [(Street::Flop, 3), (Street::Turn, 4), (Street::River, 5)] {
            assert_eq!(Ok(street), session.next_street());
            assert_eq!(board_len, session.board().len());
            assert_eq!(52 - 2 - board_len, session.deck_len());
            assert!(session.evaluation().is_some());
            assert!(session.advice().is_some());
        }

        assert_eq!(Err(PokerError::HandComplete), session.next_street());
        assert_eq!(5, session.board().len());

        let seen: CardBitSet = session.visible_cards().into_iter().collect();
        assert_eq!(7, seen.count());
    }

    #[test]
    fn test_fresh_hand_resets() {
        let mut session = HandSessionBuilder::default().seed(3).build();
        session.fresh_hand().unwrap();
        session.next_street().unwrap();
        session.next_street().unwrap();
        session.fresh_hand().unwrap();
        assert_eq!(Some(Street::Preflop), session.street());
        assert!(session.board().is_empty());
        assert_eq!(50, session.deck_len());
    }

    #[test]
    fn test_same_seed_same_cards() {
        let mut one = HandSessionBuilder::default().seed(11).build();
        let mut two = HandSessionBuilder::default().seed(11).build();
        for _ in 0..5 {
            one.fresh_hand().unwrap();
            two.fresh_hand().unwrap();
            while one.next_street().is_ok() {
                two.next_street().unwrap();
            }
            assert_eq!(one.visible_cards(), two.visible_cards());
            assert_eq!(one.evaluation(), two.evaluation());
        }
    }

    #[test]
    fn test_advice_matches_recommend() {
        let mut session = HandSessionBuilder::default().seed(5).build();
        session.fresh_hand().unwrap();
        let preflop = session.advice().unwrap();
        let direct = recommend(Street::Preflop, session.hole(), &[]).unwrap();
        assert_eq!(direct, preflop);
        assert!(matches!(
            preflop.action,
            Action::Raise | Action::CallRaise | Action::Call | Action::Fold
        ));
    }
}
