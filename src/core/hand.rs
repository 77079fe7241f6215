use std::fmt;
use std::str::FromStr;

use super::card::parse_card;
use super::{Card, CardBitSet, CardBitSetIter, InvalidInput, PokerError};

/// A set of distinct cards. Backed by a [`CardBitSet`] so a card can never
/// be in the same hand twice.
#[derive(Debug, Clone, PartialEq, Eq, Copy, Hash)]
pub struct Hand(CardBitSet);

impl Hand {
    /// Create a new empty hand
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_coach::core::Hand;
    ///
    /// let hand = Hand::new();
    ///
    /// assert!(hand.is_empty());
    /// ```
    pub fn new() -> Self {
        Self(CardBitSet::new())
    }

    /// Build a hand from a list of cards. Duplicates collapse into one card,
    /// use [`Hand::try_from_cards`] when that should be an error.
    pub fn new_with_cards(cards: Vec<Card>) -> Self {
        Self(cards.into_iter().collect())
    }

    /// Build a hand from a slice of cards, rejecting any card seen twice.
    pub fn try_from_cards(cards: &[Card]) -> Result<Self, PokerError> {
        let mut hand = Self::new();
        for card in cards {
            if !hand.insert(*card) {
                return Err(InvalidInput::DuplicateCard(*card).into());
            }
        }
        Ok(hand)
    }

    /// Given a card, is it in the current hand?
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_coach::core::{Card, Hand, Suit, Value};
    ///
    /// let mut hand = Hand::new();
    ///
    /// let card = Card::new(Value::Ace, Suit::Club);
    /// assert!(!hand.contains(&card));
    ///
    /// hand.insert(card);
    /// assert!(hand.contains(&card));
    /// ```
    pub fn contains(&self, c: &Card) -> bool {
        self.0.contains(*c)
    }

    /// Add a card. Returns false if the card was already in the hand.
    pub fn insert(&mut self, c: Card) -> bool {
        let contains = self.contains(&c);
        self.0.insert(c);
        !contains
    }

    pub fn count(&self) -> usize {
        self.0.count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> CardBitSetIter {
        self.0.into_iter()
    }

    /// The cards of this hand, highest value first.
    pub fn cards(&self) -> Vec<Card> {
        let mut cards: Vec<Card> = self.iter().collect();
        cards.reverse();
        cards
    }

    /// Parse a hand from card codes.
    ///
    /// Values are `2`-`9`, `T` or `10`, `J`, `Q`, `K`, `A`. Suits are either
    /// the letters `s h d c` or the glyphs `♠ ♥ ♦ ♣`. Whitespace and commas
    /// between cards are ignored.
    ///
    /// ```
    /// use holdem_coach::core::Hand;
    ///
    /// let hand = Hand::new_from_str("A♠ K♠ Q♠ J♠ 10♠").unwrap();
    /// assert_eq!(5, hand.count());
    /// assert_eq!(hand, Hand::new_from_str("AsKsQsJsTs").unwrap());
    /// ```
    pub fn new_from_str(hand_string: &str) -> Result<Self, PokerError> {
        let mut chars = hand_string
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .peekable();
        let mut hand = Self::new();

        // Keep looping until we run out of card codes
        while chars.peek().is_some() {
            let (value, suit) = parse_card(&mut chars)?;
            let c = Card::new(value, suit);
            if !hand.insert(c) {
                return Err(InvalidInput::DuplicateCard(c).into());
            }
        }

        Ok(hand)
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Hand {
    type Err = PokerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new_from_str(s)
    }
}

impl Extend<Card> for Hand {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        for card in iter {
            self.insert(card);
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<String> = self.cards().iter().map(Card::to_string).collect();
        write!(f, "{}", codes.join(" "))
    }
}

impl From<Hand> for CardBitSet {
    fn from(val: Hand) -> Self {
        val.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Suit, Value};

    #[test]
    fn test_insert() {
        let mut hand = Hand::new();
        for i in 1..7 {
            let c = Card::from(i);
            assert!(hand.insert(c));
            assert!(hand.contains(&c));
            assert_eq!(hand.count(), usize::from(i));
        }
        // Second insert of the same card is refused.
        assert!(!hand.insert(Card::from(1)));
        assert_eq!(6, hand.count());
    }

    #[test]
    fn test_is_empty() {
        let mut hand = Hand::new();
        assert!(hand.is_empty());

        hand.insert(Card::from(1));
        assert!(!hand.is_empty());
    }

    #[test]
    fn test_parse_glyphs_and_letters() {
        let glyphs = Hand::new_from_str("7♣, 7♦, Q♥, Q♣, A♠, 2♣, 9♦").unwrap();
        let letters = Hand::new_from_str("7c7dQhQcAs2c9d").unwrap();
        assert_eq!(glyphs, letters);
        assert_eq!(7, glyphs.count());
        assert!(glyphs.contains(&Card::new(Value::Queen, Suit::Heart)));
    }

    #[test]
    fn test_parse_duplicate() {
        let res = Hand::new_from_str("AsKsAs");
        assert_eq!(
            Err(PokerError::InvalidInput(InvalidInput::DuplicateCard(
                Card::new(Value::Ace, Suit::Spade)
            ))),
            res
        );
    }

    #[test]
    fn test_parse_dangling_value() {
        assert_eq!(Err(PokerError::TooFewChars), Hand::new_from_str("AsK"));
    }

    #[test]
    fn test_try_from_cards() {
        let ace = Card::new(Value::Ace, Suit::Heart);
        assert!(Hand::try_from_cards(&[ace, Card::from(0)]).is_ok());
        assert!(Hand::try_from_cards(&[ace, ace]).is_err());
    }

    #[test]
    fn test_display_high_first() {
        let hand = Hand::new_from_str("2c Ah 10d").unwrap();
        assert_eq!("A♥ T♦ 2♣", hand.to_string());
    }
}
