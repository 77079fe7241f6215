use std::fmt;

use crate::core::{Card, Hand, InvalidInput, PokerError, Suit, Value};

/// Enum to represent how the suits of a hand correspond to each other.
/// `Suitedness::Suited` will mean that all cards have the same suit
/// `Suitedness::OffSuit` will mean that all cards have the different suit
/// `Suitedness::Any` makes no promises.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Eq, PartialEq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Suitedness {
    /// All of the cards are the same suit
    Suited,
    /// None of the cards are the same suit
    OffSuit,
    /// No promises about suit.
    Any,
}

/// `StartingHand` represents the two card starting hand of texas holdem.
/// It can generate all the possible actual starting hands.
///
/// `value_one` is always the higher (or equal) value.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Eq, PartialEq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct StartingHand {
    /// The first value.
    value_one: Value,
    /// The second value.
    value_two: Value,
    /// should we only consider possible starting hands of the same suit?
    suited: Suitedness,
}

impl StartingHand {
    /// Create a starting hand. The values can come in either order.
    pub fn new(a: Value, b: Value, suited: Suitedness) -> Self {
        let (value_one, value_two) = if a >= b { (a, b) } else { (b, a) };
        Self {
            value_one,
            value_two,
            suited,
        }
    }

    /// Classify two dealt hole cards.
    ///
    /// ```
    /// use holdem_coach::core::Hand;
    /// use holdem_coach::holdem::StartingHand;
    ///
    /// let hole = Hand::new_from_str("J♥ Q♥").unwrap().cards();
    /// let sh = StartingHand::from_hole(&hole).unwrap();
    ///
    /// assert!(sh.is_suited());
    /// assert!(sh.is_connected());
    /// assert_eq!("QJs", sh.to_string());
    /// ```
    pub fn from_hole(hole: &[Card]) -> Result<Self, PokerError> {
        match hole {
            [a, b] if a == b => Err(InvalidInput::DuplicateCard(*a).into()),
            [a, b] => {
                let suited = if a.suit == b.suit {
                    Suitedness::Suited
                } else {
                    Suitedness::OffSuit
                };
                Ok(Self::new(a.value, b.value, suited))
            }
            _ => Err(InvalidInput::HoleCardCount(hole.len()).into()),
        }
    }

    pub fn high(&self) -> Value {
        self.value_one
    }

    pub fn low(&self) -> Value {
        self.value_two
    }

    /// Is this starting hand a pocket pair?
    pub fn is_pair(&self) -> bool {
        self.value_one == self.value_two
    }

    pub fn is_suited(&self) -> bool {
        self.suited == Suitedness::Suited
    }

    /// Are the two values next to each other? Aces are only high here.
    pub fn is_connected(&self) -> bool {
        self.value_one.face() - self.value_two.face() == 1
    }

    /// Create a new vector of all suited hands.
    fn create_suited(&self) -> Vec<Hand> {
        // Can't have a suited pair. Not unless you're cheating.
        if self.is_pair() {
            return vec![];
        }
        Suit::suits()
            .iter()
            .map(|s| {
                Hand::new_with_cards(vec![
                    Card::new(self.value_one, *s),
                    Card::new(self.value_two, *s),
                ])
            })
            .collect()
    }

    /// Create a new vector of all the off suit hands.
    fn create_offsuit(&self) -> Vec<Hand> {
        // Since the values are the same there is no reason to swap the suits.
        let expected_hands = if self.is_pair() { 6 } else { 12 };
        self.append_offsuit(Vec::with_capacity(expected_hands))
    }

    /// Append all the off suit hands to the passed in vec and
    /// then return it.
    fn append_offsuit(&self, mut hands: Vec<Hand>) -> Vec<Hand> {
        let suits = Suit::suits();
        for (i, suit_one) in suits.iter().enumerate() {
            for suit_two in &suits[i + 1..] {
                hands.push(Hand::new_with_cards(vec![
                    Card::new(self.value_one, *suit_one),
                    Card::new(self.value_two, *suit_two),
                ]));

                // If this isn't a pair then the flipped suits is needed.
                if !self.is_pair() {
                    hands.push(Hand::new_with_cards(vec![
                        Card::new(self.value_one, *suit_two),
                        Card::new(self.value_two, *suit_one),
                    ]));
                }
            }
        }
        hands
    }

    /// Get all the possible starting hands represented by the
    /// two values of this starting hand.
    pub fn possible_hands(&self) -> Vec<Hand> {
        match self.suited {
            Suitedness::Suited => self.create_suited(),
            Suitedness::OffSuit => self.create_offsuit(),
            Suitedness::Any => self.append_offsuit(self.create_suited()),
        }
    }

    /// Create every one of the 169 distinct starting hands.
    /// Pairs are listed once, every other pair of values once suited and
    /// once off suit.
    pub fn all() -> Vec<StartingHand> {
        let mut hands = Vec::with_capacity(169);
        let values = Value::values();
        for (i, value_one) in values.iter().enumerate().rev() {
            for value_two in values[..=i].iter().rev() {
                if value_one == value_two {
                    hands.push(Self::new(*value_one, *value_two, Suitedness::OffSuit));
                } else {
                    hands.push(Self::new(*value_one, *value_two, Suitedness::Suited));
                    hands.push(Self::new(*value_one, *value_two, Suitedness::OffSuit));
                }
            }
        }
        hands
    }
}

/// Standard shorthand: `AA`, `AKs`, `T9o`, and `AK` when suitedness
/// doesn't matter.
impl fmt::Display for StartingHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value_one, self.value_two)?;
        match self.suited {
            _ if self.is_pair() => Ok(()),
            Suitedness::Suited => write!(f, "s"),
            Suitedness::OffSuit => write!(f, "o"),
            Suitedness::Any => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aces() {
        let sh = StartingHand::new(Value::Ace, Value::Ace, Suitedness::OffSuit);
        assert_eq!(6, sh.possible_hands().len());
        assert!(sh.is_pair());
        assert_eq!("AA", sh.to_string());
    }

    #[test]
    fn test_suited_connector() {
        let sh = StartingHand::new(Value::Ace, Value::King, Suitedness::Suited);
        assert_eq!(4, sh.possible_hands().len());
        assert!(sh.is_connected());
    }

    #[test]
    fn test_unsuited_connector() {
        let sh = StartingHand::new(Value::King, Value::Ace, Suitedness::OffSuit);
        assert_eq!(12, sh.possible_hands().len());
        assert_eq!(Value::Ace, sh.high());
        assert_eq!("AKo", sh.to_string());
    }

    #[test]
    fn test_any_suit() {
        let sh = StartingHand::new(Value::Nine, Value::Ten, Suitedness::Any);
        assert_eq!(16, sh.possible_hands().len());
        assert_eq!("T9", sh.to_string());
    }

    #[test]
    fn test_wheel_ace_not_connected() {
        let sh = StartingHand::new(Value::Ace, Value::Two, Suitedness::Suited);
        assert!(!sh.is_connected());
    }

    #[test]
    fn test_starting_hand_count() {
        let all = StartingHand::all();
        assert_eq!(169, all.len());
        let num_to_test: usize = all.iter().map(|h| h.possible_hands().len()).sum();
        assert_eq!(1326, num_to_test);
    }

    #[test]
    fn test_possible_hands_classify_back() {
        for sh in StartingHand::all() {
            for hand in sh.possible_hands() {
                assert_eq!(2, hand.count());
                assert_eq!(sh, StartingHand::from_hole(&hand.cards()).unwrap());
            }
        }
    }

    #[test]
    fn test_from_hole_bad_input() {
        let ace = Card::new(Value::Ace, Suit::Heart);
        assert_eq!(
            Err(PokerError::InvalidInput(InvalidInput::HoleCardCount(1))),
            StartingHand::from_hole(&[ace])
        );
        assert_eq!(
            Err(PokerError::InvalidInput(InvalidInput::DuplicateCard(ace))),
            StartingHand::from_hole(&[ace, ace])
        );
    }
}
