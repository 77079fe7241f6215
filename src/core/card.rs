use std::fmt;
use std::str::FromStr;

use super::PokerError;

/// Card rank or value.
/// This is basically the face value - 2
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Take a u8 and convert it to a value.
    /// Anything past the ace wraps around.
    ///
    /// ```
    /// use holdem_coach::core::Value;
    ///
    /// assert_eq!(Value::Ace, Value::from_u8(12));
    /// ```
    pub fn from_u8(v: u8) -> Self {
        VALUES[usize::from(v % 13)]
    }

    /// Get all of the `Value`'s that are possible.
    /// This is used to iterate through all possible
    /// values when creating a new deck, or
    /// generating all possible starting hands.
    pub const fn values() -> [Self; 13] {
        VALUES
    }

    /// The numeric face value, 2 through 14 with the ace high.
    ///
    /// ```
    /// use holdem_coach::core::Value;
    ///
    /// assert_eq!(2, Value::Two.face());
    /// assert_eq!(10, Value::Ten.face());
    /// assert_eq!(14, Value::Ace.face());
    /// ```
    pub const fn face(self) -> u8 {
        self as u8 + 2
    }

    /// Inverse of [`Value::face`]. Returns None for anything outside 2..=14.
    pub fn from_face(face: u8) -> Option<Self> {
        match face {
            2..=14 => Some(VALUES[usize::from(face - 2)]),
            _ => None,
        }
    }

    /// Parse a value char. `T` is the ten.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' | 'a' => Some(Self::Ace),
            'K' | 'k' => Some(Self::King),
            'Q' | 'q' => Some(Self::Queen),
            'J' | 'j' => Some(Self::Jack),
            'T' | 't' => Some(Self::Ten),
            '9' => Some(Self::Nine),
            '8' => Some(Self::Eight),
            '7' => Some(Self::Seven),
            '6' => Some(Self::Six),
            '5' => Some(Self::Five),
            '4' => Some(Self::Four),
            '3' => Some(Self::Three),
            '2' => Some(Self::Two),
            _ => None,
        }
    }

    /// Convert this value into the single char used in card codes.
    pub const fn to_char(self) -> char {
        match self {
            Self::Ace => 'A',
            Self::King => 'K',
            Self::Queen => 'Q',
            Self::Jack => 'J',
            Self::Ten => 'T',
            Self::Nine => '9',
            Self::Eight => '8',
            Self::Seven => '7',
            Self::Six => '6',
            Self::Five => '5',
            Self::Four => '4',
            Self::Three => '3',
            Self::Two => '2',
        }
    }

    /// Label used in hand descriptions. The ten is written out as `10`.
    ///
    /// ```
    /// use holdem_coach::core::Value;
    ///
    /// assert_eq!("10", Value::Ten.label());
    /// assert_eq!("Q", Value::Queen.label());
    /// ```
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::King => "K",
            Self::Queen => "Q",
            Self::Jack => "J",
            Self::Ten => "10",
            Self::Nine => "9",
            Self::Eight => "8",
            Self::Seven => "7",
            Self::Six => "6",
            Self::Five => "5",
            Self::Four => "4",
            Self::Three => "3",
            Self::Two => "2",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow sorting cards.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Clubs
    Club = 1,
    /// Hearts
    Heart = 2,
    /// Diamonds
    Diamond = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Heart, Suit::Diamond];

impl Suit {
    /// Provide all the Suit's that there are.
    pub const fn suits() -> [Self; 4] {
        SUITS
    }

    /// Take a u8 and convert it to a suit, wrapping past the diamond.
    pub fn from_u8(s: u8) -> Self {
        SUITS[usize::from(s % 4)]
    }

    /// Parse either the ascii letter or the unicode suit glyph.
    pub fn from_char(s: char) -> Option<Self> {
        match s {
            'd' | 'D' | '♦' => Some(Self::Diamond),
            's' | 'S' | '♠' => Some(Self::Spade),
            'h' | 'H' | '♥' => Some(Self::Heart),
            'c' | 'C' | '♣' => Some(Self::Club),
            _ => None,
        }
    }

    /// The unicode glyph for this suit.
    pub const fn to_char(self) -> char {
        match self {
            Self::Spade => '♠',
            Self::Club => '♣',
            Self::Heart => '♥',
            Self::Diamond => '♦',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

/// Pack the card into a single index in `0..52`.
/// Cards of the same value sit next to each other.
impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        (card.value as u8) * 4 + card.suit as u8
    }
}

impl From<u8> for Card {
    fn from(value: u8) -> Self {
        Self {
            value: Value::from_u8(value / 4),
            suit: Suit::from_u8(value % 4),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.suit)
    }
}

/// Parse a single card code such as `A♠`, `Td`, or `10♥`.
impl FromStr for Card {
    type Err = PokerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (value, suit) = parse_card(&mut chars)?;
        if chars.next().is_some() {
            return Err(PokerError::UnparsedCharsRemaining);
        }
        Ok(Self::new(value, suit))
    }
}

/// Read one card off the front of `chars`. Accepts `10` as well as `T` for
/// the ten so the display labels can be fed back in.
pub(crate) fn parse_card(
    chars: &mut impl Iterator<Item = char>,
) -> Result<(Value, Suit), PokerError> {
    let vc = chars.next().ok_or(PokerError::TooFewChars)?;
    let value = if vc == '1' {
        match chars.next() {
            Some('0') => Value::Ten,
            Some(_) => return Err(PokerError::UnexpectedValueChar),
            None => return Err(PokerError::TooFewChars),
        }
    } else {
        Value::from_char(vc).ok_or(PokerError::UnexpectedValueChar)?
    };
    let suit = chars
        .next()
        .ok_or(PokerError::TooFewChars)
        .and_then(|sc| Suit::from_char(sc).ok_or(PokerError::UnexpectedSuitChar))?;
    Ok((value, suit))
}
