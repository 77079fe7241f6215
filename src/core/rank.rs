use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::event;

use super::{Card, CardBitSet, Hand, InvalidInput, PokerError, Suit, Value};

/// All the different possible hand categories, weakest first.
/// The discriminant is the numeric category rank.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub enum HandCategory {
    /// The lowest rank.
    /// No matches
    HighCard = 0,
    /// One Card matches another.
    OnePair = 1,
    /// Two different pair of matching cards.
    TwoPair = 2,
    /// Three of the same value.
    ThreeOfAKind = 3,
    /// Five cards in a sequence
    Straight = 4,
    /// Five cards of the same suit
    Flush = 5,
    /// Three of one value and two of another value
    FullHouse = 6,
    /// Four of the same value.
    FourOfAKind = 7,
    /// Five cards in a sequence all for the same suit.
    StraightFlush = 8,
}

impl HandCategory {
    /// Every category, best first.
    pub const ALL: [Self; 9] = [
        Self::StraightFlush,
        Self::FourOfAKind,
        Self::FullHouse,
        Self::Flush,
        Self::Straight,
        Self::ThreeOfAKind,
        Self::TwoPair,
        Self::OnePair,
        Self::HighCard,
    ];

    /// Numeric rank, 0 for a high card up to 8 for a straight flush.
    pub const fn rank(self) -> u8 {
        self as u8
    }

    pub fn from_rank(rank: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.rank() == rank)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::HighCard => "High Card",
            Self::OnePair => "One Pair",
            Self::TwoPair => "Two Pair",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full House",
            Self::FourOfAKind => "Four of a Kind",
            Self::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The names on a hand rankings chart, best to worst. The royal flush is
/// only a named straight flush, it has no category of its own.
pub const RANKING_NAMES: [&str; 10] = [
    "Royal Flush",
    "Straight Flush",
    "Four of a Kind",
    "Full House",
    "Flush",
    "Straight",
    "Three of a Kind",
    "Two Pair",
    "One Pair",
    "High Card",
];

/// The result of ranking a set of cards.
///
/// Two evaluations compare on the category first and then on the
/// tie breakers, one at a time. The display name is along for the ride
/// and never takes part in comparisons.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct Evaluation {
    category: HandCategory,
    /// Face values (2-14), most significant first.
    tiebreakers: Vec<u8>,
    display_name: String,
}

impl Evaluation {
    fn new(category: HandCategory, tiebreakers: &[Value], display_name: String) -> Self {
        Self {
            category,
            tiebreakers: tiebreakers.iter().map(|v| v.face()).collect(),
            display_name,
        }
    }

    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// Numeric rank of the category, 0 through 8.
    pub fn rank(&self) -> u8 {
        self.category.rank()
    }

    pub fn tiebreakers(&self) -> &[u8] {
        &self.tiebreakers
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn is_royal_flush(&self) -> bool {
        self.category == HandCategory::StraightFlush
            && self.tiebreakers.first() == Some(&Value::Ace.face())
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.category == other.category && self.tiebreakers == other.tiebreakers
    }
}

impl Eq for Evaluation {}

impl Hash for Evaluation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.category.hash(state);
        self.tiebreakers.hash(state);
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.tiebreakers.cmp(&other.tiebreakers))
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name)
    }
}

/// Which of two hands comes out ahead.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Winner {
    First,
    Second,
    Tie,
}

impl From<Ordering> for Winner {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Self::First,
            Ordering::Less => Self::Second,
            Ordering::Equal => Self::Tie,
        }
    }
}

/// Compare two evaluations. Category first, then every tie breaker.
///
/// ```
/// use holdem_coach::core::{compare, Hand, Rankable, Winner};
///
/// let full_house = Hand::new_from_str("A♠ A♦ A♥ K♣ K♦").unwrap().rank().unwrap();
/// let quads = Hand::new_from_str("K♠ K♥ K♦ K♣ 2♠").unwrap().rank().unwrap();
///
/// assert_eq!(Winner::Second, compare(&full_house, &quads));
/// ```
pub fn compare(a: &Evaluation, b: &Evaluation) -> Winner {
    a.cmp(b).into()
}

/// Bit per face value. Bit 14 is the ace, and the ace is also mirrored
/// into bit 1 so the wheel lines up like any other straight.
pub(crate) fn value_mask(values: impl IntoIterator<Item = Value>) -> u16 {
    values.into_iter().fold(0, |mask, v| {
        let mut mask = mask | 1 << v.face();
        if v == Value::Ace {
            mask |= 1 << 1;
        }
        mask
    })
}

/// Mask with five consecutive bits ending at `high`.
const fn straight_window(high: u8) -> u16 {
    0b1_1111 << (high - 4)
}

/// Given a value mask find the highest straight in it.
///
/// Returns the top card of that straight; the wheel's top card is the five.
fn straight_high(mask: u16) -> Option<Value> {
    (5..=Value::Ace.face())
        .rev()
        .find(|high| mask & straight_window(*high) == straight_window(*high))
        .map(|high| Value::from_u8(high - 2))
}

/// Can this turn into a hand evaluation?
pub trait Rankable {
    /// Rank the best five card hand that these cards make.
    /// It doesn't do any caching so it's left up to the user
    /// to understand that duplicate work will be done if this is called more than once.
    fn rank(&self) -> Result<Evaluation, PokerError>;
}

impl Rankable for [Card] {
    fn rank(&self) -> Result<Evaluation, PokerError> {
        evaluate(self)
    }
}

impl Rankable for Hand {
    fn rank(&self) -> Result<Evaluation, PokerError> {
        evaluate(&self.cards())
    }
}

/// Find the best five card hand in `cards`.
///
/// Needs at least five distinct cards. Any number above that works, the
/// usual case being two hole cards plus five on the board.
///
/// ```
/// use holdem_coach::core::{evaluate, Hand, HandCategory};
///
/// let cards = Hand::new_from_str("A♠ 2♦ 3♥ 4♣ 5♠ 9♦ K♥").unwrap().cards();
/// let wheel = evaluate(&cards).unwrap();
///
/// assert_eq!(HandCategory::Straight, wheel.category());
/// assert_eq!(&[5], wheel.tiebreakers());
/// ```
pub fn evaluate(cards: &[Card]) -> Result<Evaluation, PokerError> {
    if cards.len() < 5 {
        event!(tracing::Level::DEBUG, count = cards.len(), "Too few cards to rank");
        return Err(InvalidInput::TooFewCards(cards.len()).into());
    }

    let mut seen = CardBitSet::new();
    let mut value_counts = [0u8; 13];
    let mut suit_values: [Vec<Value>; 4] = Default::default();
    for card in cards {
        if seen.contains(*card) {
            event!(tracing::Level::DEBUG, %card, "Duplicate card in hand");
            return Err(InvalidInput::DuplicateCard(*card).into());
        }
        seen.insert(*card);
        value_counts[card.value as usize] += 1;
        suit_values[card.suit as usize].push(card.value);
    }

    // (value, count) for every value present, highest value first.
    let groups: Vec<(Value, u8)> = Value::values()
        .iter()
        .rev()
        .filter(|v| value_counts[**v as usize] > 0)
        .map(|v| (*v, value_counts[*v as usize]))
        .collect();

    let evaluation = rank_groups(&groups, &flush_suits(suit_values));
    event!(tracing::Level::TRACE, hand = %evaluation, "Ranked hand");
    Ok(evaluation)
}

/// Every suit with five or more cards, in suit order, along with that
/// suit's values sorted high to low.
fn flush_suits(suit_values: [Vec<Value>; 4]) -> Vec<(Suit, Vec<Value>)> {
    Suit::suits()
        .into_iter()
        .zip(suit_values)
        .filter(|(_, values)| values.len() >= 5)
        .map(|(suit, mut values)| {
            values.sort_unstable_by(|a, b| b.cmp(a));
            (suit, values)
        })
        .collect()
}

/// Values with exactly `count` cards, highest first.
fn with_count(groups: &[(Value, u8)], count: u8) -> Vec<Value> {
    groups
        .iter()
        .filter(|(_, c)| *c == count)
        .map(|(v, _)| *v)
        .collect()
}

/// The highest `n` values that aren't one of `used`.
fn kickers(groups: &[(Value, u8)], used: &[Value], n: usize) -> Vec<Value> {
    groups
        .iter()
        .map(|(v, _)| *v)
        .filter(|v| !used.contains(v))
        .take(n)
        .collect()
}

fn rank_groups(groups: &[(Value, u8)], flushes: &[(Suit, Vec<Value>)]) -> Evaluation {
    // Two flush suits only happen past seven cards, take the best of them.
    let straight_flush = flushes
        .iter()
        .filter_map(|(_, values)| straight_high(value_mask(values.iter().copied())))
        .max();
    if let Some(high) = straight_flush {
        let name = if high == Value::Ace {
            "Royal Flush"
        } else {
            "Straight Flush"
        };
        return Evaluation::new(HandCategory::StraightFlush, &[high], name.to_string());
    }

    if let Some(&quad) = with_count(groups, 4).first() {
        let mut tiebreakers = vec![quad];
        tiebreakers.extend(kickers(groups, &[quad], 1));
        return Evaluation::new(
            HandCategory::FourOfAKind,
            &tiebreakers,
            format!("Four of a Kind ({})", quad.label()),
        );
    }

    let trips = with_count(groups, 3);
    if let Some(&trip) = trips.first() {
        // Any other value with two or more cards fills the house, a second
        // set of trips included. Highest value wins.
        let pair = groups
            .iter()
            .find(|(v, c)| *v != trip && *c >= 2)
            .map(|(v, _)| *v);
        if let Some(pair) = pair {
            return Evaluation::new(
                HandCategory::FullHouse,
                &[trip, pair],
                format!("Full House ({} over {})", trip.label(), pair.label()),
            );
        }
    }

    // Highest top five wins, the earlier suit on a tie.
    let mut flush: Option<&(Suit, Vec<Value>)> = None;
    for candidate in flushes {
        if flush.is_none_or(|(_, best)| candidate.1[..5] > best[..5]) {
            flush = Some(candidate);
        }
    }
    if let Some((suit, values)) = flush {
        return Evaluation::new(
            HandCategory::Flush,
            &values[..5],
            format!("Flush ({suit})"),
        );
    }

    let all_values = value_mask(groups.iter().map(|(v, _)| *v));
    if let Some(high) = straight_high(all_values) {
        return Evaluation::new(
            HandCategory::Straight,
            &[high],
            format!("Straight (high {})", high.label()),
        );
    }

    if let Some(&trip) = trips.first() {
        let mut tiebreakers = vec![trip];
        tiebreakers.extend(kickers(groups, &[trip], 2));
        return Evaluation::new(
            HandCategory::ThreeOfAKind,
            &tiebreakers,
            format!("Three of a Kind ({})", trip.label()),
        );
    }

    let pairs = with_count(groups, 2);
    match pairs.as_slice() {
        [high, low, ..] => {
            let mut tiebreakers = vec![*high, *low];
            tiebreakers.extend(kickers(groups, &[*high, *low], 1));
            Evaluation::new(
                HandCategory::TwoPair,
                &tiebreakers,
                format!("Two Pair ({} & {})", high.label(), low.label()),
            )
        }
        [pair] => {
            let mut tiebreakers = vec![*pair];
            tiebreakers.extend(kickers(groups, &[*pair], 3));
            Evaluation::new(
                HandCategory::OnePair,
                &tiebreakers,
                format!("One Pair ({})", pair.label()),
            )
        }
        [] => {
            let tiebreakers = kickers(groups, &[], 5);
            let name = format!("High Card ({})", tiebreakers[0].label());
            Evaluation::new(HandCategory::HighCard, &tiebreakers, name)
        }
    }
}
