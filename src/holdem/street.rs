use std::fmt;
use std::str::FromStr;

use crate::core::PokerError;

/// The betting rounds of a holdem hand, in the order they are played.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Street {
    /// Only the hole cards are out.
    Preflop,
    /// Three board cards.
    Flop,
    /// Fourth board card.
    Turn,
    /// Fifth and last board card.
    River,
}

impl Street {
    /// How many board cards are showing on this street.
    pub const fn board_len(self) -> usize {
        match self {
            Self::Preflop => 0,
            Self::Flop => 3,
            Self::Turn => 4,
            Self::River => 5,
        }
    }

    /// How many cards get dealt to the board to reach this street.
    pub const fn cards_to_deal(self) -> usize {
        match self {
            Self::Preflop => 0,
            Self::Flop => 3,
            Self::Turn | Self::River => 1,
        }
    }

    /// The street after this one, None after the river.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Preflop => Some(Self::Flop),
            Self::Flop => Some(Self::Turn),
            Self::Turn => Some(Self::River),
            Self::River => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Preflop => "preflop",
            Self::Flop => "flop",
            Self::Turn => "turn",
            Self::River => "river",
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Street {
    type Err = PokerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preflop" => Ok(Self::Preflop),
            "flop" => Ok(Self::Flop),
            "turn" => Ok(Self::Turn),
            "river" => Ok(Self::River),
            _ => Err(PokerError::InvalidStreet(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Ok(Street::Preflop), "preflop".parse());
        assert_eq!(Ok(Street::Flop), "Flop".parse());
        assert_eq!(Ok(Street::Turn), " turn ".parse());
        assert_eq!(Ok(Street::River), "RIVER".parse());
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            Err(PokerError::InvalidStreet("prehand".to_string())),
            "prehand".parse::<Street>()
        );
        assert!("".parse::<Street>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        let mut street = Some(Street::Preflop);
        while let Some(s) = street {
            assert_eq!(Ok(s), s.to_string().parse());
            street = s.next();
        }
    }

    #[test]
    fn test_board_sizes_add_up() {
        let mut street = Street::Preflop;
        let mut board = 0;
        while let Some(next) = street.next() {
            board += next.cards_to_deal();
            assert_eq!(next.board_len(), board);
            street = next;
        }
        assert_eq!(Street::River, street);
        assert_eq!(5, board);
    }
}
