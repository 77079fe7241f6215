use std::cmp::Ordering;

use crate::core::{Evaluation, Hand, PokerError, Rankable, Value, Winner, compare};

/// Two five card hands and the question "which one wins?".
///
/// The answer always comes from ranking both hands, never from a stored
/// answer key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub first: Hand,
    pub second: Hand,
}

impl QuizQuestion {
    pub fn new(first: Hand, second: Hand) -> Self {
        Self { first, second }
    }

    /// Build a question from two strings of card codes.
    ///
    /// ```
    /// use holdem_coach::core::Winner;
    /// use holdem_coach::holdem::QuizQuestion;
    ///
    /// let q = QuizQuestion::from_strs("9♠ T♠ J♠ Q♠ K♠", "2♥ 2♦ 2♣ 2♠ A♦").unwrap();
    /// assert_eq!(Winner::First, q.answer().unwrap());
    /// ```
    pub fn from_strs(first: &str, second: &str) -> Result<Self, PokerError> {
        Ok(Self::new(
            Hand::new_from_str(first)?,
            Hand::new_from_str(second)?,
        ))
    }

    /// The practice set that ships with the coach.
    pub fn curated() -> Result<Vec<Self>, PokerError> {
        [
            ("A♠ A♦ A♥ K♣ K♦", "K♠ K♥ K♦ K♣ 2♠"),
            ("9♠ T♠ J♠ Q♠ K♠", "2♥ 2♦ 2♣ 2♠ A♦"),
            ("2♣ 2♦ Q♥ Q♣ A♠", "3♣ 3♦ K♥ 7♣ 6♦"),
        ]
        .iter()
        .map(|(first, second)| Self::from_strs(first, second))
        .collect()
    }

    fn evaluations(&self) -> Result<(Evaluation, Evaluation), PokerError> {
        Ok((self.first.rank()?, self.second.rank()?))
    }

    /// Which hand wins.
    pub fn answer(&self) -> Result<Winner, PokerError> {
        let (first, second) = self.evaluations()?;
        Ok(compare(&first, &second))
    }

    /// A one line explanation of the answer.
    pub fn explanation(&self) -> Result<String, PokerError> {
        let (first, second) = self.evaluations()?;
        let (winner, loser) = match first.cmp(&second) {
            Ordering::Equal => {
                return Ok(format!(
                    "Both hands are {}, it's a split pot.",
                    first.display_name()
                ));
            }
            Ordering::Greater => (first, second),
            Ordering::Less => (second, first),
        };

        if winner.category() != loser.category() {
            Ok(format!(
                "{} beats {}.",
                winner.category(),
                loser.category()
            ))
        } else {
            // Same category, so the first tie breaker that differs decides it.
            let deciding = winner
                .tiebreakers()
                .iter()
                .zip(loser.tiebreakers())
                .find(|(w, l)| w != l)
                .and_then(|(w, l)| Some((Value::from_face(*w)?, Value::from_face(*l)?)));
            match deciding {
                Some((w, l)) => Ok(format!(
                    "Both are {}, the {} beats the {}.",
                    winner.category(),
                    w.label(),
                    l.label()
                )),
                None => Ok(format!("{winner} beats {loser}.")),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curated_answers() {
        let questions = QuizQuestion::curated().unwrap();
        let answers: Vec<Winner> = questions.iter().map(|q| q.answer().unwrap()).collect();
        assert_eq!(vec![Winner::Second, Winner::First, Winner::First], answers);
    }

    #[test]
    fn test_curated_explanations() {
        let questions = QuizQuestion::curated().unwrap();
        let why: Vec<String> = questions
            .iter()
            .map(|q| q.explanation().unwrap())
            .collect();
        assert_eq!(
            vec![
                "Four of a Kind beats Full House.".to_string(),
                "Straight Flush beats Four of a Kind.".to_string(),
                "Two Pair beats One Pair.".to_string(),
            ],
            why
        );
    }

    #[test]
    fn test_kicker_explanation() {
        let q = QuizQuestion::from_strs("A♠ A♦ K♥ 7♣ 2♦", "A♥ A♣ Q♥ 7♦ 2♠").unwrap();
        assert_eq!(Winner::First, q.answer().unwrap());
        assert_eq!(
            "Both are One Pair, the K beats the Q.",
            q.explanation().unwrap()
        );
    }

    #[test]
    fn test_second_pair_explanation() {
        let q = QuizQuestion::from_strs("Q♥ Q♣ 5♥ 5♦ A♠", "Q♠ Q♦ 7♥ 7♣ 2♦").unwrap();
        assert_eq!(Winner::Second, q.answer().unwrap());
        assert_eq!(
            "Both are Two Pair, the 7 beats the 5.",
            q.explanation().unwrap()
        );
    }

    #[test]
    fn test_ten_is_written_out() {
        let q = QuizQuestion::from_strs("T♠ T♦ 4♥ 3♣ 2♦", "9♥ 9♣ A♥ K♦ Q♠").unwrap();
        assert_eq!(
            "Both are One Pair, the 10 beats the 9.",
            q.explanation().unwrap()
        );
    }

    #[test]
    fn test_split_pot() {
        let q = QuizQuestion::from_strs("A♠ K♦ Q♥ J♣ 9♦", "A♥ K♣ Q♦ J♠ 9♠").unwrap();
        assert_eq!(Winner::Tie, q.answer().unwrap());
        assert_eq!(
            "Both hands are High Card (A), it's a split pot.",
            q.explanation().unwrap()
        );
    }

    #[test]
    fn test_short_hand_is_an_error() {
        let q = QuizQuestion::from_strs("A♠ K♦", "A♥ K♣ Q♦ J♠ 9♠").unwrap();
        assert!(q.answer().is_err());
        assert!(q.explanation().is_err());
    }
}
