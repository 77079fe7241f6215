//! Holdem coach is a small library for learning Texas Hold'em.
//!
//! It ranks any hand of five or more cards, deals from a properly shuffled
//! deck, and gives a simple rule based suggestion for every street.
//!
//! ```
//! use holdem_coach::core::{Hand, HandCategory, Rankable};
//!
//! let hand = Hand::new_from_str("A♠ K♠ Q♠ J♠ T♠ 2♥ 3♦").unwrap();
//! let evaluation = hand.rank().unwrap();
//!
//! assert_eq!(HandCategory::StraightFlush, evaluation.category());
//! assert_eq!("Royal Flush", evaluation.display_name());
//! ```

/// Allow all the core poker functionality to be used
/// externally. Everything in core should be agnostic
/// to poker style.
pub mod core;
/// Allow all the holdem specific code to be used externally.
pub mod holdem;
