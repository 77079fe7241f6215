/// The four betting rounds.
mod street;
/// Export `Street`
pub use self::street::Street;

/// Module that can generate possible cards for a starting hand.
mod starting_hand;
/// Export `StartingHand`
pub use self::starting_hand::{StartingHand, Suitedness};

/// Rule based action suggestions.
mod advisor;
/// Export the advisor entry points.
pub use self::advisor::{
    Action, Advice, has_flush_draw, has_straight_draw, preflop, preflop_chart, recommend,
};

/// State of a single hand as it gets dealt.
mod session;
/// Export `HandSession` and its builder
pub use self::session::{HandSession, HandSessionBuilder};

/// Which hand wins practice questions.
mod quiz;
pub use self::quiz::QuizQuestion;
