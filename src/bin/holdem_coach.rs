use clap::{Parser, Subcommand};
use holdem_coach::core::{Hand, PokerError, RANKING_NAMES, Rankable, Winner};
use holdem_coach::holdem::{HandSessionBuilder, QuizQuestion, preflop_chart};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(name = "holdem-coach")]
#[command(about = "Deal practice hands and get coaching for every street")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deal hands street by street with the coach's advice
    Deal {
        /// Seed for reproducible deals
        #[arg(short, long)]
        seed: Option<u64>,
        /// How many hands to deal
        #[arg(short = 'n', long, default_value_t = 1)]
        hands: usize,
    },
    /// Rank a hand, e.g. "A♠ K♠ Q♠ J♠ 10♠" or "AsKsQsJsTs"
    Eval {
        /// Card codes
        cards: String,
    },
    /// Print the preflop action for every starting hand
    Chart,
    /// Print the hand rankings and the practice questions with answers
    Quiz,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let res = match cli.command {
        Commands::Deal { seed, hands } => deal(seed, hands),
        Commands::Eval { cards } => eval(&cards),
        Commands::Chart => {
            chart();
            Ok(())
        }
        Commands::Quiz => quiz(),
    };

    if let Err(e) = res {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn deal(seed: Option<u64>, hands: usize) -> Result<(), PokerError> {
    let mut builder = HandSessionBuilder::default();
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    let mut session = builder.build();

    for hand_num in 1..=hands {
        session.fresh_hand()?;
        println!("Hand #{hand_num}");
        loop {
            let street = session.street().ok_or(PokerError::NoHandInProgress)?;
            let board = Hand::new_with_cards(session.board().to_vec());
            println!(
                "  {:<8} hole: {}  board: {}",
                street.as_str(),
                Hand::new_with_cards(session.hole().to_vec()),
                board
            );
            if let Some(evaluation) = session.evaluation() {
                println!("           made: {evaluation}");
            }
            if let Some(advice) = session.advice() {
                println!("           coach: {advice}");
            }
            match session.next_street() {
                Ok(_) => {}
                Err(PokerError::HandComplete) => break,
                Err(e) => return Err(e),
            }
        }
    }
    Ok(())
}

fn eval(cards: &str) -> Result<(), PokerError> {
    let hand = Hand::new_from_str(cards)?;
    let evaluation = hand.rank()?;
    println!(
        "{} => {} (category {}, tie breakers {:?})",
        hand,
        evaluation,
        evaluation.rank(),
        evaluation.tiebreakers()
    );
    Ok(())
}

fn chart() {
    for (starting_hand, action) in preflop_chart() {
        println!("{:<4} {action}", starting_hand.to_string());
    }
}

fn quiz() -> Result<(), PokerError> {
    println!("Hand rankings, best first:");
    for (i, name) in RANKING_NAMES.iter().enumerate() {
        println!("  {:>2}. {name}", i + 1);
    }
    println!();

    for (i, question) in QuizQuestion::curated()?.iter().enumerate() {
        let answer = match question.answer()? {
            Winner::First => "A",
            Winner::Second => "B",
            Winner::Tie => "split",
        };
        println!("Q{}: A = {}  vs  B = {}", i + 1, question.first, question.second);
        println!("    winner: {answer}. {}", question.explanation()?);
    }
    Ok(())
}
