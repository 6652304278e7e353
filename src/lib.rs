//! holdem-equity: Texas Hold'em hand ranking and equity estimation
//!
//! Goals:
//! - Exact 7-card hand ranking with a total order over evaluated hands
//! - Monte Carlo equity for seats with known or unknown hole cards, on any street
//! - Range notation (`"AKs"`, `"77"`) expanded into concrete holdings
//! - Reproducible runs: every simulation takes an injectable seed
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: evaluate a Hold'em hand
//! ```
//! use holdem_equity::cards::{Card, Rank, Suit};
//! use holdem_equity::evaluator::{evaluate_holdem, Category};
//! use holdem_equity::hand::{Board, HoleCards};
//!
//! let hole = HoleCards::try_new(
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::Ace, Suit::Hearts),
//! ).unwrap();
//! let board = Board::try_new(vec![
//!     Card::new(Rank::King, Suit::Clubs),
//!     Card::new(Rank::Queen, Suit::Diamonds),
//!     Card::new(Rank::Jack, Suit::Hearts),
//!     Card::new(Rank::Three, Suit::Spades),
//!     Card::new(Rank::Two, Suit::Clubs),
//! ]).unwrap();
//!
//! let eval = evaluate_holdem(&hole, &board).unwrap();
//! assert_eq!(eval.category, Category::OnePair);
//! ```
//!
//! ## Equity on the flop
//! ```
//! use holdem_equity::deck::Deck;
//! use holdem_equity::equity::{compute_equity, SimConfig};
//! use holdem_equity::hand::Board;
//! use holdem_equity::trial::Participant;
//!
//! let seats = [
//!     Participant::known("hero", "Ah Kh".parse().unwrap()),
//!     Participant::unknown("villain"),
//! ];
//! let flop: Board = "Qh 7h 2c".parse().unwrap();
//! let config = SimConfig::new(500).with_seed(7);
//! let result = compute_equity(&seats, &flop, &Deck::standard(), &config).unwrap();
//! assert!((result.total() - 1.0).abs() < 1e-9);
//! ```

pub mod cards;
pub mod deck;
pub mod equity;
pub mod ev;
pub mod evaluator;
pub mod hand;
pub mod range;
pub mod trial;

pub use equity::{compute_equity, compute_range_equity, EquityError, EquityResult, SimConfig, CHOP};
pub use ev::{calc_ev, calc_fold_equity, EvError};
pub use evaluator::{compare, evaluate, Category, Evaluation, Showdown};
pub use range::{expand_range, Range, RangeEntry};
pub use trial::{run_trial, Participant};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
