pub mod comparator;
pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

pub use comparator::{compare, Showdown};

use crate::cards::{Card, Rank};
use crate::hand::{validate_holdem, Board, HandError, HoleCards};
use core::cmp::Ordering;
use std::fmt;

/// Poker hand category from strongest (`RoyalFlush = 0`) to weakest (`HighCard = 9`).
///
/// The discriminant is the category's ordinal: a lower ordinal is a stronger hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    RoyalFlush = 0,
    StraightFlush = 1,
    FourOfAKind = 2,
    FullHouse = 3,
    Flush = 4,
    Straight = 5,
    ThreeOfAKind = 6,
    TwoPair = 7,
    OnePair = 8,
    HighCard = 9,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::RoyalFlush,
        Category::StraightFlush,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::ThreeOfAKind,
        Category::TwoPair,
        Category::OnePair,
        Category::HighCard,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::RoyalFlush => "Royal Flush",
            Category::StraightFlush => "Straight Flush",
            Category::FourOfAKind => "Four of a Kind",
            Category::FullHouse => "Full House",
            Category::Flush => "Flush",
            Category::Straight => "Straight",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::TwoPair => "Two Pair",
            Category::OnePair => "One Pair",
            Category::HighCard => "High Card",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Evaluated hand: category plus the tie-break vector used when categories match.
///
/// Ordering follows hand strength: `a > b` means `a` wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct Evaluation {
    pub category: Category,
    tiebreak: [u8; 5],
    len: u8,
}

impl Evaluation {
    /// Build from a category and rank tiebreakers, most significant first.
    /// At most five ranks are kept.
    pub(crate) fn from_parts(category: Category, ranks: &[Rank]) -> Self {
        let mut tiebreak = [0u8; 5];
        let len = ranks.len().min(5);
        for (slot, r) in tiebreak.iter_mut().zip(ranks) {
            *slot = r.value();
        }
        Self { category, tiebreak, len: len as u8 }
    }

    /// Tie-break ranks as integers (2..=14), most significant first.
    pub fn tiebreak(&self) -> &[u8] {
        &self.tiebreak[..self.len as usize]
    }
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other).into()
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
    #[error("board has {0} cards; evaluation needs all 5")]
    IncompleteBoard(usize),
}

/// Evaluate a Hold'em hand given hole cards and a complete board.
/// Validates inputs, builds the 7-card set (2 hole + 5 board),
/// and returns the category and tiebreaks of the best five cards.
///
/// ```
/// use holdem_equity::evaluator::{evaluate_holdem, Category};
/// use holdem_equity::hand::{Board, HoleCards};
///
/// let hole: HoleCards = "As Ah".parse().unwrap();
/// let board: Board = "Qc Jd 9h 3s 2c".parse().unwrap();
/// let eval = evaluate_holdem(&hole, &board).unwrap();
/// assert_eq!(eval.category, Category::OnePair);
/// assert_eq!(eval.tiebreak(), &[14, 12, 11, 9]);
/// ```
pub fn evaluate_holdem(hole: &HoleCards, board: &Board) -> Result<Evaluation, EvalError> {
    validate_holdem(hole, board)?;
    let b = board.complete().ok_or(EvalError::IncompleteBoard(board.len()))?;
    Ok(evaluate(&b, hole))
}

/// Evaluate five board cards plus two hole cards. No validation: the caller
/// guarantees the seven cards are distinct.
pub fn evaluate(board: &[Card; 5], hole: &HoleCards) -> Evaluation {
    let [h0, h1] = hole.as_array();
    evaluate_seven(&[board[0], board[1], board[2], board[3], board[4], h0, h1])
}

/// Evaluate seven cards, picking the best five internally.
pub fn evaluate_seven(cards: &[Card; 7]) -> Evaluation {
    evaluate_cards(cards)
}

/// Evaluate exactly five cards.
pub fn evaluate_five(cards: &[Card; 5]) -> Evaluation {
    evaluate_cards(cards)
}

fn evaluate_cards(cards: &[Card]) -> Evaluation {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    // Build analysis once (rank groups, flush/straight info)
    let analysis = HandAnalysis::new(cards);

    // Check categories in priority order (highest to lowest)
    for detector in DETECTORS.iter() {
        if detector.detect(&analysis) {
            return detector.build_evaluation(&analysis);
        }
    }

    // Unreachable: HighCard detector always matches as fallback
    unreachable!("HighCard detector should always match")
}

/// Compare two Hold'em hands on a shared board.
///
/// ```
/// use holdem_equity::evaluator::{compare_holdem, Showdown};
/// use holdem_equity::hand::{Board, HoleCards};
///
/// let board: Board = "Qc Jd 9h 3s 2c".parse().unwrap();
/// let a: HoleCards = "As Ah".parse().unwrap();
/// let b: HoleCards = "Ks Kh".parse().unwrap();
/// assert_eq!(compare_holdem(&a, &b, &board).unwrap(), Showdown::Stronger);
/// ```
pub fn compare_holdem(a: &HoleCards, b: &HoleCards, board: &Board) -> Result<Showdown, EvalError> {
    if a.shares_card(b) {
        return Err(EvalError::InvalidHand(HandError::Overlap));
    }
    let va = evaluate_holdem(a, board)?;
    let vb = evaluate_holdem(b, board)?;
    Ok(compare(&va, &vb))
}
