use crate::cards::{parse_cards, Card};
use std::collections::HashSet;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("duplicate cards in hole cards")]
    DuplicateHoleCards,
    #[error("board must hold 0, 3, 4 or 5 cards, got {0}")]
    BoardSize(usize),
    #[error("duplicate cards on board")]
    DuplicateBoardCards,
    #[error("hole cards overlap with board")]
    Overlap,
    #[error("expected exactly two hole cards, got {0}")]
    HoleCount(usize),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// A player's two private hole cards.
///
/// ```
/// use holdem_equity::cards::{Card, Rank, Suit};
/// use holdem_equity::hand::HoleCards;
///
/// let hole = HoleCards::try_new(
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::King, Suit::Spades),
/// ).unwrap();
/// assert_eq!(hole.as_array().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HoleCards(Card, Card);

impl HoleCards {
    /// Return the first (left) hole card.
    pub fn first(&self) -> Card {
        self.0
    }

    /// Return the second (right) hole card.
    pub fn second(&self) -> Card {
        self.1
    }

    /// Return both hole cards as a fixed array.
    pub fn as_array(&self) -> [Card; 2] {
        [self.0, self.1]
    }

    pub fn contains(&self, card: Card) -> bool {
        self.0 == card || self.1 == card
    }

    /// True if the two holdings have a physical card in common.
    pub fn shares_card(&self, other: &HoleCards) -> bool {
        other.contains(self.0) || other.contains(self.1)
    }

    pub fn try_new(a: Card, b: Card) -> Result<Self, HandError> {
        if a == b {
            return Err(HandError::DuplicateHoleCards);
        }
        Ok(Self(a, b))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        if slice.len() != 2 {
            return Err(HandError::HoleCount(slice.len()));
        }
        Self::try_new(slice[0], slice[1])
    }
}

impl FromStr for HoleCards {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

/// Community cards on the board: empty (preflop), flop, flop + turn, or all five.
///
/// ```
/// use holdem_equity::hand::Board;
///
/// let board: Board = "2c 3c 4c Kd".parse().unwrap();
/// assert_eq!(board.len(), 4);
/// assert_eq!(board.turn().unwrap().to_string(), "Kd");
/// assert!(board.river().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// The empty (preflop) board.
    pub fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        if !matches!(cards.len(), 0 | 3 | 4 | 5) {
            return Err(HandError::BoardSize(cards.len()));
        }
        let set: HashSet<Card> = cards.iter().copied().collect();
        if set.len() != cards.len() {
            return Err(HandError::DuplicateBoardCards);
        }
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn flop(&self) -> Option<[Card; 3]> {
        match self.cards.as_slice() {
            [a, b, c, ..] => Some([*a, *b, *c]),
            _ => None,
        }
    }

    pub fn turn(&self) -> Option<Card> {
        self.cards.get(3).copied()
    }

    pub fn river(&self) -> Option<Card> {
        self.cards.get(4).copied()
    }

    /// All five cards, if the river has been dealt.
    pub fn complete(&self) -> Option<[Card; 5]> {
        match self.cards.as_slice() {
            [a, b, c, d, e] => Some([*a, *b, *c, *d, *e]),
            _ => None,
        }
    }

    /// Number of community cards still to come.
    pub fn missing(&self) -> usize {
        5 - self.cards.len()
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
    }
}

impl FromStr for Board {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Board::try_new(cards)
    }
}

/// Validate that a pair of hole cards and board form a valid Hold'em state.
/// Ensures uniqueness across all cards.
///
/// ```
/// use holdem_equity::hand::{validate_holdem, Board, HoleCards};
///
/// let hole: HoleCards = "As Ks".parse().unwrap();
/// let board: Board = "2c 3c 4c".parse().unwrap();
/// validate_holdem(&hole, &board).unwrap();
/// ```
pub fn validate_holdem(hole: &HoleCards, board: &Board) -> Result<(), HandError> {
    if !matches!(board.len(), 0 | 3 | 4 | 5) {
        return Err(HandError::BoardSize(board.len()));
    }
    let set: HashSet<Card> = board.as_slice().iter().copied().collect();
    if set.len() != board.len() {
        return Err(HandError::DuplicateBoardCards);
    }
    if set.contains(&hole.first()) || set.contains(&hole.second()) {
        return Err(HandError::Overlap);
    }
    if hole.first() == hole.second() {
        return Err(HandError::DuplicateHoleCards);
    }
    Ok(())
}
