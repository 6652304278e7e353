use crate::cards::{Card, Rank, Suit};

/// The flush suit (five or more cards sharing a suit) and all ranks held in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuitInfo {
    pub flush_suit: Option<Suit>,
    /// Every rank of the flush suit, descending. Empty when there is no flush.
    pub flush_ranks: Vec<Rank>,
}

impl SuitInfo {
    /// Detect a flush among up to seven cards. With seven cards at most one
    /// suit can reach five.
    pub fn detect(cards: &[Card]) -> Self {
        let mut counts = [0u8; 4];
        for c in cards {
            counts[c.suit().index()] += 1;
        }

        let Some(suit) = Suit::ALL.into_iter().find(|s| counts[s.index()] >= 5) else {
            return SuitInfo { flush_suit: None, flush_ranks: Vec::new() };
        };

        let mut flush_ranks: Vec<Rank> =
            cards.iter().filter(|c| c.suit() == suit).map(|c| c.rank()).collect();
        flush_ranks.sort_by(|a, b| b.cmp(a));

        SuitInfo { flush_suit: Some(suit), flush_ranks }
    }

    pub fn is_flush(&self) -> bool {
        self.flush_suit.is_some()
    }
}
