use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};
use crate::evaluator::{Category, Evaluation};

/// Pre-computed analysis of five to seven cards.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
    /// Straight within the flush suit only.
    pub straight_flush_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card]) -> Self {
        let mut rank_counts = [0u8; 15];
        for c in cards {
            rank_counts[c.rank().value() as usize] += 1;
        }
        let ranks: Vec<Rank> = cards.iter().map(|c| c.rank()).collect();

        let rank_groups = RankGroups::from_counts(&rank_counts);
        let suit_info = SuitInfo::detect(cards);
        let straight_info = StraightInfo::detect(&ranks);
        let straight_flush_info = StraightInfo::detect(&suit_info.flush_ranks);

        Self { rank_groups, suit_info, straight_info, straight_flush_info }
    }

    /// Build an Evaluation from a category and tiebreak ranks.
    pub fn build_evaluation(&self, category: Category, tiebreak: &[Rank]) -> Evaluation {
        Evaluation::from_parts(category, tiebreak)
    }
}
