use super::hand_analysis::HandAnalysis;
use crate::cards::Rank;
use crate::evaluator::{Category, Evaluation};

/// Strategy pattern: each category detector knows how to detect and build its evaluation.
///
/// Detectors look at every card available (up to seven) and pick the best
/// qualifying five themselves. A detector assumes every stronger detector has
/// already failed, so they must run strongest first.
pub trait CategoryDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool;
    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Royal Flush: Ace-high straight flush
pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.straight_flush_info.top_rank == Some(Rank::Ace)
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        analysis.build_evaluation(Category::RoyalFlush, &[Rank::Ace])
    }
}

/// Straight Flush: Five consecutive ranks, all same suit
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.straight_flush_info.is_straight()
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let top = analysis.straight_flush_info.top_rank.unwrap_or(Rank::Five);
        analysis.build_evaluation(Category::StraightFlush, &[top])
    }
}

/// Four of a Kind: Four cards of the same rank
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.quad().is_some()
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let groups = &analysis.rank_groups;
        let quad = groups.quad().unwrap_or(Rank::Two);
        let mut tiebreak = vec![quad];
        tiebreak.extend(groups.top_excluding(&[quad], 1));
        analysis.build_evaluation(Category::FourOfAKind, &tiebreak)
    }
}

/// Full House: Three of a kind plus a pair (a second set of trips counts as the pair)
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        let trips = analysis.rank_groups.trips();
        trips.len() >= 2 || (trips.len() == 1 && !analysis.rank_groups.pairs().is_empty())
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let trips = analysis.rank_groups.trips();
        let top_pair = analysis.rank_groups.pairs().first().copied();
        let pair = match (trips.get(1).copied(), top_pair) {
            (Some(t), Some(p)) => t.max(p),
            (Some(t), None) => t,
            (None, Some(p)) => p,
            (None, None) => Rank::Two,
        };
        analysis.build_evaluation(Category::FullHouse, &[trips[0], pair])
    }
}

/// Flush: Five cards of the same suit; only the top five count
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush()
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let ranks = &analysis.suit_info.flush_ranks;
        analysis.build_evaluation(Category::Flush, &ranks[..ranks.len().min(5)])
    }
}

/// Straight: Five consecutive ranks (not all same suit)
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.straight_info.is_straight()
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let top = analysis.straight_info.top_rank.unwrap_or(Rank::Five);
        analysis.build_evaluation(Category::Straight, &[top])
    }
}

/// Three of a Kind: Three cards of the same rank
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        !analysis.rank_groups.trips().is_empty()
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let groups = &analysis.rank_groups;
        let trips = groups.trips()[0];
        let mut tiebreak = vec![trips];
        tiebreak.extend(groups.top_excluding(&[trips], 2));
        analysis.build_evaluation(Category::ThreeOfAKind, &tiebreak)
    }
}

/// Two Pair: Two pairs of cards; with three pairs the lowest may still play as kicker
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.pairs().len() >= 2
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let groups = &analysis.rank_groups;
        let pairs = groups.pairs();
        let mut tiebreak = vec![pairs[0], pairs[1]];
        tiebreak.extend(groups.top_excluding(&[pairs[0], pairs[1]], 1));
        analysis.build_evaluation(Category::TwoPair, &tiebreak)
    }
}

/// One Pair: Two cards of the same rank
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.pairs().len() == 1
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let groups = &analysis.rank_groups;
        let pair = groups.pairs()[0];
        let mut tiebreak = vec![pair];
        tiebreak.extend(groups.top_excluding(&[pair], 3));
        analysis.build_evaluation(Category::OnePair, &tiebreak)
    }
}

/// High Card: No matching ranks or sequences
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn detect(&self, _analysis: &HandAnalysis) -> bool {
        true // Always matches as fallback
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let tiebreak = analysis.rank_groups.top_excluding(&[], 5);
        analysis.build_evaluation(Category::HighCard, &tiebreak)
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];
