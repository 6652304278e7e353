use crate::cards::Rank;

/// Groups ranks by their frequency in a hand, sorted by (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
    /// Every rank present, highest first.
    distinct: Vec<Rank>,
}

impl RankGroups {
    /// Create RankGroups from a rank count array.
    /// The array should be indexed by rank value (2-14).
    pub fn from_counts(rank_counts: &[u8; 15]) -> Self {
        let mut groups = Vec::with_capacity(7);
        let mut distinct = Vec::with_capacity(7);

        for rank in Rank::ALL.iter().rev().copied() {
            let count = rank_counts[rank.value() as usize];
            if count > 0 {
                groups.push((rank, count));
                distinct.push(rank);
            }
        }

        // Stable sort keeps rank-descending order inside each count
        groups.sort_by(|a, b| b.1.cmp(&a.1));

        Self { groups, distinct }
    }

    /// Returns the rank of a four-of-a-kind, if present.
    pub fn quad(&self) -> Option<Rank> {
        self.groups.iter().find(|(_, count)| *count >= 4).map(|(rank, _)| *rank)
    }

    /// Returns every three-of-a-kind rank, in descending order.
    pub fn trips(&self) -> Vec<Rank> {
        self.groups.iter().filter(|(_, count)| *count == 3).map(|(rank, _)| *rank).collect()
    }

    /// Returns all pair ranks, in descending order.
    pub fn pairs(&self) -> Vec<Rank> {
        self.groups.iter().filter(|(_, count)| *count == 2).map(|(rank, _)| *rank).collect()
    }

    /// Highest `n` distinct ranks not in `used`, descending.
    ///
    /// Callers only ask for kickers once every paired rank that could fill the
    /// slot is part of `used`, or when one card per rank is all that's needed.
    pub fn top_excluding(&self, used: &[Rank], n: usize) -> Vec<Rank> {
        self.distinct.iter().copied().filter(|r| !used.contains(r)).take(n).collect()
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}
