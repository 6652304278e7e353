use crate::cards::Rank;

/// The best run of five consecutive ranks among a set of cards, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    /// Detect the highest straight in any number of ranks (duplicates allowed).
    /// An ace also plays low, so A-2-3-4-5 (the wheel) is a straight topped by Five.
    pub fn detect(ranks: &[Rank]) -> Self {
        let mut present: u16 = 0;
        for &r in ranks {
            present |= 1 << r.value();
            if r == Rank::Ace {
                present |= 1 << 1;
            }
        }

        const RUN: u16 = 0b1_1111;
        let top_rank = (5..=14u8)
            .rev()
            .find(|&top| ((present >> (top - 4)) & RUN) == RUN)
            .and_then(Rank::from_value);

        StraightInfo { top_rank }
    }

    pub fn is_straight(&self) -> bool {
        self.top_rank.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_straight() {
        let ranks = [Rank::King, Rank::Queen, Rank::Jack, Rank::Ten, Rank::Nine];
        let info = StraightInfo::detect(&ranks);
        assert!(info.is_straight());
        assert_eq!(info.top_rank, Some(Rank::King));
    }

    #[test]
    fn test_wheel() {
        let ranks = [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five];
        let info = StraightInfo::detect(&ranks);
        assert_eq!(info.top_rank, Some(Rank::Five));
    }

    #[test]
    fn test_six_high_beats_wheel_when_both_present() {
        let ranks =
            [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::King];
        let info = StraightInfo::detect(&ranks);
        assert_eq!(info.top_rank, Some(Rank::Six));
    }

    #[test]
    fn test_seven_cards_with_pairs() {
        let ranks =
            [Rank::Nine, Rank::Nine, Rank::Eight, Rank::Seven, Rank::Seven, Rank::Six, Rank::Five];
        let info = StraightInfo::detect(&ranks);
        assert_eq!(info.top_rank, Some(Rank::Nine));
    }

    #[test]
    fn test_no_wrap_around() {
        let ranks = [Rank::Queen, Rank::King, Rank::Ace, Rank::Two, Rank::Three];
        assert!(!StraightInfo::detect(&ranks).is_straight());
    }

    #[test]
    fn test_not_straight() {
        let ranks = [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Nine];
        let info = StraightInfo::detect(&ranks);
        assert!(!info.is_straight());
        assert_eq!(info.top_rank, None);
    }
}
