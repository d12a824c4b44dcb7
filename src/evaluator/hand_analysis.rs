use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};

/// Pre-computed classification of a 7-card hand.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// Bit set of every rank present, bit index = rank value.
    pub rank_mask: u16,
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    /// Best straight over all seven cards, ignoring suits.
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 7]) -> Self {
        let mut rank_counts = [0u8; 15];
        let mut rank_mask = 0u16;
        for c in cards {
            rank_counts[c.rank().value() as usize] += 1;
            rank_mask |= c.rank().bit();
        }

        let rank_groups = RankGroups::from_counts(&rank_counts);
        let suit_info = SuitInfo::detect(cards);
        let straight_info = StraightInfo::detect(rank_mask);

        Self { rank_mask, rank_groups, suit_info, straight_info }
    }

    /// The `n` highest distinct ranks present.
    pub fn top_ranks(&self, n: usize) -> Vec<Rank> {
        ranks_desc(self.rank_mask).take(n).collect()
    }
}

/// Iterate the ranks of a mask from Ace down to Two.
pub fn ranks_desc(mask: u16) -> impl Iterator<Item = Rank> {
    Rank::ALL.into_iter().rev().filter(move |r| mask & r.bit() != 0)
}
