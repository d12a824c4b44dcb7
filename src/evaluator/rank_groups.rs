use crate::cards::Rank;

/// Groups ranks by their frequency in a hand, sorted by (count desc, rank desc).
///
/// Example: AAAKKQ2 groups as [(Ace, 3), (King, 2), (Queen, 1), (Two, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Create RankGroups from a rank count array indexed by rank value (2-14).
    pub fn from_counts(rank_counts: &[u8; 15]) -> Self {
        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .map(|&rank| (rank, rank_counts[rank.value() as usize]))
            .filter(|&(_, count)| count > 0)
            .collect();

        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups }
    }

    /// Rank of a four-of-a-kind, if present. Seven cards hold at most one.
    pub fn quads(&self) -> Option<Rank> {
        self.groups.iter().find(|(_, count)| *count == 4).map(|(rank, _)| *rank)
    }

    /// All three-of-a-kind ranks, highest first. Seven cards can hold two.
    pub fn trips(&self) -> Vec<Rank> {
        self.with_count(3)
    }

    /// All pair ranks, highest first. Seven cards can hold three.
    pub fn pairs(&self) -> Vec<Rank> {
        self.with_count(2)
    }

    /// Highest `n` ranks present in the hand other than those in `exclude`,
    /// regardless of how many times each appears.
    pub fn kickers(&self, exclude: &[Rank], n: usize) -> Vec<Rank> {
        let mut ranks: Vec<Rank> =
            self.groups.iter().map(|(rank, _)| *rank).filter(|r| !exclude.contains(r)).collect();
        ranks.sort_by(|a, b| b.cmp(a));
        ranks.truncate(n);
        ranks
    }

    fn with_count(&self, n: u8) -> Vec<Rank> {
        self.groups.iter().filter(|(_, count)| *count == n).map(|(rank, _)| *rank).collect()
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_counts(pairs: &[(u8, u8)]) -> [u8; 15] {
        let mut counts = [0u8; 15];
        for &(rank_val, count) in pairs {
            counts[rank_val as usize] = count;
        }
        counts
    }

    #[test]
    fn quads_with_trailing_pair() {
        let groups = RankGroups::from_counts(&make_counts(&[(14, 4), (13, 2), (2, 1)]));
        assert_eq!(groups.quads(), Some(Rank::Ace));
        assert_eq!(groups.pairs(), vec![Rank::King]);
        assert_eq!(groups.kickers(&[Rank::Ace], 1), vec![Rank::King]);
    }

    #[test]
    fn two_trips_are_both_reported() {
        let groups = RankGroups::from_counts(&make_counts(&[(5, 3), (12, 3), (9, 1)]));
        assert_eq!(groups.trips(), vec![Rank::Queen, Rank::Five]);
        assert!(groups.pairs().is_empty());
    }

    #[test]
    fn three_pairs_descending() {
        let groups = RankGroups::from_counts(&make_counts(&[(3, 2), (10, 2), (7, 2), (14, 1)]));
        assert_eq!(groups.pairs(), vec![Rank::Ten, Rank::Seven, Rank::Three]);
        assert_eq!(groups.kickers(&[Rank::Ten, Rank::Seven], 1), vec![Rank::Ace]);
    }

    #[test]
    fn kickers_skip_excluded_ranks() {
        let counts = make_counts(&[(8, 2), (14, 1), (12, 1), (5, 1), (3, 1), (2, 1)]);
        let groups = RankGroups::from_counts(&counts);
        assert_eq!(groups.kickers(&[Rank::Eight], 3), vec![Rank::Ace, Rank::Queen, Rank::Five]);
    }

    #[test]
    fn sorted_by_count_then_rank() {
        let groups = RankGroups::from_counts(&make_counts(&[(5, 1), (14, 1), (10, 2)]));
        assert_eq!(groups.groups(), &[(Rank::Ten, 2), (Rank::Ace, 1), (Rank::Five, 1)]);
    }
}
