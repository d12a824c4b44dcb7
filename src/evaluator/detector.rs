use super::hand_analysis::{ranks_desc, HandAnalysis};
use super::straight_info::StraightInfo;
use crate::cards::Rank;
use crate::evaluator::{Category, HandRank};

/// Strategy pattern: each detector recognises one category in a 7-card hand
/// and builds its rank from the best five cards it can find.
pub trait CategoryDetector: Sync {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank>;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Straight Flush: five consecutive ranks inside the flush suit.
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        analysis.suit_info.flush_suit?;
        let top = StraightInfo::detect(analysis.suit_info.flush_mask).top_rank?;
        Some(HandRank::new(Category::StraightFlush, &[top]))
    }
}

/// Four of a Kind, with the best remaining card as kicker.
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        let quad = analysis.rank_groups.quads()?;
        let mut ranks = vec![quad];
        ranks.extend(analysis.rank_groups.kickers(&[quad], 1));
        Some(HandRank::new(Category::FourOfAKind, &ranks))
    }
}

/// Full House: the best trips plus the best other group of two or more.
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        let trips = analysis.rank_groups.trips();
        let &top = trips.first()?;
        // A second set of trips plays as the pair.
        let pair = trips.get(1).copied().into_iter().chain(analysis.rank_groups.pairs()).max()?;
        Some(HandRank::new(Category::FullHouse, &[top, pair]))
    }
}

/// Flush: the five highest cards of the flush suit.
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        analysis.suit_info.flush_suit?;
        let ranks: Vec<Rank> = ranks_desc(analysis.suit_info.flush_mask).take(5).collect();
        Some(HandRank::new(Category::Flush, &ranks))
    }
}

/// Straight: ranked by its top card only.
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        let top = analysis.straight_info.top_rank?;
        Some(HandRank::new(Category::Straight, &[top]))
    }
}

/// Three of a Kind with two kickers.
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        let &trips = analysis.rank_groups.trips().first()?;
        let mut ranks = vec![trips];
        ranks.extend(analysis.rank_groups.kickers(&[trips], 2));
        Some(HandRank::new(Category::ThreeOfAKind, &ranks))
    }
}

/// Two Pair: the two best pairs; a third pair can still supply the kicker.
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        let pairs = analysis.rank_groups.pairs();
        let (&high, &low) = (pairs.first()?, pairs.get(1)?);
        let mut ranks = vec![high, low];
        ranks.extend(analysis.rank_groups.kickers(&[high, low], 1));
        Some(HandRank::new(Category::TwoPair, &ranks))
    }
}

/// One Pair with three kickers.
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        let &pair = analysis.rank_groups.pairs().first()?;
        let mut ranks = vec![pair];
        ranks.extend(analysis.rank_groups.kickers(&[pair], 3));
        Some(HandRank::new(Category::Pair, &ranks))
    }
}

// ============================================================================
// Static detector list (in priority order). High card is the caller's fallback.
// ============================================================================

pub static DETECTORS: [&dyn CategoryDetector; 8] = [
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
];
