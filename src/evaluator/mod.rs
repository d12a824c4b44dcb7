pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{Card, Rank};
use crate::hand::{ensure_distinct, seven_cards, Board, HandError, HoleCards};
use core::cmp::Ordering;
use serde::{Serialize, Serializer};
use std::fmt;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

/// Comparable hand strength: category first, then the category's tiebreakers.
///
/// Unused tiebreaker slots are `None`, which orders below every rank, so two
/// hands compare lexicographically with missing trailing entries acting as a
/// low sentinel. Equal ranks are an exact tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandRank {
    category: Category,
    tiebreakers: [Option<Rank>; 5],
}

impl HandRank {
    /// Build a rank from a category and up to five tiebreakers, most significant first.
    pub(crate) fn new(category: Category, ranks: &[Rank]) -> Self {
        debug_assert!(ranks.len() <= 5);
        let mut tiebreakers = [None; 5];
        for (slot, &r) in tiebreakers.iter_mut().zip(ranks) {
            *slot = Some(r);
        }
        Self { category, tiebreakers }
    }

    pub const fn category(&self) -> Category {
        self.category
    }

    /// Tiebreaker ranks in significance order (a straight carries only its top card).
    pub fn tiebreakers(&self) -> impl Iterator<Item = Rank> + '_ {
        self.tiebreakers.iter().map_while(|r| *r)
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (", self.category.label())?;
        for (i, r) in self.tiebreakers().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{r}")?;
        }
        write!(f, ")")
    }
}

impl Serialize for HandRank {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
}

/// Rank exactly seven distinct cards.
///
/// ```
/// use river_rat::cards::parse_cards;
/// use river_rat::evaluator::{evaluate, Category};
///
/// let cards = parse_cards("Ah Kh 2h 7h 9h Ac Ad").unwrap();
/// assert_eq!(evaluate(&cards).unwrap().category(), Category::Flush);
/// assert!(evaluate(&cards[..6]).is_err());
/// ```
pub fn evaluate(cards: &[Card]) -> Result<HandRank, EvalError> {
    let seven: &[Card; 7] = cards
        .try_into()
        .map_err(|_| HandError::CardCount { expected: 7, got: cards.len() })?;
    ensure_distinct(seven)?;
    Ok(evaluate_seven(seven))
}

/// Rank a player's hole cards against a complete board.
///
/// ```
/// use river_rat::evaluator::{evaluate_holdem, Category};
/// use river_rat::hand::{Board, HoleCards};
///
/// let hole: HoleCards = "As Ah".parse().unwrap();
/// let board: Board = "Qc Jd 9h 3s 2c".parse().unwrap();
/// assert_eq!(evaluate_holdem(&hole, &board).unwrap().category(), Category::Pair);
/// ```
pub fn evaluate_holdem(hole: &HoleCards, board: &Board) -> Result<HandRank, EvalError> {
    let seven = seven_cards(hole, board)?;
    Ok(evaluate_seven(&seven))
}

/// Rank seven cards without validating them.
///
/// Classifies once by rank counts and suit buckets, then derives the best
/// category directly; no five-card subsets are enumerated.
pub fn evaluate_seven(cards: &[Card; 7]) -> HandRank {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(cards);
    DETECTORS
        .iter()
        .find_map(|d| d.detect(&analysis))
        .unwrap_or_else(|| HandRank::new(Category::HighCard, &analysis.top_ranks(5)))
}

/// Compare two Hold'em hands on a shared board.
pub fn compare_holdem(a: &HoleCards, b: &HoleCards, board: &Board) -> Result<Ordering, EvalError> {
    let va = evaluate_holdem(a, board)?;
    let vb = evaluate_holdem(b, board)?;
    Ok(va.cmp(&vb))
}
