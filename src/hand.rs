use crate::cards::{parse_cards, Card};
use std::collections::HashSet;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("duplicate cards in hole cards")]
    DuplicateHoleCards,
    #[error("too many board cards: {0}")]
    TooManyBoardCards(usize),
    #[error("duplicate cards on board")]
    DuplicateBoardCards,
    #[error("hole cards overlap with board")]
    Overlap,
    #[error("expected exactly two hole cards, got {0}")]
    HoleCount(usize),
    #[error("expected {expected} cards, got {got}")]
    CardCount { expected: usize, got: usize },
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// A player's two private hole cards.
///
/// ```
/// use river_rat::cards::{Card, Rank, Suit};
/// use river_rat::hand::HoleCards;
///
/// let hole = HoleCards::try_new(
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::King, Suit::Spades),
/// ).unwrap();
/// assert_eq!(hole.as_array().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleCards(Card, Card);

impl HoleCards {
    pub fn try_new(a: Card, b: Card) -> Result<Self, HandError> {
        if a == b {
            return Err(HandError::DuplicateHoleCards);
        }
        Ok(Self(a, b))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        match slice {
            [a, b] => Self::try_new(*a, *b),
            _ => Err(HandError::HoleCount(slice.len())),
        }
    }

    pub fn first(&self) -> Card {
        self.0
    }

    pub fn second(&self) -> Card {
        self.1
    }

    pub fn as_array(&self) -> [Card; 2] {
        [self.0, self.1]
    }
}

impl FromStr for HoleCards {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

/// Community cards: empty preflop, then 3, 4 and 5 cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.len() > 5 {
            return Err(HandError::TooManyBoardCards(cards.len()));
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

    pub fn is_complete(&self) -> bool {
        self.cards.len() == 5
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub(crate) fn extend<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
    }
}

impl FromStr for Board {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Board::try_new(cards)
    }
}

/// Combine hole cards and a complete board into the seven cards a showdown evaluates.
pub fn seven_cards(hole: &HoleCards, board: &Board) -> Result<[Card; 7], HandError> {
    let b = board.as_slice();
    let [b0, b1, b2, b3, b4] = b else {
        return Err(HandError::CardCount { expected: 5, got: b.len() });
    };
    let seven = [hole.first(), hole.second(), *b0, *b1, *b2, *b3, *b4];
    ensure_distinct(&seven)?;
    Ok(seven)
}

/// Reject any card appearing more than once.
pub fn ensure_distinct(cards: &[Card]) -> Result<(), HandError> {
    let mut seen = HashSet::with_capacity(cards.len());
    for &c in cards {
        if !seen.insert(c) {
            return Err(HandError::DuplicateCard(c));
        }
    }
    Ok(())
}
