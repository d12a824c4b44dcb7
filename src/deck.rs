use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("duplicate card in deck: {0}")]
    Duplicate(Card),
}

/// An ordered pile of distinct cards. The engine only ever pops from the top.
#[derive(Debug, Clone)]
pub struct Deck {
    // top of the deck is the end of the vec
    cards: Vec<Card>,
}

impl Deck {
    /// Unshuffled 52-card deck.
    ///
    /// ```
    /// use river_rat::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s)))
            .collect();
        Self { cards }
    }

    /// Standard deck shuffled with a seeded ChaCha RNG, reproducible per seed.
    pub fn shuffled_seeded(seed: u64) -> Self {
        let mut deck = Self::standard();
        deck.shuffle_with(&mut ChaCha8Rng::seed_from_u64(seed));
        deck
    }

    /// Standard deck shuffled from the thread-local RNG.
    pub fn shuffled() -> Self {
        let mut deck = Self::standard();
        deck.shuffle_with(&mut rand::rng());
        deck
    }

    /// Build a deck whose cards are drawn in exactly the given order.
    /// Need not hold all 52 cards; drawing past the end yields `None`.
    pub fn stacked(draw_order: Vec<Card>) -> Result<Self, DeckError> {
        let mut seen = HashSet::with_capacity(draw_order.len());
        for &c in &draw_order {
            if !seen.insert(c) {
                return Err(DeckError::Duplicate(c));
            }
        }
        let mut cards = draw_order;
        cards.reverse();
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Fisher-Yates shuffle with the provided RNG.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Discard the top card. Returns it so callers may log it.
    pub fn burn(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw `n` cards, or `None` (leaving the deck untouched) if fewer remain.
    pub fn draw_n(&mut self, n: usize) -> Option<Vec<Card>> {
        if self.cards.len() < n {
            return None;
        }
        Some((0..n).filter_map(|_| self.cards.pop()).collect())
    }
}
