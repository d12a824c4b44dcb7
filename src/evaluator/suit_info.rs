use crate::cards::{Card, Suit};

/// Flush information for a 7-card hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    /// Suit holding five or more cards. Seven cards can hold at most one.
    pub flush_suit: Option<Suit>,
    /// Ranks held in the flush suit (bit index = rank value); zero without a flush.
    pub flush_mask: u16,
}

impl SuitInfo {
    pub fn detect(cards: &[Card; 7]) -> Self {
        let mut masks = [0u16; 4];
        let mut counts = [0u8; 4];
        for c in cards {
            masks[c.suit().index()] |= c.rank().bit();
            counts[c.suit().index()] += 1;
        }

        Suit::ALL
            .into_iter()
            .find(|s| counts[s.index()] >= 5)
            .map(|s| SuitInfo { flush_suit: Some(s), flush_mask: masks[s.index()] })
            .unwrap_or(SuitInfo { flush_suit: None, flush_mask: 0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Rank};

    fn detect(s: &str) -> SuitInfo {
        let cards: [Card; 7] = parse_cards(s).unwrap().try_into().unwrap();
        SuitInfo::detect(&cards)
    }

    #[test]
    fn five_suited_of_seven_is_flush() {
        let info = detect("As Ks Qs Js 9s 2d 3c");
        assert_eq!(info.flush_suit, Some(Suit::Spades));
        assert_eq!(info.flush_mask & Rank::Two.bit(), 0);
        assert_ne!(info.flush_mask & Rank::Nine.bit(), 0);
    }

    #[test]
    fn four_suited_is_not_flush() {
        let info = detect("As Ks Qs Js 9h 2d 3c");
        assert_eq!(info.flush_suit, None);
        assert_eq!(info.flush_mask, 0);
    }

    #[test]
    fn seven_suited_keeps_every_rank() {
        let info = detect("2c 3c 4c 5c 7c 9c Jc");
        assert_eq!(info.flush_suit, Some(Suit::Clubs));
        assert_eq!(info.flush_mask.count_ones(), 7);
    }
}
