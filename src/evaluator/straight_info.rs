use crate::cards::Rank;

/// Highest straight contained in a set of ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    /// Detect the best straight in a rank mask (bit index = rank value).
    /// Works for any number of cards; the wheel (A-2-3-4-5) tops out at Five.
    pub fn detect(mask: u16) -> Self {
        const RUN: u16 = 0b1_1111;

        // Highest window first: Ace-high down to Six-high.
        for top in (6..=14u8).rev() {
            let window = RUN << (top - 4);
            if mask & window == window {
                return StraightInfo { top_rank: Rank::from_value(top) };
            }
        }

        let wheel = Rank::Ace.bit()
            | Rank::Two.bit()
            | Rank::Three.bit()
            | Rank::Four.bit()
            | Rank::Five.bit();
        if mask & wheel == wheel {
            return StraightInfo { top_rank: Some(Rank::Five) };
        }

        StraightInfo { top_rank: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(ranks: &[Rank]) -> u16 {
        ranks.iter().fold(0, |m, r| m | r.bit())
    }

    #[test]
    fn regular_straight() {
        let info = StraightInfo::detect(mask(&[
            Rank::King,
            Rank::Queen,
            Rank::Jack,
            Rank::Ten,
            Rank::Nine,
        ]));
        assert_eq!(info.top_rank, Some(Rank::King));
    }

    #[test]
    fn ace_high_straight() {
        let info = StraightInfo::detect(mask(&[
            Rank::Ace,
            Rank::King,
            Rank::Queen,
            Rank::Jack,
            Rank::Ten,
        ]));
        assert_eq!(info.top_rank, Some(Rank::Ace));
    }

    #[test]
    fn wheel_is_five_high() {
        let info = StraightInfo::detect(mask(&[
            Rank::Ace,
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
        ]));
        assert_eq!(info.top_rank, Some(Rank::Five));
    }

    #[test]
    fn six_high_beats_wheel_in_same_mask() {
        let info = StraightInfo::detect(mask(&[
            Rank::Ace,
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
        ]));
        assert_eq!(info.top_rank, Some(Rank::Six));
    }

    #[test]
    fn seven_card_run_picks_highest_window() {
        let info = StraightInfo::detect(mask(&[
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
        ]));
        assert_eq!(info.top_rank, Some(Rank::Ten));
    }

    #[test]
    fn gap_is_not_straight() {
        let info = StraightInfo::detect(mask(&[
            Rank::Ace,
            Rank::King,
            Rank::Queen,
            Rank::Jack,
            Rank::Nine,
        ]));
        assert_eq!(info.top_rank, None);
    }
}
