use crate::player::Player;
use serde::Serialize;

/// A slice of the pot and the seats allowed to win it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidePot {
    pub amount: u64,
    /// Non-folded seats whose total contribution reaches this tier, in seat order.
    pub eligible: Vec<usize>,
}

/// Chip bookkeeping for one hand. Player stacks and contributions live on
/// [`Player`]; the ledger moves chips between them and the pot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PotLedger {
    total: u64,
}

impl PotLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chips currently in the pot.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Move up to `amount` from the player's stack into the pot.
    ///
    /// Requests above the stack are clamped, never rejected: the player puts
    /// in what is left and is marked all-in. Returns the chips actually moved.
    pub fn contribute(&mut self, player: &mut Player, amount: u64) -> u64 {
        let paid = amount.min(player.stack);
        player.stack -= paid;
        player.street_contribution += paid;
        player.total_contribution += paid;
        self.total += paid;
        if player.stack == 0 && !player.folded {
            player.all_in = true;
        }
        paid
    }

    /// Zero every street contribution; hand totals are untouched.
    pub fn reset_street(&mut self, players: &mut [Player]) {
        for p in players {
            p.street_contribution = 0;
        }
    }

    /// Partition every chip contributed this hand into side pots.
    ///
    /// Tiers are the distinct positive hand totals, ascending. Each tier's
    /// amount counts every contributor that reached it, folded players
    /// included (dead money); only non-folded players are eligible. A tier
    /// whose contributors all folded is merged into the pot below it.
    pub fn partition_side_pots(players: &[Player]) -> Vec<SidePot> {
        let mut tiers: Vec<u64> =
            players.iter().map(|p| p.total_contribution).filter(|&c| c > 0).collect();
        tiers.sort_unstable();
        tiers.dedup();

        let mut pots: Vec<SidePot> = Vec::new();
        let mut prev = 0u64;
        let mut dead = 0u64;
        for tier in tiers {
            let funders = players.iter().filter(|p| p.total_contribution >= tier).count() as u64;
            let amount = (tier - prev) * funders + dead;
            prev = tier;
            dead = 0;
            let eligible: Vec<usize> = players
                .iter()
                .filter(|p| !p.folded && p.total_contribution >= tier)
                .map(|p| p.seat)
                .collect();
            if eligible.is_empty() {
                match pots.last_mut() {
                    Some(last) => last.amount += amount,
                    // Nobody below to merge into yet: carry it up to the next tier.
                    None => dead = amount,
                }
                continue;
            }
            pots.push(SidePot { amount, eligible });
        }
        if dead > 0 {
            if let Some(last) = pots.last_mut() {
                last.amount += dead;
            }
        }
        pots
    }

    /// Pay `amount` out of the pot to a seat.
    pub fn award(&mut self, player: &mut Player, amount: u64) {
        debug_assert!(amount <= self.total, "award exceeds pot");
        let amount = amount.min(self.total);
        self.total -= amount;
        player.stack += amount;
    }
}
