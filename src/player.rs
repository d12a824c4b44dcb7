use crate::hand::HoleCards;
use serde::Serialize;

/// A seat at the table: persistent stack plus the per-hand betting state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct Player {
    pub(crate) seat: usize,
    pub(crate) name: String,
    pub(crate) stack: u64,
    pub(crate) folded: bool,
    pub(crate) all_in: bool,
    pub(crate) street_contribution: u64,
    pub(crate) total_contribution: u64,
    #[serde(skip)]
    pub(crate) hole: Option<HoleCards>,
}

impl Player {
    pub fn new(seat: usize, name: impl Into<String>, stack: u64) -> Self {
        Self {
            seat,
            name: name.into(),
            stack,
            folded: false,
            all_in: false,
            street_contribution: 0,
            total_contribution: 0,
            hole: None,
        }
    }

    /// Returns the player's seat index
    pub fn seat(&self) -> usize {
        self.seat
    }

    /// Returns the player's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's current stack
    pub fn stack(&self) -> u64 {
        self.stack
    }

    pub fn is_folded(&self) -> bool {
        self.folded
    }

    pub fn is_all_in(&self) -> bool {
        self.all_in
    }

    /// Chips put in during the current street
    pub fn street_contribution(&self) -> u64 {
        self.street_contribution
    }

    /// Chips put in over the whole hand
    pub fn total_contribution(&self) -> u64 {
        self.total_contribution
    }

    pub fn hole(&self) -> Option<HoleCards> {
        self.hole
    }

    /// Still contesting the pot (not folded).
    pub fn is_live(&self) -> bool {
        !self.folded
    }

    /// Can still make betting decisions: live and holding chips.
    pub fn can_act(&self) -> bool {
        !self.folded && !self.all_in
    }

    /// Clear per-hand state. A player without chips sits the hand out as folded.
    pub(crate) fn reset_for_hand(&mut self) {
        self.folded = self.stack == 0;
        self.all_in = false;
        self.street_contribution = 0;
        self.total_contribution = 0;
        self.hole = None;
    }
}
