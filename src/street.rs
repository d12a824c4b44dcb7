use serde::Serialize;
use std::fmt;

/// Phases of a single hand: idle -> preflop -> flop -> turn -> river -> showdown -> idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Street {
    Idle,
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Street {
    /// The street that follows this one; showdown returns to idle.
    pub const fn next(self) -> Street {
        match self {
            Street::Idle => Street::Preflop,
            Street::Preflop => Street::Flop,
            Street::Flop => Street::Turn,
            Street::Turn => Street::River,
            Street::River => Street::Showdown,
            Street::Showdown => Street::Idle,
        }
    }

    /// Community cards revealed when entering this street.
    pub const fn cards_dealt(self) -> usize {
        match self {
            Street::Flop => 3,
            Street::Turn | Street::River => 1,
            _ => 0,
        }
    }

    /// Board size once this street has been dealt.
    pub const fn board_len(self) -> usize {
        match self {
            Street::Idle | Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River | Street::Showdown => 5,
        }
    }

    /// Whether players bet on this street.
    pub const fn is_betting(self) -> bool {
        matches!(self, Street::Preflop | Street::Flop | Street::Turn | Street::River)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Street::Idle => "idle",
            Street::Preflop => "preflop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
            Street::Showdown => "showdown",
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
