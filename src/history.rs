use crate::street::Street;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub enum HistoryVerb {
    SmallBlind,
    BigBlind,
    Fold,
    Check,
    Call,
    Bet,
    RaiseTo,
    Win,
    Split,
}

impl HistoryVerb {
    pub fn label(self) -> &'static str {
        match self {
            HistoryVerb::SmallBlind => "SB",
            HistoryVerb::BigBlind => "BB",
            HistoryVerb::Fold => "Fold",
            HistoryVerb::Check => "Check",
            HistoryVerb::Call => "Call",
            HistoryVerb::Bet => "Bet",
            HistoryVerb::RaiseTo => "Raise to",
            HistoryVerb::Win => "Win",
            HistoryVerb::Split => "Split",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct HistoryEntry {
    pub seat: usize,
    pub verb: HistoryVerb,
    /// Chips moved, or the new bet level for `Bet`/`RaiseTo`.
    pub amount: Option<u64>,
    pub street: Street,
}

/// Append-only log of one hand's blinds, actions and awards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HandHistory {
    entries: Vec<HistoryEntry>,
}

impl HandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(
        &mut self,
        seat: usize,
        verb: HistoryVerb,
        amount: Option<u64>,
        street: Street,
    ) {
        self.entries.push(HistoryEntry { seat, verb, amount, street });
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The last `n` entries, oldest first.
    pub fn recent(&self, n: usize) -> &[HistoryEntry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    /// A page of `n` entries ending `offset` entries before the newest.
    /// Offsets past the start are clamped so the page stays full when possible.
    pub fn recent_offset(&self, n: usize, offset: usize) -> &[HistoryEntry] {
        if n == 0 {
            return &[];
        }
        let len = self.entries.len();
        let offset = offset.min(len.saturating_sub(n));
        let end = len - offset;
        let start = end.saturating_sub(n);
        &self.entries[start..end]
    }
}
