//! One street of fixed-limit betting.
//!
//! A [`BettingRound`] owns the street's bet level, raise count and the queue of
//! seats still owed a decision. It never holds player state itself: every
//! operation borrows the hand's players and [`PotLedger`] so chips only move
//! through the ledger.

use crate::config::TableConfig;
use crate::ledger::PotLedger;
use crate::player::Player;
use crate::street::Street;
use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;

/// A betting decision. Sizes are implied by the street's bet unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[non_exhaustive]
pub enum Action {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
}

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Action::Fold => "fold",
            Action::Check => "check",
            Action::Call => "call",
            Action::Bet => "bet",
            Action::Raise => "raise",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error("illegal action: cannot {action} with {to_call} to call")]
    Illegal { action: Action, to_call: u64 },
    #[error("out of turn: seat {expected} to act, got seat {got}")]
    OutOfTurn { expected: usize, got: usize },
    #[error("betting round is closed")]
    RoundClosed,
    #[error("unknown seat {0}")]
    UnknownSeat(usize),
}

/// Where a street stands after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoundOutcome {
    AwaitingAction { next: usize },
    Closed,
}

/// Everything a UI or bot needs to choose an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingDecision {
    pub seat: usize,
    pub legal_actions: Vec<Action>,
    pub to_call: u64,
    pub bet_unit: u64,
    pub current_bet: u64,
    pub raise_count: u32,
    pub max_raises: u32,
    pub stack: u64,
}

impl PendingDecision {
    pub fn is_legal(&self, action: Action) -> bool {
        self.legal_actions.contains(&action)
    }

    /// What a seat does when it runs out of time: fold to a bet, otherwise check.
    pub fn default_action(&self) -> Action {
        if self.to_call > 0 {
            Action::Fold
        } else {
            Action::Check
        }
    }
}

/// Blind postings made when a preflop round opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PostedBlinds {
    pub small_seat: usize,
    pub small_paid: u64,
    pub big_seat: usize,
    pub big_paid: u64,
}

/// The effect of one accepted action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AppliedAction {
    pub seat: usize,
    pub requested: Action,
    /// What was actually applied after any downgrade.
    pub action: Action,
    /// Chips moved into the pot.
    pub paid: u64,
    /// Bet level after the action.
    pub current_bet: u64,
    pub outcome: RoundOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BettingRound {
    street: Street,
    bet_unit: u64,
    max_raises: u32,
    current_bet: u64,
    raise_count: u32,
    to_act: VecDeque<usize>,
    blinds: Option<PostedBlinds>,
}

/// Seats clockwise starting just after `from`, ending with `from` itself.
fn clockwise_after(from: usize, n: usize) -> impl Iterator<Item = usize> {
    (1..=n).map(move |k| (from + k) % n)
}

/// First seat after `from`, clockwise, that is still in the hand.
fn next_live(players: &[Player], from: usize) -> Option<usize> {
    clockwise_after(from, players.len()).find(|&s| players[s].is_live())
}

impl BettingRound {
    /// Open a street: reset street contributions, post blinds preflop, and
    /// queue every seat that can still act in clockwise order.
    ///
    /// Players are indexed by seat. Action starts left of the big blind
    /// preflop and left of the dealer on later streets.
    pub fn start(
        street: Street,
        config: &TableConfig,
        dealer: usize,
        players: &mut [Player],
        ledger: &mut PotLedger,
    ) -> Self {
        ledger.reset_street(players);
        let mut round = Self {
            street,
            bet_unit: config.bet_unit(street),
            max_raises: config.max_raises,
            current_bet: 0,
            raise_count: 0,
            to_act: VecDeque::new(),
            blinds: None,
        };

        let n = players.len();
        let mut first_from = dealer;
        if street == Street::Preflop {
            if let Some(blinds) = round.post_blinds(config, dealer, players, ledger) {
                first_from = blinds.big_seat;
                round.blinds = Some(blinds);
            }
        }

        round.to_act = clockwise_after(first_from, n).filter(|&s| players[s].can_act()).collect();
        round.close_if_uncontested(players);
        log::debug!(
            "{street} opens: bet unit {}, level {}, to act {:?}",
            round.bet_unit,
            round.current_bet,
            round.to_act
        );
        round
    }

    fn post_blinds(
        &mut self,
        config: &TableConfig,
        dealer: usize,
        players: &mut [Player],
        ledger: &mut PotLedger,
    ) -> Option<PostedBlinds> {
        let small_seat = next_live(players, dealer)?;
        let big_seat = next_live(players, small_seat).filter(|&s| s != small_seat)?;
        let small_paid = ledger.contribute(&mut players[small_seat], config.small_blind);
        let big_paid = ledger.contribute(&mut players[big_seat], config.big_blind);
        self.current_bet = config.big_blind;
        Some(PostedBlinds { small_seat, small_paid, big_seat, big_paid })
    }

    pub fn street(&self) -> Street {
        self.street
    }

    pub fn bet_unit(&self) -> u64 {
        self.bet_unit
    }

    pub fn current_bet(&self) -> u64 {
        self.current_bet
    }

    pub fn raise_count(&self) -> u32 {
        self.raise_count
    }

    pub fn max_raises(&self) -> u32 {
        self.max_raises
    }

    pub fn blinds(&self) -> Option<PostedBlinds> {
        self.blinds
    }

    /// Seats still owed a decision, next actor first.
    pub fn to_act(&self) -> impl Iterator<Item = usize> + '_ {
        self.to_act.iter().copied()
    }

    pub fn next_to_act(&self) -> Option<usize> {
        self.to_act.front().copied()
    }

    pub fn to_call(&self, player: &Player) -> u64 {
        self.current_bet.saturating_sub(player.street_contribution)
    }

    /// Closed once nobody is owed a decision and every seat that can still
    /// act has matched the bet level. A lone seat that can act may sit below
    /// the level when no other live seat put in more than it did.
    pub fn is_closed(&self, players: &[Player]) -> bool {
        if !self.to_act.is_empty() {
            return false;
        }
        let mut actors = players.iter().filter(|p| p.can_act());
        match (actors.next(), actors.next()) {
            (Some(lone), None) => !Self::is_covered_by_others(lone, players),
            _ => players
                .iter()
                .filter(|p| p.can_act())
                .all(|p| p.street_contribution == self.current_bet),
        }
    }

    /// Some other live seat put more into this street than `player`.
    fn is_covered_by_others(player: &Player, players: &[Player]) -> bool {
        players
            .iter()
            .filter(|p| p.is_live() && p.seat != player.seat)
            .any(|p| p.street_contribution > player.street_contribution)
    }

    pub fn outcome(&self, players: &[Player]) -> RoundOutcome {
        match self.to_act.front() {
            Some(&next) => RoundOutcome::AwaitingAction { next },
            None => {
                debug_assert!(self.is_closed(players));
                RoundOutcome::Closed
            }
        }
    }

    fn can_raise(&self) -> bool {
        self.raise_count < self.max_raises
    }

    pub fn legal_actions(&self, player: &Player) -> Vec<Action> {
        let to_call = self.to_call(player);
        let mut legal = Vec::with_capacity(3);
        if to_call == 0 {
            legal.push(Action::Check);
            if self.can_raise() && player.stack > 0 {
                legal.push(Action::Bet);
            }
        } else {
            legal.push(Action::Fold);
            legal.push(Action::Call);
            if self.can_raise() && player.stack > to_call {
                legal.push(Action::Raise);
            }
        }
        legal
    }

    pub fn pending_decision(&self, players: &[Player]) -> Option<PendingDecision> {
        let seat = self.next_to_act()?;
        let player = players.get(seat)?;
        Some(PendingDecision {
            seat,
            legal_actions: self.legal_actions(player),
            to_call: self.to_call(player),
            bet_unit: self.bet_unit,
            current_bet: self.current_bet,
            raise_count: self.raise_count,
            max_raises: self.max_raises,
            stack: player.stack,
        })
    }

    /// Map a requested action onto what will be applied. A raise that the cap
    /// or the stack forbids becomes a call; a capped bet becomes a check.
    fn resolve(&self, player: &Player, requested: Action) -> Result<Action, ActionError> {
        let legal = self.legal_actions(player);
        if legal.contains(&requested) {
            return Ok(requested);
        }
        let to_call = self.to_call(player);
        match requested {
            Action::Raise if to_call > 0 => Ok(Action::Call),
            Action::Bet if to_call == 0 => Ok(Action::Check),
            action => Err(ActionError::Illegal { action, to_call }),
        }
    }

    /// Apply `action` for `seat`. Nothing is mutated when an error is returned.
    pub fn apply(
        &mut self,
        seat: usize,
        requested: Action,
        players: &mut [Player],
        ledger: &mut PotLedger,
    ) -> Result<AppliedAction, ActionError> {
        let player = players.get(seat).ok_or(ActionError::UnknownSeat(seat))?;
        let expected = self.next_to_act().ok_or(ActionError::RoundClosed)?;
        if expected != seat {
            return Err(ActionError::OutOfTurn { expected, got: seat });
        }
        let mut action = self.resolve(player, requested)?;
        if action != requested {
            log::warn!(
                "seat {seat}: {requested} not available ({} of {} raises), applied as {action}",
                self.raise_count,
                self.max_raises
            );
        }

        self.to_act.pop_front();
        let to_call = self.to_call(&players[seat]);
        let mut paid = 0;
        match action {
            Action::Fold => players[seat].folded = true,
            Action::Check => {}
            Action::Call => paid = ledger.contribute(&mut players[seat], to_call),
            Action::Bet | Action::Raise => {
                paid = ledger.contribute(&mut players[seat], to_call + self.bet_unit);
                let level = players[seat].street_contribution;
                if level > self.current_bet {
                    self.current_bet = level;
                    self.raise_count += 1;
                    let n = players.len();
                    self.to_act = clockwise_after(seat, n)
                        .filter(|&s| s != seat && players[s].can_act())
                        .collect();
                } else {
                    // Clamped below the level: nothing was raised.
                    action = Action::Call;
                }
            }
        }

        if players.iter().filter(|p| p.is_live()).count() <= 1 {
            self.to_act.clear();
        }
        self.close_if_uncontested(players);

        let outcome = self.outcome(players);
        log::debug!(
            "{} seat {seat} {action} paid {paid} (level {}, raises {}) -> {outcome:?}",
            self.street,
            self.current_bet,
            self.raise_count
        );
        Ok(AppliedAction { seat, requested, action, paid, current_bet: self.current_bet, outcome })
    }

    /// With at most one seat able to act and no other live seat ahead of it,
    /// there is nobody left to bet against. The blind level alone does not
    /// keep it in the queue when the big blind is short.
    fn close_if_uncontested(&mut self, players: &[Player]) {
        let actors = players.iter().filter(|p| p.can_act()).count();
        if actors <= 1
            && self
                .to_act
                .iter()
                .all(|&s| !Self::is_covered_by_others(&players[s], players))
        {
            self.to_act.clear();
        }
    }
}
