//! Agents: pluggable decision providers for seats.
//!
//! The engine never asks anyone for a decision. Callers read the
//! [`PendingDecision`], ask whichever agent owns that seat, and feed the answer
//! back through [`PokerEngine::apply_action`]. [`play_hand`] is that loop for
//! tables where every seat is automated.

use crate::betting::{Action, PendingDecision};
use crate::engine::PokerEngine;
use crate::game::GameError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Chooses an action for the seat described by `decision`.
pub trait DecisionProvider {
    fn decide(&mut self, engine: &dyn PokerEngine, decision: &PendingDecision) -> Action;
}

/// Never puts in more than it must: checks when it can, otherwise calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassiveAgent;

impl DecisionProvider for PassiveAgent {
    fn decide(&mut self, _engine: &dyn PokerEngine, decision: &PendingDecision) -> Action {
        if decision.to_call == 0 {
            Action::Check
        } else {
            Action::Call
        }
    }
}

/// CPU stub: draws a random hand "strength" each turn and acts on thresholds.
#[derive(Debug)]
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub const BET_ABOVE: f64 = 0.75;
    pub const RAISE_ABOVE: f64 = 0.80;
    pub const CALL_ABOVE: f64 = 0.25;

    /// Deterministic decisions for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Map a strength in `[0, 1)` to an action for `decision`.
    pub fn choose(decision: &PendingDecision, strength: f64) -> Action {
        if decision.to_call == 0 {
            if decision.is_legal(Action::Bet) && strength > Self::BET_ABOVE {
                Action::Bet
            } else {
                Action::Check
            }
        } else if decision.is_legal(Action::Raise) && strength > Self::RAISE_ABOVE {
            Action::Raise
        } else if strength > Self::CALL_ABOVE {
            Action::Call
        } else {
            Action::Fold
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self { rng: StdRng::from_os_rng() }
    }
}

impl DecisionProvider for RandomAgent {
    fn decide(&mut self, _engine: &dyn PokerEngine, decision: &PendingDecision) -> Action {
        let strength: f64 = self.rng.random();
        Self::choose(decision, strength)
    }
}

/// Plays a fixed list of actions, then falls back to the timeout default.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAgent {
    script: VecDeque<Action>,
}

impl ScriptedAgent {
    pub fn new(script: impl IntoIterator<Item = Action>) -> Self {
        Self { script: script.into_iter().collect() }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl DecisionProvider for ScriptedAgent {
    fn decide(&mut self, _engine: &dyn PokerEngine, decision: &PendingDecision) -> Action {
        self.script.pop_front().unwrap_or_else(|| decision.default_action())
    }
}

/// Drive `engine` to completion, asking the agent at each acting seat.
///
/// An agent answer the engine rejects is replaced by the seat's timeout
/// default, which is always legal, so the hand always finishes.
pub fn play_hand(
    engine: &mut dyn PokerEngine,
    agents: &mut [Box<dyn DecisionProvider>],
) -> Result<(), GameError> {
    while let Some(decision) = engine.pending_decision() {
        let action = match agents.get_mut(decision.seat) {
            Some(agent) => agent.decide(&*engine, &decision),
            None => decision.default_action(),
        };
        match engine.apply_action(decision.seat, action) {
            Ok(_) => {}
            Err(GameError::Action(err)) => {
                log::warn!("seat {} agent chose {action}: {err}", decision.seat);
                engine.apply_timeout(decision.seat)?;
            }
            Err(err) => return Err(err),
        }
    }
    Ok(())
}
