// Engine API boundary. Front ends and bots drive a hand through this trait
// without reaching into `Hand` internals. It is implemented for `game::Hand`.

use crate::betting::{Action, PendingDecision};
use crate::game::{GameError, Hand, Progress, ShowdownResult};
use crate::hand::Board;
use crate::player::Player;
use crate::street::Street;

pub trait PokerEngine {
    // Actions
    fn apply_action(&mut self, seat: usize, action: Action) -> Result<Progress, GameError>;
    fn apply_timeout(&mut self, seat: usize) -> Result<Progress, GameError>;

    // Queries
    fn pending_decision(&self) -> Option<PendingDecision>;
    fn evaluate_showdown(&self) -> Option<&ShowdownResult>;
    fn street(&self) -> Street;
    fn board(&self) -> &Board;
    fn pot(&self) -> u64;
    fn players(&self) -> &[Player];
    fn dealer(&self) -> usize;
    fn is_complete(&self) -> bool;
}

impl PokerEngine for Hand {
    fn apply_action(&mut self, seat: usize, action: Action) -> Result<Progress, GameError> {
        Hand::apply_action(self, seat, action)
    }
    fn apply_timeout(&mut self, seat: usize) -> Result<Progress, GameError> {
        Hand::apply_timeout(self, seat)
    }

    fn pending_decision(&self) -> Option<PendingDecision> {
        Hand::pending_decision(self)
    }
    fn evaluate_showdown(&self) -> Option<&ShowdownResult> {
        Hand::evaluate_showdown(self)
    }
    fn street(&self) -> Street {
        Hand::street(self)
    }
    fn board(&self) -> &Board {
        Hand::board(self)
    }
    fn pot(&self) -> u64 {
        Hand::pot(self)
    }
    fn players(&self) -> &[Player] {
        Hand::players(self)
    }
    fn dealer(&self) -> usize {
        Hand::dealer(self)
    }
    fn is_complete(&self) -> bool {
        Hand::is_complete(self)
    }
}
