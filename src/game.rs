use crate::betting::{
    Action, ActionError, AppliedAction, BettingRound, PendingDecision, RoundOutcome,
};
use crate::cards::Card;
use crate::config::TableConfig;
use crate::deck::Deck;
use crate::evaluator::{evaluate_holdem, EvalError, HandRank};
use crate::hand::{Board, HoleCards};
use crate::history::{HandHistory, HistoryVerb};
use crate::ledger::{PotLedger, SidePot};
use crate::player::Player;
use crate::street::Street;
use serde::Serialize;

/// Most seats one 52-card deck can serve: two hole cards each plus five
/// board cards and three burns.
pub const MAX_PLAYERS: usize = 22;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error(transparent)]
    Action(#[from] ActionError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error("need at least two players with chips, got {0}")]
    NotEnoughPlayers(usize),
    #[error("at most {max} players can be seated, got {got}")]
    TooManyPlayers { max: usize, got: usize },
    #[error("deck ran out of cards")]
    DeckExhausted,
    #[error("hand is already complete")]
    HandComplete,
    #[error("hand is still in progress")]
    HandInProgress,
    #[error("invalid table config: {0}")]
    InvalidConfig(String),
}

/// Where the hand stands after an accepted action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Progress {
    AwaitingAction { seat: usize, street: Street },
    HandComplete,
}

/// How one pot was settled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PotResult {
    pub amount: u64,
    pub eligible: Vec<usize>,
    /// Winning seats, clockwise from the seat left of the button.
    pub winners: Vec<usize>,
    /// Chips paid to each winner, same order as `winners`.
    pub payouts: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowdownResult {
    pub pots: Vec<PotResult>,
    /// Evaluated rank per seat; `None` for folded seats or an uncontested hand.
    pub ranks: Vec<Option<HandRank>>,
    /// Everyone else folded: no cards were compared.
    pub uncontested: bool,
}

impl ShowdownResult {
    /// Every seat that won chips, in first-awarded order.
    pub fn winners(&self) -> Vec<usize> {
        let mut seats: Vec<usize> = Vec::new();
        for seat in self.pots.iter().flat_map(|p| p.winners.iter().copied()) {
            if !seats.contains(&seat) {
                seats.push(seat);
            }
        }
        seats
    }
}

/// Divide `amount` evenly; the remainder goes to the first winner.
fn split_pot(amount: u64, winners: &[usize]) -> Vec<u64> {
    if winners.is_empty() {
        return Vec::new();
    }
    let share = amount / winners.len() as u64;
    let remainder = amount % winners.len() as u64;
    let mut payouts = vec![share; winners.len()];
    payouts[0] += remainder;
    payouts
}

/// One hand from the deal to settlement.
///
/// Players are indexed by seat. The hand owns its deck and players; a
/// [`Table`] hands stacks in and takes them back with [`Table::complete_hand`].
#[derive(Debug, Clone)]
pub struct Hand {
    config: TableConfig,
    players: Vec<Player>,
    deck: Deck,
    board: Board,
    burned: Vec<Card>,
    dealer: usize,
    street: Street,
    ledger: PotLedger,
    round: Option<BettingRound>,
    history: HandHistory,
    result: Option<ShowdownResult>,
    starting_stacks: Vec<u64>,
}

impl Hand {
    /// Deal a new hand and open preflop betting.
    ///
    /// Seats with an empty stack sit out. Hole cards go out in two passes in
    /// seat order; blinds are posted left of `dealer`.
    pub fn new(
        config: TableConfig,
        mut players: Vec<Player>,
        dealer: usize,
        deck: Deck,
    ) -> Result<Self, GameError> {
        config.validate().map_err(|e| GameError::InvalidConfig(e.to_string()))?;
        if players.len() > MAX_PLAYERS {
            return Err(GameError::TooManyPlayers { max: MAX_PLAYERS, got: players.len() });
        }
        for (seat, p) in players.iter_mut().enumerate() {
            p.seat = seat;
            p.reset_for_hand();
        }
        let seated = players.iter().filter(|p| p.is_live()).count();
        if seated < 2 {
            return Err(GameError::NotEnoughPlayers(seated));
        }
        let dealer = dealer % players.len();
        let starting_stacks = players.iter().map(|p| p.stack).collect();

        let mut hand = Self {
            config,
            players,
            deck,
            board: Board::new(),
            burned: Vec::new(),
            dealer,
            street: Street::Idle,
            ledger: PotLedger::new(),
            round: None,
            history: HandHistory::new(),
            result: None,
            starting_stacks,
        };
        hand.deal_hole_cards()?;
        hand.open_preflop()?;
        Ok(hand)
    }

    fn deal_hole_cards(&mut self) -> Result<(), GameError> {
        let seats: Vec<usize> =
            self.players.iter().filter(|p| p.is_live()).map(|p| p.seat).collect();
        let mut first = Vec::with_capacity(seats.len());
        for _ in &seats {
            first.push(self.deck.draw().ok_or(GameError::DeckExhausted)?);
        }
        for (&seat, a) in seats.iter().zip(first) {
            let b = self.deck.draw().ok_or(GameError::DeckExhausted)?;
            let hole = HoleCards::try_new(a, b).map_err(EvalError::from)?;
            self.players[seat].hole = Some(hole);
        }
        Ok(())
    }

    fn open_preflop(&mut self) -> Result<(), GameError> {
        self.street = Street::Preflop;
        let round = BettingRound::start(
            Street::Preflop,
            &self.config,
            self.dealer,
            &mut self.players,
            &mut self.ledger,
        );
        if let Some(b) = round.blinds() {
            let street = Street::Preflop;
            self.history.record(b.small_seat, HistoryVerb::SmallBlind, Some(b.small_paid), street);
            self.history.record(b.big_seat, HistoryVerb::BigBlind, Some(b.big_paid), street);
        }
        log::debug!("hand opens: dealer {}, {} seated", self.dealer, self.live_count());
        self.round = Some(round);
        self.advance()
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cards burned before the flop, turn and river.
    pub fn burned(&self) -> &[Card] {
        &self.burned
    }

    pub fn dealer(&self) -> usize {
        self.dealer
    }

    pub fn street(&self) -> Street {
        self.street
    }

    /// Chips currently in the pot (zero once settled).
    pub fn pot(&self) -> u64 {
        self.ledger.total()
    }

    pub fn round(&self) -> Option<&BettingRound> {
        self.round.as_ref()
    }

    pub fn history(&self) -> &HandHistory {
        &self.history
    }

    pub fn is_complete(&self) -> bool {
        self.result.is_some()
    }

    /// Settlement of a finished hand.
    pub fn evaluate_showdown(&self) -> Option<&ShowdownResult> {
        self.result.as_ref()
    }

    pub fn pending_decision(&self) -> Option<PendingDecision> {
        self.round.as_ref()?.pending_decision(&self.players)
    }

    /// Stack change per seat since the deal.
    pub fn net_changes(&self) -> Vec<i64> {
        self.players
            .iter()
            .zip(&self.starting_stacks)
            .map(|(p, &s)| p.stack as i64 - s as i64)
            .collect()
    }

    fn live_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_live()).count()
    }

    /// Apply one betting decision and run the hand forward as far as it can go
    /// without another decision: street deals, fast-forward and settlement.
    pub fn apply_action(&mut self, seat: usize, action: Action) -> Result<Progress, GameError> {
        if self.is_complete() {
            return Err(GameError::HandComplete);
        }
        let round = self.round.as_mut().ok_or(GameError::HandComplete)?;
        let applied = round.apply(seat, action, &mut self.players, &mut self.ledger)?;
        self.record_action(&applied);
        if applied.outcome == RoundOutcome::Closed || self.live_count() <= 1 {
            self.advance()?;
        }
        Ok(self.progress())
    }

    /// Apply the timeout default (fold to a bet, check otherwise) for `seat`.
    pub fn apply_timeout(&mut self, seat: usize) -> Result<Progress, GameError> {
        if self.is_complete() {
            return Err(GameError::HandComplete);
        }
        let decision = self.pending_decision().ok_or(ActionError::RoundClosed)?;
        if decision.seat != seat {
            return Err(ActionError::OutOfTurn { expected: decision.seat, got: seat }.into());
        }
        let action = decision.default_action();
        log::warn!("seat {seat} timed out on the {}, defaulting to {action}", self.street);
        self.apply_action(seat, action)
    }

    fn progress(&self) -> Progress {
        match self.pending_decision() {
            Some(d) if !self.is_complete() => {
                Progress::AwaitingAction { seat: d.seat, street: self.street }
            }
            _ => Progress::HandComplete,
        }
    }

    fn record_action(&mut self, applied: &AppliedAction) {
        let (verb, amount) = match applied.action {
            Action::Fold => (HistoryVerb::Fold, None),
            Action::Check => (HistoryVerb::Check, None),
            Action::Call => (HistoryVerb::Call, Some(applied.paid)),
            Action::Bet => (HistoryVerb::Bet, Some(applied.current_bet)),
            Action::Raise => (HistoryVerb::RaiseTo, Some(applied.current_bet)),
        };
        self.history.record(applied.seat, verb, amount, self.street);
    }

    /// Move past every closed round: settle a fold-out, deal the next street,
    /// or run out the board when at most one player can still bet.
    fn advance(&mut self) -> Result<(), GameError> {
        loop {
            if self.live_count() <= 1 {
                return self.settle_fold_out();
            }
            if let Some(round) = &self.round {
                if !round.is_closed(&self.players) {
                    return Ok(());
                }
            }
            if self.street == Street::River {
                return self.showdown();
            }

            let next = self.street.next();
            self.deal_street(next)?;
            self.street = next;
            let bettors = self.players.iter().filter(|p| p.can_act()).count();
            if bettors <= 1 {
                log::debug!("no betting possible, running out the {next}");
                self.round = None;
            } else {
                self.round = Some(BettingRound::start(
                    next,
                    &self.config,
                    self.dealer,
                    &mut self.players,
                    &mut self.ledger,
                ));
            }
        }
    }

    fn deal_street(&mut self, street: Street) -> Result<(), GameError> {
        let burn = self.deck.burn().ok_or(GameError::DeckExhausted)?;
        let cards = self.deck.draw_n(street.cards_dealt()).ok_or(GameError::DeckExhausted)?;
        self.burned.push(burn);
        log::debug!(
            "{street}: {}",
            cards.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
        );
        self.board.extend(cards);
        debug_assert_eq!(self.board.len(), street.board_len());
        Ok(())
    }

    /// Everyone else folded: the last live player takes every pot unseen.
    fn settle_fold_out(&mut self) -> Result<(), GameError> {
        let n = self.players.len();
        let pots = PotLedger::partition_side_pots(&self.players);
        let mut results = Vec::with_capacity(pots.len());
        for SidePot { amount, eligible } in pots {
            let winners = eligible.clone();
            let payouts = split_pot(amount, &winners);
            self.pay(&winners, &payouts);
            results.push(PotResult { amount, eligible, winners, payouts });
        }
        self.finish(ShowdownResult { pots: results, ranks: vec![None; n], uncontested: true });
        Ok(())
    }

    /// Rank every live hand and settle each side pot on its own.
    fn showdown(&mut self) -> Result<(), GameError> {
        self.street = Street::Showdown;
        let n = self.players.len();
        let mut ranks: Vec<Option<HandRank>> = vec![None; n];
        for p in self.players.iter().filter(|p| p.is_live()) {
            if let Some(hole) = &p.hole {
                ranks[p.seat] = Some(evaluate_holdem(hole, &self.board)?);
            }
        }

        let start = (self.dealer + 1) % n;
        let pots = PotLedger::partition_side_pots(&self.players);
        let mut results = Vec::with_capacity(pots.len());
        for SidePot { amount, eligible } in pots {
            let best = eligible.iter().filter_map(|&s| ranks[s]).max();
            let mut winners: Vec<usize> =
                eligible.iter().copied().filter(|&s| best.is_some() && ranks[s] == best).collect();
            winners.sort_by_key(|&s| (s + n - start) % n);
            let payouts = split_pot(amount, &winners);
            self.pay(&winners, &payouts);
            results.push(PotResult { amount, eligible, winners, payouts });
        }
        self.finish(ShowdownResult { pots: results, ranks, uncontested: false });
        Ok(())
    }

    fn pay(&mut self, winners: &[usize], payouts: &[u64]) {
        let verb = if winners.len() > 1 { HistoryVerb::Split } else { HistoryVerb::Win };
        for (&seat, &amount) in winners.iter().zip(payouts) {
            self.ledger.award(&mut self.players[seat], amount);
            self.history.record(seat, verb, Some(amount), self.street);
        }
    }

    fn finish(&mut self, result: ShowdownResult) {
        self.street = Street::Showdown;
        self.round = None;
        debug_assert_eq!(self.ledger.total(), 0, "pot not fully paid out");
        debug_assert_eq!(
            self.players.iter().map(|p| p.stack).sum::<u64>(),
            self.starting_stacks.iter().sum::<u64>(),
            "chips created or destroyed"
        );
        for (i, pot) in result.pots.iter().enumerate() {
            log::info!(
                "pot {i}: {} chips to {:?} (eligible {:?}){}",
                pot.amount,
                pot.winners,
                pot.eligible,
                if result.uncontested { ", uncontested" } else { "" }
            );
        }
        self.result = Some(result);
    }
}

/// Stacks and button across hands.
#[derive(Debug, Clone)]
pub struct Table {
    config: TableConfig,
    players: Vec<Player>,
    dealer: Option<usize>,
    hands_played: u64,
}

/// What a finished hand did to the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandSummary {
    pub hand_number: u64,
    pub dealer: usize,
    pub board: Vec<Card>,
    pub result: ShowdownResult,
    pub net: Vec<i64>,
    pub stacks: Vec<u64>,
}

impl Table {
    pub fn new<I, S>(config: TableConfig, names: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        config.validate().map_err(|e| GameError::InvalidConfig(e.to_string()))?;
        let players: Vec<Player> = names
            .into_iter()
            .enumerate()
            .map(|(seat, name)| Player::new(seat, name, config.starting_stack))
            .collect();
        if players.len() < 2 {
            return Err(GameError::NotEnoughPlayers(players.len()));
        }
        if players.len() > MAX_PLAYERS {
            return Err(GameError::TooManyPlayers { max: MAX_PLAYERS, got: players.len() });
        }
        Ok(Self { config, players, dealer: None, hands_played: 0 })
    }

    /// A table of `n` players named `P1..Pn`.
    pub fn with_seats(config: TableConfig, n: usize) -> Result<Self, GameError> {
        Self::new(config, (1..=n).map(|i| format!("P{i}")))
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Button seat of the last hand started, if any.
    pub fn dealer(&self) -> Option<usize> {
        self.dealer
    }

    pub fn hands_played(&self) -> u64 {
        self.hands_played
    }

    /// Seats that still have chips.
    pub fn players_with_chips(&self) -> usize {
        self.players.iter().filter(|p| p.stack > 0).count()
    }

    /// Move the button to the next seat with chips and deal from `deck`.
    pub fn start_hand(&mut self, deck: Deck) -> Result<Hand, GameError> {
        let with_chips = self.players_with_chips();
        if with_chips < 2 {
            return Err(GameError::NotEnoughPlayers(with_chips));
        }
        let n = self.players.len();
        let from = self.dealer.unwrap_or(n - 1);
        let dealer = (1..=n)
            .map(|k| (from + k) % n)
            .find(|&s| self.players[s].stack > 0)
            .unwrap_or(0);
        self.dealer = Some(dealer);
        Hand::new(self.config.clone(), self.players.clone(), dealer, deck)
    }

    /// Take back the stacks of a finished hand.
    pub fn complete_hand(&mut self, hand: Hand) -> Result<HandSummary, GameError> {
        let Some(result) = hand.result.clone() else {
            return Err(GameError::HandInProgress);
        };
        for p in &hand.players {
            if let Some(seat) = self.players.get_mut(p.seat) {
                seat.stack = p.stack;
            }
        }
        self.hands_played += 1;
        let summary = HandSummary {
            hand_number: self.hands_played,
            dealer: hand.dealer,
            board: hand.board.as_slice().to_vec(),
            result,
            net: hand.net_changes(),
            stacks: self.players.iter().map(|p| p.stack).collect(),
        };
        log::info!("hand #{} complete, stacks {:?}", summary.hand_number, summary.stacks);
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn seats(stacks: &[u64]) -> Vec<Player> {
        stacks.iter().enumerate().map(|(i, &s)| Player::new(i, format!("P{}", i + 1), s)).collect()
    }

    /// Deck drawing `cards` in order, then the rest of a standard deck.
    fn deck(cards: &str) -> Deck {
        let mut order = parse_cards(cards).unwrap();
        for c in Deck::standard().draw_n(52).unwrap() {
            if !order.contains(&c) {
                order.push(c);
            }
        }
        Deck::stacked(order).unwrap()
    }

    #[test]
    fn split_pot_gives_remainder_to_first() {
        assert_eq!(split_pot(25, &[2, 0]), vec![13, 12]);
        assert_eq!(split_pot(30, &[1, 2, 0]), vec![10, 10, 10]);
        assert_eq!(split_pot(31, &[1, 2, 0]), vec![11, 10, 10]);
        assert!(split_pot(10, &[]).is_empty());
    }

    #[test]
    fn hole_cards_dealt_in_two_passes() {
        // seat 0 gets 1st and 3rd card, seat 1 gets 2nd and 4th
        let cards = deck("As Kd Ah Kc");
        let hand = Hand::new(TableConfig::default(), seats(&[1000, 1000]), 0, cards).unwrap();
        assert_eq!(hand.players()[0].hole().unwrap().as_array(), parse_cards("As Ah").unwrap()[..]);
        assert_eq!(hand.players()[1].hole().unwrap().as_array(), parse_cards("Kd Kc").unwrap()[..]);
    }

    #[test]
    fn busted_seats_sit_out() {
        let players = seats(&[1000, 0, 1000]);
        let hand = Hand::new(TableConfig::default(), players, 0, Deck::standard()).unwrap();
        assert!(hand.players()[1].is_folded());
        assert!(hand.players()[1].hole().is_none());
        let blinds = hand.round().unwrap().blinds().unwrap();
        assert_eq!((blinds.small_seat, blinds.big_seat), (2, 0));
    }

    #[test]
    fn one_seated_player_cannot_start() {
        let err =
            Hand::new(TableConfig::default(), seats(&[1000, 0]), 0, Deck::standard()).unwrap_err();
        assert_eq!(err, GameError::NotEnoughPlayers(1));
    }

    #[test]
    fn short_deck_is_exhausted() {
        let short = Deck::stacked(parse_cards("As Kd Ah").unwrap()).unwrap();
        let err = Hand::new(TableConfig::default(), seats(&[1000, 1000]), 0, short).unwrap_err();
        assert_eq!(err, GameError::DeckExhausted);
    }

    #[test]
    fn fold_out_awards_pot_without_evaluation() {
        let mut hand =
            Hand::new(TableConfig::default(), seats(&[1000, 1000, 1000]), 0, Deck::standard())
                .unwrap();
        // dealer 0, SB 1, BB 2: seat 0 acts first
        hand.apply_action(0, Action::Fold).unwrap();
        let progress = hand.apply_action(1, Action::Fold).unwrap();
        assert_eq!(progress, Progress::HandComplete);
        let result = hand.evaluate_showdown().unwrap();
        assert!(result.uncontested);
        assert!(result.ranks.iter().all(Option::is_none));
        assert_eq!(result.winners(), vec![2]);
        assert_eq!(hand.players()[2].stack(), 1010);
        assert_eq!(hand.net_changes(), vec![0, -10, 10]);
        assert!(hand.board().is_empty());
        assert_eq!(hand.apply_action(2, Action::Check), Err(GameError::HandComplete));
    }

    #[test]
    fn timeout_applies_default_action() {
        let mut hand =
            Hand::new(TableConfig::default(), seats(&[1000, 1000, 1000]), 0, Deck::standard())
                .unwrap();
        hand.apply_timeout(0).unwrap();
        assert!(hand.players()[0].is_folded());
        assert_eq!(
            hand.apply_timeout(2),
            Err(GameError::Action(ActionError::OutOfTurn { expected: 1, got: 2 }))
        );
    }

    #[test]
    fn check_down_burns_and_reaches_showdown() {
        let mut hand =
            Hand::new(TableConfig::default(), seats(&[1000, 1000]), 0, Deck::standard()).unwrap();
        // heads-up: SB seat 1 acts first preflop
        hand.apply_action(1, Action::Call).unwrap();
        hand.apply_action(0, Action::Check).unwrap();
        assert_eq!(hand.street(), Street::Flop);
        assert_eq!(hand.board().len(), 3);
        for street in [Street::Flop, Street::Turn, Street::River] {
            assert_eq!(hand.street(), street);
            hand.apply_action(1, Action::Check).unwrap();
            hand.apply_action(0, Action::Check).unwrap();
        }
        assert!(hand.is_complete());
        assert_eq!(hand.street(), Street::Showdown);
        assert_eq!(hand.burned().len(), 3);
        assert_eq!(hand.board().len(), 5);
        assert_eq!(hand.pot(), 0);
        assert_eq!(hand.players().iter().map(|p| p.stack()).sum::<u64>(), 2000);
    }
}
