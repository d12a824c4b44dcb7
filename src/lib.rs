//! river-rat: fixed-limit Texas Hold'em rules engine
//!
//! Goals:
//! - Deterministic betting, pot and side-pot accounting for fixed-limit play
//! - Seven-card hand evaluation without enumerating five-card subsets
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! The engine never asks for decisions. Callers read a
//! [`betting::PendingDecision`], pick an [`betting::Action`] and apply it; the
//! hand deals streets, runs out the board and settles pots on its own.
//!
//! ## Quick start: play a hand
//! ```
//! use river_rat::betting::Action;
//! use river_rat::config::TableConfig;
//! use river_rat::deck::Deck;
//! use river_rat::game::Table;
//!
//! let mut table = Table::with_seats(TableConfig::default(), 3).unwrap();
//! let mut hand = table.start_hand(Deck::shuffled_seeded(7)).unwrap();
//!
//! // Seat 0 has the button; seats 1 and 2 posted the blinds.
//! while let Some(decision) = hand.pending_decision() {
//!     let action = if decision.to_call > 0 { Action::Fold } else { Action::Check };
//!     hand.apply_action(decision.seat, action).unwrap();
//! }
//!
//! let summary = table.complete_hand(hand).unwrap();
//! assert_eq!(summary.result.winners(), vec![2]);
//! assert_eq!(table.players()[2].stack(), 1010);
//! ```
//!
//! ## Quick start: compare two hands
//! ```
//! use river_rat::evaluator::compare_holdem;
//! use river_rat::hand::{Board, HoleCards};
//! use std::cmp::Ordering;
//!
//! let board: Board = "Kc Qd Jh 3s 2c".parse().unwrap();
//! let aces: HoleCards = "As Ah".parse().unwrap();
//! let broadway: HoleCards = "Ad Tc".parse().unwrap();
//! assert_eq!(compare_holdem(&aces, &broadway, &board).unwrap(), Ordering::Less);
//! ```

pub mod agents;
pub mod betting;
pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod evaluator;
pub mod game;
pub mod hand;
pub mod history;
pub mod ledger;
pub mod player;
pub mod street;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
