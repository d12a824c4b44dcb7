use river_rat::betting::Action;
use river_rat::cards::parse_cards;
use river_rat::config::{StreetBetUnits, TableConfig};
use river_rat::deck::Deck;
use river_rat::game::{Hand, Progress};
use river_rat::ledger::SidePot;
use river_rat::player::Player;
use river_rat::street::Street;

fn seats(stacks: &[u64]) -> Vec<Player> {
    stacks.iter().enumerate().map(|(i, &s)| Player::new(i, format!("P{}", i + 1), s)).collect()
}

/// Deck that draws `cards` first, then the remaining cards in a fixed order.
fn stacked(cards: &str) -> Deck {
    let mut order = parse_cards(cards).expect("valid cards");
    for c in Deck::standard().draw_n(52).expect("full deck") {
        if !order.contains(&c) {
            order.push(c);
        }
    }
    Deck::stacked(order).expect("distinct cards")
}

fn side_pots(hand: &Hand) -> Vec<SidePot> {
    hand.evaluate_showdown()
        .expect("hand complete")
        .pots
        .iter()
        .map(|p| SidePot { amount: p.amount, eligible: p.eligible.clone() })
        .collect()
}

#[test]
fn equal_all_ins_make_one_pot() {
    let mut hand =
        Hand::new(TableConfig::default(), seats(&[50, 50]), 0, Deck::shuffled_seeded(3)).unwrap();
    // heads-up: seat 1 posts the small blind and acts first
    hand.apply_action(1, Action::Raise).unwrap();
    hand.apply_action(0, Action::Raise).unwrap();
    assert!(hand.players()[0].is_all_in());
    // only 10 behind facing 10: the raise is applied as a call
    let progress = hand.apply_action(1, Action::Raise).unwrap();

    assert_eq!(progress, Progress::HandComplete);
    assert_eq!(side_pots(&hand), vec![SidePot { amount: 100, eligible: vec![0, 1] }]);
    assert_eq!(hand.board().len(), 5);
    assert_eq!(hand.burned().len(), 3);
    let total: u64 = hand.players().iter().map(|p| p.stack()).sum();
    assert_eq!(total, 100);
}

#[test]
fn short_all_in_splits_main_and_side_pot() {
    // A (seat 0) holds aces, B kings, C queens; the board misses everyone.
    let deck = stacked("As Ks Qs Ah Kh Qh 2c 7d 8c 3h 2d Jd 2h 4c");
    let mut hand = Hand::new(TableConfig::default(), seats(&[50, 100, 100]), 0, deck).unwrap();

    hand.apply_action(0, Action::Raise).unwrap(); // to 40
    hand.apply_action(1, Action::Raise).unwrap(); // to 60
    hand.apply_action(2, Action::Raise).unwrap(); // to 80, cap reached
    hand.apply_action(0, Action::Raise).unwrap(); // capped and short: all-in call for 50
    hand.apply_action(1, Action::Call).unwrap();
    assert_eq!(hand.street(), Street::Flop);

    hand.apply_action(1, Action::Bet).unwrap();
    let progress = hand.apply_action(2, Action::Call).unwrap();
    assert_eq!(progress, Progress::HandComplete);

    assert_eq!(
        side_pots(&hand),
        vec![
            SidePot { amount: 150, eligible: vec![0, 1, 2] },
            SidePot { amount: 100, eligible: vec![1, 2] },
        ]
    );
    let stacks: Vec<u64> = hand.players().iter().map(|p| p.stack()).collect();
    assert_eq!(stacks, vec![150, 100, 0]);
    let result = hand.evaluate_showdown().unwrap();
    assert_eq!(result.pots[0].winners, vec![0]);
    assert_eq!(result.pots[1].winners, vec![1]);
}

#[test]
fn folded_chips_fund_pots_they_cannot_win() {
    let config = TableConfig {
        bet_units: StreetBetUnits { preflop: 10, ..StreetBetUnits::default() },
        ..TableConfig::default()
    };
    let mut hand =
        Hand::new(config, seats(&[1000, 1000, 1000]), 0, Deck::shuffled_seeded(11)).unwrap();
    hand.apply_action(0, Action::Raise).unwrap(); // to 30
    hand.apply_action(1, Action::Raise).unwrap(); // to 40
    hand.apply_action(2, Action::Call).unwrap();
    hand.apply_action(0, Action::Fold).unwrap();
    assert_eq!(hand.players()[0].total_contribution(), 30);
    assert_eq!(hand.street(), Street::Flop);

    while let Some(d) = hand.pending_decision() {
        hand.apply_action(d.seat, Action::Check).unwrap();
    }

    let pots = side_pots(&hand);
    assert_eq!(
        pots,
        vec![
            SidePot { amount: 90, eligible: vec![1, 2] },
            SidePot { amount: 20, eligible: vec![1, 2] },
        ]
    );
    assert_eq!(pots.iter().map(|p| p.amount).sum::<u64>(), 110);
    assert_eq!(hand.players()[0].stack(), 970);
    let winnings: u64 = hand.players()[1..].iter().map(|p| p.stack()).sum();
    assert_eq!(winnings, 2000 - 80 + 110);
    assert!(hand.evaluate_showdown().unwrap().ranks[0].is_none());
}

#[test]
fn odd_chip_goes_to_first_winner_left_of_button() {
    let config = TableConfig { small_blind: 5, ..TableConfig::default() };
    // Broadway on board: every live hand plays the board.
    let deck = stacked("2c 4h 6c 3d 5s 7d 8h Ts Jh Qd 8s Kc 8d Ac");
    let mut hand = Hand::new(config, seats(&[1000, 1000, 1000]), 0, deck).unwrap();
    hand.apply_action(0, Action::Call).unwrap();
    hand.apply_action(1, Action::Fold).unwrap();
    hand.apply_action(2, Action::Check).unwrap();
    while let Some(d) = hand.pending_decision() {
        hand.apply_action(d.seat, Action::Check).unwrap();
    }

    let result = hand.evaluate_showdown().unwrap();
    assert_eq!(result.pots.len(), 2);
    // 15 from the 5-chip tier, 30 more from the 20-chip tier
    assert_eq!(result.pots[0].amount, 15);
    assert_eq!(result.pots[0].winners, vec![2, 0]);
    assert_eq!(result.pots[0].payouts, vec![8, 7]);
    assert_eq!(result.pots[1].amount, 30);
    assert_eq!(result.pots[1].payouts, vec![15, 15]);
    assert_eq!(hand.players()[2].stack(), 1003);
    assert_eq!(hand.players()[0].stack(), 1002);
    assert_eq!(hand.players()[1].stack(), 995);
}

#[test]
fn fold_out_wins_every_pot_unseen() {
    let players = seats(&[1000, 1000, 1000]);
    let mut hand =
        Hand::new(TableConfig::default(), players, 0, Deck::shuffled_seeded(5)).unwrap();
    hand.apply_action(0, Action::Raise).unwrap();
    hand.apply_action(1, Action::Fold).unwrap();
    hand.apply_action(2, Action::Fold).unwrap();

    let result = hand.evaluate_showdown().unwrap();
    assert!(result.uncontested);
    assert_eq!(result.winners(), vec![0]);
    assert_eq!(result.pots.iter().map(|p| p.amount).sum::<u64>(), 70);
    assert_eq!(hand.players()[0].stack(), 1030);
    assert!(hand.board().is_empty());
}

#[test]
fn short_big_blind_runs_out_without_a_decision() {
    let mut hand =
        Hand::new(TableConfig::default(), seats(&[5, 1000]), 0, Deck::shuffled_seeded(21)).unwrap();

    assert!(hand.pending_decision().is_none());
    assert!(hand.is_complete());
    assert_eq!(hand.board().len(), 5);
    assert_eq!(hand.burned().len(), 3);
    // the small blind's uncalled 5 comes straight back
    assert_eq!(
        side_pots(&hand),
        vec![
            SidePot { amount: 10, eligible: vec![0, 1] },
            SidePot { amount: 5, eligible: vec![1] },
        ]
    );
    let net = hand.net_changes();
    assert!(net[0] <= 5);
    assert!(net[1] >= -5);
    assert_eq!(net.iter().sum::<i64>(), 0);
}
