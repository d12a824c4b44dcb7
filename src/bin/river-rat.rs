use clap::Parser;
use river_rat::agents::{play_hand, DecisionProvider, RandomAgent};
use river_rat::config::TableConfig;
use river_rat::deck::Deck;
use river_rat::game::{HandSummary, Table};
use std::error::Error;
use std::path::PathBuf;

/// Headless fixed-limit Hold'em simulator: CPU agents play hands against each other.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of hands to play
    #[arg(long, default_value_t = 10)]
    hands: u64,
    /// Players at the table
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u64).range(2..=22))]
    players: u64,
    /// Seed for decks and agents; random when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// TOML table config (blinds, bet units, raise cap, starting stack)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print one JSON object per hand instead of text
    #[arg(long)]
    json: bool,
}

fn print_summary(summary: &HandSummary) {
    let board: Vec<String> = summary.board.iter().map(|c| c.to_string()).collect();
    let pots: Vec<String> = summary
        .result
        .pots
        .iter()
        .map(|p| format!("{} -> {:?}", p.amount, p.winners))
        .collect();
    println!(
        "hand {:>4}  button {}  board [{}]  pots {}  stacks {:?}",
        summary.hand_number,
        summary.dealer,
        board.join(" "),
        pots.join(", "),
        summary.stacks
    );
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => TableConfig::load(path)?,
        None => TableConfig::default(),
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("seed {seed}, {} players, {} hands", args.players, args.hands);

    let mut table = Table::with_seats(config, args.players as usize)?;
    let mut agents: Vec<Box<dyn DecisionProvider>> = (0..args.players)
        .map(|seat| {
            Box::new(RandomAgent::seeded(seed.wrapping_add(seat))) as Box<dyn DecisionProvider>
        })
        .collect();

    for n in 0..args.hands {
        if table.players_with_chips() < 2 {
            log::info!("one player left with chips after {n} hands");
            break;
        }
        let deck = Deck::shuffled_seeded(seed.wrapping_mul(31).wrapping_add(n));
        let mut hand = table.start_hand(deck)?;
        play_hand(&mut hand, &mut agents)?;
        let summary = table.complete_hand(hand)?;
        if args.json {
            println!("{}", serde_json::to_string(&summary)?);
        } else {
            print_summary(&summary);
        }
    }

    for p in table.players() {
        println!("{:<4} {:>6}", p.name(), p.stack());
    }
    Ok(())
}
