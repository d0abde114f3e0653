//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use svarka_engine::game::{MAX_SEATS, MIN_PLAYERS};

#[derive(Parser, Debug)]
#[command(
    name = "svarka",
    version,
    about = "Svarka: the three-card game with the 7♣ Chechak wildcard"
)]
pub struct SvarkaCli {
    /// Log engine and AI decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deal one round and show every hand with its evaluation
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_parser = parse_seat_count)]
        players: Option<usize>,
    },
    /// Evaluate a three-card hand, e.g. `svarka eval 7♣ K♥ K♦`
    Eval {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Play against computer opponents over stdin
    Play {
        #[arg(long)]
        rounds: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// beginner, intermediate, advanced or legendary
        #[arg(long)]
        lobby: Option<String>,
    },
    /// Run an AI-only session and check chip conservation
    Sim {
        #[arg(long)]
        rounds: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_parser = parse_seat_count)]
        players: Option<usize>,
        /// Write one JSON round record per line to this file
        #[arg(long)]
        output: Option<String>,
    },
    /// Show the resolved configuration as JSON
    Cfg,
}

fn parse_seat_count(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if (MIN_PLAYERS..=MAX_SEATS).contains(&n) {
        Ok(n)
    } else {
        Err(format!(
            "players must be between {} and {}",
            MIN_PLAYERS, MAX_SEATS
        ))
    }
}
