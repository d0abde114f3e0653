//! Deal command: deal one round and show every hand.

use std::io::Write;

use svarka_engine::engine::start_new_round;
use svarka_engine::game::{TableConfig, TableState};
use svarka_engine::player::Seat;

use crate::error::CliError;
use crate::formatters::{format_evaluation, format_hand};

const DEFAULT_PLAYERS: usize = 4;

/// Deals a round for `players` seats (default 4) and prints each hand with
/// its evaluation, followed by the best hand or the tied seats.
pub fn handle_deal_command(
    seed: Option<u64>,
    players: Option<usize>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let players = players.unwrap_or(DEFAULT_PLAYERS);
    let seats = (1..=players)
        .map(|i| Seat::human(format!("p{}", i), format!("P{}", i), 1))
        .collect();
    let table = TableState::new(
        TableConfig::new("Deal", 1, None, players),
        seats,
        seed,
    )?;
    let state = start_new_round(&table)?;

    writeln!(out, "Seed: {}", seed)?;
    let mut best = Vec::new();
    for p in state.players() {
        let Some(eval) = p.evaluation() else {
            continue;
        };
        writeln!(
            out,
            "{}: {} {}",
            p.name(),
            format_hand(p.hand()),
            format_evaluation(eval)
        )?;
        best.push((eval.rank_key(), p.name()));
    }
    let top = best.iter().map(|(k, _)| *k).max();
    let leaders: Vec<&str> = best
        .iter()
        .filter(|(k, _)| Some(*k) == top)
        .map(|(_, n)| *n)
        .collect();
    match leaders.as_slice() {
        [one] => writeln!(out, "Best: {}", one)?,
        many => writeln!(out, "Tie: {}", many.join(", "))?,
    }
    Ok(())
}
