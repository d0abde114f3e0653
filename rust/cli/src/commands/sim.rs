//! # Sim Command
//!
//! Plays a batch of rounds between AI seats only, optionally writing each
//! finished round as a JSONL record.

use std::io::Write;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use svarka_ai::create_ai;
use svarka_engine::engine::start_new_round;
use svarka_engine::errors::GameError;
use svarka_engine::game::{Phase, TableConfig, TableState};
use svarka_engine::logger::{RoundLogger, RoundRecord};
use svarka_engine::player::PlayerId;
use tracing::{debug, info};

use crate::config;
use crate::error::CliError;
use crate::formatters::format_balances;
use crate::session::{Session, ai_seats};

const DEFAULT_ROUNDS: u32 = 100;
const DEFAULT_PLAYERS: usize = 4;

/// Handle the sim command.
///
/// Stops early once fewer than two seats have chips left.
pub fn handle_sim_command(
    rounds: Option<u32>,
    seed: Option<u64>,
    players: Option<usize>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let rounds = rounds.unwrap_or(DEFAULT_ROUNDS);
    if rounds == 0 {
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let players = players.unwrap_or(DEFAULT_PLAYERS);
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let mut table = TableConfig::preset(cfg.lobby);
    table.max_players = table.max_players.max(players);

    let ai = create_ai("baseline", cfg.policy.clone())
        .ok_or_else(|| CliError::InvalidInput("unknown AI type".into()))?;
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut logger = output.as_deref().map(RoundLogger::create).transpose()?;

    let mut session = Session::new(TableState::new(
        table,
        ai_seats(players, cfg.starting_balance),
        seed,
    )?);
    info!(seed, players, rounds, "simulation started");

    let mut played = 0u32;
    while played < rounds {
        match start_new_round(session.state()) {
            Ok(next) => {
                session.advance(next)?;
            }
            Err(GameError::NotEnoughPlayers { .. }) => {
                writeln!(err, "Stopped early: only one player has chips left")?;
                break;
            }
            Err(e) => return Err(e.into()),
        }
        played += 1;

        loop {
            match session.state().phase() {
                Phase::Betting => {
                    session.ai_turn(ai.as_ref(), &mut rng)?;
                }
                Phase::TieBreak => {
                    let offered: Vec<PlayerId> = session
                        .state()
                        .pending_rebuys()
                        .map(|p| p.id().clone())
                        .collect();
                    for id in offered {
                        let join = ai.wants_rebuy(session.state(), &id);
                        session.answer_rebuy(&id, join)?;
                    }
                    let next = start_new_round(session.state())?;
                    session.advance(next)?;
                }
                Phase::RoundOver | Phase::PreDeal => break,
            }
        }

        let state = session.state();
        if let Some(winner) = state.round_winner() {
            debug!(round = state.round(), winner = %winner.player_id, pot = winner.pot, "round finished");
        }
        if let Some(logger) = logger.as_mut()
            && let Some(record) = RoundRecord::from_state(logger.next_id(), state)
        {
            logger.write(&record)?;
        }
    }

    writeln!(out, "Simulated: {} rounds", played)?;
    if let (Some(logger), Some(path)) = (logger.as_ref(), output.as_deref()) {
        info!(records = logger.written(), path, "round records written");
    }
    for line in format_balances(session.state()) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
