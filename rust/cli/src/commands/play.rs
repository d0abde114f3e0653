//! # Play Command
//!
//! Interactive Svarka against computer opponents.
//!
//! The human sits in the first seat and types actions on stdin; every AI
//! seat is driven by the baseline policy, one decide-and-apply step at a
//! time. Tie-break rebuy offers are asked of the human and answered by the
//! policy for AI seats. `q` (or EOF) ends the session.

use std::io::{BufRead, Write};

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use svarka_ai::{AIOpponent, create_ai};
use svarka_engine::engine::{apply_action, available_actions, start_new_round};
use svarka_engine::errors::GameError;
use svarka_engine::game::{Lobby, Phase, TableConfig, TableState};
use svarka_engine::player::{PlayerId, Seat};

use crate::config;
use crate::error::CliError;
use crate::formatters::{
    format_action, format_balances, format_evaluation, format_hand, format_winner,
};
use crate::io_utils::read_stdin_line;
use crate::session::{Session, ai_seats};
use crate::ui;
use crate::validation::{ParseResult, parse_player_action, parse_yes_no};

pub const HUMAN_ID: &str = "you";

/// What the human did with their turn.
enum Turn {
    Acted,
    Quit,
}

/// Handle the play command.
///
/// * `rounds` - stop after this many rounds (default: until quit or broke)
/// * `seed` - table seed; falls back to the configured seed, then random
/// * `lobby` - stake level; falls back to the configured lobby
pub fn handle_play_command(
    rounds: Option<u32>,
    seed: Option<u64>,
    lobby: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let lobby: Lobby = match lobby {
        Some(name) => name
            .parse()
            .map_err(|e: GameError| CliError::InvalidInput(e.to_string()))?,
        None => cfg.lobby,
    };
    if rounds == Some(0) {
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let rounds = rounds.unwrap_or(u32::MAX);
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let table = TableConfig::preset(lobby);
    let ai_count = cfg.ai_players.min(table.max_players - 1);
    if ai_count < cfg.ai_players {
        ui::display_warning(
            err,
            &format!(
                "{} seats only {} players; playing against {} opponents",
                table.name, table.max_players, ai_count
            ),
        )?;
    }

    let mut seats = vec![Seat::human(HUMAN_ID, "You", cfg.starting_balance)];
    seats.extend(ai_seats(ai_count, cfg.starting_balance));
    let ai = create_ai("baseline", cfg.policy.clone())
        .ok_or_else(|| CliError::InvalidInput("unknown AI type".into()))?;
    let mut rng = ChaCha20Rng::seed_from_u64(seed);

    writeln!(
        out,
        "play: lobby={} table=\"{}\" seed={}",
        lobby.as_str(),
        table.name,
        seed
    )?;
    writeln!(
        out,
        "Stakes: min bet {} max bet {}",
        table.min_bet,
        table
            .max_bet
            .map(|m| m.to_string())
            .unwrap_or_else(|| "none".into())
    )?;

    let mut session = Session::new(TableState::new(table, seats, seed)?);
    let human = PlayerId::from(HUMAN_ID);
    let mut played = 0u32;

    'rounds: while played < rounds {
        if session.state().player(&human).is_some_and(|p| p.balance() == 0) {
            writeln!(out, "You are out of chips.")?;
            break;
        }
        match start_new_round(session.state()) {
            Ok(next) => {
                session.advance(next)?;
            }
            Err(GameError::NotEnoughPlayers { .. }) => {
                writeln!(out, "Nobody is left to play against.")?;
                break;
            }
            Err(e) => return Err(e.into()),
        }
        played += 1;
        writeln!(out, "\nRound {}", played)?;
        show_own_hand(session.state(), &human, out)?;

        loop {
            match session.state().phase() {
                Phase::Betting => {
                    let is_ai = session.state().current_player().is_some_and(|p| p.is_ai());
                    if is_ai {
                        let (id, action) = session.ai_turn(ai.as_ref(), &mut rng)?;
                        writeln!(out, "{}: {}", session.name_of(&id), format_action(&action))?;
                    } else if let Turn::Quit = human_turn(&mut session, &human, out, err, stdin)? {
                        break 'rounds;
                    }
                }
                Phase::TieBreak => {
                    if let Turn::Quit =
                        run_tie_break(&mut session, &human, ai.as_ref(), out, err, stdin)?
                    {
                        break 'rounds;
                    }
                }
                Phase::RoundOver => {
                    announce_result(session.state(), out)?;
                    break;
                }
                Phase::PreDeal => break,
            }
        }
    }

    writeln!(out, "\nRounds played: {}", played)?;
    for line in format_balances(session.state()) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn show_own_hand(state: &TableState, human: &PlayerId, out: &mut dyn Write) -> Result<(), CliError> {
    if let Some(p) = state.player(human)
        && let Some(eval) = p.evaluation()
    {
        writeln!(out, "Your hand: {} {}", format_hand(p.hand()), format_evaluation(eval))?;
    }
    Ok(())
}

fn human_turn(
    session: &mut Session,
    human: &PlayerId,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Turn, CliError> {
    let state = session.state();
    let (balance, owed) = state
        .player(human)
        .map(|p| (p.balance(), p.to_call(state.last_bet())))
        .unwrap_or_default();
    let options: Vec<String> = available_actions(state)
        .iter()
        .map(|k| k.to_string())
        .collect();
    writeln!(
        out,
        "Pot: {}  To call: {}  Balance: {}",
        state.pot(),
        owed,
        balance
    )?;

    loop {
        ui::prompt(out, &format!("Your action ({}, q): ", options.join("/")))?;
        let Some(line) = read_stdin_line(stdin) else {
            return Ok(Turn::Quit);
        };
        match parse_player_action(&line) {
            ParseResult::Action(action) => {
                match apply_action(session.state(), human, action.clone()) {
                    Ok(next) => {
                        session.advance(next)?;
                        writeln!(out, "You: {}", format_action(&action))?;
                        return Ok(Turn::Acted);
                    }
                    Err(e) => ui::write_error(err, &format!("Invalid action: {}", e))?,
                }
            }
            ParseResult::Quit => return Ok(Turn::Quit),
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }
}

fn run_tie_break(
    session: &mut Session,
    human: &PlayerId,
    ai: &dyn AIOpponent,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Turn, CliError> {
    let state = session.state();
    let tied: Vec<String> = state
        .tied_player_ids()
        .iter()
        .map(|id| session.name_of(id))
        .collect();
    writeln!(
        out,
        "Tie between {}. The pot of {} carries into a tie-break.",
        tied.join(", "),
        state.pot()
    )?;

    let price = state.config().min_bet;
    let offered: Vec<PlayerId> = state.pending_rebuys().map(|p| p.id().clone()).collect();
    for id in offered {
        let join = if &id == human {
            match ask_rebuy(price, out, err, stdin)? {
                Some(answer) => answer,
                None => return Ok(Turn::Quit),
            }
        } else {
            ai.wants_rebuy(session.state(), &id)
        };
        session.answer_rebuy(&id, join)?;
        let verb = if join { "joins" } else { "sits out" };
        writeln!(out, "{} {} the tie-break", session.name_of(&id), verb)?;
    }

    let next = start_new_round(session.state())?;
    session.advance(next)?;
    writeln!(out, "Tie-break {}", session.state().tie_breaks())?;
    show_own_hand(session.state(), human, out)?;
    Ok(Turn::Acted)
}

/// `None` when the player quits.
fn ask_rebuy(
    price: u32,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Option<bool>, CliError> {
    loop {
        ui::prompt(out, &format!("Join the tie-break for {}? (y/n, q): ", price))?;
        let Some(line) = read_stdin_line(stdin) else {
            return Ok(None);
        };
        if matches!(line.to_ascii_lowercase().as_str(), "q" | "quit") {
            return Ok(None);
        }
        match parse_yes_no(&line) {
            Some(answer) => return Ok(Some(answer)),
            None => ui::write_error(err, "Please answer y or n")?,
        }
    }
}

fn announce_result(state: &TableState, out: &mut dyn Write) -> Result<(), CliError> {
    let Some(winner) = state.round_winner() else {
        return Ok(());
    };
    if !winner.uncontested {
        for p in state.active_players() {
            if let Some(eval) = p.evaluation() {
                writeln!(
                    out,
                    "  {}: {} {}",
                    p.name(),
                    format_hand(p.hand()),
                    format_evaluation(eval)
                )?;
            }
        }
    }
    writeln!(out, "{}", format_winner(winner))?;
    Ok(())
}
