//! # Svarka CLI Library
//!
//! Command-line adapter over the Svarka engine and AI crates: interactive
//! play against computer opponents, AI-only simulation, dealing and hand
//! evaluation.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments and dispatches to a subcommand. Output goes
//! to the writers passed in, so tests drive the CLI with `Vec<u8>` buffers.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["svarka", "play", "--lobby", "beginner", "--rounds", "5"];
//! let code = svarka_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play rounds against AI opponents over stdin
//! - `sim`: Run AI-only rounds, optionally writing JSONL round records
//! - `deal`: Deal one round and show every evaluated hand
//! - `eval`: Evaluate a three-card hand
//! - `cfg`: Display the resolved configuration

use clap::Parser;
use std::io::{BufRead, Write};

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
mod logging;
pub mod session;
pub mod ui;
pub mod validation;

use cli::{Commands, SvarkaCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_eval_command, handle_play_command,
    handle_sim_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "deal", "eval", "cfg"];

/// Main entry point for the CLI application.
///
/// Reads interactive input from the process stdin.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["svarka", "deal", "--seed", "42"];
/// let code = svarka_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Same as [`run`] with an explicit input source for `play`.
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
    let cli = match SvarkaCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(e, out, err),
    };
    logging::init(cli.verbose);

    let result = match cli.cmd {
        Commands::Deal { seed, players } => handle_deal_command(seed, players, out),
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Play {
            rounds,
            seed,
            lobby,
        } => handle_play_command(rounds, seed, lobby, out, err, input),
        Commands::Sim {
            rounds,
            seed,
            players,
            output,
        } => handle_sim_command(rounds, seed, players, output, out, err),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn report_parse_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;
    // Help and version go to stdout and exit 0
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }
    let _ = writeln!(err, "{}", e);
    let _ = writeln!(err, "Usage: svarka <command> [options]\n");
    let _ = writeln!(err, "Commands:");
    for c in COMMANDS {
        let _ = writeln!(err, "  {}", c);
    }
    let _ = writeln!(err, "\nFor full help, run: svarka --help");
    exit_code::ERROR
}
