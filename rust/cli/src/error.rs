//! Error types for the CLI application.
//!
//! Every command handler returns `Result<(), CliError>`; [`crate::run`]
//! prints the error and maps it to exit code `2`.

use svarka_ai::PolicyError;
use svarka_engine::errors::GameError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid user input or command-line arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Engine error: {0}")]
    Engine(#[from] GameError),

    #[error("AI policy error: {0}")]
    Policy(#[from] PolicyError),

    /// Chips appeared or vanished during a simulated session
    #[error("Chip conservation violated in round {round}: expected {expected}, found {actual}")]
    Conservation { round: u32, expected: u64, actual: u64 },
}
