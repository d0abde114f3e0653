use thiserror::Error;

use crate::game::Phase;
use crate::player::PlayerId;

/// Broad error categories reported to the adapter.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Action from a player who is not current, or outside the phase that allows it
    InvalidTurn,
    /// Action that breaks a betting rule
    IllegalAction,
    /// A required minimum payment exceeds the player's balance
    InsufficientFunds,
    /// Table construction or dealing problems
    Setup,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IllegalAction {
    #[error("cannot check while {owed} is owed")]
    CheckWhileOwing { owed: u32 },
    #[error("amount must be greater than zero")]
    ZeroAmount,
    #[error("bet of {amount} is below the table minimum {minimum}")]
    BelowMinimum { amount: u32, minimum: u32 },
    #[error("bet of {amount} exceeds the table maximum {maximum}")]
    AboveMaximum { amount: u32, maximum: u32 },
    #[error("bet of {amount} does not reach the current bet {current}")]
    BelowCurrentBet { amount: u32, current: u32 },
    #[error("raise to {amount} must exceed the current bet {current}")]
    RaiseTooSmall { amount: u32, current: u32 },
    #[error("player is not offered a tie-break seat")]
    NotOfferedRebuy,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("It's not player {actual}'s turn (expected player {expected})")]
    NotPlayersTurn { expected: PlayerId, actual: PlayerId },
    #[error("Betting is closed while the table is in the {phase} phase")]
    BettingClosed { phase: Phase },
    #[error("A round is still being bet")]
    RoundInProgress,
    #[error("No tie-break is pending")]
    NoTieBreak,
    #[error("Player {0} already folded")]
    PlayerAlreadyFolded(PlayerId),
    #[error("Illegal action: {0}")]
    IllegalAction(#[from] IllegalAction),
    #[error("Insufficient funds: {required} required, {available} available")]
    InsufficientFunds { required: u32, available: u32 },
    #[error("Unknown player {0}")]
    UnknownPlayer(PlayerId),
    #[error("Duplicate player id {0}")]
    DuplicatePlayer(PlayerId),
    #[error("Need at least {required} funded players, have {available}")]
    NotEnoughPlayers { required: usize, available: usize },
    #[error("Table seats at most {maximum} players, got {requested}")]
    TooManyPlayers { maximum: usize, requested: usize },
    #[error("Deck exhausted: requested {requested}, remaining {remaining}")]
    DeckExhausted { requested: usize, remaining: usize },
    #[error("Invalid table configuration: {0}")]
    InvalidConfig(String),
}

impl GameError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::NotPlayersTurn { .. }
            | GameError::BettingClosed { .. }
            | GameError::RoundInProgress
            | GameError::NoTieBreak
            | GameError::PlayerAlreadyFolded(_)
            | GameError::UnknownPlayer(_) => ErrorKind::InvalidTurn,
            GameError::IllegalAction(_) => ErrorKind::IllegalAction,
            GameError::InsufficientFunds { .. } => ErrorKind::InsufficientFunds,
            GameError::DuplicatePlayer(_)
            | GameError::NotEnoughPlayers { .. }
            | GameError::TooManyPlayers { .. }
            | GameError::DeckExhausted { .. }
            | GameError::InvalidConfig(_) => ErrorKind::Setup,
        }
    }
}
