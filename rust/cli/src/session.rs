//! A table session as the CLI adapter sees it.
//!
//! [`Session`] owns the current snapshot and is the only place new snapshots
//! are accepted, so every transition goes through the chip conservation
//! check.

use rand::RngCore;
use svarka_ai::AIOpponent;
use svarka_engine::engine::{apply_action, decline_tie_break, join_tie_break};
use svarka_engine::errors::GameError;
use svarka_engine::game::TableState;
use svarka_engine::player::{PlayerAction, PlayerId, Seat};

use crate::error::CliError;

pub const AI_NAMES: [&str; 9] = [
    "Maria", "Petar", "Georgi", "Ivan", "Elena", "Dimitar", "Sofia", "Nikola", "Vesela",
];

/// Seats for `count` computer players with ids `ai1`, `ai2`, …
pub fn ai_seats(count: usize, balance: u32) -> Vec<Seat> {
    (0..count)
        .map(|i| {
            let name = AI_NAMES[i % AI_NAMES.len()];
            Seat::ai(format!("ai{}", i + 1), name, balance)
        })
        .collect()
}

pub struct Session {
    state: TableState,
    total_chips: u64,
}

impl Session {
    pub fn new(state: TableState) -> Self {
        let total_chips = state.total_chips();
        Self { state, total_chips }
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    /// Accept the next snapshot if no chips were created or lost.
    pub fn advance(&mut self, next: TableState) -> Result<&TableState, CliError> {
        let actual = next.total_chips();
        if actual != self.total_chips {
            return Err(CliError::Conservation {
                round: next.round(),
                expected: self.total_chips,
                actual,
            });
        }
        self.state = next;
        Ok(&self.state)
    }

    /// Decide and apply the current AI player's move as one step.
    pub fn ai_turn(
        &mut self,
        ai: &dyn AIOpponent,
        rng: &mut dyn RngCore,
    ) -> Result<(PlayerId, PlayerAction), CliError> {
        let id = self
            .state
            .current_player()
            .map(|p| p.id().clone())
            .ok_or(GameError::BettingClosed {
                phase: self.state.phase(),
            })?;
        let action = ai.get_action(&self.state, &id, rng);
        let next = apply_action(&self.state, &id, action.clone())?;
        self.advance(next)?;
        Ok((id, action))
    }

    pub fn answer_rebuy(&mut self, id: &PlayerId, join: bool) -> Result<(), CliError> {
        let next = if join {
            join_tie_break(&self.state, id)?
        } else {
            decline_tie_break(&self.state, id)?
        };
        self.advance(next)?;
        Ok(())
    }

    pub fn name_of(&self, id: &PlayerId) -> String {
        self.state
            .player(id)
            .map(|p| p.name().to_string())
            .unwrap_or_else(|| id.to_string())
    }
}
