//! # svarka-ai: Computer Opponents for Svarka
//!
//! Decides actions for computer-controlled seats. The engine never calls
//! into this crate; the adapter asks an [`AIOpponent`] for a move whenever
//! an AI seat is current and feeds the result back through
//! `svarka_engine::engine::apply_action`.
//!
//! ## Core Components
//!
//! - [`AIOpponent`] - Trait defining the interface for AI decision-making
//! - [`policy`] - Tunable banded policy ([`PolicyConfig`], [`decide`], [`wants_rebuy`])
//! - [`baseline`] - Baseline AI built on the default policy
//! - [`create_ai`] - Factory function for creating AI opponents
//!
//! ## Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//! use svarka_ai::{create_ai, PolicyConfig};
//! use svarka_engine::engine::{apply_action, start_new_round};
//! use svarka_engine::game::{Lobby, TableConfig, TableState};
//! use svarka_engine::player::Seat;
//!
//! let ai = create_ai("baseline", PolicyConfig::default()).expect("known AI");
//! let seats = vec![Seat::ai("m", "Maria", 200), Seat::ai("p", "Petar", 200)];
//! let table = TableState::new(TableConfig::preset(Lobby::Beginner), seats, 42).unwrap();
//! let state = start_new_round(&table).unwrap();
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(7);
//! let id = state.current_player().unwrap().id().clone();
//! let action = ai.get_action(&state, &id, &mut rng);
//! let next = apply_action(&state, &id, action).unwrap();
//! assert_eq!(next.total_chips(), 400);
//! ```
//!
//! ## AI Types
//!
//! - `"baseline"` - banded policy with configurable probabilities

use rand::RngCore;
use svarka_engine::game::TableState;
use svarka_engine::player::{PlayerAction, PlayerId};

pub mod baseline;
pub mod policy;

pub use policy::{decide, wants_rebuy, PolicyConfig, PolicyError};

/// Interface for computer opponents.
///
/// Implementations hold no per-round state; everything they need is in the
/// snapshot, and randomness comes from the caller so runs can be replayed.
pub trait AIOpponent: Send + Sync {
    /// Choose the next action for `player_id`, who should be the current player.
    fn get_action(
        &self,
        state: &TableState,
        player_id: &PlayerId,
        rng: &mut dyn RngCore,
    ) -> PlayerAction;

    /// Answer a tie-break rebuy offer.
    fn wants_rebuy(&self, state: &TableState, player_id: &PlayerId) -> bool;

    fn name(&self) -> &str;
}

/// Factory function to create AI opponents by type string.
///
/// Returns `None` for unknown types.
///
/// ```rust
/// use svarka_ai::{create_ai, PolicyConfig};
///
/// let ai = create_ai("baseline", PolicyConfig::default()).unwrap();
/// assert_eq!(ai.name(), "BaselineAI");
/// assert!(create_ai("oracle", PolicyConfig::default()).is_none());
/// ```
pub fn create_ai(ai_type: &str, config: PolicyConfig) -> Option<Box<dyn AIOpponent>> {
    match ai_type {
        "baseline" => Some(Box::new(baseline::BaselineAI::with_config(config))),
        _ => None,
    }
}
