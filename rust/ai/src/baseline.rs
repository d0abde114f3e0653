//! Baseline AI for computer-controlled seats.
//!
//! Plays the banded policy from [`crate::policy`]: strong hands mostly
//! raise, medium pairs call when they can afford it, weak hands mostly fold
//! and occasionally bluff when nobody has bet.

use rand::RngCore;
use svarka_engine::game::TableState;
use svarka_engine::player::{PlayerAction, PlayerId};

use crate::AIOpponent;
use crate::policy::{PolicyConfig, decide, wants_rebuy};

/// Reference opponent driven entirely by a [`PolicyConfig`].
///
/// # Example
///
/// ```rust
/// use svarka_ai::baseline::BaselineAI;
/// use svarka_ai::AIOpponent;
///
/// let ai = BaselineAI::new();
/// assert_eq!(ai.name(), "BaselineAI");
/// assert_eq!(ai.config().max_raise_steps, 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaselineAI {
    config: PolicyConfig,
}

impl BaselineAI {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PolicyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }
}

impl AIOpponent for BaselineAI {
    /// Folds for an id that is not seated.
    fn get_action(
        &self,
        state: &TableState,
        player_id: &PlayerId,
        rng: &mut dyn RngCore,
    ) -> PlayerAction {
        let Some(player) = state.player(player_id) else {
            return PlayerAction::Fold;
        };
        decide(player, state, &self.config, rng)
    }

    fn wants_rebuy(&self, state: &TableState, player_id: &PlayerId) -> bool {
        state
            .player(player_id)
            .is_some_and(|p| wants_rebuy(p, state, &self.config))
    }

    fn name(&self) -> &str {
        "BaselineAI"
    }
}
