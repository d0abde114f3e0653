//! Probabilistic betting policy for computer-controlled seats.
//!
//! The policy sorts a hand into one of three bands and picks an action with
//! band-specific probabilities. Every threshold and probability lives in
//! [`PolicyConfig`] so tables can be tuned without touching the code.

use rand::Rng;
use serde::{Deserialize, Serialize};
use svarka_engine::game::TableState;
use svarka_engine::hand::{try_evaluate, HandEvaluation, Score, Tier};
use svarka_engine::player::{Player, PlayerAction, TieBreakSeat};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PolicyError {
    #[error("{field} must be a probability between 0 and 1, got {value}")]
    Probability { field: &'static str, value: f64 },
    #[error("max_raise_steps must be at least 1")]
    NoRaiseSteps,
}

/// Tuning constants for [`decide`] and [`wants_rebuy`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Lowest tier played as a strong hand
    pub strong_tier: Tier,
    pub strong_raise_probability: f64,
    /// Raises go up by `min_bet × k` with `k` drawn from `1..=max_raise_steps`
    pub max_raise_steps: u32,
    /// A pair counts as a medium hand only when it scores above this many points
    pub medium_score_threshold: u16,
    pub medium_call_probability: f64,
    pub weak_fold_probability: f64,
    pub bluff_bet_probability: f64,
    pub rebuy_requires_balance_above_pot: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            strong_tier: Tier::Triple,
            strong_raise_probability: 0.8,
            max_raise_steps: 2,
            medium_score_threshold: 16,
            medium_call_probability: 0.6,
            weak_fold_probability: 0.9,
            bluff_bet_probability: 0.1,
            rebuy_requires_balance_above_pot: true,
        }
    }
}

impl PolicyConfig {
    pub fn validate(&self) -> Result<(), PolicyError> {
        let probabilities = [
            ("strong_raise_probability", self.strong_raise_probability),
            ("medium_call_probability", self.medium_call_probability),
            ("weak_fold_probability", self.weak_fold_probability),
            ("bluff_bet_probability", self.bluff_bet_probability),
        ];
        for (field, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(PolicyError::Probability { field, value });
            }
        }
        if self.max_raise_steps == 0 {
            return Err(PolicyError::NoRaiseSteps);
        }
        Ok(())
    }

    fn band(&self, eval: &HandEvaluation) -> Band {
        if eval.tier >= self.strong_tier {
            Band::Strong
        } else if eval.tier >= Tier::Pair
            && eval.score > Score::from_points(self.medium_score_threshold)
        {
            Band::Medium
        } else {
            Band::Weak
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Band {
    Strong,
    Medium,
    Weak,
}

/// Choose an action for `player` at `state`.
///
/// Only the random source makes this impure; the same seed, player and
/// snapshot always produce the same action. Bet and raise targets never
/// exceed what the player can pay or the table maximum.
pub fn decide<R: Rng + ?Sized>(
    player: &Player,
    state: &TableState,
    config: &PolicyConfig,
    rng: &mut R,
) -> PlayerAction {
    let last_bet = state.last_bet();
    let owed = player.to_call(last_bet);

    let Some(eval) = player
        .evaluation()
        .cloned()
        .or_else(|| try_evaluate(player.hand()))
    else {
        return if owed == 0 {
            PlayerAction::Check
        } else {
            PlayerAction::Fold
        };
    };

    let band = config.band(&eval);
    let action = match band {
        Band::Strong => {
            let raise = if rng.random_bool(config.strong_raise_probability) {
                raise_target(player, state, config, rng)
            } else {
                None
            };
            match raise {
                Some(target) if last_bet == 0 => PlayerAction::Bet(target),
                Some(target) => PlayerAction::Raise(target),
                // A short stack still calls; the engine caps it as an all-in.
                None if owed == 0 => PlayerAction::Check,
                None => PlayerAction::Call,
            }
        }
        Band::Medium => {
            if owed == 0 {
                PlayerAction::Check
            } else if owed <= player.balance() && rng.random_bool(config.medium_call_probability) {
                PlayerAction::Call
            } else {
                PlayerAction::Fold
            }
        }
        Band::Weak => {
            if owed > 0 {
                if rng.random_bool(config.weak_fold_probability) {
                    PlayerAction::Fold
                } else {
                    PlayerAction::Call
                }
            } else if last_bet == 0 && rng.random_bool(config.bluff_bet_probability) {
                match raise_target(player, state, config, rng) {
                    Some(target) => PlayerAction::Bet(target),
                    None => PlayerAction::Check,
                }
            } else {
                PlayerAction::Check
            }
        }
    };

    debug!(
        player = %player.id(),
        hand = %eval.description,
        score = %eval.score,
        ?band,
        owed,
        ?action,
        "ai decision"
    );
    action
}

/// Target total for a bet or raise, or `None` when the player cannot make
/// a legal one within their balance.
fn raise_target<R: Rng + ?Sized>(
    player: &Player,
    state: &TableState,
    config: &PolicyConfig,
    rng: &mut R,
) -> Option<u32> {
    let table = state.config();
    let steps = rng.random_range(1..=config.max_raise_steps.max(1));
    let reach = player.current_bet() + player.balance();
    let mut target = state
        .last_bet()
        .saturating_add(table.min_bet.saturating_mul(steps))
        .min(reach);
    if let Some(max) = table.max_bet {
        target = target.min(max);
    }
    if target > state.last_bet() && target >= table.min_bet {
        Some(target)
    } else {
        None
    }
}

/// Whether an AI seat offered a tie-break rebuy should pay to join.
pub fn wants_rebuy(player: &Player, state: &TableState, config: &PolicyConfig) -> bool {
    if player.tie_break() != Some(TieBreakSeat::Offered) {
        return false;
    }
    let min_bet = state.config().min_bet;
    let affordable = player.balance() >= min_bet;
    let wants = affordable
        && (!config.rebuy_requires_balance_above_pot || player.balance() > state.pot());
    debug!(player = %player.id(), balance = player.balance(), pot = state.pot(), wants, "ai rebuy");
    wants
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use svarka_engine::cards::parse_cards;
    use svarka_engine::engine::{apply_action, start_new_round};
    use svarka_engine::game::{Phase, TableConfig};
    use svarka_engine::player::{PlayerId, Seat};

    fn table(balances: &[u32], seed: u64) -> TableState {
        let seats = balances
            .iter()
            .enumerate()
            .map(|(i, &b)| Seat::ai(format!("p{}", i).as_str(), format!("P{}", i), b))
            .collect();
        TableState::new(TableConfig::new("Test", 10, Some(100), 4), seats, seed).unwrap()
    }

    /// First dealt table whose acting player holds a hand matching `pred`.
    /// With `facing_bet`, p0 opens for 20 and p1 is the one deciding.
    fn find_spot(
        balances: &[u32],
        facing_bet: bool,
        pred: impl Fn(&HandEvaluation) -> bool,
    ) -> TableState {
        for seed in 0..5000 {
            let mut state = start_new_round(&table(balances, seed)).unwrap();
            if facing_bet {
                state = apply_action(&state, &PlayerId::from("p0"), PlayerAction::Bet(20)).unwrap();
            }
            let Some(p) = state.current_player() else {
                continue;
            };
            if p.evaluation().is_some_and(&pred) {
                return state;
            }
        }
        panic!("no matching deal found");
    }

    fn strong(e: &HandEvaluation) -> bool {
        e.tier >= Tier::Triple
    }

    fn medium(e: &HandEvaluation) -> bool {
        e.tier == Tier::Pair && e.score > Score::from_points(16)
    }

    fn weak(e: &HandEvaluation) -> bool {
        e.tier == Tier::HighCard
    }

    fn act(state: &TableState, config: &PolicyConfig, seed: u64) -> PlayerAction {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let player = state.current_player().unwrap();
        decide(player, state, config, &mut rng)
    }

    #[test]
    fn default_config_is_valid() {
        PolicyConfig::default().validate().unwrap();
    }

    #[test]
    fn rejects_bad_probabilities() {
        let cfg = PolicyConfig {
            weak_fold_probability: 1.5,
            ..PolicyConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(PolicyError::Probability {
                field: "weak_fold_probability",
                ..
            })
        ));
        let cfg = PolicyConfig {
            max_raise_steps: 0,
            ..PolicyConfig::default()
        };
        assert_eq!(cfg.validate(), Err(PolicyError::NoRaiseSteps));
    }

    #[test]
    fn strong_hand_opens_with_a_bet() {
        let state = find_spot(&[500, 500], false, strong);
        let cfg = PolicyConfig {
            strong_raise_probability: 1.0,
            ..PolicyConfig::default()
        };
        match act(&state, &cfg, 1) {
            PlayerAction::Bet(n) => assert!(n == 10 || n == 20, "unexpected bet {}", n),
            other => panic!("expected a bet, got {:?}", other),
        }
    }

    #[test]
    fn strong_hand_raises_over_a_bet() {
        let state = find_spot(&[500, 500], true, strong);
        let cfg = PolicyConfig {
            strong_raise_probability: 1.0,
            ..PolicyConfig::default()
        };
        match act(&state, &cfg, 2) {
            PlayerAction::Raise(n) => assert!(n == 30 || n == 40),
            other => panic!("expected a raise, got {:?}", other),
        }
        let passive = PolicyConfig {
            strong_raise_probability: 0.0,
            ..PolicyConfig::default()
        };
        assert_eq!(act(&state, &passive, 2), PlayerAction::Call);
    }

    #[test]
    fn raise_is_capped_at_balance() {
        let state = find_spot(&[500, 25], true, strong);
        let cfg = PolicyConfig {
            strong_raise_probability: 1.0,
            max_raise_steps: 5,
            ..PolicyConfig::default()
        };
        for seed in 0..10 {
            match act(&state, &cfg, seed) {
                PlayerAction::Raise(n) => assert_eq!(n, 25),
                other => panic!("expected a capped raise, got {:?}", other),
            }
        }
    }

    #[test]
    fn medium_hand_calls_or_folds_by_probability() {
        let state = find_spot(&[500, 500], true, medium);
        let always = PolicyConfig {
            medium_call_probability: 1.0,
            ..PolicyConfig::default()
        };
        assert_eq!(act(&state, &always, 3), PlayerAction::Call);
        let never = PolicyConfig {
            medium_call_probability: 0.0,
            ..PolicyConfig::default()
        };
        assert_eq!(act(&state, &never, 3), PlayerAction::Fold);
    }

    #[test]
    fn pair_at_the_threshold_is_weak() {
        let cfg = PolicyConfig::default();
        let band_of = |text: &str| {
            let cards = parse_cards(text).unwrap();
            cfg.band(&try_evaluate(&cards).unwrap())
        };
        assert_eq!(band_of("8♥ 8♦ K♣"), Band::Weak, "a pair of eights scores exactly 16");
        assert_eq!(band_of("9♥ 9♦ K♣"), Band::Medium);
        assert_eq!(band_of("K♥ 10♥ 8♠"), Band::Medium);
        assert_eq!(band_of("8♠ 8♥ 8♦"), Band::Strong);
    }

    #[test]
    fn medium_hand_checks_when_free() {
        let state = find_spot(&[500, 500], false, medium);
        assert_eq!(act(&state, &PolicyConfig::default(), 4), PlayerAction::Check);
    }

    #[test]
    fn medium_hand_folds_when_call_is_unaffordable() {
        let state = find_spot(&[500, 15], true, medium);
        let always = PolicyConfig {
            medium_call_probability: 1.0,
            ..PolicyConfig::default()
        };
        assert_eq!(act(&state, &always, 5), PlayerAction::Fold);
    }

    #[test]
    fn weak_hand_folds_to_a_bet() {
        let state = find_spot(&[500, 500], true, weak);
        let cfg = PolicyConfig {
            weak_fold_probability: 1.0,
            ..PolicyConfig::default()
        };
        assert_eq!(act(&state, &cfg, 6), PlayerAction::Fold);
    }

    #[test]
    fn weak_hand_bluffs_or_checks() {
        let state = find_spot(&[500, 500], false, weak);
        let bluffer = PolicyConfig {
            bluff_bet_probability: 1.0,
            ..PolicyConfig::default()
        };
        assert!(matches!(act(&state, &bluffer, 7), PlayerAction::Bet(_)));
        let honest = PolicyConfig {
            bluff_bet_probability: 0.0,
            ..PolicyConfig::default()
        };
        assert_eq!(act(&state, &honest, 7), PlayerAction::Check);
    }

    #[test]
    fn same_seed_same_decision() {
        let state = find_spot(&[500, 500], true, |_| true);
        let cfg = PolicyConfig::default();
        for seed in 0..20 {
            assert_eq!(act(&state, &cfg, seed), act(&state, &cfg, seed));
        }
    }

    #[test]
    fn decisions_are_always_legal() {
        let cfg = PolicyConfig::default();
        for seed in 0..200 {
            let mut state = start_new_round(&table(&[60, 200, 35], seed)).unwrap();
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            while state.phase() == Phase::Betting {
                let player = state.current_player().unwrap();
                let id = player.id().clone();
                let action = decide(player, &state, &cfg, &mut rng);
                state = apply_action(&state, &id, action).unwrap();
            }
        }
    }

    #[test]
    fn rebuy_only_when_offered_and_covered() {
        let cfg = PolicyConfig::default();
        for seed in 0..5000 {
            let mut state = start_new_round(&table(&[100, 100, 100], seed)).unwrap();
            for who in ["p0", "p1", "p2"] {
                state = apply_action(&state, &PlayerId::from(who), PlayerAction::Check).unwrap();
            }
            if state.phase() != Phase::TieBreak {
                continue;
            }
            for p in state.players() {
                let offered = p.tie_break() == Some(TieBreakSeat::Offered);
                // pot is empty after an all-check round, so any offered seat wants in
                assert_eq!(wants_rebuy(p, &state, &cfg), offered);
            }
            return;
        }
        panic!("no tie found");
    }
}
