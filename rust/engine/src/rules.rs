use crate::errors::{GameError, IllegalAction};
use crate::game::TableConfig;
use crate::player::{Player, PlayerAction as A};

/// A betting action checked against the player's stack. Amounts are the
/// chips that move from the balance into the pot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    Call(u32),
    Bet(u32),
    Raise(u32),
    AllIn(u32),
}

impl ValidatedAction {
    pub fn chips(&self) -> u32 {
        match self {
            ValidatedAction::Fold | ValidatedAction::Check => 0,
            ValidatedAction::Call(n)
            | ValidatedAction::Bet(n)
            | ValidatedAction::Raise(n)
            | ValidatedAction::AllIn(n) => *n,
        }
    }
}

/// Validates a betting action for `player` facing `last_bet`.
///
/// Requests that cost more than the player holds are capped at the balance
/// and come back as [`ValidatedAction::AllIn`] rather than failing.
///
/// # Errors
///
/// - [`IllegalAction::CheckWhileOwing`] - checking while a call is owed
/// - [`IllegalAction::ZeroAmount`] - a bet or raise to zero
/// - [`IllegalAction::BelowMinimum`] / [`IllegalAction::AboveMaximum`] - target outside table limits
/// - [`IllegalAction::BelowCurrentBet`] - a bet that does not reach the current bet
/// - [`IllegalAction::RaiseTooSmall`] - a raise at or below the current bet
///
/// `StartNewRound` is not a betting action and is rejected with
/// [`GameError::RoundInProgress`].
///
/// # Examples
///
/// ```
/// use svarka_engine::game::TableConfig;
/// use svarka_engine::player::{Player, PlayerAction, Seat};
/// use svarka_engine::rules::{validate_action, ValidatedAction};
///
/// let config = TableConfig::new("Test", 10, None, 4);
/// let player = Player::new(Seat::human("p1", "Ana", 25));
///
/// // Raise beyond the stack becomes an all-in for what is left
/// let v = validate_action(&player, 10, &config, &PlayerAction::Raise(40)).unwrap();
/// assert_eq!(v, ValidatedAction::AllIn(25));
/// ```
pub fn validate_action(
    player: &Player,
    last_bet: u32,
    config: &TableConfig,
    action: &A,
) -> Result<ValidatedAction, GameError> {
    let owed = player.to_call(last_bet);
    let stack = player.balance();
    match *action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Check => {
            if owed == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(IllegalAction::CheckWhileOwing { owed }.into())
            }
        }
        A::Call => {
            if owed == 0 {
                Ok(ValidatedAction::Call(0))
            } else if stack <= owed {
                Ok(ValidatedAction::AllIn(stack))
            } else {
                Ok(ValidatedAction::Call(owed))
            }
        }
        A::Bet(target) => {
            check_limits(target, config)?;
            if target < last_bet || target <= player.current_bet() {
                return Err(IllegalAction::BelowCurrentBet {
                    amount: target,
                    current: last_bet,
                }
                .into());
            }
            Ok(capped(target - player.current_bet(), stack, ValidatedAction::Bet))
        }
        A::Raise(target) => {
            check_limits(target, config)?;
            if target <= last_bet {
                return Err(IllegalAction::RaiseTooSmall {
                    amount: target,
                    current: last_bet,
                }
                .into());
            }
            Ok(capped(
                target - player.current_bet(),
                stack,
                ValidatedAction::Raise,
            ))
        }
        A::StartNewRound => Err(GameError::RoundInProgress),
    }
}

fn check_limits(target: u32, config: &TableConfig) -> Result<(), IllegalAction> {
    if target == 0 {
        return Err(IllegalAction::ZeroAmount);
    }
    if target < config.min_bet {
        return Err(IllegalAction::BelowMinimum {
            amount: target,
            minimum: config.min_bet,
        });
    }
    if let Some(maximum) = config.max_bet {
        if target > maximum {
            return Err(IllegalAction::AboveMaximum {
                amount: target,
                maximum,
            });
        }
    }
    Ok(())
}

fn capped(increment: u32, stack: u32, make: fn(u32) -> ValidatedAction) -> ValidatedAction {
    if increment >= stack {
        ValidatedAction::AllIn(stack)
    } else {
        make(increment)
    }
}
