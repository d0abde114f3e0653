use svarka_engine::errors::{GameError, IllegalAction};
use svarka_engine::game::TableConfig;
use svarka_engine::player::{Player, PlayerAction as A, Seat};
use svarka_engine::rules::{validate_action, ValidatedAction as V};

fn config() -> TableConfig {
    TableConfig::new("Test", 10, Some(200), 4)
}

fn player(balance: u32) -> Player {
    Player::new(Seat::human("p1", "Ana", balance))
}

#[test]
fn check_only_when_nothing_owed() {
    let p = player(100);
    assert_eq!(validate_action(&p, 0, &config(), &A::Check), Ok(V::Check));
    assert_eq!(
        validate_action(&p, 20, &config(), &A::Check),
        Err(GameError::IllegalAction(IllegalAction::CheckWhileOwing {
            owed: 20
        }))
    );
}

#[test]
fn call_pays_the_difference_or_goes_all_in() {
    assert_eq!(
        validate_action(&player(100), 30, &config(), &A::Call),
        Ok(V::Call(30))
    );
    assert_eq!(
        validate_action(&player(25), 30, &config(), &A::Call),
        Ok(V::AllIn(25))
    );
    assert_eq!(
        validate_action(&player(100), 0, &config(), &A::Call),
        Ok(V::Call(0))
    );
}

#[test]
fn bet_must_respect_table_limits() {
    let p = player(500);
    assert_eq!(
        validate_action(&p, 0, &config(), &A::Bet(0)),
        Err(IllegalAction::ZeroAmount.into())
    );
    assert_eq!(
        validate_action(&p, 0, &config(), &A::Bet(5)),
        Err(IllegalAction::BelowMinimum {
            amount: 5,
            minimum: 10
        }
        .into())
    );
    assert_eq!(
        validate_action(&p, 0, &config(), &A::Bet(250)),
        Err(IllegalAction::AboveMaximum {
            amount: 250,
            maximum: 200
        }
        .into())
    );
    assert_eq!(validate_action(&p, 0, &config(), &A::Bet(40)), Ok(V::Bet(40)));
}

#[test]
fn bet_below_current_bet_is_rejected() {
    assert_eq!(
        validate_action(&player(100), 50, &config(), &A::Bet(20)),
        Err(IllegalAction::BelowCurrentBet {
            amount: 20,
            current: 50
        }
        .into())
    );
}

#[test]
fn raise_must_exceed_current_bet() {
    let p = player(100);
    assert_eq!(
        validate_action(&p, 40, &config(), &A::Raise(40)),
        Err(IllegalAction::RaiseTooSmall {
            amount: 40,
            current: 40
        }
        .into())
    );
    assert_eq!(
        validate_action(&p, 40, &config(), &A::Raise(60)),
        Ok(V::Raise(60))
    );
}

#[test]
fn oversized_raise_is_capped_at_balance() {
    assert_eq!(
        validate_action(&player(35), 20, &config(), &A::Raise(100)),
        Ok(V::AllIn(35))
    );
}

#[test]
fn fold_is_always_legal() {
    assert_eq!(validate_action(&player(0), 90, &config(), &A::Fold), Ok(V::Fold));
}

#[test]
fn start_new_round_is_not_a_betting_action() {
    assert_eq!(
        validate_action(&player(100), 0, &config(), &A::StartNewRound),
        Err(GameError::RoundInProgress)
    );
}
