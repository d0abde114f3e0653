//! Round state machine.
//!
//! Every transition takes a snapshot by reference and returns a new one, so
//! a rejected action never leaves a half-applied state behind and callers
//! can run transitions inside whatever transaction guards their storage.
//!
//! ```
//! use svarka_engine::engine::{apply_action, start_new_round};
//! use svarka_engine::game::{Phase, TableConfig, TableState};
//! use svarka_engine::player::{PlayerAction, PlayerId, Seat};
//!
//! let seats = vec![Seat::human("ana", "Ana", 100), Seat::ai("bot", "Bot", 100)];
//! let table = TableState::new(TableConfig::new("Demo", 10, None, 4), seats, 42).unwrap();
//! let dealt = start_new_round(&table).unwrap();
//! assert_eq!(dealt.phase(), Phase::Betting);
//!
//! let after = apply_action(&dealt, &PlayerId::from("ana"), PlayerAction::Fold).unwrap();
//! assert_eq!(after.phase(), Phase::RoundOver);
//! assert_eq!(after.player(&PlayerId::from("bot")).unwrap().balance(), 100);
//! ```

use tracing::{debug, info};

use crate::deck::Deck;
use crate::errors::{GameError, IllegalAction};
use crate::game::{Phase, RoundWinner, TableState, CARDS_PER_HAND, MIN_PLAYERS};
use crate::hand::try_evaluate;
use crate::logger::ActionRecord;
use crate::player::{ActionKind, PlayerAction, PlayerId, TieBreakSeat};
use crate::rules::{validate_action, ValidatedAction};

/// Deal the next round, or the tie-break sub-round when one is pending.
///
/// A normal round (from pre-deal or round-over) deals three cards to every
/// player with chips and sits out everyone else. A tie-break sub-round deals
/// only the tied players and those who paid to join, and keeps the pot.
pub fn start_new_round(state: &TableState) -> Result<TableState, GameError> {
    match state.phase {
        Phase::Betting => Err(GameError::RoundInProgress),
        Phase::TieBreak => deal_tie_break(state),
        Phase::PreDeal | Phase::RoundOver => deal_round(state),
    }
}

/// Apply one player intent and return the resulting snapshot.
///
/// # Errors
///
/// - [`GameError::UnknownPlayer`] - the id is not seated
/// - [`GameError::BettingClosed`] - a betting action outside the betting phase
/// - [`GameError::NotPlayersTurn`] - the player is not the one to act
/// - [`GameError::RoundInProgress`] - `StartNewRound` while betting
/// - [`GameError::IllegalAction`] - see [`validate_action`]
pub fn apply_action(
    state: &TableState,
    player_id: &PlayerId,
    action: PlayerAction,
) -> Result<TableState, GameError> {
    let idx = state
        .index_of(player_id)
        .ok_or_else(|| GameError::UnknownPlayer(player_id.clone()))?;
    if action == PlayerAction::StartNewRound {
        return start_new_round(state);
    }
    if state.phase != Phase::Betting {
        return Err(GameError::BettingClosed { phase: state.phase });
    }
    if idx != state.current_player_index {
        return Err(GameError::NotPlayersTurn {
            expected: state.players[state.current_player_index].id.clone(),
            actual: player_id.clone(),
        });
    }
    let player = &state.players[idx];
    if player.has_folded {
        return Err(GameError::PlayerAlreadyFolded(player_id.clone()));
    }
    let validated = validate_action(player, state.last_bet, &state.config, &action)?;

    let mut next = state.clone();
    let chips = validated.chips();
    {
        let p = &mut next.players[idx];
        p.last_action = Some(action.kind());
        p.has_acted = true;
        match validated {
            ValidatedAction::Fold => p.has_folded = true,
            ValidatedAction::Check => {}
            _ => {
                p.commit(chips);
            }
        }
    }
    next.pot += chips;

    let new_bet = next.players[idx].current_bet;
    if new_bet > next.last_bet {
        next.last_bet = new_bet;
        // Everyone else must answer the raise.
        for (i, p) in next.players.iter_mut().enumerate() {
            if i != idx && !p.has_folded {
                p.has_acted = false;
            }
        }
    }

    debug!(
        player = %player_id,
        action = %action.kind(),
        chips,
        pot = next.pot,
        last_bet = next.last_bet,
        "action applied"
    );
    next.actions.push(ActionRecord {
        player_id: player_id.clone(),
        sub_round: next.tie_breaks,
        action,
        chips,
    });

    if !close_betting_if_done(&mut next) {
        advance_turn(&mut next, idx);
    }
    Ok(next)
}

/// Pay the table minimum into the carried pot to play the tie-break.
pub fn join_tie_break(state: &TableState, player_id: &PlayerId) -> Result<TableState, GameError> {
    let idx = offered_seat(state, player_id)?;
    let price = state.config.min_bet;
    let available = state.players[idx].balance;
    if available < price {
        return Err(GameError::InsufficientFunds {
            required: price,
            available,
        });
    }
    let mut next = state.clone();
    let paid = next.players[idx].take_chips(price);
    next.pot += paid;
    next.players[idx].tie_break = Some(TieBreakSeat::Joined);
    debug!(player = %player_id, paid, pot = next.pot, "joined tie-break");
    Ok(next)
}

/// Sit out the pending tie-break.
pub fn decline_tie_break(
    state: &TableState,
    player_id: &PlayerId,
) -> Result<TableState, GameError> {
    let idx = offered_seat(state, player_id)?;
    let mut next = state.clone();
    next.players[idx].tie_break = Some(TieBreakSeat::Declined);
    debug!(player = %player_id, "declined tie-break");
    Ok(next)
}

/// Action kinds the current player may submit right now.
pub fn available_actions(state: &TableState) -> Vec<ActionKind> {
    let Some(p) = state.current_player() else {
        return match state.phase {
            Phase::Betting => Vec::new(),
            _ => vec![ActionKind::StartNewRound],
        };
    };
    let mut kinds = vec![ActionKind::Fold];
    let owed = p.to_call(state.last_bet);
    if owed == 0 {
        kinds.push(ActionKind::Check);
    } else {
        kinds.push(ActionKind::Call);
    }
    let reach = p.current_bet + p.balance;
    if state.last_bet == 0 {
        if reach > 0 {
            kinds.push(ActionKind::Bet);
        }
    } else if reach > state.last_bet {
        kinds.push(ActionKind::Raise);
    }
    kinds
}

fn offered_seat(state: &TableState, player_id: &PlayerId) -> Result<usize, GameError> {
    if state.phase != Phase::TieBreak {
        return Err(GameError::NoTieBreak);
    }
    let idx = state
        .index_of(player_id)
        .ok_or_else(|| GameError::UnknownPlayer(player_id.clone()))?;
    if state.players[idx].tie_break != Some(TieBreakSeat::Offered) {
        return Err(IllegalAction::NotOfferedRebuy.into());
    }
    Ok(idx)
}

fn deal_round(state: &TableState) -> Result<TableState, GameError> {
    let funded = state.funded_players();
    if funded < MIN_PLAYERS {
        return Err(GameError::NotEnoughPlayers {
            required: MIN_PLAYERS,
            available: funded,
        });
    }
    let mut next = state.clone();
    next.round += 1;
    next.tie_breaks = 0;
    next.actions.clear();
    next.tied_player_ids.clear();
    next.pot = 0;

    let mut deck = fresh_deck(&mut next);
    for p in &mut next.players {
        p.reset_for_round();
        if p.balance > 0 {
            p.give_cards(deck.deal(CARDS_PER_HAND)?);
        } else {
            p.sit_out();
        }
    }
    info!(round = next.round, players = funded, "round dealt");
    open_betting(&mut next);
    Ok(next)
}

fn deal_tie_break(state: &TableState) -> Result<TableState, GameError> {
    let mut next = state.clone();
    next.tie_breaks += 1;
    next.tied_player_ids.clear();

    let mut deck = fresh_deck(&mut next);
    let mut dealt = 0;
    for p in &mut next.players {
        let seat = p.tie_break;
        p.reset_for_round();
        match seat {
            Some(TieBreakSeat::Tied) | Some(TieBreakSeat::Joined) => {
                p.give_cards(deck.deal(CARDS_PER_HAND)?);
                dealt += 1;
            }
            // Unanswered offers count as declined.
            _ => p.sit_out(),
        }
    }
    info!(
        round = next.round,
        sub_round = next.tie_breaks,
        players = dealt,
        pot = next.pot,
        "tie-break dealt"
    );
    open_betting(&mut next);
    Ok(next)
}

fn fresh_deck(state: &mut TableState) -> Deck {
    state.deals += 1;
    let mut deck = Deck::new_with_seed(state.seed ^ state.deals.wrapping_mul(0x9E37_79B9_7F4A_7C15));
    deck.shuffle();
    deck
}

fn open_betting(state: &mut TableState) {
    state.last_bet = 0;
    state.round_winner = None;
    state.phase = Phase::Betting;
    state.current_player_index = state
        .players
        .iter()
        .position(|p| p.can_act())
        .unwrap_or(0);
    // Nobody with chips behind: straight to the showdown.
    close_betting_if_done(state);
}

/// Move the turn to the next player who can still act, at most one lap.
fn advance_turn(state: &mut TableState, from: usize) {
    let n = state.players.len();
    for step in 1..=n {
        let i = (from + step) % n;
        if state.players[i].can_act() {
            state.current_player_index = i;
            return;
        }
    }
}

/// Close the betting round if it is finished. Returns whether it closed.
///
/// One player left wins uncontested. Otherwise betting is over once every
/// live player is all-in or has acted since the last raise and matched it.
fn close_betting_if_done(state: &mut TableState) -> bool {
    let live: Vec<usize> = state
        .players
        .iter()
        .enumerate()
        .filter(|(_, p)| !p.has_folded)
        .map(|(i, _)| i)
        .collect();

    if live.len() <= 1 {
        match live.first() {
            Some(&winner) => award_uncontested(state, winner),
            None => state.phase = Phase::RoundOver,
        }
        return true;
    }

    let last_bet = state.last_bet;
    let settled = live.iter().all(|&i| {
        let p = &state.players[i];
        p.balance == 0 || (p.has_acted && p.current_bet == last_bet)
    });
    if settled {
        showdown(state, &live);
    }
    settled
}

fn award_uncontested(state: &mut TableState, idx: usize) {
    let pot = std::mem::take(&mut state.pot);
    let p = &mut state.players[idx];
    p.add_chips(pot);
    info!(winner = %p.id, pot, "round won uncontested");
    state.round_winner = Some(RoundWinner {
        player_id: p.id.clone(),
        name: p.name.clone(),
        hand: p.hand.clone(),
        evaluation: None,
        pot,
        description: "All other players folded".to_string(),
        uncontested: true,
    });
    state.tied_player_ids.clear();
    state.phase = Phase::RoundOver;
}

fn showdown(state: &mut TableState, live: &[usize]) {
    // Always re-evaluate here rather than trusting the deal-time cache.
    for &i in live {
        let p = &mut state.players[i];
        p.evaluation = try_evaluate(&p.hand);
    }
    let key = |i: usize| state.players[i].evaluation.as_ref().map(|e| e.rank_key());
    let best = live.iter().filter_map(|&i| key(i)).max();
    let top: Vec<usize> = live.iter().copied().filter(|&i| key(i) == best).collect();

    if let [winner] = top.as_slice() {
        award_showdown(state, *winner);
    } else {
        enter_tie_break(state, &top);
    }
}

fn award_showdown(state: &mut TableState, idx: usize) {
    let pot = std::mem::take(&mut state.pot);
    let p = &mut state.players[idx];
    p.add_chips(pot);
    let description = p
        .evaluation
        .as_ref()
        .map(|e| e.description.clone())
        .unwrap_or_default();
    info!(winner = %p.id, pot, hand = %description, "showdown won");
    state.round_winner = Some(RoundWinner {
        player_id: p.id.clone(),
        name: p.name.clone(),
        hand: p.hand.clone(),
        evaluation: p.evaluation.clone(),
        pot,
        description,
        uncontested: false,
    });
    state.tied_player_ids.clear();
    state.phase = Phase::RoundOver;
}

fn enter_tie_break(state: &mut TableState, tied: &[usize]) {
    let min_bet = state.config.min_bet;
    state.tied_player_ids = tied.iter().map(|&i| state.players[i].id.clone()).collect();
    for (i, p) in state.players.iter_mut().enumerate() {
        p.tie_break = Some(if tied.contains(&i) {
            TieBreakSeat::Tied
        } else if p.balance >= min_bet {
            TieBreakSeat::Offered
        } else {
            TieBreakSeat::Declined
        });
    }
    info!(tied = tied.len(), pot = state.pot, "showdown tied");
    state.round_winner = None;
    state.phase = Phase::TieBreak;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::game::TableConfig;
    use crate::player::Seat;

    fn id(s: &str) -> PlayerId {
        PlayerId::from(s)
    }

    fn table(balances: &[u32]) -> TableState {
        let seats = balances
            .iter()
            .enumerate()
            .map(|(i, &b)| Seat::human(format!("p{}", i).as_str(), format!("P{}", i), b))
            .collect();
        TableState::new(TableConfig::new("Test", 10, None, 6), seats, 11).unwrap()
    }

    /// Replace dealt hands so showdowns are predictable.
    fn rig(state: &mut TableState, hands: &[&str]) {
        for (p, h) in state.players.iter_mut().zip(hands) {
            if !p.hand.is_empty() {
                let cards = parse_cards(h).unwrap();
                p.give_cards(cards);
            }
        }
    }

    fn act(state: &TableState, who: &str, action: PlayerAction) -> TableState {
        apply_action(state, &id(who), action).unwrap()
    }

    #[test]
    fn deal_gives_three_unique_cards_to_funded_players() {
        let state = start_new_round(&table(&[100, 0, 100])).unwrap();
        assert_eq!(state.phase(), Phase::Betting);
        assert_eq!(state.players[0].hand.len(), 3);
        assert!(state.players[1].hand.is_empty());
        assert!(state.players[1].has_folded);
        assert_eq!(state.players[2].hand.len(), 3);
        let mut all: Vec<_> = state.players.iter().flat_map(|p| p.hand.clone()).collect();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 6);
        assert_eq!(state.current_player_index(), 0);
    }

    #[test]
    fn dealing_needs_two_funded_players() {
        let err = start_new_round(&table(&[100, 0])).unwrap_err();
        assert_eq!(
            err,
            GameError::NotEnoughPlayers {
                required: 2,
                available: 1
            }
        );
    }

    #[test]
    fn start_is_rejected_while_betting() {
        let state = start_new_round(&table(&[100, 100])).unwrap();
        assert_eq!(start_new_round(&state), Err(GameError::RoundInProgress));
        let err = apply_action(&state, &id("p1"), PlayerAction::StartNewRound).unwrap_err();
        assert_eq!(err, GameError::RoundInProgress);
    }

    #[test]
    fn wrong_player_is_rejected_and_state_unchanged() {
        let state = start_new_round(&table(&[100, 100, 100])).unwrap();
        let before = state.clone();
        let err = apply_action(&state, &id("p2"), PlayerAction::Check).unwrap_err();
        assert_eq!(err.kind(), crate::errors::ErrorKind::InvalidTurn);
        assert_eq!(state, before);
    }

    #[test]
    fn all_check_goes_to_showdown() {
        let mut state = start_new_round(&table(&[100, 100])).unwrap();
        rig(&mut state, &["A♠ A♥ A♦", "8♠ 9♥ K♦"]);
        let state = act(&state, "p0", PlayerAction::Check);
        assert_eq!(state.phase(), Phase::Betting);
        let state = act(&state, "p1", PlayerAction::Check);
        assert_eq!(state.phase(), Phase::RoundOver);
        let winner = state.round_winner().unwrap();
        assert_eq!(winner.player_id, id("p0"));
        assert_eq!(winner.pot, 0);
        assert!(!winner.uncontested);
    }

    #[test]
    fn bet_and_call_awards_pot_to_best_hand() {
        let mut state = start_new_round(&table(&[100, 100])).unwrap();
        rig(&mut state, &["8♥ 8♦ K♣", "K♥ 10♥ 8♠"]);
        let state = act(&state, "p0", PlayerAction::Bet(20));
        assert_eq!(state.pot(), 20);
        assert_eq!(state.last_bet(), 20);
        let state = act(&state, "p1", PlayerAction::Call);
        assert_eq!(state.phase(), Phase::RoundOver);
        // suited pair K♥ 10♥ (20) beats the pair of eights (16)
        assert_eq!(state.round_winner().unwrap().player_id, id("p1"));
        assert_eq!(state.player(&id("p1")).unwrap().balance(), 120);
        assert_eq!(state.player(&id("p0")).unwrap().balance(), 80);
        assert_eq!(state.pot(), 0);
        assert_eq!(state.total_chips(), 200);
    }

    #[test]
    fn raise_reopens_action_for_everyone_else() {
        let state = start_new_round(&table(&[100, 100, 100])).unwrap();
        let state = act(&state, "p0", PlayerAction::Bet(10));
        let state = act(&state, "p1", PlayerAction::Call);
        let state = act(&state, "p2", PlayerAction::Raise(30));
        assert!(!state.players[0].has_acted);
        assert!(!state.players[1].has_acted);
        assert_eq!(state.current_player().unwrap().id(), &id("p0"));
        let state = act(&state, "p0", PlayerAction::Call);
        assert_eq!(state.phase(), Phase::Betting);
        let state = act(&state, "p1", PlayerAction::Fold);
        assert_ne!(state.phase(), Phase::Betting);
        assert_eq!(state.total_chips(), 300);
    }

    #[test]
    fn folds_leave_uncontested_winner_without_evaluation() {
        let state = start_new_round(&table(&[100, 100, 100])).unwrap();
        let state = act(&state, "p0", PlayerAction::Bet(25));
        let pot = state.pot();
        let state = act(&state, "p1", PlayerAction::Fold);
        let state = act(&state, "p2", PlayerAction::Fold);
        assert_eq!(state.phase(), Phase::RoundOver);
        let winner = state.round_winner().unwrap();
        assert!(winner.uncontested);
        assert!(winner.evaluation.is_none());
        assert_eq!(winner.pot, pot);
        assert_eq!(state.player(&id("p0")).unwrap().balance(), 100);
    }

    #[test]
    fn folded_players_are_skipped() {
        let state = start_new_round(&table(&[100, 100, 100])).unwrap();
        let state = act(&state, "p0", PlayerAction::Bet(10));
        let state = act(&state, "p1", PlayerAction::Fold);
        let state = act(&state, "p2", PlayerAction::Raise(20));
        assert_eq!(state.current_player().unwrap().id(), &id("p0"));
    }

    #[test]
    fn all_in_players_are_skipped_and_count_as_settled() {
        let mut state = start_new_round(&table(&[100, 15, 100])).unwrap();
        rig(&mut state, &["7♠ 8♥ 9♦", "A♠ A♥ A♦", "8♠ 9♥ K♦"]);
        let state = act(&state, "p0", PlayerAction::Bet(20));
        let state = act(&state, "p1", PlayerAction::Call);
        assert_eq!(state.player(&id("p1")).unwrap().balance(), 0);
        assert_eq!(state.current_player().unwrap().id(), &id("p2"));
        let state = act(&state, "p2", PlayerAction::Call);
        assert_eq!(state.phase(), Phase::RoundOver);
        assert_eq!(state.round_winner().unwrap().player_id, id("p1"));
        assert_eq!(state.player(&id("p1")).unwrap().balance(), 55);
        assert_eq!(state.total_chips(), 215);
    }

    #[test]
    fn check_when_owing_is_rejected() {
        let state = start_new_round(&table(&[100, 100])).unwrap();
        let state = act(&state, "p0", PlayerAction::Bet(10));
        let err = apply_action(&state, &id("p1"), PlayerAction::Check).unwrap_err();
        assert_eq!(
            err,
            GameError::IllegalAction(IllegalAction::CheckWhileOwing { owed: 10 })
        );
    }

    #[test]
    fn tie_enters_tie_break_with_pot_intact() {
        let mut state = start_new_round(&table(&[100, 100, 100])).unwrap();
        rig(&mut state, &["K♥ 10♥ 8♠", "Q♦ J♦ 7♠", "8♦ 9♥ J♣"]);
        let state = act(&state, "p0", PlayerAction::Bet(10));
        let state = act(&state, "p1", PlayerAction::Call);
        let state = act(&state, "p2", PlayerAction::Call);
        assert_eq!(state.phase(), Phase::TieBreak);
        assert_eq!(state.pot(), 30);
        assert_eq!(state.tied_player_ids(), &[id("p0"), id("p1")]);
        assert!(state.round_winner().is_none());
        assert_eq!(state.players[2].tie_break(), Some(TieBreakSeat::Offered));
        assert_eq!(state.total_chips(), 300);
    }

    #[test]
    fn tie_break_rebuy_and_sub_round() {
        let mut state = start_new_round(&table(&[100, 100, 100])).unwrap();
        rig(&mut state, &["K♥ 10♥ 8♠", "Q♦ J♦ 7♠", "8♦ 9♥ J♣"]);
        let state = act(&state, "p0", PlayerAction::Check);
        let state = act(&state, "p1", PlayerAction::Check);
        let state = act(&state, "p2", PlayerAction::Check);
        assert_eq!(state.phase(), Phase::TieBreak);

        // tied players cannot buy in, betting is closed
        assert_eq!(
            join_tie_break(&state, &id("p0")).unwrap_err(),
            GameError::IllegalAction(IllegalAction::NotOfferedRebuy)
        );
        assert_eq!(
            apply_action(&state, &id("p0"), PlayerAction::Check).unwrap_err(),
            GameError::BettingClosed {
                phase: Phase::TieBreak
            }
        );

        let joined = join_tie_break(&state, &id("p2")).unwrap();
        assert_eq!(joined.pot(), 10);
        assert_eq!(joined.player(&id("p2")).unwrap().balance(), 90);
        assert_eq!(joined.pending_rebuys().count(), 0);

        let sub = apply_action(&joined, &id("p2"), PlayerAction::StartNewRound).unwrap();
        assert_eq!(sub.phase(), Phase::Betting);
        assert_eq!(sub.tie_breaks(), 1);
        assert_eq!(sub.pot(), 10);
        assert!(sub.players.iter().all(|p| p.hand.len() == 3));
        assert_eq!(sub.total_chips(), 300);
    }

    #[test]
    fn declined_and_unanswered_offers_sit_out() {
        let mut state = start_new_round(&table(&[100, 100, 100, 5])).unwrap();
        rig(&mut state, &["K♥ 10♥ 8♠", "Q♦ J♦ 7♠", "8♦ 9♥ J♣", "7♥ 8♣ 9♠"]);
        let mut state = state;
        for who in ["p0", "p1", "p2", "p3"] {
            state = act(&state, who, PlayerAction::Check);
        }
        assert_eq!(state.phase(), Phase::TieBreak);
        // p3 cannot afford the minimum bet
        assert_eq!(state.players[3].tie_break(), Some(TieBreakSeat::Declined));
        let declined = decline_tie_break(&state, &id("p2")).unwrap();
        assert_eq!(declined.players[2].tie_break(), Some(TieBreakSeat::Declined));

        let sub = start_new_round(&state).unwrap();
        assert!(sub.players[2].has_folded);
        assert!(sub.players[3].has_folded);
        assert_eq!(sub.active_players().count(), 2);
    }

    #[test]
    fn tie_break_winner_takes_carried_pot() {
        let mut state = start_new_round(&table(&[100, 100])).unwrap();
        rig(&mut state, &["K♥ 10♥ 8♠", "Q♦ J♦ 7♠"]);
        let state = act(&state, "p0", PlayerAction::Bet(40));
        let state = act(&state, "p1", PlayerAction::Call);
        assert_eq!(state.phase(), Phase::TieBreak);
        let mut sub = start_new_round(&state).unwrap();
        rig(&mut sub, &["A♠ A♥ A♦", "8♠ 9♥ K♦"]);
        let sub = act(&sub, "p0", PlayerAction::Check);
        let sub = act(&sub, "p1", PlayerAction::Check);
        assert_eq!(sub.phase(), Phase::RoundOver);
        assert_eq!(sub.round_winner().unwrap().pot, 80);
        assert_eq!(sub.player(&id("p0")).unwrap().balance(), 140);
        assert_eq!(sub.actions().len(), 4);
        assert_eq!(sub.actions()[3].sub_round, 1);
    }

    #[test]
    fn all_in_tie_break_resolves_immediately() {
        let mut state = start_new_round(&table(&[50, 50])).unwrap();
        rig(&mut state, &["K♥ 10♥ 8♠", "Q♦ J♦ 7♠"]);
        let state = act(&state, "p0", PlayerAction::Bet(50));
        let state = act(&state, "p1", PlayerAction::Call);
        assert_eq!(state.phase(), Phase::TieBreak);
        let sub = start_new_round(&state).unwrap();
        assert_ne!(sub.phase(), Phase::Betting);
        assert_eq!(sub.total_chips(), 100);
    }

    #[test]
    fn next_round_resets_round_fields() {
        let state = start_new_round(&table(&[100, 100])).unwrap();
        let state = act(&state, "p0", PlayerAction::Bet(10));
        let state = act(&state, "p1", PlayerAction::Fold);
        let next = apply_action(&state, &id("p1"), PlayerAction::StartNewRound).unwrap();
        assert_eq!(next.round(), 2);
        assert_eq!(next.pot(), 0);
        assert_eq!(next.last_bet(), 0);
        assert!(next.actions().is_empty());
        assert!(next.players.iter().all(|p| p.current_bet == 0 && p.last_action.is_none()));
        assert_ne!(next.players[0].hand, state.players[0].hand);
    }

    #[test]
    fn available_actions_follow_the_bet() {
        let state = start_new_round(&table(&[100, 100])).unwrap();
        assert_eq!(
            available_actions(&state),
            vec![ActionKind::Fold, ActionKind::Check, ActionKind::Bet]
        );
        let state = act(&state, "p0", PlayerAction::Bet(10));
        assert_eq!(
            available_actions(&state),
            vec![ActionKind::Fold, ActionKind::Call, ActionKind::Raise]
        );
    }
}
