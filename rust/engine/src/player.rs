use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::{try_evaluate, HandEvaluation};

/// Stable player identity, owned by the session adapter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Represents a player intent submitted to the round state machine.
/// `Bet` and `Raise` carry the target total contribution for the round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "amount", rename_all = "snake_case")]
pub enum PlayerAction {
    /// Fold and forfeit the round
    Fold,
    /// Pass without paying, only valid when nothing is owed
    Check,
    /// Match the current bet (capped at the balance)
    Call,
    /// Open the betting up to the given total
    Bet(u32),
    /// Raise the current bet to the given total
    Raise(u32),
    /// Deal the next round (or the pending tie-break sub-round)
    StartNewRound,
}

impl PlayerAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            PlayerAction::Fold => ActionKind::Fold,
            PlayerAction::Check => ActionKind::Check,
            PlayerAction::Call => ActionKind::Call,
            PlayerAction::Bet(_) => ActionKind::Bet,
            PlayerAction::Raise(_) => ActionKind::Raise,
            PlayerAction::StartNewRound => ActionKind::StartNewRound,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    StartNewRound,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActionKind::Fold => "fold",
            ActionKind::Check => "check",
            ActionKind::Call => "call",
            ActionKind::Bet => "bet",
            ActionKind::Raise => "raise",
            ActionKind::StartNewRound => "start_new_round",
        };
        f.write_str(s)
    }
}

/// Where a player stands while a tie-break is being arranged.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreakSeat {
    /// Tied for the top hand; dealt in automatically
    Tied,
    /// May pay the minimum bet to join
    Offered,
    Joined,
    Declined,
}

/// Adapter-supplied record used to seat a player at a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub id: PlayerId,
    pub name: String,
    pub balance: u32,
    pub is_ai: bool,
}

impl Seat {
    pub fn human(id: impl Into<PlayerId>, name: impl Into<String>, balance: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            balance,
            is_ai: false,
        }
    }

    pub fn ai(id: impl Into<PlayerId>, name: impl Into<String>, balance: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            balance,
            is_ai: true,
        }
    }
}

/// A seated player. Balance is the only state that survives between
/// rounds; everything else is reset when a round is dealt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub(crate) id: PlayerId,
    pub(crate) name: String,
    pub(crate) is_ai: bool,
    pub(crate) balance: u32,
    pub(crate) hand: Vec<Card>,
    pub(crate) current_bet: u32,
    pub(crate) has_folded: bool,
    pub(crate) has_acted: bool,
    pub(crate) last_action: Option<ActionKind>,
    pub(crate) evaluation: Option<HandEvaluation>,
    pub(crate) tie_break: Option<TieBreakSeat>,
}

impl Player {
    pub fn new(seat: Seat) -> Self {
        Self {
            id: seat.id,
            name: seat.name,
            is_ai: seat.is_ai,
            balance: seat.balance,
            hand: Vec::with_capacity(3),
            current_bet: 0,
            has_folded: false,
            has_acted: false,
            last_action: None,
            evaluation: None,
            tie_break: None,
        }
    }

    pub fn id(&self) -> &PlayerId {
        &self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn is_ai(&self) -> bool {
        self.is_ai
    }
    pub fn balance(&self) -> u32 {
        self.balance
    }
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn has_folded(&self) -> bool {
        self.has_folded
    }
    pub fn has_acted(&self) -> bool {
        self.has_acted
    }
    pub fn last_action(&self) -> Option<ActionKind> {
        self.last_action
    }
    /// Cached evaluation for display; showdowns always re-evaluate.
    pub fn evaluation(&self) -> Option<&HandEvaluation> {
        self.evaluation.as_ref()
    }
    pub fn tie_break(&self) -> Option<TieBreakSeat> {
        self.tie_break
    }

    /// Still in the round with chips behind.
    pub fn can_act(&self) -> bool {
        !self.has_folded && self.balance > 0
    }

    pub fn is_all_in(&self) -> bool {
        !self.has_folded && self.balance == 0 && !self.hand.is_empty()
    }

    pub fn to_call(&self, last_bet: u32) -> u32 {
        last_bet.saturating_sub(self.current_bet)
    }

    pub(crate) fn reset_for_round(&mut self) {
        self.hand.clear();
        self.current_bet = 0;
        self.has_folded = false;
        self.has_acted = false;
        self.last_action = None;
        self.evaluation = None;
        self.tie_break = None;
    }

    pub(crate) fn give_cards(&mut self, cards: Vec<Card>) {
        self.evaluation = try_evaluate(&cards);
        self.hand = cards;
    }

    pub(crate) fn sit_out(&mut self) {
        self.hand.clear();
        self.evaluation = None;
        self.has_folded = true;
    }

    /// Move up to `amount` from the balance into the current bet and return
    /// what was actually moved.
    pub(crate) fn commit(&mut self, amount: u32) -> u32 {
        let moved = amount.min(self.balance);
        self.balance -= moved;
        self.current_bet += moved;
        moved
    }

    pub(crate) fn add_chips(&mut self, amount: u32) {
        self.balance = self.balance.saturating_add(amount);
    }

    pub(crate) fn take_chips(&mut self, amount: u32) -> u32 {
        let moved = amount.min(self.balance);
        self.balance -= moved;
        moved
    }
}
