use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::HandEvaluation;
use crate::logger::ActionRecord;
use crate::player::{Player, PlayerId, Seat, TieBreakSeat};

/// Fewest funded players needed to deal a round.
pub const MIN_PLAYERS: usize = 2;
/// 10 hands of 3 cards is the most a 32-card deck can serve.
pub const MAX_SEATS: usize = 10;
pub const CARDS_PER_HAND: usize = 3;

/// Stakes and seating limits of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    pub name: String,
    /// Smallest bet, also the price of joining a tie-break
    pub min_bet: u32,
    /// Largest total contribution a player may bet up to, if limited
    pub max_bet: Option<u32>,
    pub max_players: usize,
}

impl TableConfig {
    pub fn new(name: impl Into<String>, min_bet: u32, max_bet: Option<u32>, max_players: usize) -> Self {
        Self {
            name: name.into(),
            min_bet,
            max_bet,
            max_players,
        }
    }

    pub fn preset(lobby: Lobby) -> Self {
        let (min_bet, max_bet, max_players) = match lobby {
            Lobby::Beginner => (10, 50, 4),
            Lobby::Intermediate => (50, 200, 6),
            Lobby::Advanced => (100, 1000, 8),
            Lobby::Legendary => (500, 5000, 9),
        };
        Self::new(lobby.table_name(), min_bet, Some(max_bet), max_players)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.min_bet == 0 {
            return Err(GameError::InvalidConfig("min_bet must be > 0".into()));
        }
        if let Some(max) = self.max_bet {
            if max < self.min_bet {
                return Err(GameError::InvalidConfig(format!(
                    "max_bet {} is below min_bet {}",
                    max, self.min_bet
                )));
            }
        }
        if !(MIN_PLAYERS..=MAX_SEATS).contains(&self.max_players) {
            return Err(GameError::InvalidConfig(format!(
                "max_players must be between {} and {}",
                MIN_PLAYERS, MAX_SEATS
            )));
        }
        Ok(())
    }
}

/// Stake levels offered by the lobby.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lobby {
    Beginner,
    Intermediate,
    Advanced,
    Legendary,
}

impl Lobby {
    pub fn all() -> [Lobby; 4] {
        [
            Lobby::Beginner,
            Lobby::Intermediate,
            Lobby::Advanced,
            Lobby::Legendary,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Lobby::Beginner => "beginner",
            Lobby::Intermediate => "intermediate",
            Lobby::Advanced => "advanced",
            Lobby::Legendary => "legendary",
        }
    }

    pub fn table_name(self) -> &'static str {
        match self {
            Lobby::Beginner => "Beginners' Table",
            Lobby::Intermediate => "The Magpie Club",
            Lobby::Advanced => "VIP Lounge",
            Lobby::Legendary => "Hall of Legends",
        }
    }
}

impl std::str::FromStr for Lobby {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lobby::all()
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GameError::InvalidConfig(format!("unknown lobby '{}'", s)))
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    /// Table seated, no cards dealt yet
    PreDeal,
    Betting,
    /// Top hands tied; the pot waits for a re-deal among the tied players
    TieBreak,
    RoundOver,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::PreDeal => "pre-deal",
            Phase::Betting => "betting",
            Phase::TieBreak => "tie-break",
            Phase::RoundOver => "round-over",
        };
        f.write_str(s)
    }
}

/// Summary of how a round was won.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundWinner {
    pub player_id: PlayerId,
    pub name: String,
    pub hand: Vec<Card>,
    /// Absent when everybody else folded and no hand was evaluated
    pub evaluation: Option<HandEvaluation>,
    pub pot: u32,
    pub description: String,
    pub uncontested: bool,
}

/// Authoritative snapshot of one table. Only the engine produces new
/// snapshots; adapters read them and submit actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableState {
    pub(crate) config: TableConfig,
    pub(crate) players: Vec<Player>,
    pub(crate) current_player_index: usize,
    pub(crate) pot: u32,
    pub(crate) last_bet: u32,
    pub(crate) phase: Phase,
    pub(crate) round_winner: Option<RoundWinner>,
    pub(crate) tied_player_ids: Vec<PlayerId>,
    pub(crate) actions: Vec<ActionRecord>,
    pub(crate) seed: u64,
    /// Decks dealt so far; each deal draws its own seeded deck
    pub(crate) deals: u64,
    pub(crate) round: u32,
    pub(crate) tie_breaks: u32,
}

impl TableState {
    pub fn new(config: TableConfig, seats: Vec<Seat>, seed: u64) -> Result<Self, GameError> {
        config.validate()?;
        if seats.len() < MIN_PLAYERS {
            return Err(GameError::NotEnoughPlayers {
                required: MIN_PLAYERS,
                available: seats.len(),
            });
        }
        if seats.len() > config.max_players {
            return Err(GameError::TooManyPlayers {
                maximum: config.max_players,
                requested: seats.len(),
            });
        }
        let mut seen = HashSet::new();
        for seat in &seats {
            if !seen.insert(seat.id.clone()) {
                return Err(GameError::DuplicatePlayer(seat.id.clone()));
            }
        }
        // The pot must be able to hold every chip at the table.
        let total: u64 = seats.iter().map(|s| u64::from(s.balance)).sum();
        if total > u64::from(u32::MAX) {
            return Err(GameError::InvalidConfig(format!(
                "total balance {} exceeds the pot limit",
                total
            )));
        }
        Ok(Self {
            config,
            players: seats.into_iter().map(Player::new).collect(),
            current_player_index: 0,
            pot: 0,
            last_bet: 0,
            phase: Phase::PreDeal,
            round_winner: None,
            tied_player_ids: Vec::new(),
            actions: Vec::new(),
            seed,
            deals: 0,
            round: 0,
            tie_breaks: 0,
        })
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn last_bet(&self) -> u32 {
        self.last_bet
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }
    pub fn round_winner(&self) -> Option<&RoundWinner> {
        self.round_winner.as_ref()
    }
    pub fn tied_player_ids(&self) -> &[PlayerId] {
        &self.tied_player_ids
    }
    /// Actions taken since the current round was dealt, tie-breaks included.
    pub fn actions(&self) -> &[ActionRecord] {
        &self.actions
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }
    /// Number of rounds dealt, not counting tie-break sub-rounds.
    pub fn round(&self) -> u32 {
        self.round
    }
    /// Tie-break sub-rounds dealt within the current round.
    pub fn tie_breaks(&self) -> u32 {
        self.tie_breaks
    }

    /// The player expected to act, only while betting.
    pub fn current_player(&self) -> Option<&Player> {
        if self.phase == Phase::Betting {
            self.players.get(self.current_player_index)
        } else {
            None
        }
    }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    pub fn index_of(&self, id: &PlayerId) -> Option<usize> {
        self.players.iter().position(|p| &p.id == id)
    }

    pub fn to_call(&self, id: &PlayerId) -> Option<u32> {
        self.player(id).map(|p| p.to_call(self.last_bet))
    }

    /// Players still contesting the pot.
    pub fn active_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| !p.has_folded)
    }

    pub fn funded_players(&self) -> usize {
        self.players.iter().filter(|p| p.balance > 0).count()
    }

    /// Players who still have to answer a tie-break offer.
    pub fn pending_rebuys(&self) -> impl Iterator<Item = &Player> {
        self.players
            .iter()
            .filter(|p| p.tie_break == Some(TieBreakSeat::Offered))
    }

    /// Pot plus every balance; constant for the life of the table.
    pub fn total_chips(&self) -> u64 {
        u64::from(self.pot) + self.players.iter().map(|p| u64::from(p.balance)).sum::<u64>()
    }
}
