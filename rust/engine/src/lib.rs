//! # svarka-engine: Svarka Round Engine
//!
//! A deterministic round engine for Svarka, the three-card betting game
//! played with a 32-card deck. Covers dealing, hand evaluation (with the
//! 7♣ "Chechak" wildcard), the multi-player betting state machine, tie-break
//! sub-rounds and round records.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card), parsing and the canonical deck
//! - [`deck`] - Seeded, shuffled, exhaustible deck
//! - [`hand`] - Three-card hand evaluation and comparison
//! - [`player`] - Player records, seats and actions
//! - [`rules`] - Betting validation with all-in capping
//! - [`game`] - Table configuration, lobbies and the table snapshot
//! - [`engine`] - Pure state transitions: deal, act, tie-break
//! - [`logger`] - Round records and JSONL writing
//! - [`errors`] - Error types for engine operations
//!
//! ## Quick Start
//!
//! ```rust
//! use svarka_engine::cards::{Card, Rank, Suit};
//! use svarka_engine::hand::evaluate_hand;
//!
//! let cards = [
//!     Card { suit: Suit::Spades, rank: Rank::Ace },
//!     Card { suit: Suit::Hearts, rank: Rank::Ace },
//!     Card { suit: Suit::Diamonds, rank: Rank::Ace },
//! ];
//!
//! let eval = evaluate_hand(&cards);
//! assert_eq!(eval.score.to_string(), "33");
//! ```
//!
//! ## Deterministic Dealing
//!
//! A table is created with a seed and every deal draws a deck derived from
//! it, so a whole session can be replayed:
//!
//! ```rust
//! use svarka_engine::engine::start_new_round;
//! use svarka_engine::game::{Lobby, TableConfig, TableState};
//! use svarka_engine::player::Seat;
//!
//! let seats = || vec![Seat::human("a", "Ana", 500), Seat::ai("b", "Bo", 500)];
//! let cfg = TableConfig::preset(Lobby::Beginner);
//! let one = start_new_round(&TableState::new(cfg.clone(), seats(), 9).unwrap()).unwrap();
//! let two = start_new_round(&TableState::new(cfg, seats(), 9).unwrap()).unwrap();
//! assert_eq!(one, two);
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod rules;
