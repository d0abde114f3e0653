//! Card, hand and action formatters for terminal display.
//!
//! Cards use Unicode suit symbols where the terminal is known to render
//! them and fall back to ASCII letters (`As`, `10h`) otherwise.
//!
//! ## Example
//!
//! ```rust
//! use svarka_engine::cards::{Card, Rank, Suit};
//! use svarka_cli::formatters::{format_card, format_hand};
//!
//! let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_hand(&[ace_spades]).starts_with("[A"));
//! ```

use svarka_engine::cards::{Card, Suit};
use svarka_engine::game::{Phase, RoundWinner, TableState};
use svarka_engine::hand::HandEvaluation;
use svarka_engine::player::{Player, PlayerAction};

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        suit.symbol().to_string()
    } else {
        match suit {
            Suit::Spades => "s",
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
        }
        .to_string()
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.label(), format_suit(&card.suit))
}

/// Format cards as `[A♠ K♥ 7♣]`.
pub fn format_hand(cards: &[Card]) -> String {
    let inner: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", inner.join(" "))
}

/// `Svarka in Hearts (32, Svarka)`
pub fn format_evaluation(eval: &HandEvaluation) -> String {
    format!("{} ({}, {})", eval.description, eval.score, eval.tier)
}

pub fn format_action(action: &PlayerAction) -> String {
    match action {
        PlayerAction::Fold => "fold".to_string(),
        PlayerAction::Check => "check".to_string(),
        PlayerAction::Call => "call".to_string(),
        PlayerAction::Bet(n) => format!("bet {}", n),
        PlayerAction::Raise(n) => format!("raise to {}", n),
        PlayerAction::StartNewRound => "start new round".to_string(),
    }
}

/// One line per seat: name, balance and a marker for folded or broke players.
pub fn format_balances(state: &TableState) -> Vec<String> {
    state
        .players()
        .iter()
        .map(|p| {
            format!(
                "  {:<10} {:>7}{}",
                p.name(),
                p.balance(),
                seat_note(p, state.phase())
            )
        })
        .collect()
}

fn seat_note(p: &Player, phase: Phase) -> &'static str {
    if p.balance() > 0 {
        ""
    } else if phase == Phase::Betting && p.is_all_in() {
        "  (all-in)"
    } else {
        "  (out)"
    }
}

pub fn format_winner(winner: &RoundWinner) -> String {
    if winner.uncontested {
        format!("{} wins {} ({})", winner.name, winner.pot, winner.description)
    } else {
        let score = winner
            .evaluation
            .as_ref()
            .map(|e| e.score.to_string())
            .unwrap_or_default();
        format!(
            "{} wins {} with {} {} ({})",
            winner.name,
            winner.pot,
            winner.description,
            format_hand(&winner.hand),
            score
        )
    }
}
