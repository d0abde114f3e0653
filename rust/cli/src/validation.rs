//! Input parsing for interactive commands.
//!
//! Parsers return a [`ParseResult`] rather than an error so the play loop
//! can show the message and prompt again.

use svarka_engine::player::PlayerAction;

/// Result type for parsing user input into player actions.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid player action parsed from input
    Action(PlayerAction),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input string into a PlayerAction or special commands.
///
/// Accepts the following input formats (case-insensitive):
/// - "f" or "fold" → Fold
/// - "k" or "check" → Check
/// - "c" or "call" → Call
/// - "bet X" / "b X" → Bet to a total of X
/// - "raise X" / "r X" → Raise to a total of X
/// - "q" or "quit" → Quit command
///
/// # Example
///
/// ```rust
/// # use svarka_cli::validation::{parse_player_action, ParseResult};
/// use svarka_engine::player::PlayerAction;
///
/// assert_eq!(
///     parse_player_action("fold"),
///     ParseResult::Action(PlayerAction::Fold)
/// );
///
/// assert_eq!(
///     parse_player_action("raise 40"),
///     ParseResult::Action(PlayerAction::Raise(40))
/// );
///
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
///
/// match parse_player_action("allin") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    match parts[0] {
        "q" | "quit" => ParseResult::Quit,
        "fold" | "f" => ParseResult::Action(PlayerAction::Fold),
        "check" | "k" => ParseResult::Action(PlayerAction::Check),
        "call" | "c" => ParseResult::Action(PlayerAction::Call),
        "bet" | "b" => match parse_amount(&parts, "Bet", "bet 20") {
            Ok(amount) => ParseResult::Action(PlayerAction::Bet(amount)),
            Err(msg) => ParseResult::Invalid(msg),
        },
        "raise" | "r" => match parse_amount(&parts, "Raise", "raise 40") {
            Ok(amount) => ParseResult::Action(PlayerAction::Raise(amount)),
            Err(msg) => ParseResult::Invalid(msg),
        },
        _ => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: fold, check, call, bet <amount>, raise <amount>, q",
            parts[0]
        )),
    }
}

fn parse_amount(parts: &[&str], label: &str, example: &str) -> Result<u32, String> {
    let Some(raw) = parts.get(1) else {
        return Err(format!("{} requires an amount (e.g., '{}')", label, example));
    };
    match raw.parse::<u32>() {
        Ok(0) => Err(format!("{} amount must be positive", label)),
        Ok(amount) => Ok(amount),
        Err(_) => Err(format!("Invalid {} amount", label.to_lowercase())),
    }
}

/// Parse a yes/no answer. `None` means the input was neither.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "j" | "join" => Some(true),
        "n" | "no" | "d" | "decline" => Some(false),
        _ => None,
    }
}
