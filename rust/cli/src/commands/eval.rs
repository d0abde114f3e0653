//! Evaluate a single three-card hand.

use std::collections::HashSet;
use std::io::Write;

use svarka_engine::cards::{Card, parse_cards};
use svarka_engine::hand::evaluate_hand;

use crate::error::CliError;
use crate::formatters::format_hand;

/// Handle `svarka eval <cards>`.
///
/// Cards may be given as one argument (`"7♣ K♥ K♦"`) or several, in either
/// symbol (`A♠`) or letter (`As`, `10h`) form.
pub fn handle_eval_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let joined = cards.join(" ");
    let parsed = parse_cards(&joined).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    let hand: [Card; 3] = parsed.try_into().map_err(|v: Vec<Card>| {
        CliError::InvalidInput(format!("a hand has exactly 3 cards, got {}", v.len()))
    })?;
    let unique: HashSet<Card> = hand.iter().copied().collect();
    if unique.len() != hand.len() {
        return Err(CliError::InvalidInput("duplicate card in hand".into()));
    }

    let eval = evaluate_hand(&hand);
    writeln!(out, "Hand: {}", format_hand(&hand))?;
    writeln!(out, "Combination: {}", eval.description)?;
    writeln!(out, "Tier: {}", eval.tier)?;
    writeln!(out, "Score: {}", eval.score)?;
    Ok(())
}
