use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Represents one of the four suits of the 32-card Svarka deck.
/// Declaration order is the canonical deck order (♠ ♥ ♦ ♣).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit (♠)
    Spades,
    /// Hearts suit (♥)
    Hearts,
    /// Diamonds suit (♦)
    Diamonds,
    /// Clubs suit (♣)
    Clubs,
}

impl Suit {
    pub fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Suit::Spades => "Spades",
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
        }
    }
}

/// Represents the rank of a card from Seven through Ace.
/// The discriminant orders ranks; point values come from [`Rank::points`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 7
    Seven = 7,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Base point value: 7→7, 8→8, 9→9, 10/J/Q/K→10, A→11.
    pub fn points(self) -> u16 {
        match self {
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            Rank::Seven => "Sevens",
            Rank::Eight => "Eights",
            Rank::Nine => "Nines",
            Rank::Ten => "Tens",
            Rank::Jack => "Jacks",
            Rank::Queen => "Queens",
            Rank::King => "Kings",
            Rank::Ace => "Aces",
        }
    }
}

/// Represents a single playing card with a suit and rank.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card
    pub suit: Suit,
    /// The rank of the card (Seven through Ace)
    pub rank: Rank,
}

/// The Chechak: the wildcard 7 of Clubs.
pub const CHECHAK: Card = Card {
    suit: Suit::Clubs,
    rank: Rank::Seven,
};

/// Points the Chechak contributes wherever it is used.
pub const CHECHAK_POINTS: u16 = 11;

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub fn is_chechak(&self) -> bool {
        *self == CHECHAK
    }

    /// Point value of the card, with the Chechak counting 11.
    pub fn points(&self) -> u16 {
        if self.is_chechak() {
            CHECHAK_POINTS
        } else {
            self.rank.points()
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseCardError {
    #[error("empty card")]
    Empty,
    #[error("unknown rank in card '{0}'")]
    UnknownRank(String),
    #[error("unknown suit in card '{0}'")]
    UnknownSuit(String),
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Accepts `A♠`, `10♥`, `7♣` as well as `As`, `Th`, `10d`, `7c`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let suit_char = s.chars().last().ok_or(ParseCardError::Empty)?;
        let rank_part = &s[..s.len() - suit_char.len_utf8()];
        let suit = match suit_char.to_ascii_lowercase() {
            '♠' | 's' => Suit::Spades,
            '♥' | 'h' => Suit::Hearts,
            '♦' | 'd' => Suit::Diamonds,
            '♣' | 'c' => Suit::Clubs,
            _ => return Err(ParseCardError::UnknownSuit(s.to_string())),
        };
        let rank = match rank_part.to_ascii_uppercase().as_str() {
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(ParseCardError::UnknownRank(s.to_string())),
        };
        Ok(Card { suit, rank })
    }
}

/// Parse a whitespace or comma separated list of cards.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs]
}

pub fn all_ranks() -> [Rank; 8] {
    [
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

/// The 32 cards in canonical order: suit-major, rank-minor.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(32);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { suit: s, rank: r });
        }
    }
    v
}

pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
