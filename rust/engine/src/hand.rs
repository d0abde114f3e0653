use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, CHECHAK_POINTS};

/// Primary ranking category of a three-card hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Tier {
    HighCard = 0,
    Pair = 1,
    Triple = 2,
    /// Three of a suit, plus the fixed-score specials (three Aces, three
    /// Sevens with the Chechak) which out-score every ordinary flush.
    Svarka = 3,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Tier::HighCard => "High Card",
            Tier::Pair => "Pair",
            Tier::Triple => "Triple",
            Tier::Svarka => "Svarka",
        };
        f.write_str(s)
    }
}

/// Hand score in half points, so the 32.5 special stays exact.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(u16);

impl Score {
    pub const fn from_points(points: u16) -> Self {
        Score(points * 2)
    }

    pub const fn from_halves(halves: u16) -> Self {
        Score(halves)
    }

    pub fn halves(self) -> u16 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 2.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 2 == 0 {
            write!(f, "{}", self.0 / 2)
        } else {
            write!(f, "{}.5", self.0 / 2)
        }
    }
}

pub const THREE_ACES: Score = Score::from_points(33);
pub const THREE_SEVENS_WITH_CHECHAK: Score = Score::from_halves(65);

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandEvaluation {
    pub tier: Tier,
    pub score: Score,
    pub description: String,
}

impl HandEvaluation {
    fn new(tier: Tier, score: Score, description: String) -> Self {
        Self {
            tier,
            score,
            description,
        }
    }

    pub fn rank_key(&self) -> (Tier, Score) {
        (self.tier, self.score)
    }
}

/// Evaluate a three-card hand.
///
/// Checks run strongest first and the first match wins, since a hand can
/// satisfy several weaker predicates at once (a same-suit pair, say).
/// The Chechak (7♣) completes any rank or suit. A completed triple scores
/// three times the paired rank; everywhere else the Chechak counts 11.
///
/// # Examples
///
/// ```
/// use svarka_engine::cards::parse_cards;
/// use svarka_engine::hand::{evaluate_hand, Tier};
///
/// let cards = parse_cards("8♠ 8♥ 8♦").unwrap();
/// let hand: [_; 3] = cards.try_into().unwrap();
/// let eval = evaluate_hand(&hand);
/// assert_eq!(eval.tier, Tier::Triple);
/// assert_eq!(eval.score.to_string(), "24");
/// ```
pub fn evaluate_hand(cards: &[Card; 3]) -> HandEvaluation {
    let has_chechak = cards.iter().any(Card::is_chechak);
    let naturals: Vec<Card> = cards.iter().copied().filter(|c| !c.is_chechak()).collect();
    let total: u16 = cards.iter().map(Card::points).sum();

    let same_rank = naturals.windows(2).all(|w| w[0].rank == w[1].rank);
    let same_suit = naturals.windows(2).all(|w| w[0].suit == w[1].suit);
    let wild = if has_chechak { " with Chechak" } else { "" };

    if same_rank {
        let rank = naturals[0].rank;
        if rank == Rank::Ace {
            return HandEvaluation::new(Tier::Svarka, THREE_ACES, format!("Three Aces{}", wild));
        }
        if rank == Rank::Seven && has_chechak {
            return HandEvaluation::new(
                Tier::Svarka,
                THREE_SEVENS_WITH_CHECHAK,
                "Three Sevens with Chechak".to_string(),
            );
        }
        // A wildcard-completed triple scores like the natural one.
        return HandEvaluation::new(
            Tier::Triple,
            Score::from_points(3 * rank.points()),
            format!("Three {}{}", rank.plural(), wild),
        );
    }

    if same_suit {
        return HandEvaluation::new(
            Tier::Svarka,
            Score::from_points(total),
            format!("Svarka in {}{}", naturals[0].suit.name(), wild),
        );
    }

    if has_chechak {
        // Two unrelated naturals: the wildcard pairs with the stronger one.
        let best = naturals.iter().map(Card::points).max().unwrap_or(0);
        return HandEvaluation::new(
            Tier::Pair,
            Score::from_points(CHECHAK_POINTS + best),
            "Pair with Chechak".to_string(),
        );
    }

    if let Some(rank) = paired_rank(cards) {
        return HandEvaluation::new(
            Tier::Pair,
            Score::from_points(2 * rank.points()),
            format!("Pair of {}", rank.plural()),
        );
    }

    if let Some((a, b)) = suited_pair(cards) {
        return HandEvaluation::new(
            Tier::Pair,
            Score::from_points(a.points() + b.points()),
            format!("Suited Pair in {}", a.suit.name()),
        );
    }

    let high = cards.iter().max_by_key(|c| (c.points(), c.rank)).copied();
    let points = high.map(|c| c.points()).unwrap_or(0);
    let label = high.map(|c| c.to_string()).unwrap_or_default();
    HandEvaluation::new(
        Tier::HighCard,
        Score::from_points(points),
        format!("High Card {}", label),
    )
}

/// Evaluate a hand that may not hold exactly three cards.
pub fn try_evaluate(cards: &[Card]) -> Option<HandEvaluation> {
    let hand: &[Card; 3] = cards.try_into().ok()?;
    Some(evaluate_hand(hand))
}

pub fn compare_hands(a: &HandEvaluation, b: &HandEvaluation) -> Ordering {
    a.rank_key().cmp(&b.rank_key())
}

fn paired_rank(cards: &[Card; 3]) -> Option<Rank> {
    for i in 0..3 {
        for j in (i + 1)..3 {
            if cards[i].rank == cards[j].rank {
                return Some(cards[i].rank);
            }
        }
    }
    None
}

fn suited_pair(cards: &[Card; 3]) -> Option<(Card, Card)> {
    for i in 0..3 {
        for j in (i + 1)..3 {
            if cards[i].suit == cards[j].suit {
                return Some((cards[i], cards[j]));
            }
        }
    }
    None
}
