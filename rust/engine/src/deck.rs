use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

pub const DECK_SIZE: usize = 32;

#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep canonical order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            rng,
        }
    }

    /// Refill to all 32 cards and apply a uniform Fisher–Yates permutation.
    pub fn shuffle(&mut self) {
        self.reset();
        self.cards.shuffle(&mut self.rng);
    }

    pub fn reset(&mut self) {
        self.cards = full_deck();
    }

    /// Remove and return the first `n` cards. Fails without touching the
    /// deck when fewer than `n` remain.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        if n > self.cards.len() {
            return Err(GameError::DeckExhausted {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..n).collect())
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_deck_is_in_canonical_order() {
        let deck = Deck::new_with_seed(1);
        assert_eq!(deck.cards(), full_deck().as_slice());
        assert_eq!(deck.remaining(), DECK_SIZE);
    }

    #[test]
    fn failed_deal_leaves_deck_untouched() {
        let mut deck = Deck::new_with_seed(3);
        deck.shuffle();
        deck.deal(30).unwrap();
        let before = deck.cards().to_vec();
        let err = deck.deal(3).unwrap_err();
        assert_eq!(
            err,
            GameError::DeckExhausted {
                requested: 3,
                remaining: 2
            }
        );
        assert_eq!(deck.cards(), before.as_slice());
    }
}
