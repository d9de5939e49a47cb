use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// Cards not currently held by any hand, drawn from the front and returned to the back.
#[derive(Debug)]
pub struct Deck {
    cards: VecDeque<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep canonical order until reshuffle is called explicitly
        Self {
            cards: full_deck().into(),
            rng,
        }
    }

    pub fn reshuffle(&mut self) {
        self.cards.make_contiguous().shuffle(&mut self.rng);
    }

    pub fn take(&mut self) -> Result<Card, GameError> {
        self.cards.pop_front().ok_or(GameError::EmptyDeck)
    }

    pub fn put(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_from_empty_deck_fails() {
        let mut deck = Deck::new_with_seed(1);
        let mut held = Vec::new();
        while let Ok(c) = deck.take() {
            held.push(c);
        }
        assert_eq!(held.len(), 52);
        assert_eq!(deck.take(), Err(GameError::EmptyDeck));
        for c in held {
            deck.put(c);
        }
        assert_eq!(deck.len(), 52);
    }

    #[test]
    fn put_appends_to_the_back() {
        let mut deck = Deck::new_with_seed(1);
        let first = deck.take().unwrap();
        let label = first.to_string();
        deck.put(first);
        assert_eq!(deck.cards().last().map(|c| c.to_string()), Some(label));
    }
}
