use std::fmt;

use crate::cards::Card;
use crate::errors::GameError;

/// Number of cards dealt to every live hand at the start of a round.
pub const HAND_SIZE: usize = 5;

/// A seat's current cards plus its chip balance.
/// An empty hand means the seat has folded (or the round has not been dealt yet).
#[derive(Debug, Default)]
pub struct Hand {
    cards: Vec<Card>,
    cash: u32,
}

impl Hand {
    pub fn new(cash: u32) -> Self {
        Self {
            cards: Vec::with_capacity(HAND_SIZE),
            cash,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn has_cards(&self) -> bool {
        !self.cards.is_empty()
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn take_card(&mut self, index: usize) -> Result<Card, GameError> {
        if index >= self.cards.len() {
            return Err(GameError::IndexOutOfRange {
                index,
                len: self.cards.len(),
            });
        }
        Ok(self.cards.remove(index))
    }

    pub fn cash(&self) -> u32 {
        self.cash
    }

    /// Debits `amount` and returns the remaining balance.
    pub fn take_cash(&mut self, amount: u32) -> Result<u32, GameError> {
        if amount > self.cash {
            return Err(GameError::InsufficientFunds {
                requested: amount,
                available: self.cash,
            });
        }
        self.cash -= amount;
        Ok(self.cash)
    }

    /// Credits `amount`. Game setup bounds the table total to `u32`, so pots never saturate.
    pub fn put_cash(&mut self, amount: u32) -> u32 {
        self.cash = self.cash.saturating_add(amount);
        self.cash
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
