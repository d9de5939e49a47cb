use std::fmt;

use crate::hand::Hand;

/// Decisions a seat must make during a round.
///
/// The engine calls these synchronously and never mutates the hand while a call is
/// in progress. Implementations range from an interactive terminal player to
/// scripted or automatic opponents.
///
/// # Example Implementation
///
/// ```rust
/// use fivedraw_engine::hand::Hand;
/// use fivedraw_engine::player::DecisionProvider;
///
/// /// Always matches the table maximum and never exchanges cards.
/// struct Caller;
///
/// impl DecisionProvider for Caller {
///     fn bet(&mut self, current_bet: u32, max_bet: u32, hand: &Hand) -> u32 {
///         (max_bet - current_bet).min(hand.cash())
///     }
///
///     fn discard(&mut self, _hand: &Hand) -> Vec<usize> {
///         Vec::new()
///     }
/// }
/// ```
pub trait DecisionProvider {
    /// Returns the amount to add on top of `current_bet`, given the table's `max_bet`.
    ///
    /// Falling short of `max_bet` without committing the whole stack folds the hand.
    /// Returning more than `hand.cash()` violates the contract and aborts the round.
    fn bet(&mut self, current_bet: u32, max_bet: u32, hand: &Hand) -> u32;

    /// Returns the 0-based positions of the cards to exchange.
    fn discard(&mut self, hand: &Hand) -> Vec<usize>;
}

/// A named seat occupant bound to its decision provider.
pub struct Player<'a> {
    name: String,
    provider: Box<dyn DecisionProvider + 'a>,
}

impl<'a> Player<'a> {
    pub fn new(name: impl Into<String>, provider: Box<dyn DecisionProvider + 'a>) -> Self {
        Self {
            name: name.into(),
            provider,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bet(&mut self, current_bet: u32, max_bet: u32, hand: &Hand) -> u32 {
        self.provider.bet(current_bet, max_bet, hand)
    }

    pub fn discard(&mut self, hand: &Hand) -> Vec<usize> {
        self.provider.discard(hand)
    }
}

impl fmt::Debug for Player<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player").field("name", &self.name).finish()
    }
}
