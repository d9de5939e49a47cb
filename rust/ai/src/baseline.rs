//! Baseline opponent for five-card draw.
//!
//! Plays straight from the made hand: no bluffs and no randomness, so simulations
//! seeded the same way replay identically.

use std::collections::HashMap;

use fivedraw_engine::cards::Card;
use fivedraw_engine::hand::Hand;
use fivedraw_engine::player::DecisionProvider;
use fivedraw_engine::rules::{rank_cards, Combination, Rules, SimpleRules};

/// Rank-driven opponent.
///
/// Bet sizes are counted in units of the table's big blind.
///
/// # Strategy
///
/// **Betting:**
/// - Straight or better: raise one unit while the table maximum is below eight units
/// - Two pairs or a set: raise one unit while the maximum is below four units, else call
/// - Pair: call while the price stays within a quarter of the stack
/// - Highest card: check when free, call a single big blind, fold otherwise
///
/// **Drawing:**
/// - Straight or better: stand pat
/// - Four to a flush: draw one
/// - Otherwise: throw the lowest unpaired cards, at most three
///
/// # Example
///
/// ```rust
/// use fivedraw_ai::baseline::BaselineAI;
/// use fivedraw_engine::cards::{Card, Rank, Suit};
/// use fivedraw_engine::hand::Hand;
/// use fivedraw_engine::player::DecisionProvider;
///
/// let mut hand = Hand::new(500);
/// hand.add_card(Card::new(Suit::Spades, Rank::King));
/// hand.add_card(Card::new(Suit::Hearts, Rank::King));
/// hand.add_card(Card::new(Suit::Clubs, Rank::Four));
/// hand.add_card(Card::new(Suit::Diamonds, Rank::Nine));
/// hand.add_card(Card::new(Suit::Hearts, Rank::Two));
///
/// let mut ai = BaselineAI::new(32);
/// assert_eq!(ai.discard(&hand), vec![4, 2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct BaselineAI {
    big_blind: u32,
}

impl Default for BaselineAI {
    fn default() -> Self {
        Self::new(SimpleRules::BIG_BLIND)
    }
}

impl BaselineAI {
    /// Creates an opponent sized for a table with the given big blind.
    pub fn new(big_blind: u32) -> Self {
        Self {
            big_blind: big_blind.max(1),
        }
    }

    pub fn for_rules<R: Rules>(rules: &R) -> Self {
        Self::new(rules.big_blind())
    }

    /// Chips added per raise.
    pub fn raise_unit(&self) -> u32 {
        self.big_blind
    }

    /// Raise ceiling (as a table maximum) for a combination; `None` never raises.
    fn raise_cap(&self, combination: Combination) -> Option<u32> {
        let unit = self.raise_unit();
        match combination {
            Combination::HighestCard | Combination::Pair => None,
            Combination::TwoPairs | Combination::Set => Some(unit.saturating_mul(4)),
            _ => Some(unit.saturating_mul(8)),
        }
    }

    fn decide_bet(
        &self,
        combination: Combination,
        to_call: u32,
        max_bet: u32,
        cash: u32,
    ) -> u32 {
        // Covering the call takes everything: only made hands go all-in.
        if to_call >= cash {
            return if combination >= Combination::TwoPairs {
                cash
            } else {
                0
            };
        }

        if let Some(cap) = self.raise_cap(combination) {
            if max_bet < cap {
                return to_call.saturating_add(self.raise_unit()).min(cash);
            }
            return to_call;
        }

        match combination {
            Combination::Pair if to_call <= cash / 4 => to_call,
            Combination::HighestCard if to_call <= self.raise_unit() => to_call,
            _ => 0,
        }
    }

    /// Positions to exchange, lowest unpaired cards first.
    fn pick_discards(cards: &[Card]) -> Vec<usize> {
        let Some(rank) = rank_cards(cards) else {
            return Vec::new();
        };
        if rank.combination() >= Combination::Straight {
            return Vec::new();
        }

        let mut suits: HashMap<_, Vec<usize>> = HashMap::new();
        let mut ranks: HashMap<_, usize> = HashMap::new();
        for (i, c) in cards.iter().enumerate() {
            suits.entry(c.suit()).or_default().push(i);
            *ranks.entry(c.rank()).or_default() += 1;
        }
        if rank.combination() < Combination::TwoPairs && suits.values().any(|v| v.len() == 4) {
            if let Some(odd) = suits.values().find(|v| v.len() == 1) {
                return odd.clone();
            }
        }

        let mut singles: Vec<usize> = (0..cards.len())
            .filter(|&i| ranks[&cards[i].rank()] == 1)
            .collect();
        singles.sort_by_key(|&i| cards[i].rank());
        // with no pair this keeps the two best cards
        singles.truncate(3);
        singles
    }
}

impl DecisionProvider for BaselineAI {
    fn bet(&mut self, current_bet: u32, max_bet: u32, hand: &Hand) -> u32 {
        let Some(rank) = rank_cards(hand.cards()) else {
            return 0;
        };
        let to_call = max_bet.saturating_sub(current_bet);
        self.decide_bet(rank.combination(), to_call, max_bet, hand.cash())
    }

    fn discard(&mut self, hand: &Hand) -> Vec<usize> {
        Self::pick_discards(hand.cards())
    }
}
