//! Seeded random opponent.

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

use fivedraw_engine::hand::Hand;
use fivedraw_engine::player::DecisionProvider;
use fivedraw_engine::rules::{Rules, SimpleRules};

/// Chance, in percent, of folding when facing a bet.
const FOLD_PCT: u32 = 15;
/// Chance, in percent, of raising instead of calling.
const RAISE_PCT: u32 = 20;

/// Picks legal moves at random from a seeded generator.
///
/// Two instances built from the same seed and shown the same hands answer identically.
#[derive(Debug, Clone)]
pub struct RandomAI {
    rng: StdRng,
    /// Raises are whole multiples of this many chips.
    chip_step: u32,
}

impl RandomAI {
    /// Raises in steps of the default small blind.
    pub fn new(seed: u64) -> Self {
        Self::with_step(seed, SimpleRules::SMALL_BLIND)
    }

    pub fn with_step(seed: u64, chip_step: u32) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            chip_step: chip_step.max(1),
        }
    }

    /// Raises in steps of the table's small blind.
    pub fn for_rules<R: Rules>(seed: u64, rules: &R) -> Self {
        Self::with_step(seed, rules.small_blind())
    }
}

impl DecisionProvider for RandomAI {
    fn bet(&mut self, current_bet: u32, max_bet: u32, hand: &Hand) -> u32 {
        let cash = hand.cash();
        let to_call = max_bet.saturating_sub(current_bet).min(cash);
        let roll = self.rng.random_range(0..100);
        if to_call > 0 && roll < FOLD_PCT {
            return 0;
        }
        let spare = cash - to_call;
        let step = self.chip_step;
        if roll >= 100 - RAISE_PCT && spare >= step {
            let steps = self.rng.random_range(1..=(spare / step).min(4));
            return to_call + steps * step;
        }
        to_call
    }

    fn discard(&mut self, hand: &Hand) -> Vec<usize> {
        let len = hand.len();
        if len == 0 {
            return Vec::new();
        }
        let count = self.rng.random_range(0..=len.min(3));
        index::sample(&mut self.rng, len, count).into_vec()
    }
}
