//! Opponent that replays queued answers.

use std::collections::VecDeque;

use fivedraw_engine::hand::Hand;
use fivedraw_engine::player::DecisionProvider;

/// Answers from queues, then falls back to calling (or checking) and standing pat.
///
/// With empty queues this is a calling station, which keeps every hand to showdown.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAI {
    bets: VecDeque<u32>,
    discards: VecDeque<Vec<usize>>,
}

impl ScriptedAI {
    pub fn new(bets: impl IntoIterator<Item = u32>, discards: impl IntoIterator<Item = Vec<usize>>) -> Self {
        Self {
            bets: bets.into_iter().collect(),
            discards: discards.into_iter().collect(),
        }
    }

    /// Answers still queued: `(bets, discards)`.
    pub fn remaining(&self) -> (usize, usize) {
        (self.bets.len(), self.discards.len())
    }
}

impl DecisionProvider for ScriptedAI {
    fn bet(&mut self, current_bet: u32, max_bet: u32, hand: &Hand) -> u32 {
        self.bets
            .pop_front()
            .unwrap_or_else(|| max_bet.saturating_sub(current_bet).min(hand.cash()))
    }

    fn discard(&mut self, _hand: &Hand) -> Vec<usize> {
        self.discards.pop_front().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_then_call() {
        let h = Hand::new(50);
        let mut ai = ScriptedAI::new([100], [vec![0, 2]]);
        assert_eq!(ai.bet(0, 32, &h), 100);
        assert_eq!(ai.bet(0, 32, &h), 32);
        assert_eq!(ai.bet(0, 96, &h), 50);
        assert_eq!(ai.discard(&h), vec![0, 2]);
        assert!(ai.discard(&h).is_empty());
        assert_eq!(ai.remaining(), (0, 0));
    }
}
