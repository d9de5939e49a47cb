//! Deterministic decision providers shared by the engine integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use fivedraw_engine::engine::Game;
use fivedraw_engine::hand::Hand;
use fivedraw_engine::player::{DecisionProvider, Player};
use fivedraw_engine::rules::SimpleRules;

/// What a scripted seat does once its queued answers run out.
#[derive(Debug, Clone, Copy)]
pub enum Then {
    /// Match the table maximum (or commit the whole stack when short).
    Call,
    /// Offer nothing: checks at the maximum, folds when behind.
    Passive,
}

/// Calls a seat made: `(current_bet, max_bet, cash)`.
pub type BetLog = Rc<RefCell<Vec<(u32, u32, u32)>>>;

pub struct Script {
    bets: VecDeque<u32>,
    discards: VecDeque<Vec<usize>>,
    then: Then,
    log: Option<BetLog>,
}

impl Script {
    pub fn new(bets: &[u32], then: Then) -> Self {
        Self {
            bets: bets.iter().copied().collect(),
            discards: VecDeque::new(),
            then,
            log: None,
        }
    }

    pub fn calling() -> Self {
        Self::new(&[], Then::Call)
    }

    pub fn with_discards(mut self, discards: Vec<Vec<usize>>) -> Self {
        self.discards = discards.into();
        self
    }

    pub fn logged(mut self, log: &BetLog) -> Self {
        self.log = Some(Rc::clone(log));
        self
    }
}

impl DecisionProvider for Script {
    fn bet(&mut self, current_bet: u32, max_bet: u32, hand: &Hand) -> u32 {
        if let Some(log) = &self.log {
            log.borrow_mut().push((current_bet, max_bet, hand.cash()));
        }
        self.bets.pop_front().unwrap_or(match self.then {
            Then::Call => (max_bet - current_bet).min(hand.cash()),
            Then::Passive => 0,
        })
    }

    fn discard(&mut self, _hand: &Hand) -> Vec<usize> {
        self.discards.pop_front().unwrap_or_default()
    }
}

pub fn player(name: &str, script: Script) -> Player<'static> {
    Player::new(name, Box::new(script))
}

pub fn game(players: Vec<Player<'static>>, cash: u32) -> Game<'static> {
    Game::with_rules(players, cash, SimpleRules::default(), Some(2024)).expect("valid setup")
}
