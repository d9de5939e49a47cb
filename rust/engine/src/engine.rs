use tracing::{debug, info};

use crate::deck::Deck;
use crate::errors::GameError;
use crate::game::{Roster, Seat};
use crate::hand::HAND_SIZE;
use crate::logger::{Narrator, RoundEvent, RoundRecord, SilentNarrator};
use crate::player::Player;
use crate::rules::{Combination, HandRank, Rules, SimpleRules};

/// 52 cards cover five per seat with room for exchange replacements.
pub const MAX_SEATS: usize = 10;

/// Stage of the round currently being played. `Idle` between rounds.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    Idle,
    Prepare,
    Blinds,
    Betting1,
    Exchange,
    Betting2,
    Showdown,
    Elimination,
}

/// Core game engine that runs five-card draw rounds until one seat is left.
/// Owns the deck and every seat for the whole game; cards only ever move between them.
///
/// # Examples
///
/// ```
/// use fivedraw_engine::engine::Game;
/// use fivedraw_engine::hand::Hand;
/// use fivedraw_engine::player::{DecisionProvider, Player};
///
/// struct AllIn;
///
/// impl DecisionProvider for AllIn {
///     fn bet(&mut self, _current: u32, _max: u32, hand: &Hand) -> u32 {
///         hand.cash()
///     }
///     fn discard(&mut self, _hand: &Hand) -> Vec<usize> {
///         Vec::new()
///     }
/// }
///
/// let players = vec![
///     Player::new("ann", Box::new(AllIn)),
///     Player::new("bob", Box::new(AllIn)),
/// ];
/// let mut game = Game::new(players, 1000).unwrap();
/// while !game.is_game_over() {
///     game.play_round().unwrap();
/// }
/// assert_eq!(game.total_chips(), 2000);
/// ```
#[derive(Debug)]
pub struct Game<'a, R: Rules = SimpleRules> {
    roster: Roster<'a>,
    deck: Deck,
    current_bets: Vec<u32>,
    rules: R,
    seed: u64,
    round: u32,
    phase: Phase,
}

/// Events of the round in progress, forwarded to the narrator as they happen.
struct RoundLog<'n> {
    narrator: &'n mut dyn Narrator,
    events: Vec<RoundEvent>,
}

impl<'n> RoundLog<'n> {
    fn new(narrator: &'n mut dyn Narrator) -> Self {
        Self {
            narrator,
            events: Vec::new(),
        }
    }

    fn emit(&mut self, event: RoundEvent) {
        debug!(%event, "round event");
        self.narrator.narrate(&event);
        self.events.push(event);
    }
}

struct ShowdownOutcome {
    winner: Option<(String, Combination)>,
    pot: u32,
}

impl<'a> Game<'a, SimpleRules> {
    /// Creates a game with the default blinds and a random deck seed.
    pub fn new(players: Vec<Player<'a>>, initial_cash: u32) -> Result<Self, GameError> {
        Self::with_rules(players, initial_cash, SimpleRules::default(), None)
    }
}

impl<'a, R: Rules> Game<'a, R> {
    pub fn with_rules(
        players: Vec<Player<'a>>,
        initial_cash: u32,
        rules: R,
        seed: Option<u64>,
    ) -> Result<Self, GameError> {
        if players.is_empty() {
            return Err(GameError::InvalidSetup(
                "at least one player is required".into(),
            ));
        }
        if players.len() > MAX_SEATS {
            return Err(GameError::InvalidSetup(format!(
                "{} players exceed the {} seat limit",
                players.len(),
                MAX_SEATS
            )));
        }
        if rules.small_blind() > rules.big_blind() {
            return Err(GameError::InvalidSetup(format!(
                "small blind {} exceeds big blind {}",
                rules.small_blind(),
                rules.big_blind()
            )));
        }
        if rules.big_blind() == 0 {
            return Err(GameError::InvalidSetup(
                "big blind must be positive".into(),
            ));
        }
        if initial_cash < rules.big_blind() {
            return Err(GameError::InvalidSetup(format!(
                "starting cash {} does not cover the big blind {}",
                initial_cash,
                rules.big_blind()
            )));
        }
        // Every pot and balance stays below the table total.
        if initial_cash.checked_mul(players.len() as u32).is_none() {
            return Err(GameError::InvalidSetup(format!(
                "starting cash {} for {} players overflows the chip count",
                initial_cash,
                players.len()
            )));
        }
        let seed = seed.unwrap_or_else(rand::random);
        let seats = players.len();
        debug!(seats, initial_cash, seed, "new game");
        Ok(Self {
            roster: Roster::new(players, initial_cash),
            deck: Deck::new_with_seed(seed),
            current_bets: vec![0; seats],
            rules,
            seed,
            round: 0,
            phase: Phase::Idle,
        })
    }

    pub fn is_game_over(&self) -> bool {
        self.roster.len() == 1
    }

    /// Name of the last seat standing once the game is over.
    pub fn winner(&self) -> Option<&str> {
        if self.is_game_over() {
            self.roster.seats().first().map(Seat::name)
        } else {
            None
        }
    }

    pub fn seats(&self) -> &[Seat<'a>] {
        self.roster.seats()
    }

    pub fn dealer(&self) -> Option<usize> {
        self.roster.dealer()
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    pub fn current_bets(&self) -> &[u32] {
        &self.current_bets
    }

    pub fn pot(&self) -> u32 {
        self.current_bets
            .iter()
            .fold(0u32, |acc, b| acc.saturating_add(*b))
    }

    /// Cash held by all seats plus chips committed to the current round.
    pub fn total_chips(&self) -> u32 {
        self.roster
            .seats()
            .iter()
            .fold(self.pot(), |acc, s| acc.saturating_add(s.hand.cash()))
    }

    /// Cards in the deck plus cards in every hand; always 52.
    pub fn card_count(&self) -> usize {
        self.deck.len() + self.roster.seats().iter().map(|s| s.hand.len()).sum::<usize>()
    }

    /// Plays one full round without narration.
    pub fn play_round(&mut self) -> Result<RoundRecord, GameError> {
        self.play_round_with(&mut SilentNarrator)
    }

    /// Plays one full round, streaming every event to `narrator`.
    ///
    /// Any error aborts the round where it happened; the game should not be
    /// played further after that.
    pub fn play_round_with(
        &mut self,
        narrator: &mut dyn Narrator,
    ) -> Result<RoundRecord, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameAlreadyOver);
        }
        self.round += 1;
        let mut log = RoundLog::new(narrator);

        self.prepare_round(&mut log)?;
        let dealer = self.dealer_index();
        let dealer_name = self.roster.seat(dealer).name().to_string();

        self.place_blinds(&mut log)?;
        let first = self.roster.next_seat(dealer, 3);
        self.betting_round(first, Phase::Betting1, &mut log)?;
        self.exchange_round(&mut log)?;
        let first = self.roster.next_seat(dealer, 1);
        self.betting_round(first, Phase::Betting2, &mut log)?;
        let outcome = self.showdown(&mut log);
        self.end_round(&mut log)?;
        self.phase = Phase::Idle;

        let (winner, combination) = match outcome.winner {
            Some((name, combination)) => (Some(name), Some(combination)),
            None => (None, None),
        };
        Ok(RoundRecord {
            round_id: self.round.to_string(),
            seed: self.seed,
            dealer: dealer_name,
            events: log.events,
            winner,
            combination,
            pot: outcome.pot,
            ts: None,
        })
    }

    fn dealer_index(&self) -> usize {
        self.roster.dealer().unwrap_or(0)
    }

    fn max_bet(&self) -> u32 {
        self.current_bets.iter().copied().max().unwrap_or(0)
    }

    fn live_hands(&self) -> usize {
        self.roster
            .seats()
            .iter()
            .filter(|s| s.hand.has_cards())
            .count()
    }

    /// Every seat still able to act has matched the table maximum.
    fn are_bets_done(&self) -> bool {
        let max_bet = self.max_bet();
        self.roster
            .seats()
            .iter()
            .zip(&self.current_bets)
            .all(|(seat, &bet)| bet == max_bet || !seat.can_act())
    }

    fn prepare_round(&mut self, log: &mut RoundLog<'_>) -> Result<(), GameError> {
        self.phase = Phase::Prepare;
        self.deck.reshuffle();
        for _ in 0..HAND_SIZE {
            for seat in self.roster.seats_mut() {
                seat.hand.add_card(self.deck.take()?);
            }
        }
        self.current_bets = vec![0; self.roster.len()];
        let dealer = self.roster.rotate_dealer();
        debug!(round = self.round, dealer, "round prepared");
        log.emit(RoundEvent::DealerButton {
            player: self.roster.seat(dealer).name().to_string(),
        });
        Ok(())
    }

    fn place_blinds(&mut self, log: &mut RoundLog<'_>) -> Result<(), GameError> {
        self.phase = Phase::Blinds;
        let small = self.roster.next_seat(self.dealer_index(), 1);
        let big = self.roster.next_seat(small, 1);
        let (small_amount, big_amount) = (self.rules.small_blind(), self.rules.big_blind());

        self.roster.seat_mut(small).hand.take_cash(small_amount)?;
        self.current_bets[small] = small_amount;
        self.roster.seat_mut(big).hand.take_cash(big_amount)?;
        self.current_bets[big] = big_amount;

        log.emit(RoundEvent::Blinds {
            small: self.roster.seat(small).name().to_string(),
            big: self.roster.seat(big).name().to_string(),
            small_amount,
            big_amount,
        });
        Ok(())
    }

    /// Runs one betting phase from seat `first`.
    ///
    /// Every seat gets at least one turn; after that the phase stops as soon as the
    /// bets are settled. It also stops once fewer than two hands are live.
    fn betting_round(
        &mut self,
        first: usize,
        phase: Phase,
        log: &mut RoundLog<'_>,
    ) -> Result<(), GameError> {
        self.phase = phase;
        let seats = self.roster.len();
        let mut turn = 0usize;
        loop {
            if self.live_hands() < 2 {
                break;
            }
            if turn >= seats && self.are_bets_done() {
                break;
            }
            if !self.roster.seats().iter().any(Seat::can_act) {
                break;
            }
            let idx = self.roster.next_seat(first, turn);
            turn += 1;
            if !self.roster.seat(idx).can_act() {
                continue;
            }
            self.act(idx, log)?;
        }
        debug!(?phase, turns = turn, pot = self.pot(), "betting settled");
        Ok(())
    }

    fn act(&mut self, idx: usize, log: &mut RoundLog<'_>) -> Result<(), GameError> {
        let max_bet = self.max_bet();
        let cur_bet = self.current_bets[idx];
        let seat = self.roster.seat_mut(idx);
        let bet = seat.player.bet(cur_bet, max_bet, &seat.hand);
        let player = seat.name().to_string();
        let target = cur_bet.saturating_add(bet);

        if target < max_bet && bet < seat.hand.cash() {
            self.fold(idx)?;
            log.emit(RoundEvent::Folded { player });
            return Ok(());
        }

        seat.hand.take_cash(bet)?;
        self.current_bets[idx] = target;
        let event = if bet == 0 {
            RoundEvent::Checked { player }
        } else if target > max_bet {
            RoundEvent::Raised { player, to: target }
        } else if target == max_bet {
            RoundEvent::Called { player, to: target }
        } else {
            RoundEvent::AllIn { player, to: target }
        };
        log.emit(event);
        Ok(())
    }

    fn exchange_round(&mut self, log: &mut RoundLog<'_>) -> Result<(), GameError> {
        self.phase = Phase::Exchange;
        let dealer = self.dealer_index();
        for i in 0..self.roster.len() {
            let idx = self.roster.next_seat(dealer, i + 1);
            let seat = self.roster.seat_mut(idx);
            if !seat.hand.has_cards() {
                continue;
            }
            let mut picks = seat.player.discard(&seat.hand);
            let len = seat.hand.len();
            if let Some(&index) = picks.iter().find(|&&i| i >= len) {
                return Err(GameError::IndexOutOfRange { index, len });
            }
            // highest first so earlier removals never shift later ones
            picks.sort_unstable_by(|a, b| b.cmp(a));
            picks.dedup();
            for &pick in &picks {
                let card = seat.hand.take_card(pick)?;
                self.deck.put(card);
                seat.hand.add_card(self.deck.take()?);
            }
            log.emit(RoundEvent::Exchanged {
                player: seat.name().to_string(),
                count: picks.len(),
            });
        }
        Ok(())
    }

    fn showdown(&mut self, log: &mut RoundLog<'_>) -> ShowdownOutcome {
        self.phase = Phase::Showdown;
        let pot = self.pot();

        let mut best: Option<(usize, HandRank)> = None;
        for (idx, seat) in self.roster.seats().iter().enumerate() {
            let Some(rank) = self.rules.rank(seat.hand.cards()) else {
                continue;
            };
            match best {
                Some((_, top)) if rank <= top => {}
                _ => best = Some((idx, rank)),
            }
        }

        let winner = match best {
            Some((idx, rank)) => {
                let seat = self.roster.seat_mut(idx);
                seat.hand.put_cash(pot);
                let name = seat.name().to_string();
                let combination = rank.combination();
                info!(winner = %name, %rank, pot, "showdown");
                log.emit(RoundEvent::Showdown {
                    player: name.clone(),
                    combination,
                    cards: seat.hand.cards().iter().map(ToString::to_string).collect(),
                    pot,
                });
                Some((name, combination))
            }
            None => {
                // nobody left to pay; committed chips go back where they came from
                for (seat, bet) in self.roster.seats_mut().iter_mut().zip(&self.current_bets) {
                    seat.hand.put_cash(*bet);
                }
                None
            }
        };
        self.current_bets.iter_mut().for_each(|b| *b = 0);
        ShowdownOutcome { winner, pot }
    }

    fn fold(&mut self, idx: usize) -> Result<(), GameError> {
        let seat = self.roster.seat_mut(idx);
        while seat.hand.has_cards() {
            self.deck.put(seat.hand.take_card(0)?);
        }
        Ok(())
    }

    fn end_round(&mut self, log: &mut RoundLog<'_>) -> Result<(), GameError> {
        self.phase = Phase::Elimination;
        for idx in 0..self.roster.len() {
            self.fold(idx)?;
        }
        let removed = self.roster.eliminate_below(self.rules.big_blind());
        for seat in &removed {
            info!(player = seat.name(), cash = seat.hand.cash(), "eliminated");
            log.emit(RoundEvent::Eliminated {
                player: seat.name().to_string(),
                cash: seat.hand.cash(),
            });
        }
        self.current_bets = vec![0; self.roster.len()];
        Ok(())
    }
}
