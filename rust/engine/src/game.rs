use crate::hand::Hand;
use crate::player::Player;

/// One position at the table: who sits there and what they hold.
#[derive(Debug)]
pub struct Seat<'a> {
    pub player: Player<'a>,
    pub hand: Hand,
}

impl<'a> Seat<'a> {
    pub fn new(player: Player<'a>, cash: u32) -> Self {
        Self {
            player,
            hand: Hand::new(cash),
        }
    }

    pub fn name(&self) -> &str {
        self.player.name()
    }

    /// Still holding cards and chips, so able to act in a betting phase.
    pub fn can_act(&self) -> bool {
        self.hand.has_cards() && self.hand.cash() > 0
    }
}

/// Ordered seats plus the dealer button.
/// Seat indices are stable within a round; eliminated seats are compacted away between rounds.
#[derive(Debug)]
pub struct Roster<'a> {
    seats: Vec<Seat<'a>>,
    dealer: Option<usize>,
}

impl<'a> Roster<'a> {
    pub fn new(players: Vec<Player<'a>>, cash: u32) -> Self {
        Self {
            seats: players.into_iter().map(|p| Seat::new(p, cash)).collect(),
            dealer: None,
        }
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn seats(&self) -> &[Seat<'a>] {
        &self.seats
    }

    pub fn seats_mut(&mut self) -> &mut [Seat<'a>] {
        &mut self.seats
    }

    pub fn seat(&self, idx: usize) -> &Seat<'a> {
        &self.seats[idx]
    }

    pub fn seat_mut(&mut self, idx: usize) -> &mut Seat<'a> {
        &mut self.seats[idx]
    }

    /// Dealer seat of the current (or last played) round; `None` before the first round.
    pub fn dealer(&self) -> Option<usize> {
        self.dealer
    }

    /// Seat `dist` positions clockwise from `from`.
    pub fn next_seat(&self, from: usize, dist: usize) -> usize {
        (from + dist) % self.seats.len()
    }

    /// Moves the button one seat; the first call places it on seat 0.
    /// A dealer index left stale by eliminations still wraps into the new roster.
    pub fn rotate_dealer(&mut self) -> usize {
        let next = match self.dealer {
            None => 0,
            Some(d) => (d + 1) % self.seats.len(),
        };
        self.dealer = Some(next);
        next
    }

    /// Removes seats whose cash is below `min_cash`, scanning from the last seat so
    /// indices of seats still to be checked do not shift. Returns the removed seats
    /// in removal order.
    pub fn eliminate_below(&mut self, min_cash: u32) -> Vec<Seat<'a>> {
        let mut removed = Vec::new();
        for idx in (0..self.seats.len()).rev() {
            if self.seats[idx].hand.cash() < min_cash {
                removed.push(self.seats.remove(idx));
            }
        }
        removed
    }
}
