use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::{Hand, HAND_SIZE};

/// Bit offset of the combination category inside an encoded [`HandRank`].
pub const CATEGORY_SHIFT: u32 = 24;

/// Hand combinations, strongest last so that the derived ordering matches poker precedence.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Combination {
    HighestCard = 1,
    Pair = 2,
    TwoPairs = 3,
    Set = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    Quads = 8,
    StraightFlush = 9,
}

impl Combination {
    pub fn from_category(category: u32) -> Option<Combination> {
        let c = match category {
            1 => Combination::HighestCard,
            2 => Combination::Pair,
            3 => Combination::TwoPairs,
            4 => Combination::Set,
            5 => Combination::Straight,
            6 => Combination::Flush,
            7 => Combination::FullHouse,
            8 => Combination::Quads,
            9 => Combination::StraightFlush,
            _ => return None,
        };
        Some(c)
    }

    /// The category bits this combination occupies in an encoded rank.
    pub fn mask(self) -> u32 {
        (self as u32) << CATEGORY_SHIFT
    }

    pub fn name(self) -> &'static str {
        match self {
            Combination::StraightFlush => "Straight flush",
            Combination::Quads => "Quads",
            Combination::FullHouse => "Full house",
            Combination::Flush => "Flush",
            Combination::Straight => "Straight",
            Combination::Set => "Set",
            Combination::TwoPairs => "Two pairs",
            Combination::Pair => "Pair",
            Combination::HighestCard => "Highest card",
        }
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Encoded strength of a five-card hand.
///
/// The top byte holds the [`Combination`] category; the low 20 bits hold the ranks
/// grouped by multiplicity (quads, then trips, then pairs, then singles), each group
/// sorted high to low and packed four bits per rank. Comparing two values numerically
/// is the same as comparing the hands by standard poker rules, kickers included.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandRank(u32);

impl HandRank {
    pub fn value(self) -> u32 {
        self.0
    }

    pub fn combination(self) -> Combination {
        // Only constructed by rank_cards, which always sets a valid category.
        Combination::from_category(self.0 >> CATEGORY_SHIFT).unwrap_or(Combination::HighestCard)
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:08X})", self.combination(), self.0)
    }
}

/// Ranks exactly five cards. Returns `None` for any other count, so folded (empty)
/// hands never take part in a showdown.
///
/// # Examples
///
/// ```
/// use fivedraw_engine::cards::{Card, Rank, Suit};
/// use fivedraw_engine::rules::{rank_cards, Combination};
///
/// let cards = [
///     Card::new(Suit::Clubs, Rank::Two),
///     Card::new(Suit::Clubs, Rank::Three),
///     Card::new(Suit::Clubs, Rank::Four),
///     Card::new(Suit::Clubs, Rank::Five),
///     Card::new(Suit::Clubs, Rank::Six),
/// ];
/// let rank = rank_cards(&cards).unwrap();
/// assert_eq!(rank.combination(), Combination::StraightFlush);
/// ```
pub fn rank_cards(cards: &[Card]) -> Option<HandRank> {
    if cards.len() != HAND_SIZE {
        return None;
    }

    let mut counts = [0usize; 15]; // 2..=14 used
    for c in cards {
        counts[c.rank().value() as usize] += 1;
    }

    // mults[n] holds the ranks seen exactly n times, high to low
    let mut mults: [Vec<u8>; HAND_SIZE + 1] = Default::default();
    for r in (2..=14u8).rev() {
        let n = counts[r as usize];
        if n > 0 {
            mults[n].push(r);
        }
    }

    let mut kicker_mask = 0u32;
    for group in mults.iter().skip(1).rev() {
        for &r in group {
            kicker_mask = (kicker_mask << 4) | u32::from(r);
        }
    }

    let singles = &mults[1];
    let straight = singles.len() == HAND_SIZE && singles[0] - singles[HAND_SIZE - 1] == 4;
    let flush = cards.iter().all(|c| c.suit() == cards[0].suit());

    let combination = if straight && flush {
        Combination::StraightFlush
    } else if !mults[4].is_empty() {
        Combination::Quads
    } else if !mults[3].is_empty() && !mults[2].is_empty() {
        Combination::FullHouse
    } else if flush {
        Combination::Flush
    } else if straight {
        Combination::Straight
    } else if !mults[3].is_empty() {
        Combination::Set
    } else {
        match mults[2].len() {
            2 => Combination::TwoPairs,
            1 => Combination::Pair,
            _ => Combination::HighestCard,
        }
    };

    Some(HandRank(combination.mask() | kicker_mask))
}

pub fn rank_hand(hand: &Hand) -> Option<HandRank> {
    rank_cards(hand.cards())
}

/// Human-readable name of the combination encoded in a raw rank value.
pub fn combination_name(rank: u32) -> &'static str {
    Combination::from_category(rank >> CATEGORY_SHIFT)
        .map(Combination::name)
        .unwrap_or("Unknown")
}

/// Table rules supplied to a game at construction.
pub trait Rules {
    fn small_blind(&self) -> u32;

    fn big_blind(&self) -> u32;

    fn rank(&self, cards: &[Card]) -> Option<HandRank> {
        rank_cards(cards)
    }
}

/// Standard ranking with fixed blind amounts.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SimpleRules {
    pub small_blind: u32,
    pub big_blind: u32,
}

impl SimpleRules {
    pub const SMALL_BLIND: u32 = 16;
    pub const BIG_BLIND: u32 = 32;

    pub fn new(small_blind: u32, big_blind: u32) -> Self {
        Self {
            small_blind,
            big_blind,
        }
    }
}

impl Default for SimpleRules {
    fn default() -> Self {
        Self::new(Self::SMALL_BLIND, Self::BIG_BLIND)
    }
}

impl Rules for SimpleRules {
    fn small_blind(&self) -> u32 {
        self.small_blind
    }

    fn big_blind(&self) -> u32 {
        self.big_blind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank as R, Suit as S};

    fn hand(cards: [(S, R); 5]) -> Vec<Card> {
        cards.into_iter().map(|(s, r)| Card::new(s, r)).collect()
    }

    #[test]
    fn kicker_mask_orders_groups_by_multiplicity() {
        // two pairs K/5 with an ace kicker: K K 5 5 A -> 0xD5E
        let cards = hand([
            (S::Spades, R::King),
            (S::Hearts, R::Five),
            (S::Clubs, R::Ace),
            (S::Diamonds, R::King),
            (S::Clubs, R::Five),
        ]);
        let rank = rank_cards(&cards).unwrap();
        assert_eq!(rank.value(), Combination::TwoPairs.mask() | 0xD5E);
    }

    #[test]
    fn wrong_size_is_not_ranked() {
        let cards = hand([
            (S::Spades, R::King),
            (S::Hearts, R::Five),
            (S::Clubs, R::Ace),
            (S::Diamonds, R::King),
            (S::Clubs, R::Five),
        ]);
        assert!(rank_cards(&cards[..4]).is_none());
        assert!(rank_cards(&[]).is_none());
    }

    #[test]
    fn names_round_trip_through_raw_value() {
        assert_eq!(combination_name(0x0900_0000), "Straight flush");
        assert_eq!(combination_name(0x0400_1234), "Set");
        assert_eq!(combination_name(0), "Unknown");
    }

    #[test]
    fn simple_rules_defaults() {
        let r = SimpleRules::default();
        assert_eq!(r.small_blind(), 16);
        assert_eq!(r.big_blind(), 32);
    }
}
