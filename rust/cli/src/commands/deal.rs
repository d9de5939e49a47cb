//! Deal command: shuffles a seeded deck and deals one five-card hand per seat.

use std::io::Write;

use fivedraw_engine::deck::Deck;
use fivedraw_engine::hand::{Hand, HAND_SIZE};

use crate::error::CliError;
use crate::formatters::format_hand;

/// Deals round-robin, the way a round starts, and prints each hand with its combination.
pub fn handle_deal_command(
    players: u8,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(seed);
    deck.reshuffle();

    let mut hands: Vec<Hand> = (0..players).map(|_| Hand::new(0)).collect();
    for _ in 0..HAND_SIZE {
        for hand in hands.iter_mut() {
            hand.add_card(deck.take()?);
        }
    }

    writeln!(out, "Seed: {}", seed)?;
    for (i, hand) in hands.iter().enumerate() {
        writeln!(out, "Seat {}: {}", i + 1, format_hand(hand))?;
    }
    writeln!(out, "Deck: {} cards left", deck.len())?;
    Ok(())
}
