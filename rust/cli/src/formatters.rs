//! Card, hand and standings formatters for terminal display.
//!
//! Suits are drawn as ♥ ♦ ♣ ♠ where the terminal is expected to render them,
//! and as h d c s letters otherwise.
//!
//! ## Example
//!
//! ```rust
//! use fivedraw_engine::cards::{Card, Rank, Suit};
//! use fivedraw_cli::formatters::format_card;
//!
//! let ace_spades = Card::new(Suit::Spades, Rank::Ace);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! ```

use fivedraw_engine::cards::{Card, Suit};
use fivedraw_engine::game::Seat;
use fivedraw_engine::hand::Hand;
use fivedraw_engine::rules::rank_hand;

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> &'static str {
    if supports_unicode() {
        suit.symbol()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank().label(), format_suit(card.suit()))
}

/// Cards with their 1-based positions, as shown at the discard prompt.
///
/// `1:K♠ 2:K♥ 3:4♣ 4:9♦ 5:2♥`
pub fn format_numbered(cards: &[Card]) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}:{}", i + 1, format_card(c)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cards followed by the combination they make, if they are a full hand.
pub fn format_hand(hand: &Hand) -> String {
    let cards = hand
        .cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ");
    match rank_hand(hand) {
        Some(rank) => format!("{} ({})", cards, rank.combination()),
        None => cards,
    }
}

/// One `name $cash` line per seat.
pub fn format_standings(seats: &[Seat<'_>]) -> String {
    seats
        .iter()
        .map(|s| format!("  {:<12} ${}", s.name(), s.hand.cash()))
        .collect::<Vec<_>>()
        .join("\n")
}
