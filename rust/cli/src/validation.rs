//! Input parsing and validation for interactive prompts and card arguments.
//!
//! Prompt parsers return [`ParseResult`] so the caller can tell a usable answer
//! from a quit request from input worth re-prompting for.

use std::collections::HashSet;

use fivedraw_engine::cards::Card;
use fivedraw_engine::hand::HAND_SIZE;

/// Outcome of parsing one line typed at a prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseResult<T> {
    /// Usable answer
    Value(T),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

fn is_quit(input: &str) -> bool {
    matches!(input, "q" | "quit")
}

/// Parse the chips a human adds to their current bet.
///
/// Accepts a non-negative amount, or `a`/`allin` for the whole stack. `0` checks
/// when level with the table and folds otherwise.
///
/// # Example
///
/// ```rust
/// # use fivedraw_cli::validation::{parse_bet, ParseResult};
/// assert_eq!(parse_bet("32", 100), ParseResult::Value(32));
/// assert_eq!(parse_bet("allin", 100), ParseResult::Value(100));
/// assert_eq!(parse_bet("q", 100), ParseResult::Quit);
/// assert!(matches!(parse_bet("500", 100), ParseResult::Invalid(_)));
/// ```
pub fn parse_bet(input: &str, cash: u32) -> ParseResult<u32> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return ParseResult::Invalid("Enter an amount (0 to check or fold, q to quit)".into());
    }
    if is_quit(&input) {
        return ParseResult::Quit;
    }
    if matches!(input.as_str(), "a" | "allin" | "all-in") {
        return ParseResult::Value(cash);
    }
    match input.parse::<u32>() {
        Ok(amount) if amount <= cash => ParseResult::Value(amount),
        Ok(_) => ParseResult::Invalid(format!("You only have ${}", cash)),
        Err(_) => ParseResult::Invalid(format!("Invalid amount '{}'", input)),
    }
}

/// Parse 1-based card positions to exchange into 0-based indices.
///
/// An empty line keeps the hand. Positions may be separated by spaces or commas;
/// each must be within the hand and appear once.
///
/// # Example
///
/// ```rust
/// # use fivedraw_cli::validation::{parse_discard, ParseResult};
/// assert_eq!(parse_discard("1 5", 5), ParseResult::Value(vec![0, 4]));
/// assert_eq!(parse_discard("", 5), ParseResult::Value(vec![]));
/// assert!(matches!(parse_discard("6", 5), ParseResult::Invalid(_)));
/// ```
pub fn parse_discard(input: &str, len: usize) -> ParseResult<Vec<usize>> {
    let input = input.trim().to_lowercase();
    if is_quit(&input) {
        return ParseResult::Quit;
    }
    let mut picks = Vec::new();
    let mut seen = HashSet::new();
    for token in input.split([' ', ',']).filter(|t| !t.is_empty()) {
        let pos = match token.parse::<usize>() {
            Ok(p) if (1..=len).contains(&p) => p,
            _ => {
                return ParseResult::Invalid(format!(
                    "'{}' is not a card position between 1 and {}",
                    token, len
                ));
            }
        };
        if !seen.insert(pos) {
            return ParseResult::Invalid(format!("Card {} listed twice", pos));
        }
        picks.push(pos - 1);
    }
    ParseResult::Value(picks)
}

/// Parse exactly five distinct cards such as `KS`, `10h` or `2♣`.
pub fn parse_five_cards<S: AsRef<str>>(args: &[S]) -> Result<Vec<Card>, String> {
    if args.len() != HAND_SIZE {
        return Err(format!(
            "Expected {} cards, got {}",
            HAND_SIZE,
            args.len()
        ));
    }
    let mut cards: Vec<Card> = Vec::with_capacity(HAND_SIZE);
    for arg in args {
        let card: Card = arg.as_ref().parse().map_err(|e| format!("{}", e))?;
        if cards.contains(&card) {
            return Err(format!("Duplicate card {}", card));
        }
        cards.push(card);
    }
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bet_rejects_garbage() {
        assert!(matches!(parse_bet("", 10), ParseResult::Invalid(_)));
        assert!(matches!(parse_bet("-5", 10), ParseResult::Invalid(_)));
        assert!(matches!(parse_bet("ten", 10), ParseResult::Invalid(_)));
        assert_eq!(parse_bet(" QUIT ", 10), ParseResult::Quit);
        assert_eq!(parse_bet("0", 10), ParseResult::Value(0));
    }

    #[test]
    fn test_parse_discard_positions() {
        assert_eq!(parse_discard("2,3", 5), ParseResult::Value(vec![1, 2]));
        assert_eq!(parse_discard("5 1", 5), ParseResult::Value(vec![4, 0]));
        assert!(matches!(parse_discard("0", 5), ParseResult::Invalid(_)));
        assert!(matches!(parse_discard("2 2", 5), ParseResult::Invalid(_)));
        assert_eq!(parse_discard("q", 5), ParseResult::Quit);
    }

    #[test]
    fn test_parse_five_cards() {
        let cards = parse_five_cards(&["KS", "KD", "KC", "KH", "2S"]).unwrap();
        assert_eq!(cards.len(), 5);
        assert!(parse_five_cards(&["KS", "KD"]).unwrap_err().contains("Expected 5"));
        assert!(parse_five_cards(&["KS", "KS", "KC", "KH", "2S"])
            .unwrap_err()
            .contains("Duplicate"));
        assert!(parse_five_cards(&["KS", "ZZ", "KC", "KH", "2S"]).is_err());
    }
}
