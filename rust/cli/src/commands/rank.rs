//! Rank command: names the combination five cards make and its encoded strength.

use std::io::Write;

use fivedraw_engine::rules::rank_cards;

use crate::error::CliError;
use crate::formatters::format_card;
use crate::ui;
use crate::validation::parse_five_cards;

pub fn handle_rank_command(
    cards: &[String],
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cards = match parse_five_cards(cards) {
        Ok(c) => c,
        Err(msg) => {
            ui::write_error(err, &msg)?;
            return Err(CliError::InvalidInput(msg));
        }
    };
    let rank = rank_cards(&cards)
        .ok_or_else(|| CliError::InvalidInput("five cards are required".into()))?;
    let shown = cards.iter().map(format_card).collect::<Vec<_>>().join(" ");
    writeln!(out, "{}", shown)?;
    writeln!(out, "{}", rank)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_rank_prints_combination_and_value() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_rank_command(&args("KS KD KC KH 2S"), &mut out, &mut err).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Quads (0x08"), "{text}");
    }

    #[test]
    fn test_rank_rejects_four_cards() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let r = handle_rank_command(&args("KS KD KC KH"), &mut out, &mut err);
        assert!(matches!(r, Err(CliError::InvalidInput(_))));
        assert!(String::from_utf8(err).unwrap().contains("Expected 5 cards"));
    }
}
