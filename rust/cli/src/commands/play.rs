//! # Play Command
//!
//! Interactive five-card draw at the terminal. Human seats answer bet and discard
//! prompts on stdin; the remaining seats are filled with automatic opponents of
//! the configured kind. Every round event is narrated to stdout as it happens.
//!
//! The session ends when one seat is left, after `--rounds` rounds, or when a
//! human types `q` (or stdin reaches EOF). A quitting human checks or folds for
//! the rest of the current round.

use std::cell::RefCell;
use std::collections::HashSet;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use tracing::debug;

use fivedraw_ai::create_ai;
use fivedraw_engine::engine::Game;
use fivedraw_engine::hand::Hand;
use fivedraw_engine::logger::{Narrator, RoundEvent};
use fivedraw_engine::player::{DecisionProvider, Player};

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{format_hand, format_numbered, format_standings};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{parse_bet, parse_discard, ParseResult};

#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    pub players: u8,
    pub humans: Vec<String>,
    pub cash: Option<u32>,
    pub seed: Option<u64>,
    pub rounds: Option<u32>,
}

/// Terminal streams shared by every human seat and the narrator.
///
/// Decision providers cannot return errors, so the first write failure is kept
/// and surfaced by the command after the round.
struct Console<'io> {
    input: &'io mut dyn BufRead,
    out: &'io mut dyn Write,
    err: &'io mut dyn Write,
    quit: bool,
    failure: Option<io::Error>,
}

type SharedConsole<'io> = Rc<RefCell<Console<'io>>>;

impl<'io> Console<'io> {
    fn new(
        input: &'io mut dyn BufRead,
        out: &'io mut dyn Write,
        err: &'io mut dyn Write,
    ) -> Self {
        Self {
            input,
            out,
            err,
            quit: false,
            failure: None,
        }
    }

    fn keep(&mut self, r: io::Result<()>) {
        if let Err(e) = r
            && self.failure.is_none()
        {
            self.failure = Some(e);
        }
    }

    fn say(&mut self, line: &str) {
        let r = writeln!(self.out, "{}", line);
        self.keep(r);
    }

    fn complain(&mut self, msg: &str) {
        let r = ui::write_error(self.err, msg);
        self.keep(r);
    }

    /// Next answer, or `None` once the human has quit or input is exhausted.
    fn ask(&mut self, prompt: &str) -> Option<String> {
        if self.quit || self.failure.is_some() {
            return None;
        }
        let r = ui::prompt(self.out, prompt);
        self.keep(r);
        let line = read_stdin_line(self.input);
        if line.is_none() {
            self.quit = true;
        }
        line
    }

    fn take_failure(&mut self) -> io::Result<()> {
        match self.failure.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

struct HumanPlayer<'io> {
    name: String,
    console: SharedConsole<'io>,
}

impl DecisionProvider for HumanPlayer<'_> {
    fn bet(&mut self, current_bet: u32, max_bet: u32, hand: &Hand) -> u32 {
        let mut console = self.console.borrow_mut();
        if console.quit {
            return 0;
        }
        let to_call = max_bet.saturating_sub(current_bet);
        console.say(&format!("[{}] {}", self.name, format_hand(hand)));
        let prompt = format!(
            "[{}] cash ${}, in for ${}, ${} to call (amount, a = all-in, q = quit)",
            self.name,
            hand.cash(),
            current_bet,
            to_call
        );
        loop {
            let Some(line) = console.ask(&prompt) else {
                return 0;
            };
            match parse_bet(&line, hand.cash()) {
                ParseResult::Value(v) => return v,
                ParseResult::Quit => {
                    console.quit = true;
                    return 0;
                }
                ParseResult::Invalid(msg) => console.complain(&msg),
            }
        }
    }

    fn discard(&mut self, hand: &Hand) -> Vec<usize> {
        let mut console = self.console.borrow_mut();
        if console.quit {
            return Vec::new();
        }
        console.say(&format!("[{}] {}", self.name, format_numbered(hand.cards())));
        let prompt = format!("[{}] cards to exchange (e.g. 1 4, empty keeps all)", self.name);
        loop {
            let Some(line) = console.ask(&prompt) else {
                return Vec::new();
            };
            match parse_discard(&line, hand.len()) {
                ParseResult::Value(v) => return v,
                ParseResult::Quit => {
                    console.quit = true;
                    return Vec::new();
                }
                ParseResult::Invalid(msg) => console.complain(&msg),
            }
        }
    }
}

struct ConsoleNarrator<'io> {
    console: SharedConsole<'io>,
}

impl Narrator for ConsoleNarrator<'_> {
    fn narrate(&mut self, event: &RoundEvent) {
        self.console.borrow_mut().say(&event.to_string());
    }
}

fn check_options(opts: &PlayOptions, humans: &[String], big_blind: u32) -> Result<(), String> {
    if opts.rounds == Some(0) {
        return Err("rounds must be >= 1".into());
    }
    if let Some(cash) = opts.cash
        && cash < big_blind.max(1)
    {
        return Err(format!("cash {} does not cover the big blind {}", cash, big_blind));
    }
    if humans.len() > usize::from(opts.players) {
        return Err(format!(
            "{} human seats do not fit at a table of {}",
            humans.len(),
            opts.players
        ));
    }
    let bots = bot_names(opts.players, humans.len());
    let mut names = HashSet::new();
    for name in humans.iter().chain(&bots) {
        if name.trim().is_empty() {
            return Err("player names must not be empty".into());
        }
        if !names.insert(name.as_str()) {
            return Err(format!("player name '{}' is taken", name));
        }
    }
    Ok(())
}

fn bot_names(players: u8, humans: usize) -> Vec<String> {
    (humans..usize::from(players))
        .map(|i| format!("bot{}", i))
        .collect()
}

/// Handle the play command.
///
/// Seats the `--human` names first (one seat named `you` when none is given),
/// then automatic opponents named `botN`.
pub fn handle_play_command<'io>(
    opts: PlayOptions,
    cfg: &Config,
    input: &'io mut dyn BufRead,
    out: &'io mut dyn Write,
    err: &'io mut dyn Write,
) -> Result<(), CliError> {
    let humans = if opts.humans.is_empty() {
        vec!["you".to_string()]
    } else {
        opts.humans.clone()
    };
    if let Err(msg) = check_options(&opts, &humans, cfg.big_blind) {
        ui::write_error(err, &msg)?;
        return Err(CliError::InvalidInput(msg));
    }
    let seed = opts.seed.or(cfg.seed).unwrap_or_else(rand::random);
    let cash = opts.cash.unwrap_or(cfg.starting_cash);

    writeln!(
        out,
        "play: players={} seed={} cash={} blinds={}/{}",
        opts.players, seed, cash, cfg.small_blind, cfg.big_blind
    )?;

    let console: SharedConsole<'io> = Rc::new(RefCell::new(Console::new(input, out, err)));
    let mut players = Vec::with_capacity(usize::from(opts.players));
    for name in &humans {
        let human = HumanPlayer {
            name: name.clone(),
            console: Rc::clone(&console),
        };
        players.push(Player::new(name.clone(), Box::new(human)));
    }
    for (i, name) in bot_names(opts.players, humans.len()).into_iter().enumerate() {
        let ai = create_ai(&cfg.ai, seed.wrapping_add(i as u64 + 1), &cfg.rules())
            .ok_or_else(|| CliError::Config(format!("unknown ai '{}'", cfg.ai)))?;
        players.push(Player::new(name, ai));
    }

    let mut game = Game::with_rules(players, cash, cfg.rules(), Some(seed))?;
    let mut narrator = ConsoleNarrator {
        console: Rc::clone(&console),
    };

    let mut played = 0u32;
    loop {
        if game.is_game_over() || console.borrow().quit {
            break;
        }
        if let Some(max) = opts.rounds
            && played >= max
        {
            break;
        }
        console
            .borrow_mut()
            .say(&format!("Round {}", game.round() + 1));
        let record = game.play_round_with(&mut narrator)?;
        played += 1;
        debug!(round = played, winner = ?record.winner, pot = record.pot, "round played");
        console.borrow_mut().take_failure()?;
    }

    let mut c = console.borrow_mut();
    if c.quit {
        c.say(&format!("Quit after {} round(s)", played));
    }
    match game.winner() {
        Some(name) => c.say(&format!("Winner: {}", name)),
        None => c.say(&format!("Standings:\n{}", format_standings(game.seats()))),
    }
    c.take_failure()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn opts(players: u8, humans: &[&str]) -> PlayOptions {
        PlayOptions {
            players,
            humans: humans.iter().map(|s| s.to_string()).collect(),
            cash: None,
            seed: Some(42),
            rounds: None,
        }
    }

    fn run(o: PlayOptions, input: &str) -> (Result<(), CliError>, String, String) {
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        let mut out = Vec::new();
        let mut err = Vec::new();
        let r = handle_play_command(o, &Config::default(), &mut stdin, &mut out, &mut err);
        (
            r,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_quit_at_first_prompt_ends_after_the_round() {
        let (r, out, _) = run(opts(2, &["ann"]), "q\n");
        assert!(r.is_ok());
        assert!(out.contains("play: players=2 seed=42"));
        assert!(out.contains("Round 1"));
        assert!(out.contains("[ann] deals"));
        assert!(out.contains("Quit after 1 round(s)"));
        assert!(!out.contains("Round 2"));
    }

    #[test]
    fn test_eof_counts_as_quit() {
        let (r, out, _) = run(opts(3, &[]), "");
        assert!(r.is_ok());
        assert!(out.contains("[you] "));
        assert!(out.contains("Quit after 1 round(s)"));
    }

    #[test]
    fn test_invalid_answer_reprompts() {
        let (r, _, err) = run(opts(2, &["ann"]), "lots\nq\n");
        assert!(r.is_ok());
        assert!(err.contains("Invalid amount 'lots'"));
    }

    #[test]
    fn test_too_many_humans_rejected() {
        let (r, _, err) = run(opts(2, &["a", "b", "c"]), "");
        assert!(matches!(r, Err(CliError::InvalidInput(_))));
        assert!(err.contains("do not fit"));
    }

    #[test]
    fn test_cash_below_big_blind_rejected() {
        let mut o = opts(2, &["ann"]);
        o.cash = Some(10);
        let (r, out, err) = run(o, "");
        assert!(matches!(r, Err(CliError::InvalidInput(_))));
        assert!(err.contains("does not cover the big blind 32"));
        assert!(!out.contains("Round 1"));
    }

    #[test]
    fn test_name_clash_with_bot_rejected() {
        let (r, _, err) = run(opts(3, &["bot1"]), "");
        assert!(r.is_err());
        assert!(err.contains("'bot1' is taken"));
    }

    fn dealt(cash: u32) -> Hand {
        let mut h = Hand::new(cash);
        for c in ["KS", "KH", "4C", "9D", "2H"] {
            h.add_card(c.parse().unwrap());
        }
        h
    }

    #[test]
    fn test_human_prompts_until_answers_are_valid() {
        let mut stdin = Cursor::new(b"abc\n500\n40\n9\n1 1\n3 5\n".to_vec());
        let mut out = Vec::new();
        let mut err = Vec::new();
        let console = Rc::new(RefCell::new(Console::new(&mut stdin, &mut out, &mut err)));
        let mut ann = HumanPlayer {
            name: "ann".into(),
            console: Rc::clone(&console),
        };
        let hand = dealt(100);
        assert_eq!(ann.bet(0, 32, &hand), 40);
        assert_eq!(ann.discard(&hand), vec![2, 4]);
        drop(ann);
        drop(console);

        let err = String::from_utf8(err).unwrap();
        assert!(err.contains("Invalid amount 'abc'"));
        assert!(err.contains("You only have $100"));
        assert!(err.contains("'9' is not a card position"));
        assert!(err.contains("Card 1 listed twice"));
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("$32 to call"));
        assert!(out.contains("1:K"));
    }

    #[test]
    fn test_quit_folds_the_rest_of_the_round() {
        let mut stdin = Cursor::new(b"q\n".to_vec());
        let mut out = Vec::new();
        let mut err = Vec::new();
        let console = Rc::new(RefCell::new(Console::new(&mut stdin, &mut out, &mut err)));
        let mut ann = HumanPlayer {
            name: "ann".into(),
            console: Rc::clone(&console),
        };
        let hand = dealt(100);
        assert_eq!(ann.bet(0, 32, &hand), 0);
        assert!(ann.discard(&hand).is_empty());
        assert_eq!(ann.bet(32, 32, &hand), 0);
        assert!(console.borrow().quit);
    }

    #[test]
    fn test_round_limit_prints_standings() {
        let o = PlayOptions {
            rounds: Some(1),
            ..opts(3, &["ann"])
        };
        // fold (or check) every bet, keep every hand
        let (r, out, _) = run(o, &"0\n\n".repeat(10));
        assert!(r.is_ok());
        assert!(out.contains("Standings:"));
        assert!(!out.contains("Quit after"));
    }
}
