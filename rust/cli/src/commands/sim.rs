//! Simulation command handler: AI-only games played to the end.
//!
//! Every game gets its own deck seed (`seed + game index`), so a run is
//! reproducible from the base seed alone. With `--output`, every round is appended
//! to a JSONL file as a [`RoundRecord`](fivedraw_engine::logger::RoundRecord).

use std::collections::BTreeMap;
use std::io::Write;

use tracing::info;

use fivedraw_ai::{create_ai, AI_KINDS};
use fivedraw_engine::engine::Game;
use fivedraw_engine::logger::RoundLogger;
use fivedraw_engine::player::Player;

use crate::config::Config;
use crate::error::CliError;
use crate::ui;

#[derive(Debug, Clone)]
pub struct SimOptions {
    pub players: u8,
    pub games: u32,
    pub seed: Option<u64>,
    pub output: Option<String>,
    pub ai: Option<String>,
    pub max_rounds: u32,
}

struct GameOutcome {
    winner: Option<String>,
    rounds: u32,
}

fn play_game(
    opts: &SimOptions,
    cfg: &Config,
    kind: &str,
    seed: u64,
    logger: &mut Option<RoundLogger>,
) -> Result<GameOutcome, CliError> {
    let rules = cfg.rules();
    let mut players = Vec::with_capacity(usize::from(opts.players));
    for seat in 0..u64::from(opts.players) {
        let ai = create_ai(kind, seed.wrapping_mul(31).wrapping_add(seat), &rules)
            .ok_or_else(|| CliError::InvalidInput(format!("unknown ai '{}'", kind)))?;
        players.push(Player::new(format!("bot{}", seat), ai));
    }
    let mut game = Game::with_rules(players, cfg.starting_cash, rules, Some(seed))?;

    let mut rounds = 0;
    while !game.is_game_over() && rounds < opts.max_rounds {
        let record = game.play_round()?;
        rounds += 1;
        if let Some(l) = logger.as_mut() {
            l.write(&record)?;
        }
    }
    Ok(GameOutcome {
        winner: game.winner().map(str::to_string),
        rounds,
    })
}

pub fn handle_sim_command(
    opts: SimOptions,
    cfg: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if opts.games == 0 {
        ui::write_error(err, "games must be >= 1")?;
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }
    if opts.max_rounds == 0 {
        ui::write_error(err, "max-rounds must be >= 1")?;
        return Err(CliError::InvalidInput("max-rounds must be >= 1".to_string()));
    }
    let kind = opts.ai.clone().unwrap_or_else(|| cfg.ai.clone());
    if !AI_KINDS.contains(&kind.as_str()) {
        let msg = format!("unknown ai '{}' (expected one of {})", kind, AI_KINDS.join(", "));
        ui::write_error(err, &msg)?;
        return Err(CliError::InvalidInput(msg));
    }

    let base_seed = opts.seed.or(cfg.seed).unwrap_or_else(rand::random);
    let mut logger = match &opts.output {
        Some(path) => Some(RoundLogger::create(path)?),
        None => None,
    };

    writeln!(
        out,
        "sim: players={} games={} ai={} seed={}",
        opts.players, opts.games, kind, base_seed
    )?;

    let mut wins: BTreeMap<String, u32> = BTreeMap::new();
    let mut total_rounds = 0u64;
    let mut abandoned = 0u32;
    for g in 0..opts.games {
        let seed = base_seed.wrapping_add(u64::from(g));
        let outcome = play_game(&opts, cfg, &kind, seed, &mut logger)?;
        total_rounds += u64::from(outcome.rounds);
        match outcome.winner {
            Some(name) => {
                info!(game = g + 1, seed, winner = %name, rounds = outcome.rounds, "game finished");
                writeln!(
                    out,
                    "Game {}: {} wins after {} rounds",
                    g + 1,
                    name,
                    outcome.rounds
                )?;
                *wins.entry(name).or_default() += 1;
            }
            None => {
                abandoned += 1;
                writeln!(out, "Game {}: abandoned after {} rounds", g + 1, outcome.rounds)?;
            }
        }
    }

    writeln!(out, "Rounds: {}", total_rounds)?;
    if abandoned > 0 {
        ui::display_warning(err, &format!("{} game(s) hit the round limit", abandoned))?;
    }
    writeln!(out, "Wins:")?;
    for (name, n) in &wins {
        writeln!(out, "  {:<12} {}", name, n)?;
    }
    if let Some(path) = &opts.output {
        writeln!(out, "Saved rounds to {}", path)?;
    }
    Ok(())
}
