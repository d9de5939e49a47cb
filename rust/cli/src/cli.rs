//! Command-line surface of the `fivedraw` binary.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "fivedraw",
    version,
    about = "Five-card draw poker: play, simulate and inspect rounds"
)]
pub struct FivedrawCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play at the terminal against automatic opponents
    Play {
        /// Seats at the table, humans included
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=10))]
        players: u8,
        /// Name of a human seat; repeat for hot-seat play
        #[arg(long = "human", value_name = "NAME")]
        humans: Vec<String>,
        /// Starting cash per seat
        #[arg(long)]
        cash: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// Stop after this many rounds even if several seats remain
        #[arg(long)]
        rounds: Option<u32>,
    },
    /// Run AI-only games, optionally writing every round as JSONL
    Sim {
        #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=10))]
        players: u8,
        #[arg(long, default_value_t = 1)]
        games: u32,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        output: Option<String>,
        /// Opponent kind for every seat (baseline, random, caller)
        #[arg(long)]
        ai: Option<String>,
        /// Rounds after which an unfinished game is abandoned
        #[arg(long, default_value_t = 10_000)]
        max_rounds: u32,
    },
    /// Summarize a JSONL file of round records
    Stats {
        #[arg(long)]
        input: String,
    },
    /// Rank five cards, e.g. `rank KS KD KC KH 2S`
    Rank {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Shuffle and deal five cards to each seat
    Deal {
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=10))]
        players: u8,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
