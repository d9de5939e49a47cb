//! # fivedraw CLI Library
//!
//! Command-line front end for the five-card draw engine: play at the terminal,
//! run AI-only simulations, and inspect round histories, hands and configuration.
//!
//! ## Main Entry Point
//!
//! [`run`] parses command-line arguments and executes the matching subcommand,
//! reading and writing only through the streams it is given.
//!
//! ## Available Subcommands
//!
//! - `play`: Play against automatic opponents, answering prompts on stdin
//! - `sim`: Run AI-only games and optionally record every round as JSONL
//! - `stats`: Aggregate statistics from JSONL round records
//! - `rank`: Rank five cards
//! - `deal`: Deal one seeded hand per seat for inspection
//! - `cfg`: Display the resolved configuration

use clap::Parser;
use std::io::{BufRead, Write};

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
mod macros;
pub mod ui;
pub mod validation;

use cli::{Commands, FivedrawCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_play_command, handle_rank_command,
    handle_sim_command, handle_stats_command, PlayOptions, SimOptions,
};

pub use commands::{play, sim};
pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "stats", "rank", "deal", "cfg"];

/// Main entry point for the CLI application, reading interactive input from stdin.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["fivedraw", "deal", "--seed", "42"];
/// let code = fivedraw_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    run_with_input(args, &mut input, out, err)
}

/// Same as [`run`], with interactive input taken from `input`.
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match FivedrawCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    write_or_exit!(out, "{}", e);
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Usage: fivedraw <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: fivedraw --help");
                    exit_code::ERROR
                }
            };
        }
    };

    match dispatch(cli.cmd, input, out, err) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn dispatch(
    cmd: Commands,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    match cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Rank { cards } => handle_rank_command(&cards, out, err),
        Commands::Deal { players, seed } => {
            let seed = match seed {
                Some(s) => Some(s),
                None => config::load()?.seed,
            };
            handle_deal_command(players, seed, out)
        }
        Commands::Stats { input: path } => handle_stats_command(&path, out, err),
        Commands::Play {
            players,
            humans,
            cash,
            seed,
            rounds,
        } => {
            let cfg = config::load()?;
            let opts = PlayOptions {
                players,
                humans,
                cash,
                seed,
                rounds,
            };
            handle_play_command(opts, &cfg, input, out, err)
        }
        Commands::Sim {
            players,
            games,
            seed,
            output,
            ai,
            max_rounds,
        } => {
            let cfg = config::load()?;
            let opts = SimOptions {
                players,
                games,
                seed,
                output,
                ai,
                max_rounds,
            };
            handle_sim_command(opts, &cfg, out, err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_types_cover_all_subcommands() {
        let commands = vec![
            vec!["fivedraw", "cfg"],
            vec!["fivedraw", "play"],
            vec!["fivedraw", "play", "--human", "ann", "--human", "bob", "--players", "4"],
            vec!["fivedraw", "sim", "--games", "2", "--ai", "random"],
            vec!["fivedraw", "stats", "--input", "rounds.jsonl"],
            vec!["fivedraw", "rank", "KS", "KD", "KC", "KH", "2S"],
            vec!["fivedraw", "deal", "--players", "10"],
        ];
        for cmd_args in commands {
            let result = FivedrawCli::try_parse_from(&cmd_args);
            assert!(result.is_ok(), "Failed to parse: {:?}", cmd_args);
        }
        assert_eq!(COMMANDS.len(), 6);
    }

    #[test]
    fn test_player_counts_are_range_checked() {
        assert!(FivedrawCli::try_parse_from(["fivedraw", "play", "--players", "1"]).is_err());
        assert!(FivedrawCli::try_parse_from(["fivedraw", "sim", "--players", "11"]).is_err());
        assert!(FivedrawCli::try_parse_from(["fivedraw", "deal", "--players", "0"]).is_err());
    }

    #[test]
    fn test_unknown_command_lists_commands() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = std::io::Cursor::new(Vec::new());
        let code = run_with_input(["fivedraw", "shuffle"], &mut input, &mut out, &mut err);
        assert_eq!(code, exit_code::ERROR);
        let stderr = String::from_utf8(err).unwrap();
        assert!(stderr.contains("Commands:"));
        assert!(stderr.contains("  stats"));
    }

    #[test]
    fn test_help_goes_to_stdout() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = std::io::Cursor::new(Vec::new());
        let code = run_with_input(["fivedraw", "--help"], &mut input, &mut out, &mut err);
        assert_eq!(code, exit_code::SUCCESS);
        assert!(String::from_utf8(out).unwrap().contains("Usage"));
    }
}
