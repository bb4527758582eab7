//! # Wildcard CLI Library
//!
//! Terminal front-end for the wildcard engine. The entry points are [`run`]
//! and [`run_with_input`], which parse arguments and dispatch to a
//! subcommand.
//!
//! ## Example Usage
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = wildcard_cli::run(
//!     ["wildcard", "deal", "--players", "3", "--seed", "42"],
//!     &mut out,
//!     &mut err,
//! );
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().starts_with("deal: players=3 seed=42"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `deal`: Start a game and show every hand
//! - `play`: Play against bots on stdin
//! - `sim`: Run bot-only games, optionally logging turns as JSONL
//! - `cfg`: Display the resolved configuration

use clap::Parser;
use std::io::{BufRead, Write};

#[macro_use]
mod macros;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{COMMANDS, Commands, WildcardCli};
use commands::{handle_cfg_command, handle_deal_command, handle_play_command, handle_sim_command};

pub use error::CliError;

/// Parses `args` and runs the subcommand, reading `play` input from stdin.
///
/// Returns the process exit code: `0` success, `2` error, `130` when the
/// player quits a game.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut lock = stdin.lock();
    run_with_input(args, &mut lock, out, err)
}

/// Like [`run`], with `play` moves read from `input`.
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

    let cli = match WildcardCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    let _ = ui::write_usage(err, COMMANDS);
                    exit_code::ERROR
                }
            };
        }
    };

    let name = cli.cmd.name();
    let result = match cli.cmd {
        Commands::Deal { players, seed } => handle_deal_command(players, seed, out),
        Commands::Play { players, seed } => handle_play_command(players, seed, out, err, input),
        Commands::Sim {
            games,
            players,
            seed,
            output,
        } => handle_sim_command(games, players, seed, output, out, err),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(msg)) => {
            tracing::info!(command = name, "{}", msg);
            exit_code::INTERRUPTED
        }
        Err(e) => {
            tracing::debug!(command = name, error = %e, "command failed");
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_command_parses() {
        for cmd in COMMANDS {
            let parsed = WildcardCli::try_parse_from(["wildcard", cmd]);
            assert!(parsed.is_ok(), "failed to parse {}", cmd);
            assert_eq!(parsed.unwrap().cmd.name(), *cmd);
        }
    }

    #[test]
    fn players_flag_is_range_checked() {
        assert!(WildcardCli::try_parse_from(["wildcard", "deal", "--players", "1"]).is_err());
        assert!(WildcardCli::try_parse_from(["wildcard", "deal", "--players", "11"]).is_err());
        assert!(WildcardCli::try_parse_from(["wildcard", "sim", "--players", "10"]).is_ok());
    }
}
