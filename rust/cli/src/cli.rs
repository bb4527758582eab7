//! Command-line argument types.
//!
//! Flags left unset fall back to the resolved [`crate::config::Config`].

use clap::{Parser, Subcommand};

/// Top-level parser for the `wildcard` binary.
#[derive(Parser, Debug)]
#[command(name = "wildcard", version, about = "Wildcard shedding card game CLI")]
pub struct WildcardCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start a game and print every hand and the opening card
    Deal {
        #[arg(long, value_parser = clap::value_parser!(u8).range(2..=10))]
        players: Option<u8>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play against bots; you sit in seat 1 and move first
    Play {
        #[arg(long, value_parser = clap::value_parser!(u8).range(2..=10))]
        players: Option<u8>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run bot-only games and report winners
    Sim {
        #[arg(long, default_value_t = 1)]
        games: u32,
        #[arg(long, value_parser = clap::value_parser!(u8).range(2..=10))]
        players: Option<u8>,
        #[arg(long)]
        seed: Option<u64>,
        /// JSONL file receiving one line per turn
        #[arg(long)]
        output: Option<String>,
    },
    /// Print the resolved configuration with value sources
    Cfg,
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Deal { .. } => "deal",
            Commands::Play { .. } => "play",
            Commands::Sim { .. } => "sim",
            Commands::Cfg => "cfg",
        }
    }
}

/// Subcommand names, in help order.
pub const COMMANDS: &[&str] = &["deal", "play", "sim", "cfg"];
