//! Command handlers for the `wildcard` CLI.
//!
//! Each command lives in its own module and exposes one
//! `handle_COMMAND_command(...) -> Result<(), CliError>` taking its output
//! streams as `&mut dyn Write`.

pub mod cfg;
pub mod deal;
pub mod play;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;

use crate::config;
use crate::error::CliError;
use wildcard_engine::cards::Card;
use wildcard_engine::game::Game;
use wildcard_engine::player::{Player, PlayerId};

/// Table size, base seed and bot name after applying flags over config.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Settings {
    pub players: usize,
    pub seed: u64,
    pub ai: String,
}

pub(crate) fn resolve_settings(
    players: Option<u8>,
    seed: Option<u64>,
) -> Result<Settings, CliError> {
    let cfg = config::load()?;
    Ok(Settings {
        players: players.map(usize::from).unwrap_or(cfg.players),
        seed: seed.or(cfg.seed).unwrap_or_else(rand::random),
        ai: cfg.ai,
    })
}

/// Engine calls are async; commands drive them on a single-threaded runtime.
pub(crate) fn runtime() -> Result<tokio::runtime::Runtime, CliError> {
    Ok(tokio::runtime::Builder::new_current_thread().build()?)
}

/// Seats `players` (the first one as admin) and starts the game.
pub(crate) async fn start_table(players: Vec<Player>, seed: u64) -> Result<Game, CliError> {
    let mut seats = players.into_iter();
    let admin = seats
        .next()
        .ok_or_else(|| CliError::InvalidInput("at least one player required".into()))?;
    let mut game = Game::with_seed(admin, seed);
    for p in seats {
        game.add_player(p).await?;
    }
    game.start_game().await?;
    Ok(game)
}

pub(crate) fn hand_cards(game: &Game, id: &PlayerId) -> Vec<Card> {
    game.hand(id)
        .map(|h| h.cards().copied().collect())
        .unwrap_or_default()
}

pub(crate) fn display_name(game: &Game, id: &PlayerId) -> String {
    game.player(id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| id.to_string())
}
