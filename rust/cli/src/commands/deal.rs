//! `deal`: starts one game and shows every hand plus the opening card.

use super::{hand_cards, resolve_settings, runtime, start_table};
use crate::error::CliError;
use crate::formatters::{format_hand, format_table};
use std::io::Write;
use wildcard_engine::player::Player;

pub fn handle_deal_command(
    players: Option<u8>,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let settings = resolve_settings(players, seed)?;
    let seats: Vec<Player> = (1..=settings.players)
        .map(|i| Player::new(format!("p{}", i), format!("Player {}", i)))
        .collect();

    let game = runtime()?.block_on(start_table(seats, settings.seed))?;

    writeln!(out, "deal: players={} seed={}", settings.players, settings.seed)?;
    writeln!(out, "{}", format_table(&game))?;
    for p in game.players() {
        writeln!(out, "{}: {}", p.name, format_hand(&hand_cards(&game, &p.id)))?;
    }
    writeln!(out, "Draw pile: {}", game.draw_pile().len())?;
    Ok(())
}
