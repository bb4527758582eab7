//! `sim`: bot-only games.
//!
//! Game `i` (0-based) shuffles with `seed + i`, so a run is reproducible
//! from its base seed. With `--output`, every turn of every game is written
//! as one JSONL line (see [`wildcard_engine::logger::LogLine`]).

use super::{resolve_settings, runtime, start_table};
use crate::error::CliError;
use crate::ui;
use std::collections::BTreeMap;
use std::io::Write;
use std::sync::{Arc, Mutex};
use wildcard_ai::create_ai;
use wildcard_engine::game::{Game, GameState};
use wildcard_engine::logger::GameLogger;
use wildcard_engine::player::Player;

/// Games still running after this many turns are abandoned.
pub const MAX_TURNS: usize = 5_000;

pub fn handle_sim_command(
    games: u32,
    players: Option<u8>,
    seed: Option<u64>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        ui::write_error(err, "games must be >= 1")?;
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }
    let settings = resolve_settings(players, seed)?;

    let mut logger = match &output {
        Some(path) => GameLogger::create(path).map_err(|e| {
            let _ = ui::write_error(err, &format!("Failed to open output file: {}", e));
            CliError::Io(e)
        })?,
        None => GameLogger::detached("sim"),
    };

    writeln!(
        out,
        "sim: games={} players={} seed={} ai={}",
        games, settings.players, settings.seed, settings.ai
    )?;

    let rt = runtime()?;
    let mut wins: BTreeMap<String, u32> = BTreeMap::new();
    let mut abandoned = 0u32;

    for i in 0..games {
        let game_seed = settings.seed.wrapping_add(u64::from(i));
        let ai = create_ai(&settings.ai, game_seed)
            .ok_or_else(|| CliError::Config(format!("unknown ai '{}'", settings.ai)))?;
        let seats: Vec<Player> = (1..=settings.players)
            .map(|n| Player::new(format!("p{}", n), format!("Bot {}", n)))
            .collect();

        let mut game = rt.block_on(start_table(seats, game_seed))?;
        let winner_slot = watch_winner(&mut game);

        while game.state() == GameState::Ongoing && game.history().len() < MAX_TURNS {
            let Some(current) = game.current_player().map(|p| p.id.clone()) else {
                break;
            };
            let mv = ai.choose_move(&game, &current);
            rt.block_on(game.apply_move(&current, mv))?;
        }

        let game_id = logger.next_id();
        logger.write_all(&game_id, game.history())?;

        let winner = winner_slot.lock().ok().and_then(|w| w.clone());
        match winner {
            Some(name) => {
                writeln!(
                    out,
                    "{}: {} wins after {} turns",
                    game_id,
                    name,
                    game.history().len()
                )?;
                *wins.entry(name).or_default() += 1;
            }
            None => {
                abandoned += 1;
                ui::display_warning(
                    err,
                    &format!("{}: no winner after {} turns, abandoned", game_id, MAX_TURNS),
                )?;
                rt.block_on(game.destroy())?;
            }
        }
    }

    let summary = wins
        .iter()
        .map(|(name, n)| format!("{}={}", name, n))
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(out, "Wins: {}", summary)?;
    if abandoned > 0 {
        writeln!(out, "Abandoned: {}", abandoned)?;
    }
    Ok(())
}

/// Subscribes to the finish event and returns the slot the winner's name lands in.
fn watch_winner(game: &mut Game) -> Arc<Mutex<Option<String>>> {
    let slot = Arc::new(Mutex::new(None));
    let handler_slot = Arc::clone(&slot);
    game.events().on_finished(move |winner: Player| {
        let slot = Arc::clone(&handler_slot);
        async move {
            tracing::debug!(winner = %winner.id, "sim game finished");
            if let Ok(mut w) = slot.lock() {
                *w = Some(winner.name);
            }
        }
    });
    slot
}
