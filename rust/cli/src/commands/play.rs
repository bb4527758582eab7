//! # Play Command
//!
//! Interactive game against bots. The human sits in the first seat (and so
//! moves first); every other seat is driven by the configured AI.
//!
//! Moves are read line by line from the input stream, see
//! [`crate::validation::parse_move`]. Rejected moves are reported and the
//! prompt repeats; the turn does not pass.

use super::{display_name, hand_cards, resolve_settings, runtime, start_table};
use crate::error::CliError;
use crate::formatters::{format_hand, format_table, format_turn};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_move};
use std::io::{BufRead, Write};
use wildcard_ai::create_ai;
use wildcard_engine::game::{Game, GameState};
use wildcard_engine::player::{Player, PlayerId};

pub const HUMAN_ID: &str = "p1";

pub fn handle_play_command(
    players: Option<u8>,
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let settings = resolve_settings(players, seed)?;
    let ai = create_ai(&settings.ai, settings.seed)
        .ok_or_else(|| CliError::Config(format!("unknown ai '{}'", settings.ai)))?;

    let mut seats = vec![Player::new(HUMAN_ID, "You")];
    seats.extend((2..=settings.players).map(|i| Player::new(format!("p{}", i), format!("Bot {}", i))));

    writeln!(
        out,
        "play: players={} seed={} ai={}",
        settings.players,
        settings.seed,
        ai.name()
    )?;

    let rt = runtime()?;
    let mut game = rt.block_on(start_table(seats, settings.seed))?;
    let human = PlayerId::from(HUMAN_ID);

    while game.state() == GameState::Ongoing {
        let current = match game.current_player() {
            Some(p) => p.id.clone(),
            None => break,
        };

        let mv = if current == human {
            let hand = hand_cards(&game, &human);
            writeln!(out, "{}", format_table(&game))?;
            writeln!(out, "Your hand: {}", format_hand(&hand))?;
            write!(out, "Your move (<n> [color] / d / q): ")?;
            out.flush()?;

            match read_stdin_line(stdin) {
                Some(line) => match parse_move(&line, &hand) {
                    ParseResult::Move(mv) => mv,
                    ParseResult::Quit => return quit(&mut game, &rt, out),
                    ParseResult::Invalid(msg) => {
                        ui::write_error(err, &msg)?;
                        continue;
                    }
                },
                None => return quit(&mut game, &rt, out),
            }
        } else {
            ai.choose_move(&game, &current)
        };

        match rt.block_on(game.apply_move(&current, mv)) {
            Ok(record) => {
                writeln!(out, "{}", format_turn(&record, &display_name(&game, &current)))?;
            }
            Err(e) if current == human => {
                ui::write_error(err, &format!("Invalid move: {}", e))?;
            }
            Err(e) => return Err(e.into()),
        }
    }

    if let Some(winner) = game.winner() {
        writeln!(out, "Winner: {} after {} turns", winner.name, game.history().len())?;
    }
    Ok(())
}

fn quit(
    game: &mut Game,
    rt: &tokio::runtime::Runtime,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    writeln!(out)?;
    writeln!(out, "Game abandoned after {} turns", game.history().len())?;
    rt.block_on(game.destroy())?;
    Err(CliError::Interrupted("player quit".into()))
}
