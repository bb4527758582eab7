//! # wildcard-engine: Shedding Card Game Core
//!
//! Rules, deck lifecycle, turn order and win detection for a multiplayer
//! color-and-number shedding game, independent of whatever front-end
//! renders it. One [`game::Game`] is one table; hosting many tables is up to
//! the caller.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card variants, colors and their static properties
//! - [`deck`] - Seeded draw pile that regenerates itself when it runs out
//! - [`rules`] - Playability check and per-variant effects
//! - [`engine`] - Turn resolution (draws, plays, pickup stack, seat advance)
//! - [`game`] - Lifecycle state machine and roster
//! - [`events`] - Ordered async subscriber lists per lifecycle event
//! - [`player`] - Players, hands and moves
//! - [`logger`] - Turn records and JSONL game logs
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use wildcard_engine::game::{Game, GameState};
//! use wildcard_engine::player::{Player, PlayerMove};
//!
//! # let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # rt.block_on(async {
//! let mut game = Game::with_seed(Player::new("1", "Ada"), 7);
//! game.events().on_finished(|winner| async move {
//!     println!("{} wins", winner.name);
//! });
//! game.add_player(Player::new("2", "Grace")).await.unwrap();
//! game.start_game().await.unwrap();
//!
//! let me = game.current_player().unwrap().id.clone();
//! let mv = match game.playable_cards(&me).first() {
//!     Some(card) if card.kind.is_wild() => {
//!         PlayerMove::play_wild(card.id, wildcard_engine::cards::Color::Red)
//!     }
//!     Some(card) => PlayerMove::play(card.id),
//!     None => PlayerMove::Draw,
//! };
//! game.apply_move(&me, mv).await.unwrap();
//! assert_eq!(game.state(), GameState::Ongoing);
//! # });
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod events;
pub mod game;
pub mod logger;
pub mod player;
pub mod rules;
