//! # wildcard-ai: Bot Players
//!
//! Bots that pick a legal move for a seat, so a front-end can fill empty
//! seats or run unattended games.
//!
//! ## Core Components
//!
//! - [`AIOpponent`] - Trait every bot implements
//! - [`baseline`] - Rule-based bot
//! - [`random`] - Seeded bot that picks uniformly among legal moves
//! - [`create_ai`] - Factory by name
//!
//! ## Quick Start
//!
//! ```rust
//! use wildcard_ai::{create_ai, AIOpponent};
//! use wildcard_engine::game::Game;
//! use wildcard_engine::player::Player;
//!
//! # let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # rt.block_on(async {
//! let ai = create_ai("baseline", 0).expect("known ai");
//!
//! let mut game = Game::with_seed(Player::new("1", "Ada"), 42);
//! game.add_player(Player::new("2", "Bot")).await.unwrap();
//! game.start_game().await.unwrap();
//!
//! let me = game.current_player().unwrap().id.clone();
//! let mv = ai.choose_move(&game, &me);
//! game.apply_move(&me, mv).await.unwrap();
//! # });
//! ```

use wildcard_engine::cards::{Card, Color, all_colors};
use wildcard_engine::game::Game;
use wildcard_engine::player::{PlayerId, PlayerMove};

pub mod baseline;
pub mod random;

/// Names accepted by [`create_ai`].
pub const AI_NAMES: &[&str] = &["baseline", "random"];

/// A bot that decides one move at a time.
///
/// Implementations must only return moves the engine accepts for `player`
/// on the current table: a card from the player's hand that is playable
/// (with a color for wild cards), or [`PlayerMove::Draw`].
pub trait AIOpponent: Send + Sync {
    /// Picks the move for `player`, who must be the player to move.
    fn choose_move(&self, game: &Game, player: &PlayerId) -> PlayerMove;

    fn name(&self) -> &str;
}

/// Builds a bot by name; `seed` only matters for randomized bots.
///
/// ```rust
/// use wildcard_ai::create_ai;
///
/// assert_eq!(create_ai("baseline", 0).unwrap().name(), "BaselineAI");
/// assert!(create_ai("oracle", 0).is_none());
/// ```
pub fn create_ai(ai_type: &str, seed: u64) -> Option<Box<dyn AIOpponent>> {
    match ai_type {
        "baseline" => Some(Box::new(baseline::BaselineAI::new())),
        "random" => Some(Box::new(random::RandomAI::new(seed))),
        _ => None,
    }
}

/// The color the player holds most of, ties broken in [`all_colors`] order.
pub fn dominant_color<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Color {
    let mut counts = [0usize; 4];
    for card in cards {
        if let Some(c) = card.color() {
            if let Some(i) = all_colors().iter().position(|x| *x == c) {
                counts[i] += 1;
            }
        }
    }
    let mut best = 0;
    for i in 1..4 {
        if counts[i] > counts[best] {
            best = i;
        }
    }
    all_colors()[best]
}

/// Move that plays `card`, picking a color for wild cards.
pub fn play_card(game: &Game, player: &PlayerId, card: &Card) -> PlayerMove {
    if card.kind.is_wild() {
        let color = game
            .hand(player)
            .map(|h| dominant_color(h.cards().filter(|c| c.id != card.id)))
            .unwrap_or(Color::Red);
        PlayerMove::play_wild(card.id, color)
    } else {
        PlayerMove::play(card.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wildcard_engine::cards::CardKind;

    #[test]
    fn dominant_color_counts_colored_cards_only() {
        let cards = [
            Card::new(1, CardKind::Wild),
            Card::new(2, CardKind::Skip { color: Color::Green }),
            Card::new(
                3,
                CardKind::Number {
                    color: Color::Green,
                    rank: 4,
                },
            ),
            Card::new(4, CardKind::Reverse { color: Color::Blue }),
        ];
        assert_eq!(dominant_color(&cards), Color::Green);
        assert_eq!(dominant_color(std::iter::empty()), Color::Red);
    }

    #[test]
    fn factory_knows_every_listed_name() {
        for name in AI_NAMES {
            assert!(create_ai(name, 1).is_some(), "{name}");
        }
    }
}
