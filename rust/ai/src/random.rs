use std::sync::Mutex;

use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;

use crate::{AIOpponent, play_card};
use wildcard_engine::game::Game;
use wildcard_engine::player::{PlayerId, PlayerMove};

/// Picks uniformly among the playable cards; draws only when nothing plays.
#[derive(Debug)]
pub struct RandomAI {
    rng: Mutex<ChaCha8Rng>,
}

impl RandomAI {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl AIOpponent for RandomAI {
    fn choose_move(&self, game: &Game, player: &PlayerId) -> PlayerMove {
        let playable = game.playable_cards(player);
        let pick = match self.rng.lock() {
            Ok(mut rng) => playable.choose(&mut *rng).copied(),
            Err(_) => playable.first().copied(),
        };
        match pick {
            Some(card) => play_card(game, player, &card),
            None => PlayerMove::Draw,
        }
    }

    fn name(&self) -> &str {
        "RandomAI"
    }
}
