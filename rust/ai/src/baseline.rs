//! Rule-based bot.
//!
//! Priorities, highest first:
//! 1. With a pickup stack pending, chain a plus card if one is playable
//! 2. Play a non-wild card, action cards before numbers
//! 3. Play a wild, choosing the color held most
//! 4. Draw

use crate::{AIOpponent, play_card};
use wildcard_engine::cards::{Card, CardKind};
use wildcard_engine::game::Game;
use wildcard_engine::player::{PlayerId, PlayerMove};

#[derive(Debug, Clone, Default)]
pub struct BaselineAI;

impl BaselineAI {
    pub fn new() -> Self {
        Self
    }

    fn priority(card: &Card, stack_pending: bool) -> u8 {
        if stack_pending && card.is_plus() {
            return 0;
        }
        match card.kind {
            CardKind::Skip { .. } | CardKind::Reverse { .. } | CardKind::PlusTwo { .. } => 1,
            CardKind::Number { .. } => 2,
            CardKind::Wild => 3,
            CardKind::WildPlusFour => 4,
        }
    }
}

impl AIOpponent for BaselineAI {
    fn choose_move(&self, game: &Game, player: &PlayerId) -> PlayerMove {
        let stack_pending = game.pickup_stack() > 0;
        let best = game
            .playable_cards(player)
            .into_iter()
            .min_by_key(|c| (Self::priority(c, stack_pending), c.id));
        match best {
            Some(card) => play_card(game, player, &card),
            None => PlayerMove::Draw,
        }
    }

    fn name(&self) -> &str {
        "BaselineAI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wildcard_engine::cards::Color;

    #[test]
    fn plus_cards_jump_the_queue_only_when_stacked() {
        let plus = Card::new(1, CardKind::PlusTwo { color: Color::Red });
        let num = Card::new(
            2,
            CardKind::Number {
                color: Color::Red,
                rank: 3,
            },
        );
        let wild4 = Card::new(3, CardKind::WildPlusFour);
        assert!(BaselineAI::priority(&plus, false) < BaselineAI::priority(&num, false));
        assert!(BaselineAI::priority(&wild4, true) < BaselineAI::priority(&num, true));
        assert!(BaselineAI::priority(&wild4, false) > BaselineAI::priority(&num, false));
    }
}
