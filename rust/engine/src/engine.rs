//! Turn resolution. Everything here runs synchronously against a [`Game`];
//! event dispatch for the finished turn happens in [`Game::process_turn`].

use crate::cards::{Card, CardId, Color};
use crate::errors::GameError;
use crate::game::{Game, GameState};
use crate::logger::TurnRecord;
use crate::player::{Hand, PlayerId};
use crate::rules;

impl Game {
    /// Validates and applies one move, returning its record.
    ///
    /// A play by a player facing a pickup stack with a non-plus card pays the
    /// stack first; the payment stands even if the play then turns out to be
    /// illegal.
    pub(crate) fn apply_turn(
        &mut self,
        actor: &PlayerId,
        card_id: Option<CardId>,
        chosen: Option<Color>,
    ) -> Result<TurnRecord, GameError> {
        if self.state != GameState::Ongoing {
            return Err(GameError::InvalidState { state: self.state });
        }
        let expected = self.players[self.current_seat].id.clone();
        if *actor != expected {
            return Err(GameError::OutOfTurn {
                expected,
                actual: actor.clone(),
            });
        }

        let record = match card_id {
            None => self.draw_turn(actor)?,
            Some(id) => self.play_turn(actor, id, chosen)?,
        };
        self.history.push(record.clone());
        Ok(record)
    }

    fn draw_turn(&mut self, actor: &PlayerId) -> Result<TurnRecord, GameError> {
        let count = 1 + self.pickup_stack;
        let drawn = self.deck.draw_n(count as usize);
        self.hand_mut(actor)?.give_all(drawn);
        self.pickup_stack = 0;
        self.advance(1);
        tracing::debug!(player = %actor, drawn = count, "player drew");
        Ok(self.record(actor, None, count, false))
    }

    fn play_turn(
        &mut self,
        actor: &PlayerId,
        card_id: CardId,
        chosen: Option<Color>,
    ) -> Result<TurnRecord, GameError> {
        let (top, color_in_effect) = self.table()?;
        let card = *self
            .hand_mut(actor)?
            .get(card_id)
            .ok_or_else(|| GameError::UnknownCard {
                player: actor.clone(),
                card: card_id,
            })?;
        let effect = rules::resolve_effect(&card, chosen)?;

        let mut drawn = 0;
        if !card.is_plus() && self.pickup_stack > 0 {
            drawn = self.pickup_stack;
            let forced = self.deck.draw_n(drawn as usize);
            self.hand_mut(actor)?.give_all(forced);
            self.pickup_stack = 0;
            tracing::debug!(player = %actor, drawn, "pickup stack paid");
        }

        if !rules::is_playable(&card, &top, color_in_effect) {
            return Err(GameError::IllegalPlay { card: card_id });
        }

        if effect.reverse {
            self.direction = self.direction.flipped();
        }
        self.pickup_stack += effect.pickup;
        self.advance(effect.step);
        self.current_card = Some(card);
        self.current_color = Some(effect.color);

        let hand = self.hand_mut(actor)?;
        hand.take(card_id);
        let winning = hand.is_empty();
        if winning {
            self.winner = Some(actor.clone());
            self.transition(GameState::Finished);
        }
        tracing::debug!(
            player = %actor,
            card = %card,
            color = %effect.color,
            pickup_stack = self.pickup_stack,
            "card played"
        );
        Ok(self.record(actor, Some(card), drawn, winning))
    }

    /// Moves the turn `step` seats in the current direction.
    fn advance(&mut self, step: usize) {
        let n = self.players.len() as isize;
        let next = self.current_seat as isize + step as isize * self.direction.sign();
        self.current_seat = next.rem_euclid(n) as usize;
    }

    fn table(&self) -> Result<(Card, Color), GameError> {
        match (self.current_card, self.current_color) {
            (Some(card), Some(color)) => Ok((card, color)),
            _ => Err(GameError::InvalidState { state: self.state }),
        }
    }

    fn hand_mut(&mut self, player: &PlayerId) -> Result<&mut Hand, GameError> {
        self.hands
            .get_mut(player)
            .ok_or_else(|| GameError::PlayerNotFound(player.clone()))
    }

    fn record(
        &self,
        actor: &PlayerId,
        played: Option<Card>,
        drawn: u32,
        winning: bool,
    ) -> TurnRecord {
        TurnRecord {
            turn: self.history.len() as u32 + 1,
            player: actor.clone(),
            played,
            drawn,
            color: self.current_color,
            pickup_stack: self.pickup_stack,
            next_player: self.players[self.current_seat].id.clone(),
            winning,
        }
    }
}
