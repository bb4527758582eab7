use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, Color};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::events::{EventBus, GameEvent};
use crate::logger::TurnRecord;
use crate::player::{Hand, Player, PlayerId, PlayerMove};
use crate::rules;

/// Cards dealt to each player when the game starts.
pub const HAND_SIZE: usize = 7;

/// Seats needed before a game can start.
pub const MIN_PLAYERS: usize = 2;

/// Coarse lifecycle of a game.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    /// Waiting for a second player
    Initialized,
    /// Enough players seated; roster still open
    ReadyToStart,
    /// Dealing; only observable from inside a started handler
    Started,
    /// Turns are being taken
    Ongoing,
    /// Someone emptied their hand
    Finished,
    /// Torn down by the owner; nothing is legal anymore
    Destroyed,
}

/// Seating traversal direction.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn sign(self) -> isize {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// A single game: roster, hands, draw pile, table and lifecycle.
///
/// The game does no locking of its own. An owner sharing it between tasks
/// must hold one lock per game across each whole call, e.g. by keeping it in
/// an `Arc<tokio::sync::Mutex<Game>>`. Operations that fire events await every
/// handler before returning.
///
/// # Examples
///
/// ```
/// use wildcard_engine::game::{Game, GameState};
/// use wildcard_engine::player::Player;
///
/// # tokio_test_block_on(async {
/// let mut game = Game::with_seed(Player::new("1", "Ada"), 42);
/// game.add_player(Player::new("2", "Grace")).await.unwrap();
/// assert_eq!(game.state(), GameState::ReadyToStart);
///
/// game.start_game().await.unwrap();
/// assert_eq!(game.state(), GameState::Ongoing);
/// assert_eq!(game.hand(&"2".into()).unwrap().len(), 7);
/// # });
/// # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
/// # }
/// ```
#[derive(Debug)]
pub struct Game {
    pub(crate) state: GameState,
    pub(crate) admin: PlayerId,
    pub(crate) players: Vec<Player>,
    pub(crate) hands: HashMap<PlayerId, Hand>,
    pub(crate) deck: Deck,
    pub(crate) current_card: Option<Card>,
    pub(crate) current_color: Option<Color>,
    /// Seat index of the player to move
    pub(crate) current_seat: usize,
    pub(crate) pickup_stack: u32,
    pub(crate) direction: Direction,
    pub(crate) history: Vec<TurnRecord>,
    pub(crate) winner: Option<PlayerId>,
    events: EventBus,
}

impl Game {
    /// Creates a game in `Initialized` with `admin` in the first seat.
    pub fn new(admin: Player) -> Self {
        Self::with_seed(admin, rand::random())
    }

    /// Like [`Game::new`], with a fixed shuffle seed.
    pub fn with_seed(admin: Player, seed: u64) -> Self {
        let mut hands = HashMap::new();
        hands.insert(admin.id.clone(), Hand::new());
        tracing::debug!(admin = %admin.id, seed, "game created");
        Self {
            state: GameState::Initialized,
            admin: admin.id.clone(),
            players: vec![admin],
            hands,
            deck: Deck::new_with_seed(seed),
            current_card: None,
            current_color: None,
            current_seat: 0,
            pickup_stack: 0,
            direction: Direction::Clockwise,
            history: Vec::new(),
            winner: None,
            events: EventBus::new(),
        }
    }

    /// Subscription point for front-end handlers.
    pub fn events(&mut self) -> &mut EventBus {
        &mut self.events
    }

    pub async fn add_player(&mut self, player: Player) -> Result<(), GameError> {
        self.require_roster_open()?;
        if self.is_seated(&player.id) {
            return Err(GameError::DuplicatePlayer(player.id));
        }
        tracing::debug!(player = %player.id, name = %player.name, "player joined");
        self.hands.insert(player.id.clone(), Hand::new());
        self.players.push(player);

        self.notify(GameEvent::PlayerCountChanged {
            count: self.players.len(),
        })
        .await;
        if self.state == GameState::Initialized && self.players.len() >= MIN_PLAYERS {
            self.transition(GameState::ReadyToStart);
            self.notify(GameEvent::Ready).await;
        }
        Ok(())
    }

    pub async fn remove_player(&mut self, id: &PlayerId) -> Result<(), GameError> {
        self.require_roster_open()?;
        if *id == self.admin {
            return Err(GameError::AdminRemoval);
        }
        let seat = self
            .seat_of(id)
            .ok_or_else(|| GameError::PlayerNotFound(id.clone()))?;
        self.players.remove(seat);
        self.hands.remove(id);
        tracing::debug!(player = %id, "player left");

        self.notify(GameEvent::PlayerCountChanged {
            count: self.players.len(),
        })
        .await;
        if self.state == GameState::ReadyToStart && self.players.len() < MIN_PLAYERS {
            self.transition(GameState::Initialized);
            self.notify(GameEvent::Initialized).await;
        }
        Ok(())
    }

    /// Deals [`HAND_SIZE`] cards to every seat, turns up the opening Number
    /// card and hands the first turn to the admin.
    pub async fn start_game(&mut self) -> Result<(), GameError> {
        if self.state != GameState::ReadyToStart {
            return Err(GameError::InvalidState { state: self.state });
        }
        self.transition(GameState::Started);
        self.notify(GameEvent::Started).await;

        self.deck.refill();
        for _ in 0..HAND_SIZE {
            for p in &self.players {
                let card = self.deck.draw();
                self.hands.entry(p.id.clone()).or_default().give(card);
            }
        }
        let opening = self.deck.take_first_number();
        self.current_color = opening.color();
        self.current_card = Some(opening);
        self.current_seat = 0;
        self.pickup_stack = 0;
        self.direction = Direction::Clockwise;
        self.history.clear();
        self.winner = None;
        tracing::info!(
            players = self.players.len(),
            opening = %opening,
            "game started"
        );

        self.transition(GameState::Ongoing);
        self.notify(GameEvent::Ongoing).await;
        Ok(())
    }

    /// Takes one turn for `player`: draw when `card` is `None`, otherwise play
    /// it (with `color` chosen for wild cards).
    pub async fn process_turn(
        &mut self,
        player: &PlayerId,
        card: Option<CardId>,
        color: Option<Color>,
    ) -> Result<TurnRecord, GameError> {
        let record = self.apply_turn(player, card, color)?;
        if let Some(winner) = self.winner().cloned() {
            tracing::info!(winner = %winner.id, turns = record.turn, "game finished");
            self.notify(GameEvent::Finished { winner }).await;
        } else {
            self.notify(GameEvent::TurnCompleted {
                record: record.clone(),
            })
            .await;
        }
        Ok(record)
    }

    pub async fn apply_move(
        &mut self,
        player: &PlayerId,
        mv: PlayerMove,
    ) -> Result<TurnRecord, GameError> {
        match mv {
            PlayerMove::Draw => self.process_turn(player, None, None).await,
            PlayerMove::Play { card, color } => self.process_turn(player, Some(card), color).await,
        }
    }

    /// Marks the game torn down. Legal from any state but `Destroyed`.
    pub async fn destroy(&mut self) -> Result<(), GameError> {
        if self.state == GameState::Destroyed {
            return Err(GameError::InvalidState { state: self.state });
        }
        self.transition(GameState::Destroyed);
        self.notify(GameEvent::Destroyed).await;
        Ok(())
    }

    /// Whether `card` could be played on the current table. Always false
    /// before the opening card is turned up.
    pub fn is_playable(&self, card: &Card) -> bool {
        match (self.current_card.as_ref(), self.current_color) {
            (Some(top), Some(color)) => rules::is_playable(card, top, color),
            _ => false,
        }
    }

    /// Cards in `player`'s hand that are playable right now.
    pub fn playable_cards(&self, player: &PlayerId) -> Vec<Card> {
        self.hands
            .get(player)
            .map(|h| h.cards().filter(|c| self.is_playable(c)).copied().collect())
            .unwrap_or_default()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn admin(&self) -> &PlayerId {
        &self.admin
    }

    /// Roster in seating order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == *id)
    }

    /// Player to move; `None` until the game has started.
    pub fn current_player(&self) -> Option<&Player> {
        match self.state {
            GameState::Ongoing | GameState::Finished => self.players.get(self.current_seat),
            _ => None,
        }
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.current_card.as_ref()
    }

    pub fn current_color(&self) -> Option<Color> {
        self.current_color
    }

    pub fn pickup_stack(&self) -> u32 {
        self.pickup_stack
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn hand(&self, player: &PlayerId) -> Option<&Hand> {
        self.hands.get(player)
    }

    pub fn draw_pile(&self) -> &[Card] {
        self.deck.cards()
    }

    pub fn cards_generated(&self) -> u32 {
        self.deck.cards_generated()
    }

    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    pub fn winner(&self) -> Option<&Player> {
        self.winner.as_ref().and_then(|id| self.player(id))
    }

    pub(crate) fn seat_of(&self, id: &PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == *id)
    }

    fn is_seated(&self, id: &PlayerId) -> bool {
        self.seat_of(id).is_some()
    }

    fn require_roster_open(&self) -> Result<(), GameError> {
        match self.state {
            GameState::Initialized | GameState::ReadyToStart => Ok(()),
            state => Err(GameError::InvalidState { state }),
        }
    }

    pub(crate) fn transition(&mut self, next: GameState) {
        tracing::debug!(from = ?self.state, to = ?next, "game state transition");
        self.state = next;
    }

    /// Fires `event` unless the game has left the state the event belongs to.
    async fn notify(&self, event: GameEvent) {
        let kind = event.kind();
        if !kind.fires_in(self.state) {
            tracing::warn!(event = ?kind, state = ?self.state, "event suppressed");
            return;
        }
        self.events.emit(event).await;
    }
}
