use crate::game::GameState;
use crate::logger::TurnRecord;
use crate::player::Player;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

pub type HandlerFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// A subscriber. Handlers get their own copy of the event and may do async I/O.
pub type Handler = Box<dyn Fn(GameEvent) -> HandlerFuture + Send + Sync>;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Ready,
    Started,
    Ongoing,
    Initialized,
    Finished,
    PlayerCountChanged,
    TurnCompleted,
    Destroyed,
}

impl EventKind {
    /// States the game may be in when an event of this kind is delivered.
    pub fn fires_in(self, state: GameState) -> bool {
        match self {
            EventKind::Ready => state == GameState::ReadyToStart,
            EventKind::Started => state == GameState::Started,
            EventKind::Ongoing | EventKind::TurnCompleted => state == GameState::Ongoing,
            EventKind::Initialized => state == GameState::Initialized,
            EventKind::Finished => state == GameState::Finished,
            EventKind::PlayerCountChanged => {
                matches!(state, GameState::Initialized | GameState::ReadyToStart)
            }
            EventKind::Destroyed => state == GameState::Destroyed,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    Ready,
    Started,
    Ongoing,
    Initialized,
    Finished { winner: Player },
    PlayerCountChanged { count: usize },
    TurnCompleted { record: TurnRecord },
    Destroyed,
}

impl GameEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::Ready => EventKind::Ready,
            GameEvent::Started => EventKind::Started,
            GameEvent::Ongoing => EventKind::Ongoing,
            GameEvent::Initialized => EventKind::Initialized,
            GameEvent::Finished { .. } => EventKind::Finished,
            GameEvent::PlayerCountChanged { .. } => EventKind::PlayerCountChanged,
            GameEvent::TurnCompleted { .. } => EventKind::TurnCompleted,
            GameEvent::Destroyed => EventKind::Destroyed,
        }
    }
}

/// Ordered subscriber lists, one per [`EventKind`].
///
/// Every game owns its own bus. [`EventBus::emit`] awaits each handler in
/// registration order before starting the next, so by the time the triggering
/// operation returns every handler has finished.
#[derive(Default)]
pub struct EventBus {
    handlers: HashMap<EventKind, Vec<Handler>>,
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: HashMap<&EventKind, usize> =
            self.handlers.iter().map(|(k, v)| (k, v.len())).collect();
        f.debug_struct("EventBus").field("handlers", &counts).finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler receiving the full event.
    pub fn subscribe<F, Fut>(&mut self, kind: EventKind, handler: F)
    where
        F: Fn(GameEvent) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.push(
            kind,
            Box::new(move |ev| -> HandlerFuture { Box::pin(handler(ev)) }),
        );
    }

    pub fn on_ready<F, Fut>(&mut self, f: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.subscribe(EventKind::Ready, move |_| f());
    }

    pub fn on_started<F, Fut>(&mut self, f: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.subscribe(EventKind::Started, move |_| f());
    }

    pub fn on_ongoing<F, Fut>(&mut self, f: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.subscribe(EventKind::Ongoing, move |_| f());
    }

    pub fn on_initialized<F, Fut>(&mut self, f: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.subscribe(EventKind::Initialized, move |_| f());
    }

    pub fn on_finished<F, Fut>(&mut self, f: F)
    where
        F: Fn(Player) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.push(
            EventKind::Finished,
            Box::new(move |ev| -> HandlerFuture {
                match ev {
                    GameEvent::Finished { winner } => Box::pin(f(winner)),
                    _ => Box::pin(async {}),
                }
            }),
        );
    }

    pub fn on_player_count_changed<F, Fut>(&mut self, f: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.subscribe(EventKind::PlayerCountChanged, move |_| f());
    }

    pub fn on_turn_completed<F, Fut>(&mut self, f: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.subscribe(EventKind::TurnCompleted, move |_| f());
    }

    pub fn on_destroyed<F, Fut>(&mut self, f: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.subscribe(EventKind::Destroyed, move |_| f());
    }

    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.handlers.get(&kind).map_or(0, Vec::len)
    }

    /// Runs every handler for the event's kind, one after another.
    pub async fn emit(&self, event: GameEvent) {
        let kind = event.kind();
        let Some(list) = self.handlers.get(&kind) else {
            tracing::trace!(event = ?kind, "no subscribers for event");
            return;
        };
        tracing::trace!(event = ?kind, subscriber_count = list.len(), "dispatching event");
        for handler in list {
            handler(event.clone()).await;
        }
    }

    fn push(&mut self, kind: EventKind, handler: Handler) {
        self.handlers.entry(kind).or_default().push(handler);
    }
}
