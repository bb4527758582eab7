use crate::cards::{Card, CardId, Color};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Opaque identity handed to us by the front-end (e.g. a chat user id).
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A seated player. Equality is by `id`; the display name is informational.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Player {}

impl std::hash::Hash for Player {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Cards held by one player, keyed by card id.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: BTreeMap<CardId, Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn give(&mut self, card: Card) {
        self.cards.insert(card.id, card);
    }

    pub fn give_all(&mut self, cards: impl IntoIterator<Item = Card>) {
        for c in cards {
            self.give(c);
        }
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    pub fn take(&mut self, id: CardId) -> Option<Card> {
        self.cards.remove(&id)
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in ascending id order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }
}

/// What a player does on their turn.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlayerMove {
    /// Take `1 + pickup_stack` cards and pass
    Draw,
    /// Play a card from hand; `color` is required for wild cards
    Play { card: CardId, color: Option<Color> },
}

impl PlayerMove {
    pub fn play(card: CardId) -> Self {
        PlayerMove::Play { card, color: None }
    }

    pub fn play_wild(card: CardId, color: Color) -> Self {
        PlayerMove::Play {
            card,
            color: Some(color),
        }
    }
}
