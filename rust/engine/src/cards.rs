use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique card identity, issued by the [`crate::deck::Deck`] at generation time.
pub type CardId = u32;

/// One of the four card colors.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Yellow,
    Green,
}

impl Color {
    pub fn from_name(s: &str) -> Option<Color> {
        match s.to_ascii_lowercase().as_str() {
            "r" | "red" => Some(Color::Red),
            "b" | "blue" => Some(Color::Blue),
            "y" | "yellow" => Some(Color::Yellow),
            "g" | "green" => Some(Color::Green),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::Yellow => "Yellow",
            Color::Green => "Green",
        };
        f.write_str(s)
    }
}

pub fn all_colors() -> [Color; 4] {
    [Color::Red, Color::Blue, Color::Yellow, Color::Green]
}

/// The closed set of card variants. Each variant carries only the fields it uses:
/// the two wild variants have no color of their own.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardKind {
    /// Number card, rank 0 through 9
    Number { color: Color, rank: u8 },
    /// Next seat loses its turn
    Skip { color: Color },
    /// Flips the seating direction
    Reverse { color: Color },
    /// Adds two to the pickup stack
    PlusTwo { color: Color },
    /// Any color, chosen by the player
    Wild,
    /// Any color, chosen by the player, and adds four to the pickup stack
    WildPlusFour,
}

impl CardKind {
    /// The card's own color; `None` only for the wild variants.
    pub fn color(&self) -> Option<Color> {
        match *self {
            CardKind::Number { color, .. }
            | CardKind::Skip { color }
            | CardKind::Reverse { color }
            | CardKind::PlusTwo { color } => Some(color),
            CardKind::Wild | CardKind::WildPlusFour => None,
        }
    }

    pub fn rank(&self) -> Option<u8> {
        match *self {
            CardKind::Number { rank, .. } => Some(rank),
            _ => None,
        }
    }

    /// Forced-draw contribution this card adds to the pickup stack.
    pub fn pickup_amount(&self) -> u32 {
        match self {
            CardKind::PlusTwo { .. } => 2,
            CardKind::WildPlusFour => 4,
            _ => 0,
        }
    }

    pub fn is_plus(&self) -> bool {
        self.pickup_amount() > 0
    }

    pub fn is_wild(&self) -> bool {
        matches!(self, CardKind::Wild | CardKind::WildPlusFour)
    }

    pub fn is_number(&self) -> bool {
        matches!(self, CardKind::Number { .. })
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardKind::Number { color, rank } => write!(f, "{color} {rank}"),
            CardKind::Skip { color } => write!(f, "{color} Skip"),
            CardKind::Reverse { color } => write!(f, "{color} Reverse"),
            CardKind::PlusTwo { color } => write!(f, "{color} +2"),
            CardKind::Wild => f.write_str("Wild"),
            CardKind::WildPlusFour => f.write_str("Wild +4"),
        }
    }
}

/// A single card. Two cards are the same card only if their ids match;
/// the variant says nothing about identity.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub kind: CardKind,
}

impl Card {
    pub const fn new(id: CardId, kind: CardKind) -> Self {
        Self { id, kind }
    }

    pub fn color(&self) -> Option<Color> {
        self.kind.color()
    }

    pub fn is_plus(&self) -> bool {
        self.kind.is_plus()
    }

    pub fn pickup_amount(&self) -> u32 {
        self.kind.pickup_amount()
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

impl std::hash::Hash for Card {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}
