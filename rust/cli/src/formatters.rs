//! Card, hand and turn formatters for terminal display.
//!
//! ```rust
//! use wildcard_engine::cards::{Card, CardKind, Color};
//! use wildcard_cli::formatters::{format_card, format_hand};
//!
//! let skip = Card::new(1, CardKind::Skip { color: Color::Blue });
//! assert_eq!(format_card(&skip), "Blue Skip");
//! assert_eq!(format_hand(&[skip, Card::new(2, CardKind::Wild)]), "[0] Blue Skip  [1] Wild");
//! ```

use wildcard_engine::cards::Card;
use wildcard_engine::game::Game;
use wildcard_engine::logger::TurnRecord;

pub fn format_card(card: &Card) -> String {
    card.to_string()
}

/// Cards prefixed with the index a player types to play them.
pub fn format_hand(cards: &[Card]) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(i, c)| format!("[{}] {}", i, format_card(c)))
        .collect::<Vec<_>>()
        .join("  ")
}

/// One-line summary of the face-up card, active color and pickup stack.
pub fn format_table(game: &Game) -> String {
    let top = game
        .current_card()
        .map(format_card)
        .unwrap_or_else(|| "-".to_string());
    let color = game
        .current_color()
        .map(|c| c.to_string())
        .unwrap_or_else(|| "-".to_string());
    let mut line = format!("Top: {} | Color: {}", top, color);
    if game.pickup_stack() > 0 {
        line.push_str(&format!(" | Pickup: {}", game.pickup_stack()));
    }
    line
}

/// Describes a completed turn using the player's display name.
pub fn format_turn(record: &TurnRecord, name: &str) -> String {
    let mut line = match &record.played {
        Some(card) if card.kind.is_wild() => match record.color {
            Some(color) => format!("{} played {} choosing {}", name, format_card(card), color),
            None => format!("{} played {}", name, format_card(card)),
        },
        Some(card) => format!("{} played {}", name, format_card(card)),
        None => format!("{} drew {}", name, record.drawn),
    };
    if record.played.is_some() && record.drawn > 0 {
        line.push_str(&format!(" after drawing {}", record.drawn));
    }
    if record.winning {
        line.push_str(" and wins!");
    }
    line
}
