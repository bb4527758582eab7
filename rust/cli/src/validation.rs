//! Parsing of interactive move input.
//!
//! Accepted forms (case-insensitive):
//! - `<index>` plays the card at that position of the displayed hand
//! - `<index> <color>` plays a wild card and names the next color
//! - `d` / `draw` draws (paying any pending pickup stack)
//! - `q` / `quit` ends the session

use wildcard_engine::cards::{Card, Color};
use wildcard_engine::player::PlayerMove;

#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Move(PlayerMove),
    Quit,
    Invalid(String),
}

/// Parses a line typed by the human player against the hand shown to them.
///
/// ```rust
/// # use wildcard_cli::validation::{parse_move, ParseResult};
/// use wildcard_engine::cards::{Card, CardKind, Color};
/// use wildcard_engine::player::PlayerMove;
///
/// let hand = [Card::new(10, CardKind::Wild)];
/// assert_eq!(
///     parse_move("0 blue", &hand),
///     ParseResult::Move(PlayerMove::play_wild(10, Color::Blue))
/// );
/// assert_eq!(parse_move("d", &hand), ParseResult::Move(PlayerMove::Draw));
/// assert_eq!(parse_move("q", &hand), ParseResult::Quit);
/// ```
pub fn parse_move(input: &str, hand: &[Card]) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(first) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match *first {
        "q" | "quit" => return ParseResult::Quit,
        "d" | "draw" => return ParseResult::Move(PlayerMove::Draw),
        _ => {}
    }

    let index: usize = match first.parse() {
        Ok(i) => i,
        Err(_) => {
            return ParseResult::Invalid(format!(
                "Unrecognized input '{}'. Type a card number, 'd' to draw or 'q' to quit",
                first
            ));
        }
    };
    let Some(card) = hand.get(index) else {
        return ParseResult::Invalid(format!(
            "No card at position {} (hand has {} cards)",
            index,
            hand.len()
        ));
    };

    let color = match parts.get(1) {
        Some(name) => match Color::from_name(name) {
            Some(c) => Some(c),
            None => return ParseResult::Invalid(format!("Unknown color '{}'", name)),
        },
        None => None,
    };

    if card.kind.is_wild() && color.is_none() {
        return ParseResult::Invalid(format!(
            "{} needs a color, e.g. '{} red'",
            card, index
        ));
    }

    ParseResult::Move(PlayerMove::Play {
        card: card.id,
        color,
    })
}
