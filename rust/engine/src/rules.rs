use crate::cards::{Card, CardKind, Color};
use crate::errors::GameError;

/// What playing a card does to the table, before the seat advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Effect {
    /// Seats to advance in the current direction (2 for Skip, else 1)
    pub step: usize,
    /// Whether the seating direction flips
    pub reverse: bool,
    /// Amount added to the pickup stack
    pub pickup: u32,
    /// Color in effect once the card lands
    pub color: Color,
}

/// Decides whether `candidate` may be played on the current discard face.
///
/// A card is playable when any of these hold:
/// - it is a Wild or Wild +4
/// - its color equals the color in effect (`current_color`), which for a
///   wild on the table is the color its player chose
/// - it and `current_card` are both Number cards of the same rank
///
/// Action cards never match each other by variant alone.
///
/// # Examples
///
/// ```
/// use wildcard_engine::cards::{Card, CardKind, Color};
/// use wildcard_engine::rules::is_playable;
///
/// let table = Card::new(0, CardKind::Number { color: Color::Red, rank: 5 });
/// let blue_five = Card::new(1, CardKind::Number { color: Color::Blue, rank: 5 });
/// let blue_three = Card::new(2, CardKind::Number { color: Color::Blue, rank: 3 });
/// let wild = Card::new(3, CardKind::Wild);
///
/// assert!(is_playable(&blue_five, &table, Color::Red));
/// assert!(!is_playable(&blue_three, &table, Color::Red));
/// assert!(is_playable(&wild, &table, Color::Red));
/// ```
pub fn is_playable(candidate: &Card, current_card: &Card, current_color: Color) -> bool {
    if candidate.kind.is_wild() {
        return true;
    }
    if candidate.color() == Some(current_color) {
        return true;
    }
    matches!(
        (candidate.kind.rank(), current_card.kind.rank()),
        (Some(a), Some(b)) if a == b
    )
}

/// Works out the effect of playing `card`, with `chosen` being the color a
/// wild card's player picked.
///
/// # Errors
///
/// [`GameError::ColorRequired`] if `card` is wild and `chosen` is `None`.
///
/// ```
/// use wildcard_engine::cards::{Card, CardKind, Color};
/// use wildcard_engine::rules::resolve_effect;
/// use wildcard_engine::errors::GameError;
///
/// let skip = Card::new(9, CardKind::Skip { color: Color::Green });
/// assert_eq!(resolve_effect(&skip, None).unwrap().step, 2);
///
/// let wild = Card::new(10, CardKind::WildPlusFour);
/// assert!(matches!(resolve_effect(&wild, None), Err(GameError::ColorRequired { card: 10 })));
/// let e = resolve_effect(&wild, Some(Color::Blue)).unwrap();
/// assert_eq!((e.pickup, e.color), (4, Color::Blue));
/// ```
pub fn resolve_effect(card: &Card, chosen: Option<Color>) -> Result<Effect, GameError> {
    let base = |color: Color| Effect {
        step: 1,
        reverse: false,
        pickup: card.pickup_amount(),
        color,
    };
    let chosen_color = || chosen.ok_or(GameError::ColorRequired { card: card.id });

    let effect = match card.kind {
        CardKind::Number { color, .. } => base(color),
        CardKind::Skip { color } => Effect {
            step: 2,
            ..base(color)
        },
        CardKind::Reverse { color } => Effect {
            reverse: true,
            ..base(color)
        },
        CardKind::PlusTwo { color } => base(color),
        CardKind::Wild | CardKind::WildPlusFour => base(chosen_color()?),
    };
    Ok(effect)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: u32, kind: CardKind) -> Card {
        Card::new(id, kind)
    }

    #[test]
    fn color_match_is_playable_across_variants() {
        let table = card(0, CardKind::Number { color: Color::Yellow, rank: 2 });
        let skip = card(1, CardKind::Skip { color: Color::Yellow });
        let plus = card(2, CardKind::PlusTwo { color: Color::Green });
        assert!(is_playable(&skip, &table, Color::Yellow));
        assert!(!is_playable(&plus, &table, Color::Yellow));
    }

    #[test]
    fn chosen_color_governs_after_wild() {
        let table = card(0, CardKind::Wild);
        let red = card(1, CardKind::Number { color: Color::Red, rank: 4 });
        let blue = card(2, CardKind::Number { color: Color::Blue, rank: 4 });
        assert!(is_playable(&red, &table, Color::Red));
        assert!(!is_playable(&blue, &table, Color::Red));
    }

    #[test]
    fn same_action_variant_different_color_is_not_playable() {
        let table = card(0, CardKind::Skip { color: Color::Red });
        let skip = card(1, CardKind::Skip { color: Color::Blue });
        assert!(!is_playable(&skip, &table, Color::Red));
    }

    #[test]
    fn effects_per_variant() {
        let rev = resolve_effect(&card(1, CardKind::Reverse { color: Color::Red }), None).unwrap();
        assert!(rev.reverse);
        assert_eq!(rev.step, 1);

        let plus = resolve_effect(&card(2, CardKind::PlusTwo { color: Color::Red }), None).unwrap();
        assert_eq!(plus.pickup, 2);

        let num = resolve_effect(&card(3, CardKind::Number { color: Color::Green, rank: 1 }), None)
            .unwrap();
        assert_eq!(num.color, Color::Green);
        assert_eq!((num.step, num.pickup, num.reverse), (1, 0, false));

        assert!(resolve_effect(&card(4, CardKind::Wild), None).is_err());
        let wild = resolve_effect(&card(4, CardKind::Wild), Some(Color::Yellow)).unwrap();
        assert_eq!((wild.color, wild.pickup), (Color::Yellow, 0));
    }
}
