use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{all_colors, Card, CardId, CardKind};

/// Cards in one freshly generated supply.
///
/// Rank 0 gets one copy per color while ranks 1-9 get two, so zeros are
/// half as common as any other rank.
pub const SUPPLY_SIZE: usize = 108;

/// The draw pile. The back of `cards` is the next card drawn.
///
/// The supply never runs dry: drawing from an empty pile generates a whole
/// new supply with fresh ids and shuffles it. Played cards are not collected
/// into a discard pile, so there is nothing to reshuffle back in.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    next_id: CardId,
    rng: ChaCha20Rng,
}

impl Deck {
    /// Creates an empty pile; nothing is generated until the first refill.
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            cards: Vec::with_capacity(SUPPLY_SIZE),
            next_id: 0,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Builds one canonical supply in generation order, issuing fresh ids.
    pub fn generate(&mut self) -> Vec<Card> {
        let mut v = Vec::with_capacity(SUPPLY_SIZE);
        for rank in 0..=9u8 {
            let copies = if rank == 0 { 1 } else { 2 };
            for _ in 0..copies {
                for color in all_colors() {
                    v.push(self.issue(CardKind::Number { color, rank }));
                }
            }
        }
        for color in all_colors() {
            for _ in 0..2 {
                v.push(self.issue(CardKind::PlusTwo { color }));
            }
        }
        for _ in 0..4 {
            v.push(self.issue(CardKind::WildPlusFour));
            v.push(self.issue(CardKind::Wild));
        }
        for color in all_colors() {
            for _ in 0..2 {
                v.push(self.issue(CardKind::Reverse { color }));
            }
        }
        for color in all_colors() {
            for _ in 0..2 {
                v.push(self.issue(CardKind::Skip { color }));
            }
        }
        v
    }

    /// Adds a freshly generated supply to the pile and shuffles it.
    pub fn refill(&mut self) {
        let fresh = self.generate();
        self.cards.extend(fresh);
        self.cards.shuffle(&mut self.rng);
        tracing::debug!(
            pile = self.cards.len(),
            cards_generated = self.next_id,
            "deck refilled"
        );
    }

    /// Pops the next card, refilling first if the pile is empty. Never fails.
    pub fn draw(&mut self) -> Card {
        loop {
            if let Some(card) = self.cards.pop() {
                return card;
            }
            self.refill();
        }
    }

    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).map(|_| self.draw()).collect()
    }

    /// Removes the Number card nearest the top of the pile. Non-number cards
    /// above it stay where they are.
    pub fn take_first_number(&mut self) -> Card {
        loop {
            if let Some(pos) = self.cards.iter().rposition(|c| c.kind.is_number()) {
                return self.cards.remove(pos);
            }
            self.refill();
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of ids issued so far, across every refill.
    pub fn cards_generated(&self) -> u32 {
        self.next_id
    }

    fn issue(&mut self, kind: CardKind) -> Card {
        let card = Card::new(self.next_id, kind);
        self.next_id += 1;
        card
    }
}
