//! Foundations: one per suit, built Ace to King.

use super::pile::Pile;
use crate::cards::{Card, Suit};

/// Cards in a complete foundation.
pub const FOUNDATION_SIZE: usize = 13;

/// A single-suit pile built upward from the Ace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Foundation {
    suit: Suit,
    cards: Vec<Card>,
}

impl Foundation {
    /// Create an empty foundation for `suit`.
    #[must_use]
    pub fn new(suit: Suit) -> Self {
        Self {
            suit,
            cards: Vec::with_capacity(FOUNDATION_SIZE),
        }
    }

    #[must_use]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// All thirteen cards of the suit are here.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cards.len() == FOUNDATION_SIZE
    }

    /// Put back a card just taken from the top.
    pub(crate) fn restore_top(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Place cards without rule checks (snapshot restore).
    pub(crate) fn restore(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }
}

impl Pile for Foundation {
    fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn accepts(&self, card: &Card) -> bool {
        if card.suit() != self.suit {
            return false;
        }
        match self.cards.last() {
            None => card.value() == 1,
            Some(top) => card.value() == top.value() + 1,
        }
    }

    fn try_add(&mut self, card: Card) -> Result<(), Card> {
        if !self.accepts(&card) {
            return Err(card);
        }
        self.cards.push(card);
        Ok(())
    }

    fn remove_top(&mut self) -> Option<Card> {
        self.cards.pop()
    }
}
