//! Stock and waste: the draw-and-recycle queue.
//!
//! Neither pile has suit or rank rules, so they are not `Pile`s. The stock
//! is drawn from the front; the waste top is its last element.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// What a single `draw_to_waste` call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "count")]
pub enum DrawOutcome {
    /// Moved this many cards from stock to waste.
    Drew(usize),
    /// Stock was empty; moved this many waste cards back to the stock.
    Recycled(usize),
    /// Stock and waste were both empty.
    Nothing,
}

impl DrawOutcome {
    /// Number of cards that changed piles.
    #[must_use]
    pub fn count(self) -> usize {
        match self {
            DrawOutcome::Drew(n) | DrawOutcome::Recycled(n) => n,
            DrawOutcome::Nothing => 0,
        }
    }
}

/// The face-down stock and the face-up waste.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StockWaste {
    stock: VecDeque<Card>,
    waste: Vec<Card>,
}

impl StockWaste {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card to the back of the stock, face down.
    pub(crate) fn push_stock(&mut self, mut card: Card) {
        card.set_face_up(false);
        self.stock.push_back(card);
    }

    /// Put a card on the waste top, face up, without drawing (snapshot restore).
    pub(crate) fn push_waste(&mut self, mut card: Card) {
        card.set_face_up(true);
        self.waste.push(card);
    }

    /// Draw up to `count` cards to the waste, or recycle the waste when
    /// the stock is empty. Never both in one call. A `count` of 0 draws one.
    pub fn draw_to_waste(&mut self, count: usize) -> DrawOutcome {
        if self.stock.is_empty() && self.waste.is_empty() {
            return DrawOutcome::Nothing;
        }
        if self.stock.is_empty() {
            let recycled = self.waste.len();
            while let Some(mut card) = self.waste.pop() {
                card.set_face_up(false);
                self.stock.push_back(card);
            }
            return DrawOutcome::Recycled(recycled);
        }

        let drawn = count.max(1).min(self.stock.len());
        for mut card in self.stock.drain(..drawn) {
            card.set_face_up(true);
            self.waste.push(card);
        }
        DrawOutcome::Drew(drawn)
    }

    /// Remove the waste top (for plays from the waste).
    pub fn take_waste_top(&mut self) -> Option<Card> {
        self.waste.pop()
    }

    /// Return a card to the waste top after a rejected play.
    pub(crate) fn return_to_waste(&mut self, card: Card) {
        self.waste.push(card);
    }

    #[must_use]
    pub fn waste_top(&self) -> Option<&Card> {
        self.waste.last()
    }

    /// Stock cards, next-to-draw first.
    pub fn stock(&self) -> impl Iterator<Item = &Card> + '_ {
        self.stock.iter()
    }

    /// Waste cards, bottom to top.
    #[must_use]
    pub fn waste(&self) -> &[Card] {
        &self.waste
    }

    #[must_use]
    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    #[must_use]
    pub fn waste_len(&self) -> usize {
        self.waste.len()
    }
}
