//! Shared behavior of rule-checked piles.
//!
//! Foundations and tableau columns both hold an ordered run of cards
//! (top = last element) and differ only in what they accept. Stock and
//! waste are plain queues and do not implement `Pile`.

use crate::cards::Card;

/// A pile of cards with a kind-specific acceptance rule.
///
/// ## Implementation Notes
///
/// - `accepts`: Pure check against the current top card
/// - `try_add`: Must append only when `accepts` holds, and hand the card
///   back otherwise so it is never lost
pub trait Pile {
    /// Cards from bottom to top.
    fn cards(&self) -> &[Card];

    /// Would `card` be a legal addition right now?
    fn accepts(&self, card: &Card) -> bool;

    /// Append `card` if legal. A rejected card is returned to the caller.
    fn try_add(&mut self, card: Card) -> Result<(), Card>;

    /// Remove and return the top card.
    fn remove_top(&mut self) -> Option<Card>;

    // === Convenience Methods ===

    fn top(&self) -> Option<&Card> {
        self.cards().last()
    }

    fn len(&self) -> usize {
        self.cards().len()
    }

    fn is_empty(&self) -> bool {
        self.cards().is_empty()
    }
}
