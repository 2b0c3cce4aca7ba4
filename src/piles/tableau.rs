//! Tableau columns: descending, alternating-color builds over a face-down base.

use super::pile::Pile;
use crate::cards::Card;

/// Number of tableau columns in a Klondike layout.
pub const TABLEAU_COLUMNS: usize = 7;

/// One of the seven playing columns.
///
/// Face-down cards always sit below the face-up ones. Removing cards from
/// the top reveals the new top card automatically.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableauColumn {
    cards: Vec<Card>,
}

impl TableauColumn {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a card without rule checks (deal and snapshot restore).
    pub(crate) fn place(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Can the card at `index` (and everything above it) be picked up?
    #[must_use]
    pub fn can_lift(&self, index: usize) -> bool {
        index < self.cards.len() && self.cards[index..].iter().all(Card::is_face_up)
    }

    /// Do the cards from `index` to the top form a descending,
    /// alternating-color sequence?
    #[must_use]
    pub fn is_run(&self, index: usize) -> bool {
        index < self.cards.len()
            && self.cards[index..]
                .windows(2)
                .all(|pair| stacks_on(&pair[1], &pair[0]))
    }

    /// The face-up cards at the top of the column.
    #[must_use]
    pub fn visible_cards(&self) -> &[Card] {
        let hidden = self.cards.iter().take_while(|c| !c.is_face_up()).count();
        &self.cards[hidden..]
    }

    /// Turn a face-down top card face up. Returns whether a card was flipped.
    pub fn reveal_top_if_hidden(&mut self) -> bool {
        match self.cards.last_mut() {
            Some(top) if !top.is_face_up() => {
                top.flip();
                true
            }
            _ => false,
        }
    }

    /// Remove the run starting at `index`, revealing the new top.
    ///
    /// Returns `None` (and changes nothing) when the run cannot be lifted.
    pub fn lift(&mut self, index: usize) -> Option<Vec<Card>> {
        if !self.can_lift(index) {
            return None;
        }
        let run = self.cards.split_off(index);
        self.reveal_top_if_hidden();
        Some(run)
    }

    /// Append a run whose base this column accepts. The run is returned
    /// untouched on rejection.
    pub fn try_add_run(&mut self, run: Vec<Card>) -> Result<(), Vec<Card>> {
        match run.first() {
            Some(base) if self.accepts(base) => {
                self.cards.extend(run);
                Ok(())
            }
            _ => Err(run),
        }
    }
}

/// `card` may be placed directly on `below`.
fn stacks_on(card: &Card, below: &Card) -> bool {
    card.color() != below.color() && card.value() + 1 == below.value()
}

impl Pile for TableauColumn {
    fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn accepts(&self, card: &Card) -> bool {
        match self.cards.last() {
            None => card.value() == 13,
            Some(top) => stacks_on(card, top),
        }
    }

    fn try_add(&mut self, card: Card) -> Result<(), Card> {
        if !self.accepts(&card) {
            return Err(card);
        }
        self.cards.push(card);
        Ok(())
    }

    /// Remove the top card and reveal whatever is under it.
    fn remove_top(&mut self) -> Option<Card> {
        let card = self.cards.pop()?;
        self.reveal_top_if_hidden();
        Some(card)
    }
}
