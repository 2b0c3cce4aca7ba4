//! Cards and the deck.
//!
//! ## Key Types
//!
//! - `Card`: Suit, rank and face orientation
//! - `Suit`, `Rank`, `Color`: Card identity and derived color
//! - `Deck`: All 52 cards, shuffled and drawn from the front

pub mod card;
pub mod deck;

pub use card::{Card, Color, Rank, Suit};
pub use deck::{Deck, DECK_SIZE};
