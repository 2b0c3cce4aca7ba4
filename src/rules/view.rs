//! Read-only projections of a game, shaped for JSON responses.
//!
//! Stock cards are never exposed here, only their count.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit};

/// A card's identity without orientation (waste cards, foundation tops).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardFace {
    pub suit: Suit,
    pub rank: Rank,
}

impl From<&Card> for CardFace {
    fn from(card: &Card) -> Self {
        Self {
            suit: card.suit(),
            rank: card.rank(),
        }
    }
}

/// One tableau column, bottom to top, including face-down cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableauView {
    pub index: usize,
    pub cards: Vec<Card>,
}

/// One foundation: its top card and whether it is complete.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundationView {
    pub top_card: Option<CardFace>,
    pub complete: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_face_drops_orientation() {
        let face = CardFace::from(&Card::new(Suit::Clubs, Rank::Jack));
        assert_eq!(
            serde_json::to_string(&face).unwrap(),
            r#"{"suit":"clubs","rank":"J"}"#
        );
    }

    #[test]
    fn test_empty_foundation_view_serializes_null() {
        let view = FoundationView {
            top_card: None,
            complete: false,
        };
        assert_eq!(
            serde_json::to_string(&view).unwrap(),
            r#"{"top_card":null,"complete":false}"#
        );
    }
}
