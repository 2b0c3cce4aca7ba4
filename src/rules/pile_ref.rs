//! Structured pile references.
//!
//! The engine only accepts `PileRef` values. The string form
//! (`tableau_3`, `foundation_hearts`, `waste`) exists for request layers and
//! is parsed here, before anything reaches the engine.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cards::Suit;
use crate::core::error::PileRefError;
use crate::piles::TABLEAU_COLUMNS;

/// A pile a move reads from or writes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PileRef {
    /// Tableau column, 0-based. Out-of-range indices are rejected by moves.
    Tableau(usize),
    Foundation(Suit),
    Waste,
}

impl std::fmt::Display for PileRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PileRef::Tableau(i) => write!(f, "tableau_{}", i),
            PileRef::Foundation(suit) => write!(f, "foundation_{}", suit),
            PileRef::Waste => f.write_str("waste"),
        }
    }
}

impl FromStr for PileRef {
    type Err = PileRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "waste" {
            return Ok(PileRef::Waste);
        }

        let (kind, arg) = s
            .split_once('_')
            .ok_or_else(|| PileRefError::UnknownKind(s.to_string()))?;

        match kind {
            "tableau" => arg
                .parse::<usize>()
                .ok()
                .filter(|&i| i < TABLEAU_COLUMNS)
                .map(PileRef::Tableau)
                .ok_or_else(|| PileRefError::InvalidColumn(s.to_string())),
            "foundation" => Suit::from_name(arg)
                .map(PileRef::Foundation)
                .ok_or_else(|| PileRefError::UnknownSuit(arg.to_string())),
            _ => Err(PileRefError::UnknownKind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!("tableau_0".parse::<PileRef>(), Ok(PileRef::Tableau(0)));
        assert_eq!("tableau_6".parse::<PileRef>(), Ok(PileRef::Tableau(6)));
        assert_eq!("foundation_hearts".parse::<PileRef>(), Ok(PileRef::Foundation(Suit::Hearts)));
        assert_eq!("foundation_spades".parse::<PileRef>(), Ok(PileRef::Foundation(Suit::Spades)));
        assert_eq!("waste".parse::<PileRef>(), Ok(PileRef::Waste));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(
            "tableau_7".parse::<PileRef>(),
            Err(PileRefError::InvalidColumn("tableau_7".into()))
        );
        assert_eq!(
            "tableau_x".parse::<PileRef>(),
            Err(PileRefError::InvalidColumn("tableau_x".into()))
        );
        assert_eq!(
            "foundation_stars".parse::<PileRef>(),
            Err(PileRefError::UnknownSuit("stars".into()))
        );
        assert_eq!(
            "stock".parse::<PileRef>(),
            Err(PileRefError::UnknownKind("stock".into()))
        );
        assert_eq!(
            "deck_1".parse::<PileRef>(),
            Err(PileRefError::UnknownKind("deck_1".into()))
        );
    }

    #[test]
    fn test_display_matches_parse() {
        let refs = [
            PileRef::Tableau(3),
            PileRef::Foundation(Suit::Diamonds),
            PileRef::Waste,
        ];
        for r in refs {
            assert_eq!(r.to_string().parse::<PileRef>(), Ok(r));
        }
        assert_eq!(PileRef::Foundation(Suit::Clubs).to_string(), "foundation_clubs");
    }
}
