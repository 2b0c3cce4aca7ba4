//! JSON snapshots of a game.
//!
//! A snapshot carries the same projections the request layer sees (tableau,
//! foundation tops, stock count, waste, move log, win flag) plus the full
//! contents of the stock and foundations, so loading restores every pile
//! and every card's orientation.
//!
//! Loading is all-or-nothing: the document is validated into a fresh
//! engine first, and the current game is only replaced on success.

use std::collections::BTreeMap;
use std::path::Path;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::cards::{Card, Suit, DECK_SIZE};
use crate::core::config::EngineConfig;
use crate::core::error::SnapshotError;
use crate::core::id::GameId;
use crate::piles::{
    Foundation, Pile, StockWaste, TableauColumn, FOUNDATION_SIZE, TABLEAU_COLUMNS,
};
use crate::rules::{CardFace, SolitaireEngine, TableauView};

/// A foundation's projection plus its full contents, Ace first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundationSnapshot {
    pub top_card: Option<CardFace>,
    pub complete: bool,
    #[serde(default)]
    pub cards: Vec<CardFace>,
}

/// Serializable state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub game_id: GameId,
    pub tableau: Vec<TableauView>,
    pub foundations: BTreeMap<Suit, FoundationSnapshot>,
    pub stock_count: usize,
    /// Stock cards, next to draw first.
    #[serde(default)]
    pub stock: Vec<CardFace>,
    /// Waste cards, most recently drawn first.
    pub waste: Vec<CardFace>,
    pub moves: Vec<String>,
    pub game_won: bool,
    #[serde(default)]
    pub config: EngineConfig,
}

impl GameSnapshot {
    /// Capture the full state of `engine`.
    #[must_use]
    pub fn capture(engine: &SolitaireEngine) -> Self {
        let foundations = engine
            .foundations()
            .iter()
            .map(|f| {
                let snapshot = FoundationSnapshot {
                    top_card: f.top().map(CardFace::from),
                    complete: f.is_complete(),
                    cards: f.cards().iter().map(CardFace::from).collect(),
                };
                (f.suit(), snapshot)
            })
            .collect();

        Self {
            game_id: engine.game_id().clone(),
            tableau: engine.tableau_state(),
            foundations,
            stock_count: engine.stock_count(),
            stock: engine.stock_waste().stock().map(CardFace::from).collect(),
            waste: engine.waste_state(),
            moves: engine.moves().to_vec(),
            game_won: engine.is_won(),
            config: engine.config().clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn read(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Validate and rebuild the game this snapshot describes.
    pub fn into_engine(self) -> Result<SolitaireEngine, SnapshotError> {
        if self.tableau.len() != TABLEAU_COLUMNS {
            return Err(invalid(format!(
                "expected {} tableau columns, found {}",
                TABLEAU_COLUMNS,
                self.tableau.len()
            )));
        }
        if self.config.draw_count == 0 {
            return Err(invalid("draw_count must be at least 1".to_string()));
        }
        if self.stock_count != self.stock.len() {
            return Err(invalid(format!(
                "stock_count is {} but {} stock cards are listed",
                self.stock_count,
                self.stock.len()
            )));
        }

        let mut seen = FxHashSet::default();
        let mut note = |face: &CardFace| -> Result<(), SnapshotError> {
            if seen.insert(*face) {
                Ok(())
            } else {
                Err(invalid(format!("duplicate card {}{}", face.rank.symbol(), face.suit.initial())))
            }
        };

        let mut tableau: [TableauColumn; TABLEAU_COLUMNS] = Default::default();
        for (position, view) in self.tableau.iter().enumerate() {
            if view.index != position {
                return Err(invalid(format!("tableau column {} listed at position {}", view.index, position)));
            }
            let face_up_from = view.cards.iter().position(Card::is_face_up).unwrap_or(view.cards.len());
            if view.cards[face_up_from..].iter().any(|c| !c.is_face_up()) {
                return Err(invalid(format!("tableau column {} has a face-down card above a face-up one", position)));
            }
            for card in &view.cards {
                note(&CardFace::from(card))?;
                tableau[position].place(*card);
            }
        }

        let mut foundations = Suit::ALL.map(Foundation::new);
        for (suit, snapshot) in &self.foundations {
            for (i, face) in snapshot.cards.iter().enumerate() {
                if face.suit != *suit || usize::from(face.rank.value()) != i + 1 {
                    return Err(invalid(format!("{} foundation is out of sequence at position {}", suit, i)));
                }
                note(face)?;
            }
            let top = snapshot.cards.last().copied();
            let complete = snapshot.cards.len() == FOUNDATION_SIZE;
            if snapshot.top_card != top || snapshot.complete != complete {
                return Err(invalid(format!("{} foundation summary disagrees with its cards", suit)));
            }
            foundations[*suit as usize].restore(
                snapshot.cards.iter().map(|f| Card::face_up(f.suit, f.rank)).collect(),
            );
        }

        let mut stock_waste = StockWaste::new();
        for face in &self.stock {
            note(face)?;
            stock_waste.push_stock(Card::new(face.suit, face.rank));
        }
        for face in self.waste.iter().rev() {
            note(face)?;
            stock_waste.push_waste(Card::new(face.suit, face.rank));
        }

        if seen.len() != DECK_SIZE {
            return Err(invalid(format!("expected {} cards, found {}", DECK_SIZE, seen.len())));
        }
        if self.game_won != foundations.iter().all(Foundation::is_complete) {
            return Err(invalid(format!(
                "game_won is {} but the foundations say otherwise",
                self.game_won
            )));
        }

        Ok(SolitaireEngine::from_parts(
            self.game_id,
            self.config,
            foundations,
            tableau,
            stock_waste,
            self.moves,
        ))
    }
}

fn invalid(reason: String) -> SnapshotError {
    SnapshotError::Invalid(reason)
}

impl SolitaireEngine {
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self)
    }

    /// Rebuild a game from a snapshot.
    pub fn from_snapshot(snapshot: GameSnapshot) -> Result<Self, SnapshotError> {
        snapshot.into_engine()
    }

    /// Write this game to `path` as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let path = path.as_ref();
        self.snapshot().write(path)?;
        info!(game = %self.game_id(), path = %path.display(), "saved game");
        Ok(())
    }

    /// Replace this game with the one saved at `path`.
    ///
    /// On any error the current game is left exactly as it was.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let path = path.as_ref();
        match GameSnapshot::read(path).and_then(GameSnapshot::into_engine) {
            Ok(engine) => {
                info!(game = %engine.game_id(), path = %path.display(), "loaded game");
                *self = engine;
                Ok(())
            }
            Err(err) => {
                warn!(game = %self.game_id(), path = %path.display(), error = %err, "failed to load game");
                Err(err)
            }
        }
    }
}
