//! # klondike-engine
//!
//! A Klondike solitaire rules engine.
//!
//! ## Design Principles
//!
//! 1. **Cards Are Values**: `Card` is a small `Copy` value. The engine keeps
//!    every card in exactly one pile: a move pops it from the source and
//!    pushes it onto the destination, and a rejected card is handed back.
//!
//! 2. **Illegal Is Normal**: A rejected move returns `false` and changes
//!    nothing. Nothing reachable from a game state panics.
//!
//! 3. **Structured Boundaries**: The engine takes `PileRef` values, not
//!    strings. Parsing belongs to whoever receives the request.
//!
//! ## Modules
//!
//! - `core`: Game ids, RNG, configuration, errors
//! - `cards`: Cards and the deck
//! - `piles`: Foundations, tableau columns, stock and waste
//! - `rules`: The engine, pile references and state projections
//! - `persistence`: JSON snapshots with full round trip
//! - `session`: Registry of concurrent games
//!
//! ```
//! use klondike_engine::{Deck, GameBuilder, PileRef, Suit};
//!
//! // An unshuffled deck deals the Ace of Hearts alone into column 0
//! let mut game = GameBuilder::new().deck(Deck::new()).build();
//!
//! assert!(game.move_card(PileRef::Tableau(0), PileRef::Foundation(Suit::Hearts), 0));
//! assert_eq!(game.moves(), ["Moved AH to hearts foundation"]);
//! assert!(!game.is_won());
//! ```

pub mod cards;
pub mod core;
pub mod persistence;
pub mod piles;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    EngineConfig, GameId, GameRng, MoveRules, PileRefError, RegistryConfig, SnapshotError,
};

pub use crate::cards::{Card, Color, Deck, Rank, Suit};

pub use crate::piles::{DrawOutcome, Foundation, Pile, StockWaste, TableauColumn};

pub use crate::rules::{
    CardFace, FoundationView, GameBuilder, PileRef, SolitaireEngine, TableauView,
};

pub use crate::persistence::{FoundationSnapshot, GameSnapshot};

pub use crate::session::{GameRegistry, GameSummary};
