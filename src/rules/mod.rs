//! The solitaire rules engine.
//!
//! - `SolitaireEngine`: Deal, draw, move, win detection
//! - `GameBuilder`: Seeded or stacked-deck construction
//! - `PileRef`: Structured source/destination of a move
//! - Views: Serializable read-only projections of a game

pub mod engine;
pub mod pile_ref;
pub mod view;

pub use engine::{GameBuilder, SolitaireEngine};
pub use pile_ref::PileRef;
pub use view::{CardFace, FoundationView, TableauView};
