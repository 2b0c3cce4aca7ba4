//! Saving and restoring games.
//!
//! - `GameSnapshot`: JSON document with every pile's contents
//! - `SolitaireEngine::save` / `SolitaireEngine::load`: File round trip

pub mod snapshot;

pub use snapshot::{FoundationSnapshot, GameSnapshot};
