//! Multi-game session bookkeeping.
//!
//! - `GameRegistry`: Create, look up, list, search and delete games
//! - `GameSummary`: Listing entry per game

pub mod registry;

pub use registry::{GameRegistry, GameSummary};
