//! Core engine types: ids, RNG, configuration, errors.

pub mod config;
pub mod error;
pub mod id;
pub mod rng;

pub use config::{EngineConfig, MoveRules, RegistryConfig, DEFAULT_DRAW_COUNT, DEFAULT_RECENT_CAPACITY};
pub use error::{PileRefError, SnapshotError};
pub use id::GameId;
pub use rng::GameRng;
