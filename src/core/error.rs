//! Error types for the fallible edges of the engine.
//!
//! Rule violations are not errors: an illegal move returns `false` and an
//! empty stock recycles. These types cover parsing pile references at the
//! boundary and reading snapshots from disk.

use thiserror::Error;

/// A pile reference string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PileRefError {
    /// The prefix was not `tableau`, `foundation` or `waste`.
    #[error("unknown pile kind in {0:?}")]
    UnknownKind(String),

    /// The tableau column was missing, not a number, or out of range.
    #[error("invalid tableau column in {0:?}")]
    InvalidColumn(String),

    /// The foundation suit was not one of the four suit names.
    #[error("unknown suit {0:?}")]
    UnknownSuit(String),
}

/// A snapshot could not be saved or restored.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed but does not describe a legal game.
    #[error("snapshot describes an invalid game: {0}")]
    Invalid(String),
}
