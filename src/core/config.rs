//! Engine and registry configuration.
//!
//! - `EngineConfig`: How a single game is dealt and which moves it allows
//! - `RegistryConfig`: How the session registry creates and tracks games
//!
//! Both use builder methods so callers only name what they change.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Number of cards moved from stock to waste per draw in standard play.
pub const DEFAULT_DRAW_COUNT: usize = 3;

/// Length of the registry's most-recently-created list.
pub const DEFAULT_RECENT_CAPACITY: usize = 10;

/// Which move shapes the engine accepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveRules {
    /// Only tableau top card to foundation.
    #[default]
    Classic,
    /// Every Klondike direction: waste and foundation sources, and
    /// tableau-to-tableau runs.
    Extended,
}

/// Configuration for a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Shuffle seed. `None` draws a seed from the operating system.
    pub seed: Option<u64>,

    /// Cards moved from stock to waste per draw (1 or 3 in practice).
    pub draw_count: usize,

    /// Accepted move shapes.
    pub move_rules: MoveRules,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            draw_count: DEFAULT_DRAW_COUNT,
            move_rules: MoveRules::Classic,
        }
    }
}

impl EngineConfig {
    /// Create the default configuration (draw three, classic moves).
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the draw count. Values below 1 are clamped to 1.
    #[must_use]
    pub fn with_draw_count(mut self, count: usize) -> Self {
        self.draw_count = count.max(1);
        self
    }

    /// Set the accepted move shapes.
    #[must_use]
    pub fn with_move_rules(mut self, rules: MoveRules) -> Self {
        self.move_rules = rules;
        self
    }

    /// Build the RNG this configuration deals with.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}

/// Configuration for the session registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// How many game ids the recency list keeps.
    pub recent_capacity: usize,

    /// Base configuration for every game the registry creates.
    ///
    /// When `engine.seed` is set, each game gets its own forked seed so
    /// a registry run is reproducible without dealing identical games.
    pub engine: EngineConfig,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            recent_capacity: DEFAULT_RECENT_CAPACITY,
            engine: EngineConfig::default(),
        }
    }
}

impl RegistryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the recency list capacity.
    #[must_use]
    pub fn with_recent_capacity(mut self, capacity: usize) -> Self {
        self.recent_capacity = capacity;
        self
    }

    /// Set the per-game engine configuration.
    #[must_use]
    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }
}
