//! Registry of live games.
//!
//! The registry maps game ids to engines and keeps a bounded list of the
//! most recently created ids. It knows nothing about game rules; callers
//! get the engine and drive it directly.
//!
//! The registry has no internal locking. An embedding server that shares it
//! between requests wraps it (or each engine) in a `Mutex`.

use std::collections::{BTreeMap, VecDeque};

use regex::Regex;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::config::RegistryConfig;
use crate::core::id::GameId;
use crate::core::rng::GameRng;
use crate::rules::SolitaireEngine;

/// Listing entry for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub moves_count: usize,
    pub game_won: bool,
    pub foundations_complete: usize,
}

/// Live games keyed by id.
#[derive(Debug, Default)]
pub struct GameRegistry {
    config: RegistryConfig,
    games: FxHashMap<GameId, SolitaireEngine>,
    /// Oldest first, at most `config.recent_capacity` ids.
    recent: VecDeque<GameId>,
    /// Source of per-game seeds when the engine config is seeded.
    seeds: Option<GameRng>,
}

impl GameRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    #[must_use]
    pub fn with_config(config: RegistryConfig) -> Self {
        let seeds = config.engine.seed.map(GameRng::new);
        Self {
            config,
            games: FxHashMap::default(),
            recent: VecDeque::new(),
            seeds,
        }
    }

    /// Deal a new game and return its id.
    pub fn create_game(&mut self) -> GameId {
        let mut id = GameId::generate();
        while self.games.contains_key(&id) {
            id = GameId::generate();
        }

        let mut engine_config = self.config.engine.clone();
        if let Some(seeds) = self.seeds.as_mut() {
            engine_config.seed = Some(seeds.fork().seed());
        }

        let engine = SolitaireEngine::with_config(id.clone(), engine_config);
        self.insert(engine);
        id
    }

    /// Register an existing engine (for example one loaded from a
    /// snapshot), replacing any game with the same id.
    pub fn insert(&mut self, engine: SolitaireEngine) {
        let id = engine.game_id().clone();
        info!(game = %id, "registered game");
        self.recent.retain(|r| r != &id);
        self.recent.push_back(id.clone());
        while self.recent.len() > self.config.recent_capacity {
            if let Some(dropped) = self.recent.pop_front() {
                debug!(game = %dropped, "dropped from recent list");
            }
        }
        self.games.insert(id, engine);
    }

    #[must_use]
    pub fn get(&self, id: &GameId) -> Option<&SolitaireEngine> {
        self.games.get(id)
    }

    pub fn get_mut(&mut self, id: &GameId) -> Option<&mut SolitaireEngine> {
        self.games.get_mut(id)
    }

    #[must_use]
    pub fn contains(&self, id: &GameId) -> bool {
        self.games.contains_key(id)
    }

    /// Remove a game. Returns whether it existed.
    pub fn delete_game(&mut self, id: &GameId) -> bool {
        let removed = self.games.remove(id).is_some();
        if removed {
            self.recent.retain(|r| r != id);
            info!(game = %id, "deleted game");
        }
        removed
    }

    /// Summaries of every live game, ordered by id.
    #[must_use]
    pub fn list_games(&self) -> BTreeMap<GameId, GameSummary> {
        self.games
            .iter()
            .map(|(id, game)| {
                let summary = GameSummary {
                    moves_count: game.moves().len(),
                    game_won: game.is_won(),
                    foundations_complete: game.foundations_complete(),
                };
                (id.clone(), summary)
            })
            .collect()
    }

    /// Ids matching a regular expression, sorted. An invalid pattern
    /// matches nothing.
    #[must_use]
    pub fn search_games(&self, pattern: &str) -> Vec<GameId> {
        let Ok(regex) = Regex::new(pattern) else {
            debug!(pattern, "invalid search pattern");
            return Vec::new();
        };
        let mut ids: Vec<_> = self
            .games
            .keys()
            .filter(|id| regex.is_match(id.as_str()))
            .cloned()
            .collect();
        ids.sort();
        ids
    }

    /// Up to `count` most recently created ids, oldest first.
    #[must_use]
    pub fn recent_games(&self, count: usize) -> Vec<GameId> {
        let skip = self.recent.len().saturating_sub(count);
        self.recent.iter().skip(skip).cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::EngineConfig;
    use crate::rules::GameBuilder;

    #[test]
    fn test_create_and_get() {
        let mut registry = GameRegistry::new();
        let id = registry.create_game();

        assert!(registry.contains(&id));
        let game = registry.get(&id).unwrap();
        assert_eq!(game.game_id(), &id);
        assert_eq!(game.stock_count(), 24);
        assert!(registry.get(&GameId::new("missing")).is_none());
    }

    #[test]
    fn test_delete() {
        let mut registry = GameRegistry::new();
        let id = registry.create_game();

        assert!(registry.delete_game(&id));
        assert!(!registry.delete_game(&id));
        assert!(registry.is_empty());
        assert!(registry.recent_games(10).is_empty());
    }

    #[test]
    fn test_recent_is_bounded() {
        let mut registry = GameRegistry::new();
        let ids: Vec<_> = (0..12).map(|_| registry.create_game()).collect();

        assert_eq!(registry.len(), 12);
        assert_eq!(registry.recent_games(100), ids[2..].to_vec());
        assert_eq!(registry.recent_games(5), ids[7..].to_vec());

        // Dropping off the recent list does not unregister the game
        assert!(registry.contains(&ids[0]));
    }

    #[test]
    fn test_custom_capacity() {
        let mut registry = GameRegistry::with_config(RegistryConfig::new().with_recent_capacity(2));
        let ids: Vec<_> = (0..3).map(|_| registry.create_game()).collect();
        assert_eq!(registry.recent_games(10), ids[1..].to_vec());
    }

    #[test]
    fn test_list_games() {
        let mut registry = GameRegistry::new();
        let id = registry.create_game();
        registry.get_mut(&id).unwrap().draw_from_stock();

        let listing = registry.list_games();
        assert_eq!(
            listing[&id],
            GameSummary {
                moves_count: 0,
                game_won: false,
                foundations_complete: 0,
            }
        );
    }

    #[test]
    fn test_search() {
        let mut registry = GameRegistry::new();
        registry.insert(GameBuilder::new().game_id("abc00001").build());
        registry.insert(GameBuilder::new().game_id("abc00002").build());
        registry.insert(GameBuilder::new().game_id("fff00003").build());

        assert_eq!(
            registry.search_games("^abc"),
            vec![GameId::new("abc00001"), GameId::new("abc00002")]
        );
        assert!(registry.search_games("zzz").is_empty());
        assert!(registry.search_games("(").is_empty());
    }

    #[test]
    fn test_insert_replaces_and_refreshes_recent() {
        let mut registry = GameRegistry::new();
        registry.insert(GameBuilder::new().game_id("a").build());
        registry.insert(GameBuilder::new().game_id("b").build());
        registry.insert(GameBuilder::new().game_id("a").build());

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.recent_games(10), vec![GameId::new("b"), GameId::new("a")]);
    }

    #[test]
    fn test_seeded_registry_is_reproducible() {
        let config = RegistryConfig::new().with_engine(EngineConfig::new().with_seed(11));
        let mut first = GameRegistry::with_config(config.clone());
        let mut second = GameRegistry::with_config(config);

        let a1 = first.create_game();
        let a2 = first.create_game();
        let b1 = second.create_game();

        let deal = |r: &GameRegistry, id: &GameId| r.get(id).unwrap().tableau_state();
        assert_eq!(deal(&first, &a1), deal(&second, &b1));
        assert_ne!(deal(&first, &a1), deal(&first, &a2));
    }
}
