//! Save/load tests against real files.

mod common;

use common::{full_population, population};
use klondike_engine::{
    Deck, GameBuilder, GameSnapshot, MoveRules, PileRef, SnapshotError, SolitaireEngine, Suit,
};
use tempfile::tempdir;

fn played_game() -> SolitaireEngine {
    let mut game = GameBuilder::new()
        .game_id("saved01")
        .move_rules(MoveRules::Extended)
        .deck(Deck::new())
        .build();
    assert!(game.move_card(PileRef::Tableau(0), PileRef::Foundation(Suit::Hearts), 0));
    game.draw_from_stock();
    game.draw_from_stock();
    game
}

/// Test that a saved game loads back with every pile intact.
#[test]
fn test_save_then_load_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("game.json");

    let game = played_game();
    game.save(&path).unwrap();

    let mut loaded = SolitaireEngine::new();
    loaded.load(&path).unwrap();

    assert_eq!(loaded.snapshot(), game.snapshot());
    assert_eq!(loaded.config().move_rules, MoveRules::Extended);
    assert_eq!(population(&loaded), full_population());

    // The loaded game keeps playing from the same position
    let mut original = game;
    assert_eq!(original.draw_from_stock(), loaded.draw_from_stock());
    assert_eq!(original.waste_state(), loaded.waste_state());
}

/// Test the saved document carries the expected top-level fields.
#[test]
fn test_saved_document_shape() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("game.json");
    played_game().save(&path).unwrap();

    let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["game_id"], "saved01");
    assert_eq!(json["stock_count"], 18);
    assert_eq!(json["waste"].as_array().unwrap().len(), 6);
    assert_eq!(json["moves"][0], "Moved AH to hearts foundation");
    assert_eq!(json["game_won"], false);
    assert_eq!(json["foundations"]["hearts"]["top_card"]["rank"], "A");
    assert_eq!(json["tableau"][1]["cards"][0]["face_up"], false);
}

/// Test that a missing file is reported and the game is untouched.
#[test]
fn test_load_missing_file() {
    let dir = tempdir().unwrap();
    let mut game = played_game();
    let before = game.snapshot();

    let err = game.load(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, SnapshotError::Io(_)));
    assert_eq!(game.snapshot(), before);
}

/// Test that corrupt JSON is reported and the game is untouched.
#[test]
fn test_load_corrupt_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{ not json").unwrap();

    let mut game = played_game();
    let before = game.snapshot();

    let err = game.load(&path).unwrap_err();
    assert!(matches!(err, SnapshotError::Json(_)));
    assert_eq!(game.snapshot(), before);
}

/// Test that a well-formed but illegal game is rejected without changes.
#[test]
fn test_load_invalid_game() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("short.json");

    let mut snapshot = played_game().snapshot();
    snapshot.stock.truncate(5);
    snapshot.stock_count = 5;
    snapshot.write(&path).unwrap();

    let mut game = SolitaireEngine::new();
    let before = game.snapshot();

    let err = game.load(&path).unwrap_err();
    assert!(matches!(err, SnapshotError::Invalid(_)));
    assert_eq!(game.snapshot(), before);
}

/// Test the JSON helpers directly.
#[test]
fn test_snapshot_json_helpers() {
    let snapshot = played_game().snapshot();
    let json = snapshot.to_json().unwrap();
    assert_eq!(GameSnapshot::from_json(&json).unwrap(), snapshot);
}
