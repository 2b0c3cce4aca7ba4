//! Shared helpers for building games with a chosen layout.

#![allow(dead_code)]

use std::collections::BTreeMap;

use klondike_engine::{
    Card, CardFace, EngineConfig, FoundationSnapshot, GameId, GameSnapshot, MoveRules, Rank,
    SolitaireEngine, Suit, TableauView,
};

pub fn up(suit: Suit, rank: Rank) -> Card {
    Card::face_up(suit, rank)
}

pub fn down(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

pub fn face(suit: Suit, rank: Rank) -> CardFace {
    CardFace { suit, rank }
}

fn full_deck() -> Vec<CardFace> {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| face(suit, rank)))
        .collect()
}

/// Build a game with the given columns and stock (next to draw first).
///
/// Every card not mentioned is tucked face down under column 6 so the game
/// still holds exactly 52 cards.
pub fn game_from_layout(columns: Vec<Vec<Card>>, stock: Vec<Card>, rules: MoveRules) -> SolitaireEngine {
    assert!(columns.len() <= 7, "at most 7 columns");

    let mut used: Vec<CardFace> = columns
        .iter()
        .flatten()
        .chain(stock.iter())
        .map(CardFace::from)
        .collect();
    used.sort_by_key(|f| (f.suit, f.rank));

    let leftovers: Vec<Card> = full_deck()
        .into_iter()
        .filter(|f| used.binary_search_by_key(&(f.suit, f.rank), |u| (u.suit, u.rank)).is_err())
        .map(|f| down(f.suit, f.rank))
        .collect();

    let mut cols = columns;
    cols.resize(7, Vec::new());
    let last = std::mem::take(&mut cols[6]);
    cols[6] = leftovers.into_iter().chain(last).collect();

    let tableau = cols
        .into_iter()
        .enumerate()
        .map(|(index, cards)| TableauView { index, cards })
        .collect();

    let foundations: BTreeMap<Suit, FoundationSnapshot> = Suit::ALL
        .into_iter()
        .map(|suit| {
            let empty = FoundationSnapshot {
                top_card: None,
                complete: false,
                cards: Vec::new(),
            };
            (suit, empty)
        })
        .collect();

    let snapshot = GameSnapshot {
        game_id: GameId::new("layout"),
        tableau,
        foundations,
        stock_count: stock.len(),
        stock: stock.iter().map(CardFace::from).collect(),
        waste: Vec::new(),
        moves: Vec::new(),
        game_won: false,
        config: EngineConfig::new().with_move_rules(rules),
    };

    SolitaireEngine::from_snapshot(snapshot).expect("layout is a legal game")
}

/// Sorted (suit, rank) pairs of every card in the game.
pub fn population(game: &SolitaireEngine) -> Vec<(Suit, Rank)> {
    let mut cards: Vec<_> = game.all_cards().map(|c| (c.suit(), c.rank())).collect();
    cards.sort();
    cards
}

pub fn full_population() -> Vec<(Suit, Rank)> {
    let mut cards: Vec<_> = full_deck().into_iter().map(|f| (f.suit, f.rank)).collect();
    cards.sort();
    cards
}
