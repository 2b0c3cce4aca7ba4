//! The Klondike rules engine.
//!
//! `SolitaireEngine` owns one dealt layout (7 tableau columns, 4 foundations,
//! stock and waste) and is the only thing that mutates it:
//!
//! - `draw_from_stock`: Deal to the waste, or recycle it
//! - `move_card`: Validate and apply a move between piles
//! - `is_won`: All four foundations complete (sticky)
//!
//! Illegal moves are ordinary outcomes: `move_card` returns `false` and
//! leaves the game untouched.

use std::collections::BTreeMap;

use tracing::{debug, info};

use super::pile_ref::PileRef;
use super::view::{CardFace, FoundationView, TableauView};
use crate::cards::{Card, Deck, Suit};
use crate::core::config::{EngineConfig, MoveRules};
use crate::core::id::GameId;
use crate::piles::{DrawOutcome, Foundation, Pile, StockWaste, TableauColumn, TABLEAU_COLUMNS};

/// Why a move was refused. Only surfaces in logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MoveRejection {
    /// The game is already won.
    Finished,
    /// The source/destination pair is not a move these rules allow.
    Unsupported,
    NoSuchColumn(usize),
    SamePile,
    EmptySource,
    /// The card to move is face down.
    Hidden,
    /// Some card from the chosen index to the top is face down.
    NotLiftable,
    /// The cards above the chosen index are not a descending, alternating run.
    NotARun,
    /// The destination does not accept the card.
    Illegal,
}

/// Builder for a dealt game.
///
/// ```
/// use klondike_engine::rules::GameBuilder;
///
/// let game = GameBuilder::new().seed(42).draw_count(1).build();
/// assert_eq!(game.stock_count(), 24);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    id: Option<GameId>,
    config: EngineConfig,
    deck: Option<Deck>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn game_id(mut self, id: impl Into<GameId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config = self.config.with_seed(seed);
        self
    }

    pub fn draw_count(mut self, count: usize) -> Self {
        self.config = self.config.with_draw_count(count);
        self
    }

    pub fn move_rules(mut self, rules: MoveRules) -> Self {
        self.config = self.config.with_move_rules(rules);
        self
    }

    /// Deal from this deck exactly as ordered instead of shuffling a fresh one.
    pub fn deck(mut self, deck: Deck) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Shuffle (unless a deck was supplied) and deal.
    pub fn build(self) -> SolitaireEngine {
        let deck = match self.deck {
            Some(deck) => deck,
            None => {
                let mut deck = Deck::new();
                deck.shuffle(&mut self.config.rng());
                deck
            }
        };
        let id = self.id.unwrap_or_else(GameId::generate);
        // `draw_count` is a public field; a game always draws at least one card
        let config = EngineConfig {
            draw_count: self.config.draw_count.max(1),
            ..self.config
        };

        let mut engine = SolitaireEngine::empty(id, config);
        engine.deal(deck);
        info!(game = %engine.id, "dealt new game");
        engine
    }
}

/// One game of Klondike.
#[derive(Clone, Debug)]
pub struct SolitaireEngine {
    id: GameId,
    config: EngineConfig,
    /// Indexed by `Suit as usize`.
    foundations: [Foundation; 4],
    tableau: [TableauColumn; TABLEAU_COLUMNS],
    stock_waste: StockWaste,
    moves: Vec<String>,
    won: bool,
}

impl Default for SolitaireEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SolitaireEngine {
    /// Shuffle and deal a new game with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        GameBuilder::new().build()
    }

    /// Shuffle and deal a new game with `config`.
    #[must_use]
    pub fn with_config(id: GameId, config: EngineConfig) -> Self {
        GameBuilder::new().game_id(id).config(config).build()
    }

    /// An undealt layout with no cards.
    pub(crate) fn empty(id: GameId, config: EngineConfig) -> Self {
        Self {
            id,
            config,
            foundations: Suit::ALL.map(Foundation::new),
            tableau: Default::default(),
            stock_waste: StockWaste::new(),
            moves: Vec::new(),
            won: false,
        }
    }

    /// Assemble a game from already-validated parts (snapshot restore).
    ///
    /// The win flag is derived from the foundations, never taken on trust.
    pub(crate) fn from_parts(
        id: GameId,
        config: EngineConfig,
        foundations: [Foundation; 4],
        tableau: [TableauColumn; TABLEAU_COLUMNS],
        stock_waste: StockWaste,
        moves: Vec<String>,
    ) -> Self {
        let mut engine = Self {
            id,
            config,
            foundations,
            tableau,
            stock_waste,
            moves,
            won: false,
        };
        engine.update_won();
        engine
    }

    /// Column `i` gets `i + 1` cards, only the last face up; the rest of
    /// the deck becomes the face-down stock. No rule checks.
    fn deal(&mut self, mut deck: Deck) {
        for (i, column) in self.tableau.iter_mut().enumerate() {
            for j in 0..=i {
                let Some(mut card) = deck.draw() else { return };
                card.set_face_up(j == i);
                column.place(card);
            }
        }
        while let Some(card) = deck.draw() {
            self.stock_waste.push_stock(card);
        }
    }

    // === Operations ===

    /// Draw cards to the waste, or recycle the waste once the stock is empty.
    pub fn draw_from_stock(&mut self) -> DrawOutcome {
        let outcome = self.stock_waste.draw_to_waste(self.config.draw_count);
        debug!(game = %self.id, ?outcome, "draw from stock");
        outcome
    }

    /// Move a card (or a run, for tableau-to-tableau) from `source` to
    /// `destination`.
    ///
    /// `card_index` names the base of the run for tableau-to-tableau moves
    /// and is ignored otherwise. Returns `false`, with no state change, for
    /// any move the configured rules do not allow and for every move once
    /// the game is won.
    pub fn move_card(&mut self, source: PileRef, destination: PileRef, card_index: usize) -> bool {
        match self.apply_move(source, destination, card_index) {
            Ok(description) => {
                debug!(game = %self.id, %source, %destination, "{}", description);
                self.moves.push(description);
                self.update_won();
                true
            }
            Err(reason) => {
                debug!(game = %self.id, %source, %destination, ?reason, "move rejected");
                false
            }
        }
    }

    fn apply_move(
        &mut self,
        source: PileRef,
        destination: PileRef,
        card_index: usize,
    ) -> Result<String, MoveRejection> {
        if self.won {
            return Err(MoveRejection::Finished);
        }
        let extended = self.config.move_rules == MoveRules::Extended;

        match (source, destination) {
            (PileRef::Tableau(from), PileRef::Foundation(suit)) => {
                self.tableau_to_foundation(from, suit)
            }
            _ if !extended => Err(MoveRejection::Unsupported),
            (PileRef::Waste, PileRef::Foundation(suit)) => self.waste_to_foundation(suit),
            (PileRef::Waste, PileRef::Tableau(to)) => self.waste_to_tableau(to),
            (PileRef::Tableau(from), PileRef::Tableau(to)) => {
                self.tableau_to_tableau(from, to, card_index)
            }
            (PileRef::Foundation(suit), PileRef::Tableau(to)) => {
                self.foundation_to_tableau(suit, to)
            }
            _ => Err(MoveRejection::Unsupported),
        }
    }

    fn column_index(index: usize) -> Result<usize, MoveRejection> {
        if index < TABLEAU_COLUMNS {
            Ok(index)
        } else {
            Err(MoveRejection::NoSuchColumn(index))
        }
    }

    fn tableau_to_foundation(&mut self, from: usize, suit: Suit) -> Result<String, MoveRejection> {
        let from = Self::column_index(from)?;
        let top = self.tableau[from].top().ok_or(MoveRejection::EmptySource)?;
        if !top.is_face_up() {
            return Err(MoveRejection::Hidden);
        }
        if !self.foundations[suit as usize].accepts(top) {
            return Err(MoveRejection::Illegal);
        }

        let card = self.tableau[from].remove_top().ok_or(MoveRejection::EmptySource)?;
        if let Err(card) = self.foundations[suit as usize].try_add(card) {
            self.tableau[from].place(card);
            return Err(MoveRejection::Illegal);
        }
        Ok(format!("Moved {} to {} foundation", card, suit))
    }

    fn waste_to_foundation(&mut self, suit: Suit) -> Result<String, MoveRejection> {
        let card = self.stock_waste.take_waste_top().ok_or(MoveRejection::EmptySource)?;
        match self.foundations[suit as usize].try_add(card) {
            Ok(()) => Ok(format!("Moved {} from waste to {} foundation", card, suit)),
            Err(card) => {
                self.stock_waste.return_to_waste(card);
                Err(MoveRejection::Illegal)
            }
        }
    }

    fn waste_to_tableau(&mut self, to: usize) -> Result<String, MoveRejection> {
        let to = Self::column_index(to)?;
        let card = self.stock_waste.take_waste_top().ok_or(MoveRejection::EmptySource)?;
        match self.tableau[to].try_add(card) {
            Ok(()) => Ok(format!("Moved {} from waste to tableau {}", card, to)),
            Err(card) => {
                self.stock_waste.return_to_waste(card);
                Err(MoveRejection::Illegal)
            }
        }
    }

    fn tableau_to_tableau(
        &mut self,
        from: usize,
        to: usize,
        index: usize,
    ) -> Result<String, MoveRejection> {
        let from = Self::column_index(from)?;
        let to = Self::column_index(to)?;
        if from == to {
            return Err(MoveRejection::SamePile);
        }

        let column = &self.tableau[from];
        let base = *column.cards().get(index).ok_or(MoveRejection::EmptySource)?;
        if !column.can_lift(index) {
            return Err(MoveRejection::NotLiftable);
        }
        if !column.is_run(index) {
            return Err(MoveRejection::NotARun);
        }
        if !self.tableau[to].accepts(&base) {
            return Err(MoveRejection::Illegal);
        }

        let run = self.tableau[from].lift(index).ok_or(MoveRejection::NotLiftable)?;
        let description = if run.len() == 1 {
            format!("Moved {} from tableau {} to tableau {}", base, from, to)
        } else {
            format!(
                "Moved {} cards from {} on tableau {} to tableau {}",
                run.len(),
                base,
                from,
                to
            )
        };
        if let Err(run) = self.tableau[to].try_add_run(run) {
            for card in run {
                self.tableau[from].place(card);
            }
            return Err(MoveRejection::Illegal);
        }
        Ok(description)
    }

    fn foundation_to_tableau(&mut self, suit: Suit, to: usize) -> Result<String, MoveRejection> {
        let to = Self::column_index(to)?;
        let top = self.foundations[suit as usize].top().ok_or(MoveRejection::EmptySource)?;
        if !self.tableau[to].accepts(top) {
            return Err(MoveRejection::Illegal);
        }

        let card = self.foundations[suit as usize]
            .remove_top()
            .ok_or(MoveRejection::EmptySource)?;
        if let Err(card) = self.tableau[to].try_add(card) {
            self.foundations[suit as usize].restore_top(card);
            return Err(MoveRejection::Illegal);
        }
        Ok(format!("Moved {} from {} foundation to tableau {}", card, suit, to))
    }

    /// Once won, always won.
    fn update_won(&mut self) {
        self.won = self.won || self.foundations.iter().all(Foundation::is_complete);
    }

    // === Queries ===

    #[must_use]
    pub fn game_id(&self) -> &GameId {
        &self.id
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Human-readable log of successful moves, oldest first.
    #[must_use]
    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    #[must_use]
    pub fn foundation(&self, suit: Suit) -> &Foundation {
        &self.foundations[suit as usize]
    }

    /// Foundations in suit order.
    #[must_use]
    pub fn foundations(&self) -> &[Foundation; 4] {
        &self.foundations
    }

    #[must_use]
    pub fn column(&self, index: usize) -> Option<&TableauColumn> {
        self.tableau.get(index)
    }

    #[must_use]
    pub fn columns(&self) -> &[TableauColumn; TABLEAU_COLUMNS] {
        &self.tableau
    }

    #[must_use]
    pub fn stock_waste(&self) -> &StockWaste {
        &self.stock_waste
    }

    /// Number of complete foundations.
    #[must_use]
    pub fn foundations_complete(&self) -> usize {
        self.foundations.iter().filter(|f| f.is_complete()).count()
    }

    /// Every card in the game, wherever it is.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.foundations
            .iter()
            .flat_map(|f| f.cards())
            .chain(self.tableau.iter().flat_map(|c| c.cards()))
            .chain(self.stock_waste.stock())
            .chain(self.stock_waste.waste())
    }

    // === Projections ===

    #[must_use]
    pub fn tableau_state(&self) -> Vec<TableauView> {
        self.tableau
            .iter()
            .enumerate()
            .map(|(index, column)| TableauView {
                index,
                cards: column.cards().to_vec(),
            })
            .collect()
    }

    #[must_use]
    pub fn foundation_state(&self) -> BTreeMap<Suit, FoundationView> {
        self.foundations
            .iter()
            .map(|f| {
                let view = FoundationView {
                    top_card: f.top().map(CardFace::from),
                    complete: f.is_complete(),
                };
                (f.suit(), view)
            })
            .collect()
    }

    /// Stock size only; stock cards stay hidden.
    #[must_use]
    pub fn stock_count(&self) -> usize {
        self.stock_waste.stock_len()
    }

    /// Waste cards, most recently drawn first.
    #[must_use]
    pub fn waste_state(&self) -> Vec<CardFace> {
        self.stock_waste.waste().iter().rev().map(CardFace::from).collect()
    }
}
