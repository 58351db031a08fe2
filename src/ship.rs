//! Ships and the decks they are made of.

use crate::board::Coordinate;

/// A single cell of a ship, with its own liveness.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Deck {
    row: usize,
    col: usize,
    alive: bool,
}

impl Deck {
    fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            alive: true,
        }
    }

    /// The cell this deck occupies.
    pub fn coord(&self) -> Coordinate {
        Coordinate::new(self.row, self.col)
    }

    /// Whether this deck has not been hit yet.
    pub fn alive(&self) -> bool {
        self.alive
    }
}

/// A group of decks spanning the rectangle between two corner cells. Sunk
/// once every deck has been hit.
///
/// The shape is fixed at construction; only deck liveness and the sunk flag
/// change afterwards.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    decks: Vec<Deck>,
    sunk: bool,
}

impl Ship {
    /// Build a ship with a deck on every cell between `start` and `end`,
    /// inclusive on both ends. The result is a straight line when the corners
    /// share a row or column; corners differing in both span a full rectangle
    /// of decks. No straight-line check is applied.
    pub fn new(start: Coordinate, end: Coordinate) -> Self {
        let decks = (start.row..=end.row)
            .flat_map(|row| (start.col..=end.col).map(move |col| Deck::new(row, col)))
            .collect();
        Self { decks, sunk: false }
    }

    /// The decks making up this ship.
    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    /// Number of decks, which determines the ship's class.
    pub fn len(&self) -> usize {
        self.decks.len()
    }

    /// Get the deck at the given cell if the ship occupies it.
    pub fn deck(&self, coord: Coordinate) -> Option<&Deck> {
        self.decks.iter().find(|deck| deck.coord() == coord)
    }

    /// Check if the ship is sunk (all decks hit). Sinking is permanent.
    pub fn sunk(&self) -> bool {
        self.sunk
    }

    /// Register a hit on the deck at the given cell, then update the sunk
    /// flag. Does nothing on a cell the ship does not occupy; hitting an
    /// already dead deck is a no-op.
    pub fn fire(&mut self, coord: Coordinate) {
        if let Some(deck) = self.decks.iter_mut().find(|deck| deck.coord() == coord) {
            deck.alive = false;
            self.sunk = self.decks.iter().all(|deck| !deck.alive);
        }
    }
}
