//! Types that make up the game board.

use log::{debug, trace};

use crate::ship::Ship;

use self::grid::Grid;
pub use self::{
    coordinate::Coordinate, dimensions::Dimensions, errors::FleetConfigError, rules::FleetSpec,
};

mod coordinate;
mod dimensions;
mod errors;
#[cfg(feature = "rng_gen")]
pub mod generate;
mod grid;
mod rules;

/// Result of a shot at a single cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The shot did not hit anything.
    Miss,
    /// The shot hit a ship, but did not sink it.
    Hit,
    /// The shot left the ship it hit with no live decks.
    Sunk,
}

/// Render state of a single cell, for an external display collaborator.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CellState {
    /// No ship occupies the cell.
    Water,
    /// A live deck occupies the cell.
    Afloat,
    /// A dead deck of a still afloat ship occupies the cell.
    Hit,
    /// A deck of a sunk ship occupies the cell.
    Sunk,
}

/// The two corner cells of one ship's span, inclusive on both ends.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Placement {
    /// Starting corner of the ship.
    pub start: Coordinate,
    /// Ending corner of the ship.
    pub end: Coordinate,
}

impl Placement {
    /// Construct a [`Placement`] from the given corner cells.
    pub fn new(start: Coordinate, end: Coordinate) -> Self {
        Self { start, end }
    }
}

impl<S: Into<Coordinate>, E: Into<Coordinate>> From<(S, E)> for Placement {
    /// Construct a [`Placement`] from a `(start, end)` pair of anything
    /// convertible to [`Coordinate`], such as `(row, col)` tuples.
    fn from((start, end): (S, E)) -> Self {
        Self::new(start.into(), end.into())
    }
}

/// A single player's board: the full set of ships and the grid of cells they
/// occupy. Constructed atomically from a list of placements; an illegal fleet
/// never produces a board.
#[derive(Debug)]
pub struct Board {
    /// Grid of cells occupied by ships.
    grid: Grid,

    /// Composition rules this board was validated against.
    spec: FleetSpec,

    /// All ships on the board, in placement order. Grid cells refer to ships
    /// by index into this list.
    ships: Vec<Ship>,
}

impl Board {
    /// Build a board under the default rules: a 10x10 grid and the classic
    /// fleet composition.
    pub fn new<P>(placements: P) -> Result<Self, FleetConfigError>
    where
        P: IntoIterator,
        P::Item: Into<Placement>,
    {
        Self::with_rules(Dimensions::default(), FleetSpec::default(), placements)
    }

    /// Build a board with the given dimensions and fleet composition. Every
    /// ship is built and registered into the grid, then the whole fleet is
    /// validated. Returns the first violated rule, checked in a fixed order:
    /// deck bounds, total ship count, per-class ship counts, adjacency.
    pub fn with_rules<P>(
        dim: Dimensions,
        spec: FleetSpec,
        placements: P,
    ) -> Result<Self, FleetConfigError>
    where
        P: IntoIterator,
        P::Item: Into<Placement>,
    {
        let mut grid = Grid::new(dim);
        let mut ships = Vec::new();
        for placement in placements {
            let placement = placement.into();
            let ship = Ship::new(placement.start, placement.end);
            let index = ships.len();
            for deck in ship.decks() {
                let coord = deck.coord();
                if !grid.set(&coord, index) {
                    return Err(FleetConfigError::DeckOutOfBounds { ship: index, coord });
                }
            }
            ships.push(ship);
        }
        let board = Board { grid, spec, ships };
        board.validate()?;
        debug!(
            "accepted fleet of {} ships on {}x{}",
            board.ships.len(),
            board.grid.dim.width(),
            board.grid.dim.height()
        );
        Ok(board)
    }

    /// Check the fleet against the composition and adjacency rules.
    fn validate(&self) -> Result<(), FleetConfigError> {
        let expected = self.spec.total_ships();
        if self.ships.len() != expected {
            return Err(FleetConfigError::ShipCount {
                expected,
                actual: self.ships.len(),
            });
        }
        for (decks, expected) in self.spec.classes() {
            let actual = self.ships.iter().filter(|ship| ship.len() == decks).count();
            if actual != expected {
                return Err(FleetConfigError::ClassCount {
                    decks,
                    expected,
                    actual,
                });
            }
        }
        // Compare every pair of decks across distinct ships. A ship's own
        // decks are naturally adjacent and exempt.
        for (first, a) in self.ships.iter().enumerate() {
            for (second, b) in self.ships.iter().enumerate().skip(first + 1) {
                for da in a.decks() {
                    for db in b.decks() {
                        if da.coord().touches(&db.coord()) {
                            return Err(FleetConfigError::Touching {
                                first,
                                second,
                                a: da.coord(),
                                b: db.coord(),
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Get the [`Dimensions`] of this [`Board`].
    pub fn dimensions(&self) -> &Dimensions {
        &self.grid.dim
    }

    /// Get the [`FleetSpec`] this board was validated against.
    pub fn fleet_spec(&self) -> &FleetSpec {
        &self.spec
    }

    /// Get an iterator over all ships on this board, in placement order.
    pub fn iter_ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter()
    }

    /// Get the ship with the given placement index, if it exists.
    pub fn get_ship(&self, index: usize) -> Option<&Ship> {
        self.ships.get(index)
    }

    /// Returns true if every ship on this board has been sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(|ship| ship.sunk())
    }

    /// Fire a shot at the given cell. Water cells, including out of bounds
    /// ones, report [`ShotOutcome::Miss`] and mutate nothing. Occupied cells
    /// mark the deck hit and report whether the owning ship survives.
    /// Re-firing a dead cell is idempotent and reports the same outcome.
    pub fn fire<C: Into<Coordinate>>(&mut self, coord: C) -> ShotOutcome {
        let coord = coord.into();
        match self.grid.get(&coord) {
            None => {
                trace!("shot at {:?}: miss", coord);
                ShotOutcome::Miss
            }
            Some(index) => {
                // The grid only maps cells the ship occupies.
                let ship = &mut self.ships[index];
                ship.fire(coord);
                let outcome = if ship.sunk() {
                    ShotOutcome::Sunk
                } else {
                    ShotOutcome::Hit
                };
                trace!("shot at {:?}: {:?}", coord, outcome);
                outcome
            }
        }
    }

    /// Get the render state of the given cell: water, a live deck, a hit deck
    /// of a still afloat ship, or a deck of a sunk ship. Returns `None` for
    /// cells out of bounds.
    pub fn cell_state<C: Into<Coordinate>>(&self, coord: C) -> Option<CellState> {
        let coord = coord.into();
        if !self.grid.dim.contains(&coord) {
            return None;
        }
        Some(match self.grid.get(&coord) {
            None => CellState::Water,
            Some(index) => {
                let ship = &self.ships[index];
                if ship.sunk() {
                    CellState::Sunk
                } else {
                    match ship.deck(coord) {
                        Some(deck) if deck.alive() => CellState::Afloat,
                        _ => CellState::Hit,
                    }
                }
            }
        })
    }
}
