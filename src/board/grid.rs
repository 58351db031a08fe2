//! Cell storage mapping board cells to the ships that occupy them.

use crate::board::{Coordinate, Dimensions};

/// Maps each cell of the board to the ship occupying it, if any. Ships are
/// identified by their index in the board's ship list. Cells with no ship are
/// water.
#[derive(Debug)]
pub(super) struct Grid {
    /// Dimensions of this board.
    pub(super) dim: Dimensions,
    /// Occupying ship index for every cell, in row-major order.
    cells: Box<[Option<usize>]>,
}

impl Grid {
    pub(super) fn new(dim: Dimensions) -> Self {
        let cells = vec![None; dim.total_size()].into_boxed_slice();
        Self { dim, cells }
    }

    /// Get the index of the ship at the given [`Coordinate`]. Returns `None`
    /// for water as well as out of bounds cells.
    pub(super) fn get(&self, coord: &Coordinate) -> Option<usize> {
        self.dim.try_linearize(coord).and_then(|i| self.cells[i])
    }

    /// Register the ship with index `ship` at the given [`Coordinate`].
    /// Returns `false` if the coordinate is out of bounds.
    pub(super) fn set(&mut self, coord: &Coordinate, ship: usize) -> bool {
        match self.dim.try_linearize(coord) {
            Some(i) => {
                self.cells[i] = Some(ship);
                true
            }
            None => false,
        }
    }
}
