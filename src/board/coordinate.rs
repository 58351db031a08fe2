/// The position of a single cell on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Coordinate {
    /// Vertical position of the cell, counted from the top.
    pub row: usize,
    /// Horizontal position of the cell, counted from the left.
    pub col: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `col`.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns true if the two cells are within Chebyshev distance 1 of each
    /// other, counting orthogonal and diagonal neighbors alike, as well as
    /// the cell itself.
    pub(crate) fn touches(&self, other: &Coordinate) -> bool {
        dist(self.row, other.row) <= 1 && dist(self.col, other.col) <= 1
    }
}

fn dist(a: usize, b: usize) -> usize {
    if a > b {
        a - b
    } else {
        b - a
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(row, col)` pair.
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into a `(row, col)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}
