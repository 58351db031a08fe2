use crate::board::Coordinate;

/// Rectangular extent of a board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Dimensions {
    /// Width of the board. This cooresponds to the `col` of a [`Coordinate`].
    width: usize,
    /// Height of the board. This cooresponds to the `row` of a [`Coordinate`].
    height: usize,
}

impl Dimensions {
    /// Create new [`Dimensions`] with the specified width and height.
    /// Panics if `width * height` exceeds `usize::max_value()` or if `width` or
    /// `height` is 0.
    pub fn new(width: usize, height: usize) -> Self {
        match Self::try_new(width, height) {
            Some(dim) => dim,
            None => {
                if width == 0 || height == 0 {
                    panic!("Dimensions must be nonzero, got {}x{}", width, height);
                } else {
                    panic!(
                        "Dimensions too large: {} * {} > {}",
                        width,
                        height,
                        usize::max_value()
                    );
                }
            }
        }
    }

    /// Create new [`Dimensions`] with the specified width and height.
    /// Returns `None` if `width * height` exceeds `usize::max_value()` or if
    /// `width` or `height` is 0.
    pub fn try_new(width: usize, height: usize) -> Option<Self> {
        if width == 0 || height == 0 {
            None
        } else {
            width.checked_mul(height).map(|_| Self { width, height })
        }
    }

    /// Get the width of these [`Dimensions`].
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height of these [`Dimensions`].
    pub fn height(&self) -> usize {
        self.height
    }

    /// Compute the total number of cells. Used to allocate storage for the
    /// board.
    pub fn total_size(&self) -> usize {
        self.width * self.height
    }

    /// Check if the given [`Coordinate`] is in bounds for these
    /// [`Dimensions`].
    pub fn contains(&self, coord: &Coordinate) -> bool {
        coord.col < self.width && coord.row < self.height
    }

    /// Convert a coordinate to a linear index within this dimension.
    /// Returns `None` if the coordinate is out of range for the dimension.
    pub(super) fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.row * self.width + coord.col)
        } else {
            None
        }
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over
    /// the coordinates of that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let width = self.width;
        (0..self.height).map(move |row| (0..width).map(move |col| Coordinate { row, col }))
    }
}

impl Default for Dimensions {
    /// Construct the default dimensions, a 10x10 board.
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
        }
    }
}
