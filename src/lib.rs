//! Single-player Battleship field logic.
//!
//! A [`Board`] is built atomically from a list of ship [`Placement`]s and
//! validated against a [`FleetSpec`] (by default the classic 4/3/2/1 fleet on
//! a 10x10 grid): the right number of ships of each class, and no two ships
//! in neighboring cells, diagonals included. An illegal fleet yields a
//! [`FleetConfigError`] naming the violated rule instead of a board.
//!
//! Play happens through [`Board::fire`], which resolves one shot to a
//! [`ShotOutcome`], and [`Board::cell_state`], which reports the per-cell
//! [`CellState`] an external renderer needs. The crate does no rendering,
//! I/O, or turn management of its own.
//!
//! ```
//! use seabattle::{Board, ShotOutcome};
//!
//! let mut board = Board::new(vec![
//!     ((0, 0), (0, 3)),
//!     ((0, 5), (0, 7)),
//!     ((2, 0), (2, 2)),
//!     ((2, 4), (2, 5)),
//!     ((2, 7), (2, 8)),
//!     ((4, 0), (4, 1)),
//!     ((4, 3), (4, 3)),
//!     ((4, 5), (4, 5)),
//!     ((4, 7), (4, 7)),
//!     ((6, 0), (6, 0)),
//! ])?;
//!
//! assert_eq!(board.fire((9, 9)), ShotOutcome::Miss);
//! assert_eq!(board.fire((6, 0)), ShotOutcome::Sunk);
//! # Ok::<(), seabattle::FleetConfigError>(())
//! ```

pub mod board;
pub mod ship;

#[cfg(feature = "rng_gen")]
pub use board::generate::{generate_default, generate_fleet};
pub use board::{
    Board, CellState, Coordinate, Dimensions, FleetConfigError, FleetSpec, Placement, ShotOutcome,
};
pub use ship::{Deck, Ship};
