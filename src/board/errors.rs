//! Errors raised when a board is built from an illegal fleet.

use thiserror::Error;

use crate::board::Coordinate;

/// Error returned when constructing a board from an illegal fleet
/// configuration. Carries the first violated rule in a fixed check order:
/// deck bounds, total ship count, per-class ship counts, adjacency.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum FleetConfigError {
    /// A ship was placed with a deck outside the board's dimensions.
    #[error("ship {ship} has a deck out of bounds at {coord:?}")]
    DeckOutOfBounds {
        /// Index of the offending ship in placement order.
        ship: usize,
        /// The out of bounds cell.
        coord: Coordinate,
    },

    /// The total number of ships does not match the fleet spec.
    #[error("the fleet should have {expected} ships, got {actual}")]
    ShipCount { expected: usize, actual: usize },

    /// The number of ships with a given deck count does not match the fleet
    /// spec.
    #[error("the fleet should have {expected} {decks}-deck ships, got {actual}")]
    ClassCount {
        decks: usize,
        expected: usize,
        actual: usize,
    },

    /// Two different ships occupy neighboring cells, counting diagonal
    /// neighbors.
    #[error("ships {first} and {second} are in neighboring cells ({a:?} touches {b:?})")]
    Touching {
        /// Index of the first ship in placement order.
        first: usize,
        /// Index of the second ship in placement order.
        second: usize,
        /// The touching deck of the first ship.
        a: Coordinate,
        /// The touching deck of the second ship.
        b: Coordinate,
    },
}
