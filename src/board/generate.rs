//! Random generation of legal fleet placements. Only available with the
//! `rng_gen` feature.

use log::debug;
use once_cell::sync::Lazy;
use rand::Rng;

use crate::board::{Coordinate, Dimensions, FleetSpec, Placement};

/// Shared instance of the classic fleet composition.
static CLASSIC: Lazy<FleetSpec> = Lazy::new(FleetSpec::default);

/// Attempts to place a single ship before giving up on the whole fleet.
const SHIP_ATTEMPTS: usize = 100;

/// Attempts to place a whole fleet before giving up entirely.
const FLEET_ATTEMPTS: usize = 100;

/// Generate a random legal fleet under the default rules: a 10x10 grid and
/// the classic fleet composition.
pub fn generate_default<R: Rng>(rng: &mut R) -> Option<Vec<Placement>> {
    generate_fleet(rng, Dimensions::default(), &CLASSIC)
}

/// Generate a random set of placements satisfying `spec` on a board of the
/// given dimensions, by rejection sampling with the largest ships placed
/// first. Returns `None` if no legal arrangement was found within the
/// attempt budget, which can happen when the spec does not fit the board.
pub fn generate_fleet<R: Rng>(
    rng: &mut R,
    dim: Dimensions,
    spec: &FleetSpec,
) -> Option<Vec<Placement>> {
    for attempt in 0..FLEET_ATTEMPTS {
        if let Some(fleet) = try_generate(rng, dim, spec) {
            return Some(fleet);
        }
        debug!("fleet attempt {} wedged, retrying", attempt);
    }
    None
}

fn try_generate<R: Rng>(rng: &mut R, dim: Dimensions, spec: &FleetSpec) -> Option<Vec<Placement>> {
    // Cells a new ship may not occupy: every placed deck and its neighbors.
    let mut blocked = vec![false; dim.total_size()];
    let mut fleet = Vec::with_capacity(spec.total_ships());
    for (decks, ships) in spec.classes().collect::<Vec<_>>().into_iter().rev() {
        for _ in 0..ships {
            let placement = place_one(rng, dim, decks, &mut blocked)?;
            fleet.push(placement);
        }
    }
    Some(fleet)
}

/// Pick a random free span of `len` cells, mark it and its surroundings
/// blocked, and return the placement.
fn place_one<R: Rng>(
    rng: &mut R,
    dim: Dimensions,
    len: usize,
    blocked: &mut [bool],
) -> Option<Placement> {
    for _ in 0..SHIP_ATTEMPTS {
        let horizontal = len > 1 && rng.gen::<bool>();
        let (row_span, col_span) = if horizontal { (1, len) } else { (len, 1) };
        if dim.height() < row_span || dim.width() < col_span {
            return None;
        }
        let row = rng.gen_range(0, dim.height() - row_span + 1);
        let col = rng.gen_range(0, dim.width() - col_span + 1);
        let start = Coordinate::new(row, col);
        let end = Coordinate::new(row + row_span - 1, col + col_span - 1);
        if span_free(dim, start, end, blocked) {
            block_span(dim, start, end, blocked);
            return Some(Placement::new(start, end));
        }
    }
    None
}

fn span_free(dim: Dimensions, start: Coordinate, end: Coordinate, blocked: &[bool]) -> bool {
    (start.row..=end.row).all(|row| {
        (start.col..=end.col).all(|col| !blocked[row * dim.width() + col])
    })
}

fn block_span(dim: Dimensions, start: Coordinate, end: Coordinate, blocked: &mut [bool]) {
    let row_lo = start.row.saturating_sub(1);
    let col_lo = start.col.saturating_sub(1);
    let row_hi = (end.row + 1).min(dim.height() - 1);
    let col_hi = (end.col + 1).min(dim.width() - 1);
    for row in row_lo..=row_hi {
        for col in col_lo..=col_hi {
            blocked[row * dim.width() + col] = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::board::Board;

    #[test]
    fn generated_fleets_validate() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let fleet = generate_default(&mut rng).expect("classic fleet fits a 10x10 board");
            let board = Board::new(fleet).expect("generated fleet should validate");
            let decks: usize = board.iter_ships().map(|ship| ship.len()).sum();
            assert_eq!(decks, 20);
        }
    }

    #[test]
    fn generator_respects_custom_rules() {
        let mut rng = StdRng::seed_from_u64(7);
        let dim = Dimensions::new(5, 5);
        let spec = FleetSpec::new(vec![(1, 1), (2, 1)]);
        let fleet = generate_fleet(&mut rng, dim, &spec).expect("small fleet fits a 5x5 board");
        Board::with_rules(dim, spec, fleet).expect("generated fleet should validate");
    }

    #[test]
    fn impossible_spec_gives_up() {
        let mut rng = StdRng::seed_from_u64(1);
        let dim = Dimensions::new(2, 2);
        // A 5-deck ship cannot fit on a 2x2 board.
        let spec = FleetSpec::new(vec![(5, 1)]);
        assert!(generate_fleet(&mut rng, dim, &spec).is_none());
    }
}
