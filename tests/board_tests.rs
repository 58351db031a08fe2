use seabattle::{Board, CellState, Dimensions, FleetConfigError, FleetSpec, ShotOutcome};

/// A legal classic fleet, every pair of ships at least two cells apart.
fn classic_fleet() -> Vec<((usize, usize), (usize, usize))> {
    vec![
        ((0, 0), (0, 3)),
        ((0, 5), (0, 7)),
        ((2, 0), (2, 2)),
        ((2, 4), (2, 5)),
        ((2, 7), (2, 8)),
        ((4, 0), (4, 1)),
        ((4, 3), (4, 3)),
        ((4, 5), (4, 5)),
        ((4, 7), (4, 7)),
        ((6, 0), (6, 0)),
    ]
}

#[test]
fn valid_fleet_constructs_with_twenty_decks() {
    let board = Board::new(classic_fleet()).unwrap();
    assert_eq!(board.iter_ships().count(), 10);
    let decks: usize = board.iter_ships().map(|ship| ship.len()).sum();
    assert_eq!(decks, 20);
    assert!(!board.all_sunk());
}

#[test]
fn lone_ship_fails_total_count() {
    let err = Board::new(vec![((0, 0), (0, 0))]).unwrap_err();
    assert_eq!(
        err,
        FleetConfigError::ShipCount {
            expected: 10,
            actual: 1,
        }
    );
}

#[test]
fn wrong_class_distribution_fails() {
    // Swap the four-deck ship for a fifth single: still 10 ships, wrong mix.
    let mut fleet = classic_fleet();
    fleet[0] = ((0, 0), (0, 0));
    let err = Board::new(fleet).unwrap_err();
    assert_eq!(
        err,
        FleetConfigError::ClassCount {
            decks: 1,
            expected: 4,
            actual: 5,
        }
    );
}

#[test]
fn orthogonal_neighbors_fail_adjacency() {
    // Move a single right next to the end of the (4,0)-(4,1) double.
    let mut fleet = classic_fleet();
    fleet[6] = ((4, 2), (4, 2));
    let err = Board::new(fleet).unwrap_err();
    assert!(matches!(err, FleetConfigError::Touching { .. }));
}

#[test]
fn diagonal_neighbors_fail_adjacency() {
    // (1, 4) touches both row-0 ships diagonally.
    let mut fleet = classic_fleet();
    fleet[6] = ((1, 4), (1, 4));
    let err = Board::new(fleet).unwrap_err();
    assert!(matches!(err, FleetConfigError::Touching { .. }));
}

#[test]
fn overlapping_ships_fail_adjacency() {
    let mut fleet = classic_fleet();
    // Drop the single onto a deck of the four-deck ship.
    fleet[6] = ((0, 1), (0, 1));
    let err = Board::new(fleet).unwrap_err();
    assert!(matches!(err, FleetConfigError::Touching { .. }));
}

#[test]
fn out_of_bounds_deck_is_rejected_first() {
    let err = Board::new(vec![((20, 0), (20, 3))]).unwrap_err();
    assert_eq!(
        err,
        FleetConfigError::DeckOutOfBounds {
            ship: 0,
            coord: (20, 0).into(),
        }
    );
}

#[test]
fn miss_mutates_nothing() {
    let mut board = Board::new(classic_fleet()).unwrap();
    assert_eq!(board.fire((9, 9)), ShotOutcome::Miss);
    assert!(board
        .iter_ships()
        .all(|ship| ship.decks().iter().all(|deck| deck.alive())));
}

#[test]
fn out_of_bounds_shot_is_a_miss() {
    let mut board = Board::new(classic_fleet()).unwrap();
    assert_eq!(board.fire((10, 10)), ShotOutcome::Miss);
    assert_eq!(board.fire((0, 99)), ShotOutcome::Miss);
}

#[test]
fn four_deck_ship_sinks_on_final_hit() {
    let mut board = Board::new(classic_fleet()).unwrap();
    assert_eq!(board.fire((0, 0)), ShotOutcome::Hit);
    assert_eq!(board.fire((0, 1)), ShotOutcome::Hit);
    assert_eq!(board.fire((0, 2)), ShotOutcome::Hit);
    assert_eq!(board.fire((0, 3)), ShotOutcome::Sunk);
}

#[test]
fn refiring_dead_cells_is_idempotent() {
    let mut board = Board::new(classic_fleet()).unwrap();
    assert_eq!(board.fire((0, 5)), ShotOutcome::Hit);
    assert_eq!(board.fire((0, 5)), ShotOutcome::Hit);
    assert_eq!(board.fire((6, 0)), ShotOutcome::Sunk);
    assert_eq!(board.fire((6, 0)), ShotOutcome::Sunk);
}

#[test]
fn cell_states_follow_the_game() {
    let mut board = Board::new(classic_fleet()).unwrap();
    assert_eq!(board.cell_state((9, 9)), Some(CellState::Water));
    assert_eq!(board.cell_state((0, 0)), Some(CellState::Afloat));
    assert_eq!(board.cell_state((10, 0)), None);

    board.fire((0, 0));
    assert_eq!(board.cell_state((0, 0)), Some(CellState::Hit));
    assert_eq!(board.cell_state((0, 1)), Some(CellState::Afloat));

    board.fire((6, 0));
    assert_eq!(board.cell_state((6, 0)), Some(CellState::Sunk));
}

#[test]
fn sinking_marks_every_deck_of_the_ship_sunk() {
    let mut board = Board::new(classic_fleet()).unwrap();
    for col in 0..4 {
        board.fire((0, col));
    }
    for col in 0..4 {
        assert_eq!(board.cell_state((0, col)), Some(CellState::Sunk));
    }
    // The neighboring fleet is untouched.
    assert_eq!(board.cell_state((0, 5)), Some(CellState::Afloat));
}

#[test]
fn render_sweep_sees_twenty_afloat_cells() {
    let board = Board::new(classic_fleet()).unwrap();
    let afloat = board
        .dimensions()
        .iter_coordinates()
        .flatten()
        .filter(|&coord| board.cell_state(coord) == Some(CellState::Afloat))
        .count();
    assert_eq!(afloat, 20);
}

#[test]
fn custom_rules_run_a_full_game() {
    let dim = Dimensions::new(5, 5);
    let spec = FleetSpec::new(vec![(1, 1), (2, 1)]);
    let mut board =
        Board::with_rules(dim, spec, vec![((0, 0), (0, 1)), ((3, 3), (3, 3))]).unwrap();
    assert_eq!(board.dimensions().width(), 5);
    assert_eq!(board.fleet_spec().total_decks(), 3);

    assert_eq!(board.fire((0, 0)), ShotOutcome::Hit);
    assert_eq!(board.fire((0, 1)), ShotOutcome::Sunk);
    assert!(!board.all_sunk());
    assert_eq!(board.fire((3, 3)), ShotOutcome::Sunk);
    assert!(board.all_sunk());
}

#[test]
fn custom_rules_still_validate_composition() {
    let dim = Dimensions::new(5, 5);
    let spec = FleetSpec::new(vec![(1, 1), (2, 1)]);
    let err = Board::with_rules(dim, spec, vec![((0, 0), (0, 1)), ((3, 3), (3, 4))]).unwrap_err();
    assert_eq!(
        err,
        FleetConfigError::ClassCount {
            decks: 1,
            expected: 1,
            actual: 0,
        }
    );
}
