//! Scenario locks: fixed inputs, pinned outputs.

use ninegrid_kernel::board::Board;
use ninegrid_search::driver::solve;
use ninegrid_search::error::SolveError;

#[test]
fn already_solved_board_returns_empty_sequence() {
    let board = Board::from_cells([1, 2, 3, 4, 0, 5, 6, 7, 8]).unwrap();
    let result = solve(&board).unwrap();
    assert!(result.moves.is_empty());
}

#[test]
fn one_move_board_returns_the_single_move() {
    let board = Board::from_cells([1, 0, 3, 4, 2, 5, 6, 7, 8]).unwrap();
    let result = solve(&board).unwrap();
    assert_eq!(result.moves, vec![4]);
}

#[test]
fn four_move_board_returns_the_forced_minimal_sequence() {
    // Every minimal solution of this board is the same four moves: each
    // step must reduce a misplaced tile's distance, which forces the path.
    let board = Board::from_cells([1, 2, 3, 6, 4, 5, 7, 8, 0]).unwrap();
    let result = solve(&board).unwrap();
    assert_eq!(result.moves, vec![7, 6, 3, 4]);
}

#[test]
fn unsolvable_board_rejected_without_searching() {
    let board = Board::from_cells([2, 1, 3, 4, 0, 5, 6, 7, 8]).unwrap();
    let err = solve(&board).unwrap_err();
    assert_eq!(err, SolveError::Unsolvable { inversions: 1 });
}

#[test]
fn malformed_input_rejected_at_the_board_boundary() {
    assert!(Board::from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]).is_err());
    assert!(Board::from_slice(&[1, 2, 3, 4, 4, 5, 6, 7, 8]).is_err());
    assert!(Board::from_slice(&[1, 2, 3, 4, 9, 5, 6, 7, 8]).is_err());
}
