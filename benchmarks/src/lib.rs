//! Shared fixtures for the solver benchmarks.

#![forbid(unsafe_code)]

use ninegrid_kernel::board::{Board, Pos, GOAL};
use ninegrid_kernel::moves::apply_move;

/// Scramble the goal board by a fixed legal blank walk.
///
/// # Panics
///
/// Panics on an illegal walk; benchmark fixtures are fixed literals.
#[must_use]
pub fn scramble(walk: &[Pos]) -> Board {
    let mut board = GOAL.clone();
    let mut blank = board.blank();
    for &step in walk {
        board = apply_move(&board, blank, step).expect("fixture walk must be legal");
        blank = step;
    }
    board
}

/// Scramble walks of increasing length; distances are bounded by the walk.
#[must_use]
pub fn benchmark_walks() -> Vec<(&'static str, &'static [Pos])> {
    vec![
        ("depth_8", &[1, 0, 3, 6, 7, 4, 5, 8]),
        ("depth_12", &[5, 2, 1, 4, 3, 0, 1, 2, 5, 8, 7, 6]),
        (
            "depth_14",
            &[7, 8, 5, 4, 1, 0, 3, 6, 7, 4, 5, 2, 1, 0],
        ),
    ]
}
