//! The static adjacency table and pure move application.
//!
//! A move is named by the blank's destination cell. Each of the nine
//! positions has a fixed set of orthogonal neighbors, listed in ascending
//! index order; that listing order is a reproducibility contract relied on
//! by the search layer, not just documentation.

use crate::board::{Board, Pos, BLANK, CELL_COUNT};

/// Orthogonal neighbors per position, ascending index order.
///
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
///
/// Corners have two neighbors, edges three, the center four.
pub const NEIGHBORS: [&[Pos]; CELL_COUNT] = [
    &[1, 3],
    &[0, 2, 4],
    &[1, 5],
    &[0, 4, 6],
    &[1, 3, 5, 7],
    &[2, 4, 8],
    &[3, 7],
    &[4, 6, 8],
    &[5, 7],
];

/// The neighbors of `pos`, ascending. Positions outside `0..9` have none.
#[must_use]
pub fn neighbors(pos: Pos) -> &'static [Pos] {
    NEIGHBORS.get(pos as usize).copied().unwrap_or(&[])
}

/// Whether `a` and `b` are orthogonally adjacent.
#[must_use]
pub fn are_adjacent(a: Pos, b: Pos) -> bool {
    neighbors(a).contains(&b)
}

/// Apply one blank move: the tile at `destination` slides into the blank
/// cell at `blank`, and the blank moves to `destination`.
///
/// Returns a new board; the input is never mutated. `blank` must be the
/// board's actual blank position; callers carry it explicitly rather than
/// re-scanning the board.
///
/// # Errors
///
/// Returns [`MoveError::NotAdjacent`] if `destination` is not in the blank's
/// adjacency row. A generator drawing destinations from [`NEIGHBORS`] cannot
/// trigger this; the check guards the contract at the boundary.
pub fn apply_move(board: &Board, blank: Pos, destination: Pos) -> Result<Board, MoveError> {
    if board.get(blank) != Some(BLANK) || !are_adjacent(blank, destination) {
        return Err(MoveError::NotAdjacent { blank, destination });
    }
    let mut cells = *board.cells();
    cells[blank as usize] = cells[destination as usize];
    cells[destination as usize] = BLANK;
    // A swap of two cells preserves the permutation invariant.
    Ok(Board::from_valid_cells(cells))
}

/// Typed failure for move application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The destination is not adjacent to the blank (or `blank` does not
    /// name the blank cell).
    NotAdjacent { blank: Pos, destination: Pos },
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAdjacent { blank, destination } => {
                write!(
                    f,
                    "destination {destination} is not adjacent to blank at {blank}"
                )
            }
        }
    }
}

impl std::error::Error for MoveError {}
