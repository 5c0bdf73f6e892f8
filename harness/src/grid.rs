//! The static position-to-plane coordinate mapping.
//!
//! The renderer lays the nine cells out on a unit grid centered on the
//! middle cell, x growing rightward and y growing upward:
//!
//! ```text
//! (-1, 1) (0, 1) (1, 1)
//! (-1, 0) (0, 0) (1, 0)
//! (-1,-1) (0,-1) (1,-1)
//! ```
//!
//! Offsets are integer-valued; the renderer applies its own scale and
//! timing. This module has no dependency on the search.

use ninegrid_kernel::board::{Pos, SIDE};

/// Unit-grid offset of a cell: `(column - 1, 1 - row)`.
///
/// Positions outside `0..9` clamp to the center cell.
#[must_use]
pub fn cell_offset(pos: Pos) -> (i8, i8) {
    if usize::from(pos) >= SIDE * SIDE {
        return (0, 0);
    }
    let row = i8::try_from(usize::from(pos) / SIDE).unwrap_or(1);
    let col = i8::try_from(usize::from(pos) % SIDE).unwrap_or(1);
    (col - 1, 1 - row)
}

/// Unit translation a tile at `mv` travels to reach the blank cell at
/// `blank`: the vector the animator interpolates over one step.
#[must_use]
pub fn slide_vector(mv: Pos, blank: Pos) -> (i8, i8) {
    let (tile_x, tile_y) = cell_offset(mv);
    let (blank_x, blank_y) = cell_offset(blank);
    (blank_x - tile_x, blank_y - tile_y)
}
