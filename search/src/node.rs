//! Core search node type.

use ninegrid_kernel::board::{Board, Pos};

/// An immutable node in the search tree.
///
/// Created exactly once (the root directly from a board, every other node
/// by applying one move to its parent) and never mutated afterwards. Each
/// node owns its board snapshot and its own copy of the move path; the
/// parent/child relationship exists only transiently during generation, so
/// no node holds a reference to its parent.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Full board snapshot at this node.
    pub board: Board,
    /// The blank's position, carried explicitly so no board scan is ever
    /// needed after root creation.
    pub blank: Pos,
    /// The blank's position in the parent node (`None` for the root).
    /// Consulted by expansion to forbid the immediate reverse move.
    pub parent_blank: Option<Pos>,
    /// Tree depth (root = 0); equals `path.len()`.
    pub depth: u32,
    /// Blank destinations applied from the root to reach this node, in order.
    pub path: Vec<Pos>,
}

impl SearchNode {
    /// Build the root node for a board. The only place the blank position is
    /// derived by scanning.
    #[must_use]
    pub fn root(board: Board) -> Self {
        let blank = board.blank();
        Self {
            board,
            blank,
            parent_blank: None,
            depth: 0,
            path: Vec::new(),
        }
    }
}
