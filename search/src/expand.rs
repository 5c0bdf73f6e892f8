//! Child expansion with parent-move pruning.

use ninegrid_kernel::moves::{apply_move, neighbors};

use crate::error::SolveError;
use crate::node::SearchNode;

/// Generate the children of `node`, in forward (ascending) adjacency order.
///
/// For each neighbor of the blank, the single neighbor equal to
/// `parent_blank` is skipped: the move that would exactly undo the move
/// which produced this node. That is the only pruning rule; arbitrary
/// revisits are allowed and intentionally not deduplicated.
///
/// The driver consumes the returned children through a LIFO stack, so the
/// effective visitation order among siblings is the reverse of this
/// generation order. That pairing is a reproducibility contract: it fixes
/// which of several minimal solutions is returned.
///
/// # Errors
///
/// Returns [`SolveError::InvariantViolation`] if move application rejects a
/// destination drawn from the adjacency table. Unreachable absent a defect.
pub fn expand(node: &SearchNode) -> Result<Vec<SearchNode>, SolveError> {
    let row = neighbors(node.blank);
    let mut children = Vec::with_capacity(row.len());
    for &destination in row {
        if node.parent_blank == Some(destination) {
            continue;
        }
        let board = apply_move(&node.board, node.blank, destination).map_err(|err| {
            SolveError::InvariantViolation {
                detail: format!("generator proposed an illegal move: {err}"),
            }
        })?;
        let mut path = node.path.clone();
        path.push(destination);
        children.push(SearchNode {
            board,
            blank: destination,
            parent_blank: Some(node.blank),
            depth: node.depth + 1,
            path,
        });
    }
    Ok(children)
}
