//! Typed solve errors.
//!
//! `SolveError` splits into pre-flight rejections (`InvalidBoard`,
//! `Unsolvable`) returned before any search pass runs, and defect signals
//! (`InvariantViolation`, `DepthBudgetExhausted`) that indicate a programming
//! error rather than bad input. There is no recoverable middle ground and no
//! retry path.

use ninegrid_kernel::board::BoardError;

/// Typed failure for the solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The input is not a permutation of 0..=8. Rejected before search.
    InvalidBoard(BoardError),
    /// The board's inversion parity is incompatible with the goal.
    /// Rejected before search; searching would deepen forever.
    Unsolvable { inversions: usize },
    /// The deepening loop hit the policy depth budget without a solution.
    /// Unreachable for a validated solvable board: every solvable 3×3
    /// board is within 31 moves of the goal.
    DepthBudgetExhausted { max_depth: u32 },
    /// Internal contract breach: an illegal destination was proposed or the
    /// pending stack underflowed. Indicates a defect, not a user error.
    InvariantViolation { detail: String },
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBoard(err) => write!(f, "invalid board: {err}"),
            Self::Unsolvable { inversions } => {
                write!(
                    f,
                    "board is unsolvable: {inversions} inversions (odd parity)"
                )
            }
            Self::DepthBudgetExhausted { max_depth } => {
                write!(f, "no solution within depth budget {max_depth}")
            }
            Self::InvariantViolation { detail } => {
                write!(f, "search invariant violation: {detail}")
            }
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidBoard(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BoardError> for SolveError {
    fn from(err: BoardError) -> Self {
        Self::InvalidBoard(err)
    }
}
