//! End-to-end runner: validate → solve → verify.
//!
//! The runner is the single entry point the surrounding application calls.
//! It owns the ordering the error taxonomy promises: board validation and
//! the solvability check happen before any search pass, and the solver's
//! output is replay-verified before it is handed to anyone.

use ninegrid_kernel::board::Board;
use ninegrid_search::driver::solve_with_policy;
use ninegrid_search::error::SolveError;
use ninegrid_search::policy::SearchPolicy;
use ninegrid_search::report::SearchReportV1;

use crate::solution::{ReplayError, SolutionV1};

/// Everything one run produces: the verified solution and the search report.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub solution: SolutionV1,
    pub report: SearchReportV1,
}

/// Error during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// Board validation or search failed.
    Solve(SolveError),
    /// The solver's own output failed replay verification. A defect: solver
    /// output always replays to the goal.
    Replay(ReplayError),
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Solve(err) => write!(f, "solve failed: {err}"),
            Self::Replay(err) => write!(f, "solver output failed replay: {err}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Solve(err) => Some(err),
            Self::Replay(err) => Some(err),
        }
    }
}

impl From<SolveError> for RunError {
    fn from(err: SolveError) -> Self {
        Self::Solve(err)
    }
}

impl From<ReplayError> for RunError {
    fn from(err: ReplayError) -> Self {
        Self::Replay(err)
    }
}

/// Run the full pipeline on raw cells with the default policy.
///
/// # Errors
///
/// See [`run_with_policy`].
pub fn run(cells: &[u8]) -> Result<RunOutput, RunError> {
    run_with_policy(cells, &SearchPolicy::default())
}

/// Run the full pipeline: validate the board, solve it, replay-verify the
/// move sequence, and pair it with the search report.
///
/// # Errors
///
/// Returns [`RunError::Solve`] for invalid, unsolvable, or budget-exhausted
/// boards, and [`RunError::Replay`] if the solver's output fails replay
/// (a defect, not an input condition).
pub fn run_with_policy(cells: &[u8], policy: &SearchPolicy) -> Result<RunOutput, RunError> {
    let board = Board::from_slice(cells).map_err(SolveError::from)?;
    let result = solve_with_policy(&board, policy)?;
    let solution = SolutionV1::new(board, result.moves)?;
    Ok(RunOutput {
        solution,
        report: result.report,
    })
}
