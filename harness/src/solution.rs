//! `SolutionV1`: replay-verified move sequence with playback frames.
//!
//! Construction verifies the sequence by deterministic replay: every move
//! must name a cell adjacent to the current blank, and the final board must
//! be the goal. The replayed board states are kept, so playback downstream
//! is pure iteration with no failure path; the animation loop never has to
//! handle a malformed solution mid-flight.

use ninegrid_kernel::board::{Board, Pos};
use ninegrid_kernel::moves::apply_move;

/// A verified solution: the ordered blank destinations and every board
/// state along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionV1 {
    moves: Vec<Pos>,
    /// `states[0]` is the initial board; `states[k]` is the board after
    /// move `k`. Always `moves.len() + 1` entries; the last is the goal.
    states: Vec<Board>,
}

impl SolutionV1 {
    /// Verify `moves` against `initial` by replay and build the solution.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError::IllegalMove`] at the first move that is not
    /// adjacent to the current blank, or [`ReplayError::GoalNotReached`] if
    /// the replay ends off the goal board.
    pub fn new(initial: Board, moves: Vec<Pos>) -> Result<Self, ReplayError> {
        let mut states = Vec::with_capacity(moves.len() + 1);
        let mut blank = initial.blank();
        states.push(initial);
        for (index, &destination) in moves.iter().enumerate() {
            let current = &states[index];
            let next = apply_move(current, blank, destination).map_err(|_| {
                ReplayError::IllegalMove {
                    index,
                    blank,
                    destination,
                }
            })?;
            states.push(next);
            blank = destination;
        }
        match states.last() {
            Some(last) if last.is_goal() => Ok(Self { moves, states }),
            _ => Err(ReplayError::GoalNotReached),
        }
    }

    /// The ordered blank destinations.
    #[must_use]
    pub fn moves(&self) -> &[Pos] {
        &self.moves
    }

    /// Number of moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Whether the board was already solved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The board the solution starts from.
    #[must_use]
    pub fn initial(&self) -> &Board {
        &self.states[0]
    }

    /// The board after the last move. Always the goal.
    #[must_use]
    pub fn final_board(&self) -> &Board {
        // states is never empty: it always holds at least the initial board.
        self.states.last().unwrap_or(&self.states[0])
    }

    /// Playback frames, one per move, in order. The animator interpolates
    /// each tile translation and then adopts the frame's board.
    pub fn playback(&self) -> impl Iterator<Item = PlaybackFrame<'_>> {
        self.moves
            .iter()
            .zip(self.states.iter().skip(1))
            .map(|(&mv, board)| PlaybackFrame { mv, board })
    }
}

/// One playback step: the move applied and the resulting board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackFrame<'a> {
    /// The blank's destination for this step.
    pub mv: Pos,
    /// The board after the step.
    pub board: &'a Board,
}

/// Typed failure for solution replay verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    /// A move named a cell not adjacent to the blank at that point.
    IllegalMove {
        index: usize,
        blank: Pos,
        destination: Pos,
    },
    /// The replay completed but did not end on the goal board.
    GoalNotReached,
}

impl std::fmt::Display for ReplayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalMove {
                index,
                blank,
                destination,
            } => write!(
                f,
                "move {index} names {destination}, not adjacent to blank at {blank}"
            ),
            Self::GoalNotReached => write!(f, "replay did not end on the goal board"),
        }
    }
}

impl std::error::Error for ReplayError {}
