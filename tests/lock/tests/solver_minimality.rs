//! Minimality locks: solver answers cross-checked against an independent
//! breadth-first oracle.

use lock_tests::{bfs_optimal_length, scramble};
use ninegrid_kernel::board::{Board, Pos};
use ninegrid_kernel::moves::apply_move;
use ninegrid_search::driver::solve;

fn replay(board: &Board, moves: &[Pos]) -> Board {
    let mut current = board.clone();
    let mut blank = current.blank();
    for &mv in moves {
        current = apply_move(&current, blank, mv).unwrap();
        blank = mv;
    }
    current
}

#[test]
fn scrambles_solve_minimally_and_replay_to_goal() {
    let walks: &[&[Pos]] = &[
        &[1, 0, 3, 6, 7, 4, 5, 8],
        &[3, 0, 1, 4, 7, 6, 3, 4, 5, 2],
        &[5, 2, 1, 4, 3, 0, 1, 2, 5, 8, 7, 6],
        &[7, 8, 5, 4, 1, 0, 3, 6, 7, 4, 5, 2, 1, 0],
    ];
    for walk in walks {
        let board = scramble(walk);
        let optimal = bfs_optimal_length(&board).expect("scrambles are solvable");
        assert!(
            optimal <= walk.len() as u32,
            "a scramble walk bounds the distance"
        );

        let result = solve(&board).unwrap();
        assert_eq!(
            result.moves.len() as u32,
            optimal,
            "walk {walk:?}: solver must match the oracle length"
        );
        assert!(replay(&board, &result.moves).is_goal(), "walk {walk:?}");
    }
}

// The 26-move instance the animation layer ships with. The deepest lock in
// the suite; the deepening passes revisit millions of nodes.
#[test]
fn worked_example_solves_minimally() {
    let board = Board::from_cells([3, 5, 4, 8, 1, 2, 7, 6, 0]).unwrap();
    let optimal = bfs_optimal_length(&board).expect("example is solvable");
    assert_eq!(optimal, 26);

    let result = solve(&board).unwrap();
    assert_eq!(result.moves.len() as u32, optimal);
    assert!(replay(&board, &result.moves).is_goal());
    assert_eq!(result.report.final_depth_limit, 26);
    assert_eq!(result.report.passes_run, 27);
}
