//! Handoff and persistence locks: the surfaces the surrounding application
//! consumes.

use ninegrid_harness::grid::{cell_offset, slide_vector};
use ninegrid_harness::run_dir::{read_run_dir, write_run_dir};
use ninegrid_harness::runner::run;

#[test]
fn run_output_plays_back_to_goal() {
    let output = run(&[2, 4, 0, 7, 5, 3, 1, 6, 8]).unwrap();
    let solution = &output.solution;
    assert_eq!(solution.len(), usize::try_from(output.report.solution_length).unwrap());

    let frames: Vec<_> = solution.playback().collect();
    assert_eq!(frames.len(), solution.len());
    assert!(frames.last().unwrap().board.is_goal());
    assert_eq!(frames.last().unwrap().board, solution.final_board());
}

#[test]
fn playback_frames_give_unit_slide_vectors() {
    // Each frame's tile slides exactly one grid unit into the blank cell.
    let output = run(&[4, 1, 3, 6, 5, 8, 7, 2, 0]).unwrap();
    let mut blank = output.solution.initial().blank();
    for frame in output.solution.playback() {
        let (dx, dy) = slide_vector(frame.mv, blank);
        assert_eq!(dx.abs() + dy.abs(), 1);
        blank = frame.mv;
    }
}

#[test]
fn grid_offsets_cover_the_unit_square() {
    let mut offsets: Vec<(i8, i8)> = (0..9u8).map(cell_offset).collect();
    offsets.sort_unstable();
    offsets.dedup();
    assert_eq!(offsets.len(), 9);
    for (x, y) in offsets {
        assert!((-1..=1).contains(&x));
        assert!((-1..=1).contains(&y));
    }
}

#[test]
fn run_dir_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&[5, 2, 3, 1, 4, 8, 0, 6, 7]).unwrap();
    write_run_dir(dir.path(), &output).unwrap();

    let reread = read_run_dir(dir.path()).unwrap();
    assert_eq!(reread.solution, output.solution);
    assert_eq!(reread.report, output.report);
}

#[test]
fn written_artifacts_carry_their_schema_versions() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&[1, 0, 3, 4, 2, 5, 6, 7, 8]).unwrap();
    write_run_dir(dir.path(), &output).unwrap();

    let solution: serde_json::Value =
        serde_json::from_slice(&std::fs::read(dir.path().join("solution.json")).unwrap()).unwrap();
    assert_eq!(solution["schema_version"], "solution_v1");
    assert_eq!(
        solution["initial_board"],
        serde_json::json!([1, 0, 3, 4, 2, 5, 6, 7, 8])
    );
    assert_eq!(solution["moves"], serde_json::json!([4]));

    let report: serde_json::Value =
        serde_json::from_slice(&std::fs::read(dir.path().join("search_report.json")).unwrap())
            .unwrap();
    assert_eq!(report["schema_version"], "search_report_v1");
    assert_eq!(report["solution_length"], 1);

    let digest = std::fs::read_to_string(dir.path().join("run_digest.txt")).unwrap();
    assert!(digest.starts_with("sha256:"));
}
