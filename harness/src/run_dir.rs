//! Run directory persistence: write/read/verify one run's artifacts.
//!
//! # Directory layout
//!
//! ```text
//! <dir>/
//!   solution.json        — schema version, initial board, move list
//!   search_report.json   — the SearchReportV1 JSON
//!   run_digest.txt       — ASCII digest string over both artifact files
//! ```
//!
//! The directory path is never part of the digest surface. Reading is
//! fail-closed: a missing file, unparsable artifact, or digest mismatch is a
//! hard error, never a partial result.

use std::path::Path;

use ninegrid_kernel::board::{Board, Pos};
use ninegrid_search::fingerprint::{digest, DOMAIN_RUN_DIGEST};
use ninegrid_search::report::{ReportParseError, SearchReportV1};

use crate::runner::RunOutput;
use crate::solution::{ReplayError, SolutionV1};

/// Fixed artifact filenames in the run directory.
const SOLUTION_FILENAME: &str = "solution.json";
const REPORT_FILENAME: &str = "search_report.json";
const DIGEST_FILENAME: &str = "run_digest.txt";

/// Error writing a run directory.
#[derive(Debug)]
pub enum RunDirWriteError {
    /// I/O error during write.
    Io { detail: String },
}

impl std::fmt::Display for RunDirWriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
        }
    }
}

impl std::error::Error for RunDirWriteError {}

/// Error reading a run directory.
#[derive(Debug)]
pub enum RunDirReadError {
    /// I/O error during read.
    Io { detail: String },
    /// A required file is missing.
    MissingFile { filename: String },
    /// `solution.json` failed to parse or replay.
    SolutionInvalid { detail: String },
    /// `search_report.json` failed to parse.
    ReportInvalid(ReportParseError),
    /// `run_digest.txt` does not match the recomputed digest.
    DigestMismatch { stored: String, recomputed: String },
}

impl std::fmt::Display for RunDirReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::MissingFile { filename } => write!(f, "missing file: {filename}"),
            Self::SolutionInvalid { detail } => write!(f, "invalid solution artifact: {detail}"),
            Self::ReportInvalid(err) => write!(f, "invalid report artifact: {err}"),
            Self::DigestMismatch { stored, recomputed } => {
                write!(f, "digest mismatch: stored {stored}, recomputed {recomputed}")
            }
        }
    }
}

impl std::error::Error for RunDirReadError {}

/// Serialize the solution artifact.
fn solution_json_bytes(solution: &SolutionV1) -> Vec<u8> {
    let value = serde_json::json!({
        "schema_version": "solution_v1",
        "initial_board": solution.initial().cells().to_vec(),
        "moves": solution.moves().to_vec(),
    });
    serde_json::to_vec(&value).unwrap_or_default()
}

/// Digest over both artifact byte streams, in fixed order.
fn run_digest(solution_bytes: &[u8], report_bytes: &[u8]) -> String {
    let mut data = Vec::with_capacity(solution_bytes.len() + report_bytes.len());
    data.extend_from_slice(solution_bytes);
    data.extend_from_slice(report_bytes);
    digest(DOMAIN_RUN_DIGEST, &data)
}

/// Write one run's artifacts to `dir`. The directory must already exist.
///
/// # Errors
///
/// Returns [`RunDirWriteError::Io`] on any filesystem failure.
pub fn write_run_dir(dir: &Path, output: &RunOutput) -> Result<(), RunDirWriteError> {
    let io = |e: std::io::Error| RunDirWriteError::Io {
        detail: e.to_string(),
    };
    let solution_bytes = solution_json_bytes(&output.solution);
    let report_bytes = output.report.to_json_bytes();
    let digest_line = run_digest(&solution_bytes, &report_bytes);

    std::fs::write(dir.join(SOLUTION_FILENAME), &solution_bytes).map_err(io)?;
    std::fs::write(dir.join(REPORT_FILENAME), &report_bytes).map_err(io)?;
    std::fs::write(dir.join(DIGEST_FILENAME), digest_line.as_bytes()).map_err(io)?;
    Ok(())
}

/// Read a run directory back, fail-closed.
///
/// The solution artifact is replay-verified during reconstruction, so a
/// successfully read directory always yields a goal-reaching solution.
///
/// # Errors
///
/// Returns a [`RunDirReadError`] on a missing file, a malformed artifact, a
/// solution that does not replay to the goal, or a digest mismatch.
pub fn read_run_dir(dir: &Path) -> Result<RunOutput, RunDirReadError> {
    let read_file = |filename: &str| -> Result<Vec<u8>, RunDirReadError> {
        let path = dir.join(filename);
        if !path.exists() {
            return Err(RunDirReadError::MissingFile {
                filename: filename.to_string(),
            });
        }
        std::fs::read(&path).map_err(|e| RunDirReadError::Io {
            detail: e.to_string(),
        })
    };

    let solution_bytes = read_file(SOLUTION_FILENAME)?;
    let report_bytes = read_file(REPORT_FILENAME)?;
    let digest_bytes = read_file(DIGEST_FILENAME)?;

    let stored = String::from_utf8_lossy(&digest_bytes).trim().to_string();
    let recomputed = run_digest(&solution_bytes, &report_bytes);
    if stored != recomputed {
        return Err(RunDirReadError::DigestMismatch { stored, recomputed });
    }

    let solution = parse_solution(&solution_bytes)?;
    let report = SearchReportV1::from_json_bytes(&report_bytes)
        .map_err(RunDirReadError::ReportInvalid)?;
    Ok(RunOutput { solution, report })
}

fn parse_solution(bytes: &[u8]) -> Result<SolutionV1, RunDirReadError> {
    let invalid = |detail: String| RunDirReadError::SolutionInvalid { detail };
    let value: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| invalid(e.to_string()))?;
    let version = value
        .get("schema_version")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default();
    if version != "solution_v1" {
        return Err(invalid(format!("unrecognized schema version: {version:?}")));
    }
    let cells = u8_array(&value, "initial_board").ok_or_else(|| {
        invalid("initial_board missing or mistyped".to_string())
    })?;
    let moves = u8_array(&value, "moves")
        .ok_or_else(|| invalid("moves missing or mistyped".to_string()))?;
    let board = Board::from_slice(&cells).map_err(|e| invalid(e.to_string()))?;
    SolutionV1::new(board, moves).map_err(|e: ReplayError| invalid(e.to_string()))
}

fn u8_array(value: &serde_json::Value, name: &str) -> Option<Vec<Pos>> {
    value
        .get(name)?
        .as_array()?
        .iter()
        .map(|v| v.as_u64().and_then(|n| u8::try_from(n).ok()))
        .collect()
}
