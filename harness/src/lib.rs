//! Ninegrid Harness: the consumer-facing surface of the solver.
//!
//! The search core produces an ordered list of blank destinations; this
//! crate packages it for the animation layer and for post-hoc inspection:
//!
//! - [`solution`] -- replay-verified solution value and playback frames
//! - [`grid`] -- the static position-to-plane coordinate mapping
//! - [`runner`] -- validate → solve → verify, end to end
//! - [`run_dir`] -- fail-closed persistence of one run's artifacts
//!
//! The harness consumes the solver's output; nothing here feeds back into
//! the search.

#![forbid(unsafe_code)]

pub mod grid;
pub mod run_dir;
pub mod runner;
pub mod solution;
