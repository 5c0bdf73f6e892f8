//! Ninegrid Kernel: the pure board domain of the 3×3 sliding-tile solver.
//!
//! # API Surface
//!
//! The kernel exposes three concerns:
//!
//! - [`board`] -- the validated 9-cell board, the goal constant, the goal test
//! - [`moves`] -- the static adjacency table and pure move application
//! - [`parity`] -- the constant-time solvability check
//!
//! # Module Dependency Direction
//!
//! `board` ← `moves` ← `parity`
//!
//! One-way only. No cycles. `parity` depends on `board`. `moves` depends
//! on `board`. `board` depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod board;
pub mod moves;
pub mod parity;
