//! Content fingerprints with domain separation.
//!
//! Fingerprints bind report artifacts to the exact input they describe.
//! They are observability-only: nothing in the search reads them back.
//!
//! Algorithm: SHA-256. Result format: `"sha256:<hex_digest>"`. Each domain
//! prefix is null-terminated to prevent cross-domain collisions.

use sha2::{Digest, Sha256};

use ninegrid_kernel::board::Board;

/// Domain prefix for board fingerprints.
pub const DOMAIN_BOARD: &[u8] = b"NINEGRID::BOARD::V1\0";

/// Domain prefix for run-directory digests.
pub const DOMAIN_RUN_DIGEST: &[u8] = b"NINEGRID::RUN_DIGEST::V1\0";

/// SHA-256 over `domain || data`, rendered `"sha256:<hex>"`.
#[must_use]
pub fn digest(domain: &[u8], data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    format!("sha256:{}", hex::encode(hasher.finalize()))
}

/// Fingerprint of a board's nine cells under [`DOMAIN_BOARD`].
#[must_use]
pub fn board_fingerprint(board: &Board) -> String {
    digest(DOMAIN_BOARD, board.cells())
}
