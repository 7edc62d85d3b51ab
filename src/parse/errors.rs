//! Error types for FEN parsing
//!
//! Every variant keeps the full input string so the message is enough to
//! diagnose the problem without the caller's context.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    /// Input did not split into exactly 8 `/`-separated ranks
    #[error("Malformed FEN string (expected 8 ranks, found {found}): {fen}")]
    InvalidRankCount { found: usize, fen: String },

    /// A rank contained something other than `1`-`8` or `pnbrqkPNBRQK`
    #[error("Malformed FEN string (unexpected character {character}): {fen}")]
    InvalidCharacter { character: char, fen: String },

    /// A rank expanded to a number of cells other than 8
    #[error("Malformed FEN string (rank \"{rank}\" is not eight files long): {fen}")]
    InvalidRankLength {
        rank: String,
        files: usize,
        fen: String,
    },
}
