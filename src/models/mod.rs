//! Models module
//!
//! Pieces and the 8x8 board they sit on.

pub mod piece;
pub mod board;

// Re-export commonly used types
pub use piece::{Color, Piece, PieceKind};
pub use board::{Board, Rank, BOARD_SIZE};
