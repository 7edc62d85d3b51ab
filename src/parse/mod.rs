//! Parsing module
//!
//! This module contains the logic for converting FEN text into a
//! [`Board`](crate::models::Board).

pub mod errors;
pub mod fen;

// Re-export commonly used types
pub use errors::FenError;
pub use fen::parse_fen;
