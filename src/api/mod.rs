//! FEN to SVG WASM API
//!
//! JavaScript-facing functions, organized as:
//!
//! - `helpers`: console logging, serde conversion and error handling
//! - `export`: SVG/FEN/JSON export operations

pub mod helpers;
pub mod export;

pub use export::{render_fen, render_board, parse_fen, board_to_fen, export_board_json};
