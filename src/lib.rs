//! FEN to SVG chess diagram renderer
//!
//! Parses the board-placement field of a FEN string into a [`Board`] and
//! renders it as a standalone 800x800 SVG document. Usable natively as a
//! library and from JavaScript through the WASM bindings in [`api`].

pub mod models;
pub mod parse;
pub mod renderers;
pub mod api;

// Re-export commonly used types
pub use models::{Board, Color, Piece, PieceKind};
pub use parse::{parse_fen, FenError};
pub use renderers::render_board;

use wasm_bindgen::prelude::*;

/// Parse a FEN placement and render it; nothing is rendered on error
pub fn fen_to_svg(fen: &str) -> Result<String, FenError> {
    let board = parse_fen(fen)?;
    log::info!("rendering board {}", board);
    Ok(render_board(&board))
}

/// Pretty-printed JSON of a board (8x8 array of piece codes)
pub fn board_to_json(board: &Board) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(board)
}

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            web_sys::console::warn_1(&format!("logger already initialized: {}", e).into());
        }
    }

    log::info!("FEN to SVG WASM module initialized");
}
