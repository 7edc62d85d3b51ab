//! Export operations for the WASM API
//!
//! - SVG: board diagram from a FEN placement or a board array
//! - FEN: canonical placement string for a board array
//! - JSON: parsed board for inspection/debugging

use wasm_bindgen::prelude::*;
use crate::api::helpers::{deserialize, serialize, to_js_error};
use crate::models::Board;
use crate::{wasm_info, wasm_log};

// ============================================================================
// SVG Export
// ============================================================================

/// Render a FEN board-placement field as an SVG document
///
/// Trailing whitespace (e.g. a newline from a text field or file) is
/// ignored; anything else malformed throws an `Error` with the parse message.
#[wasm_bindgen(js_name = renderFen)]
pub fn render_fen(fen: &str) -> Result<String, JsValue> {
    wasm_info!("renderFen called");

    let svg = crate::fen_to_svg(fen.trim_end()).map_err(to_js_error)?;

    wasm_info!("  SVG generated: {} bytes", svg.len());
    Ok(svg)
}

/// Render a board given as an 8x8 array of piece codes ("" for empty)
#[wasm_bindgen(js_name = renderBoard)]
pub fn render_board(board: JsValue) -> Result<String, JsValue> {
    wasm_info!("renderBoard called");

    let board: Board = deserialize(board, "Invalid board")?;
    wasm_log!("  Board: {}", board);

    Ok(crate::renderers::render_board(&board))
}

// ============================================================================
// Board Conversion
// ============================================================================

/// Parse a FEN placement into an 8x8 array of piece codes
#[wasm_bindgen(js_name = parseFen)]
pub fn parse_fen(fen: &str) -> Result<JsValue, JsValue> {
    wasm_info!("parseFen called");

    let board = crate::parse::parse_fen(fen.trim_end()).map_err(to_js_error)?;
    wasm_log!("  {} pieces on board", board.pieces().count());

    serialize(&board, "Board serialization error")
}

/// Canonical FEN placement for an 8x8 board array
#[wasm_bindgen(js_name = boardToFen)]
pub fn board_to_fen(board: JsValue) -> Result<String, JsValue> {
    let board: Board = deserialize(board, "Invalid board")?;
    Ok(board.to_fen())
}

/// Parse a FEN placement and return the board as pretty-printed JSON
#[wasm_bindgen(js_name = exportBoardJson)]
pub fn export_board_json(fen: &str) -> Result<String, JsValue> {
    wasm_info!("exportBoardJson called");

    let board = crate::parse::parse_fen(fen.trim_end()).map_err(to_js_error)?;
    let json = crate::board_to_json(&board).map_err(to_js_error)?;

    wasm_info!("  Board JSON generated: {} bytes", json.len());
    Ok(json)
}
