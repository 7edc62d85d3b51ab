//! WASM build test
//!
//! Checks that the exported JavaScript API works in a browser.

#![cfg(target_arch = "wasm32")]

use fen_svg::api::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

#[wasm_bindgen_test]
fn test_render_fen() {
    let svg = render_fen(START).unwrap();
    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains("<use xlink:href=\"#white-king\" x=\"400\" y=\"700\"/>"));
}

#[wasm_bindgen_test]
fn test_render_fen_ignores_trailing_newline() {
    assert_eq!(render_fen("8/8/8/8/8/8/8/8\n").unwrap(), render_fen("8/8/8/8/8/8/8/8").unwrap());
}

#[wasm_bindgen_test]
fn test_render_fen_throws_on_malformed_input() {
    let err = render_fen("8/8/8").unwrap_err();
    let err: js_sys::Error = err.into();
    let message: String = err.message().into();
    assert!(message.contains("expected 8 ranks, found 3"));
}

#[wasm_bindgen_test]
fn test_parse_then_render_board() {
    let board = parse_fen(START).unwrap();
    assert_eq!(board_to_fen(board.clone()).unwrap(), START);
    assert_eq!(render_board(board).unwrap(), render_fen(START).unwrap());
}

#[wasm_bindgen_test]
fn test_render_board_rejects_bad_shape() {
    assert!(render_board(JsValue::from_str("not a board")).is_err());
}

#[wasm_bindgen_test]
fn test_export_board_json() {
    let json = export_board_json(START).unwrap();
    assert!(json.contains("\"r\""));
}
