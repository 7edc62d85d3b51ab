//! SVG rendering output
//!
//! Renders a [`Board`] as a self-contained 800x800 SVG 1.1 document. The
//! output is a pure function of the board: same board, same bytes.

pub mod document;
pub mod elements;
pub mod glyphs;

pub use document::SvgDocumentBuilder;
pub use elements::definitions;

use crate::models::{Board, BOARD_SIZE};

/// Render a board: definitions, 64 squares, then one `<use>` per piece
pub fn render_board(board: &Board) -> String {
    let mut builder = SvgDocumentBuilder::new();
    builder.write_definitions();

    for rank in 0..BOARD_SIZE {
        for file in 0..BOARD_SIZE {
            builder.write_square(file, rank);
        }
    }

    for (rank, file, piece) in board.pieces() {
        builder.write_piece(piece, file, rank);
    }

    builder.finalize()
}
