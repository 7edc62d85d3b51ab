//! SVG document generation
//!
//! `SvgDocumentBuilder` accumulates the document in a single buffer, in
//! the fixed order preamble, definitions, squares, pieces, closing tag.

use crate::models::Piece;
use super::elements::{definitions, square_id, use_at};

pub const PREAMBLE: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#,
    r#"<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">"#,
    r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" version="1.1" width="800" height="800">"#,
);

pub const CLOSING: &str = "</svg>";

/// State machine for building board SVG documents
pub struct SvgDocumentBuilder {
    buffer: String,
    squares: usize,
    pieces: usize,
}

impl SvgDocumentBuilder {
    /// Start a new document with the XML preamble already written
    pub fn new() -> Self {
        Self {
            buffer: String::from(PREAMBLE),
            squares: 0,
            pieces: 0,
        }
    }

    /// Write the shared `<defs>` block
    pub fn write_definitions(&mut self) {
        self.buffer.push_str(definitions());
    }

    /// Place the light or dark square for (file, rank)
    pub fn write_square(&mut self, file: usize, rank: usize) {
        self.buffer.push_str(&use_at(square_id(file, rank), file, rank));
        self.squares += 1;
    }

    /// Place a piece glyph on (file, rank)
    pub fn write_piece(&mut self, piece: Piece, file: usize, rank: usize) {
        self.buffer.push_str(&use_at(&piece.glyph_id(), file, rank));
        self.pieces += 1;
    }

    /// Close the document and return its markup
    pub fn finalize(mut self) -> String {
        self.buffer.push_str(CLOSING);
        log::debug!(
            "SVG document finalized: {} squares, {} pieces, {} bytes",
            self.squares,
            self.pieces,
            self.buffer.len()
        );
        self.buffer
    }
}

impl Default for SvgDocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
