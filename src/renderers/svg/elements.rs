//! SVG element rendering
//!
//! Markup for the `<defs>` block (squares, hatch pattern, piece glyphs and
//! their color variants) and for `<use>` placements on the 100-unit grid.

use once_cell::sync::Lazy;

use crate::models::{Color, PieceKind};
use super::glyphs::glyph;

/// Side of one board square in SVG user units
pub const SQUARE_SIZE: usize = 100;

pub const WHITE_SQUARE_ID: &str = "white-square";
pub const BLACK_SQUARE_ID: &str = "black-square";
pub const BLACK_FILL_ID: &str = "black-fill";

/// Hatch lines step 5 units apart across the 100-unit tile
const HATCH_STEP: usize = 5;

/// `<line>` with zero-valued coordinates left off
pub fn line(x1: usize, y1: usize, x2: usize, y2: usize) -> String {
    let mut out = String::from("<line ");
    if x1 != 0 {
        out.push_str(&format!("x1=\"{}\" ", x1));
    }
    if y1 != 0 {
        out.push_str(&format!("y1=\"{}\" ", y1));
    }
    if x2 != 0 {
        out.push_str(&format!("x2=\"{}\" ", x2));
    }
    if y2 != 0 {
        out.push_str(&format!("y2=\"{}\"", y2));
    }
    out.push_str("/>");
    out
}

/// `<use>` of a defined element at grid position (file, rank)
///
/// A zero offset is omitted since it is the default origin.
pub fn use_at(href: &str, file: usize, rank: usize) -> String {
    let mut out = format!("<use xlink:href=\"#{}\"", href);
    if file != 0 {
        out.push_str(&format!(" x=\"{}\"", file * SQUARE_SIZE));
    }
    if rank != 0 {
        out.push_str(&format!(" y=\"{}\"", rank * SQUARE_SIZE));
    }
    out.push_str("/>");
    out
}

/// Light when `file + rank` is even
pub fn square_id(file: usize, rank: usize) -> &'static str {
    if (file + rank) % 2 == 0 {
        WHITE_SQUARE_ID
    } else {
        BLACK_SQUARE_ID
    }
}

/// Multiples of the hatch step strictly inside the tile: 5, 10, ..., 95
fn hatch_offsets() -> impl DoubleEndedIterator<Item = usize> {
    (1..SQUARE_SIZE / HATCH_STEP).map(|n| n * HATCH_STEP)
}

pub fn white_square() -> String {
    format!(
        "<g id=\"{}\"><rect width=\"{size}\" height=\"{size}\" style=\"fill:#fff\"/></g>",
        WHITE_SQUARE_ID,
        size = SQUARE_SIZE
    )
}

/// White square with 39 hatch lines running top-left to bottom-right
pub fn black_square() -> String {
    let size = SQUARE_SIZE;
    let mut out = format!(
        "<g id=\"{}\" style=\"stroke:#000\"><use xlink:href=\"#{}\"/>",
        BLACK_SQUARE_ID, WHITE_SQUARE_ID
    );
    for i in hatch_offsets().rev() {
        out.push_str(&line(i, 0, size, size - i));
    }
    out.push_str(&line(0, 0, size, size));
    for i in hatch_offsets() {
        out.push_str(&line(0, i, size - i, size));
    }
    out.push_str("</g>");
    out
}

/// Tileable hatch used as the fill of black pieces
///
/// Same 39-line hatch as the black square, but running bottom-left to
/// top-right and packaged as a `<pattern>`.
pub fn black_fill_pattern() -> String {
    let size = SQUARE_SIZE;
    let mut out = format!(
        "<pattern id=\"{}\" patternUnits=\"userSpaceOnUse\" width=\"{size}\" height=\"{size}\">\
         <g style=\"fill:#fff;stroke:#000;stroke-width:2\"><use xlink:href=\"#{}\"/>",
        BLACK_FILL_ID,
        WHITE_SQUARE_ID,
        size = size
    );
    for i in hatch_offsets() {
        out.push_str(&line(0, i, i, 0));
    }
    out.push_str(&line(0, size, size, 0));
    for i in hatch_offsets() {
        out.push_str(&line(i, size, size, i));
    }
    out.push_str("</g></pattern>");
    out
}

/// Fill applied to the base glyph for a color
fn variant_fill(color: Color) -> String {
    match color {
        Color::White => "#fff".to_string(),
        Color::Black => format!("url(#{})", BLACK_FILL_ID),
    }
}

/// `<g id="white-pawn" ...>` wrapper filling a base glyph
pub fn color_variant(color: Color, kind: PieceKind) -> String {
    format!(
        "<g id=\"{}-{}\" style=\"fill:{}\"><use xlink:href=\"#{}\"/></g>",
        color.name(),
        kind.name(),
        variant_fill(color),
        kind.name()
    )
}

fn build_definitions() -> String {
    let mut defs = String::from("<defs>");
    defs.push_str(&white_square());
    defs.push_str(&black_square());
    defs.push_str(&black_fill_pattern());
    for kind in PieceKind::ALL {
        defs.push_str(glyph(kind));
    }
    for color in [Color::White, Color::Black] {
        for kind in PieceKind::ALL {
            defs.push_str(&color_variant(color, kind));
        }
    }
    defs.push_str("</defs>");
    log::debug!("built SVG definitions block ({} bytes)", defs.len());
    defs
}

static DEFINITIONS: Lazy<String> = Lazy::new(build_definitions);

/// The complete `<defs>` block; identical for every board
pub fn definitions() -> &'static str {
    DEFINITIONS.as_str()
}
