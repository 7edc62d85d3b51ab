//! Renderers module
//!
//! This module contains the logic for turning a parsed board into
//! output documents.

pub mod svg;

pub use svg::render_board;
