//! Chess piece identifiers
//!
//! A piece is a (color, kind) pair. FEN encodes both in a single character:
//! the letter picks the kind, the case picks the color.

use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};
use std::fmt;

/// Side a piece belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// Uppercase FEN letters
    White,
    /// Lowercase FEN letters
    Black,
}

impl Color {
    /// Name used as the prefix of glyph ids in the SVG definitions
    pub fn name(&self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

/// Piece type, independent of color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All kinds, in the order their glyphs are defined
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Id of the base (unfilled) glyph for this kind
    pub fn name(&self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }

    /// Lowercase FEN letter
    fn letter(&self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

/// A colored piece occupying a board cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

/// FEN character -> piece lookup table
const FEN_PIECES: [(char, Piece); 12] = [
    ('P', Piece::new(Color::White, PieceKind::Pawn)),
    ('N', Piece::new(Color::White, PieceKind::Knight)),
    ('B', Piece::new(Color::White, PieceKind::Bishop)),
    ('R', Piece::new(Color::White, PieceKind::Rook)),
    ('Q', Piece::new(Color::White, PieceKind::Queen)),
    ('K', Piece::new(Color::White, PieceKind::King)),
    ('p', Piece::new(Color::Black, PieceKind::Pawn)),
    ('n', Piece::new(Color::Black, PieceKind::Knight)),
    ('b', Piece::new(Color::Black, PieceKind::Bishop)),
    ('r', Piece::new(Color::Black, PieceKind::Rook)),
    ('q', Piece::new(Color::Black, PieceKind::Queen)),
    ('k', Piece::new(Color::Black, PieceKind::King)),
];

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Look up the piece for a FEN character (`pnbrqkPNBRQK`)
    pub fn from_fen_char(c: char) -> Option<Piece> {
        FEN_PIECES
            .iter()
            .find(|(code, _)| *code == c)
            .map(|(_, piece)| *piece)
    }

    /// FEN character for this piece
    pub fn fen_char(&self) -> char {
        let letter = self.kind.letter();
        match self.color {
            Color::White => letter.to_ascii_uppercase(),
            Color::Black => letter,
        }
    }

    /// Id of the filled glyph variant, e.g. `white-pawn` or `black-queen`
    pub fn glyph_id(&self) -> String {
        format!("{}-{}", self.color.name(), self.kind.name())
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

impl Serialize for Piece {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Piece {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        let mut chars = code.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Piece::from_fen_char(c)
                .ok_or_else(|| de::Error::custom(format!("unknown piece code '{}'", c))),
            _ => Err(de::Error::custom(format!(
                "piece code must be a single character, got \"{}\"",
                code
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_all_twelve_codes() {
        for c in "pnbrqkPNBRQK".chars() {
            let piece = Piece::from_fen_char(c).expect("piece code should be known");
            assert_eq!(piece.fen_char(), c);
        }
    }

    #[test]
    fn test_case_selects_color() {
        assert_eq!(
            Piece::from_fen_char('Q'),
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
        assert_eq!(
            Piece::from_fen_char('q'),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
    }

    #[test]
    fn test_unknown_characters_rejected() {
        for c in ['x', 'a', 'Z', '1', ' ', '/'] {
            assert_eq!(Piece::from_fen_char(c), None, "'{}' is not a piece", c);
        }
    }

    #[test]
    fn test_glyph_ids() {
        assert_eq!(Piece::from_fen_char('P').unwrap().glyph_id(), "white-pawn");
        assert_eq!(Piece::from_fen_char('n').unwrap().glyph_id(), "black-knight");
        assert_eq!(Piece::from_fen_char('K').unwrap().glyph_id(), "white-king");
    }

    #[test]
    fn test_serde_uses_fen_code() {
        let piece = Piece::new(Color::Black, PieceKind::Rook);
        assert_eq!(serde_json::to_string(&piece).unwrap(), "\"r\"");

        let back: Piece = serde_json::from_str("\"N\"").unwrap();
        assert_eq!(back, Piece::new(Color::White, PieceKind::Knight));

        assert!(serde_json::from_str::<Piece>("\"x\"").is_err());
        assert!(serde_json::from_str::<Piece>("\"pp\"").is_err());
    }
}
