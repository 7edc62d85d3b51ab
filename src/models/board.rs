//! Board model
//!
//! Rank 0 is the first rank written in FEN (chess rank 8), rank 7 the last
//! (chess rank 1). Files run left to right, 0 through 7.

use super::piece::Piece;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;

pub const BOARD_SIZE: usize = 8;

/// One rank of cells; `None` is an empty square
pub type Rank = [Option<Piece>; BOARD_SIZE];

/// An 8x8 grid of cells, immutable once built
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    ranks: [Rank; BOARD_SIZE],
}

impl Board {
    /// Board with no pieces on it
    pub fn empty() -> Self {
        Self {
            ranks: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn from_ranks(ranks: [Rank; BOARD_SIZE]) -> Self {
        Self { ranks }
    }

    /// Piece on (rank, file), `None` if empty or out of range
    pub fn piece_at(&self, rank: usize, file: usize) -> Option<Piece> {
        self.ranks.get(rank)?.get(file).copied().flatten()
    }

    pub fn ranks(&self) -> impl Iterator<Item = &Rank> {
        self.ranks.iter()
    }

    /// Occupied cells as (rank, file, piece), rank-major with files ascending
    pub fn pieces(&self) -> impl Iterator<Item = (usize, usize, Piece)> + '_ {
        self.ranks.iter().enumerate().flat_map(|(rank, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(file, cell)| cell.map(|piece| (rank, file, piece)))
        })
    }

    /// Canonical FEN board-placement field, empty runs collapsed to one digit
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();
        for (index, rank) in self.ranks.iter().enumerate() {
            if index > 0 {
                fen.push('/');
            }
            let mut empty_run = 0u8;
            for cell in rank {
                match cell {
                    Some(piece) => {
                        if empty_run > 0 {
                            fen.push(char::from(b'0' + empty_run));
                            empty_run = 0;
                        }
                        fen.push(piece.fen_char());
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                fen.push(char::from(b'0' + empty_run));
            }
        }
        fen
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fen())
    }
}

/// Serialized as an 8x8 array of strings: "" for empty, the FEN code otherwise
impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(BOARD_SIZE))?;
        for rank in &self.ranks {
            let cells: Vec<String> = rank
                .iter()
                .map(|cell| cell.map(|piece| piece.fen_char().to_string()).unwrap_or_default())
                .collect();
            seq.serialize_element(&cells)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<String>>::deserialize(deserializer)?;
        if rows.len() != BOARD_SIZE {
            return Err(de::Error::invalid_length(rows.len(), &"8 ranks"));
        }

        let mut ranks = [[None; BOARD_SIZE]; BOARD_SIZE];
        for (rank, row) in ranks.iter_mut().zip(&rows) {
            if row.len() != BOARD_SIZE {
                return Err(de::Error::invalid_length(row.len(), &"8 cells per rank"));
            }
            for (cell, code) in rank.iter_mut().zip(row) {
                *cell = parse_cell(code).map_err(de::Error::custom)?;
            }
        }
        Ok(Board { ranks })
    }
}

fn parse_cell(code: &str) -> Result<Option<Piece>, String> {
    let mut chars = code.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Ok(None),
        (Some(c), None) => Piece::from_fen_char(c)
            .map(Some)
            .ok_or_else(|| format!("unknown piece code '{}'", c)),
        _ => Err(format!("invalid cell \"{}\"", code)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::piece::{Color, PieceKind};

    fn board_with_kings() -> Board {
        let mut ranks = [[None; BOARD_SIZE]; BOARD_SIZE];
        ranks[0][4] = Some(Piece::new(Color::Black, PieceKind::King));
        ranks[7][4] = Some(Piece::new(Color::White, PieceKind::King));
        Board::from_ranks(ranks)
    }

    #[test]
    fn test_empty_board_fen() {
        assert_eq!(Board::empty().to_fen(), "8/8/8/8/8/8/8/8");
    }

    #[test]
    fn test_to_fen_collapses_runs() {
        assert_eq!(board_with_kings().to_fen(), "4k3/8/8/8/8/8/8/4K3");
    }

    #[test]
    fn test_piece_at_bounds() {
        let board = board_with_kings();
        assert_eq!(
            board.piece_at(7, 4),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(board.piece_at(7, 3), None);
        assert_eq!(board.piece_at(8, 0), None);
        assert_eq!(board.piece_at(0, 8), None);
    }

    #[test]
    fn test_pieces_iterates_rank_major() {
        let found: Vec<_> = board_with_kings()
            .pieces()
            .map(|(rank, file, piece)| (rank, file, piece.fen_char()))
            .collect();
        assert_eq!(found, vec![(0, 4, 'k'), (7, 4, 'K')]);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(board_with_kings()).unwrap();
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0][4], "k");
        assert_eq!(rows[0][0], "");
        assert_eq!(rows[7][4], "K");
    }

    #[test]
    fn test_json_round_trip() {
        let board = board_with_kings();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }

    #[test]
    fn test_json_rejects_bad_shapes() {
        let seven_ranks = serde_json::to_string(&vec![vec![""; 8]; 7]).unwrap();
        assert!(serde_json::from_str::<Board>(&seven_ranks).is_err());

        let short_rank = serde_json::to_string(&vec![vec![""; 7]; 8]).unwrap();
        assert!(serde_json::from_str::<Board>(&short_rank).is_err());

        let mut bad_cell = vec![vec![""; 8]; 8];
        bad_cell[3][3] = "x";
        let bad_cell = serde_json::to_string(&bad_cell).unwrap();
        assert!(serde_json::from_str::<Board>(&bad_cell).is_err());
    }
}
