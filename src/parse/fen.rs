//! FEN board-placement parser
//!
//! Only the first FEN field is understood: eight `/`-separated ranks, each a
//! run of piece letters and single-digit empty-square counts.

use std::str::FromStr;

use crate::models::{Board, Piece, Rank, BOARD_SIZE};
use super::errors::FenError;

/// Parse a FEN board-placement field into a [`Board`]
///
/// Ranks are validated in order. Within a rank every character is checked
/// before the rank's length, so `"88x"` is reported as an unexpected
/// character rather than an overlong rank.
pub fn parse_fen(fen: &str) -> Result<Board, FenError> {
    log::debug!("parse_fen('{}')", fen);

    let segments: Vec<&str> = fen.split('/').collect();
    if segments.len() != BOARD_SIZE {
        log::warn!("FEN has {} ranks, expected {}", segments.len(), BOARD_SIZE);
        return Err(FenError::InvalidRankCount {
            found: segments.len(),
            fen: fen.to_string(),
        });
    }

    let mut ranks = [[None; BOARD_SIZE]; BOARD_SIZE];
    for (rank, segment) in ranks.iter_mut().zip(segments) {
        *rank = parse_rank(segment, fen)?;
    }

    Ok(Board::from_ranks(ranks))
}

/// Expand one rank segment into its 8 cells
fn parse_rank(segment: &str, fen: &str) -> Result<Rank, FenError> {
    let mut cells: Vec<Option<Piece>> = Vec::with_capacity(BOARD_SIZE);

    for c in segment.chars() {
        if let Some(piece) = Piece::from_fen_char(c) {
            cells.push(Some(piece));
            continue;
        }

        // Each digit is its own run; "12" is 1 + 2 empty squares
        match c {
            '1'..='8' => {
                let run = c as usize - '0' as usize;
                cells.extend(std::iter::repeat(None).take(run));
            }
            _ => {
                log::warn!("unexpected character '{}' in FEN rank \"{}\"", c, segment);
                return Err(FenError::InvalidCharacter {
                    character: c,
                    fen: fen.to_string(),
                });
            }
        }
    }

    let files = cells.len();
    cells.try_into().map_err(|_| {
        log::warn!("FEN rank \"{}\" expands to {} files", segment, files);
        FenError::InvalidRankLength {
            rank: segment.to_string(),
            files,
            fen: fen.to_string(),
        }
    })
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Color, PieceKind};

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    #[test]
    fn test_parse_empty_board() {
        let board = parse_fen("8/8/8/8/8/8/8/8").unwrap();
        assert_eq!(board, Board::empty());
    }

    #[test]
    fn test_parse_starting_position() {
        let board = parse_fen(START).unwrap();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(
            board.piece_at(0, 0),
            Some(Piece::new(Color::Black, PieceKind::Rook))
        );
        assert_eq!(
            board.piece_at(7, 4),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(board.piece_at(4, 4), None);
    }

    #[test]
    fn test_digits_are_separate_runs() {
        // "12" means 1 + 2 empty squares, not 12
        let board = parse_fen("12p4/8/8/8/8/8/8/8").unwrap();
        assert_eq!(
            board.piece_at(0, 3),
            Some(Piece::new(Color::Black, PieceKind::Pawn))
        );
    }

    #[test]
    fn test_split_runs_equal_single_digit() {
        assert_eq!(
            parse_fen("44/8/8/8/8/8/8/8").unwrap(),
            parse_fen("8/8/8/8/8/8/8/8").unwrap()
        );
    }

    #[test]
    fn test_rank_count_errors() {
        for fen in ["8/8/8/8/8/8/8", "8/8/8/8/8/8/8/8/8", "", "8"] {
            match parse_fen(fen) {
                Err(FenError::InvalidRankCount { found, .. }) => {
                    assert_eq!(found, fen.split('/').count());
                }
                other => panic!("expected InvalidRankCount for {:?}, got {:?}", fen, other),
            }
        }
    }

    #[test]
    fn test_invalid_characters() {
        for (fen, bad) in [
            ("8x/8/8/8/8/8/8/8", 'x'),
            ("0/8/8/8/8/8/8/8", '0'),
            ("9/8/8/8/8/8/8/8", '9'),
            ("8/8/8/8/8/8/8/ 8", ' '),
        ] {
            assert_eq!(
                parse_fen(fen),
                Err(FenError::InvalidCharacter {
                    character: bad,
                    fen: fen.to_string()
                })
            );
        }
    }

    #[test]
    fn test_characters_checked_before_length() {
        assert!(matches!(
            parse_fen("88x/8/8/8/8/8/8/8"),
            Err(FenError::InvalidCharacter { character: 'x', .. })
        ));
    }

    #[test]
    fn test_rank_length_errors() {
        assert_eq!(
            parse_fen("44p/8/8/8/8/8/8/8"),
            Err(FenError::InvalidRankLength {
                rank: "44p".to_string(),
                files: 9,
                fen: "44p/8/8/8/8/8/8/8".to_string(),
            })
        );
        assert!(matches!(
            parse_fen("8/8/8/7/8/8/8/8"),
            Err(FenError::InvalidRankLength { files: 7, .. })
        ));
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8/"),
            Err(FenError::InvalidRankLength { files: 0, .. })
        ));
    }

    #[test]
    fn test_error_messages_carry_input() {
        let err = parse_fen("8x/8/8/8/8/8/8/8").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Malformed FEN string (unexpected character x): 8x/8/8/8/8/8/8/8"
        );

        let err = parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Malformed FEN string (expected 8 ranks, found 7): rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP"
        );

        let err = parse_fen("7/8/8/8/8/8/8/8").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Malformed FEN string (rank \"7\" is not eight files long): 7/8/8/8/8/8/8/8"
        );
    }

    #[test]
    fn test_from_str() {
        let board: Board = START.parse().unwrap();
        assert_eq!(board.to_fen(), START);
    }
}
