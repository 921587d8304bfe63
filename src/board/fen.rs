//! FEN-style placement parsing and serialization.
//!
//! Only the piece placement field drives board construction. Up to five
//! trailing fields (side to move, castling, en passant, clocks) are
//! accepted for compatibility but carry no semantics here.

use std::str::FromStr;

use super::error::PlacementError;
use super::{Board, PieceKind, Position};

impl Board {
    /// Build a board from a FEN-like placement string.
    ///
    /// The first rank listed is rank 8 (row 7); digits encode runs of empty
    /// squares. Fails fast on malformed input; the board is never silently
    /// partial.
    pub fn try_from_placement(input: &str) -> Result<Self, PlacementError> {
        let placement = input
            .split_whitespace()
            .next()
            .ok_or(PlacementError::Empty)?;

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != Position::BOARD_SIZE {
            return Err(PlacementError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        for (rank_index, rank) in ranks.iter().enumerate() {
            let row = Position::BOARD_SIZE - 1 - rank_index;
            let mut file = 0usize;
            for c in rank.chars() {
                if let Some(run) = c.to_digit(10) {
                    file += run as usize;
                } else {
                    let (owner, kind) = PieceKind::from_placement_char(c)
                        .ok_or(PlacementError::InvalidPiece { char: c })?;
                    if file >= Position::BOARD_SIZE {
                        return Err(PlacementError::TooManyFiles {
                            rank: rank_index,
                            files: file + 1,
                        });
                    }
                    board.insert_piece(owner, kind, Position::new(row, file));
                    file += 1;
                }
            }
            if file > Position::BOARD_SIZE {
                return Err(PlacementError::TooManyFiles {
                    rank: rank_index,
                    files: file,
                });
            }
            if file < Position::BOARD_SIZE {
                return Err(PlacementError::TooFewFiles {
                    rank: rank_index,
                    files: file,
                });
            }
        }
        Ok(board)
    }

    /// Serialize the active pieces back to placement syntax. Parsing the
    /// result reproduces an equivalent piece set.
    #[must_use]
    pub fn placement(&self) -> String {
        let mut ranks: Vec<String> = Vec::with_capacity(Position::BOARD_SIZE);
        for row in (0..Position::BOARD_SIZE).rev() {
            let mut rank = String::new();
            let mut empty = 0;
            for column in 0..Position::BOARD_SIZE {
                match self.piece_at(Position::new(row, column)) {
                    Some(id) => {
                        if empty > 0 {
                            rank.push_str(&empty.to_string());
                            empty = 0;
                        }
                        let piece = self.piece(id);
                        rank.push(piece.kind().to_placement_char(piece.owner()));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                rank.push_str(&empty.to_string());
            }
            ranks.push(rank);
        }
        ranks.join("/")
    }
}

impl FromStr for Board {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_placement(s)
    }
}
