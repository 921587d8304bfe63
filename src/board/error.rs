//! Error types for board construction.

use std::fmt;

/// Error type for placement-string (FEN piece placement) parsing failures.
///
/// Construction fails fast on malformed input; the board is never silently
/// left empty or partially populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// The placement field was empty.
    Empty,
    /// Placement must have exactly 8 '/'-separated ranks.
    WrongRankCount { found: usize },
    /// Invalid piece character in the placement field.
    InvalidPiece { char: char },
    /// A rank describes more than 8 files.
    TooManyFiles { rank: usize, files: usize },
    /// A rank describes fewer than 8 files.
    TooFewFiles { rank: usize, files: usize },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::Empty => write!(f, "Empty placement string"),
            PlacementError::WrongRankCount { found } => {
                write!(f, "Placement must have 8 ranks, found {found}")
            }
            PlacementError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in placement")
            }
            PlacementError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            PlacementError::TooFewFiles { rank, files } => {
                write!(f, "Too few files ({files}) in rank {rank}, expected 8")
            }
        }
    }
}

impl std::error::Error for PlacementError {}
