//! Plain value types shared by the board, move generation, evaluation and
//! search.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the two sides of the game.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Player {
    White,
    Black,
}

impl Player {
    #[must_use]
    pub fn opponent(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Player::White => 0,
            Player::Black => 1,
        }
    }

    /// Row delta for a forward pawn step. Row 0 is White's back rank, so
    /// White pawns advance +1 and Black pawns -1.
    pub(crate) fn pawn_direction(self) -> isize {
        match self {
            Player::White => 1,
            Player::Black => -1,
        }
    }

    pub(crate) fn pawn_start_row(self) -> usize {
        match self {
            Player::White => 1,
            Player::Black => 6,
        }
    }

    /// Far rank for this side; a pawn arriving here is promoted.
    pub(crate) fn promotion_row(self) -> usize {
        match self {
            Player::White => 7,
            Player::Black => 0,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}

/// Piece kind. A closed enum; move generation dispatches by match.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub(crate) fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Map a FEN placement letter to (owner, kind). Uppercase is White.
    pub(crate) fn from_placement_char(c: char) -> Option<(Player, PieceKind)> {
        let owner = if c.is_ascii_uppercase() {
            Player::White
        } else {
            Player::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some((owner, kind))
    }

    pub(crate) fn to_placement_char(self, owner: Player) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match owner {
            Player::White => c.to_ascii_uppercase(),
            Player::Black => c,
        }
    }
}

/// A square on the 8x8 board. Immutable; both coordinates are in [0,8).
///
/// Ordered by (row, column) so piece sets can be sorted into the canonical
/// fingerprint order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    /// Board side length.
    pub const BOARD_SIZE: usize = 8;

    #[must_use]
    pub fn new(row: usize, column: usize) -> Position {
        debug_assert!(row < Self::BOARD_SIZE && column < Self::BOARD_SIZE);
        Position { row, column }
    }

    /// The square offset by (`d_row`, `d_col`), or `None` if it falls off
    /// the board.
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Position> {
        let row = self.row as isize + d_row;
        let column = self.column as isize + d_col;
        let max = Self::BOARD_SIZE as isize;
        if (0..max).contains(&row) && (0..max).contains(&column) {
            Some(Position::new(row as usize, column as usize))
        } else {
            None
        }
    }

    pub(crate) fn square_index(self) -> usize {
        self.row * Self::BOARD_SIZE + self.column
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.column as u8) as char, self.row + 1)
    }
}

/// Stable handle into the board's piece arena. Valid for the lifetime of the
/// board it came from; capture and promotion never invalidate it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceId(pub(crate) usize);

/// A piece record in the board arena. Created at board construction and
/// never destroyed; capture only flips the flag, and promotion rewrites
/// `kind` in place.
#[derive(Clone, Debug)]
pub struct Piece {
    pub(crate) owner: Player,
    pub(crate) kind: PieceKind,
    pub(crate) position: Position,
    pub(crate) captured: bool,
}

impl Piece {
    #[must_use]
    pub fn owner(&self) -> Player {
        self.owner
    }

    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn is_captured(&self) -> bool {
        self.captured
    }
}

/// A candidate move: which piece, and where to. Ephemeral; produced per
/// query and only meaningful against the board that produced it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub piece: PieceId,
    pub to: Position,
}

/// Everything needed to undo one applied move: the explicit diff pushed onto
/// the board's history stack.
#[derive(Clone, Copy, Debug)]
pub struct MoveResult {
    pub piece: PieceId,
    pub from: Position,
    pub to: Position,
    pub captured: Option<PieceId>,
    /// The moved pawn was replaced by a queen on arrival.
    pub promoted: bool,
    /// Set when the move landed on a friendly-occupied square. Candidate
    /// generation never emits such moves; the flag is the documented
    /// outcome for hand-built moves.
    pub opponent_wins: bool,
    /// Set when the move captured the opposing king.
    pub current_player_wins: bool,
}

/// A top-level move together with the score the search attributed to it.
#[derive(Clone, Copy, Debug)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: f64,
}

pub(crate) const MAX_MOVES: usize = 256;
pub(crate) const EMPTY_MOVE: Move = Move {
    piece: PieceId(0),
    to: Position { row: 0, column: 0 },
};

/// Fixed-capacity move buffer; avoids per-node allocation in the search.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        debug_assert!(self.len < MAX_MOVES, "MoveList capacity exceeded");
        self.moves[self.len] = mv;
        self.len += 1;
    }

    pub(crate) fn clear(&mut self) {
        self.len = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
