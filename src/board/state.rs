//! Board state: the piece arena, spatial occupancy, and the move history
//! stack that `apply.rs` pushes to and pops from.

use std::fmt;

use super::{Move, MoveList, MoveResult, Piece, PieceId, PieceKind, Player, Position};

/// The chess board. Owns every piece exclusively; all mutation goes through
/// `apply_move` / `revert_last_move` so each applied move is revertible.
#[derive(Clone, Debug)]
pub struct Board {
    /// Piece arena. Stable indices; records are never removed.
    pub(crate) pieces: Vec<Piece>,
    /// Occupancy grid over active pieces, kept in lockstep with the arena.
    pub(crate) grid: [[Option<PieceId>; Position::BOARD_SIZE]; Position::BOARD_SIZE],
    /// Strict stack of applied moves; every revert pops exactly one entry.
    pub(crate) history: Vec<MoveResult>,
}

impl Board {
    /// The default start layout.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, kind) in back_rank.iter().enumerate() {
            board.insert_piece(Player::White, *kind, Position::new(0, file));
            board.insert_piece(Player::White, PieceKind::Pawn, Position::new(1, file));
            board.insert_piece(Player::Black, PieceKind::Pawn, Position::new(6, file));
            board.insert_piece(Player::Black, *kind, Position::new(7, file));
        }
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            pieces: Vec::with_capacity(32),
            grid: [[None; Position::BOARD_SIZE]; Position::BOARD_SIZE],
            history: Vec::new(),
        }
    }

    pub(crate) fn insert_piece(
        &mut self,
        owner: Player,
        kind: PieceKind,
        position: Position,
    ) -> PieceId {
        debug_assert!(self.grid[position.row][position.column].is_none());
        let id = PieceId(self.pieces.len());
        self.pieces.push(Piece {
            owner,
            kind,
            position,
            captured: false,
        });
        self.grid[position.row][position.column] = Some(id);
        id
    }

    /// Look up a piece record by its handle.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.0]
    }

    /// All active (non-captured) pieces with their handles.
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces
            .iter()
            .enumerate()
            .filter(|(_, piece)| !piece.captured)
            .map(|(i, piece)| (PieceId(i), piece))
    }

    /// Active pieces belonging to one side.
    pub fn player_pieces(&self, player: Player) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces().filter(move |(_, piece)| piece.owner == player)
    }

    /// Bounds-checked square lookup.
    #[must_use]
    pub fn position(&self, row: isize, column: isize) -> Option<Position> {
        let max = Position::BOARD_SIZE as isize;
        if (0..max).contains(&row) && (0..max).contains(&column) {
            Some(Position::new(row as usize, column as usize))
        } else {
            None
        }
    }

    /// The active piece on a square, if any.
    #[must_use]
    pub fn piece_at(&self, position: Position) -> Option<PieceId> {
        self.grid[position.row][position.column]
    }

    #[must_use]
    pub fn is_space_taken(&self, position: Position) -> bool {
        self.piece_at(position).is_some()
    }

    #[must_use]
    pub fn is_space_taken_by(&self, position: Position, player: Player) -> bool {
        self.piece_at(position)
            .is_some_and(|id| self.pieces[id.0].owner == player)
    }

    #[must_use]
    pub fn is_space_taken_by_opponent(&self, position: Position, player: Player) -> bool {
        self.piece_at(position)
            .is_some_and(|id| self.pieces[id.0].owner != player)
    }

    /// Union of candidate moves over all of `player`'s active pieces.
    #[must_use]
    pub fn possible_moves(&self, player: Player) -> MoveList {
        let mut moves = MoveList::new();
        for (id, _) in self.player_pieces(player) {
            self.piece_moves(id, &mut moves);
        }
        moves
    }

    /// Number of moves applied and not yet reverted.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Whether `player`'s king is still on the board.
    #[must_use]
    pub fn has_king(&self, player: Player) -> bool {
        self.player_pieces(player)
            .any(|(_, piece)| piece.kind == PieceKind::King)
    }

    /// Human-readable origin/destination for a candidate move.
    #[must_use]
    pub fn describe_move(&self, mv: Move) -> String {
        let piece = self.piece(mv.piece);
        format!(
            "{} {:?} {} -> {}",
            piece.owner, piece.kind, piece.position, mv.to
        )
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..Position::BOARD_SIZE).rev() {
            write!(f, "{} ", row + 1)?;
            for column in 0..Position::BOARD_SIZE {
                let square = match self.grid[row][column] {
                    Some(id) => {
                        let piece = &self.pieces[id.0];
                        piece.kind.to_placement_char(piece.owner)
                    }
                    None => '.',
                };
                write!(f, " {square}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
