//! Per-kind candidate move generation.
//!
//! Kinds dispatch through a single match; sliding pieces share a ray walker
//! that first finds the nearest friendly and opposing blocker per direction
//! by scanning the active piece set, then emits every square strictly
//! nearer than both plus the opposing blocker's square when it is the
//! nearer one (a capture). Generators never emit a move onto a
//! friendly-occupied square.

use super::{Board, Move, MoveList, PieceId, PieceKind, Position};

const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

const KING_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

const ORTHOGONAL_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const DIAGONAL_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

impl Board {
    /// Append the candidate moves for one piece.
    pub(crate) fn piece_moves(&self, id: PieceId, out: &mut MoveList) {
        match self.piece(id).kind {
            PieceKind::Pawn => self.pawn_moves(id, out),
            PieceKind::Knight => self.leaper_moves(id, &KNIGHT_OFFSETS, out),
            PieceKind::King => self.leaper_moves(id, &KING_OFFSETS, out),
            PieceKind::Bishop => self.ray_moves(id, &DIAGONAL_DIRECTIONS, out),
            PieceKind::Rook => self.ray_moves(id, &ORTHOGONAL_DIRECTIONS, out),
            PieceKind::Queen => {
                self.ray_moves(id, &ORTHOGONAL_DIRECTIONS, out);
                self.ray_moves(id, &DIAGONAL_DIRECTIONS, out);
            }
        }
    }

    fn pawn_moves(&self, id: PieceId, out: &mut MoveList) {
        let piece = self.piece(id);
        let player = piece.owner;
        let direction = player.pawn_direction();
        let from = piece.position;

        // Single step forward onto an empty square.
        if let Some(ahead) = from.offset(direction, 0) {
            if !self.is_space_taken(ahead) {
                out.push(Move { piece: id, to: ahead });
            }

            // Double step from the starting rank needs both squares empty.
            if from.row == player.pawn_start_row() {
                if let Some(two_ahead) = from.offset(2 * direction, 0) {
                    if !self.is_space_taken(ahead) && !self.is_space_taken(two_ahead) {
                        out.push(Move {
                            piece: id,
                            to: two_ahead,
                        });
                    }
                }
            }
        }

        // Diagonal steps only onto opposing pieces.
        for d_col in [-1, 1] {
            if let Some(diagonal) = from.offset(direction, d_col) {
                if self.is_space_taken_by_opponent(diagonal, player) {
                    out.push(Move {
                        piece: id,
                        to: diagonal,
                    });
                }
            }
        }
    }

    fn leaper_moves(&self, id: PieceId, offsets: &[(isize, isize)], out: &mut MoveList) {
        let piece = self.piece(id);
        for &(d_row, d_col) in offsets {
            if let Some(to) = piece.position.offset(d_row, d_col) {
                if !self.is_space_taken_by(to, piece.owner) {
                    out.push(Move { piece: id, to });
                }
            }
        }
    }

    fn ray_moves(&self, id: PieceId, directions: &[(isize, isize)], out: &mut MoveList) {
        let piece = self.piece(id);
        let from = piece.position;
        for &(d_row, d_col) in directions {
            let mut friendly_distance = usize::MAX;
            let mut opposing_distance = usize::MAX;
            for (other_id, other) in self.pieces() {
                if other_id == id {
                    continue;
                }
                if let Some(distance) = ray_distance(from, other.position, d_row, d_col) {
                    if other.owner == piece.owner {
                        friendly_distance = friendly_distance.min(distance);
                    } else {
                        opposing_distance = opposing_distance.min(distance);
                    }
                }
            }

            for step in 1..Position::BOARD_SIZE {
                // Stop at the friendly blocker's square; include the
                // opposing blocker's square and nothing past it.
                if step >= friendly_distance || step > opposing_distance {
                    break;
                }
                let Some(to) = from.offset(d_row * step as isize, d_col * step as isize) else {
                    break;
                };
                out.push(Move { piece: id, to });
                if step == opposing_distance {
                    break;
                }
            }
        }
    }
}

/// Number of steps from `from` to `to` along direction (`d_row`, `d_col`),
/// if `to` lies exactly on that ray.
fn ray_distance(from: Position, to: Position, d_row: isize, d_col: isize) -> Option<usize> {
    let row_delta = to.row as isize - from.row as isize;
    let col_delta = to.column as isize - from.column as isize;

    let steps = if d_row != 0 {
        if row_delta % d_row != 0 {
            return None;
        }
        row_delta / d_row
    } else if d_col != 0 {
        if col_delta % d_col != 0 {
            return None;
        }
        col_delta / d_col
    } else {
        return None;
    };

    if steps > 0 && row_delta == steps * d_row && col_delta == steps * d_col {
        Some(steps as usize)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Board, Player, Position};
    use super::*;

    fn moves_from(board: &Board, position: Position) -> MoveList {
        let id = board.piece_at(position).expect("no piece on square");
        let mut out = MoveList::new();
        board.piece_moves(id, &mut out);
        out
    }

    #[test]
    fn test_knight_center_has_eight_moves() {
        let board = Board::try_from_placement("8/8/8/8/3N4/8/8/8").unwrap();
        assert_eq!(moves_from(&board, Position::new(3, 3)).len(), 8);
    }

    #[test]
    fn test_knight_corner_has_two_moves() {
        let board = Board::try_from_placement("8/8/8/8/8/8/8/N7").unwrap();
        assert_eq!(moves_from(&board, Position::new(0, 0)).len(), 2);
    }

    #[test]
    fn test_knight_excludes_friendly_squares() {
        // Knight on d4, own pawn on e6 removes one of the eight targets.
        let board = Board::try_from_placement("8/8/4P3/8/3N4/8/8/8").unwrap();
        assert_eq!(moves_from(&board, Position::new(3, 3)).len(), 7);
    }

    #[test]
    fn test_white_pawn_start_has_double_step() {
        let board = Board::try_from_placement("8/8/8/8/8/8/P7/8").unwrap();
        let moves = moves_from(&board, Position::new(1, 0));
        assert_eq!(moves.len(), 2);
        let targets: Vec<Position> = moves.iter().map(|m| m.to).collect();
        assert!(targets.contains(&Position::new(2, 0)));
        assert!(targets.contains(&Position::new(3, 0)));
    }

    #[test]
    fn test_pawn_double_step_blocked_by_near_square() {
        let board = Board::try_from_placement("8/8/8/8/8/p7/P7/8").unwrap();
        assert!(moves_from(&board, Position::new(1, 0)).is_empty());
    }

    #[test]
    fn test_pawn_double_step_blocked_by_far_square() {
        let board = Board::try_from_placement("8/8/8/8/p7/8/P7/8").unwrap();
        let moves = moves_from(&board, Position::new(1, 0));
        assert_eq!(moves.len(), 1);
        assert_eq!(moves.as_slice()[0].to, Position::new(2, 0));
    }

    #[test]
    fn test_pawn_diagonal_capture_only_onto_opponents() {
        // White pawn e2; black pawn d3 capturable, own pawn f3 not.
        let board = Board::try_from_placement("8/8/8/8/8/3p1P2/4P3/8").unwrap();
        let moves = moves_from(&board, Position::new(1, 4));
        let targets: Vec<Position> = moves.iter().map(|m| m.to).collect();
        assert!(targets.contains(&Position::new(2, 3)));
        assert!(!targets.contains(&Position::new(2, 5)));
    }

    #[test]
    fn test_black_pawn_moves_toward_row_zero() {
        let board = Board::try_from_placement("8/p7/8/8/8/8/8/8").unwrap();
        let moves = moves_from(&board, Position::new(6, 0));
        let targets: Vec<Position> = moves.iter().map(|m| m.to).collect();
        assert!(targets.contains(&Position::new(5, 0)));
        assert!(targets.contains(&Position::new(4, 0)));
    }

    #[test]
    fn test_rook_open_board_has_fourteen_moves() {
        let board = Board::try_from_placement("8/8/8/8/3R4/8/8/8").unwrap();
        assert_eq!(moves_from(&board, Position::new(3, 3)).len(), 14);
    }

    #[test]
    fn test_rook_stops_before_friendly_blocker() {
        // Rook a1, own pawn a4: a2 and a3 reachable, a4 and beyond not.
        let board = Board::try_from_placement("8/8/8/8/P7/8/8/R7").unwrap();
        let moves = moves_from(&board, Position::new(0, 0));
        let targets: Vec<Position> = moves.iter().map(|m| m.to).collect();
        assert!(targets.contains(&Position::new(1, 0)));
        assert!(targets.contains(&Position::new(2, 0)));
        assert!(!targets.contains(&Position::new(3, 0)));
        assert!(!targets.contains(&Position::new(4, 0)));
    }

    #[test]
    fn test_rook_captures_opposing_blocker_but_not_beyond() {
        let board = Board::try_from_placement("8/8/8/8/p7/8/8/R7").unwrap();
        let moves = moves_from(&board, Position::new(0, 0));
        let targets: Vec<Position> = moves.iter().map(|m| m.to).collect();
        assert!(targets.contains(&Position::new(3, 0)));
        assert!(!targets.contains(&Position::new(4, 0)));
    }

    #[test]
    fn test_bishop_blocked_diagonally() {
        // Bishop c1, black pawn e3 on the up-right diagonal.
        let board = Board::try_from_placement("8/8/8/8/8/4p3/8/2B5").unwrap();
        let moves = moves_from(&board, Position::new(0, 2));
        let targets: Vec<Position> = moves.iter().map(|m| m.to).collect();
        assert!(targets.contains(&Position::new(1, 3)));
        assert!(targets.contains(&Position::new(2, 4)));
        assert!(!targets.contains(&Position::new(3, 5)));
    }

    #[test]
    fn test_queen_is_union_of_rook_and_bishop() {
        let board = Board::try_from_placement("8/8/8/8/3Q4/8/8/8").unwrap();
        // 14 orthogonal + 13 diagonal from d4 on an empty board.
        assert_eq!(moves_from(&board, Position::new(3, 3)).len(), 27);
    }

    #[test]
    fn test_king_edge_clipping() {
        let board = Board::try_from_placement("8/8/8/8/8/8/8/K7").unwrap();
        assert_eq!(moves_from(&board, Position::new(0, 0)).len(), 3);
    }

    #[test]
    fn test_possible_moves_start_position() {
        let board = Board::new();
        // 16 pawn moves + 4 knight moves per side.
        assert_eq!(board.possible_moves(Player::White).len(), 20);
        assert_eq!(board.possible_moves(Player::Black).len(), 20);
    }

    #[test]
    fn test_ray_distance_alignment() {
        let from = Position::new(3, 3);
        assert_eq!(ray_distance(from, Position::new(6, 6), 1, 1), Some(3));
        assert_eq!(ray_distance(from, Position::new(3, 1), 0, -1), Some(2));
        assert_eq!(ray_distance(from, Position::new(6, 6), 1, -1), None);
        assert_eq!(ray_distance(from, Position::new(5, 4), 1, 1), None);
        assert_eq!(ray_distance(from, Position::new(3, 3), 1, 1), None);
    }
}
