//! Heuristic board evaluation.
//!
//! Scores a board from one player's perspective: material weighted by an
//! openness band, a central-column bonus, pawn advancement, and pair
//! bonuses, summed over active pieces and signed by ownership. A missing
//! king short-circuits to a sentinel score that callers must branch on
//! before aggregating.

use super::{Board, MoveList, PieceKind, Player};

/// Sentinel for a position where the perspective player's king is gone.
pub const LOSS_SCORE: f64 = -10_000.0;
/// Sentinel for a position where the opponent's king is gone.
pub const WIN_SCORE: f64 = 10_000.0;

/// True for sentinel scores, which must never be blended into summary
/// statistics.
#[must_use]
pub fn is_decisive(score: f64) -> bool {
    score <= LOSS_SCORE || score >= WIN_SCORE
}

/// Pawn value by row, increasing toward the promotion rank. White promotes
/// at row 7; Black's table is the mirror.
const PAWN_ROW_VALUES_WHITE: [f64; 8] = [1.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 10.0];
const PAWN_ROW_VALUES_BLACK: [f64; 8] = [10.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0, 1.0];

/// Evaluation weights. Owned configuration, not global state.
#[derive(Clone, Debug)]
pub struct EvalParams {
    /// Bonus for occupying the central columns (d/e files); near-central
    /// columns get the tapered `max(middle_modifier - 1, 1)`.
    pub middle_modifier: f64,
    /// Bonus for owning the second bishop, knight or rook of a pair.
    pub pair_bonus: f64,
}

impl Default for EvalParams {
    fn default() -> Self {
        EvalParams {
            middle_modifier: 2.0,
            pair_bonus: 0.5,
        }
    }
}

/// Heuristic evaluator.
#[derive(Clone, Debug, Default)]
pub struct Evaluator {
    params: EvalParams,
}

impl Evaluator {
    #[must_use]
    pub fn new(params: EvalParams) -> Self {
        Evaluator { params }
    }

    /// Score `board` from `perspective`'s point of view. Returns a sentinel
    /// when either king is absent from the active set.
    #[must_use]
    pub fn score(&self, board: &Board, perspective: Player) -> f64 {
        if !board.has_king(perspective) {
            return LOSS_SCORE;
        }
        if !board.has_king(perspective.opponent()) {
            return WIN_SCORE;
        }

        // Pair counters per side: bishops, knights, rooks.
        let mut bishops = [0u32; 2];
        let mut knights = [0u32; 2];
        let mut rooks = [0u32; 2];

        let mut moves = MoveList::new();
        let mut total = 0.0;
        for (id, piece) in board.pieces() {
            moves.clear();
            board.piece_moves(id, &mut moves);
            let mobility = moves.len();
            let openness = openness_multiplier(piece.kind(), mobility);
            let side = piece.owner().index();

            let base = match piece.kind() {
                PieceKind::Pawn => {
                    let row_value = match piece.owner() {
                        Player::White => PAWN_ROW_VALUES_WHITE[piece.position().row],
                        Player::Black => PAWN_ROW_VALUES_BLACK[piece.position().row],
                    };
                    1.0 * openness + row_value
                }
                PieceKind::Knight => {
                    knights[side] += 1;
                    3.25 * openness
                }
                PieceKind::Bishop => {
                    bishops[side] += 1;
                    3.5 * openness
                }
                PieceKind::Rook => {
                    rooks[side] += 1;
                    5.0 * openness
                }
                PieceKind::Queen => 10.0 * openness,
                PieceKind::King => 200.0 * openness,
            };

            let pair = match piece.kind() {
                PieceKind::Bishop if bishops[side] == 2 => self.params.pair_bonus,
                PieceKind::Knight if knights[side] == 2 => self.params.pair_bonus,
                PieceKind::Rook if rooks[side] == 2 => self.params.pair_bonus,
                _ => 0.0,
            };

            let positional = self.positional_strength(piece.position().column);
            let piece_score = base + pair + positional;
            if piece.owner() == perspective {
                total += piece_score;
            } else {
                total -= piece_score;
            }
        }
        total
    }

    fn positional_strength(&self, column: usize) -> f64 {
        match column {
            3 | 4 => self.params.middle_modifier,
            2 | 5 => (self.params.middle_modifier - 1.0).max(1.0),
            _ => 0.0,
        }
    }
}

/// Banded mobility multiplier applied to a piece's material base. Bands,
/// not a linear scale.
fn openness_multiplier(kind: PieceKind, mobility: usize) -> f64 {
    match kind {
        PieceKind::Pawn => 1.0,
        PieceKind::Knight => match mobility {
            0 => 0.7,
            1 => 0.8,
            2 => 1.0,
            3 => 1.2,
            4 => 1.5,
            _ => 1.0,
        },
        PieceKind::Bishop | PieceKind::Rook => {
            if mobility > 6 {
                1.1
            } else if mobility < 4 {
                0.9
            } else {
                1.0
            }
        }
        PieceKind::Queen => {
            if mobility > 15 {
                1.1
            } else if mobility > 10 {
                1.05
            } else if mobility < 5 {
                0.95
            } else {
                1.0
            }
        }
        PieceKind::King => {
            if mobility > 3 {
                1.05
            } else if mobility < 2 {
                0.95
            } else {
                1.0
            }
        }
    }
}
