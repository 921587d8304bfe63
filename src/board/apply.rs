//! Move application and reversal.
//!
//! Every applied move pushes an explicit diff (`MoveResult`) onto the
//! board's history stack; `revert_last_move` pops exactly one diff and
//! restores the arena to the prior state, including un-capturing and
//! undoing pawn promotion. Callers must balance every apply with one
//! revert before their frame returns.

use super::{Board, Move, MoveResult, PieceKind};

impl Board {
    /// Move a piece to its destination, capturing whatever sits there.
    ///
    /// Capturing the opposing king sets `current_player_wins`. Landing on a
    /// friendly-occupied square sets `opponent_wins` instead of rejecting
    /// the move; the friendly piece is still flagged captured so the move
    /// reverts cleanly. A pawn reaching its far rank is replaced in place
    /// by a queen.
    ///
    /// With `debug` set, a trace of the move is emitted through `log`.
    pub fn apply_move(&mut self, mv: Move, debug: bool) -> MoveResult {
        let mover = &self.pieces[mv.piece.0];
        debug_assert!(!mover.captured, "apply_move on a captured piece");
        let player = mover.owner;
        let from = mover.position;
        let to = mv.to;

        let mut opponent_wins = false;
        let mut current_player_wins = false;

        let captured = self.grid[to.row][to.column].filter(|id| *id != mv.piece);
        if let Some(captured_id) = captured {
            let target = &mut self.pieces[captured_id.0];
            if target.owner == player {
                // Generators never emit this; a hand-built move that lands
                // on its own piece forfeits.
                opponent_wins = true;
                if debug {
                    log::warn!(
                        "{player} moved onto its own {:?} at {to}; forfeiting",
                        target.kind
                    );
                }
            } else if target.kind == PieceKind::King {
                current_player_wins = true;
            }
            target.captured = true;
        }

        let mover = &mut self.pieces[mv.piece.0];
        self.grid[from.row][from.column] = None;
        self.grid[to.row][to.column] = Some(mv.piece);
        mover.position = to;

        let promoted = mover.kind == PieceKind::Pawn && to.row == player.promotion_row();
        if promoted {
            mover.kind = PieceKind::Queen;
        }

        let result = MoveResult {
            piece: mv.piece,
            from,
            to,
            captured,
            promoted,
            opponent_wins,
            current_player_wins,
        };

        if debug {
            let kind = self.pieces[mv.piece.0].kind;
            log::info!("{player} moved {kind:?} from {from} to {to}");
            if let Some(captured_id) = captured {
                let target = &self.pieces[captured_id.0];
                log::info!("{} {:?} at {to} was captured", target.owner, target.kind);
            }
            if promoted {
                log::info!("{player} pawn promoted to queen at {to}");
            }
        }

        self.history.push(result);
        result
    }

    /// Undo the most recent unreverted move.
    ///
    /// # Panics
    /// Panics if no move is outstanding: an unbalanced revert is a caller
    /// bookkeeping defect, not a recoverable condition.
    pub fn revert_last_move(&mut self) {
        let record = self
            .history
            .pop()
            .expect("revert_last_move called with no applied move");

        let mover = &mut self.pieces[record.piece.0];
        if record.promoted {
            mover.kind = PieceKind::Pawn;
        }
        mover.position = record.from;
        self.grid[record.to.row][record.to.column] = None;
        self.grid[record.from.row][record.from.column] = Some(record.piece);

        if let Some(captured_id) = record.captured {
            let target = &mut self.pieces[captured_id.0];
            target.captured = false;
            let position = target.position;
            self.grid[position.row][position.column] = Some(captured_id);
        }
    }
}
