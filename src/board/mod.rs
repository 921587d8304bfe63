//! Chess board representation, move handling and search.
//!
//! Pieces live in an arena indexed by [`PieceId`]; capture flips a flag
//! instead of removing the entry, so every applied move can be reverted
//! exactly from its [`MoveResult`] diff.
//!
//! # Example
//! ```
//! use woodpusher::board::{Board, Player};
//!
//! let board = Board::new();
//! let moves = board.possible_moves(Player::White);
//! println!("starting position has {} moves", moves.len());
//! ```

mod apply;
mod error;
pub mod eval;
mod fen;
mod fingerprint;
mod movegen;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::PlacementError;
pub use eval::{is_decisive, EvalParams, Evaluator, LOSS_SCORE, WIN_SCORE};
pub use search::{SearchParams, SearchStats, Searcher};
pub use state::Board;
pub use types::{
    Move, MoveList, MoveResult, Piece, PieceId, PieceKind, Player, Position, ScoredMove,
};
