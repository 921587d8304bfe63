pub mod board;
pub mod cache;
pub mod game;

pub use board::{Board, Evaluator, Move, Player, SearchParams, Searcher};
pub use cache::ScoreCache;
pub use game::{Game, Outcome};
