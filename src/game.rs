//! Self-play driver: two searchers alternating on one board.

use crate::board::{Board, Player, Searcher};

/// How a driven game ended.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    Winner(Player),
    /// The move cap was reached before either side won.
    Unfinished,
}

/// A full game between two searchers. Each side keeps its own cache and
/// statistics; the driver only moves pieces and watches the win flags.
pub struct Game {
    board: Board,
    white: Searcher,
    black: Searcher,
    max_moves: u32,
}

impl Game {
    #[must_use]
    pub fn new(board: Board, white: Searcher, black: Searcher, max_moves: u32) -> Self {
        debug_assert_eq!(white.player(), Player::White);
        debug_assert_eq!(black.player(), Player::Black);
        Game {
            board,
            white,
            black,
            max_moves,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Play until a side wins, a side has no move (it loses), or the move
    /// cap runs out.
    pub fn play(&mut self) -> Outcome {
        let mut player = Player::White;
        for move_number in 1..=self.max_moves {
            let searcher = match player {
                Player::White => &mut self.white,
                Player::Black => &mut self.black,
            };
            let Some(mv) = searcher.find_best_move(&mut self.board) else {
                log::info!("{} has no moves", player);
                return Outcome::Winner(player.opponent());
            };

            println!(
                "{}. {}: {}",
                move_number,
                player,
                self.board.describe_move(mv)
            );
            let result = self.board.apply_move(mv, true);
            println!("{}", self.board);

            if result.current_player_wins {
                return Outcome::Winner(player);
            }
            if result.opponent_wins {
                return Outcome::Winner(player.opponent());
            }
            player = player.opponent();
        }
        Outcome::Unfinished
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::board::{EvalParams, Evaluator, SearchParams, Searcher};
    use crate::cache::ScoreCache;

    fn searcher(player: Player, max_depth: u32) -> Searcher {
        Searcher::new(
            player,
            SearchParams {
                max_depth,
                ..SearchParams::default()
            },
            Evaluator::new(EvalParams::default()),
            Arc::new(ScoreCache::new()),
        )
    }

    #[test]
    fn test_stalled_side_loses() {
        // Black has no pieces at all, so White wins before any move.
        let board = Board::try_from_placement("8/8/8/8/8/8/8/K7").unwrap();
        let mut game = Game::new(
            board,
            searcher(Player::White, 1),
            searcher(Player::Black, 1),
            10,
        );
        // White moves first, then Black has nothing.
        assert_eq!(game.play(), Outcome::Winner(Player::White));
    }

    #[test]
    fn test_exposed_king_falls_quickly() {
        // A queen next to a bare king should end the game within a few moves.
        let board = Board::try_from_placement("4k3/4Q3/8/8/8/8/8/4K3").unwrap();
        let mut game = Game::new(
            board,
            searcher(Player::White, 2),
            searcher(Player::Black, 2),
            10,
        );
        assert_eq!(game.play(), Outcome::Winner(Player::White));
    }

    #[test]
    fn test_move_cap_yields_unfinished() {
        let mut game = Game::new(
            Board::new(),
            searcher(Player::White, 1),
            searcher(Player::Black, 1),
            4,
        );
        assert_eq!(game.play(), Outcome::Unfinished);
    }
}
