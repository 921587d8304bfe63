//! End-to-end games driven through the public API.

use std::sync::Arc;

use woodpusher::board::{Board, EvalParams, Evaluator, PieceKind, Player, SearchParams, Searcher};
use woodpusher::cache::ScoreCache;
use woodpusher::game::{Game, Outcome};

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
fn overwhelming_material_wins() {
    // White keeps a full army; Black has a bare king playing one ply deep,
    // so it walks into attacked squares. White must win inside the cap.
    let board = Board::try_from_placement("4k3/8/8/8/8/8/PPPPPPPP/RNBQKBNR")
        .expect("valid placement");
    let mut game = Game::new(
        board,
        searcher(Player::White, 2),
        searcher(Player::Black, 1),
        100,
    );
    assert_eq!(game.play(), Outcome::Winner(Player::White));
}

#[test]
fn hanging_king_is_taken_not_ignored() {
    let mut board = Board::try_from_placement("4k3/8/8/8/8/8/3q4/4K3").expect("valid placement");
    let mut black = searcher(Player::Black, 3);
    let mv = black.find_best_move(&mut board).expect("black has moves");
    let target = board.piece_at(mv.to).expect("capture expected");
    assert_eq!(board.piece(target).kind(), PieceKind::King);
    assert_eq!(board.piece(target).owner(), Player::White);
}

#[test]
fn full_game_leaves_no_dangling_history() {
    let mut game = Game::new(
        Board::new(),
        searcher(Player::White, 2),
        searcher(Player::Black, 2),
        8,
    );
    let _ = game.play();
    // The driver applies real moves; searches must have unwound all of
    // their speculative ones.
    assert!(game.board().history_len() <= 8);
}

#[test]
fn parse_search_play_round_trip() {
    let placement = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";
    let board: Board = placement.parse().expect("valid placement");
    assert_eq!(board.placement(), placement);

    let mut game = Game::new(
        board,
        searcher(Player::White, 1),
        searcher(Player::Black, 1),
        2,
    );
    assert_eq!(game.play(), Outcome::Unfinished);
}
