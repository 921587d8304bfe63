use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use woodpusher::board::{Board, EvalParams, Evaluator, Player, SearchParams, Searcher};
use woodpusher::cache::ScoreCache;
use woodpusher::game::{Game, Outcome};

struct Args {
    placement: Option<String>,
    depth: u32,
    max_moves: u32,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        placement: None,
        depth: 4,
        max_moves: 200,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--depth" => {
                let value = iter.next().ok_or("--depth needs a value")?;
                args.depth = value
                    .parse()
                    .map_err(|_| format!("invalid depth: {}", value))?;
            }
            "--max-moves" => {
                let value = iter.next().ok_or("--max-moves needs a value")?;
                args.max_moves = value
                    .parse()
                    .map_err(|_| format!("invalid move cap: {}", value))?;
            }
            "--help" | "-h" => {
                return Err(String::from(
                    "usage: woodpusher [--depth N] [--max-moves N] [PLACEMENT]",
                ))
            }
            _ if args.placement.is_none() => args.placement = Some(arg),
            other => return Err(format!("unexpected argument: {}", other)),
        }
    }
    Ok(args)
}

fn cache_path(player: Player) -> PathBuf {
    PathBuf::from(format!("cache-{}.txt", player).to_lowercase())
}

fn make_searcher(player: Player, depth: u32) -> (Searcher, Arc<ScoreCache>) {
    let cache = Arc::new(ScoreCache::new());
    let path = cache_path(player);
    match cache.load(&path) {
        Ok(loaded) if loaded > 0 => log::info!("loaded {} cached scores for {}", loaded, player),
        Ok(_) => {}
        Err(err) => log::warn!("could not read {}: {}", path.display(), err),
    }
    let searcher = Searcher::new(
        player,
        SearchParams {
            max_depth: depth,
            ..SearchParams::default()
        },
        Evaluator::new(EvalParams::default()),
        Arc::clone(&cache),
    );
    (searcher, cache)
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::FAILURE;
        }
    };

    let board = match args.placement {
        Some(placement) => match placement.parse::<Board>() {
            Ok(board) => board,
            Err(err) => {
                eprintln!("bad placement: {}", err);
                return ExitCode::FAILURE;
            }
        },
        None => Board::new(),
    };

    let (white, white_cache) = make_searcher(Player::White, args.depth);
    let (black, black_cache) = make_searcher(Player::Black, args.depth);
    let mut game = Game::new(board, white, black, args.max_moves);

    println!("{}", game.board());
    match game.play() {
        Outcome::Winner(player) => println!("{} wins", player),
        Outcome::Unfinished => println!("no result after the move cap"),
    }

    for (player, cache) in [(Player::White, white_cache), (Player::Black, black_cache)] {
        let path = cache_path(player);
        if let Err(err) = cache.save(&path) {
            log::warn!("could not write {}: {}", path.display(), err);
        }
    }
    ExitCode::SUCCESS
}
