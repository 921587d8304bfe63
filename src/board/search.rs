//! Fixed-depth move search.
//!
//! Depth-first recursion that alternates sides down to `max_depth`, scoring
//! horizon positions with the evaluator through a fingerprint-keyed cache.
//! Aggregation is extremal leaf: max over the searching player's choices,
//! min over the opponent's replies.

use std::sync::Arc;

use super::eval::Evaluator;
use super::{Board, Move, Player, ScoredMove};
use crate::cache::ScoreCache;

/// Search configuration. Thresholds bound the running best at each frame;
/// `win_score`/`loss_score` are the terminal values for a captured king.
#[derive(Clone, Debug)]
pub struct SearchParams {
    pub max_depth: u32,
    /// Initial running best for a frame where the searcher moves. Branches
    /// scoring below it can never be chosen.
    pub losing_threshold: f64,
    /// A score at or above this is decisive; remaining siblings are skipped.
    pub winning_threshold: f64,
    pub win_score: f64,
    pub loss_score: f64,
    /// Soft cutoff on visited nodes, checked between sibling moves.
    pub node_limit: Option<u64>,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            max_depth: 4,
            losing_threshold: -50.0,
            winning_threshold: 50.0,
            win_score: 200.0,
            loss_score: -200.0,
            node_limit: Some(200_000),
        }
    }
}

/// Counters for one `find_best_move` call.
#[derive(Clone, Debug, Default)]
pub struct SearchStats {
    pub nodes: u64,
    pub leaf_evals: u64,
    pub cache_hits: u64,
    /// Visit counts indexed by ply, root at index 0.
    pub ply_visits: Vec<u64>,
}

impl SearchStats {
    fn reset(&mut self, max_depth: u32) {
        self.nodes = 0;
        self.leaf_evals = 0;
        self.cache_hits = 0;
        self.ply_visits.clear();
        self.ply_visits.resize(max_depth as usize + 1, 0);
    }

    fn visit(&mut self, ply: u32) {
        self.nodes += 1;
        if let Some(count) = self.ply_visits.get_mut(ply as usize) {
            *count += 1;
        }
    }
}

/// One side's move chooser. Owns its evaluator, stats and score cache;
/// cached scores are from this searcher's perspective only.
pub struct Searcher {
    player: Player,
    params: SearchParams,
    evaluator: Evaluator,
    cache: Arc<ScoreCache>,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new(
        player: Player,
        params: SearchParams,
        evaluator: Evaluator,
        cache: Arc<ScoreCache>,
    ) -> Self {
        Searcher {
            player,
            params,
            evaluator,
            cache,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn player(&self) -> Player {
        self.player
    }

    #[must_use]
    pub fn cache(&self) -> &Arc<ScoreCache> {
        &self.cache
    }

    /// Counters from the most recent `find_best_move` call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Choose a move for this searcher's player. Returns `None` only when
    /// the player has no candidate moves; the board is left exactly as it
    /// was passed in.
    pub fn find_best_move(&mut self, board: &mut Board) -> Option<Move> {
        self.stats.reset(self.params.max_depth);
        self.stats.visit(0);

        let moves = board.possible_moves(self.player);
        let mut best: Option<ScoredMove> = None;
        for &mv in &moves {
            let result = board.apply_move(mv, false);
            let score = if result.current_player_wins {
                self.params.win_score
            } else {
                self.explore(board, 1, self.player.opponent())
            };
            board.revert_last_move();

            log::debug!(
                "{}: {} scores {:.3}",
                self.player,
                board.describe_move(mv),
                score
            );
            let improved = match best {
                None => true,
                Some(current) => score > current.score,
            };
            if improved {
                best = Some(ScoredMove { mv, score });
            }
            if score >= self.params.winning_threshold {
                break;
            }
            if self.node_budget_spent() {
                break;
            }
        }
        best.map(|scored| scored.mv)
    }

    /// Inner frame: score the subtree for `mover` to play. The running best
    /// starts at the frame's threshold, so an empty frame returns that
    /// extremal directly.
    fn explore(&mut self, board: &mut Board, ply: u32, mover: Player) -> f64 {
        self.stats.visit(ply);
        if ply >= self.params.max_depth {
            return self.horizon_score(board);
        }

        let maximizing = mover == self.player;
        let moves = board.possible_moves(mover);
        let mut best = if maximizing {
            self.params.losing_threshold
        } else {
            self.params.winning_threshold
        };
        for &mv in &moves {
            let result = board.apply_move(mv, false);
            let score = if result.current_player_wins {
                if maximizing {
                    self.params.win_score
                } else {
                    self.params.loss_score
                }
            } else if result.opponent_wins {
                if maximizing {
                    self.params.loss_score
                } else {
                    self.params.win_score
                }
            } else {
                self.explore(board, ply + 1, mover.opponent())
            };
            board.revert_last_move();

            if maximizing {
                if score > best {
                    best = score;
                }
                if best >= self.params.winning_threshold {
                    break;
                }
            } else {
                if score < best {
                    best = score;
                }
                if best <= self.params.losing_threshold {
                    break;
                }
            }
            if self.node_budget_spent() {
                break;
            }
        }
        best
    }

    fn horizon_score(&mut self, board: &Board) -> f64 {
        let fingerprint = board.fingerprint();
        if let Some(score) = self.cache.get(fingerprint) {
            self.stats.cache_hits += 1;
            return score;
        }
        self.stats.leaf_evals += 1;
        let score = self.evaluator.score(board, self.player);
        self.cache.put(fingerprint, score);
        score
    }

    fn node_budget_spent(&self) -> bool {
        match self.params.node_limit {
            Some(limit) => self.stats.nodes >= limit,
            None => false,
        }
    }
}
