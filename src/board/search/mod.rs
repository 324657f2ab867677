//! Fixed-depth negamax search with alpha-beta pruning.
//!
//! The root fans out one task per legal move on a rayon pool. Each task owns
//! a copy of the board and searches its subtree with a full window, so root
//! siblings share no cutoffs. Below the root a single board is mutated and
//! restored from a snapshot after each move, leaving its history alone.
//!
//! The chosen move does not depend on scheduling: scores are collected in
//! generation order and the first strictly best one wins.

mod params;

use rayon::prelude::*;

use super::{attack_tables, Board, Move};
pub use params::{SearchConfig, DEFAULT_DEPTH};

/// Bound wider than any reachable score
pub const INFINITY: i32 = 1_000_000;

/// Score of delivering mate at the root; mates further away score lower
pub const MATE_SCORE: i32 = 100_000;

/// Outcome of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move, or `None` when the side to move has no legal move
    pub best_move: Option<Move>,
    /// Negamax score of `best_move` from the side to move's point of view
    pub score: i32,
    /// Positions visited, root children included
    pub nodes: u64,
}

/// True for scores that encode a forced mate for either side
#[must_use]
pub fn is_mate_score(score: i32) -> bool {
    score.abs() > MATE_SCORE - 1_000
}

impl Board {
    /// Search the position to `config.depth` plies.
    ///
    /// When no legal move exists the result carries no move; callers tell
    /// checkmate from stalemate with [`Board::is_king_in_check`].
    #[must_use]
    pub fn search(&self, config: &SearchConfig) -> SearchResult {
        match config.threads {
            Some(threads) => match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
                Ok(pool) => pool.install(|| search_root(self, config.depth)),
                Err(_err) => {
                    #[cfg(feature = "logging")]
                    log::warn!("could not build {threads}-thread search pool: {_err}");
                    search_root(self, config.depth)
                }
            },
            None => search_root(self, config.depth),
        }
    }

    /// Best move at `depth` on the global pool, or `None` without legal moves.
    #[must_use]
    pub fn best_move(&self, depth: u32) -> Option<Move> {
        self.search(&SearchConfig::with_depth(depth)).best_move
    }
}

fn search_root(board: &Board, depth: u32) -> SearchResult {
    attack_tables::init();
    let moves = board.generate_legal();
    if moves.is_empty() {
        let score = if board.is_king_in_check(board.side_to_move()) {
            -MATE_SCORE
        } else {
            0
        };
        return SearchResult {
            best_move: None,
            score,
            nodes: 1,
        };
    }

    // Depth 0 still plays one ply: every reply is scored statically.
    let child_depth = depth.saturating_sub(1);

    let scored: Vec<(Move, i32, u64)> = moves
        .par_iter()
        .map(|&mv| {
            let mut child = board.scratch_copy();
            let mut nodes = 0;
            let score = match child.make_move(mv) {
                Ok(()) => -negamax(&mut child, child_depth, 1, -INFINITY, INFINITY, &mut nodes),
                Err(_) => -INFINITY,
            };
            (mv, score, nodes)
        })
        .collect();

    let mut result = SearchResult {
        best_move: None,
        score: -INFINITY,
        nodes: 1,
    };
    for (mv, score, nodes) in scored {
        result.nodes += nodes;
        if result.best_move.is_none() || score > result.score {
            result.best_move = Some(mv);
            result.score = score;
        }
    }

    #[cfg(feature = "logging")]
    if let Some(mv) = result.best_move {
        log::debug!(
            "depth {} best {} score {} nodes {}",
            depth,
            mv,
            result.score,
            result.nodes
        );
    }

    result
}

/// Negamax value of `board` from the side to move's point of view.
///
/// Fail-soft: the best child score is returned even when it falls outside
/// the window. A checkmated side at depth 0 is still scored as mated.
fn negamax(board: &mut Board, depth: u32, ply: i32, mut alpha: i32, beta: i32, nodes: &mut u64) -> i32 {
    *nodes += 1;
    let side = board.side_to_move();

    if depth == 0 {
        if board.is_king_in_check(side) && board.generate_legal().is_empty() {
            return -(MATE_SCORE - ply);
        }
        return board.evaluate();
    }

    let moves = board.generate_legal();
    if moves.is_empty() {
        return if board.is_king_in_check(side) {
            -(MATE_SCORE - ply)
        } else {
            0
        };
    }

    let saved = board.snapshot();
    let mut best = -INFINITY;
    for mv in moves {
        if board.make_move_unrecorded(mv).is_err() {
            continue;
        }
        let score = -negamax(board, depth - 1, ply + 1, -beta, -alpha, nodes);
        board.restore(saved);

        if score > best {
            best = score;
        }
        if best > alpha {
            alpha = best;
        }
        if alpha >= beta {
            break;
        }
    }
    best
}
