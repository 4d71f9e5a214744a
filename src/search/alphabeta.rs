use std::time::{Duration, Instant};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::board::rules::{apply_move, check_endgame, legal_moves};
use crate::board::{Board, Move, Player};
use crate::search::eval::{evaluate, EvalConfig, WIN_SCORE};
use crate::search::ordering::{cap_moves, order_moves};

/// Search policy, passed by value. One searcher parameterised by this table
/// covers what would otherwise be a family of near-identical agents.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SearchParams {
    /// Hard ply bound on the recursion.
    pub max_depth: u32,
    /// Wall-clock budget per decision, polled cooperatively.
    pub movetime_ms: u64,
    /// Rank candidates by immediate gain before expanding them.
    pub order_moves: bool,
    /// Keep only the top-K ordered root moves, if set.
    pub root_cap: Option<usize>,
    pub eval: EvalConfig,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            max_depth: 64,
            movetime_ms: 1900,
            order_moves: true,
            root_cap: None,
            eval: EvalConfig::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SearchResult {
    pub best: Option<Move>,
    pub score: i32,
    /// Deepest depth whose root pass ran to completion.
    pub depth: u32,
    pub nodes: u64,
}

enum RootPass {
    Completed { best: Move, score: i32 },
    TimedOut { best: Option<(Move, i32)> },
}

/// Iterative-deepening minimax with alpha-beta pruning and a cooperative
/// wall-clock deadline. Single-threaded; every branch owns its board copy.
pub struct Searcher {
    params: SearchParams,
    nodes: u64,
    deadline: Option<Instant>,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(SearchParams::default())
    }
}

impl Searcher {
    pub fn new(params: SearchParams) -> Self {
        Self {
            params,
            nodes: 0,
            deadline: None,
        }
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// The decision call: pick a move for `player` on `board`, or `None`
    /// when no legal move exists (the driver reads that as a pass). The
    /// input board is never mutated. Always returns within roughly the
    /// configured budget; a soft overrun is logged, not an error.
    pub fn decide(&mut self, board: &Board, player: Player, opponent: Player) -> Option<Move> {
        let start = Instant::now();
        let result = self.search(board, player, opponent);
        let elapsed = start.elapsed();
        info!(
            "depth {} completed, {} nodes, {:.3}s",
            result.depth,
            result.nodes,
            elapsed.as_secs_f64()
        );
        let budget = Duration::from_millis(self.params.movetime_ms);
        if elapsed > budget + Duration::from_millis(100) {
            warn!(
                "decision overran its {}ms budget: {:.3}s",
                self.params.movetime_ms,
                elapsed.as_secs_f64()
            );
        }
        result.best
    }

    /// Run iterative deepening to the time budget and report the outcome.
    ///
    /// The answer is the best move of the deepest fully completed pass; if
    /// not even depth 1 finishes, the best move seen in the interrupted
    /// pass; failing that, the first ordered legal move.
    pub fn search(&mut self, board: &Board, player: Player, opponent: Player) -> SearchResult {
        self.nodes = 0;
        self.deadline = Some(Instant::now() + Duration::from_millis(self.params.movetime_ms));

        let mut moves = legal_moves(board, player);
        if moves.is_empty() {
            return SearchResult::default();
        }
        if self.params.order_moves {
            order_moves(board, &mut moves, player);
        }
        if let Some(k) = self.params.root_cap {
            cap_moves(&mut moves, k);
        }

        let mut result = SearchResult {
            best: Some(moves[0]),
            score: 0,
            depth: 0,
            nodes: 0,
        };
        let mut interrupted: Option<(Move, i32)> = None;

        for depth in 1..=self.params.max_depth {
            match self.root_pass(board, &moves, player, opponent, depth) {
                RootPass::Completed { best, score } => {
                    result.best = Some(best);
                    result.score = score;
                    result.depth = depth;
                    debug!("depth {depth}: best {best}, score {score}");
                }
                RootPass::TimedOut { best } => {
                    interrupted = best;
                    break;
                }
            }
            if self.out_of_time() {
                break;
            }
        }

        if result.depth == 0 {
            if let Some((mv, score)) = interrupted {
                result.best = Some(mv);
                result.score = score;
            }
        }
        result.nodes = self.nodes;
        result
    }

    /// One full-width pass over the ordered root moves at a fixed depth.
    /// Alpha is threaded across root moves, so a strong early candidate
    /// prunes the rest.
    fn root_pass(
        &mut self,
        board: &Board,
        moves: &[Move],
        player: Player,
        opponent: Player,
        depth: u32,
    ) -> RootPass {
        let mut alpha = -WIN_SCORE;
        let beta = WIN_SCORE;
        let mut best: Option<(Move, i32)> = None;

        for &mv in moves {
            if self.out_of_time() {
                return RootPass::TimedOut { best };
            }
            let mut child = board.clone();
            apply_move(&mut child, mv, player)
                .unwrap_or_else(|e| panic!("root move failed validation: {e}"));
            let score = self.minimax(&child, false, alpha, beta, player, opponent, 1, depth);
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((mv, score));
            }
            alpha = alpha.max(score);
        }

        match best {
            Some((mv, score)) => RootPass::Completed { best: mv, score },
            None => RootPass::TimedOut { best: None },
        }
    }

    /// Recursive minimax with an explicit maximizing flag; the pass-the-turn
    /// rule makes strict negamax unsuitable here. The deadline is polled on
    /// every entry, and expiry returns the static evaluation rather than an
    /// error.
    #[allow(clippy::too_many_arguments)]
    fn minimax(
        &mut self,
        board: &Board,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        player: Player,
        opponent: Player,
        ply: u32,
        max_ply: u32,
    ) -> i32 {
        self.nodes += 1;
        if self.out_of_time() {
            return evaluate(board, player, opponent, &self.params.eval);
        }
        if check_endgame(board).over || ply >= max_ply {
            return evaluate(board, player, opponent, &self.params.eval);
        }

        let side = if maximizing { player } else { opponent };
        let mut moves = legal_moves(board, side);
        if moves.is_empty() {
            // The stuck side passes; only a double stalemate is terminal.
            if legal_moves(board, side.opponent()).is_empty() {
                return evaluate(board, player, opponent, &self.params.eval);
            }
            return self.minimax(board, !maximizing, alpha, beta, player, opponent, ply + 1, max_ply);
        }
        if self.params.order_moves {
            order_moves(board, &mut moves, side);
        }

        if maximizing {
            let mut best = -WIN_SCORE;
            for mv in moves {
                let mut child = board.clone();
                apply_move(&mut child, mv, side)
                    .unwrap_or_else(|e| panic!("generated move failed validation: {e}"));
                let score =
                    self.minimax(&child, false, alpha, beta, player, opponent, ply + 1, max_ply);
                best = best.max(score);
                alpha = alpha.max(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = WIN_SCORE;
            for mv in moves {
                let mut child = board.clone();
                apply_move(&mut child, mv, side)
                    .unwrap_or_else(|e| panic!("generated move failed validation: {e}"));
                let score =
                    self.minimax(&child, true, alpha, beta, player, opponent, ply + 1, max_ply);
                best = best.min(score);
                beta = beta.min(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }

    fn out_of_time(&self) -> bool {
        self.deadline.map_or(false, |dl| Instant::now() >= dl)
    }
}
