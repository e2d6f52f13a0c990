// Root move selection
//
// One level of minimax that remembers which move produced the extremum. The whole
// position is backed up first and put back if the search aborts, so a failed search
// leaves the caller's position exactly as it was.

use log::{debug, trace, warn};
use std::time::Instant;

use super::context::SearchContext;
use super::minimax::{child_scores, identity, improves};
use crate::error::SearchOutcome;
use crate::game_repr::notation::to_algebraic;
use crate::game_repr::{Color, Move, Position};

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// `None` when the side to move has no pseudo-legal move at all
    pub best_move: Option<Move>,
    pub score: i32,
    pub depth: u8,
    /// Number of root candidates that were searched
    pub root_moves: usize,
    pub positions_evaluated: u64,
    pub time_ms: u64,
}

impl SearchResult {
    /// Create a new search result with no move found
    pub fn new(side: Color, depth: u8) -> Self {
        Self {
            best_move: None,
            score: identity(side),
            depth,
            root_moves: 0,
            positions_evaluated: 0,
            time_ms: 0,
        }
    }
}

/// Picks the move for `side` with the best minimax score at `depth` plies.
///
/// `depth` also becomes the context's maximum depth, the anchor of depth-relative pruning.
/// Ties go to the earliest move in generation order. On error the position is restored
/// from the backup before the error is returned.
pub fn select_best_move(
    pos: &mut Position,
    depth: u8,
    side: Color,
    reference: i32,
    ctx: &mut SearchContext,
) -> SearchOutcome<SearchResult> {
    let start_time = Instant::now();
    let backup = pos.clone();
    let depth = depth.max(1);
    let evaluated_before = ctx.positions_evaluated();
    ctx.config.max_depth = depth;

    let mut result = SearchResult::new(side, depth);
    let moves = pos.all_moves(side, &ctx.config.rules);
    result.root_moves = moves.len();

    let scores = match child_scores(pos, &moves, depth, side, reference, ctx) {
        Ok(scores) => scores,
        Err(err) => {
            *pos = backup;
            warn!("search for {} aborted, position restored: {}", side.name(), err);
            return Err(err);
        }
    };
    debug_assert_eq!(*pos, backup, "make/unmake left the position changed");

    for (&mv, &score) in moves.iter().zip(&scores) {
        debug!("{} {} -> {}", side.name(), to_algebraic(&mv), score);
        if result.best_move.is_none() || improves(side, score, result.score) {
            result.best_move = Some(mv);
            result.score = score;
        }
    }

    result.positions_evaluated = ctx.positions_evaluated() - evaluated_before;
    result.time_ms = start_time.elapsed().as_millis() as u64;
    trace!(
        "depth {} | {} root moves | {} positions | {} ms",
        depth,
        result.root_moves,
        result.positions_evaluated,
        result.time_ms
    );

    Ok(result)
}
