// Fixed-depth minimax
//
// White-to-move nodes take the maximum over their children, Black-to-move nodes the
// minimum. Scores are always from White's point of view (see evaluation.rs), so there is
// no negation between plies.
//
// The position is shared by the whole tree and mutated with make/unmake. A failing child
// (budget exhausted) returns early through `?` without unmaking; callers that need the
// position back must restore it themselves, which is what the root selector does.

use rayon::prelude::*;

use super::context::{FanOut, SearchContext};
use crate::error::SearchOutcome;
use crate::game_repr::{Color, Move, Position};

/// Returned by a White node without moves: the identity of `max`.
pub const WHITE_NO_MOVES: i32 = -10_000_000;

/// Returned by a Black node without moves: the identity of `min`.
pub const BLACK_NO_MOVES: i32 = 10_000_000;

/// Starting value of the running extremum for `side`.
pub fn identity(side: Color) -> i32 {
    match side {
        Color::White => WHITE_NO_MOVES,
        Color::Black => BLACK_NO_MOVES,
    }
}

/// Whether `candidate` strictly improves on `best` for `side`.
pub fn improves(side: Color, candidate: i32, best: i32) -> bool {
    match side {
        Color::White => candidate > best,
        Color::Black => candidate < best,
    }
}

/// Minimax value of `pos` with `side` to move and `depth` plies left.
///
/// `reference` is the evaluation captured before the root move was tried and is only used
/// by the pruning strategy. A node whose side has no moves scores [`identity`] of that side,
/// which is not a mate or draw score.
pub fn search_value(
    pos: &mut Position,
    depth: u8,
    side: Color,
    reference: i32,
    ctx: &mut SearchContext,
) -> SearchOutcome<i32> {
    if depth == 0 {
        return ctx.evaluate(pos);
    }

    if ctx.config.pruning.should_probe(depth, ctx.config.max_depth) {
        let eval = ctx.evaluate(pos)?;
        if ctx.config.pruning.prunes(reference, eval) {
            return Ok(eval);
        }
    }

    let moves = pos.all_moves(side, &ctx.config.rules);
    let scores = child_scores(pos, &moves, depth, side, reference, ctx)?;

    Ok(scores
        .into_iter()
        .fold(identity(side), |best, score| {
            if improves(side, score, best) {
                score
            } else {
                best
            }
        }))
}

/// Scores of every move in `moves` (made by `side`), searched `depth - 1` plies deeper.
/// The result is in the same order as `moves` whatever the fan-out.
pub(crate) fn child_scores(
    pos: &mut Position,
    moves: &[Move],
    depth: u8,
    side: Color,
    reference: i32,
    ctx: &mut SearchContext,
) -> SearchOutcome<Vec<i32>> {
    match ctx.config.fan_out {
        FanOut::Parallel { min_depth } if depth >= min_depth && moves.len() > 1 => {
            parallel_child_scores(pos, moves, depth, side, reference, ctx)
        }
        _ => sequential_child_scores(pos, moves, depth, side, reference, ctx),
    }
}

fn sequential_child_scores(
    pos: &mut Position,
    moves: &[Move],
    depth: u8,
    side: Color,
    reference: i32,
    ctx: &mut SearchContext,
) -> SearchOutcome<Vec<i32>> {
    let mut scores = Vec::with_capacity(moves.len());

    for &mv in moves {
        let undo = pos.make_move(mv);
        let score = search_value(pos, depth - 1, side.opposite(), reference, ctx)?;
        pos.unmake_move(mv, undo);
        scores.push(score);
    }

    Ok(scores)
}

/// Each sibling gets its own clone of `pos` and a forked context; only the scores and the
/// evaluation counts come back. `pos` itself is never touched.
fn parallel_child_scores(
    pos: &Position,
    moves: &[Move],
    depth: u8,
    side: Color,
    reference: i32,
    ctx: &mut SearchContext,
) -> SearchOutcome<Vec<i32>> {
    let forked_at = ctx.positions_evaluated();
    let parent: &SearchContext = ctx;

    let results: Vec<SearchOutcome<(i32, SearchContext)>> = moves
        .par_iter()
        .map(|&mv| {
            let mut child = pos.clone();
            let mut task = parent.fork();
            child.make_move(mv);
            let score = search_value(&mut child, depth - 1, side.opposite(), reference, &mut task)?;
            Ok((score, task))
        })
        .collect();

    let mut scores = Vec::with_capacity(moves.len());
    for result in results {
        let (score, task) = result?;
        ctx.join(&task, forked_at)?;
        scores.push(score);
    }

    Ok(scores)
}
