//! Search configuration and the per-search mutable state.

use std::sync::Arc;

use super::evaluation::evaluate_counted;
use super::pruning::{MarginCutoff, Pruning};
use crate::error::{SearchError, SearchOutcome};
use crate::game_repr::{Position, Rules};

/// How sibling moves of a node are explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FanOut {
    /// Make/unmake on the one shared position, in generation order.
    #[default]
    Sequential,
    /// One task per sibling on the rayon pool, each on a private copy of the position.
    /// Nodes with fewer than `min_depth` plies left are searched sequentially.
    Parallel { min_depth: u8 },
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Depth of the root; the reference point of depth-relative pruning
    pub max_depth: u8,
    pub rules: Rules,
    pub fan_out: FanOut,
    pub pruning: Arc<dyn Pruning>,
    /// Opening flag handed to the evaluator
    pub opening: bool,
    /// Abort once this many positions have been evaluated
    pub max_positions: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 5,
            rules: Rules::default(),
            fan_out: FanOut::Sequential,
            pruning: Arc::new(MarginCutoff::default()),
            opening: false,
            max_positions: None,
        }
    }
}

/// Explicit replacement for process-wide search state: the configuration plus the
/// positions-evaluated counter. One context per independent search.
#[derive(Debug, Clone)]
pub struct SearchContext {
    pub config: SearchConfig,
    positions_evaluated: u64,
}

impl SearchContext {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            positions_evaluated: 0,
        }
    }

    pub fn positions_evaluated(&self) -> u64 {
        self.positions_evaluated
    }

    pub fn reset_counter(&mut self) {
        self.positions_evaluated = 0;
    }

    /// Counted static evaluation. Fails once the configured budget is exceeded.
    pub fn evaluate(&mut self, pos: &Position) -> SearchOutcome<i32> {
        let score = evaluate_counted(pos, self.config.opening, &mut self.positions_evaluated);
        self.check_budget()?;
        Ok(score)
    }

    fn check_budget(&self) -> SearchOutcome<()> {
        match self.config.max_positions {
            Some(limit) if self.positions_evaluated > limit => Err(SearchError::BudgetExhausted {
                evaluated: self.positions_evaluated,
                limit,
            }),
            _ => Ok(()),
        }
    }

    /// Context for a parallel task. Starts from this context's count so the budget
    /// still applies along the task's own branch.
    pub(crate) fn fork(&self) -> SearchContext {
        self.clone()
    }

    /// Adds the evaluations a forked task performed since it was forked. Siblings only
    /// see their own branch, so the budget is checked again on the summed count.
    pub(crate) fn join(&mut self, task: &SearchContext, forked_at: u64) -> SearchOutcome<()> {
        self.positions_evaluated += task.positions_evaluated - forked_at;
        self.check_budget()
    }
}
