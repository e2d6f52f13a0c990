// Search engine
//
// Fixed-depth minimax over pseudo-legal moves with a static evaluator at the leaves.
//
// - evaluation: material plus a handful of positional terms, positive favours White
// - minimax: the recursive search, sequential make/unmake or parallel on private copies
// - pruning: replaceable early-cutoff strategy (margin cutoff by default)
// - search: root move selection with backup/restore of the position
// - context: configuration and the positions-evaluated counter

mod context;
mod engine_player;
pub mod evaluation;
pub mod minimax;
pub mod pruning;
mod search;

#[cfg(test)]
mod tests;

pub use context::{FanOut, SearchConfig, SearchContext};
pub use engine_player::{Difficulty, EnginePlayer};
pub use evaluation::{evaluate, evaluate_counted};
pub use minimax::search_value;
pub use pruning::{Exhaustive, MarginCutoff, Pruning};
pub use search::{select_best_move, SearchResult};

/// Sizes rayon's global pool used by [`FanOut::Parallel`]. `None` means one thread per
/// logical CPU. Can only succeed once per process.
pub fn init_thread_pool(threads: Option<usize>) -> Result<(), rayon::ThreadPoolBuildError> {
    let threads = threads.unwrap_or_else(num_cpus::get);
    log::debug!("search thread pool: {} threads", threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
}
