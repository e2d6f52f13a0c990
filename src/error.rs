//! Error types for the engine and its console front end
//!
//! Input problems (`NotationError`, `MoveError`) are recovered from by re-prompting and never
//! touch the position. `SearchError` aborts a search; the root selector restores the position
//! before returning it.

use thiserror::Error;

/// Malformed long algebraic move text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("expected 4 or 5 characters (e.g. e2e4), got {len}")]
    BadLength { len: usize },

    #[error("invalid file '{file}', expected a-h")]
    BadFile { file: char },

    #[error("invalid rank '{rank}', expected 1-8")]
    BadRank { rank: char },

    #[error("invalid move tag '{tag}', expected k or q")]
    BadTag { tag: char },
}

/// A well-formed move that cannot be played.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("illegal move: {notation}")]
    Illegal { notation: String },

    #[error(transparent)]
    Notation(#[from] NotationError),
}

/// Abnormal termination of a search.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("search aborted after evaluating {evaluated} positions (budget {limit})")]
    BudgetExhausted { evaluated: u64, limit: u64 },
}

pub type SearchOutcome<T> = Result<T, SearchError>;
