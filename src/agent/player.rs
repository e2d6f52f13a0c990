//! Player trait and associated types for chess game agents.
//!
//! A player is anything that can be asked for a move: the human at the console or the
//! search engine. The orchestrator alternates between two players and never cares which
//! kind it is talking to.
//!
//! `get_move()` is synchronous. A human blocks on stdin, the engine blocks for the
//! duration of its search.

use std::io::{self, Write};

use crate::error::SearchError;
use crate::game_repr::{Color, Move, Position};

/// What a player did with its turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// A move present in the side's generated move list
    Move(Move),
    /// The player asked to leave the game
    Quit,
    /// The side to move has no pseudo-legal move. Mate and stalemate are not told apart.
    NoLegalMoves,
    /// The engine's search was aborted; the position is unchanged
    Aborted(SearchError),
}

/// Result of a completed chess game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameResult {
    /// The given side had no reply
    NoLegalMoves(Color),
    /// A player typed `quit` or input ended
    Quit(Color),
    Aborted(SearchError),
}

pub trait Player {
    /// Request the next move from this player.
    ///
    /// `pos` may be mutated during the call but must be unchanged when it returns; the
    /// orchestrator applies the returned move itself. `ply` counts half-moves played so
    /// far. Prompts and diagnostics go to `out`.
    fn get_move(&mut self, pos: &mut Position, ply: u32, out: &mut dyn Write) -> io::Result<Turn>;

    /// Side this player is playing.
    fn color(&self) -> Color;

    /// Notify this player that the game has ended.
    fn game_ended(&mut self, _result: &GameResult) {
        // Default: do nothing
    }

    /// Get the display name of this player.
    fn name(&self) -> &str {
        "Player"
    }
}
