//! EnginePlayer - the search engine seen through the `Player` trait
//!
//! Each turn the player captures the current evaluation as the reference score, runs
//! [`select_best_move`] at its configured depth and reports the reply together with the
//! number of positions evaluated and the time spent.
//!
//! # Difficulty Levels
//!
//! - **Easy**: Depth 2
//! - **Medium**: Depth 3
//! - **Hard**: Depth 5 (the classic setting of this engine)
//! - **Expert**: Depth 6

use std::io::{self, Write};

use log::{info, warn};

use super::context::{SearchConfig, SearchContext};
use super::evaluation::{evaluate, is_opening};
use super::search::{select_best_move, SearchResult};
use crate::agent::player::{GameResult, Player, Turn};
use crate::game_repr::notation::to_algebraic;
use crate::game_repr::{Color, Position};

/// Search depth presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    Medium,
    #[default]
    Hard,
    Expert,
}

impl Difficulty {
    /// Get the search depth in plies for this difficulty level
    pub fn max_depth(&self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 5,
            Difficulty::Expert => 6,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }
}

pub struct EnginePlayer {
    color: Color,
    ctx: SearchContext,
    name: String,
    last_result: Option<SearchResult>,
}

impl EnginePlayer {
    /// `config.max_depth` is the depth searched every turn.
    pub fn new(color: Color, config: SearchConfig) -> Self {
        let name = format!("Engine (depth {})", config.max_depth);
        Self {
            color,
            ctx: SearchContext::new(config),
            name,
            last_result: None,
        }
    }

    pub fn with_difficulty(color: Color, difficulty: Difficulty) -> Self {
        let config = SearchConfig {
            max_depth: difficulty.max_depth(),
            ..SearchConfig::default()
        };
        let mut player = Self::new(color, config);
        player.name = format!("Engine ({})", difficulty.name());
        player
    }

    pub fn config(&self) -> &SearchConfig {
        &self.ctx.config
    }

    /// Statistics of the most recent search.
    pub fn last_result(&self) -> Option<&SearchResult> {
        self.last_result.as_ref()
    }
}

impl Player for EnginePlayer {
    fn get_move(&mut self, pos: &mut Position, ply: u32, out: &mut dyn Write) -> io::Result<Turn> {
        let opening = is_opening(ply);
        let depth = self.ctx.config.max_depth;
        self.ctx.config.opening = opening;
        self.ctx.reset_counter();

        let reference = evaluate(pos, opening);
        let result = match select_best_move(pos, depth, self.color, reference, &mut self.ctx) {
            Ok(result) => result,
            Err(err) => return Ok(Turn::Aborted(err)),
        };

        let turn = match result.best_move {
            Some(mv) => {
                info!(
                    "[{}] {} score {} ({} positions, {} ms)",
                    self.name,
                    to_algebraic(&mv),
                    result.score,
                    result.positions_evaluated,
                    result.time_ms
                );
                writeln!(out, "{} plays: {}", self.color.name(), to_algebraic(&mv))?;
                writeln!(
                    out,
                    "Positions evaluated: {} | Search time: {} ms",
                    result.positions_evaluated, result.time_ms
                )?;
                Turn::Move(mv)
            }
            None => Turn::NoLegalMoves,
        };

        self.last_result = Some(result);
        Ok(turn)
    }

    fn color(&self) -> Color {
        self.color
    }

    fn game_ended(&mut self, result: &GameResult) {
        if let GameResult::Aborted(err) = result {
            warn!("[{}] game ended by aborted search: {}", self.name, err);
        } else {
            info!("[{}] game over: {:?}", self.name, result);
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_depths() {
        assert_eq!(Difficulty::Easy.max_depth(), 2);
        assert_eq!(Difficulty::Medium.max_depth(), 3);
        assert_eq!(Difficulty::Hard.max_depth(), 5);
        assert_eq!(Difficulty::Expert.max_depth(), 6);
        assert_eq!(Difficulty::default(), Difficulty::Hard);
    }

    #[test]
    fn test_engine_replies_and_leaves_position_alone() {
        let mut engine = EnginePlayer::with_difficulty(Color::Black, Difficulty::Easy);
        let mut pos = Position::default();
        let before = pos.clone();
        let mut out = Vec::new();

        let turn = engine.get_move(&mut pos, 1, &mut out).unwrap();

        assert_eq!(pos, before);
        match turn {
            Turn::Move(mv) => assert!(pos[mv.from_square()].is(Color::Black)),
            other => panic!("expected a move, got {:?}", other),
        }
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Black plays: "), "{}", text);
        assert!(engine.last_result().unwrap().positions_evaluated > 0);
    }

    #[test]
    fn test_engine_without_pieces_reports_no_moves() {
        let mut engine = EnginePlayer::with_difficulty(Color::Black, Difficulty::Easy);
        let mut pos = Position::from_fen("4K3/8/8/8/8/8/8/8").unwrap();

        let turn = engine.get_move(&mut pos, 0, &mut Vec::new()).unwrap();
        assert_eq!(turn, Turn::NoLegalMoves);
    }

    #[test]
    fn test_engine_budget_abort() {
        let config = SearchConfig {
            max_depth: 3,
            max_positions: Some(10),
            ..SearchConfig::default()
        };
        let mut engine = EnginePlayer::new(Color::White, config);
        let mut pos = Position::default();
        let before = pos.clone();

        let turn = engine.get_move(&mut pos, 0, &mut Vec::new()).unwrap();
        assert!(matches!(turn, Turn::Aborted(_)));
        assert_eq!(pos, before);
    }
}
