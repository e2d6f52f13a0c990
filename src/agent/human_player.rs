//! Human player reading long algebraic notation from a line-based input.
//!
//! Malformed text and moves the generator does not produce are reported and the player is
//! prompted again; the position is never touched by a rejected move.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::agent::player::{Player, Turn};
use crate::error::MoveError;
use crate::game_repr::notation::to_coordinates;
use crate::game_repr::{Color, Move, Position, Rules};

const PROMPT: &str = "Enter your move in Long Algebraic Notation or type quit to exit";

/// Turns user text into one of `side`'s generated moves.
pub fn resolve_move(
    pos: &Position,
    side: Color,
    rules: &Rules,
    text: &str,
) -> Result<Move, MoveError> {
    let parsed = to_coordinates(text)?;
    pos.all_moves(side, rules)
        .into_iter()
        .find(|mv| parsed.matches(mv))
        .ok_or_else(|| MoveError::Illegal {
            notation: text.trim().to_string(),
        })
}

pub struct HumanPlayer<R: BufRead> {
    input: R,
    color: Color,
    rules: Rules,
    name: String,
}

impl<R: BufRead> HumanPlayer<R> {
    pub fn new(input: R, color: Color, rules: Rules) -> Self {
        Self {
            input,
            color,
            rules,
            name: format!("Human ({})", color.name()),
        }
    }
}

impl<R: BufRead> Player for HumanPlayer<R> {
    fn get_move(&mut self, pos: &mut Position, _ply: u32, out: &mut dyn Write) -> io::Result<Turn> {
        if pos.all_moves(self.color, &self.rules).is_empty() {
            return Ok(Turn::NoLegalMoves);
        }

        loop {
            writeln!(out, "{}", PROMPT)?;
            write!(out, "> ")?;
            out.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(Turn::Quit);
            }
            let text = line.trim();
            if text == "quit" {
                return Ok(Turn::Quit);
            }

            match resolve_move(pos, self.color, &self.rules, text) {
                Ok(mv) => return Ok(Turn::Move(mv)),
                Err(err) => {
                    debug!("rejected input {:?}: {}", text, err);
                    writeln!(out, "{}", err)?;
                }
            }
        }
    }

    fn color(&self) -> Color {
        self.color
    }

    fn name(&self) -> &str {
        &self.name
    }
}
