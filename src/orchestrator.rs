//! Game loop coordination.
//!
//! The [`Orchestrator`] owns the position and asks the two players for moves in turn:
//!
//! ```text
//! [Banner] -> [Render] -> [Request Move] -> [Apply Move] -> [Render + Evaluation]
//!   -> [Switch Turn] -> [Request Move] ... -> [Quit / No Legal Moves / Aborted]
//! ```
//!
//! Players never apply their own moves; they may only borrow the position mutably for the
//! duration of `get_move` and must hand it back unchanged.

use std::io::{self, Write};

use log::{debug, info};

use crate::agent::ai::evaluation::{evaluate, is_opening};
use crate::agent::player::{GameResult, Player, Turn};
use crate::game_repr::notation::to_algebraic;
use crate::game_repr::{Color, Position};
use crate::renderer::Renderer;

pub const BANNER: &str = "Welcome to Chess Engine V0.2";

pub struct Orchestrator<W: Write> {
    white: Box<dyn Player>,
    black: Box<dyn Player>,
    renderer: Box<dyn Renderer>,
    out: W,
    position: Position,
    side_to_move: Color,
    /// Half-moves played so far
    ply: u32,
}

impl<W: Write> Orchestrator<W> {
    /// New game from the standard starting position, White to move.
    pub fn new(
        white: Box<dyn Player>,
        black: Box<dyn Player>,
        renderer: Box<dyn Renderer>,
        out: W,
    ) -> Self {
        debug_assert_eq!(white.color(), Color::White);
        debug_assert_eq!(black.color(), Color::Black);
        Self {
            white,
            black,
            renderer,
            out,
            position: Position::default(),
            side_to_move: Color::White,
            ply: 0,
        }
    }

    /// Starts from `position` with `side_to_move` to play instead.
    pub fn with_position(mut self, position: Position, side_to_move: Color) -> Self {
        self.position = position;
        self.side_to_move = side_to_move;
        self
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn ply(&self) -> u32 {
        self.ply
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn draw(&mut self) -> io::Result<()> {
        self.renderer.draw_position(&mut self.out, &self.position)?;
        let eval = evaluate(&self.position, is_opening(self.ply));
        writeln!(self.out, "Evaluation: {}\n", eval)
    }

    /// Plays until a player quits, a side runs out of moves or a search aborts.
    ///
    /// Only console I/O failures are returned as errors; every other way the game can end is
    /// a [`GameResult`], which both players are notified of.
    pub fn run(&mut self) -> io::Result<GameResult> {
        writeln!(self.out, "{}", BANNER)?;
        self.draw()?;

        let result = loop {
            let side = self.side_to_move;
            let player = match side {
                Color::White => &mut self.white,
                Color::Black => &mut self.black,
            };
            debug!("ply {}: {} to move ({})", self.ply, side.name(), player.name());

            match player.get_move(&mut self.position, self.ply, &mut self.out)? {
                Turn::Move(mv) => {
                    self.position.make_move(mv);
                    info!("{} played {}", side.name(), to_algebraic(&mv));
                    self.ply += 1;
                    self.side_to_move = side.opposite();
                    self.draw()?;
                }
                Turn::Quit => break GameResult::Quit(side),
                Turn::NoLegalMoves => {
                    writeln!(self.out, "{} has no legal moves. Game over.", side.name())?;
                    break GameResult::NoLegalMoves(side);
                }
                Turn::Aborted(err) => {
                    writeln!(self.out, "Search aborted: {}", err)?;
                    break GameResult::Aborted(err);
                }
            }
        };

        self.out.flush()?;
        self.white.game_ended(&result);
        self.black.game_ended(&result);
        Ok(result)
    }
}
