use std::io::{self, Write};

use crate::game_repr::{Color, Position, Square};

const LABEL_COLOR: &str = "\x1b[90m";
const RESET: &str = "\x1b[0m";

/// Trait for rendering the chess board.
/// This abstraction allows for different output backends (ANSI console, plain text, ...)
pub trait Renderer {
    /// Draw the current board position to `out`
    fn draw_position(&mut self, out: &mut dyn Write, position: &Position) -> io::Result<()>;
}

/// Text board: one rank per line, pieces as FEN letters, `.` for empty squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleRenderer {
    /// Grey rank and file labels
    pub ansi: bool,
    /// Side drawn at the bottom
    pub pov: Color,
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self {
            ansi: true,
            pov: Color::White,
        }
    }
}

impl ConsoleRenderer {
    pub fn new(pov: Color) -> Self {
        Self {
            pov,
            ..Self::default()
        }
    }

    /// No escape sequences, for logs and tests.
    pub fn plain(pov: Color) -> Self {
        Self { ansi: false, pov }
    }

    fn label(&self, out: &mut dyn Write, text: &str) -> io::Result<()> {
        if self.ansi {
            write!(out, "{}{}{}", LABEL_COLOR, text, RESET)
        } else {
            write!(out, "{}", text)
        }
    }

    fn ordered(&self) -> [u8; 8] {
        match self.pov {
            Color::White => [0, 1, 2, 3, 4, 5, 6, 7],
            Color::Black => [7, 6, 5, 4, 3, 2, 1, 0],
        }
    }
}

impl Renderer for ConsoleRenderer {
    fn draw_position(&mut self, out: &mut dyn Write, position: &Position) -> io::Result<()> {
        let order = self.ordered();
        writeln!(out)?;

        for &row in &order {
            self.label(out, &format!("{} ", 8 - row))?;
            for &col in &order {
                write!(out, "{} ", position[Square::new(row, col)].to_char())?;
            }
            writeln!(out)?;
        }

        let files: String = order
            .iter()
            .map(|&col| format!(" {}", (b'a' + col) as char))
            .collect();
        self.label(out, &format!(" {}\n\n", files))
    }
}
