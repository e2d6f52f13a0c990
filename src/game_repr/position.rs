use std::ops::{Index, IndexMut};

use super::*;

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME REPRESENTATION AND LOGIC
 */

/// Index into [`Position::moved`].
pub const WHITE_KINGSIDE_ROOK: usize = 0;
pub const WHITE_QUEENSIDE_ROOK: usize = 1;
pub const WHITE_KING: usize = 2;
pub const BLACK_KINGSIDE_ROOK: usize = 3;
pub const BLACK_QUEENSIDE_ROOK: usize = 4;
pub const BLACK_KING: usize = 5;

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR KQkq";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// Row-major cells, index 0 is a8 and index 63 is h1 (black on top)
    pub position: [Piece; 64],
    /// TRUE - has moved at least once
    /// KingRook, QueenRook, King - white
    /// KingRook, QueenRook, King - black
    pub moved: [bool; 6],
    /// Set once either side has castled. Game-global, not per side.
    pub has_castled: bool,
}

/// Everything `unmake_move` needs to restore the position exactly.
#[derive(Debug, Clone, Copy)]
pub struct UndoInfo {
    captured_piece: Piece,
    moved: [bool; 6],
    has_castled: bool,
}

impl Default for Position {
    fn default() -> Self {
        Self::from_fen(STARTING_FEN).unwrap_or_else(|| unreachable!("starting FEN is valid"))
    }
}

impl Index<Square> for Position {
    type Output = Piece;

    fn index(&self, sq: Square) -> &Piece {
        &self.position[sq.index()]
    }
}

impl IndexMut<Square> for Position {
    fn index_mut(&mut self, sq: Square) -> &mut Piece {
        &mut self.position[sq.index()]
    }
}

impl Position {
    pub fn empty() -> Position {
        Position {
            position: [Piece::none(); 64],
            moved: [false; 6],
            has_castled: false,
        }
    }

    /// Parses the placement field and, if present, the castling field of a FEN string.
    ///
    /// Side to move and the remaining fields are ignored: the side to move is owned by the
    /// caller. A missing castling field leaves every king and rook marked as unmoved; a
    /// present one marks every right it does not list as lost.
    pub fn from_fen(fen_str: &str) -> Option<Position> {
        let parts: Vec<&str> = fen_str.split_whitespace().collect();
        let placement = parts.first()?;
        let mut pos = Position::empty();

        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return None;
        }

        for (row, rank) in rows.iter().enumerate() {
            let mut col = 0usize;
            for c in rank.chars() {
                match c {
                    '1'..='8' => col += c.to_digit(10)? as usize,
                    _ => {
                        if col >= 8 {
                            return None;
                        }
                        let piece = Piece::from_char(c).filter(|p| !p.is_none())?;
                        pos.position[row * 8 + col] = piece;
                        col += 1;
                    }
                }
            }
            if col != 8 {
                return None;
            }
        }

        // Castling field may sit after an optional side-to-move field.
        let castling = parts
            .iter()
            .skip(1)
            .find(|p| **p == "-" || p.chars().all(|c| "KQkq".contains(c)));
        if let Some(castling) = castling {
            pos.moved = [true; 6];
            for c in castling.chars() {
                match c {
                    'K' => {
                        pos.moved[WHITE_KINGSIDE_ROOK] = false;
                        pos.moved[WHITE_KING] = false;
                    }
                    'Q' => {
                        pos.moved[WHITE_QUEENSIDE_ROOK] = false;
                        pos.moved[WHITE_KING] = false;
                    }
                    'k' => {
                        pos.moved[BLACK_KINGSIDE_ROOK] = false;
                        pos.moved[BLACK_KING] = false;
                    }
                    'q' => {
                        pos.moved[BLACK_QUEENSIDE_ROOK] = false;
                        pos.moved[BLACK_KING] = false;
                    }
                    _ => {}
                }
            }
        }

        Some(pos)
    }

    /// FEN of the position with `side` to move. Move counters are always `0 1`.
    pub fn to_fen(&self, side: Color) -> String {
        let mut fen = String::new();
        for row in 0..8 {
            let mut empty = 0;
            for col in 0..8 {
                let piece = self.position[row * 8 + col];
                if piece.is_none() {
                    empty += 1;
                    continue;
                }
                if empty > 0 {
                    fen.push_str(&empty.to_string());
                    empty = 0;
                }
                fen.push(piece.to_char());
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if row != 7 {
                fen.push('/');
            }
        }

        fen.push_str(match side {
            Color::White => " w ",
            Color::Black => " b ",
        });

        let mut castling = String::new();
        for (color, move_type, letter) in [
            (Color::White, MoveType::CastleKingside, 'K'),
            (Color::White, MoveType::CastleQueenside, 'Q'),
            (Color::Black, MoveType::CastleKingside, 'k'),
            (Color::Black, MoveType::CastleQueenside, 'q'),
        ] {
            if self.has_castling_right(color, move_type) {
                castling.push(letter);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }
        fen.push_str(&castling);
        fen.push_str(" - 0 1");
        fen
    }

    /// Squares holding a piece of `color`, in row-major order.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        self.position
            .iter()
            .enumerate()
            .filter(move |(_, p)| p.is(color))
            .map(|(idx, _)| Square::from_index(idx))
    }

    /// Rook origin and destination for a castling move of `color`.
    pub fn castling_rook_squares(color: Color, move_type: MoveType) -> (Square, Square) {
        let row = color.back_row();
        match move_type {
            MoveType::CastleKingside => (Square::new(row, 7), Square::new(row, 5)),
            MoveType::CastleQueenside => (Square::new(row, 0), Square::new(row, 3)),
            MoveType::Normal => unreachable!("normal moves do not relocate a rook"),
        }
    }

    /// Unmoved king on its e-square and unmoved own rook on the matching corner. Says nothing
    /// about the squares in between.
    pub fn has_castling_right(&self, color: Color, move_type: MoveType) -> bool {
        let (king_flag, rook_flag) = match (color, move_type) {
            (Color::White, MoveType::CastleKingside) => (WHITE_KING, WHITE_KINGSIDE_ROOK),
            (Color::White, MoveType::CastleQueenside) => (WHITE_KING, WHITE_QUEENSIDE_ROOK),
            (Color::Black, MoveType::CastleKingside) => (BLACK_KING, BLACK_KINGSIDE_ROOK),
            (Color::Black, MoveType::CastleQueenside) => (BLACK_KING, BLACK_QUEENSIDE_ROOK),
            (_, MoveType::Normal) => return false,
        };
        let row = color.back_row();
        let (rook_from, _) = Self::castling_rook_squares(color, move_type);

        !self.moved[king_flag]
            && !self.moved[rook_flag]
            && self[Square::new(row, 4)] == Piece::new(color, Type::King)
            && self[rook_from] == Piece::new(color, Type::Rook)
    }

    fn record_moved(&mut self, piece: Piece, from: Square) {
        let home = piece.color.back_row();
        let (king, kingside, queenside) = match piece.color {
            Color::White => (WHITE_KING, WHITE_KINGSIDE_ROOK, WHITE_QUEENSIDE_ROOK),
            Color::Black => (BLACK_KING, BLACK_KINGSIDE_ROOK, BLACK_QUEENSIDE_ROOK),
        };
        match piece.piece_type {
            Type::King => self.moved[king] = true,
            Type::Rook if from == Square::new(home, 7) => self.moved[kingside] = true,
            Type::Rook if from == Square::new(home, 0) => self.moved[queenside] = true,
            _ => {}
        }
    }

    /// Applies `mv` in place and returns what is needed to take it back.
    ///
    /// The destination is overwritten and the origin cleared. A castling tag additionally
    /// relocates the matching rook and sets the game-global castled flag.
    pub fn make_move(&mut self, mv: Move) -> UndoInfo {
        let from = mv.from_square();
        let to = mv.to_square();
        let moving_piece = self[from];

        let undo = UndoInfo {
            captured_piece: self[to],
            moved: self.moved,
            has_castled: self.has_castled,
        };

        self.record_moved(moving_piece, from);
        // A rook taken on its corner takes the right with it.
        if undo.captured_piece.piece_type == Type::Rook {
            self.record_moved(undo.captured_piece, to);
        }
        self[to] = moving_piece;
        self[from] = Piece::none();

        if mv.move_type().is_castling() {
            let (rook_from, rook_to) = Self::castling_rook_squares(moving_piece.color, mv.move_type());
            let rook = self[rook_from];
            self.record_moved(rook, rook_from);
            self[rook_to] = rook;
            self[rook_from] = Piece::none();
            self.has_castled = true;
        }

        undo
    }

    /// Reverses `make_move(mv)`. `undo` must come from that exact call.
    pub fn unmake_move(&mut self, mv: Move, undo: UndoInfo) {
        let from = mv.from_square();
        let to = mv.to_square();

        if mv.move_type().is_castling() {
            let (rook_from, rook_to) = Self::castling_rook_squares(self[to].color, mv.move_type());
            self[rook_from] = self[rook_to];
            self[rook_to] = Piece::none();
        }

        self[from] = self[to];
        self[to] = undo.captured_piece;
        self.moved = undo.moved;
        self.has_castled = undo.has_castled;
    }
}
