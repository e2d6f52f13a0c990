//! Long algebraic notation at the console boundary.
//!
//! Files a-h map to columns 0-7 and ranks 8-1 map to rows 0-7, so `e2e4` is
//! `(6, 4) -> (4, 4)`.

use crate::error::NotationError;

use super::{Move, MoveType, Square};

const FILES: &str = "abcdefgh";
const RANKS: &str = "87654321";

/// Origin and destination parsed from user input, plus an optional castle hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedMove {
    pub from: Square,
    pub to: Square,
    pub tag: Option<MoveType>,
}

impl ParsedMove {
    /// True if `mv` has the same squares and, when a tag was given, the same kind.
    pub fn matches(&self, mv: &Move) -> bool {
        mv.same_squares(self.from, self.to) && self.tag.map_or(true, |t| t == mv.move_type())
    }
}

fn parse_square(file: char, rank: char) -> Result<Square, NotationError> {
    let col = FILES.find(file).ok_or(NotationError::BadFile { file })?;
    let row = RANKS.find(rank).ok_or(NotationError::BadRank { rank })?;
    Ok(Square::new(row as u8, col as u8))
}

pub fn to_coordinates(text: &str) -> Result<ParsedMove, NotationError> {
    let chars: Vec<char> = text.trim().chars().collect();
    if chars.len() != 4 && chars.len() != 5 {
        return Err(NotationError::BadLength { len: chars.len() });
    }

    let from = parse_square(chars[0], chars[1])?;
    let to = parse_square(chars[2], chars[3])?;
    let tag = match chars.get(4) {
        None => None,
        Some('k') => Some(MoveType::CastleKingside),
        Some('q') => Some(MoveType::CastleQueenside),
        Some(&tag) => return Err(NotationError::BadTag { tag }),
    };

    Ok(ParsedMove { from, to, tag })
}

pub fn square_name(sq: Square) -> String {
    let file = FILES.as_bytes()[sq.col as usize] as char;
    let rank = RANKS.as_bytes()[sq.row as usize] as char;
    format!("{file}{rank}")
}

/// Four-character text of a move. Castling moves print as the king's move.
pub fn to_algebraic(mv: &Move) -> String {
    format!("{}{}", square_name(mv.from_square()), square_name(mv.to_square()))
}
