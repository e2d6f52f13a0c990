// Static position evaluation
// Returns a score where positive favours White and negative favours Black,
// regardless of whose turn it is.

use crate::game_repr::{Color, Piece, Position, Square, Type};

// Material values
const PAWN_VALUE: i32 = 10;
const KNIGHT_VALUE: i32 = 30;
const BISHOP_VALUE: i32 = 30;
const ROOK_VALUE: i32 = 50;
const QUEEN_VALUE: i32 = 90;
const KING_VALUE: i32 = 100_000;

// Positional terms
const DEVELOPMENT_BONUS: i32 = 5;
const CENTRAL_KNIGHT_BONUS: i32 = 3;
const DEFENDED_PAWN_BONUS: i32 = 4;
const ADVANCED_PAWN_BONUS: i32 = 3;
const CENTER_BONUS: i32 = 4;
const OPENING_CENTER_MULTIPLIER: i32 = 2;

/// Applied once when anyone has castled, whichever side it was.
pub const CASTLED_ADJUSTMENT: i32 = -10;

/// Plies from the start of the game during which the opening flag is set.
pub const OPENING_PLIES: u32 = 16;

pub fn is_opening(ply: u32) -> bool {
    ply < OPENING_PLIES
}

pub fn piece_value(piece_type: Type) -> i32 {
    match piece_type {
        Type::Pawn => PAWN_VALUE,
        Type::Knight => KNIGHT_VALUE,
        Type::Bishop => BISHOP_VALUE,
        Type::Rook => ROOK_VALUE,
        Type::Queen => QUEEN_VALUE,
        Type::King => KING_VALUE,
        Type::None => 0,
    }
}

fn is_center(sq: Square) -> bool {
    (sq.row == 3 || sq.row == 4) && (sq.col == 3 || sq.col == 4)
}

fn is_inner_block(sq: Square) -> bool {
    (2..=5).contains(&sq.row) && (2..=5).contains(&sq.col)
}

/// Same-colour pawns standing diagonally behind `sq`.
fn pawn_defenders(pos: &Position, sq: Square, color: Color) -> i32 {
    let behind = -color.forward();
    [-1, 1]
        .iter()
        .filter_map(|&dc| sq.offset(behind, dc))
        .filter(|d| pos[*d] == Piece::new(color, Type::Pawn))
        .count() as i32
}

fn is_advanced_pawn(sq: Square, color: Color) -> bool {
    match color {
        Color::White => sq.row < 6,
        Color::Black => sq.row > 2,
    }
}

/// Score of one piece from its owner's point of view.
fn piece_score(pos: &Position, sq: Square, piece: Piece, opening: bool) -> i32 {
    let mut score = piece_value(piece.piece_type);

    match piece.piece_type {
        Type::Knight | Type::Bishop if sq.row != piece.color.back_row() => {
            score += DEVELOPMENT_BONUS;
        }
        _ => {}
    }

    if piece.piece_type == Type::Knight && is_inner_block(sq) {
        score += CENTRAL_KNIGHT_BONUS;
    }

    if piece.piece_type == Type::Pawn {
        score += DEFENDED_PAWN_BONUS * pawn_defenders(pos, sq, piece.color);
        if is_advanced_pawn(sq, piece.color) {
            score += ADVANCED_PAWN_BONUS;
        }
    }

    if matches!(piece.piece_type, Type::Pawn | Type::Bishop) && is_center(sq) {
        score += if opening {
            CENTER_BONUS * OPENING_CENTER_MULTIPLIER
        } else {
            CENTER_BONUS
        };
    }

    score
}

/// Static evaluation. Pure: reads the position and nothing else.
pub fn evaluate(pos: &Position, opening: bool) -> i32 {
    let mut score = 0;

    for (idx, piece) in pos.position.iter().enumerate() {
        if piece.is_none() {
            continue;
        }
        let value = piece_score(pos, Square::from_index(idx), *piece, opening);
        match piece.color {
            Color::White => score += value,
            Color::Black => score -= value,
        }
    }

    if pos.has_castled {
        score += CASTLED_ADJUSTMENT;
    }

    score
}

/// `evaluate`, incrementing `counter` once per call.
pub fn evaluate_counted(pos: &Position, opening: bool, counter: &mut u64) -> i32 {
    *counter += 1;
    evaluate(pos, opening)
}
