use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Helper function to create an empty board
pub fn empty_board() -> Position {
    Position::empty()
}

/// Square from its algebraic name, e.g. `sq("e2") == Square::new(6, 4)`
pub fn sq(name: &str) -> Square {
    let bytes = name.as_bytes();
    let col = bytes[0] - b'a';
    let row = b'8' - bytes[1];
    Square::new(row, col)
}

/// Helper function to place a piece given as a token (`'N'` white knight, `'p'` black pawn)
pub fn place_piece(pos: &mut Position, name: &str, token: char) {
    pos[sq(name)] = Piece::from_char(token).unwrap();
}

/// Helper function to check if a move exists in the move list
pub fn has_move(moves: &[Move], from: &str, to: &str) -> bool {
    moves.iter().any(|m| m.same_squares(sq(from), sq(to)))
}

// ==================== TEST MODULES ====================

mod king_movement;
mod notation;
