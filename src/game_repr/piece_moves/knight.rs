use super::MoveList;
use crate::game_repr::{Position, Square};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, -1),
    (2, 1),
    (-2, -1),
    (-2, 1),
    (1, -2),
    (1, 2),
    (-1, -2),
    (-1, 2),
];

impl Position {
    /// Generate knight moves into a provided buffer
    pub fn knight_moves_into(&self, from: Square, moves: &mut MoveList) {
        self.step_moves_into(from, &KNIGHT_OFFSETS, moves);
    }

    pub fn knight_moves(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        self.knight_moves_into(from, &mut moves);
        moves
    }
}
