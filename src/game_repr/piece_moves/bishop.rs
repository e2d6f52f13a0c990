use super::MoveList;
use crate::game_repr::{Position, Square};

pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

impl Position {
    /// Generate bishop moves into a provided buffer
    pub fn bishop_moves_into(&self, from: Square, moves: &mut MoveList) {
        self.slide_moves_into(from, &DIAGONALS, moves);
    }

    pub fn bishop_moves(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        self.bishop_moves_into(from, &mut moves);
        moves
    }
}
