use super::MoveList;
use crate::game_repr::{Position, Square};

// s, n, e, w
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

impl Position {
    /// Generate rook moves into a provided buffer
    pub fn rook_moves_into(&self, from: Square, moves: &mut MoveList) {
        self.slide_moves_into(from, &ORTHOGONALS, moves);
    }

    pub fn rook_moves(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        self.rook_moves_into(from, &mut moves);
        moves
    }
}
