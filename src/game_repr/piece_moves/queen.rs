use super::bishop::DIAGONALS;
use super::rook::ORTHOGONALS;
use super::MoveList;
use crate::game_repr::{Position, Square};

impl Position {
    /// Generate queen moves into a provided buffer: orthogonal rays first, then diagonals.
    pub fn queen_moves_into(&self, from: Square, moves: &mut MoveList) {
        self.slide_moves_into(from, &ORTHOGONALS, moves);
        self.slide_moves_into(from, &DIAGONALS, moves);
    }

    pub fn queen_moves(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        self.queen_moves_into(from, &mut moves);
        moves
    }
}
