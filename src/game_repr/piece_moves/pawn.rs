use super::MoveList;
use crate::game_repr::{Color, Move, Position, Square};

impl Position {
    /// Pushes and diagonal captures. No en passant and no promotion: a pawn on the last
    /// row simply has nothing to push to.
    pub fn pawn_moves_into(&self, from: Square, moves: &mut MoveList) {
        let pawn = self[from];
        let dir = pawn.color.forward();
        let start_row = match pawn.color {
            Color::White => 6,
            Color::Black => 1,
        };

        if let Some(one) = from.offset(dir, 0).filter(|sq| self[*sq].is_none()) {
            moves.push(Move::normal(from, one));
            if from.row == start_row {
                if let Some(two) = from.offset(2 * dir, 0).filter(|sq| self[*sq].is_none()) {
                    moves.push(Move::normal(from, two));
                }
            }
        }

        for dc in [-1, 1] {
            if let Some(target) = from.offset(dir, dc) {
                if self[target].is_enemy_of(pawn.color) {
                    moves.push(Move::normal(from, target));
                }
            }
        }
    }

    pub fn pawn_moves(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        self.pawn_moves_into(from, &mut moves);
        moves
    }
}
