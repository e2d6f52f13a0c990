use super::{MoveList, Rules};
use crate::game_repr::{Move, MoveType, Position, Square};

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl Position {
    pub fn king_moves_into(&self, from: Square, rules: &Rules, moves: &mut MoveList) {
        self.step_moves_into(from, &KING_OFFSETS, moves);

        if rules.castling {
            self.castling_moves_into(from, moves);
        }
    }

    pub fn king_moves(&self, from: Square, rules: &Rules) -> MoveList {
        let mut moves = MoveList::new();
        self.king_moves_into(from, rules, &mut moves);
        moves
    }

    /// Two-square king moves onto the g- or c-file.
    ///
    /// Requires an unmoved king on its home square, an unmoved own rook on the matching corner
    /// and empty squares in between. Attacked squares are not checked.
    fn castling_moves_into(&self, from: Square, moves: &mut MoveList) {
        let color = self[from].color;
        let row = color.back_row();
        if from != Square::new(row, 4) {
            return;
        }

        let empty = |cols: &[u8]| cols.iter().all(|&c| self[Square::new(row, c)].is_none());

        if self.has_castling_right(color, MoveType::CastleKingside) && empty(&[5, 6]) {
            moves.push(Move::new(from, Square::new(row, 6), MoveType::CastleKingside));
        }
        if self.has_castling_right(color, MoveType::CastleQueenside) && empty(&[1, 2, 3]) {
            moves.push(Move::new(from, Square::new(row, 2), MoveType::CastleQueenside));
        }
    }
}
