pub mod pawn;
pub mod knight;
pub mod bishop;
pub mod rook;
pub mod queen;
pub mod king;

use smallvec::SmallVec;

use super::{Color, Move, Position, Square, Type};

/// Per-piece move buffer. No piece has more than 27 pseudo-legal moves.
pub type MoveList = SmallVec<[Move; 32]>;

/// How much of the rules of chess the generator enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Legality {
    /// Piece movement only. Moves that leave the mover's own king attacked are generated.
    PseudoLegal,
}

/// Move generation switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rules {
    /// Generate two-square king moves tagged as castling, for both colors.
    pub castling: bool,
}

impl Rules {
    /// The generator never filters self-check, detects mate, or knows en passant and promotion.
    pub const LEGALITY: Legality = Legality::PseudoLegal;

    pub fn with_castling() -> Self {
        Self { castling: true }
    }
}

impl Position {
    /// Walks each ray in `directions` one square at a time.
    ///
    /// Empty squares are added and the walk continues. An enemy piece is added and stops the
    /// ray, an own piece stops it without being added.
    pub(crate) fn slide_moves_into(
        &self,
        from: Square,
        directions: &[(i8, i8)],
        moves: &mut MoveList,
    ) {
        let color = self[from].color;
        for &(dr, dc) in directions {
            let mut current = from;
            while let Some(target) = current.offset(dr, dc) {
                let piece = self[target];
                if piece.is_none() {
                    moves.push(Move::normal(from, target));
                } else {
                    if piece.is_enemy_of(color) {
                        moves.push(Move::normal(from, target));
                    }
                    break;
                }
                current = target;
            }
        }
    }

    /// Adds single-step moves for each offset that lands on an empty or enemy square.
    pub(crate) fn step_moves_into(
        &self,
        from: Square,
        offsets: &[(i8, i8)],
        moves: &mut MoveList,
    ) {
        let color = self[from].color;
        for &(dr, dc) in offsets {
            if let Some(target) = from.offset(dr, dc) {
                let piece = self[target];
                if piece.is_none() || piece.is_enemy_of(color) {
                    moves.push(Move::normal(from, target));
                }
            }
        }
    }

    /// Pseudo-legal moves for whatever stands on `sq`. Empty for an empty square.
    pub fn moves_for(&self, sq: Square, rules: &Rules) -> MoveList {
        let mut moves = MoveList::new();
        self.moves_for_into(sq, rules, &mut moves);
        moves
    }

    pub fn moves_for_into(&self, sq: Square, rules: &Rules, moves: &mut MoveList) {
        match self[sq].piece_type {
            Type::Pawn => self.pawn_moves_into(sq, moves),
            Type::Knight => self.knight_moves_into(sq, moves),
            Type::Bishop => self.bishop_moves_into(sq, moves),
            Type::Rook => self.rook_moves_into(sq, moves),
            Type::Queen => self.queen_moves_into(sq, moves),
            Type::King => self.king_moves_into(sq, rules, moves),
            Type::None => {}
        }
    }

    /// Every pseudo-legal move of `side`, squares visited in row-major order.
    ///
    /// The order is the search's move ordering and decides ties between equal scores.
    pub fn all_moves(&self, side: Color, rules: &Rules) -> Vec<Move> {
        let mut moves = Vec::with_capacity(48);
        let mut buf = MoveList::new();
        for sq in self.squares_of(side) {
            buf.clear();
            self.moves_for_into(sq, rules, &mut buf);
            moves.extend_from_slice(&buf);
        }
        moves
    }
}
