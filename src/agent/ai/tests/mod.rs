use crate::game_repr::{Position, Square};

/// Square from its algebraic name
pub fn sq(name: &str) -> Square {
    let bytes = name.as_bytes();
    Square::new(b'8' - bytes[1], bytes[0] - b'a')
}

pub fn fen(fen: &str) -> Position {
    Position::from_fen(fen).unwrap()
}

mod minimax_tests;
