/*-------ARCHITECTURE--------*/

// | 6 bits | 6 bits | 4 bits |
// |  From  |   To   | Type   |
// |        16 bits           |

/// A board coordinate. Row 0 is rank 8 (black's back rank), col 0 is the a-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < 8 && col < 8, "square ({row}, {col}) is off the board");
        Self { row, col }
    }

    pub fn from_index(idx: usize) -> Self {
        Self::new((idx / 8) as u8, (idx % 8) as u8)
    }

    pub fn index(&self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// Square shifted by `(dr, dc)`, or `None` if it leaves the board.
    pub fn offset(&self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveType {
    Normal = 1 << 0,
    CastleKingside = 1 << 1,
    CastleQueenside = 1 << 2,
}

impl MoveType {
    pub fn is_castling(&self) -> bool {
        !matches!(self, MoveType::Normal)
    }
}

impl From<u16> for MoveType {
    fn from(value: u16) -> Self {
        match value {
            x if x == MoveType::Normal as u16 => MoveType::Normal,
            x if x == MoveType::CastleKingside as u16 => MoveType::CastleKingside,
            x if x == MoveType::CastleQueenside as u16 => MoveType::CastleQueenside,
            _ => panic!("Invalid value for MoveType: {}", value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    buf: u16,
}

impl Move {
    pub fn new(from: Square, to: Square, move_type: MoveType) -> Move {
        let mut buf = 0u16;
        buf |= (from.index() as u16) << 10;
        buf |= (to.index() as u16) << 4;
        buf |= move_type as u16;

        Self { buf }
    }

    pub fn normal(from: Square, to: Square) -> Move {
        Self::new(from, to, MoveType::Normal)
    }

    pub fn move_type(&self) -> MoveType {
        (self.buf & 0xF).into()
    }

    pub fn from_square(&self) -> Square {
        Square::from_index(((self.buf >> 10) & 0x3F) as usize)
    }

    pub fn to_square(&self) -> Square {
        Square::from_index(((self.buf >> 4) & 0x3F) as usize)
    }

    /// Same origin and destination, ignoring the kind tag.
    pub fn same_squares(&self, from: Square, to: Square) -> bool {
        self.from_square() == from && self.to_square() == to
    }
}
