use super::sq;
use crate::error::NotationError;
use crate::game_repr::notation::{square_name, to_algebraic, to_coordinates};
use crate::game_repr::*;

#[test]
fn test_e2e4_maps_to_rows_and_columns() {
    let parsed = to_coordinates("e2e4").unwrap();

    assert_eq!(parsed.from, Square::new(6, 4));
    assert_eq!(parsed.to, Square::new(4, 4));
    assert_eq!(parsed.tag, None);
}

#[test]
fn test_corners() {
    assert_eq!(sq("a8"), Square::new(0, 0));
    assert_eq!(square_name(Square::new(0, 0)), "a8");
    assert_eq!(square_name(Square::new(7, 7)), "h1");
}

#[test]
fn test_to_algebraic_inverts_to_coordinates() {
    let mv = Move::normal(sq("g8"), sq("f6"));
    assert_eq!(to_algebraic(&mv), "g8f6");

    let parsed = to_coordinates(&to_algebraic(&mv)).unwrap();
    assert!(parsed.matches(&mv));
}

#[test]
fn test_castle_tag() {
    let parsed = to_coordinates("e1g1k").unwrap();
    assert_eq!(parsed.tag, Some(MoveType::CastleKingside));

    let castle = Move::new(sq("e1"), sq("g1"), MoveType::CastleKingside);
    let plain = Move::normal(sq("e1"), sq("g1"));
    assert!(parsed.matches(&castle));
    assert!(!parsed.matches(&plain));
    assert!(to_coordinates("e1g1").unwrap().matches(&castle));
}

#[test]
fn test_malformed_input() {
    assert_eq!(to_coordinates("e2"), Err(NotationError::BadLength { len: 2 }));
    assert_eq!(to_coordinates("i2e4"), Err(NotationError::BadFile { file: 'i' }));
    assert_eq!(to_coordinates("e9e4"), Err(NotationError::BadRank { rank: '9' }));
    assert_eq!(to_coordinates("e7e8q").map(|p| p.tag), Ok(Some(MoveType::CastleQueenside)));
    assert_eq!(to_coordinates("e7e8n"), Err(NotationError::BadTag { tag: 'n' }));
}
