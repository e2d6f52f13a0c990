use super::{empty_board, has_move, place_piece, sq};
use crate::game_repr::{Color, Rules};

// ==================== KING MOVEMENT TESTS ====================

#[test]
fn test_king_moves_all_directions() {
    let mut pos = empty_board();
    place_piece(&mut pos, "d4", 'K');

    let moves = pos.king_moves(sq("d4"), &Rules::default());
    assert_eq!(moves.len(), 8, "King should have 8 moves from center");
    for target in ["c3", "c4", "c5", "d3", "d5", "e3", "e4", "e5"] {
        assert!(has_move(&moves, "d4", target));
    }
}

#[test]
fn test_king_cannot_capture_own_pieces() {
    let mut pos = empty_board();
    place_piece(&mut pos, "d4", 'K');
    place_piece(&mut pos, "d5", 'P');
    place_piece(&mut pos, "e4", 'P');
    place_piece(&mut pos, "c4", 'p');

    let moves = pos.king_moves(sq("d4"), &Rules::default());
    assert_eq!(moves.len(), 6);
    assert!(!has_move(&moves, "d4", "d5"));
    assert!(!has_move(&moves, "d4", "e4"));
    assert!(has_move(&moves, "d4", "c4"));
}

#[test]
fn test_king_cannot_wrap_around_board() {
    let mut pos = empty_board();
    place_piece(&mut pos, "h4", 'k');

    let moves = pos.king_moves(sq("h4"), &Rules::default());
    assert_eq!(moves.len(), 5);
    assert!(!has_move(&moves, "h4", "a4"));
    assert!(!has_move(&moves, "h4", "a5"));
}

#[test]
fn test_bare_kings_only_king_moves() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e1", 'K');
    place_piece(&mut pos, "e8", 'k');

    let moves = pos.all_moves(Color::Black, &Rules::default());
    assert_eq!(moves.len(), 5);
    assert!(moves.iter().all(|m| m.from_square() == sq("e8")));
    for target in ["d8", "f8", "d7", "e7", "f7"] {
        assert!(has_move(&moves, "e8", target));
    }
}

#[test]
fn test_king_may_step_next_to_enemy_king() {
    // Pseudo-legal: attacked squares are not filtered.
    let mut pos = empty_board();
    place_piece(&mut pos, "e4", 'K');
    place_piece(&mut pos, "e6", 'k');

    let moves = pos.king_moves(sq("e4"), &Rules::default());
    assert!(has_move(&moves, "e4", "e5"));
}
