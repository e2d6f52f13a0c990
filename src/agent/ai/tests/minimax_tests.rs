// Tests for the recursive search

use super::{fen, sq};
use crate::agent::ai::evaluation::evaluate;
use crate::agent::ai::minimax::{search_value, BLACK_NO_MOVES, WHITE_NO_MOVES};
use crate::agent::ai::{Exhaustive, FanOut, SearchConfig, SearchContext};
use crate::game_repr::{Color, Move, Position};
use std::sync::Arc;

fn exhaustive(max_depth: u8) -> SearchContext {
    SearchContext::new(SearchConfig {
        max_depth,
        pruning: Arc::new(Exhaustive),
        ..SearchConfig::default()
    })
}

fn margin(max_depth: u8) -> SearchContext {
    SearchContext::new(SearchConfig {
        max_depth,
        ..SearchConfig::default()
    })
}

#[test]
fn test_depth_zero_is_static_evaluation() {
    let mut pos = fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R KQkq");
    let mut ctx = margin(5);

    let score = search_value(&mut pos, 0, Color::White, 0, &mut ctx).unwrap();

    assert_eq!(score, evaluate(&pos, false));
    assert_eq!(ctx.positions_evaluated(), 1);
}

#[test]
fn test_depth_one_counts_every_leaf() {
    let mut pos = Position::default();
    let mut ctx = exhaustive(1);

    search_value(&mut pos, 1, Color::White, 0, &mut ctx).unwrap();
    assert_eq!(ctx.positions_evaluated(), 20);
}

#[test]
fn test_white_maximises_black_minimises() {
    // Whoever moves takes the other side's heavy piece.
    let mut pos = fen("4k3/8/8/3q4/8/8/3R4/4K3");

    let white = search_value(&mut pos, 1, Color::White, 0, &mut exhaustive(1)).unwrap();
    let black = search_value(&mut pos, 1, Color::Black, 0, &mut exhaustive(1)).unwrap();

    let mut after_rxq = pos.clone();
    after_rxq.make_move(Move::normal(sq("d2"), sq("d5")));
    let mut after_qxr = pos.clone();
    after_qxr.make_move(Move::normal(sq("d5"), sq("d2")));

    assert_eq!(white, evaluate(&after_rxq, false));
    assert_eq!(black, evaluate(&after_qxr, false));
}

#[test]
fn test_no_moves_returns_identity() {
    // Black's only pawn is blocked; White has only a king.
    let mut pos = fen("8/8/8/p7/P7/8/8/7K");
    assert_eq!(
        search_value(&mut pos, 2, Color::Black, 0, &mut exhaustive(2)).unwrap(),
        BLACK_NO_MOVES
    );

    let mut empty = Position::empty();
    assert_eq!(
        search_value(&mut empty, 3, Color::White, 0, &mut exhaustive(3)).unwrap(),
        WHITE_NO_MOVES
    );
}

#[test]
fn test_search_restores_position() {
    let mut pos = fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R KQkq");
    let before = pos.clone();

    search_value(&mut pos, 3, Color::White, 0, &mut margin(3)).unwrap();
    assert_eq!(pos, before);
}

#[test]
fn test_margin_cutoff_is_not_exhaustive() {
    // The rook on d5 hangs to the bishop, but the node is already 15 above the
    // reference, so the margin cutoff stops before looking at Bxd5.
    let mut pos = fen("4k3/5b2/8/3R4/8/8/8/4K3");
    let static_eval = evaluate(&pos, false);
    assert_eq!(static_eval, 15);

    let pruned = search_value(&mut pos, 1, Color::Black, 0, &mut margin(4)).unwrap();
    let full = search_value(&mut pos, 1, Color::Black, 0, &mut exhaustive(4)).unwrap();

    assert_eq!(pruned, static_eval);
    assert_eq!(full, -39);
    assert_ne!(pruned, full);
}

#[test]
fn test_margin_cutoff_inactive_near_root_or_below_margin() {
    let mut pos = fen("4k3/5b2/8/3R4/8/8/8/4K3");

    // Only two plies below a depth-3 root: never probed.
    let near_root = search_value(&mut pos, 1, Color::Black, 0, &mut margin(3)).unwrap();
    // Probed, but 15 is within 10 of a reference of 10.
    let within = search_value(&mut pos, 1, Color::Black, 10, &mut margin(4)).unwrap();

    assert_eq!(near_root, -39);
    assert_eq!(within, -39);
}

#[test]
fn test_parallel_matches_sequential() {
    let fens = [
        "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R KQkq",
        "4k3/5b2/8/3R4/8/8/8/4K3",
    ];
    for f in fens {
        for side in [Color::White, Color::Black] {
            let mut pos = fen(f);
            let mut seq = margin(4);
            let mut par = SearchContext::new(SearchConfig {
                max_depth: 4,
                fan_out: FanOut::Parallel { min_depth: 1 },
                ..SearchConfig::default()
            });

            let a = search_value(&mut pos, 3, side, 0, &mut seq).unwrap();
            let b = search_value(&mut pos, 3, side, 0, &mut par).unwrap();

            assert_eq!(a, b, "{} {:?}", f, side);
            assert_eq!(seq.positions_evaluated(), par.positions_evaluated());
            assert_eq!(pos, fen(f));
        }
    }
}
