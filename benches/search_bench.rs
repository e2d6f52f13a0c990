use criterion::{black_box, criterion_group, criterion_main, Criterion};
use terminal_chess::agent::ai::{evaluate, select_best_move, FanOut, SearchConfig, SearchContext};
use terminal_chess::game_repr::{Color, Position, Rules};

const MIDDLEGAME: &str = "r1bq1rk1/pppp1ppp/2n2n2/2b1p3/2B1P3/3P1N2/PPP2PPP/RNBQ1RK1";

fn bench_move_generation(c: &mut Criterion) {
    let pos = Position::from_fen(MIDDLEGAME).unwrap();
    let rules = Rules::default();
    c.bench_function("all_moves middlegame", |b| {
        b.iter(|| black_box(pos.all_moves(Color::White, &rules)))
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let pos = Position::from_fen(MIDDLEGAME).unwrap();
    c.bench_function("evaluate middlegame", |b| {
        b.iter(|| black_box(evaluate(&pos, false)))
    });
}

fn bench_search(c: &mut Criterion, name: &str, fan_out: FanOut) {
    let mut pos = Position::default();
    let reference = evaluate(&pos, true);
    c.bench_function(name, |b| {
        b.iter(|| {
            let mut ctx = SearchContext::new(SearchConfig {
                opening: true,
                fan_out,
                ..SearchConfig::default()
            });
            black_box(select_best_move(&mut pos, 4, Color::White, reference, &mut ctx).unwrap())
        })
    });
}

fn bench_search_depth_4(c: &mut Criterion) {
    bench_search(c, "search depth 4 sequential", FanOut::Sequential);
    bench_search(c, "search depth 4 parallel", FanOut::Parallel { min_depth: 2 });
}

criterion_group!(benches, bench_move_generation, bench_evaluate, bench_search_depth_4);
criterion_main!(benches);
