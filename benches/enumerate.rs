//! Legal move enumeration throughput.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use paradox_engine::{apply_full_move, enumerate_legal_moves, new_game, BoardConfig, GameState};

/// A mid-game position: a few deterministic moves in from the opening.
fn midgame(config: BoardConfig) -> GameState {
    let mut state = new_game(config).expect("valid config");
    for i in 0..12 {
        let moves = enumerate_legal_moves(&state);
        if moves.is_empty() {
            break;
        }
        apply_full_move(&mut state, &moves[(i * 7) % moves.len()]).expect("enumerated move");
    }
    state
}

fn bench_enumerate(c: &mut Criterion) {
    let opening = new_game(BoardConfig::default()).expect("valid config");
    c.bench_function("enumerate_opening_r3", |b| {
        b.iter(|| enumerate_legal_moves(black_box(&opening)))
    });

    let middle = midgame(BoardConfig::default());
    c.bench_function("enumerate_midgame_r3", |b| {
        b.iter(|| enumerate_legal_moves(black_box(&middle)))
    });

    let large = midgame(BoardConfig::default().with_radius(6));
    c.bench_function("enumerate_midgame_r6", |b| {
        b.iter(|| enumerate_legal_moves(black_box(&large)))
    });
}

criterion_group!(benches, bench_enumerate);
criterion_main!(benches);
