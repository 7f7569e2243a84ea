use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use kwazam_chess::game_state::game_state::GameState;
use kwazam_chess::move_generation::legal_move_generator::generate_all_legal_moves;
use kwazam_chess::utils::playout_harness::{run_random_playout, PlayoutConfig};

fn bench_move_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_enumeration");

    let starting = GameState::new_game();
    group.throughput(Throughput::Elements(1));
    group.bench_function("starting_position", |b| {
        b.iter(|| {
            let moves = generate_all_legal_moves(black_box(&starting));
            assert_eq!(moves.len(), 9);
            moves
        })
    });

    // A mid-game position reached by a fixed random playout prefix.
    let mid_game = run_random_playout(&PlayoutConfig {
        seed: 42,
        max_moves: 20,
    })
    .final_state;
    group.bench_function("mid_game_position", |b| {
        b.iter(|| generate_all_legal_moves(black_box(&mid_game)))
    });

    group.finish();
}

fn bench_playouts(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_playouts");

    for max_moves in [50u32, 200u32] {
        group.throughput(Throughput::Elements(u64::from(max_moves)));
        group.bench_with_input(
            BenchmarkId::new("seeded_game", max_moves),
            &max_moves,
            |b, &max_moves| {
                b.iter(|| {
                    run_random_playout(black_box(&PlayoutConfig {
                        seed: 7,
                        max_moves,
                    }))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_move_enumeration, bench_playouts);
criterion_main!(benches);
