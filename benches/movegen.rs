//! Move generation and turn throughput.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dog_engine::{Dog, DogBuilder, Game, GamePhase, RandomPlayer};

/// A mid-game position: marbles spread out, hands still full enough to branch.
fn midgame() -> Dog {
    let mut game = DogBuilder::new().build(17).unwrap();
    let mut player = RandomPlayer::new(17);
    for _ in 0..60 {
        if game.state().unwrap().phase == GamePhase::Finished {
            break;
        }
        game.play_turn(&mut player).unwrap();
    }
    game
}

fn bench_legal_actions(c: &mut Criterion) {
    let game = midgame();
    c.bench_function("legal_actions_midgame", |b| {
        b.iter(|| black_box(game.get_list_action().unwrap()))
    });
    c.bench_function("seven_splits_midgame", |b| {
        b.iter(|| black_box(game.seven_splits().unwrap()))
    });
}

fn bench_play_round(c: &mut Criterion) {
    c.bench_function("play_24_turns", |b| {
        b.iter(|| {
            let mut game = DogBuilder::new().build(3).unwrap();
            let mut player = RandomPlayer::new(3);
            for _ in 0..24 {
                game.play_turn(&mut player).unwrap();
            }
            black_box(game)
        })
    });
}

criterion_group!(benches, bench_legal_actions, bench_play_round);
criterion_main!(benches);
