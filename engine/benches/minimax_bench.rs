use criterion::{Criterion, criterion_group, criterion_main};
use engine::games::SessionRng;
use engine::games::tictactoe::{
    Board, Difficulty, GameStatus, Mark, TicTacToeGameState, calculate_move,
};

fn bench_best_move_empty_board() {
    let board = Board::new();
    let mut rng = SessionRng::new(7);
    calculate_move(&board, Difficulty::Hard, &mut rng);
}

fn bench_best_move_mid_game() {
    use engine::games::tictactoe::Mark::{Empty as E, O, X};
    let board = Board::from_cells([X, E, E, E, O, E, E, E, X]);
    let mut rng = SessionRng::new(7);
    calculate_move(&board, Difficulty::Hard, &mut rng);
}

fn bench_full_game_random_vs_hard() {
    let mut rng = SessionRng::new(7);
    let mut game = TicTacToeGameState::new(Difficulty::Hard);

    while game.status() == GameStatus::InProgress {
        if game.current_mark() == Mark::X {
            let available = game.board().available_moves();
            let pick = rng.random_range(0..available.len());
            game.place_player_mark(available[pick]).unwrap();
        } else {
            game.play_bot_move(&mut rng).unwrap();
        }
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.bench_function("best_move_empty_board", |b| {
        b.iter(bench_best_move_empty_board)
    });

    group.bench_function("best_move_mid_game", |b| b.iter(bench_best_move_mid_game));

    group.bench_function("full_game_random_vs_hard", |b| {
        b.iter(bench_full_game_random_vs_hard)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
