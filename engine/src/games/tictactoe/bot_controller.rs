use super::board::Board;
use super::types::{CELL_COUNT, Difficulty, Mark, Outcome};
use super::win_detector::evaluate;
use crate::games::session_rng::SessionRng;

pub fn calculate_move(
    board: &Board,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Option<usize> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(board, rng),
        // Fresh coin flip on every call, so the opponent's strength varies
        // within a single game.
        Difficulty::Medium => {
            if rng.random_bool() {
                calculate_random_move(board, rng)
            } else {
                calculate_best_move(board)
            }
        }
        Difficulty::Hard => calculate_best_move(board),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return None;
    }

    let pick = rng.random_range(0..available_moves.len());
    Some(available_moves[pick])
}

fn calculate_best_move(board: &Board) -> Option<usize> {
    let mut search_board = board.clone();
    let mut best_move = None;
    let mut best_score = i32::MIN;

    // Candidates come out in ascending index order, and only a strictly
    // better score replaces the current best. Ties go to the lowest index.
    for index in board.available_moves() {
        search_board.place(index, Mark::O);
        let score = minimax(&mut search_board, false);
        search_board.clear(index);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

// Exhaustive game-tree search. O maximizes, X minimizes; the score of a
// terminal position is +1 for an O win, -1 for an X win, 0 for a draw.
// The board is restored to its input state before every return.
pub(crate) fn minimax(board: &mut Board, is_maximizing: bool) -> i32 {
    match evaluate(board) {
        Outcome::Win { mark, .. } => {
            return if mark == Mark::O { 1 } else { -1 };
        }
        Outcome::Draw => return 0,
        Outcome::InProgress => {}
    }

    if is_maximizing {
        let mut best_score = i32::MIN;
        for index in 0..CELL_COUNT {
            if board.cells()[index] != Mark::Empty {
                continue;
            }
            board.place(index, Mark::O);
            best_score = best_score.max(minimax(board, false));
            board.clear(index);
        }
        best_score
    } else {
        let mut best_score = i32::MAX;
        for index in 0..CELL_COUNT {
            if board.cells()[index] != Mark::Empty {
                continue;
            }
            board.place(index, Mark::X);
            best_score = best_score.min(minimax(board, true));
            board.clear(index);
        }
        best_score
    }
}
