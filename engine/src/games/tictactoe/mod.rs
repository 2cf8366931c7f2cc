mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::calculate_move;
pub use game_state::{Scoreboard, TicTacToeGameState};
pub use types::{CELL_COUNT, Difficulty, GameStatus, Line, Mark, Outcome, WINNING_LINES};
pub use win_detector::evaluate;
