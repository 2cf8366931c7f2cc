use super::board::Board;
use super::bot_controller::calculate_move;
use super::types::{Difficulty, GameStatus, Line, Mark, Outcome};
use super::win_detector::evaluate;
use crate::games::session_rng::SessionRng;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub player_wins: u32,
    pub bot_wins: u32,
    pub draws: u32,
}

// One human-versus-bot game. X is the human and always opens; the
// scoreboard survives round resets.
#[derive(Debug)]
pub struct TicTacToeGameState {
    board: Board,
    status: GameStatus,
    current_mark: Mark,
    difficulty: Difficulty,
    last_move: Option<usize>,
    winning_line: Option<Line>,
    scoreboard: Scoreboard,
}

impl TicTacToeGameState {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::InProgress,
            current_mark: Mark::X,
            difficulty,
            last_move: None,
            winning_line: None,
            scoreboard: Scoreboard::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    pub fn place_player_mark(&mut self, index: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }
        if self.current_mark != Mark::X {
            return Err("Not the player's turn".to_string());
        }

        self.apply_move(index, Mark::X)
    }

    pub fn play_bot_move(&mut self, rng: &mut SessionRng) -> Result<usize, String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }
        if self.current_mark != Mark::O {
            return Err("Not the bot's turn".to_string());
        }

        let index = calculate_move(&self.board, self.difficulty, rng)
            .ok_or_else(|| "No moves available".to_string())?;
        self.apply_move(index, Mark::O)?;
        Ok(index)
    }

    fn apply_move(&mut self, index: usize, mark: Mark) -> Result<(), String> {
        self.board.set_cell(index, mark)?;
        self.last_move = Some(index);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::X {
            Mark::O
        } else {
            Mark::X
        };
    }

    fn check_game_over(&mut self) {
        match evaluate(&self.board) {
            Outcome::Win { mark, line } => {
                self.winning_line = Some(line);
                match mark {
                    Mark::X => {
                        self.status = GameStatus::XWon;
                        self.scoreboard.player_wins += 1;
                    }
                    Mark::O => {
                        self.status = GameStatus::OWon;
                        self.scoreboard.bot_wins += 1;
                    }
                    Mark::Empty => unreachable!(),
                }
            }
            Outcome::Draw => {
                self.status = GameStatus::Draw;
                self.scoreboard.draws += 1;
            }
            Outcome::InProgress => {}
        }
    }

    pub fn start_new_round(&mut self) {
        self.board = Board::new();
        self.status = GameStatus::InProgress;
        self.current_mark = Mark::X;
        self.last_move = None;
        self.winning_line = None;
    }

    pub fn reset_scores(&mut self) {
        self.scoreboard = Scoreboard::default();
    }
}
