use engine::games::SessionRng;
use engine::games::tictactoe::{Difficulty, GameStatus, Mark, TicTacToeGameState};
use engine::log;

use crate::input::{prompt_number, prompt_yes_no};

pub fn run(difficulty: Difficulty, rng: &mut SessionRng) -> Result<(), String> {
    log!("Starting tic-tac-toe, difficulty {:?}", difficulty);
    println!("You are X. Cells are numbered 1-9, left to right, top to bottom.");

    let mut game = TicTacToeGameState::new(difficulty);

    loop {
        if game.status() != GameStatus::InProgress {
            render(&game);
            announce(&game);

            if !prompt_yes_no("Play again? [y/n] ")? {
                return Ok(());
            }
            game.start_new_round();
            continue;
        }

        if game.current_mark() == Mark::X {
            render(&game);
            let index = prompt_number("Your move (1-9): ", 1, 9)? - 1;
            if let Err(e) = game.place_player_mark(index) {
                println!("{}", e);
            }
        } else {
            let index = game.play_bot_move(rng)?;
            log!("Bot plays cell {}", index + 1);
        }
    }
}

fn render(game: &TicTacToeGameState) {
    let cells = game.board().cells();
    println!();
    for row in 0..3 {
        let symbols: Vec<String> = (0..3)
            .map(|col| {
                let index = row * 3 + col;
                match cells[index] {
                    Mark::X => "X".to_string(),
                    Mark::O => "O".to_string(),
                    Mark::Empty => (index + 1).to_string(),
                }
            })
            .collect();
        println!(" {} | {} | {}", symbols[0], symbols[1], symbols[2]);
        if row < 2 {
            println!("---+---+---");
        }
    }
    println!();
}

fn announce(game: &TicTacToeGameState) {
    match game.status() {
        GameStatus::XWon => println!("You win!"),
        GameStatus::OWon => println!("The bot wins!"),
        GameStatus::Draw => println!("It's a draw."),
        GameStatus::InProgress => {}
    }

    let scores = game.scoreboard();
    println!(
        "Score: you {} | bot {} | draws {}",
        scores.player_wins, scores.bot_wins, scores.draws
    );
}
