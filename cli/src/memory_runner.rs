use engine::games::SessionRng;
use engine::games::memory::{FlipOutcome, MemoryGameState};
use engine::log;

use crate::input::{prompt_line, prompt_number};

pub fn run(pairs: usize, rng: &mut SessionRng) -> Result<(), String> {
    let mut game = MemoryGameState::new(pairs, rng)?;
    log!("Starting memory game with {} pairs", pairs);
    println!("Find the matching pairs. Cards are numbered starting from 1.");

    while !game.is_complete() {
        render(&game);

        let index = prompt_number("Flip card: ", 1, game.cards().len())? - 1;
        match game.flip(index) {
            Ok(FlipOutcome::FirstCardUp) => {}
            Ok(FlipOutcome::Matched) => println!("Match!"),
            Ok(FlipOutcome::Mismatched) => {
                render(&game);
                prompt_line("No match. Press Enter to turn the cards back. ")?;
                game.turn_down();
            }
            Err(e) => println!("{}", e),
        }
    }

    render(&game);
    println!("Completed in {} moves.", game.moves());
    Ok(())
}

fn render(game: &MemoryGameState) {
    const CARDS_PER_ROW: usize = 4;

    println!();
    for (index, card) in game.cards().iter().enumerate() {
        let symbol = if game.is_revealed(index) {
            card_symbol(card.pair)
        } else {
            '?'
        };
        print!("[{:>2}:{}] ", index + 1, symbol);

        if (index + 1) % CARDS_PER_ROW == 0 {
            println!();
        }
    }
    if game.cards().len() % CARDS_PER_ROW != 0 {
        println!();
    }
    println!("Moves: {}", game.moves());
}

// Pair indices map to uppercase letters for display, then lowercase once
// the alphabet runs out. MAX_PAIR_COUNT keeps the range within a-f.
fn card_symbol(pair: u8) -> char {
    if pair < 26 {
        (b'A' + pair) as char
    } else {
        (b'a' + pair - 26) as char
    }
}
