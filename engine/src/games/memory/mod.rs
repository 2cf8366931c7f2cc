mod game_state;
mod types;

pub use game_state::MemoryGameState;
pub use types::{Card, DEFAULT_PAIR_COUNT, FlipOutcome, MAX_PAIR_COUNT, MIN_PAIR_COUNT};
