pub const DEFAULT_PAIR_COUNT: usize = 6;
pub const MIN_PAIR_COUNT: usize = 2;
pub const MAX_PAIR_COUNT: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Card {
    pub pair: u8,
    pub matched: bool,
}

impl Card {
    pub fn new(pair: u8) -> Self {
        Self {
            pair,
            matched: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    FirstCardUp,
    Matched,
    Mismatched,
}
