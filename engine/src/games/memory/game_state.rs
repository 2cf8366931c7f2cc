use super::types::{Card, FlipOutcome, MAX_PAIR_COUNT, MIN_PAIR_COUNT};
use crate::games::session_rng::SessionRng;

// Pair-matching game. Two cards may be face up at a time; a mismatched
// pair stays face up until the caller turns it down, so the client owns
// the reveal delay.
pub struct MemoryGameState {
    cards: Vec<Card>,
    face_up: Vec<usize>,
    moves: u32,
    matched_pairs: usize,
    pair_count: usize,
}

impl MemoryGameState {
    pub fn new(pair_count: usize, rng: &mut SessionRng) -> Result<Self, String> {
        if !(MIN_PAIR_COUNT..=MAX_PAIR_COUNT).contains(&pair_count) {
            return Err(format!(
                "Pair count must be between {} and {}",
                MIN_PAIR_COUNT, MAX_PAIR_COUNT
            ));
        }

        let mut cards: Vec<Card> = (0..pair_count)
            .flat_map(|pair| [Card::new(pair as u8); 2])
            .collect();
        rng.shuffle(&mut cards);

        Ok(Self {
            cards,
            face_up: Vec::new(),
            moves: 0,
            matched_pairs: 0,
            pair_count,
        })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn face_up(&self) -> &[usize] {
        &self.face_up
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    pub fn is_complete(&self) -> bool {
        self.matched_pairs == self.pair_count
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.face_up.contains(&index) || self.cards.get(index).is_some_and(|card| card.matched)
    }

    pub fn flip(&mut self, index: usize) -> Result<FlipOutcome, String> {
        if self.face_up.len() == 2 {
            return Err("Two cards are already face up".to_string());
        }

        let card = self
            .cards
            .get(index)
            .copied()
            .ok_or_else(|| format!("Card index {} is out of bounds", index))?;
        if card.matched {
            return Err("Card is already matched".to_string());
        }
        if self.face_up.contains(&index) {
            return Err("Card is already face up".to_string());
        }

        self.face_up.push(index);
        if self.face_up.len() < 2 {
            return Ok(FlipOutcome::FirstCardUp);
        }

        self.moves += 1;
        let first = self.face_up[0];
        if self.cards[first].pair == card.pair {
            self.cards[first].matched = true;
            self.cards[index].matched = true;
            self.matched_pairs += 1;
            self.face_up.clear();
            Ok(FlipOutcome::Matched)
        } else {
            Ok(FlipOutcome::Mismatched)
        }
    }

    pub fn turn_down(&mut self) {
        self.face_up.clear();
    }
}
