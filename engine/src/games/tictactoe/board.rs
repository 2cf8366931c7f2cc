use super::types::{CELL_COUNT, Mark};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn set_cell(&mut self, index: usize, mark: Mark) -> Result<(), String> {
        if mark == Mark::Empty {
            return Err("Cannot place an empty mark".to_string());
        }
        if index >= CELL_COUNT {
            return Err(format!("Cell index {} is out of bounds", index));
        }
        if self.cells[index] != Mark::Empty {
            return Err("Cell is already marked".to_string());
        }

        self.cells[index] = mark;
        Ok(())
    }

    // Unchecked mutation for search exploration. Every place must be paired
    // with a clear before the exploring call returns.
    pub(super) fn place(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    pub(super) fn clear(&mut self, index: usize) {
        self.cells[index] = Mark::Empty;
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }
}
