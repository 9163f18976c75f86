//! Which cells hold a marble.

use super::topology::BOARD_SIZE;

/// Occupancy bitmap over every board cell.
///
/// Built once per query from the marbles on the board and used for the
/// blocking checks in move calculation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Occupancy {
    cells: [bool; BOARD_SIZE as usize],
}

impl Default for Occupancy {
    fn default() -> Self {
        Self {
            cells: [false; BOARD_SIZE as usize],
        }
    }
}

impl Occupancy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark every given position occupied. Out-of-range positions are ignored.
    pub fn from_positions(positions: impl IntoIterator<Item = u8>) -> Self {
        let mut occupancy = Self::new();
        for pos in positions {
            occupancy.set(pos, true);
        }
        occupancy
    }

    #[must_use]
    pub fn is_occupied(&self, position: u8) -> bool {
        self.cells.get(position as usize).copied().unwrap_or(false)
    }

    pub fn set(&mut self, position: u8, occupied: bool) {
        if let Some(cell) = self.cells.get_mut(position as usize) {
            *cell = occupied;
        }
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}
