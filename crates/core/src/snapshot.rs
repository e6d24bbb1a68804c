use crate::board::Cell;
use crate::types::{Color, Phase};

/// Read-only view of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellView {
    pub x: usize,
    pub y: usize,
    pub color: Color,
    pub clicked: bool,
}

impl From<&Cell> for CellView {
    fn from(value: &Cell) -> Self {
        Self {
            x: value.x,
            y: value.y,
            color: value.color,
            clicked: value.clicked,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    pub points: u32,
    pub phase: Phase,
    /// Row-major, `width * height` entries.
    pub cells: Vec<CellView>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.width = 0;
        self.height = 0;
        self.points = 0;
        self.phase = Phase::Stopped;
        self.cells.clear();
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&CellView> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x)
    }

    /// The player may click.
    pub fn playable(&self) -> bool {
        self.phase == Phase::Ran
    }
}
