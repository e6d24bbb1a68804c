//! Keyboard cursor over the board.

use crate::types::Direction;

/// Cursor position, clamped to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub x: usize,
    pub y: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move one cell, staying inside a `width x height` board.
    pub fn step(&mut self, direction: Direction, width: usize, height: usize) {
        if width == 0 || height == 0 {
            return;
        }
        let (dx, dy) = direction.delta();
        self.x = self
            .x
            .saturating_add_signed(dx)
            .min(width - 1);
        self.y = self
            .y
            .saturating_add_signed(dy)
            .min(height - 1);
    }

    /// Pull the cursor back inside a (possibly smaller) board.
    pub fn clamp(&mut self, width: usize, height: usize) {
        self.x = self.x.min(width.saturating_sub(1));
        self.y = self.y.min(height.saturating_sub(1));
    }

    pub fn set(&mut self, x: usize, y: usize) {
        self.x = x;
        self.y = y;
    }
}
