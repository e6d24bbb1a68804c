//! Game state module - the per-game aggregate owned by the controller
//!
//! Holds everything that belongs to one game and is replaced wholesale by
//! `start_game`: dimensions, score, phase and the pending-removal set.

use crate::matcher::PendingSet;
use crate::types::{Phase, DEFAULT_CELL_SIDE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub width: usize,
    pub height: usize,
    /// Display size of a cell in pixels; only used for animation ranges.
    pub cell_side: i32,
    /// Score; never decreases within a game.
    pub points: u32,
    pub status: Phase,
    pub pending: PendingSet,
}

impl GameState {
    pub fn new(cell_side: i32) -> Self {
        Self {
            width: 0,
            height: 0,
            cell_side,
            points: 0,
            status: Phase::Stopped,
            pending: PendingSet::default(),
        }
    }

    /// Reset for a fresh `width x height` game (status is left to the caller).
    pub fn reset(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.points = 0;
        self.pending.reset(width * height);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_SIDE)
    }
}
