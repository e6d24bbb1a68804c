//! Error type for the board state machine.

use thiserror::Error;

/// Errors reported by the core.
///
/// None of these are reachable from a well-behaved renderer: they flag caller
/// bugs (bad coordinates, bad sizes) and are returned before any mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("cell ({x}, {y}) is outside the board")]
    OutOfBounds { x: usize, y: usize },
    #[error("invalid board dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("board layout has {actual} colors, expected {expected}")]
    InvalidLayout { expected: usize, actual: usize },
    #[error("invalid tile color {0}")]
    InvalidColor(u8),
    #[error("at least 3 colors are required, got {0}")]
    InvalidColorCount(u8),
    #[error("every color is excluded")]
    NoColorAvailable,
}
