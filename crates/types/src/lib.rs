//! Shared types module - constants and plain data structures
//!
//! Everything here is dependency-free so the same definitions can be used by the
//! core state machine, the terminal renderer and the input mapping.
//!
//! # Board
//!
//! Boards are addressed row-major: `index = y * width + x`, with `(0, 0)` in the
//! top-left corner and `y` growing downwards. Any positive size is accepted; the
//! menu offers the fixed [`BOARD_VARIANTS`].
//!
//! # Rules constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_RUN_LENGTH` | 3 | Shortest row/column run that gets removed |
//! | `MAX_RAY_STEPS` | 9 | Max cells a run can extend past the clicked cell per direction |
//! | `DEFAULT_COLOR_COUNT` | 5 | Number of tile colors |
//! | `ANIMATION_TICKS` | 10 | Frames per cell animation |
//!
//! # Examples
//!
//! ```
//! use match3_types::{Phase, BOARD_VARIANTS};
//!
//! assert_eq!(Phase::from_str("ran"), Some(Phase::Ran));
//! assert_eq!(Phase::AnimationShift.as_str(), "animation_shift");
//! assert!(Phase::AnimationGameOver.is_animation());
//! assert_eq!(BOARD_VARIANTS[1].width, 3);
//! ```

/// Tile color index. Valid colors are `1..=color_count`; `0` is never used.
pub type Color = u8;

/// Shortest run (row or column) that qualifies for removal.
pub const MIN_RUN_LENGTH: usize = 3;

/// Iteration cap of the directional run expansion.
///
/// Each ray can extend at most this many cells beyond the clicked cell.
pub const MAX_RAY_STEPS: usize = 9;

/// Default number of tile colors.
pub const DEFAULT_COLOR_COUNT: u8 = 5;

/// Fewest colors a board can be seeded with (two exclusions + one choice).
pub const MIN_COLOR_COUNT: u8 = 3;

/// Most colors the renderer has a palette for.
pub const MAX_COLORS: u8 = 8;

/// Default display size of a cell in pixels (animation ranges use pixels).
pub const DEFAULT_CELL_SIDE: i32 = 50;

/// Number of frames every per-cell animation takes.
pub const ANIMATION_TICKS: u32 = 10;

/// How far past the board edge (in pixels) game-over tiles may fly.
pub const FLY_OFF_MARGIN: i32 = 200;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// A board size offered by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardVariant {
    pub width: usize,
    pub height: usize,
}

/// Board sizes offered by the menu.
pub const BOARD_VARIANTS: [BoardVariant; 4] = [
    BoardVariant {
        width: 1,
        height: 1,
    },
    BoardVariant {
        width: 3,
        height: 3,
    },
    BoardVariant {
        width: 5,
        height: 5,
    },
    BoardVariant {
        width: 10,
        height: 10,
    },
];

/// Top-level game phase.
///
/// The phase machine runs:
/// `Stopped → Ran → AnimationCellsDisappearing → AnimationShift → Ran …`
/// and, once every tile has been clicked, `Ran → AnimationGameOver → GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// No game has been started yet.
    #[default]
    Stopped,
    /// Waiting for a player click.
    Ran,
    /// Matched cells are fading out.
    AnimationCellsDisappearing,
    /// Surviving cells fall and new cells drop in.
    AnimationShift,
    /// Every tile flies off the board.
    AnimationGameOver,
    /// Terminal state.
    GameOver,
}

impl Phase {
    /// Whether the renderer is expected to be playing per-cell animations.
    pub fn is_animation(&self) -> bool {
        matches!(
            self,
            Phase::AnimationCellsDisappearing | Phase::AnimationShift | Phase::AnimationGameOver
        )
    }

    /// Parse from the snake_case name used in logs.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "stopped" => Some(Phase::Stopped),
            "ran" => Some(Phase::Ran),
            "animation_cells_disappearing" => Some(Phase::AnimationCellsDisappearing),
            "animation_shift" => Some(Phase::AnimationShift),
            "animation_game_over" => Some(Phase::AnimationGameOver),
            "game_over" => Some(Phase::GameOver),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Stopped => "stopped",
            Phase::Ran => "ran",
            Phase::AnimationCellsDisappearing => "animation_cells_disappearing",
            Phase::AnimationShift => "animation_shift",
            Phase::AnimationGameOver => "animation_game_over",
            Phase::GameOver => "game_over",
        }
    }
}

/// A phase transition, delivered to every subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseChange {
    pub from: Phase,
    pub to: Phase,
    /// Score at the moment of the transition.
    pub points: u32,
}

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step `(dx, dy)` with `y` growing downwards.
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Player commands produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Move the keyboard cursor one cell
    MoveCursor(Direction),
    /// Click the cell under the keyboard cursor
    ClickCursor,
    /// Click the cell at a board coordinate (mouse)
    ClickAt { x: usize, y: usize },
    /// Start a new game with `BOARD_VARIANTS[index]`
    StartVariant(usize),
    /// Restart with the current board size
    Restart,
}

/// Where the board sits on screen, in terminal cells.
///
/// Produced by the renderer each frame and used to map mouse clicks back to
/// board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardGeometry {
    /// Screen column of the board's top-left tile.
    pub origin_x: u16,
    /// Screen row of the board's top-left tile.
    pub origin_y: u16,
    /// Tile width in terminal columns.
    pub cell_w: u16,
    /// Tile height in terminal rows.
    pub cell_h: u16,
    pub width: usize,
    pub height: usize,
}

impl BoardGeometry {
    /// Board coordinate under the screen position, if any.
    pub fn hit(&self, column: u16, row: u16) -> Option<(usize, usize)> {
        if self.cell_w == 0 || self.cell_h == 0 {
            return None;
        }
        if column < self.origin_x || row < self.origin_y {
            return None;
        }
        let x = ((column - self.origin_x) / self.cell_w) as usize;
        let y = ((row - self.origin_y) / self.cell_h) as usize;
        (x < self.width && y < self.height).then_some((x, y))
    }
}
