//! Board module - owns the grid of cells
//!
//! The board is a `width x height` grid stored as a flat row-major vector
//! (`index = y * width + x`). Index arithmetic is the canonical addressing
//! scheme: the matcher, cascade, shifter and animation barrier all talk in
//! flat indices.

use crate::animation::CellAnimation;
use crate::error::GameError;
use crate::rng::{pick_color, RandomSource};
use crate::types::{Color, MAX_COLORS, MIN_COLOR_COUNT};

/// One board tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    pub color: Color,
    /// Set once a player click recolored this tile.
    pub clicked: bool,
    pub animation: CellAnimation,
}

impl Cell {
    pub fn new(x: usize, y: usize, color: Color) -> Self {
        Self {
            x,
            y,
            color,
            clicked: false,
            animation: CellAnimation::default(),
        }
    }
}

/// The game board.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Seed a new board.
    ///
    /// Cells are created in row-major scan order and each one avoids the colors
    /// of its top and left neighbors, so no two adjacent tiles start equal along
    /// those axes.
    pub fn seed<R: RandomSource + ?Sized>(
        width: usize,
        height: usize,
        color_count: u8,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        if width == 0 || height == 0 {
            return Err(GameError::InvalidDimensions { width, height });
        }
        if color_count < MIN_COLOR_COUNT {
            return Err(GameError::InvalidColorCount(color_count));
        }

        let mut board = Self {
            width,
            height,
            cells: Vec::with_capacity(width * height),
        };

        for y in 0..height {
            for x in 0..width {
                let excluded = board.seed_exclusions(x, y)?;
                let color = pick_color(rng, color_count, &excluded)?;
                board.cells.push(Cell::new(x, y, color));
            }
        }

        Ok(board)
    }

    /// Colors a freshly seeded cell at `(x, y)` must avoid.
    fn seed_exclusions(&self, x: usize, y: usize) -> Result<Vec<Color>, GameError> {
        let mut excluded = Vec::with_capacity(2);
        if y > 0 {
            excluded.push(self.get(x, y - 1)?.color);
        }
        if x > 0 {
            excluded.push(self.get(x - 1, y)?.color);
        }
        Ok(excluded)
    }

    /// Build a board from an explicit row-major color layout.
    pub fn from_colors(width: usize, height: usize, colors: &[Color]) -> Result<Self, GameError> {
        if width == 0 || height == 0 {
            return Err(GameError::InvalidDimensions { width, height });
        }
        if colors.len() != width * height {
            return Err(GameError::InvalidLayout {
                expected: width * height,
                actual: colors.len(),
            });
        }
        if let Some(&bad) = colors.iter().find(|&&c| c == 0 || c > MAX_COLORS) {
            return Err(GameError::InvalidColor(bad));
        }

        let cells = colors
            .iter()
            .enumerate()
            .map(|(i, &color)| Cell::new(i % width, i / width, color))
            .collect();
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    pub fn index_of(&self, x: usize, y: usize) -> Result<usize, GameError> {
        if x >= self.width || y >= self.height {
            return Err(GameError::OutOfBounds { x, y });
        }
        let idx = y * self.width + x;
        if idx >= self.cells.len() {
            return Err(GameError::OutOfBounds { x, y });
        }
        Ok(idx)
    }

    /// Inverse of [`Board::index_of`].
    #[inline(always)]
    pub fn coords_of(&self, index: usize) -> (usize, usize) {
        if self.width == 0 {
            return (0, 0);
        }
        (index % self.width, index / self.width)
    }

    /// Neighbor of `(x, y)` one step along `(dx, dy)`, if it is on the board.
    pub fn neighbor_index(&self, x: usize, y: usize, dx: isize, dy: isize) -> Option<usize> {
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        self.index_of(nx, ny).ok()
    }

    pub fn get(&self, x: usize, y: usize) -> Result<&Cell, GameError> {
        let idx = self.index_of(x, y)?;
        Ok(&self.cells[idx])
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Result<&mut Cell, GameError> {
        let idx = self.index_of(x, y)?;
        Ok(&mut self.cells[idx])
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn cell_mut(&mut self, index: usize) -> Option<&mut Cell> {
        self.cells.get_mut(index)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Visit every coordinate in row-major order.
    ///
    /// Stops at the first `Some` returned by `visitor` and returns it; returns
    /// `default` if the visitor never produced a value.
    pub fn for_each_coordinate<T>(
        &self,
        mut visitor: impl FnMut(usize, usize) -> Option<T>,
        default: T,
    ) -> T {
        for y in 0..self.height {
            for x in 0..self.width {
                if let Some(result) = visitor(x, y) {
                    return result;
                }
            }
        }
        default
    }

    /// Every tile has been clicked.
    pub fn all_clicked(&self) -> bool {
        self.for_each_coordinate(
            |x, y| {
                let clicked = self.get(x, y).map(|c| c.clicked).unwrap_or(false);
                if clicked {
                    None
                } else {
                    Some(false)
                }
            },
            true,
        )
    }

    /// Any tile has an enabled animation.
    pub fn is_animating(&self) -> bool {
        self.cells.iter().any(|c| c.animation.enabled)
    }

    /// Disable every cell animation.
    pub fn stop_animations(&mut self) {
        for cell in &mut self.cells {
            cell.animation.stop();
        }
    }

    /// Colors as rows, for tests and debugging.
    pub fn to_colors(&self) -> Vec<Vec<Color>> {
        if self.width == 0 {
            return Vec::new();
        }
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(|c| c.color).collect())
            .collect()
    }

    /// Replace a whole column (top to bottom). Used by the gravity shift.
    pub(crate) fn write_column(&mut self, x: usize, column: &[Cell]) {
        debug_assert_eq!(column.len(), self.height);
        for (y, cell) in column.iter().enumerate() {
            let idx = y * self.width + x;
            self.cells[idx] = Cell { x, y, ..*cell };
        }
    }
}

impl Default for Board {
    /// An empty 0x0 board (no game started).
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
        }
    }
}
