//! Match detection - finds row/column runs through a single cell
//!
//! Starting at an origin cell, four rays (up, down, left, right) are extended
//! one cell per iteration while the neighbor has the origin's color and is not
//! already pending removal. The vertical and horizontal counts (origin
//! included) are judged independently, so a cross-shaped group qualifies both
//! ways at once.
//!
//! Scoring happens here: every newly pending cell is worth 1 point, or 2 if
//! the player had clicked it (the flag is consumed).

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{MAX_RAY_STEPS, MIN_RUN_LENGTH};

/// Cells of one axis: two rays of at most `MAX_RAY_STEPS` plus the origin.
type Run = ArrayVec<usize, { 2 * MAX_RAY_STEPS + 1 }>;

/// Board indices marked for removal in the current cascade.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingSet {
    marks: Vec<bool>,
    len: usize,
}

impl PendingSet {
    pub fn new(board_len: usize) -> Self {
        Self {
            marks: vec![false; board_len],
            len: 0,
        }
    }

    /// Clear and resize for a board of `board_len` cells.
    pub fn reset(&mut self, board_len: usize) {
        self.marks.clear();
        self.marks.resize(board_len, false);
        self.len = 0;
    }

    pub fn contains(&self, index: usize) -> bool {
        self.marks.get(index).copied().unwrap_or(false)
    }

    /// Mark `index`; returns false if it was already marked.
    pub fn insert(&mut self, index: usize) -> bool {
        match self.marks.get_mut(index) {
            Some(m) if !*m => {
                *m = true;
                self.len += 1;
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Marked indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.marks
            .iter()
            .enumerate()
            .filter_map(|(i, &m)| m.then_some(i))
    }
}

/// Points for clearing one cell.
pub fn cell_clear_points(was_clicked: bool) -> u32 {
    if was_clicked {
        2
    } else {
        1
    }
}

/// Run counts found around an origin, for inspection and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunCounts {
    pub vertical: usize,
    pub horizontal: usize,
}

/// Collect the vertical and horizontal runs through `origin`.
fn collect_runs(board: &Board, pending: &PendingSet, origin: usize) -> (Run, Run) {
    let mut vertical = Run::new();
    let mut horizontal = Run::new();
    vertical.push(origin);
    horizontal.push(origin);

    let Some(cell) = board.cell(origin) else {
        return (vertical, horizontal);
    };
    let color = cell.color;

    // up, down, left, right
    const RAYS: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
    let mut tips = [origin; 4];
    let mut open = [true; 4];

    for _ in 0..MAX_RAY_STEPS {
        if !open.iter().any(|&o| o) {
            break;
        }
        for (ray, &(dx, dy)) in RAYS.iter().enumerate() {
            if !open[ray] {
                continue;
            }
            let (tx, ty) = board.coords_of(tips[ray]);
            let next = board
                .neighbor_index(tx, ty, dx, dy)
                .filter(|&n| !pending.contains(n))
                .filter(|&n| board.cell(n).map(|c| c.color) == Some(color));
            match next {
                Some(n) => {
                    tips[ray] = n;
                    if dx == 0 {
                        vertical.push(n);
                    } else {
                        horizontal.push(n);
                    }
                }
                None => open[ray] = false,
            }
        }
    }

    (vertical, horizontal)
}

/// Count the runs through `origin` without marking anything.
pub fn run_counts(board: &Board, pending: &PendingSet, origin: usize) -> RunCounts {
    let (vertical, horizontal) = collect_runs(board, pending, origin);
    RunCounts {
        vertical: vertical.len(),
        horizontal: horizontal.len(),
    }
}

/// Detect and mark qualifying runs through the cell at `origin`.
///
/// Newly marked cells add to `points` (double for clicked cells, whose flag is
/// cleared). An origin that is already pending never matches.
///
/// Returns whether a vertical or horizontal run qualified.
pub fn detect_matches(
    board: &mut Board,
    pending: &mut PendingSet,
    origin: usize,
    points: &mut u32,
) -> bool {
    if origin >= board.len() || pending.contains(origin) {
        return false;
    }

    let (vertical, horizontal) = collect_runs(board, pending, origin);
    let mut matched = false;

    for run in [vertical, horizontal] {
        if run.len() < MIN_RUN_LENGTH {
            continue;
        }
        matched = true;
        for idx in run {
            if !pending.insert(idx) {
                continue;
            }
            if let Some(cell) = board.cell_mut(idx) {
                *points += cell_clear_points(cell.clicked);
                cell.clicked = false;
            }
        }
    }

    matched
}
