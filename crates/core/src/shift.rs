//! Gravity shift - compacts columns after removal and refills from the top
//!
//! Each column is rebuilt bottom-aligned in a single pass: survivors keep their
//! top-to-bottom order (and their color/clicked state), and the vacated top
//! slots receive new unclicked cells. The returned [`Fall`] list describes every
//! cell that moved or was created so the controller can set fall animations.

use crate::board::{Board, Cell};
use crate::error::GameError;
use crate::matcher::PendingSet;
use crate::rng::{pick_color, RandomSource};

/// Vertical movement of one cell.
///
/// `from_y` is the row the cell visually starts from. New cells start above
/// the board: the top new cell of a column with `k` new cells has
/// `from_y = -k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fall {
    /// Board index after the shift.
    pub index: usize,
    pub from_y: isize,
    pub to_y: usize,
    pub created: bool,
}

/// Shift every column, replacing pending cells.
///
/// The pending set is left untouched; the caller clears it.
pub fn shift_columns<R: RandomSource + ?Sized>(
    board: &mut Board,
    pending: &PendingSet,
    color_count: u8,
    rng: &mut R,
) -> Result<Vec<Fall>, GameError> {
    let width = board.width();
    let height = board.height();
    let mut falls = Vec::new();
    let mut column: Vec<Cell> = Vec::with_capacity(height);
    let mut origins: Vec<usize> = Vec::with_capacity(height);

    for x in 0..width {
        column.clear();
        origins.clear();

        let removed = (0..height)
            .filter(|&y| pending.contains(y * width + x))
            .count();
        if removed == 0 {
            continue;
        }

        for slot in 0..removed {
            let color = pick_color(rng, color_count, &[])?;
            column.push(Cell::new(x, slot, color));
            falls.push(Fall {
                index: slot * width + x,
                from_y: slot as isize - removed as isize,
                to_y: slot,
                created: true,
            });
        }

        for y in 0..height {
            let idx = y * width + x;
            if pending.contains(idx) {
                continue;
            }
            let mut cell = *board.get(x, y)?;
            cell.animation.stop();
            column.push(cell);
            origins.push(y);
        }

        for (i, &old_y) in origins.iter().enumerate() {
            let new_y = removed + i;
            if new_y != old_y {
                falls.push(Fall {
                    index: new_y * width + x,
                    from_y: old_y as isize,
                    to_y: new_y,
                    created: false,
                });
            }
        }

        board.write_column(x, &column);
    }

    falls.sort_by_key(|f| f.index);
    Ok(falls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;

    fn pending_of(board: &Board, indices: &[usize]) -> PendingSet {
        let mut p = PendingSet::new(board.len());
        for &i in indices {
            p.insert(i);
        }
        p
    }

    #[test]
    fn survivors_drop_and_keep_state() {
        #[rustfmt::skip]
        let mut board = Board::from_colors(2, 4, &[
            1, 5,
            2, 5,
            3, 5,
            4, 5,
        ]).unwrap();
        board.get_mut(0, 0).unwrap().clicked = true;
        // Remove (0,1) and (0,3).
        let pending = pending_of(&board, &[2, 6]);
        let mut rng = SimpleRng::new(5);

        let falls = shift_columns(&mut board, &pending, 5, &mut rng).unwrap();

        // Column 0: two new cells on top, then survivors 1 and 3 in order.
        assert_eq!(board.get(0, 2).unwrap().color, 1);
        assert!(board.get(0, 2).unwrap().clicked);
        assert_eq!(board.get(0, 3).unwrap().color, 3);
        assert!(!board.get(0, 0).unwrap().clicked);
        assert!(!board.get(0, 1).unwrap().clicked);
        // Column 1 untouched.
        assert!((0..4).all(|y| board.get(1, y).unwrap().color == 5));

        // Coordinates follow the new position.
        for (i, cell) in board.cells().iter().enumerate() {
            assert_eq!(board.coords_of(i), (cell.x, cell.y));
        }

        assert_eq!(
            falls,
            vec![
                Fall { index: 0, from_y: -2, to_y: 0, created: true },
                Fall { index: 2, from_y: -1, to_y: 1, created: true },
                Fall { index: 4, from_y: 0, to_y: 2, created: false },
                Fall { index: 6, from_y: 2, to_y: 3, created: false },
            ]
        );
    }

    #[test]
    fn column_length_is_preserved() {
        let mut rng = SimpleRng::new(11);
        let mut board = Board::seed(4, 6, 5, &mut rng).unwrap();
        let pending = pending_of(&board, &[0, 5, 9, 13, 23]);

        shift_columns(&mut board, &pending, 5, &mut rng).unwrap();

        assert_eq!(board.len(), 24);
        for x in 0..4 {
            let column: Vec<_> = (0..6).map(|y| board.get(x, y).unwrap()).collect();
            assert_eq!(column.len(), 6);
            assert!(column.iter().all(|c| (1..=5).contains(&c.color)));
        }
    }

    #[test]
    fn nothing_pending_means_no_falls() {
        let mut board = Board::from_colors(2, 2, &[1, 2, 2, 1]).unwrap();
        let before = board.clone();
        let pending = PendingSet::new(board.len());
        let mut rng = SimpleRng::new(1);
        let falls = shift_columns(&mut board, &pending, 3, &mut rng).unwrap();
        assert!(falls.is_empty());
        assert_eq!(board, before);
    }
}
