//! Cascade resolution - applies match detection until the board is stable

use crate::board::Board;
use crate::matcher::{detect_matches, PendingSet};

/// Scan the whole board, restarting after every match, until a full scan finds
/// nothing new.
///
/// Returns whether any cell was marked pending. Calling it again without
/// changing the board returns false and mutates nothing.
pub fn resolve_cascade(board: &mut Board, pending: &mut PendingSet, points: &mut u32) -> bool {
    let mut any = false;
    'scan: loop {
        for idx in 0..board.len() {
            if detect_matches(board, pending, idx, points) {
                any = true;
                continue 'scan;
            }
        }
        return any;
    }
}

/// Resolve a click: detect at the clicked cell first, then cascade over the
/// whole board.
pub fn resolve_from(
    board: &mut Board,
    pending: &mut PendingSet,
    origin: usize,
    points: &mut u32,
) -> bool {
    let seeded = detect_matches(board, pending, origin, points);
    let cascaded = resolve_cascade(board, pending, points);
    seeded || cascaded
}
