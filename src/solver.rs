//! Depth-first backtracking search over queen placements.

use crate::board::{Board, SIDE_LENGTH};

/// Extend a valid partial placement to every full solution reachable from it.
///
/// Rows `0..row` must already hold exactly one queen each, no two of which
/// attack one another. Each column of `row` is tried in increasing order: a
/// conflict-free candidate is placed, the search recurses into `row + 1`, and
/// the queen is removed again before the next candidate, so the board is left
/// exactly as it was once the call returns. When `row` is past the last row
/// the filled board is a solution and is handed to `report`.
///
/// The search is exhaustive. Starting from an empty board at row 0, `report`
/// is invoked once for each of the 92 solutions, in the order the greedy
/// column scan discovers them.
pub fn solve(board: &mut Board, row: usize, report: &mut impl FnMut(&Board)) {
    if row >= SIDE_LENGTH {
        log::debug!(
            "Found solution with queens at [{:?}].",
            board.queens().collect::<Vec<_>>()
        );
        report(board);
        return;
    }

    for column in 0..SIDE_LENGTH {
        if board.conflicts(row, column) {
            continue;
        }

        board.place(row, column);
        solve(board, row + 1, report);
        board.remove(row, column);
    }
}
