use std::ops::Deref;

use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

use super::{Board, Cell, Place, WIN_LENGTH};
use crate::PlayerId;

/// The four line families a winning row can belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Along a row, left to right.
    Horizontal,
    /// Along a column, top to bottom.
    Vertical,
    /// Towards the bottom-right (↘).
    DiagonalDown,
    /// Towards the top-right (↗).
    DiagonalUp,
}

impl Direction {
    /// The `(dx, dy)` of one step in this direction.
    pub fn step(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (1, 0),
            Direction::Vertical => (0, 1),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (1, -1),
        }
    }
}

/// Five stones of one player in a row.
///
/// The places are in the order the scan discovered them: for horizontal and
/// vertical rows that is backwards from the stone that completed the run, for
/// diagonals it is forwards from the anchor at the left end.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningRow {
    direction: Direction,
    places: [Place; WIN_LENGTH],
}

impl WinningRow {
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn places(&self) -> &[Place; WIN_LENGTH] {
        &self.places
    }

    fn walk(direction: Direction, start: Place, sign: i32) -> Self {
        let step = direction.step();
        Self {
            direction,
            places: std::array::from_fn(|i| start.offset(step, sign * i as i32)),
        }
    }
}

impl Deref for WinningRow {
    type Target = [Place];

    fn deref(&self) -> &Self::Target {
        &self.places
    }
}

impl<'a> IntoIterator for &'a WinningRow {
    type Item = &'a Place;
    type IntoIter = std::slice::Iter<'a, Place>;

    fn into_iter(self) -> Self::IntoIter {
        self.places.iter()
    }
}

/// Finds the first winning row of `player`.
///
/// Rows are searched before columns, columns before ↘ diagonals and those
/// before ↗ diagonals. Within a family, lower coordinates come first.
#[instrument(level = "trace", skip(board))]
pub(super) fn scan(board: &Board, player: PlayerId) -> Option<WinningRow> {
    scan_runs(board, player, Direction::Horizontal)
        .or_else(|| scan_runs(board, player, Direction::Vertical))
        .or_else(|| scan_anchors(board, player, Direction::DiagonalDown))
        .or_else(|| scan_anchors(board, player, Direction::DiagonalUp))
}

// Walks every row (or column) once, counting consecutive stones of the player.
// The row is recorded backwards from the fifth stone of the first run.
fn scan_runs(board: &Board, player: PlayerId, direction: Direction) -> Option<WinningRow> {
    let n = board.size_i32();
    let stone = Cell::Occupied(player);
    for outer in 0..n {
        let mut count = 0;
        for inner in 0..n {
            let place = match direction {
                Direction::Horizontal => Place::new(inner, outer),
                _ => Place::new(outer, inner),
            };
            if board.cell_at(place) == stone {
                count += 1;
                if count == WIN_LENGTH {
                    trace!(?direction, %place, "Run of five completed");
                    return Some(WinningRow::walk(direction, place, -1));
                }
            } else {
                count = 0;
            }
        }
    }
    None
}

// Tries every anchor whose five-cell diagonal fits on the board, `x` outer and
// `y` inner. Boards smaller than five have no anchors.
fn scan_anchors(board: &Board, player: PlayerId, direction: Direction) -> Option<WinningRow> {
    let n = board.size_i32();
    let len = WIN_LENGTH as i32;
    let step = direction.step();
    let stone = Cell::Occupied(player);
    let (y_min, y_max) = if step.1 < 0 { (len - 1, n - 1) } else { (0, n - len) };
    for x in 0..=(n - len) {
        for y in y_min..=y_max {
            let anchor = Place::new(x, y);
            if (0..len).all(|i| board.cell_at(anchor.offset(step, i)) == stone) {
                trace!(?direction, %anchor, "Diagonal of five found");
                return Some(WinningRow::walk(direction, anchor, 1));
            }
        }
    }
    None
}
