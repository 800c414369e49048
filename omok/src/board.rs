mod cell;
mod place;
mod winning_row;

pub use cell::*;
pub use place::*;
pub use winning_row::{Direction, WinningRow};

use tracing::debug;

use crate::{OutOfBounds, Player, PlayerId};

/// The size of a board created with [`Board::default()`].
pub const DEFAULT_BOARD_SIZE: usize = 15;

/// How many stones in a row win the game.
pub const WIN_LENGTH: usize = 5;

/// The largest coordinate accepted by [`PlacementBounds::Legacy`].
pub const LEGACY_MAX_COORDINATE: i32 = 14;

/// Which coordinates [`Board::place_stone()`] accepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlacementBounds {
    /// Any place on the board.
    #[default]
    BoardSize,
    /// Only places with both coordinates in `0..=14`, whatever the board size.
    ///
    /// This keeps the fixed bound of the classic 15×15 board. Places that are
    /// also off the grid (on boards smaller than 15) are rejected as well.
    Legacy,
}

impl PlacementBounds {
    fn admits(self, x: i32, y: i32) -> bool {
        match self {
            PlacementBounds::BoardSize => true,
            PlacementBounds::Legacy => {
                (0..=LEGACY_MAX_COORDINATE).contains(&x) && (0..=LEGACY_MAX_COORDINATE).contains(&y)
            }
        }
    }
}

/// An n×n Omok board.
///
/// Places are addressed by `(x, y)` with `x` the column and `y` the row, both
/// 0-based. The cells are stored in row-major order.
///
/// The query methods [`is_empty`](Self::is_empty), [`is_occupied`](Self::is_occupied),
/// [`is_occupied_by`](Self::is_occupied_by) and [`player_at`](Self::player_at)
/// panic when given a place that is not on the board. Use [`cell`](Self::cell)
/// to look at places that may be off the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    bounds: PlacementBounds,
    /// The row found by the last successful [`Board::is_won_by()`].
    ///
    /// Neither [`Board::clear()`] nor an unsuccessful check resets it.
    last_winning_row: Option<WinningRow>,
}

impl Board {
    /// Creates an empty `size`×`size` board.
    ///
    /// Panics if `size` is zero, does not fit in an `i32` or its square
    /// overflows the address space.
    pub fn new(size: usize) -> Self {
        Self::with_bounds(size, PlacementBounds::default())
    }

    /// Creates an empty board that accepts placements according to `bounds`.
    ///
    /// Panics like [`Board::new()`], and also if the `size`×`size` cells could
    /// not be allocated in one piece.
    pub fn with_bounds(size: usize, bounds: PlacementBounds) -> Self {
        assert!(size > 0, "A board needs at least one intersection");
        let num_cells = size
            .checked_mul(size)
            .filter(|&n| {
                n.checked_mul(std::mem::size_of::<Cell>())
                    .is_some_and(|bytes| bytes <= isize::MAX as usize)
            })
            .filter(|_| i32::try_from(size).is_ok());
        let Some(num_cells) = num_cells else {
            panic!("Board size {} is too large", size);
        };
        Self {
            size,
            cells: vec![Cell::Empty; num_cells],
            bounds,
            last_winning_row: None,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn bounds(&self) -> PlacementBounds {
        self.bounds
    }

    /// Removes all stones from the board.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Are all places on the board occupied?
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Would [`Self::place_stone()`] at `(x, y)` put a stone on the board?
    pub fn admits(&self, x: i32, y: i32) -> bool {
        self.bounds.admits(x, y) && self.index(x, y).is_some()
    }

    /// Places a stone of `player` at `(x, y)` and records it as the player's
    /// last move.
    ///
    /// A place outside the [`PlacementBounds`] is ignored. A stone that is
    /// already on the place is replaced.
    pub fn place_stone(&mut self, x: i32, y: i32, player: &mut Player) {
        let Some(idx) = self.index(x, y).filter(|_| self.bounds.admits(x, y)) else {
            debug!(x, y, player = player.name(), "Ignoring stone placed outside of the board");
            return;
        };
        self.cells[idx] = Cell::Occupied(player.id());
        player.set_move(x, y);
    }

    /// The content of the place `(x, y)`, or an error if it is not on the board.
    pub fn cell(&self, x: i32, y: i32) -> Result<Cell, OutOfBounds> {
        self.index(x, y)
            .map(|idx| self.cells[idx])
            .ok_or(OutOfBounds {
                x,
                y,
                size: self.size,
            })
    }

    pub fn is_empty(&self, x: i32, y: i32) -> bool {
        self.cell_at(Place::new(x, y)).is_empty()
    }

    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        !self.is_empty(x, y)
    }

    pub fn is_occupied_by(&self, x: i32, y: i32, player: &Player) -> bool {
        self.cell_at(Place::new(x, y)) == Cell::Occupied(player.id())
    }

    /// The player whose stone is at `(x, y)`, if any.
    pub fn player_at(&self, x: i32, y: i32) -> Option<PlayerId> {
        self.cell_at(Place::new(x, y)).player()
    }

    /// Does `player` have five or more stones in a row?
    ///
    /// If so, the first such row (see [`Self::find_winning_row()`] for the
    /// order) becomes available through [`Self::winning_row()`].
    pub fn is_won_by(&mut self, player: &Player) -> bool {
        match self.find_winning_row(player) {
            Some(row) => {
                debug!(player = player.name(), direction = ?row.direction(), "Winning row found");
                self.last_winning_row = Some(row);
                true
            }
            None => false,
        }
    }

    /// The row found by the most recent successful [`Self::is_won_by()`].
    ///
    /// This is `None` only if no win was ever detected on this board. It is
    /// not reset by [`Self::clear()`], so it can describe stones that are no
    /// longer on the board.
    pub fn winning_row(&self) -> Option<&WinningRow> {
        self.last_winning_row.as_ref()
    }

    /// Finds the first row of five stones of `player`, without recording it.
    ///
    /// The search order decides which row is returned when there are several:
    /// 1. Rows top to bottom, each scanned left to right. The row is reported
    ///    from its fifth stone backwards, e.g. `(4,0), (3,0), .., (0,0)`.
    /// 2. Columns left to right, each scanned top to bottom, reported from the
    ///    fifth stone upwards.
    /// 3. ↘ diagonals, by the column and then the row of their top-left stone,
    ///    reported from that stone.
    /// 4. ↗ diagonals, by the column and then the row of their bottom-left
    ///    stone, reported from that stone.
    ///
    /// A run longer than five is reported by its first five stones in scan order.
    pub fn find_winning_row(&self, player: &Player) -> Option<WinningRow> {
        winning_row::scan(self, player.id())
    }

    /// Iterates over the rows of the board, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.size)
    }

    pub(crate) fn size_i32(&self) -> i32 {
        // Checked on construction
        self.size as i32
    }

    pub(crate) fn cell_at(&self, place: Place) -> Cell {
        match self.cell(place.x, place.y) {
            Ok(cell) => cell,
            Err(err) => panic!("{}", err),
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.size && y < self.size).then_some(y * self.size + x)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}
