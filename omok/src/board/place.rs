use serde::{Deserialize, Serialize};

/// An intersection on the board.
///
/// `x` is the 0-based column and `y` the 0-based row, so `(0, 0)` is the
/// top-left corner and `(n-1, n-1)` the bottom-right corner of an n×n board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Place {
    pub x: i32,
    pub y: i32,
}

impl Place {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The place `steps` steps away in direction `(dx, dy)`.
    pub(crate) fn offset(self, (dx, dy): (i32, i32), steps: i32) -> Self {
        Self::new(self.x + dx * steps, self.y + dy * steps)
    }
}

impl From<(i32, i32)> for Place {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Place> for (i32, i32) {
    fn from(place: Place) -> Self {
        (place.x, place.y)
    }
}

impl std::fmt::Display for Place {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
