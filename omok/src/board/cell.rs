use crate::PlayerId;

/// The content of a single intersection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(PlayerId),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The player whose stone is on this cell, if any.
    pub fn player(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(id) => Some(id),
        }
    }
}
