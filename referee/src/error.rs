use omok::{OutOfBounds, Place};

#[derive(Debug)]
/// Error type for one move of a game script.
pub enum IllegalMove {
    /// The board would have ignored the stone.
    ///
    /// `source` is set when the place is not on the board at all, and unset
    /// when only the legacy placement bounds exclude it.
    OutOfBounds {
        move_idx: usize,
        place: Place,
        source: Option<OutOfBounds>,
    },
    /// There already is a stone on the place.
    Occupied {
        move_idx: usize,
        place: Place,
    },
}

impl IllegalMove {
    /// The 0-based index of the offending move in the script.
    pub fn move_idx(&self) -> usize {
        match self {
            IllegalMove::OutOfBounds { move_idx, .. } | IllegalMove::Occupied { move_idx, .. } => {
                *move_idx
            }
        }
    }

    /// Whose move it was.
    pub fn player_idx(&self) -> usize {
        self.move_idx() % 2
    }
}

impl std::error::Error for IllegalMove {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IllegalMove::OutOfBounds {
                source: Some(err), ..
            } => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::OutOfBounds { move_idx, place, .. } => write!(
                f,
                "Move {} places a stone at {}, outside of the playable area",
                move_idx + 1,
                place
            ),
            IllegalMove::Occupied { move_idx, place } => write!(
                f,
                "Move {} places a stone at {}, which is already occupied",
                move_idx + 1,
                place
            ),
        }
    }
}
