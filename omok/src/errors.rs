/// The error type for [`Board::cell()`](crate::Board::cell), i.e. for looking
/// at a place that is not on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfBounds {
    pub x: i32,
    pub y: i32,
    pub size: usize,
}

impl std::error::Error for OutOfBounds {}

impl std::fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Place ({}, {}) is outside of the {}x{} board",
            self.x, self.y, self.size, self.size
        )
    }
}
