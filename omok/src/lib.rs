//! An Omok (five-in-a-row) board: an n×n grid of intersections on which two
//! players place stones, and the scan that finds a winning row of five.

pub use board::*;
pub use errors::*;
pub use player::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod errors;
mod player;
mod visualization;
