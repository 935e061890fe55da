use std::fmt;

use crate::square::Square;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TourError {
    /// The start square lies outside the `size × size` board.
    SquareOutOfBounds { square: Square, size: usize },
    /// A square index lies beyond the board's `area` squares.
    IndexOutOfBounds { index: usize, area: usize },
    /// The square at `index` is already on the path.
    AlreadyVisited { index: usize },
    /// The board is empty or has more squares than the bitboard has bits.
    UnsupportedSize { size: usize, max: usize },
}

impl fmt::Display for TourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TourError::SquareOutOfBounds { square, size } => {
                write!(f, "square {square} is outside the {size}x{size} board")
            }
            TourError::IndexOutOfBounds { index, area } => {
                write!(f, "square index {index} is outside a board of {area} squares")
            }
            TourError::AlreadyVisited { index } => {
                write!(f, "square index {index} is already on the path")
            }
            TourError::UnsupportedSize { size, max } => {
                write!(f, "unsupported board size {size} (expected 1..={max})")
            }
        }
    }
}

impl std::error::Error for TourError {}
