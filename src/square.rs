use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> Self {
        Square { row, col }
    }

    pub fn from_index(index: usize, size: usize) -> Self {
        Square {
            row: (index / size) as u8,
            col: (index % size) as u8,
        }
    }

    /// Bit index of this square: `row * size + col`.
    pub fn to_index(&self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    pub fn is_valid(&self, size: usize) -> bool {
        (self.row as usize) < size && (self.col as usize) < size
    }

    /// The square `(row + dr, col + dc)`, or `None` when it falls off a
    /// `size × size` board.
    pub fn offset(&self, dr: i8, dc: i8, size: usize) -> Option<Square> {
        let row = self.row as i16 + dr as i16;
        let col = self.col as i16 + dc as i16;
        if row < 0 || col < 0 || row as usize >= size || col as usize >= size {
            return None;
        }
        Some(Square::new(row as u8, col as u8))
    }

    pub fn is_knight_move_to(&self, other: &Square) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        matches!((dr, dc), (1, 2) | (2, 1))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
