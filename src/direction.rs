use crate::square::Square;

/// Number of knight jump directions, and of target slots per square.
pub const MOVE_COUNT: usize = 8;

/// Knight jump directions in fixed slot order. The first letter is the long
/// leg (two squares), the second the short leg: U = toward row 0,
/// D = toward higher rows, L = toward column 0, R = toward higher columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KnightMove {
    UpLeft,
    UpRight,
    RightUp,
    RightDown,
    DownRight,
    DownLeft,
    LeftDown,
    LeftUp,
}

impl KnightMove {
    pub const ALL: [KnightMove; MOVE_COUNT] = [
        KnightMove::UpLeft,
        KnightMove::UpRight,
        KnightMove::RightUp,
        KnightMove::RightDown,
        KnightMove::DownRight,
        KnightMove::DownLeft,
        KnightMove::LeftDown,
        KnightMove::LeftUp,
    ];

    /// `(row delta, column delta)`.
    pub fn delta(&self) -> (i8, i8) {
        match self {
            KnightMove::UpLeft => (-2, -1),
            KnightMove::UpRight => (-2, 1),
            KnightMove::RightUp => (-1, 2),
            KnightMove::RightDown => (1, 2),
            KnightMove::DownRight => (2, 1),
            KnightMove::DownLeft => (2, -1),
            KnightMove::LeftDown => (1, -2),
            KnightMove::LeftUp => (-1, -2),
        }
    }

    pub fn slot(&self) -> usize {
        *self as usize
    }

    pub fn apply(&self, from: &Square, size: usize) -> Option<Square> {
        let (dr, dc) = self.delta();
        from.offset(dr, dc, size)
    }
}

impl std::fmt::Display for KnightMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            KnightMove::UpLeft => "UL",
            KnightMove::UpRight => "UR",
            KnightMove::RightUp => "RU",
            KnightMove::RightDown => "RD",
            KnightMove::DownRight => "DR",
            KnightMove::DownLeft => "DL",
            KnightMove::LeftDown => "LD",
            KnightMove::LeftUp => "LU",
        };
        write!(f, "{}", name)
    }
}

/// Destination of one jump slot: a square index on the board, or an explicit
/// off-board marker that keeps the slot in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    OnBoard(usize),
    OffBoard,
}

impl Target {
    pub fn index(&self) -> Option<usize> {
        match self {
            Target::OnBoard(idx) => Some(*idx),
            Target::OffBoard => None,
        }
    }

    pub fn is_on_board(&self) -> bool {
        matches!(self, Target::OnBoard(_))
    }
}
