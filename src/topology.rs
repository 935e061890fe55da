use std::sync::OnceLock;

use crate::bitboard::Bitboard;
use crate::direction::{KnightMove, Target, MOVE_COUNT};
use crate::error::TourError;
use crate::square::Square;

pub const STANDARD_SIZE: usize = 8;

/// Largest board side whose squares still fit in one bitboard.
pub const MAX_SIZE: usize = 8;

/// Precomputed knight-move graph for a `size × size` board. Built once and
/// shared read-only by every search over that board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Topology {
    size: usize,
    area: usize,
    /// Mask with 1s at all board squares (indices 0..area).
    board_mask: Bitboard,
    targets: Vec<[Target; MOVE_COUNT]>,
    /// Per square: every bit on except the square's on-board jump targets.
    unreachable: Vec<Bitboard>,
}

impl Topology {
    pub fn new(size: usize) -> Result<Self, TourError> {
        if size == 0 || size * size > Bitboard::WIDTH {
            return Err(TourError::UnsupportedSize {
                size,
                max: MAX_SIZE,
            });
        }
        Ok(Self::build(size))
    }

    /// The 8×8 table, built on first use.
    pub fn standard() -> &'static Topology {
        static STANDARD: OnceLock<Topology> = OnceLock::new();
        STANDARD.get_or_init(|| Self::build(STANDARD_SIZE))
    }

    fn build(size: usize) -> Self {
        debug_assert!(size >= 1 && size * size <= Bitboard::WIDTH);
        let area = size * size;

        let mut board_mask = Bitboard::empty();
        for i in 0..area {
            board_mask.set(i);
        }

        let mut targets = Vec::with_capacity(area);
        let mut unreachable = Vec::with_capacity(area);

        for idx in 0..area {
            let from = Square::from_index(idx, size);
            let mut slots = [Target::OffBoard; MOVE_COUNT];
            let mut mask = Bitboard::full();

            for mv in KnightMove::ALL {
                if let Some(to) = mv.apply(&from, size) {
                    let to_idx = to.to_index(size);
                    slots[mv.slot()] = Target::OnBoard(to_idx);
                    mask.clear(to_idx);
                }
            }

            targets.push(slots);
            unreachable.push(mask);
        }

        Topology {
            size,
            area,
            board_mask,
            targets,
            unreachable,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn area(&self) -> usize {
        self.area
    }

    pub fn board_mask(&self) -> Bitboard {
        self.board_mask
    }

    pub fn contains(&self, square: &Square) -> bool {
        square.is_valid(self.size)
    }

    pub fn index_of(&self, square: &Square) -> usize {
        square.to_index(self.size)
    }

    pub fn square_at(&self, index: usize) -> Square {
        Square::from_index(index, self.size)
    }

    /// All eight jump slots of square `index`, in `KnightMove::ALL` order.
    #[inline]
    pub fn targets(&self, index: usize) -> &[Target; MOVE_COUNT] {
        &self.targets[index]
    }

    #[inline]
    pub fn unreachable(&self, index: usize) -> Bitboard {
        self.unreachable[index]
    }

    #[inline]
    pub fn reachable(&self, index: usize) -> Bitboard {
        !self.unreachable[index]
    }

    /// Number of on-board jump targets of square `index`.
    pub fn degree(&self, index: usize) -> u32 {
        self.reachable(index).count()
    }
}
