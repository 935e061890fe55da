use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use paste::paste;

/// A single-word bitboard: one bit per square, up to 8×8 = 64 squares.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bitboard {
    bits: u64,
}

impl Bitboard {
    /// Number of bits in the word.
    pub const WIDTH: usize = u64::BITS as usize;

    /// All bits zero.
    pub const EMPTY: Bitboard = Bitboard { bits: 0 };

    /// All bits one.
    pub const FULL: Bitboard = Bitboard { bits: u64::MAX };

    #[inline]
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    #[inline]
    pub const fn full() -> Self {
        Self::FULL
    }

    /// Single bit set at `index`.
    #[inline]
    pub fn single(index: usize) -> Self {
        debug_assert!(index < Self::WIDTH);
        Bitboard { bits: 1u64 << index }
    }

    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Bitboard { bits }
    }

    #[inline]
    pub const fn bits(&self) -> u64 {
        self.bits
    }

    /// Test whether bit `index` is set.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        debug_assert!(index < Self::WIDTH);
        (self.bits >> index) & 1 != 0
    }

    /// Set bit `index` to 1.
    #[inline]
    pub fn set(&mut self, index: usize) {
        debug_assert!(index < Self::WIDTH);
        self.bits |= 1u64 << index;
    }

    /// Clear bit `index` to 0.
    #[inline]
    pub fn clear(&mut self, index: usize) {
        debug_assert!(index < Self::WIDTH);
        self.bits &= !(1u64 << index);
    }

    #[inline]
    pub fn set_to(&mut self, index: usize, on: bool) {
        if on {
            self.set(index);
        } else {
            self.clear(index);
        }
    }

    #[inline]
    pub fn flip(&mut self, index: usize) {
        debug_assert!(index < Self::WIDTH);
        self.bits ^= 1u64 << index;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Population count.
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    #[inline]
    pub fn count_off(&self) -> u32 {
        self.bits.count_zeros()
    }

    /// Index of the lowest set bit, or `None` if empty.
    #[inline]
    pub fn lowest_bit_index(&self) -> Option<usize> {
        if self.bits == 0 {
            None
        } else {
            Some(self.bits.trailing_zeros() as usize)
        }
    }

    /// Rotate toward higher indices; `n` wraps modulo the word width.
    #[inline]
    pub fn rotate_left(&self, n: usize) -> Self {
        Bitboard {
            bits: self.bits.rotate_left((n % Self::WIDTH) as u32),
        }
    }

    #[inline]
    pub fn rotate_right(&self, n: usize) -> Self {
        Bitboard {
            bits: self.bits.rotate_right((n % Self::WIDTH) as u32),
        }
    }

    /// Bit 0 swaps with bit 63, bit 1 with bit 62, and so on.
    #[inline]
    pub fn mirror(&self) -> Self {
        Bitboard {
            bits: self.bits.reverse_bits(),
        }
    }

    /// Iterate over indices of set bits, lowest first.
    #[inline]
    pub fn iter_ones(&self) -> BitIterator {
        BitIterator { bits: self.bits }
    }
}

macro_rules! impl_bit_op {
    ($trait:ident, $method:ident, $op:tt) => {
        paste! {
            impl $trait for Bitboard {
                type Output = Bitboard;
                #[inline]
                fn $method(self, rhs: Bitboard) -> Bitboard {
                    Bitboard { bits: self.bits $op rhs.bits }
                }
            }

            impl [<$trait Assign>] for Bitboard {
                #[inline]
                fn [<$method _assign>](&mut self, rhs: Bitboard) {
                    self.bits = self.bits $op rhs.bits;
                }
            }
        }
    };
}

impl_bit_op!(BitAnd, bitand, &);
impl_bit_op!(BitOr, bitor, |);
impl_bit_op!(BitXor, bitxor, ^);

impl Not for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn not(self) -> Bitboard {
        Bitboard { bits: !self.bits }
    }
}

/// Iterator over set-bit indices in a `Bitboard`.
pub struct BitIterator {
    bits: u64,
}

impl Iterator for BitIterator {
    type Item = usize;
    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.bits == 0 {
            return None;
        }
        let bit = self.bits.trailing_zeros() as usize;
        // Clear lowest set bit
        self.bits &= self.bits - 1;
        Some(bit)
    }
}
