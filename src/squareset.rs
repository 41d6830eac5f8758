//! An efficient set of chessboard squares,
//! where each bit index of a 64-bit unsigned integer represents one square.
//!
//! Data Order:
//! * Little-Endian Rank-File mapping
//! * A1 = least significant bit = 0b0 = 0
//! * B1 = 0b1 = 1
//! * A2 = 0b1000 = 8
//! * H8 = most significant bit = 0x8000000000000000
//!
//! Candidate destinations, capture targets and attack maps are all sets of
//! squares, so one canonical set type serves every move-generation query.
//! Deduplication is inherent: inserting a square twice is a no-op.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not, Sub};

use crate::coretypes::{Square, NUM_FILES, NUM_RANKS, NUM_SQUARES};

/// SquareSet is a wrapper around a u64 integer, where each bit represents
/// membership of its corresponding chess board square.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
#[repr(transparent)]
pub struct SquareSet(pub(crate) u64);

impl SquareSet {
    pub const EMPTY: SquareSet = Self(0);

    /// Returns true if there are no squares in self, false otherwise.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns number of squares in the set.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if square is a member.
    #[inline(always)]
    pub const fn contains(&self, square: Square) -> bool {
        self.0 & (1u64 << square.idx()) != 0
    }

    /// Adds square to the set.
    #[inline(always)]
    pub fn insert(&mut self, square: Square) {
        self.0 |= 1u64 << square.idx();
    }

    /// Removes square from the set.
    #[inline(always)]
    pub fn remove(&mut self, square: Square) {
        self.0 &= !(1u64 << square.idx());
    }

    /// Returns true if self and other have any square in common.
    #[inline(always)]
    pub const fn intersects(&self, other: SquareSet) -> bool {
        self.0 & other.0 != 0
    }

    /// Returns the member square with the lowest index, or None if empty.
    #[inline(always)]
    pub fn first(&self) -> Option<Square> {
        Square::from_u8(self.0.trailing_zeros() as u8)
    }

    /// Iterate the member squares in ascending index order.
    pub fn iter(&self) -> SquareSetIter {
        SquareSetIter { set: *self }
    }
}

impl From<Square> for SquareSet {
    fn from(square: Square) -> Self {
        Self(1u64 << square.idx())
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for square in iter {
            set.insert(square);
        }
        set
    }
}

impl Not for SquareSet {
    type Output = Self;
    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

impl BitOr for SquareSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for SquareSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0
    }
}

impl BitAnd for SquareSet {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for SquareSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0
    }
}

/// Set difference: squares in self that are not in rhs.
impl Sub for SquareSet {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 & !rhs.0)
    }
}

/// Iterator type that yields each square of a set through efficient generation.
pub struct SquareSetIter {
    set: SquareSet,
}

impl Iterator for SquareSetIter {
    type Item = Square;
    fn next(&mut self) -> Option<Self::Item> {
        let maybe_square = self.set.first();
        self.set.0 &= self.set.0.wrapping_sub(1);
        maybe_square
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.set.len();
        (size, Some(size))
    }
}
impl ExactSizeIterator for SquareSetIter {}

/// Allow the squares of a set to be iterated directly and cheaply.
impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIter;
    fn into_iter(self) -> Self::IntoIter {
        SquareSetIter { set: self }
    }
}

impl fmt::Display for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = String::with_capacity(NUM_SQUARES + NUM_RANKS);
        for rank in (0..NUM_RANKS as u8).rev() {
            for file in 0..NUM_FILES as u8 {
                let square = Square::from_u8(rank * NUM_FILES as u8 + file).unwrap();
                buf.push(if self.contains(square) { '1' } else { '.' });
            }
            buf.push('\n');
        }
        f.write_str(&buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Square::*;

    #[test]
    fn insert_contains_remove() {
        let mut set = SquareSet::EMPTY;
        assert!(set.is_empty());

        for square in [A1, A2, A4, D3, F6, G7, H1, H8] {
            set.insert(square);
            assert!(set.contains(square));
        }
        assert_eq!(set.len(), 8);

        // Second insert of the same square is a no-op.
        set.insert(D3);
        assert_eq!(set.len(), 8);

        set.remove(D3);
        assert!(!set.contains(D3));
        assert_eq!(set.len(), 7);
    }

    #[test]
    fn collect_and_iterate() {
        let set: SquareSet = [C2, B5, H8, C2].into_iter().collect();
        assert_eq!(set.len(), 3);

        let squares: Vec<Square> = set.iter().collect();
        assert_eq!(squares, vec![C2, B5, H8]);

        let mut empty = SquareSet::EMPTY.into_iter();
        assert_eq!(empty.len(), 0);
        assert_eq!(empty.next(), None);
    }

    #[test]
    fn set_operations() {
        let a: SquareSet = [A1, B1, C1].into_iter().collect();
        let b: SquareSet = [B1, C1, D1].into_iter().collect();

        assert_eq!((a | b).len(), 4);
        assert_eq!((a & b).len(), 2);
        assert_eq!(a - b, SquareSet::from(A1));
        assert!(a.intersects(b));
        assert!(!a.intersects(SquareSet::from(H8)));
    }

    #[test]
    fn display_set() {
        let set = SquareSet::from(A1) | SquareSet::from(H8);
        let shown = set.to_string();
        assert!(shown.starts_with(".......1\n"));
        assert!(shown.ends_with("1.......\n"));
    }
}
