//! Full-space enumeration of hedge digit vectors.
//!
//! A hedge shape with h three-way and v two-way positions spans a space of
//! 3^h * 2^v points. Each point is a digit vector: h ternary digits
//! followed by v binary digits, derived from its ordinal index by repeated
//! mixed-radix division with the first digit most significant.

use smallvec::SmallVec;
use types::{ShapeError, SystemShape};

/// Inline digit storage. Both pool sizes fit without heap allocation.
pub type Digits = SmallVec<[u8; 16]>;

/// Largest space this module will enumerate eagerly. Shapes beyond this
/// must be rejected by the caller rather than silently truncated.
pub const MAX_SPACE: u64 = 1 << 24;

/// One point in the hedge space.
///
/// Positions `0..h` hold ternary digits (0, 1, 2) and positions `h..h+v`
/// hold binary digits (0, 1). The digit at a position is an index into the
/// symbols covered by the match occupying that position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitVector {
    digits: Digits,
}

impl DigitVector {
    /// Build the vector at `index` in the space of the given hedge counts.
    pub fn from_index(index: u64, three_way: u8, two_way: u8) -> Self {
        let dims = three_way as usize + two_way as usize;
        let mut digits: Digits = SmallVec::from_elem(0, dims);
        let mut rest = index;
        for pos in (0..dims).rev() {
            let radix = if pos < three_way as usize { 3 } else { 2 };
            digits[pos] = (rest % radix) as u8;
            rest /= radix;
        }
        Self { digits }
    }

    /// The ordinal index of this vector in its space.
    pub fn to_index(&self, three_way: u8) -> u64 {
        let mut index = 0u64;
        for (pos, &digit) in self.digits.iter().enumerate() {
            let radix = if pos < three_way as usize { 3 } else { 2 };
            index = index * radix + digit as u64;
        }
        index
    }

    /// The digit at `pos`.
    #[inline]
    pub fn digit(&self, pos: usize) -> u8 {
        self.digits[pos]
    }

    /// Number of digit positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// True for the h = v = 0 trivial vector.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// View the digits as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.digits
    }

    /// Count of positions where the two vectors differ.
    pub fn hamming_distance(&self, other: &DigitVector) -> usize {
        self.digits
            .iter()
            .zip(other.digits.iter())
            .filter(|(a, b)| a != b)
            .count()
    }
}

/// Enumerate the complete space for a hedge shape.
///
/// Produces all 3^h * 2^v digit vectors in ordinal order. Fails only when
/// the index space overflows ([`MAX_SPACE`]); the caller must request a
/// smaller shape. `h = v = 0` yields the single empty vector.
pub fn enumerate(three_way: u8, two_way: u8) -> Result<Vec<DigitVector>, ShapeError> {
    let size = SystemShape::new(three_way, two_way, 0, 0).space_size()?;
    if size > MAX_SPACE {
        return Err(ShapeError::SpaceOverflow { three_way, two_way });
    }
    Ok((0..size)
        .map(|index| DigitVector::from_index(index, three_way, two_way))
        .collect())
}
