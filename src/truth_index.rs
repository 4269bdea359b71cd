// SPDX-License-Identifier: Apache-2.0

//! 2-input single-output Boolean function truth tables.
//!
//! We represent a Boolean function `f(a,b) -> o` as a 4-bit index where bit
//! `i` corresponds to the output value on the input row encoded by `i`:
//! - `b = (i >> 0) & 1`
//! - `a = (i >> 1) & 1`
//!
//! That is, `b` is the least-significant selector bit and toggles fastest:
//!
//! | bit | (a, b)         |
//! |-----|----------------|
//! | 0   | (false, false) |
//! | 1   | (false, true)  |
//! | 2   | (true, false)  |
//! | 3   | (true, true)   |

use serde::{Deserialize, Serialize};

/// Rows where `a` is true / false.
const A_TRUE_ROWS: u8 = 0b1100;
const A_FALSE_ROWS: u8 = 0b0011;
/// Rows where `b` is true / false.
const B_TRUE_ROWS: u8 = 0b1010;
const B_FALSE_ROWS: u8 = 0b0101;

/// Rows (F,F) and (T,T) read the same after exchanging `a` and `b`.
const SWAP_INVARIANT_ROWS: u8 = 0b1001;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfRange {
    pub got: u8,
}

impl std::fmt::Display for IndexOutOfRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "truth-table index out of range: got {}, expected 0..=15",
            self.got
        )
    }
}

impl std::error::Error for IndexOutOfRange {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(transparent)]
pub struct TruthIndex(u8);

impl TruthIndex {
    /// Number of distinct 2-input Boolean functions.
    pub const COUNT: usize = 16;

    /// Keeps the low 4 bits of `bits`; every result is a valid index.
    pub const fn from_low_bits(bits: u8) -> Self {
        Self(bits & 0xF)
    }

    /// Packs the four row outputs in canonical row order.
    pub const fn from_rows(ff: bool, ft: bool, tf: bool, tt: bool) -> Self {
        Self((ff as u8) | ((ft as u8) << 1) | ((tf as u8) << 2) | ((tt as u8) << 3))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Output of the function on `(a, b)`.
    ///
    /// Intersects the rows consistent with `a`, the rows consistent with `b`,
    /// and the rows where the function is true; exactly one row survives the
    /// first two masks.
    #[inline]
    pub const fn evaluate(self, a: bool, b: bool) -> bool {
        let a_rows = if a { A_TRUE_ROWS } else { A_FALSE_ROWS };
        let b_rows = if b { B_TRUE_ROWS } else { B_FALSE_ROWS };
        (self.0 & a_rows & b_rows) != 0
    }

    /// Index of `f'(a, b) = f(b, a)`.
    #[inline]
    pub const fn swapped(self) -> Self {
        Self((self.0 & SWAP_INVARIANT_ROWS) | ((self.0 & 0b0100) >> 1) | ((self.0 & 0b0010) << 1))
    }

    /// Index of `f'(a, b) = !f(a, b)`.
    #[inline]
    pub const fn not(self) -> Self {
        Self(!self.0 & 0xF)
    }

    #[inline]
    pub fn get_bit(self, row: u8) -> bool {
        debug_assert!(row < 4);
        ((self.0 >> row) & 1) != 0
    }

    /// All sixteen indices in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT as u8).map(Self)
    }
}

impl TryFrom<u8> for TruthIndex {
    type Error = IndexOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (value as usize) < Self::COUNT {
            Ok(Self(value))
        } else {
            Err(IndexOutOfRange { got: value })
        }
    }
}

impl From<TruthIndex> for u8 {
    fn from(index: TruthIndex) -> Self {
        index.0
    }
}

#[inline]
pub fn decode_row(row: u8) -> (bool, bool) {
    debug_assert!(row < 4);
    ((row & 0b10) != 0, (row & 0b01) != 0)
}

#[inline]
pub fn encode_row(a: bool, b: bool) -> u8 {
    ((a as u8) << 1) | (b as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_evaluate_matches_row_bit() {
        for index in TruthIndex::all() {
            for row in 0u8..4 {
                let (a, b) = decode_row(row);
                assert_eq!(index.evaluate(a, b), index.get_bit(row), "index {index:?} row {row}");
            }
        }
    }

    #[test_case(0b0001, 0b0001; "only ff is invariant")]
    #[test_case(0b1000, 0b1000; "only tt is invariant")]
    #[test_case(0b0010, 0b0100; "ft moves to tf")]
    #[test_case(0b0100, 0b0010; "tf moves to ft")]
    #[test_case(0b1011, 0b1101; "implication flips direction")]
    fn test_swapped(index: u8, want: u8) {
        assert_eq!(TruthIndex::from_low_bits(index).swapped().get(), want);
    }

    #[test]
    fn test_swapped_transposes_arguments() {
        for index in TruthIndex::all() {
            let swapped = index.swapped();
            for row in 0u8..4 {
                let (a, b) = decode_row(row);
                assert_eq!(swapped.evaluate(a, b), index.evaluate(b, a));
            }
            assert_eq!(swapped.swapped(), index);
        }
    }

    #[test]
    fn test_not_complements_every_row() {
        for index in TruthIndex::all() {
            for row in 0u8..4 {
                let (a, b) = decode_row(row);
                assert_eq!(index.not().evaluate(a, b), !index.evaluate(a, b));
            }
            assert_eq!(index.not().not(), index);
        }
    }

    #[test]
    fn test_encode_decode_row_agree() {
        for row in 0u8..4 {
            let (a, b) = decode_row(row);
            assert_eq!(encode_row(a, b), row);
        }
    }

    #[test]
    fn test_try_from_rejects_out_of_range() {
        assert_eq!(TruthIndex::try_from(15).map(TruthIndex::get), Ok(15));
        assert_eq!(TruthIndex::try_from(16), Err(IndexOutOfRange { got: 16 }));
        assert_eq!(
            IndexOutOfRange { got: 200 }.to_string(),
            "truth-table index out of range: got 200, expected 0..=15"
        );
    }

    #[test]
    fn test_serde_is_bare_integer() {
        let index = TruthIndex::from_rows(false, true, true, false);
        assert_eq!(serde_json::to_string(&index).unwrap(), "6");
        let back: TruthIndex = serde_json::from_str("6").unwrap();
        assert_eq!(back, index);
        assert!(serde_json::from_str::<TruthIndex>("16").is_err());
    }
}
