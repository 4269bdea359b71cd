// SPDX-License-Identifier: Apache-2.0

//! The two-argument predicate capability and truth-table extraction.

use crate::truth_index::TruthIndex;

/// Anything that answers "what is `f(a, b)`?".
///
/// Implementations must be pure functions of their two inputs. An impure
/// predicate still produces a valid index, but which one is unspecified.
pub trait BinaryPredicate {
    fn apply(&self, a: bool, b: bool) -> bool;
}

impl<F> BinaryPredicate for F
where
    F: Fn(bool, bool) -> bool,
{
    #[inline]
    fn apply(&self, a: bool, b: bool) -> bool {
        self(a, b)
    }
}

/// Samples `predicate` on the four rows and packs the outputs into a
/// truth-table index.
pub fn index_of<P: BinaryPredicate + ?Sized>(predicate: &P) -> TruthIndex {
    TruthIndex::from_rows(
        predicate.apply(false, false),
        predicate.apply(false, true),
        predicate.apply(true, false),
        predicate.apply(true, true),
    )
}

/// Index of `predicate` with its arguments exchanged.
///
/// Same samples as `index_of`, with the (F,T) and (T,F) outputs packed into
/// each other's bit positions.
pub fn swapped_index_of<P: BinaryPredicate + ?Sized>(predicate: &P) -> TruthIndex {
    TruthIndex::from_rows(
        predicate.apply(false, false),
        predicate.apply(true, false),
        predicate.apply(false, true),
        predicate.apply(true, true),
    )
}
