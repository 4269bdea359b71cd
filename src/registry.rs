// SPDX-License-Identifier: Apache-2.0

//! Canonical shared instances of the sixteen binary Boolean functions.
//!
//! The table is built by `const` evaluation, so it exists before any code
//! runs and is read-only afterwards. Every `&'static BinaryFn` handed out
//! points into it, which makes pointer identity and truth-table equality the
//! same thing:
//!
//! ```
//! use binfn::registry::{self, AND};
//!
//! let f = registry::canonicalize(&|a: bool, b: bool| !(!a || !b));
//! assert!(std::ptr::eq(f, AND));
//! ```

use serde::{Deserialize, Deserializer, Serialize};

use crate::connective::Connective;
use crate::predicate::{BinaryPredicate, index_of, swapped_index_of};
use crate::truth_index::TruthIndex;

/// One of the sixteen binary Boolean functions.
///
/// There is no public constructor and no `Clone`; callers only ever see
/// `&'static` references into the registry table.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct BinaryFn {
    index: TruthIndex,
}

const fn build_table() -> [BinaryFn; TruthIndex::COUNT] {
    let mut table = [const {
        BinaryFn {
            index: TruthIndex::from_low_bits(0),
        }
    }; TruthIndex::COUNT];
    let mut i = 0;
    while i < TruthIndex::COUNT {
        table[i].index = TruthIndex::from_low_bits(i as u8);
        i += 1;
    }
    table
}

static TABLE: [BinaryFn; TruthIndex::COUNT] = build_table();

macro_rules! named_functions {
    ($($name:ident => $variant:ident,)*) => {
        $(
            pub static $name: &BinaryFn = &TABLE[Connective::$variant as usize];
        )*
    };
}

named_functions! {
    FALSE => False,
    NOT_OR => NotOr,
    ONLY_SECOND => OnlySecond,
    NOT_FIRST => NotFirst,
    ONLY_FIRST => OnlyFirst,
    NOT_SECOND => NotSecond,
    NOT_SAME => NotSame,
    NOT_AND => NotAnd,
    AND => And,
    SAME => Same,
    SECOND => Second,
    CAUSES => Causes,
    FIRST => First,
    CAUSED_BY => CausedBy,
    OR => Or,
    TRUE => True,
}

impl BinaryFn {
    #[inline]
    pub fn from_index(index: TruthIndex) -> &'static BinaryFn {
        &TABLE[index.get() as usize]
    }

    /// The sixteen instances in truth-table index order.
    pub fn all() -> &'static [BinaryFn; TruthIndex::COUNT] {
        &TABLE
    }

    #[inline]
    pub fn index(&self) -> TruthIndex {
        self.index
    }

    #[inline]
    pub fn connective(&self) -> Connective {
        Connective::from_index(self.index)
    }

    /// The instance computing `f(b, a)`. Applying it twice returns `self`.
    #[inline]
    pub fn swap_args(&self) -> &'static BinaryFn {
        Self::from_index(self.index.swapped())
    }

    /// The instance computing `!f(a, b)`.
    #[inline]
    pub fn negate(&self) -> &'static BinaryFn {
        Self::from_index(self.index.not())
    }
}

impl BinaryPredicate for BinaryFn {
    #[inline]
    fn apply(&self, a: bool, b: bool) -> bool {
        self.index.evaluate(a, b)
    }
}

impl std::fmt::Display for BinaryFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.connective().name())
    }
}

impl<'de> Deserialize<'de> for &'static BinaryFn {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        TruthIndex::deserialize(deserializer).map(BinaryFn::from_index)
    }
}

/// Returns the shared instance with the same truth table as `predicate`.
pub fn canonicalize<P: BinaryPredicate + ?Sized>(predicate: &P) -> &'static BinaryFn {
    BinaryFn::from_index(index_of(predicate))
}

/// Returns the shared instance for `predicate` with its arguments exchanged.
///
/// Same result as `canonicalize(predicate).swap_args()`.
pub fn canonicalize_swapped<P: BinaryPredicate + ?Sized>(predicate: &P) -> &'static BinaryFn {
    BinaryFn::from_index(swapped_index_of(predicate))
}
