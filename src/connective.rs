// SPDX-License-Identifier: Apache-2.0

//! The sixteen named binary connectives.
//!
//! Each connective's truth-table index is computed at compile time from its
//! classical definition in [`classical`] rather than written down by hand. The
//! enum discriminant *is* that index, so two connectives that collapse to the
//! same truth table are rejected by the compiler.

use serde::{Deserialize, Serialize};

use crate::registry::BinaryFn;
use crate::truth_index::TruthIndex;

/// Classical definitions of the named connectives.
pub mod classical {
    pub const fn never(_a: bool, _b: bool) -> bool {
        false
    }

    pub const fn not_or(a: bool, b: bool) -> bool {
        !(a || b)
    }

    pub const fn only_second(a: bool, b: bool) -> bool {
        !a && b
    }

    pub const fn not_first(a: bool, _b: bool) -> bool {
        !a
    }

    pub const fn only_first(a: bool, b: bool) -> bool {
        a && !b
    }

    pub const fn not_second(_a: bool, b: bool) -> bool {
        !b
    }

    pub const fn not_same(a: bool, b: bool) -> bool {
        a != b
    }

    pub const fn not_and(a: bool, b: bool) -> bool {
        !(a && b)
    }

    pub const fn and(a: bool, b: bool) -> bool {
        a && b
    }

    pub const fn same(a: bool, b: bool) -> bool {
        a == b
    }

    pub const fn second(_a: bool, b: bool) -> bool {
        b
    }

    /// Material implication `a -> b`.
    pub const fn causes(a: bool, b: bool) -> bool {
        !a || b
    }

    pub const fn first(a: bool, _b: bool) -> bool {
        a
    }

    /// Converse implication `b -> a`.
    pub const fn caused_by(a: bool, b: bool) -> bool {
        a || !b
    }

    pub const fn or(a: bool, b: bool) -> bool {
        a || b
    }

    pub const fn always(_a: bool, _b: bool) -> bool {
        true
    }
}

/// Evaluates a `const fn(bool, bool) -> bool` on the four rows at compile time.
macro_rules! derived_index {
    ($f:path) => {
        TruthIndex::from_rows($f(false, false), $f(false, true), $f(true, false), $f(true, true))
            .get()
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Connective {
    False = derived_index!(classical::never),
    NotOr = derived_index!(classical::not_or),
    OnlySecond = derived_index!(classical::only_second),
    NotFirst = derived_index!(classical::not_first),
    OnlyFirst = derived_index!(classical::only_first),
    NotSecond = derived_index!(classical::not_second),
    NotSame = derived_index!(classical::not_same),
    NotAnd = derived_index!(classical::not_and),
    And = derived_index!(classical::and),
    Same = derived_index!(classical::same),
    Second = derived_index!(classical::second),
    Causes = derived_index!(classical::causes),
    First = derived_index!(classical::first),
    CausedBy = derived_index!(classical::caused_by),
    Or = derived_index!(classical::or),
    True = derived_index!(classical::always),
}

const DECLARED: [Connective; TruthIndex::COUNT] = [
    Connective::False,
    Connective::NotOr,
    Connective::OnlySecond,
    Connective::NotFirst,
    Connective::OnlyFirst,
    Connective::NotSecond,
    Connective::NotSame,
    Connective::NotAnd,
    Connective::And,
    Connective::Same,
    Connective::Second,
    Connective::Causes,
    Connective::First,
    Connective::CausedBy,
    Connective::Or,
    Connective::True,
];

impl Connective {
    /// All connectives, position `i` holding the one with truth-table index
    /// `i`. Discriminants are distinct and 4 bits wide, so this is a
    /// bijection.
    pub const ALL: [Connective; TruthIndex::COUNT] = {
        let mut by_index = [Connective::False; TruthIndex::COUNT];
        let mut i = 0;
        while i < TruthIndex::COUNT {
            let c = DECLARED[i];
            by_index[c as usize] = c;
            i += 1;
        }
        by_index
    };

    #[inline]
    pub const fn index(self) -> TruthIndex {
        TruthIndex::from_low_bits(self as u8)
    }

    #[inline]
    pub const fn from_index(index: TruthIndex) -> Self {
        Self::ALL[index.get() as usize]
    }

    /// The canonical instance for this connective.
    #[inline]
    pub fn function(self) -> &'static BinaryFn {
        BinaryFn::from_index(self.index())
    }

    pub const fn name(self) -> &'static str {
        match self {
            Connective::False => "FALSE",
            Connective::NotOr => "NOT_OR",
            Connective::OnlySecond => "ONLY_SECOND",
            Connective::NotFirst => "NOT_FIRST",
            Connective::OnlyFirst => "ONLY_FIRST",
            Connective::NotSecond => "NOT_SECOND",
            Connective::NotSame => "NOT_SAME",
            Connective::NotAnd => "NOT_AND",
            Connective::And => "AND",
            Connective::Same => "SAME",
            Connective::Second => "SECOND",
            Connective::Causes => "CAUSES",
            Connective::First => "FIRST",
            Connective::CausedBy => "CAUSED_BY",
            Connective::Or => "OR",
            Connective::True => "TRUE",
        }
    }
}

impl crate::predicate::BinaryPredicate for Connective {
    #[inline]
    fn apply(&self, a: bool, b: bool) -> bool {
        self.index().evaluate(a, b)
    }
}

impl std::fmt::Display for Connective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
