// SPDX-License-Identifier: Apache-2.0

//! Example of multi-threaded canonicalization against the shared registry.

use binfn::registry::{self, BinaryFn};
use binfn::truth_index::encode_row;
use binfn::{BinaryPredicate, TruthIndex};
use rayon::prelude::*;

/// Per-thread predicate that is behaviorally one of the sixteen functions.
struct Shifted {
    bits: u8,
}

impl BinaryPredicate for Shifted {
    fn apply(&self, a: bool, b: bool) -> bool {
        TruthIndex::from_low_bits(self.bits).get_bit(encode_row(a, b))
    }
}

pub fn validate_all_threads_share_instances() {
    // Every worker canonicalizes its own predicate object; the results must be
    // the very same table entries regardless of which thread asked.
    let results: Vec<&'static BinaryFn> = (0..num_cpus::get())
        .into_par_iter()
        .map(|i| {
            let bits = (i % TruthIndex::COUNT) as u8;
            registry::canonicalize(&Shifted { bits })
        })
        .collect();

    for (i, f) in results.iter().enumerate() {
        let want = BinaryFn::from_index(TruthIndex::from_low_bits((i % TruthIndex::COUNT) as u8));
        log::debug!("thread {} got {}", i, f);
        assert!(std::ptr::eq(*f, want));
    }
}
