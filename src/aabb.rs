// SPDX-License-Identifier: Apache-2.0

//! Axis-aligned boxes combined under a binary Boolean function.
//!
//! `a.compare(b, f)` asks whether some point `p` satisfies
//! `f(p in a, p in b)`, e.g. `AND` is "do they overlap" and `ONLY_FIRST` is
//! "does `a` stick out of `b`". Functions that are true on `(false, false)`
//! describe unbounded regions and are rejected.

use serde::{Deserialize, Serialize};

use crate::connective::Connective;
use crate::predicate::BinaryPredicate;
use crate::registry::{self, BinaryFn};

/// Default tolerance for boundary comparisons.
pub const EPSILON: f64 = 1e-7;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryOptions {
    pub epsilon: f64,
}

impl GeometryOptions {
    /// Comparisons with no tolerance band.
    pub fn exact() -> Self {
        Self { epsilon: 0.0 }
    }
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self { epsilon: EPSILON }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareError {
    UnboundedRegion { function: Connective },
}

impl std::fmt::Display for CompareError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnboundedRegion { function } => write!(
                f,
                "{} holds outside both boxes; the compared region is unbounded",
                function
            ),
        }
    }
}

impl std::error::Error for CompareError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// The two remaining axes, in cyclic order after `self`.
    pub fn others(self) -> (Axis, Axis) {
        match self {
            Axis::X => (Axis::Y, Axis::Z),
            Axis::Y => (Axis::Z, Axis::X),
            Axis::Z => (Axis::X, Axis::Y),
        }
    }

    #[inline]
    fn slot(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl Aabb {
    /// Builds a box from two opposite corners in any order.
    pub fn new(corner1: [f64; 3], corner2: [f64; 3]) -> Self {
        let mut min = [0.0; 3];
        let mut max = [0.0; 3];
        for i in 0..3 {
            min[i] = corner1[i].min(corner2[i]);
            max[i] = corner1[i].max(corner2[i]);
        }
        Self { min, max }
    }

    #[inline]
    pub fn min(&self, axis: Axis) -> f64 {
        self.min[axis.slot()]
    }

    #[inline]
    pub fn max(&self, axis: Axis) -> f64 {
        self.max[axis.slot()]
    }

    #[must_use]
    pub fn offset(&self, dx: f64, dy: f64, dz: f64) -> Self {
        let d = [dx, dy, dz];
        let mut out = *self;
        for i in 0..3 {
            out.min[i] += d[i];
            out.max[i] += d[i];
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.is_empty_with(&GeometryOptions::default())
    }

    pub fn is_empty_with(&self, options: &GeometryOptions) -> bool {
        Axis::ALL
            .iter()
            .any(|&axis| self.min(axis) + options.epsilon > self.max(axis))
    }

    pub fn intersects(&self, other: &Aabb) -> bool {
        self.intersects_with(other, &GeometryOptions::default())
    }

    pub fn intersects_with(&self, other: &Aabb, options: &GeometryOptions) -> bool {
        let eps = options.epsilon;
        Axis::ALL.iter().all(|&axis| {
            self.min(axis) + eps < other.max(axis) && self.max(axis) > other.min(axis) + eps
        })
    }

    /// Whether some part of `self` lies outside `other`.
    fn pokes_outside(&self, other: &Aabb, eps: f64) -> bool {
        Axis::ALL.iter().any(|&axis| {
            self.min(axis) + eps < other.min(axis) || self.max(axis) > other.max(axis) + eps
        })
    }

    pub fn compare(&self, other: &Aabb, function: &BinaryFn) -> Result<bool, CompareError> {
        self.compare_with(other, function, &GeometryOptions::default())
    }

    pub fn compare_with(
        &self,
        other: &Aabb,
        function: &BinaryFn,
        options: &GeometryOptions,
    ) -> Result<bool, CompareError> {
        if function.apply(false, false) {
            return Err(CompareError::UnboundedRegion {
                function: function.connective(),
            });
        }
        if std::ptr::eq(function, registry::FALSE) {
            return Ok(false);
        }

        let eps = options.epsilon;
        let self_empty = self.is_empty_with(options);
        let other_empty = other.is_empty_with(options);
        let result = if self_empty {
            function.apply(false, !other_empty)
        } else if other_empty {
            function.apply(true, false)
        } else {
            (function.apply(true, true) && self.intersects_with(other, options))
                || (function.apply(false, true) && other.pokes_outside(self, eps))
                || (function.apply(true, false) && self.pokes_outside(other, eps))
        };
        log::trace!(
            "compare {:?} {} {:?} => {} (empty: {}, {})",
            self,
            function,
            other,
            result,
            self_empty,
            other_empty
        );
        Ok(result)
    }

    /// Answers `self.compare(other, function)` by asking `other` with the
    /// argument order of `function` swapped.
    pub fn compare_as_second(
        &self,
        other: &Aabb,
        function: &BinaryFn,
    ) -> Result<bool, CompareError> {
        other.compare(self, function.swap_args())
    }

    /// Clips a signed movement of `moving` along `axis` so that it stops at
    /// the face of `self`.
    ///
    /// Returns `max_dist` unchanged when `self` is empty, lies behind `moving`,
    /// is out of reach, or does not overlap `moving` on the two other axes.
    pub fn collision_offset(&self, axis: Axis, moving: &Aabb, max_dist: f64) -> f64 {
        self.collision_offset_with(axis, moving, max_dist, &GeometryOptions::default())
    }

    pub fn collision_offset_with(
        &self,
        axis: Axis,
        moving: &Aabb,
        max_dist: f64,
        options: &GeometryOptions,
    ) -> f64 {
        let eps = options.epsilon;
        if max_dist.abs() < eps {
            return 0.0;
        }
        if self.is_empty_with(options) {
            return max_dist;
        }

        let mut d;
        if max_dist > 0.0 {
            d = self.min(axis) - moving.max(axis);
            if d < -eps || max_dist < d {
                return max_dist;
            } else if d < eps {
                d = 0.0;
            }
        } else {
            d = self.max(axis) - moving.min(axis);
            if d > eps || max_dist > d {
                return max_dist;
            } else if d > -eps {
                d = 0.0;
            }
        }

        let (b, c) = axis.others();
        let overlaps = self.min(b) + eps < moving.max(b)
            && moving.min(b) + eps < self.max(b)
            && self.min(c) + eps < moving.max(c)
            && moving.min(c) + eps < self.max(c);
        if overlaps {
            log::debug!("clipped movement along {:?} from {} to {}", axis, max_dist, d);
            d
        } else {
            max_dist
        }
    }
}
