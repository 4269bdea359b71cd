// SPDX-License-Identifier: Apache-2.0

//! Sweeping a box through a set of obstacle boxes along one axis.
//!
//! A `Shapecaster` answers "how far can `moving` travel along `axis`, up to
//! `max_dist`, before it touches one of my boxes?". Distances that fall below
//! the tolerance are snapped to zero and end the sweep early.

use crate::aabb::{Aabb, Axis, GeometryOptions};

/// Optional per-box filter; boxes it rejects are not obstacles.
pub type BoxFilter<'a> = Option<&'a dyn Fn(&Aabb) -> bool>;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Shapecaster {
    /// No obstacles at all.
    #[default]
    Empty,
    Collection(Vec<Aabb>),
    /// Casts against the first operand, then the second with what is left.
    Combined(Box<Shapecaster>, Box<Shapecaster>),
}

impl Shapecaster {
    /// Obstacles from `boxes`; an empty list gives `Shapecaster::Empty`.
    pub fn from_boxes(boxes: Vec<Aabb>) -> Self {
        if boxes.is_empty() {
            Self::Empty
        } else {
            Self::Collection(boxes)
        }
    }

    /// Casts against `first` and then `second`. An `Empty` operand is dropped
    /// and the other operand returned as is.
    pub fn combine(first: Shapecaster, second: Shapecaster) -> Self {
        match (first, second) {
            (Self::Empty, other) | (other, Self::Empty) => other,
            (first, second) => Self::Combined(Box::new(first), Box::new(second)),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Collection(boxes) => boxes.iter().all(Aabb::is_empty),
            Self::Combined(first, second) => first.is_empty() && second.is_empty(),
        }
    }

    pub fn shapecast(&self, moving: &Aabb, axis: Axis, max_dist: f64, filter: BoxFilter) -> f64 {
        self.shapecast_with(moving, axis, max_dist, filter, &GeometryOptions::default())
    }

    pub fn shapecast_with(
        &self,
        moving: &Aabb,
        axis: Axis,
        mut max_dist: f64,
        filter: BoxFilter,
        options: &GeometryOptions,
    ) -> f64 {
        let eps = options.epsilon;
        if max_dist.abs() < eps {
            return 0.0;
        }
        match self {
            Self::Empty => max_dist,
            Self::Collection(boxes) => {
                for obstacle in boxes {
                    if filter.is_some_and(|keep| !keep(obstacle)) {
                        continue;
                    }
                    max_dist = obstacle.collision_offset_with(axis, moving, max_dist, options);
                    if max_dist.abs() < eps {
                        log::trace!("shapecast along {:?} blocked by {:?}", axis, obstacle);
                        return 0.0;
                    }
                }
                max_dist
            }
            Self::Combined(first, second) => {
                let partial = first.shapecast_with(moving, axis, max_dist, filter, options);
                second.shapecast_with(moving, axis, partial, filter, options)
            }
        }
    }

    /// Keeps only the boxes that pass `filter` and intersect `region`.
    pub fn restrict_to(&self, region: &Aabb, filter: BoxFilter) -> Shapecaster {
        match self {
            Self::Empty => Self::Empty,
            Self::Collection(boxes) => Self::from_boxes(
                boxes
                    .iter()
                    .filter(|b| filter.is_none_or(|keep| keep(b)) && b.intersects(region))
                    .copied()
                    .collect(),
            ),
            Self::Combined(first, second) => Self::combine(
                first.restrict_to(region, filter),
                second.restrict_to(region, filter),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use test_case::test_case;

    fn unit() -> Aabb {
        Aabb::new([0.0, 0.0, 0.0], [1.0, 1.0, 1.0])
    }

    /// Walls at x = 2, 4 and 6 in front of the unit box.
    fn walls() -> Vec<Aabb> {
        vec![
            unit().offset(6.0, 0.0, 0.0),
            unit().offset(2.0, 0.0, 0.0),
            unit().offset(4.0, 0.0, 0.0),
        ]
    }

    #[test]
    fn test_collection_takes_nearest_wall() {
        let _ = env_logger::builder().is_test(true).try_init();
        let caster = Shapecaster::from_boxes(walls());
        let folded = walls()
            .iter()
            .fold(10.0, |d, w| w.collision_offset(Axis::X, &unit(), d));
        assert_eq!(caster.shapecast(&unit(), Axis::X, 10.0, None), 1.0);
        assert_eq!(caster.shapecast(&unit(), Axis::X, 10.0, None), folded);
        assert_eq!(caster.shapecast(&unit(), Axis::X, -10.0, None), -10.0);
    }

    #[test_case(5e-8; "tiny positive")]
    #[test_case(-5e-8; "tiny negative")]
    #[test_case(0.0; "zero")]
    fn test_tiny_distance_snaps_to_zero(max_dist: f64) {
        let caster = Shapecaster::from_boxes(walls());
        assert_eq!(caster.shapecast(&unit(), Axis::X, max_dist, None), 0.0);
        assert_eq!(Shapecaster::Empty.shapecast(&unit(), Axis::X, max_dist, None), 0.0);
    }

    #[test]
    fn test_blocked_sweep_stops_consulting_boxes() {
        let touching = unit().offset(1.0, 0.0, 0.0);
        let caster = Shapecaster::from_boxes(vec![touching, unit().offset(2.0, 0.0, 0.0)]);
        let seen = Cell::new(0usize);
        let counting = |_: &Aabb| {
            seen.set(seen.get() + 1);
            true
        };
        assert_eq!(caster.shapecast(&unit(), Axis::X, 3.0, Some(&counting)), 0.0);
        assert_eq!(seen.get(), 1);
    }

    #[test_case(2.0, 3.0; "skip nearest wall")]
    #[test_case(4.0, 1.0; "skip middle wall")]
    #[test_case(6.0, 1.0; "skip farthest wall")]
    fn test_filter_skips_rejected_boxes(skip_min_x: f64, want: f64) {
        let caster = Shapecaster::from_boxes(walls());
        let skip = |b: &Aabb| b.min(Axis::X) != skip_min_x;
        assert_eq!(caster.shapecast(&unit(), Axis::X, 10.0, Some(&skip)), want);
    }

    #[test_case(true; "empty first")]
    #[test_case(false; "empty second")]
    fn test_combine_with_empty_returns_other(empty_first: bool) {
        let other = Shapecaster::from_boxes(walls());
        let combined = if empty_first {
            Shapecaster::combine(Shapecaster::Empty, other.clone())
        } else {
            Shapecaster::combine(other.clone(), Shapecaster::Empty)
        };
        assert_eq!(combined, other);
    }

    #[test]
    fn test_combined_casts_through_both() {
        let near = Shapecaster::from_boxes(vec![unit().offset(4.0, 0.0, 0.0)]);
        let far = Shapecaster::from_boxes(vec![unit().offset(2.0, 0.0, 0.0)]);
        let combined = Shapecaster::combine(near, far);
        assert!(matches!(combined, Shapecaster::Combined(..)));
        assert_eq!(combined.shapecast(&unit(), Axis::X, 10.0, None), 1.0);
    }

    #[test]
    fn test_from_boxes_and_is_empty() {
        assert_eq!(Shapecaster::from_boxes(Vec::new()), Shapecaster::Empty);
        let degenerate = Aabb::new([0.0, 0.0, 0.0], [0.0, 1.0, 1.0]);
        assert!(Shapecaster::from_boxes(vec![degenerate]).is_empty());
        assert!(!Shapecaster::from_boxes(walls()).is_empty());
    }

    #[test]
    fn test_restrict_to_keeps_intersecting_boxes() {
        let caster = Shapecaster::combine(
            Shapecaster::from_boxes(walls()),
            Shapecaster::from_boxes(vec![unit().offset(0.0, 5.0, 0.0)]),
        );
        let region = Aabb::new([1.5, 0.0, 0.0], [4.5, 1.0, 1.0]);
        let restricted = caster.restrict_to(&region, None);
        assert_eq!(
            restricted,
            Shapecaster::Collection(vec![unit().offset(2.0, 0.0, 0.0), unit().offset(4.0, 0.0, 0.0)])
        );

        let only_far = |b: &Aabb| b.min(Axis::X) > 3.0;
        assert_eq!(
            caster.restrict_to(&region, Some(&only_far)),
            Shapecaster::Collection(vec![unit().offset(4.0, 0.0, 0.0)])
        );
        assert_eq!(caster.restrict_to(&unit().offset(0.0, -9.0, 0.0), None), Shapecaster::Empty);
    }
}
