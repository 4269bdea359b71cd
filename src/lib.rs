// SPDX-License-Identifier: Apache-2.0

//! Canonical shared instances for the sixteen binary Boolean functions.
//!
//! Any predicate over two booleans is identified with one of 16 truth tables
//! and mapped to a `&'static BinaryFn` living in a compile-time table. Equal
//! truth tables give pointer-identical instances, so callers can compare
//! combiners with `std::ptr::eq` instead of evaluating them.
//!
//! This crate provides:
//! - `TruthIndex`, the 4-bit truth-table identity, with branch-light
//!   evaluation, argument swap and output negation.
//! - The `BinaryPredicate` capability and truth-table extraction.
//! - The `Connective` enum and named statics (`AND`, `OR`, `CAUSES`, ...).
//! - Axis-aligned box composition driven by canonical functions, and sweeping
//!   a box through a set of obstacle boxes.

pub mod aabb;
pub mod connective;
pub mod predicate;
pub mod registry;
pub mod shapecast;
pub mod truth_index;

pub use connective::Connective;
pub use predicate::{BinaryPredicate, index_of, swapped_index_of};
pub use registry::{BinaryFn, canonicalize, canonicalize_swapped};
pub use truth_index::TruthIndex;
