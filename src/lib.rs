//! # Radial Pattern - Fast Gauss Circle Counting
//!
//! A Rust library that answers one query fast: how many integer lattice points
//! `(x, z)` lie within radius `r` of the origin, i.e. satisfy `x² + z² <= r²`.
//!
//! ## Features
//!
//! - **One-Octant Build**: Scans and sorts only 1/8 of the circle, then reflects it into
//!   a full pattern that comes out sorted by distance
//! - **Bracketed Search**: Closed-form bounds on the circle count, binary search, then
//!   stepping through every 8th entry only
//! - **Bit-Level Parity**: The `8n + 1` / `8n + 5` residue of the count read straight from
//!   the IEEE-754 layout of the radius
//! - **Pluggable**: Strategies behind a [`CellCounter`](strategy::CellCounter) trait and
//!   a [`CellCountHook`](strategy::CellCountHook) slot a host can install them into
//!
//! ## Quick Start
//!
//! ```rust
//! use radial_pattern::prelude::*;
//!
//! // Build once, up to the largest radius you will ask about
//! let table = PatternTable::build(119);
//! assert_eq!(table.len(), 44_469);
//!
//! // Then query as often as you like
//! assert_eq!(table.count_within_radius(0.0), 1);
//! assert_eq!(table.count_within_radius(1.0), 5);
//! assert_eq!(table.count_within_radius(1.5), 9);
//! assert_eq!(table.count_within_radius(10.5), 349);
//!
//! // The points themselves, closest first
//! let (point, radius) = table.get(1).unwrap();
//! assert_eq!(point.length_squared(), 1);
//! assert_eq!(radius, 1.0);
//! ```
//!
//! ## How It Works
//!
//! Lattice points within a circle have eight-fold symmetry, so the pattern is built from
//! the octant `0 <= z <= x`: about an eighth of the points are sorted, and each one is
//! mirrored into its 4, 6 or 8 images while the output is filled back to front.
//!
//! The count within `r` is the index of the first pattern entry beyond `r`. Points on the
//! axes come in fours, points on the diagonals come in fours, everything else in eights,
//! so that index is always `8n + 1` or `8n + 5`. The query brackets the index with
//! `25/8 * r²` and `101/32 * r²`, binary searches until the bracket is small, then steps 8
//! entries at a time through the right residue.

pub mod analytic;
pub mod lattice;
pub mod parity;
pub mod pattern;
pub mod prelude;
pub mod query;
pub mod strategy;

mod comparison_tests;

pub use lattice::{lattice_point_count, LatticePoint};
pub use pattern::{BuildError, PatternTable, DEFAULT_MAX_RADIUS, DEFAULT_PATTERN_LEN};
