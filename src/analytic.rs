//! Table-free lattice counting by summing column heights.
//!
//! `count = 4 * (floor(r) + sum_{x=1}^{floor(r)} floor(sqrt(r^2 - x^2))) + 1`
//!
//! Exact in real arithmetic, but each column height goes through an `f32` square root.
//! When `r` sits exactly on a breakpoint the rounding can drop or add a few edge cells,
//! so use it as an approximate cross-check, not as an oracle.

use crate::lattice::lattice_point_count;
use crate::pattern::MAX_MAX_RADIUS;
use crate::query::check_radius;

/// Columns evaluated per batch
const LANES: usize = 8;

const SATURATED_COUNT: usize = lattice_point_count(MAX_MAX_RADIUS);

/// Lattice points within `radius` of the origin, computed without a pattern table.
///
/// Radii at or beyond [`MAX_MAX_RADIUS`] saturate to the count at that radius, the same
/// ceiling the largest table stops at.
///
/// # Example
/// ```
/// use radial_pattern::analytic::analytic_count;
/// assert_eq!(analytic_count(-1.0), 0);
/// assert_eq!(analytic_count(0.5), 1);
/// assert_eq!(analytic_count(1.5), 9);
/// assert_eq!(analytic_count(10.5), 349);
/// assert_eq!(analytic_count(f32::INFINITY), analytic_count(4096.0));
/// ```
pub fn analytic_count(radius: f32) -> usize {
    if radius.is_nan() || radius < 0.0 {
        return 0;
    }
    if radius < 1.0 {
        return 1;
    }
    if radius >= MAX_MAX_RADIUS as f32 {
        check_radius(radius, MAX_MAX_RADIUS);
        return SATURATED_COUNT;
    }

    let r_floor = radius as u32;
    let r_squared = radius * radius;
    let mut sum = r_floor as usize;

    let mut column = 1u32;
    while column <= r_floor {
        let lanes = ((r_floor - column) as usize + 1).min(LANES);
        let mut heights = [0u32; LANES];
        for (lane, height) in heights.iter_mut().enumerate() {
            let x = (column as usize + lane) as f32;
            *height = (r_squared - x * x).max(0.0).sqrt() as u32;
        }
        sum += heights[..lanes].iter().map(|&h| h as usize).sum::<usize>();
        column += LANES as u32;
    }

    4 * sum + 1
}
