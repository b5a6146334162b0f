//! Cell counting against a built [`PatternTable`].
//!
//! The count within a radius is the index of the first pattern entry farther than that
//! radius. Two searches locate it:
//!
//! - [`PatternTable::count_within_radius`] brackets the index with a closed-form bound on
//!   the Gauss circle count, binary searches the bracket down to a few cache lines, then
//!   steps by 8 through the only residues the count can take.
//! - [`PatternTable::count_within_radius_estimate`] starts at the area estimate `pi * r^2`
//!   and steps by 8 up or down from there.
//! - [`PatternTable::count_within_radius_huxley`] brackets `pi * r^2` by Huxley's bound
//!   on the lattice error term, `4 * r^(131/208)`, binary searches, then scans linearly.
//!
//! The first two rely on the count being `8n + 1` or `8n + 5` (see [`crate::parity`]).

use std::f32::consts::{PI, SQRT_2};

use crate::parity::has_odd_edge_parity;
use crate::pattern::PatternTable;

/// Bracket width below which the binary search hands over to stepping
const LINEAR_GAP: usize = 88;
/// Slack under the `25/8 * r^2` lower bound; the tightest case is r just below sqrt(288)
const LOWER_SLACK: usize = 16;
/// Bracket width below which the error-bound search scans one entry at a time
const SCAN_GAP: usize = 64;

/// Counts for radii below 2, where no table lookup is needed.
///
/// Negative and NaN radii contain nothing.
#[inline]
pub(crate) fn small_radius_count(radius: f32) -> Option<usize> {
    if radius.is_nan() || radius < 0.0 {
        Some(0)
    } else if radius < 1.0 {
        Some(1)
    } else if radius < SQRT_2 {
        Some(5)
    } else if radius < 2.0 {
        Some(9)
    } else {
        None
    }
}

/// Reports radii past the ceiling. Kept out of line so the query path carries no
/// formatting code.
#[cold]
#[inline(never)]
pub(crate) fn check_radius(radius: f32, max_radius: u32) {
    if radius > max_radius as f32 {
        log::error!("Not enough squares to get to radius {radius}. Max is {max_radius}");
    }
}

/// `4 * r^(131/208)` evaluated on the bit pattern of `r`, within 5% for `2 <= r <= 4096`.
///
/// Scaling the biased exponent-and-mantissa bits by the power approximates `r^p`; the
/// high half of the bits suffices at this accuracy, which folds the whole computation
/// into one multiply-add.
#[inline(always)]
fn area_error_bound(radius: f32) -> f32 {
    f32::from_bits((radius.to_bits() >> 16) * 0xA13B + 0x187F_F1C9)
}

/// Offset within an 8-aligned block at which the count can land
#[inline(always)]
fn edge_offset(radius: f32) -> usize {
    if has_odd_edge_parity(radius) { 5 } else { 1 }
}

impl PatternTable {
    /// Number of lattice points within `radius` of the origin.
    ///
    /// Radii at or beyond the ceiling saturate to [`len`](Self::len); radii strictly
    /// beyond it are also reported through `log::error!`.
    ///
    /// # Example
    /// ```
    /// use radial_pattern::PatternTable;
    /// let table = PatternTable::build(119);
    /// assert_eq!(table.count_within_radius(-1.0), 0);
    /// assert_eq!(table.count_within_radius(0.0), 1);
    /// assert_eq!(table.count_within_radius(1.0), 5);
    /// assert_eq!(table.count_within_radius(2.0), 13);
    /// assert_eq!(table.count_within_radius(119.0), table.len());
    /// ```
    pub fn count_within_radius(&self, radius: f32) -> usize {
        if let Some(count) = small_radius_count(radius) {
            return count;
        }
        let len = self.radii.len();
        if radius >= self.max_radius as f32 {
            check_radius(radius, self.max_radius);
            return len;
        }

        let radius_squared = (radius * radius) as usize;
        let mut lower = ((radius_squared * 25) >> 3).saturating_sub(LOWER_SLACK);
        let mut upper = ((radius_squared * 101) >> 5).min(len);
        while upper - lower > LINEAR_GAP {
            let mid = (lower + upper) >> 1;
            if self.radii[mid] <= radius {
                lower = mid;
            } else {
                upper = mid;
            }
        }

        let mut index = (lower & !7) | edge_offset(radius);
        while self.is_within(index, radius) {
            index += 8;
        }
        self.settle(index, radius)
    }

    /// Same count as [`count_within_radius`](Self::count_within_radius), searched from
    /// the area estimate `pi * r^2` by stepping 8 entries at a time in either direction.
    ///
    /// # Example
    /// ```
    /// use radial_pattern::PatternTable;
    /// let table = PatternTable::build(50);
    /// for r in [2.0, 7.3, 25.5, 49.99] {
    ///     assert_eq!(table.count_within_radius_estimate(r), table.count_within_radius(r));
    /// }
    /// ```
    pub fn count_within_radius_estimate(&self, radius: f32) -> usize {
        if let Some(count) = small_radius_count(radius) {
            return count;
        }
        let len = self.radii.len();
        if radius >= self.max_radius as f32 {
            check_radius(radius, self.max_radius);
            return len;
        }

        let estimate = ((PI * radius * radius) as usize).min(len);
        let mut index = (estimate & !7) | edge_offset(radius);
        if self.is_within(index, radius) {
            while self.is_within(index, radius) {
                index += 8;
            }
        } else {
            while index >= 8 && !self.is_within(index - 8, radius) {
                index -= 8;
            }
        }
        self.settle(index, radius)
    }

    /// Same count as [`count_within_radius`](Self::count_within_radius), searched inside
    /// `pi * r^2 +- 4 * r^(131/208)` and finished by a scan of at most 64 entries.
    ///
    /// # Example
    /// ```
    /// use radial_pattern::PatternTable;
    /// let table = PatternTable::build(119);
    /// for r in [2.0, 10.5, 60.0, 118.999] {
    ///     assert_eq!(table.count_within_radius_huxley(r), table.count_within_radius(r));
    /// }
    /// ```
    pub fn count_within_radius_huxley(&self, radius: f32) -> usize {
        if let Some(count) = small_radius_count(radius) {
            return count;
        }
        let len = self.radii.len();
        if radius >= self.max_radius as f32 {
            check_radius(radius, self.max_radius);
            return len;
        }

        let estimate = PI * radius * radius;
        let error_bound = area_error_bound(radius);
        let mut lower = ((estimate - error_bound).floor() as usize).max(1);
        let mut upper = ((estimate + error_bound).ceil() as usize).min(len);
        while upper - lower > SCAN_GAP {
            let mid = (lower + upper) >> 1;
            if self.radii[mid] > radius {
                upper = mid;
            } else {
                lower = mid;
            }
        }

        let mut count = lower;
        while count < upper && self.radii[count] <= radius {
            count += 1;
        }
        count
    }

    /// True when entry `index` exists and lies within `radius`, i.e. `index < count`.
    #[inline(always)]
    fn is_within(&self, index: usize, radius: f32) -> bool {
        self.radii.get(index).is_some_and(|&r| r <= radius)
    }

    /// `index` is the first entry of its residue class beyond `radius`. The parity of
    /// `r * sqrt(1/2)` can disagree with the stored diagonal radii when `r` sits on a
    /// diagonal breakpoint, leaving the count 4 below.
    #[inline(always)]
    fn settle(&self, index: usize, radius: f32) -> usize {
        if self.is_within(index - 4, radius) { index } else { index - 4 }
    }
}
