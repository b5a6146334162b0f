//! Radial pattern construction.
//!
//! The pattern lists every lattice point within a fixed ceiling radius, sorted by
//! distance from the origin, alongside a parallel array of those distances.
//!
//! Only one octant (`0 <= z <= x`) is scanned and sorted. Every octant entry is then
//! reflected into its 4, 6 or 8 symmetric images while the output is written back to
//! front, so the full table comes out sorted without ever sorting it.

use std::time::Instant;

use crate::lattice::{lattice_point_count, LatticePoint};

/// Ceiling radius of the production pattern
pub const DEFAULT_MAX_RADIUS: u32 = 200;
/// Number of lattice points within [`DEFAULT_MAX_RADIUS`]
pub const DEFAULT_PATTERN_LEN: usize = lattice_point_count(DEFAULT_MAX_RADIUS);

/// Smallest ceiling the builder accepts; the first octant entries are assumed sorted
pub const MIN_MAX_RADIUS: u32 = 4;
/// Largest ceiling the builder accepts, so that every squared radius is exact in `f32`
pub const MAX_MAX_RADIUS: u32 = 4096;

/// Octant entries (0,0) (1,0) (1,1) (2,0) (2,1) (2,2) (3,0) (3,1) (3,2) come out of the
/// scan already in distance order.
const SORTED_PREFIX: usize = 9;

/// Errors raised while building a [`PatternTable`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum BuildError {
    /// The ceiling is below [`MIN_MAX_RADIUS`]
    #[error("max radius {max_radius} is below the minimum of {min}", min = MIN_MAX_RADIUS)]
    RadiusTooSmall {
        /// Requested ceiling
        max_radius: u32,
    },
    /// The ceiling is above [`MAX_MAX_RADIUS`]
    #[error("max radius {max_radius} exceeds the maximum of {max}", max = MAX_MAX_RADIUS)]
    RadiusTooLarge {
        /// Requested ceiling
        max_radius: u32,
    },
    /// The precomputed table length does not match the lattice count for the ceiling
    #[error("pattern for max radius {max_radius} holds {expected} points, but {actual} were requested")]
    LengthMismatch {
        /// Requested ceiling
        max_radius: u32,
        /// Exact lattice point count within `max_radius`
        expected: usize,
        /// Length supplied by the caller
        actual: usize,
    },
}

/// Builder-local octant entry; the squared radius is the sort key.
#[derive(Clone, Copy, Debug)]
struct OctantEntry {
    x: i32,
    z: i32,
    radius_squared: i32,
}

/// Immutable table of lattice points sorted by distance from the origin.
///
/// `points[i]` and `radii[i]` describe the same point, `radii` is non-decreasing and
/// starts at the origin. The table can only be obtained from a build, so every query
/// runs against a fully populated pattern.
#[derive(Clone, Debug)]
pub struct PatternTable {
    /// Lattice points in distance order
    pub(crate) points: Vec<LatticePoint>,
    /// Distance of each point from the origin
    pub(crate) radii: Vec<f32>,
    /// Ceiling radius the table was built for
    pub(crate) max_radius: u32,
}

impl PatternTable {
    /// Builds the pattern for every lattice point within `max_radius`
    ///
    /// # Panics
    /// Panics if `max_radius` is outside `MIN_MAX_RADIUS..=MAX_MAX_RADIUS`.
    ///
    /// # Example
    /// ```
    /// use radial_pattern::PatternTable;
    /// let table = PatternTable::build(10);
    /// assert_eq!(table.len(), 317);
    /// assert_eq!(table.radii()[0], 0.0);
    /// assert_eq!(table.max_pattern_radius(), 10.0);
    /// ```
    pub fn build(max_radius: u32) -> Self {
        match Self::try_build_with_len(max_radius, lattice_point_count(max_radius)) {
            Ok(table) => table,
            Err(err) => panic!("invalid radial pattern configuration: {err}"),
        }
    }

    /// Builds the production pattern ([`DEFAULT_MAX_RADIUS`], [`DEFAULT_PATTERN_LEN`] points)
    pub fn build_default() -> Self {
        Self::build(DEFAULT_MAX_RADIUS)
    }

    /// Builds the pattern into a table of a precomputed length.
    ///
    /// The length must be the exact lattice point count within `max_radius`; anything
    /// else would leave slots unwritten or overrun the output, so it is rejected up front.
    ///
    /// # Errors
    /// Returns [`BuildError`] if the ceiling is out of range or `expected_len` is wrong.
    ///
    /// # Example
    /// ```
    /// use radial_pattern::{BuildError, PatternTable};
    /// assert!(PatternTable::try_build_with_len(119, 44_469).is_ok());
    /// assert!(matches!(
    ///     PatternTable::try_build_with_len(119, 44_468),
    ///     Err(BuildError::LengthMismatch { expected: 44_469, .. })
    /// ));
    /// ```
    pub fn try_build_with_len(max_radius: u32, expected_len: usize) -> Result<Self, BuildError> {
        if max_radius < MIN_MAX_RADIUS {
            return Err(BuildError::RadiusTooSmall { max_radius });
        }
        if max_radius > MAX_MAX_RADIUS {
            return Err(BuildError::RadiusTooLarge { max_radius });
        }
        let expected = lattice_point_count(max_radius);
        if expected_len != expected {
            return Err(BuildError::LengthMismatch {
                max_radius,
                expected,
                actual: expected_len,
            });
        }

        let start = Instant::now();
        let octant = scan_octant(max_radius, expected_len);
        let table = reflect_octant(&octant, expected_len, max_radius);
        log::debug!(
            "radial pattern built: max radius {}, {} points from {} octant entries in {:.3?}",
            max_radius,
            table.len(),
            octant.len(),
            start.elapsed()
        );
        Ok(table)
    }

    /// Number of points in the pattern
    pub fn len(&self) -> usize {
        self.radii.len()
    }

    /// Whether the table has no entries. Never true for a built table, which holds the origin
    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }

    /// Ceiling radius the table was built for
    pub fn max_radius(&self) -> u32 {
        self.max_radius
    }

    /// Largest radius in the pattern. Equal to [`max_radius`](Self::max_radius) since
    /// `(max_radius, 0)` is always a lattice point.
    pub fn max_pattern_radius(&self) -> f32 {
        self.radii[self.radii.len() - 1]
    }

    /// Lattice points in distance order
    pub fn points(&self) -> &[LatticePoint] {
        &self.points
    }

    /// Distances from the origin, parallel to [`points`](Self::points)
    pub fn radii(&self) -> &[f32] {
        &self.radii
    }

    /// Returns the point and its radius at `index`, if present
    pub fn get(&self, index: usize) -> Option<(LatticePoint, f32)> {
        Some((*self.points.get(index)?, *self.radii.get(index)?))
    }
}

/// Scans the octant `0 <= z <= x` in column order and sorts it by squared radius.
fn scan_octant(max_radius: u32, pattern_len: usize) -> Vec<OctantEntry> {
    let max_radius = max_radius as i32;
    let max_radius_squared = max_radius * max_radius;

    let mut octant = Vec::with_capacity(pattern_len / 8 + max_radius as usize + 2);
    octant.push(OctantEntry { x: 0, z: 0, radius_squared: 0 });

    for x in 1..=max_radius {
        let x_squared = x * x;
        // Inside the diagonal the column is cut off by z <= x, past it by the arc
        let max_z_squared = if 2 * x_squared <= max_radius_squared {
            x_squared
        } else {
            max_radius_squared - x_squared
        };
        let mut z = 0;
        while z * z <= max_z_squared {
            octant.push(OctantEntry { x, z, radius_squared: x_squared + z * z });
            z += 1;
        }
    }

    // The last entry is (max_radius, 0), which no other entry exceeds
    let last = octant.len() - 1;
    octant[SORTED_PREFIX..last].sort_unstable_by_key(|entry| entry.radius_squared);
    octant
}

/// Output cursor for the reflection pass, moving from the back of the table to the front.
struct ReflectionWriter {
    points: Vec<LatticePoint>,
    radii: Vec<f32>,
    cursor: usize,
}

impl ReflectionWriter {
    fn with_len(len: usize) -> Self {
        Self {
            points: vec![LatticePoint::default(); len],
            radii: vec![0.0; len],
            cursor: len,
        }
    }

    #[inline(always)]
    fn emit(&mut self, x: i32, z: i32, radius: f32) {
        self.cursor -= 1;
        self.points[self.cursor] = LatticePoint::new(x, z);
        self.radii[self.cursor] = radius;
    }
}

/// Materializes the symmetric images of every octant entry, largest radius first.
fn reflect_octant(octant: &[OctantEntry], pattern_len: usize, max_radius: u32) -> PatternTable {
    let mut out = ReflectionWriter::with_len(pattern_len);

    // Entry 0 is the origin, which already sits at slot 0
    for entry in octant[1..].iter().rev() {
        let OctantEntry { x, z, radius_squared } = *entry;
        let radius = (radius_squared as f32).sqrt();

        // Axis reflections
        out.emit(x, z, radius);
        out.emit(-x, z, radius);
        if z != 0 {
            out.emit(-x, -z, radius);
            out.emit(x, -z, radius);
        }
        if x == z {
            continue;
        }
        // Diagonal reflections
        out.emit(z, x, radius);
        out.emit(z, -x, radius);
        if z != 0 {
            out.emit(-z, x, radius);
            out.emit(-z, -x, radius);
        }
    }
    assert_eq!(out.cursor, 1, "reflection pass must fill every slot but the origin");

    PatternTable {
        points: out.points,
        radii: out.radii,
        max_radius,
    }
}
